// src/data_input/mod.rs

pub mod csv_parser;
pub mod export_metadata;
pub mod student_data;

// src/data_input/mod.rs
