// src/data_analysis/mod.rs

pub mod correlation;
pub mod descriptive;
pub mod histogram;
pub mod kde;

// src/data_analysis/mod.rs
