//! File output: CSV export of batch results.

pub mod export;
