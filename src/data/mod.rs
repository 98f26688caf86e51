pub mod sink;
pub mod source;

// Re-export key operations for convenience
pub use sink::write_parquet;
pub use source::read_csv;
