pub mod types;

// Re-export cache types
pub use types::*;
