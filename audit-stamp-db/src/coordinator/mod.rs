pub mod commit_batch;
pub mod save_coordinator;

// Re-exports
pub use commit_batch::*;
pub use save_coordinator::*;
