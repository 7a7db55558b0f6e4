pub mod models;
pub mod change_set;
pub mod interceptor;
pub mod coordinator;
pub mod utils;

// Re-exports
pub use models::*;
pub use change_set::*;
pub use interceptor::*;
pub use coordinator::*;
