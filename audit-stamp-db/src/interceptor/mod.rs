pub mod audit_interceptor;

// Re-exports
pub use audit_interceptor::*;
