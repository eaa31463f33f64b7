//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_role_repository;
mod tracing_role_notifier;

pub use in_memory_role_repository::InMemoryRoleRepository;
pub use tracing_role_notifier::TracingRoleNotifier;
