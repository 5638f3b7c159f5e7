//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Revalidation sweep: drops cached content past its validity window

mod cleanup;

pub use cleanup::spawn_cleanup_task;
