/*!
 * Process Module
 * Process registry, state machine, and queue management
 */

pub mod defaults;
mod execution;
pub mod lifecycle;
pub mod manager;
pub mod queues;
pub mod registry;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use defaults::{AttributeRange, AttributeSampler};
pub use lifecycle::Operation;
pub use manager::ProcessManager;
pub use queues::{QueueManager, QueueSnapshot};
pub use registry::ProcessRegistry;
pub use traits::ProcessLifecycle;
pub use types::{Attributes, Process, ProcessSpec, ProcessState};
