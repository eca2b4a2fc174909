pub mod entities;
pub mod orchestrator;
pub mod ports;
pub mod prompt;
pub mod prompts;
pub mod services;
pub mod tools;
pub mod value_objects;

#[cfg(test)]
pub(crate) mod test_support;

pub use entities::*;
pub use orchestrator::{AdvisoryOrchestrator, Envelope, FailureKind};
pub use ports::*;
pub use value_objects::*;
