//! # Framework Errors
//!
//! Failures of the actor plumbing itself. Business outcomes such as "not found" are never
//! errors here; they come back as `None` or `false`.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
}
