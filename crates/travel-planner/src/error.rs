//! Error Types for Travel Planner

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlannerError>;

#[derive(Error, Debug)]
pub enum PlannerError {
    /// A tool argument was missing, of the wrong shape, or out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<PlannerError> for agent_core::AgentError {
    fn from(err: PlannerError) -> Self {
        match err {
            PlannerError::InvalidArgument(msg) => agent_core::AgentError::ToolValidation(msg),
        }
    }
}
