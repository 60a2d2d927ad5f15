//! Error types for configuration and expansion.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A numeric input field could not be parsed or is out of range.
    #[error("Invalid configuration: {field} = {value:?} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Expansion would produce an instruction string longer than the ceiling.
    #[error("Instruction limit exceeded at iteration {iteration}: {len} > {max} symbols")]
    InstructionLimit {
        iteration: usize,
        len: usize,
        max: usize,
    },

    /// Expansion would produce more symbols in total than the work budget allows.
    #[error("Work limit exceeded at iteration {iteration}: {work} > {max} symbols produced")]
    WorkLimit {
        iteration: usize,
        work: usize,
        max: usize,
    },
}

impl Error {
    pub(crate) fn invalid(field: &'static str, value: &str, reason: &'static str) -> Self {
        Self::InvalidConfig {
            field,
            value: value.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
