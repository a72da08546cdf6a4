// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Application identifier is empty or invalid.
    InvalidApplicationId(String),
    /// Program selection is empty or invalid.
    InvalidProgram(String),
    /// University selection is empty or invalid.
    InvalidUniversity(String),
    /// Status string is not a recognized application status.
    InvalidStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// A status transition is not permitted by the lifecycle rules.
    InvalidStatusTransition {
        /// The status transitioning from.
        from: String,
        /// The status transitioning to.
        to: String,
        /// Why the transition is not allowed.
        reason: String,
    },
    /// Application does not exist.
    ApplicationNotFound(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidApplicationId(msg) => write!(f, "Invalid application id: {msg}"),
            Self::InvalidProgram(msg) => write!(f, "Invalid program: {msg}"),
            Self::InvalidUniversity(msg) => write!(f, "Invalid university: {msg}"),
            Self::InvalidStatus { status } => {
                write!(f, "'{status}' is not a recognized application status")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition from '{from}' to '{to}': {reason}")
            }
            Self::ApplicationNotFound(id) => write!(f, "Application '{id}' not found"),
        }
    }
}

impl std::error::Error for DomainError {}
