// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use uni_apply_domain::DomainError;

/// Errors that can occur while applying a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The command violated a domain rule.
    DomainViolation(DomainError),
    /// The command could not be applied to the given application.
    InvalidCommand(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain rule violation: {err}"),
            Self::InvalidCommand(msg) => write!(f, "Invalid command: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
