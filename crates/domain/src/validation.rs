// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission-time validation rules.

use crate::error::DomainError;
use crate::types::Application;

/// Validates that an application is well-formed enough to submit.
///
/// Submission requires a non-empty identifier and a chosen program and
/// university. Everything else may be filled in later; the progress
/// projector reports how much is missing.
///
/// # Errors
///
/// Returns an error naming the first rule that fails.
pub fn validate_submission(application: &Application) -> Result<(), DomainError> {
    if application.id.is_empty() {
        return Err(DomainError::InvalidApplicationId(
            "identifier cannot be empty".to_string(),
        ));
    }

    let program_chosen: bool = application
        .form
        .program
        .as_deref()
        .is_some_and(|p| !p.trim().is_empty());
    if !program_chosen {
        return Err(DomainError::InvalidProgram(
            "a program must be selected before submission".to_string(),
        ));
    }

    let university_chosen: bool = application
        .form
        .university
        .as_deref()
        .is_some_and(|u| !u.trim().is_empty());
    if !university_chosen {
        return Err(DomainError::InvalidUniversity(
            "a university must be selected before submission".to_string(),
        ));
    }

    Ok(())
}
