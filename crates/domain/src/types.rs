// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Core domain entity types.

use crate::application_status::ApplicationStatus;
use crate::progress::ApplicationForm;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Unique identifier for an application.
///
/// Identifiers are caller-assigned opaque strings (e.g., `"APP-1234"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Creates a new application identifier.
    ///
    /// Surrounding whitespace is trimmed; validity is checked at the
    /// submission boundary, not here.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.trim().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student's application to a university program.
///
/// The external store is the source of truth; this struct is the in-core
/// representation used for validation and transition logic. Applications
/// are never hard-deleted, only moved through soft status changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// The application identifier.
    pub id: ApplicationId,
    /// The current lifecycle status.
    pub status: ApplicationStatus,
    /// The (possibly partial) form data.
    pub form: ApplicationForm,
    /// When the application was submitted.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the application was last changed.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Application {
    /// Creates a new application in the `Submitted` stage.
    #[must_use]
    pub const fn new(id: ApplicationId, form: ApplicationForm, now: OffsetDateTime) -> Self {
        Self {
            id,
            status: ApplicationStatus::Submitted,
            form,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a copy of this application with a new status.
    #[must_use]
    pub fn with_status(&self, status: ApplicationStatus, now: OffsetDateTime) -> Self {
        Self {
            status,
            updated_at: now,
            ..self.clone()
        }
    }
}
