// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uni_apply_domain::{ApplicationId, ApplicationStatus};

/// An immutable status-change event on an application's timeline.
///
/// Every status transition records exactly one event. Events are
/// append-only: once created they are never mutated or deleted, and the
/// store returns them in non-decreasing `created_at` order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// The database-assigned event ID. `None` until persisted, and always
    /// `None` for synthesized events.
    pub event_id: Option<i64>,
    /// The application this event belongs to.
    pub application_id: ApplicationId,
    /// The status the application moved to.
    pub status: ApplicationStatus,
    /// Optional free-text explanation.
    pub note: Option<String>,
    /// Optional reference to the actor who caused the change.
    pub created_by: Option<String>,
    /// When the event occurred.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl TimelineEvent {
    /// Creates a new, not-yet-persisted timeline event.
    #[must_use]
    pub const fn new(
        application_id: ApplicationId,
        status: ApplicationStatus,
        note: Option<String>,
        created_by: Option<String>,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            event_id: None,
            application_id,
            status,
            note,
            created_by,
            created_at,
        }
    }

    /// Creates a timeline event carrying its persisted ID.
    ///
    /// Used when reconstructing events from the database.
    #[must_use]
    pub const fn with_id(
        event_id: i64,
        application_id: ApplicationId,
        status: ApplicationStatus,
        note: Option<String>,
        created_by: Option<String>,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            event_id: Some(event_id),
            application_id,
            status,
            note,
            created_by,
            created_at,
        }
    }
}
