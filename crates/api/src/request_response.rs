// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use time::OffsetDateTime;
use uni_apply_domain::ApplicationForm;

/// API request to submit a new application.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitApplicationRequest {
    /// The caller-assigned application identifier.
    pub application_id: String,
    /// The form data gathered so far. Program and university must be
    /// chosen; everything else may still be blank.
    pub form: ApplicationForm,
}

/// API response for a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitApplicationResponse {
    /// The application identifier.
    pub application_id: String,
    /// The canonical status token.
    pub status: String,
    /// The human-readable status label.
    pub status_label: String,
    /// The event ID of the persisted timeline event.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to move an application to a new status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateStatusRequest {
    /// The status to move to. Legacy vocabulary (e.g. `documents`,
    /// `pending`) is accepted and normalized.
    pub new_status: String,
    /// Optional reviewer note explaining the change.
    pub note: Option<String>,
}

/// API response for a successful status update.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateStatusResponse {
    /// The application identifier.
    pub application_id: String,
    /// The canonical status token after the update.
    pub status: String,
    /// The human-readable status label.
    pub status_label: String,
    /// The event ID of the persisted timeline event.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}

/// A single application as presented by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApplicationInfo {
    /// The application identifier.
    pub application_id: String,
    /// The canonical status token.
    pub status: String,
    /// The human-readable status label.
    pub status_label: String,
    /// The icon name for this status.
    pub status_icon: String,
    /// The CSS class for this status.
    pub status_color_class: String,
    /// Form completion, 0 to 100.
    pub completion_percent: u8,
    /// The form data.
    pub form: ApplicationForm,
    /// When the application was submitted.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the application was last changed.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// API response for listing applications.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListApplicationsResponse {
    /// The applications, oldest submission first.
    pub applications: Vec<ApplicationInfo>,
}

/// A single timeline event as presented by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimelineEventInfo {
    /// The store-assigned event ID. `None` for synthesized events.
    pub event_id: Option<i64>,
    /// The canonical status token this event recorded.
    pub status: String,
    /// The human-readable status label.
    pub status_label: String,
    /// Optional note attached to the event.
    pub note: Option<String>,
    /// Who caused the event, when known.
    pub created_by: Option<String>,
    /// When the event occurred.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// API response for an application timeline.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetTimelineResponse {
    /// The application identifier.
    pub application_id: String,
    /// True if the events were fabricated rather than read from a store.
    pub synthesized: bool,
    /// The events, oldest first.
    pub events: Vec<TimelineEventInfo>,
}

/// API response for an application's form progress.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetProgressResponse {
    /// The application identifier.
    pub application_id: String,
    /// Form completion, 0 to 100.
    pub completion_percent: u8,
}
