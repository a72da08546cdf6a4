// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and row/domain conversions.
//!
//! Form data is stored as a JSON column; timestamps are stored as RFC
//! 3339 text. Conversion failures surface as `ReconstructionError` or
//! `SerializationError` rather than panics.

use diesel::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uni_apply_domain::{Application, ApplicationForm, ApplicationId, ApplicationStatus};
use uni_apply_timeline::TimelineEvent;

use crate::diesel_schema::{applications, timeline_events};
use crate::error::PersistenceError;

/// Formats a timestamp for storage.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub(crate) fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    value
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

/// Parses a stored timestamp.
///
/// # Errors
///
/// Returns an error if the stored text is not valid RFC 3339.
pub(crate) fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Rfc3339)
        .map_err(|e| PersistenceError::ReconstructionError(format!("Bad timestamp '{value}': {e}")))
}

fn parse_status(value: &str) -> Result<ApplicationStatus, PersistenceError> {
    value
        .parse::<ApplicationStatus>()
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
}

/// Diesel Queryable struct for application rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = applications)]
pub(crate) struct ApplicationRow {
    pub id: String,
    pub status: String,
    pub form_json: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ApplicationRow {
    /// Reconstructs the domain application from this row.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored status, form JSON, or timestamps
    /// cannot be decoded.
    pub(crate) fn into_application(self) -> Result<Application, PersistenceError> {
        let status: ApplicationStatus = parse_status(&self.status)?;
        let form: ApplicationForm = serde_json::from_str(&self.form_json)?;

        Ok(Application {
            id: ApplicationId::new(&self.id),
            status,
            form,
            created_at: parse_timestamp(&self.created_at)?,
            updated_at: parse_timestamp(&self.updated_at)?,
        })
    }
}

/// Diesel Insertable struct for application rows.
#[derive(Insertable)]
#[diesel(table_name = applications)]
pub(crate) struct NewApplicationRow {
    pub id: String,
    pub status: String,
    pub form_json: String,
    pub created_at: String,
    pub updated_at: String,
}

impl NewApplicationRow {
    /// Builds an insertable row from a domain application.
    ///
    /// # Errors
    ///
    /// Returns an error if the form cannot be serialized or a timestamp
    /// cannot be formatted.
    pub(crate) fn from_application(application: &Application) -> Result<Self, PersistenceError> {
        Ok(Self {
            id: application.id.value().to_string(),
            status: application.status.as_str().to_string(),
            form_json: serde_json::to_string(&application.form)?,
            created_at: format_timestamp(application.created_at)?,
            updated_at: format_timestamp(application.updated_at)?,
        })
    }
}

/// Diesel Queryable struct for timeline event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = timeline_events)]
pub(crate) struct TimelineEventRow {
    pub event_id: i64,
    pub application_id: String,
    pub status: String,
    pub note: Option<String>,
    pub created_by: Option<String>,
    pub created_at: String,
}

impl TimelineEventRow {
    /// Reconstructs the domain timeline event from this row.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored status or timestamp cannot be
    /// decoded.
    pub(crate) fn into_event(self) -> Result<TimelineEvent, PersistenceError> {
        let status: ApplicationStatus = parse_status(&self.status)?;
        let created_at: OffsetDateTime = parse_timestamp(&self.created_at)?;

        Ok(TimelineEvent::with_id(
            self.event_id,
            ApplicationId::new(&self.application_id),
            status,
            self.note,
            self.created_by,
            created_at,
        ))
    }
}

/// Diesel Insertable struct for timeline event rows.
#[derive(Insertable)]
#[diesel(table_name = timeline_events)]
pub(crate) struct NewTimelineEventRow {
    pub application_id: String,
    pub status: String,
    pub note: Option<String>,
    pub created_by: Option<String>,
    pub created_at: String,
}

impl NewTimelineEventRow {
    /// Builds an insertable row from a domain timeline event.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted.
    pub(crate) fn from_event(event: &TimelineEvent) -> Result<Self, PersistenceError> {
        Ok(Self {
            application_id: event.application_id.value().to_string(),
            status: event.status.as_str().to_string(),
            note: event.note.clone(),
            created_by: event.created_by.clone(),
            created_at: format_timestamp(event.created_at)?,
        })
    }
}
