// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timeline event queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use uni_apply_domain::ApplicationId;
use uni_apply_timeline::TimelineEvent;

use crate::data_models::TimelineEventRow;
use crate::diesel_schema::timeline_events;
use crate::error::PersistenceError;

/// Retrieves the ordered timeline for an application.
///
/// Events come back ascending by `created_at`, with insertion order
/// breaking ties. An application with no history yields an empty list,
/// not an error.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `application_id` - The application whose history to load
///
/// # Errors
///
/// Returns an error if events cannot be retrieved or decoded.
pub fn get_timeline_events(
    conn: &mut SqliteConnection,
    application_id: &ApplicationId,
) -> Result<Vec<TimelineEvent>, PersistenceError> {
    tracing::debug!(application_id = %application_id, "Retrieving timeline");

    let rows: Vec<TimelineEventRow> = timeline_events::table
        .filter(timeline_events::application_id.eq(application_id.value()))
        .order(timeline_events::event_id.asc())
        .select(TimelineEventRow::as_select())
        .load::<TimelineEventRow>(conn)?;

    let mut events: Vec<TimelineEvent> = rows
        .into_iter()
        .map(TimelineEventRow::into_event)
        .collect::<Result<Vec<TimelineEvent>, PersistenceError>>()?;

    // Timestamps are stored as RFC 3339 text, which does not sort
    // lexicographically once subsecond digits differ. The stable sort
    // keeps event_id order for events sharing an instant.
    events.sort_by_key(|event| event.created_at);

    tracing::info!(
        application_id = %application_id,
        event_count = events.len(),
        "Retrieved timeline"
    );

    Ok(events)
}
