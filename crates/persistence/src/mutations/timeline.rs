// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timeline event mutations.
//!
//! Events are append-only. There is deliberately no update or delete
//! here; history is immutable once written.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use uni_apply_timeline::TimelineEvent;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::NewTimelineEventRow;
use crate::diesel_schema::timeline_events;
use crate::error::PersistenceError;

/// Appends one timeline event.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `event` - The event to append
///
/// # Returns
///
/// The event ID assigned by the database.
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
pub fn append_timeline_event(
    conn: &mut SqliteConnection,
    event: &TimelineEvent,
) -> Result<i64, PersistenceError> {
    debug!(
        application_id = %event.application_id,
        status = event.status.as_str(),
        "Appending timeline event"
    );

    let row: NewTimelineEventRow = NewTimelineEventRow::from_event(event)?;

    diesel::insert_into(timeline_events::table)
        .values(&row)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
