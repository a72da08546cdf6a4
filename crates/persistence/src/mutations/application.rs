// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application row mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use uni_apply_domain::Application;

use crate::data_models::{NewApplicationRow, format_timestamp};
use crate::diesel_schema::applications;
use crate::error::PersistenceError;

/// Inserts a new application row.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `application` - The application to insert
///
/// # Errors
///
/// Returns `DuplicateApplication` if a row with the same ID exists, or
/// an error if serialization or the insert fails.
pub fn insert_application(
    conn: &mut SqliteConnection,
    application: &Application,
) -> Result<(), PersistenceError> {
    debug!(application_id = %application.id, "Inserting application");

    let row: NewApplicationRow = NewApplicationRow::from_application(application)?;

    let result = diesel::insert_into(applications::table)
        .values(&row)
        .execute(conn);

    match result {
        Ok(_) => Ok(()),
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )) => Err(PersistenceError::DuplicateApplication(
            application.id.value().to_string(),
        )),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Updates the status and `updated_at` columns of an application row.
///
/// # Arguments
///
/// * `conn` - The active database connection
/// * `application` - The application carrying the new status
///
/// # Errors
///
/// Returns `ApplicationNotFound` if no row was updated, or an error if
/// the update fails.
pub fn update_application_status(
    conn: &mut SqliteConnection,
    application: &Application,
) -> Result<(), PersistenceError> {
    debug!(
        application_id = %application.id,
        status = application.status.as_str(),
        "Updating application status"
    );

    let updated_at: String = format_timestamp(application.updated_at)?;
    let affected: usize = diesel::update(
        applications::table.filter(applications::id.eq(application.id.value())),
    )
    .set((
        applications::status.eq(application.status.as_str()),
        applications::updated_at.eq(updated_at),
    ))
    .execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::ApplicationNotFound(
            application.id.value().to_string(),
        ));
    }

    Ok(())
}
