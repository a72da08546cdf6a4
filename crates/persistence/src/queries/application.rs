// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application row queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use uni_apply_domain::{Application, ApplicationId};

use crate::data_models::ApplicationRow;
use crate::diesel_schema::applications;
use crate::error::PersistenceError;

/// Retrieves an application by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `application_id` - The application to retrieve
///
/// # Errors
///
/// Returns `ApplicationNotFound` if no row exists, or an error if the
/// row cannot be decoded.
pub fn get_application(
    conn: &mut SqliteConnection,
    application_id: &ApplicationId,
) -> Result<Application, PersistenceError> {
    let result = applications::table
        .filter(applications::id.eq(application_id.value()))
        .select(ApplicationRow::as_select())
        .first::<ApplicationRow>(conn);

    let row: ApplicationRow = match result {
        Ok(r) => r,
        Err(diesel::result::Error::NotFound) => {
            return Err(PersistenceError::ApplicationNotFound(
                application_id.value().to_string(),
            ));
        }
        Err(e) => return Err(PersistenceError::from(e)),
    };

    row.into_application()
}

/// Checks whether an application row exists.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `application_id` - The application to look for
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn application_exists(
    conn: &mut SqliteConnection,
    application_id: &ApplicationId,
) -> Result<bool, PersistenceError> {
    let count: i64 = applications::table
        .filter(applications::id.eq(application_id.value()))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Lists all applications, oldest submission first.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if rows cannot be retrieved or decoded.
pub fn list_applications(
    conn: &mut SqliteConnection,
) -> Result<Vec<Application>, PersistenceError> {
    let rows: Vec<ApplicationRow> = applications::table
        .order(applications::created_at.asc())
        .select(ApplicationRow::as_select())
        .load::<ApplicationRow>(conn)?;

    rows.into_iter()
        .map(ApplicationRow::into_application)
        .collect()
}
