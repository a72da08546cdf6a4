// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the University Application Portal.
//!
//! This crate stores applications and their timeline events in `SQLite`
//! via Diesel. Applications are never hard-deleted; status changes and
//! the timeline events recording them are written in one transaction so
//! history can never drift from state.
//!
//! `SQLite` requires no external infrastructure: in-memory databases
//! back unit tests, and file-based databases (with WAL mode) back
//! deployments.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use diesel::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use uni_apply::TransitionResult;
use uni_apply_domain::{Application, ApplicationId};
use uni_apply_timeline::{TimelineEvent, TimelineStore, TimelineStoreError};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID, so
/// tests stay isolated without time-based collisions.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for applications and their timelines.
pub struct SqlitePersistence {
    conn: SqliteConnection,
}

impl SqlitePersistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Uses a shared in-memory database via Diesel. Each call receives a
    /// unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_test_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Inserts a newly submitted application together with its first
    /// timeline event.
    ///
    /// Both writes happen in one transaction.
    ///
    /// # Arguments
    ///
    /// * `result` - The transition result from submitting the application
    ///
    /// # Returns
    ///
    /// The event ID assigned to the submission event.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateApplication` if the ID is already taken, or an
    /// error if persistence fails.
    pub fn insert_application(
        &mut self,
        result: &TransitionResult,
    ) -> Result<i64, PersistenceError> {
        let application: &Application = &result.new_application;
        let event: &TimelineEvent = &result.event;

        self.conn.transaction::<i64, PersistenceError, _>(|conn| {
            mutations::application::insert_application(conn, application)?;
            mutations::timeline::append_timeline_event(conn, event)
        })
    }

    /// Persists a status transition: the updated application row and the
    /// timeline event recording it, in one transaction.
    ///
    /// # Arguments
    ///
    /// * `result` - The transition result to persist
    ///
    /// # Returns
    ///
    /// The event ID assigned to the timeline event.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails; on error neither write is
    /// applied.
    pub fn persist_transition(
        &mut self,
        result: &TransitionResult,
    ) -> Result<i64, PersistenceError> {
        let application: &Application = &result.new_application;
        let event: &TimelineEvent = &result.event;

        self.conn.transaction::<i64, PersistenceError, _>(|conn| {
            mutations::application::update_application_status(conn, application)?;
            mutations::timeline::append_timeline_event(conn, event)
        })
    }

    /// Retrieves an application by ID.
    ///
    /// # Arguments
    ///
    /// * `application_id` - The application to retrieve
    ///
    /// # Errors
    ///
    /// Returns `ApplicationNotFound` if no such application exists.
    pub fn get_application(
        &mut self,
        application_id: &ApplicationId,
    ) -> Result<Application, PersistenceError> {
        queries::application::get_application(&mut self.conn, application_id)
    }

    /// Checks whether an application exists.
    ///
    /// # Arguments
    ///
    /// * `application_id` - The application to look for
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn application_exists(
        &mut self,
        application_id: &ApplicationId,
    ) -> Result<bool, PersistenceError> {
        queries::application::application_exists(&mut self.conn, application_id)
    }

    /// Lists all applications, oldest submission first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_applications(&mut self) -> Result<Vec<Application>, PersistenceError> {
        queries::application::list_applications(&mut self.conn)
    }

    /// Retrieves the ordered timeline for an application.
    ///
    /// # Arguments
    ///
    /// * `application_id` - The application whose history to load
    ///
    /// # Errors
    ///
    /// Returns an error if events cannot be retrieved or decoded.
    pub fn get_timeline_events(
        &mut self,
        application_id: &ApplicationId,
    ) -> Result<Vec<TimelineEvent>, PersistenceError> {
        queries::timeline::get_timeline_events(&mut self.conn, application_id)
    }

    /// Appends one timeline event outside of a status transition.
    ///
    /// # Arguments
    ///
    /// * `event` - The event to append
    ///
    /// # Returns
    ///
    /// The event ID assigned by the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be recorded.
    pub fn append_timeline_event(
        &mut self,
        event: &TimelineEvent,
    ) -> Result<i64, PersistenceError> {
        mutations::timeline::append_timeline_event(&mut self.conn, event)
    }
}

impl TimelineStore for SqlitePersistence {
    fn events_for(
        &mut self,
        application_id: &ApplicationId,
    ) -> Result<Vec<TimelineEvent>, TimelineStoreError> {
        self.get_timeline_events(application_id).map_err(|e| match e {
            PersistenceError::ReconstructionError(msg)
            | PersistenceError::SerializationError(msg) => TimelineStoreError::Corrupt(msg),
            other => TimelineStoreError::Unavailable(other.to_string()),
        })
    }

    fn append(&mut self, event: &TimelineEvent) -> Result<i64, TimelineStoreError> {
        self.append_timeline_event(event)
            .map_err(|e| TimelineStoreError::Unavailable(e.to_string()))
    }
}
