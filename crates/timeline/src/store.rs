// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The timeline storage seam.
//!
//! Stores are interchangeable behind [`TimelineStore`], which lets the
//! reader chain a real database store ahead of the in-memory demo store
//! that stands in for the original portal's client-side key-value
//! fallback.

use crate::event::TimelineEvent;
use std::collections::HashMap;
use uni_apply_domain::ApplicationId;

/// Errors a timeline store can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineStoreError {
    /// The backing store could not be reached or queried.
    Unavailable(String),
    /// A stored row could not be turned back into an event.
    Corrupt(String),
}

impl std::fmt::Display for TimelineStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "Timeline store unavailable: {msg}"),
            Self::Corrupt(msg) => write!(f, "Corrupt timeline record: {msg}"),
        }
    }
}

impl std::error::Error for TimelineStoreError {}

/// Read/append access to persisted timeline events.
///
/// Implementations must return events in ascending `created_at` order
/// and must never expose mutation or deletion of existing events.
pub trait TimelineStore {
    /// Returns all events for an application, oldest first.
    ///
    /// An application with no history yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn events_for(
        &mut self,
        application_id: &ApplicationId,
    ) -> Result<Vec<TimelineEvent>, TimelineStoreError>;

    /// Appends one event, returning its store-assigned ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the event cannot be recorded.
    fn append(&mut self, event: &TimelineEvent) -> Result<i64, TimelineStoreError>;
}

/// In-memory timeline store.
///
/// The lower-priority fallback in the store chain, standing in for the
/// original portal's local key-value demo store. Also convenient in
/// tests. Events are held per application and sorted on read.
#[derive(Debug, Default)]
pub struct MemoryTimelineStore {
    events: HashMap<ApplicationId, Vec<TimelineEvent>>,
    next_id: i64,
}

impl MemoryTimelineStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TimelineStore for MemoryTimelineStore {
    fn events_for(
        &mut self,
        application_id: &ApplicationId,
    ) -> Result<Vec<TimelineEvent>, TimelineStoreError> {
        let mut events: Vec<TimelineEvent> = self
            .events
            .get(application_id)
            .cloned()
            .unwrap_or_default();
        events.sort_by_key(|event| event.created_at);
        Ok(events)
    }

    fn append(&mut self, event: &TimelineEvent) -> Result<i64, TimelineStoreError> {
        self.next_id += 1;
        let event_id: i64 = self.next_id;

        let mut stored: TimelineEvent = event.clone();
        stored.event_id = Some(event_id);
        self.events
            .entry(event.application_id.clone())
            .or_default()
            .push(stored);

        Ok(event_id)
    }
}
