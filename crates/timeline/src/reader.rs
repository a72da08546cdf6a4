// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fallback-chain timeline reads.
//!
//! The reader consults an ordered chain of stores and takes the first
//! non-empty history. Store failures degrade the read rather than
//! surfacing: the failing store is logged and skipped. When no store has
//! history, the synthesizer fabricates one from the current status.

use crate::event::TimelineEvent;
use crate::store::TimelineStore;
use crate::synthesizer::synthesize_timeline;
use time::OffsetDateTime;
use tracing::warn;
use uni_apply_domain::{ApplicationId, ApplicationStatus};

/// A resolved timeline plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    /// The events, oldest first.
    pub events: Vec<TimelineEvent>,
    /// True if the events were fabricated rather than read from a store.
    pub synthesized: bool,
}

/// Reads timelines through an ordered store chain with synthesis fallback.
///
/// Stores are consulted in the order they were pushed; the database store
/// goes first, the in-memory demo store after it.
#[derive(Default)]
pub struct TimelineReader<'a> {
    stores: Vec<&'a mut (dyn TimelineStore + Send)>,
}

impl<'a> TimelineReader<'a> {
    /// Creates a reader with no stores (synthesis-only).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a store at the lowest priority position.
    #[must_use]
    pub fn with_store(mut self, store: &'a mut (dyn TimelineStore + Send)) -> Self {
        self.stores.push(store);
        self
    }

    /// Resolves the timeline for an application.
    ///
    /// The first store with a non-empty history wins. Failing stores are
    /// logged at warn level and skipped; if every store is empty or
    /// failing, the result is synthesized from `current_status`. The
    /// caller never sees an error on this path.
    pub fn timeline_for(
        &mut self,
        application_id: &ApplicationId,
        current_status: ApplicationStatus,
        now: OffsetDateTime,
    ) -> Timeline {
        for store in &mut self.stores {
            match store.events_for(application_id) {
                Ok(events) if !events.is_empty() => {
                    return Timeline {
                        events,
                        synthesized: false,
                    };
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(
                        application_id = %application_id,
                        error = %e,
                        "Timeline store failed; continuing down the chain"
                    );
                }
            }
        }

        Timeline {
            events: synthesize_timeline(application_id, current_status, now),
            synthesized: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryTimelineStore, TimelineStoreError};

    /// A store that always fails, for exercising the degraded path.
    struct BrokenStore;

    impl TimelineStore for BrokenStore {
        fn events_for(
            &mut self,
            _application_id: &ApplicationId,
        ) -> Result<Vec<TimelineEvent>, TimelineStoreError> {
            Err(TimelineStoreError::Unavailable(String::from(
                "connection refused",
            )))
        }

        fn append(&mut self, _event: &TimelineEvent) -> Result<i64, TimelineStoreError> {
            Err(TimelineStoreError::Unavailable(String::from(
                "connection refused",
            )))
        }
    }

    fn app_id() -> ApplicationId {
        ApplicationId::new("APP-1234")
    }

    #[test]
    fn test_empty_chain_synthesizes() {
        let mut reader: TimelineReader = TimelineReader::new();
        let timeline: Timeline = reader.timeline_for(
            &app_id(),
            ApplicationStatus::ConditionalAcceptance,
            OffsetDateTime::now_utc(),
        );

        assert!(timeline.synthesized);
        assert_eq!(timeline.events.len(), 4);
    }

    #[test]
    fn test_store_with_history_wins_over_synthesis() {
        let mut store: MemoryTimelineStore = MemoryTimelineStore::new();
        let real_event: TimelineEvent = TimelineEvent::new(
            app_id(),
            ApplicationStatus::Submitted,
            Some(String::from("Real submission")),
            Some(String::from("student-1")),
            OffsetDateTime::now_utc(),
        );
        assert!(store.append(&real_event).is_ok());

        let mut reader: TimelineReader = TimelineReader::new().with_store(&mut store);
        let timeline: Timeline = reader.timeline_for(
            &app_id(),
            ApplicationStatus::Submitted,
            OffsetDateTime::now_utc(),
        );

        assert!(!timeline.synthesized);
        assert_eq!(timeline.events.len(), 1);
        assert_eq!(
            timeline.events[0].note.as_deref(),
            Some("Real submission")
        );
    }

    #[test]
    fn test_failing_store_falls_through_to_next() {
        let mut fallback: MemoryTimelineStore = MemoryTimelineStore::new();
        let demo_event: TimelineEvent = TimelineEvent::new(
            app_id(),
            ApplicationStatus::DocumentCheck,
            Some(String::from("Demo history")),
            None,
            OffsetDateTime::now_utc(),
        );
        assert!(fallback.append(&demo_event).is_ok());

        let mut broken: BrokenStore = BrokenStore;
        let mut reader: TimelineReader = TimelineReader::new()
            .with_store(&mut broken)
            .with_store(&mut fallback);
        let timeline: Timeline = reader.timeline_for(
            &app_id(),
            ApplicationStatus::DocumentCheck,
            OffsetDateTime::now_utc(),
        );

        assert!(!timeline.synthesized);
        assert_eq!(timeline.events[0].note.as_deref(), Some("Demo history"));
    }

    #[test]
    fn test_all_stores_failing_degrades_to_synthesis() {
        let mut first: BrokenStore = BrokenStore;
        let mut second: BrokenStore = BrokenStore;
        let mut reader: TimelineReader = TimelineReader::new()
            .with_store(&mut first)
            .with_store(&mut second);
        let timeline: Timeline = reader.timeline_for(
            &app_id(),
            ApplicationStatus::Rejected,
            OffsetDateTime::now_utc(),
        );

        assert!(timeline.synthesized);
        assert_eq!(timeline.events.len(), 2);
    }

    #[test]
    fn test_empty_store_falls_through_to_synthesis() {
        let mut empty: MemoryTimelineStore = MemoryTimelineStore::new();
        let mut reader: TimelineReader = TimelineReader::new().with_store(&mut empty);
        let timeline: Timeline = reader.timeline_for(
            &app_id(),
            ApplicationStatus::Approved,
            OffsetDateTime::now_utc(),
        );

        assert!(timeline.synthesized);
        assert_eq!(timeline.events.len(), 5);
    }
}
