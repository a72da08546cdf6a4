// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deterministic timeline synthesis.
//!
//! When an application has no persisted history (demo data, degraded
//! backend), the portal still shows a plausible timeline. Synthesis
//! fabricates the sequence of events a real history would have produced
//! to reach the current status, back-dated from the evaluation instant.
//!
//! Synthesis is pure generation for display fallback only: no network,
//! no storage, and the same inputs at the same instant produce the same
//! sequence.

use crate::event::TimelineEvent;
use time::{Duration, OffsetDateTime};
use uni_apply_domain::{ApplicationId, ApplicationStatus};

/// Days before "now" at which each synthesized milestone is dated.
pub const SYNTHESIS_OFFSETS_DAYS: [i64; 5] = [14, 10, 7, 3, 1];

/// Reference ordering of milestones with their canned notes.
const MILESTONES: [(ApplicationStatus, &str); 5] = [
    (
        ApplicationStatus::Submitted,
        "Application submitted and queued for processing",
    ),
    (
        ApplicationStatus::DocumentCheck,
        "Documents received and under completeness check",
    ),
    (
        ApplicationStatus::UniversityReview,
        "Application forwarded to the university for review",
    ),
    (
        ApplicationStatus::ConditionalAcceptance,
        "University issued a conditional acceptance",
    ),
    (
        ApplicationStatus::Approved,
        "Application approved. Congratulations",
    ),
];

/// Note attached to a synthesized rejection event.
const REJECTED_NOTE: &str = "The university was unable to offer a place";

/// Note attached to a synthesized incomplete event.
const INCOMPLETE_NOTE: &str = "Application returned to the student as incomplete";

/// Number of milestones "at or before" the given status in the reference
/// ordering.
///
/// `PaymentPending` has no milestone of its own; its history covers
/// everything through conditional acceptance. Escape statuses cover only
/// the submission milestone.
const fn milestone_prefix_len(status: ApplicationStatus) -> usize {
    match status {
        ApplicationStatus::Submitted => 1,
        ApplicationStatus::DocumentCheck => 2,
        ApplicationStatus::UniversityReview => 3,
        ApplicationStatus::ConditionalAcceptance | ApplicationStatus::PaymentPending => 4,
        ApplicationStatus::Approved => 5,
        ApplicationStatus::Rejected | ApplicationStatus::Incomplete => 1,
    }
}

/// Fabricates a plausible timeline for an application with no history.
///
/// Always emits a `Submitted` event dated 14 days before `now`, then one
/// event per milestone at or before `current_status`, each dated closer
/// to `now` than the previous. The escape statuses emit the submission
/// event plus a single final escape event, skipping the intermediate
/// milestones.
///
/// Timestamps depend only on `now`, so two calls with the same inputs
/// yield the same statuses, notes, ordering, and deltas.
#[must_use]
pub fn synthesize_timeline(
    application_id: &ApplicationId,
    current_status: ApplicationStatus,
    now: OffsetDateTime,
) -> Vec<TimelineEvent> {
    let prefix_len: usize = milestone_prefix_len(current_status);

    let mut events: Vec<TimelineEvent> = MILESTONES
        .iter()
        .take(prefix_len)
        .zip(SYNTHESIS_OFFSETS_DAYS)
        .map(|(&(status, note), days_back)| {
            TimelineEvent::new(
                application_id.clone(),
                status,
                Some(note.to_string()),
                None,
                now - Duration::days(days_back),
            )
        })
        .collect();

    // Escapes skip the approval milestones and close with a final event
    // dated at the last offset
    match current_status {
        ApplicationStatus::Rejected => events.push(TimelineEvent::new(
            application_id.clone(),
            ApplicationStatus::Rejected,
            Some(REJECTED_NOTE.to_string()),
            None,
            now - Duration::days(SYNTHESIS_OFFSETS_DAYS[4]),
        )),
        ApplicationStatus::Incomplete => events.push(TimelineEvent::new(
            application_id.clone(),
            ApplicationStatus::Incomplete,
            Some(INCOMPLETE_NOTE.to_string()),
            None,
            now - Duration::days(SYNTHESIS_OFFSETS_DAYS[4]),
        )),
        _ => {}
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_id() -> ApplicationId {
        ApplicationId::new("APP-1234")
    }

    fn statuses(events: &[TimelineEvent]) -> Vec<ApplicationStatus> {
        events.iter().map(|e| e.status).collect()
    }

    fn assert_strictly_ascending(events: &[TimelineEvent]) {
        for pair in events.windows(2) {
            assert!(
                pair[0].created_at < pair[1].created_at,
                "timestamps must strictly increase"
            );
        }
    }

    #[test]
    fn test_approved_yields_full_milestone_prefix() {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let events: Vec<TimelineEvent> =
            synthesize_timeline(&app_id(), ApplicationStatus::Approved, now);

        assert_eq!(
            statuses(&events),
            vec![
                ApplicationStatus::Submitted,
                ApplicationStatus::DocumentCheck,
                ApplicationStatus::UniversityReview,
                ApplicationStatus::ConditionalAcceptance,
                ApplicationStatus::Approved,
            ]
        );
        assert_strictly_ascending(&events);
    }

    #[test]
    fn test_rejected_yields_submitted_then_rejected() {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let events: Vec<TimelineEvent> =
            synthesize_timeline(&app_id(), ApplicationStatus::Rejected, now);

        assert_eq!(
            statuses(&events),
            vec![ApplicationStatus::Submitted, ApplicationStatus::Rejected]
        );
        assert_strictly_ascending(&events);
    }

    #[test]
    fn test_incomplete_mirrors_rejected_shape() {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let events: Vec<TimelineEvent> =
            synthesize_timeline(&app_id(), ApplicationStatus::Incomplete, now);

        assert_eq!(
            statuses(&events),
            vec![ApplicationStatus::Submitted, ApplicationStatus::Incomplete]
        );
    }

    #[test]
    fn test_conditional_yields_four_events_within_fourteen_days() {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let events: Vec<TimelineEvent> =
            synthesize_timeline(&app_id(), ApplicationStatus::ConditionalAcceptance, now);

        assert_eq!(events.len(), 4);
        assert_eq!(
            statuses(&events),
            vec![
                ApplicationStatus::Submitted,
                ApplicationStatus::DocumentCheck,
                ApplicationStatus::UniversityReview,
                ApplicationStatus::ConditionalAcceptance,
            ]
        );
        assert_strictly_ascending(&events);
        for event in &events {
            assert!(now - event.created_at <= Duration::days(14));
        }
    }

    #[test]
    fn test_payment_pending_covers_through_conditional() {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let events: Vec<TimelineEvent> =
            synthesize_timeline(&app_id(), ApplicationStatus::PaymentPending, now);

        assert_eq!(events.len(), 4);
        assert_eq!(
            events.last().map(|e| e.status),
            Some(ApplicationStatus::ConditionalAcceptance)
        );
    }

    #[test]
    fn test_submitted_yields_single_event() {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let events: Vec<TimelineEvent> =
            synthesize_timeline(&app_id(), ApplicationStatus::Submitted, now);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].status, ApplicationStatus::Submitted);
        assert_eq!(events[0].created_at, now - Duration::days(14));
    }

    #[test]
    fn test_synthesis_is_deterministic_for_fixed_instant() {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let first: Vec<TimelineEvent> =
            synthesize_timeline(&app_id(), ApplicationStatus::Approved, now);
        let second: Vec<TimelineEvent> =
            synthesize_timeline(&app_id(), ApplicationStatus::Approved, now);

        assert_eq!(first, second);
    }

    #[test]
    fn test_synthesized_events_are_never_persisted_ids() {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let events: Vec<TimelineEvent> =
            synthesize_timeline(&app_id(), ApplicationStatus::Approved, now);

        assert!(events.iter().all(|e| e.event_id.is_none()));
    }
}
