// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application status tracking and transition logic.
//!
//! This module defines the review lifecycle stages and valid transitions.
//! Status transitions are reviewer-initiated only; the system never
//! advances status based on time alone.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sentinel step index for a rejected application.
pub const STEP_REJECTED: i8 = -1;

/// Sentinel step index for an incomplete application.
pub const STEP_INCOMPLETE: i8 = -2;

/// Review lifecycle stages of a university application.
///
/// Six stages form an ordered sequence from submission to approval.
/// `Rejected` and `Incomplete` sit outside the sequence; reaching either
/// short-circuits rendering into the stopped branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    /// Application has been submitted by the student.
    Submitted,
    /// Submitted documents are being checked for completeness.
    DocumentCheck,
    /// The university is reviewing the application.
    UniversityReview,
    /// The university issued a conditional acceptance.
    ConditionalAcceptance,
    /// Acceptance issued, awaiting payment.
    PaymentPending,
    /// Application fully approved.
    Approved,
    /// Application rejected by the university.
    Rejected,
    /// Application returned to the student as incomplete.
    Incomplete,
}

impl ApplicationStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::DocumentCheck => "document_check",
            Self::UniversityReview => "university_review",
            Self::ConditionalAcceptance => "conditional_acceptance",
            Self::PaymentPending => "payment_pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Incomplete => "incomplete",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// Accepts the canonical snake_case names plus the legacy timeline
    /// vocabulary the original portal used for timeline notes
    /// (`documents`, `pending`, `review`, `conditional`, `payment`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "submitted" | "pending" => Ok(Self::Submitted),
            "document_check" | "documents" => Ok(Self::DocumentCheck),
            "university_review" | "review" => Ok(Self::UniversityReview),
            "conditional_acceptance" | "conditional" => Ok(Self::ConditionalAcceptance),
            "payment_pending" | "payment" => Ok(Self::PaymentPending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "incomplete" => Ok(Self::Incomplete),
            _ => Err(DomainError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Parses a status string, failing open to `Submitted`.
    ///
    /// Unexpected or legacy status strings must not crash rendering, so
    /// anything unrecognized maps to the first stage instead of erroring.
    #[must_use]
    pub fn from_lenient(s: &str) -> Self {
        Self::parse_str(s).unwrap_or(Self::Submitted)
    }

    /// Returns the step index within the ordered sequence.
    ///
    /// The six ordered stages map to `0..=5`. The escape statuses map to
    /// the [`STEP_REJECTED`] and [`STEP_INCOMPLETE`] sentinels and are
    /// never part of the sequence.
    #[must_use]
    pub const fn step_index(&self) -> i8 {
        match self {
            Self::Submitted => 0,
            Self::DocumentCheck => 1,
            Self::UniversityReview => 2,
            Self::ConditionalAcceptance => 3,
            Self::PaymentPending => 4,
            Self::Approved => 5,
            Self::Rejected => STEP_REJECTED,
            Self::Incomplete => STEP_INCOMPLETE,
        }
    }

    /// Returns the step index for a raw status string.
    ///
    /// Unrecognized input indexes to `0` per the fail-open policy.
    #[must_use]
    pub fn step_index_lenient(s: &str) -> i8 {
        Self::from_lenient(s).step_index()
    }

    /// Returns true if this status is terminal (cannot transition to another state).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::Incomplete)
    }

    /// Returns true if this status stops the ordered sequence.
    ///
    /// Stopped applications render the alternate branch instead of the
    /// progress stepper.
    #[must_use]
    pub const fn is_stopped(&self) -> bool {
        matches!(self, Self::Rejected | Self::Incomplete)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// Forward moves along the ordered sequence are allowed, including
    /// skips (a reviewer may approve directly from review). `Rejected`
    /// and `Incomplete` are reachable from any non-terminal stage.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        // Cannot transition from terminal states
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        let valid: bool = if new_status.is_stopped() {
            // Escapes are reachable from any non-terminal stage
            true
        } else {
            // Forward-only within the ordered sequence
            new_status.step_index() > self.step_index()
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by status lifecycle rules".to_string(),
            })
        }
    }

    /// All statuses in declaration order.
    ///
    /// The six ordered stages come first, then the two escape statuses.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Submitted,
            Self::DocumentCheck,
            Self::UniversityReview,
            Self::ConditionalAcceptance,
            Self::PaymentPending,
            Self::Approved,
            Self::Rejected,
            Self::Incomplete,
        ]
    }
}

impl FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        for status in ApplicationStatus::all() {
            let s: &str = status.as_str();
            match ApplicationStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = ApplicationStatus::parse_str("invalid_status");
        assert!(result.is_err());
    }

    #[test]
    fn test_legacy_timeline_vocabulary_parses() {
        assert_eq!(
            ApplicationStatus::from_lenient("documents"),
            ApplicationStatus::DocumentCheck
        );
        assert_eq!(
            ApplicationStatus::from_lenient("pending"),
            ApplicationStatus::Submitted
        );
        assert_eq!(
            ApplicationStatus::from_lenient("review"),
            ApplicationStatus::UniversityReview
        );
        assert_eq!(
            ApplicationStatus::from_lenient("conditional"),
            ApplicationStatus::ConditionalAcceptance
        );
        assert_eq!(
            ApplicationStatus::from_lenient("payment"),
            ApplicationStatus::PaymentPending
        );
    }

    #[test]
    fn test_step_indices_strictly_increasing() {
        let ordered = [
            ApplicationStatus::Submitted,
            ApplicationStatus::DocumentCheck,
            ApplicationStatus::UniversityReview,
            ApplicationStatus::ConditionalAcceptance,
            ApplicationStatus::PaymentPending,
            ApplicationStatus::Approved,
        ];

        for pair in ordered.windows(2) {
            assert!(pair[0].step_index() < pair[1].step_index());
        }

        assert_eq!(ApplicationStatus::Rejected.step_index(), STEP_REJECTED);
        assert_eq!(ApplicationStatus::Incomplete.step_index(), STEP_INCOMPLETE);
    }

    #[test]
    fn test_unrecognized_status_indexes_to_zero() {
        for raw in ["", "unknown", "wat", "APPROVED", "waitlisted"] {
            assert_eq!(ApplicationStatus::step_index_lenient(raw), 0);
        }
    }

    #[test]
    fn test_terminal_states() {
        assert!(!ApplicationStatus::Submitted.is_terminal());
        assert!(!ApplicationStatus::DocumentCheck.is_terminal());
        assert!(!ApplicationStatus::UniversityReview.is_terminal());
        assert!(!ApplicationStatus::ConditionalAcceptance.is_terminal());
        assert!(!ApplicationStatus::PaymentPending.is_terminal());
        assert!(ApplicationStatus::Approved.is_terminal());
        assert!(ApplicationStatus::Rejected.is_terminal());
        assert!(ApplicationStatus::Incomplete.is_terminal());
    }

    #[test]
    fn test_stopped_branch() {
        assert!(ApplicationStatus::Rejected.is_stopped());
        assert!(ApplicationStatus::Incomplete.is_stopped());
        assert!(!ApplicationStatus::Approved.is_stopped());
        assert!(!ApplicationStatus::Submitted.is_stopped());
    }

    #[test]
    fn test_forward_transitions_allowed() {
        let current = ApplicationStatus::DocumentCheck;

        assert!(
            current
                .validate_transition(ApplicationStatus::UniversityReview)
                .is_ok()
        );
        assert!(
            current
                .validate_transition(ApplicationStatus::Approved)
                .is_ok()
        );
    }

    #[test]
    fn test_backward_transitions_rejected() {
        let current = ApplicationStatus::UniversityReview;

        assert!(
            current
                .validate_transition(ApplicationStatus::Submitted)
                .is_err()
        );
        assert!(
            current
                .validate_transition(ApplicationStatus::DocumentCheck)
                .is_err()
        );
        assert!(
            current
                .validate_transition(ApplicationStatus::UniversityReview)
                .is_err()
        );
    }

    #[test]
    fn test_escapes_reachable_from_any_active_stage() {
        let active = [
            ApplicationStatus::Submitted,
            ApplicationStatus::DocumentCheck,
            ApplicationStatus::UniversityReview,
            ApplicationStatus::ConditionalAcceptance,
            ApplicationStatus::PaymentPending,
        ];

        for status in active {
            assert!(
                status
                    .validate_transition(ApplicationStatus::Rejected)
                    .is_ok()
            );
            assert!(
                status
                    .validate_transition(ApplicationStatus::Incomplete)
                    .is_ok()
            );
        }
    }

    #[test]
    fn test_no_transitions_from_terminal_states() {
        let terminal_states = [
            ApplicationStatus::Approved,
            ApplicationStatus::Rejected,
            ApplicationStatus::Incomplete,
        ];

        for terminal in terminal_states {
            assert!(
                terminal
                    .validate_transition(ApplicationStatus::Submitted)
                    .is_err()
            );
            assert!(
                terminal
                    .validate_transition(ApplicationStatus::Approved)
                    .is_err()
            );
            assert!(
                terminal
                    .validate_transition(ApplicationStatus::Rejected)
                    .is_err()
            );
        }
    }
}
