// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure status-to-display mapping.
//!
//! A table lookup from status to label, icon identifier, and color class.
//! No state, no side effects; unknown statuses map to a generic
//! presentation rather than failing.

use crate::application_status::ApplicationStatus;
use serde::{Deserialize, Serialize};

/// Display attributes for a status value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPresentation {
    /// Human-readable label.
    pub label: &'static str,
    /// Icon identifier for the consuming UI.
    pub icon: &'static str,
    /// Color class for the consuming UI.
    pub color_class: &'static str,
}

/// Presentation used for unrecognized status strings.
const UNKNOWN: StatusPresentation = StatusPresentation {
    label: "Unknown",
    icon: "help-circle",
    color_class: "status-unknown",
};

impl ApplicationStatus {
    /// Returns the display attributes for this status.
    #[must_use]
    pub const fn presentation(&self) -> StatusPresentation {
        match self {
            Self::Submitted => StatusPresentation {
                label: "Submitted",
                icon: "send",
                color_class: "status-blue",
            },
            Self::DocumentCheck => StatusPresentation {
                label: "Document Check",
                icon: "file-text",
                color_class: "status-amber",
            },
            Self::UniversityReview => StatusPresentation {
                label: "University Review",
                icon: "search",
                color_class: "status-indigo",
            },
            Self::ConditionalAcceptance => StatusPresentation {
                label: "Conditional Acceptance",
                icon: "check-circle",
                color_class: "status-teal",
            },
            Self::PaymentPending => StatusPresentation {
                label: "Payment Pending",
                icon: "credit-card",
                color_class: "status-orange",
            },
            Self::Approved => StatusPresentation {
                label: "Approved",
                icon: "award",
                color_class: "status-green",
            },
            Self::Rejected => StatusPresentation {
                label: "Rejected",
                icon: "x-circle",
                color_class: "status-red",
            },
            Self::Incomplete => StatusPresentation {
                label: "Incomplete",
                icon: "alert-triangle",
                color_class: "status-gray",
            },
        }
    }
}

/// Returns the display attributes for a raw status string.
///
/// Unparseable input gets the generic "Unknown" presentation. This is the
/// front door for legacy status strings coming off the wire.
#[must_use]
pub fn present_status(raw: &str) -> StatusPresentation {
    raw.parse::<ApplicationStatus>()
        .map_or(UNKNOWN, |status| status.presentation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_distinct_label() {
        let labels: Vec<&str> = ApplicationStatus::all()
            .iter()
            .map(|s| s.presentation().label)
            .collect();

        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].contains(label), "duplicate label: {label}");
        }
    }

    #[test]
    fn test_unknown_status_gets_generic_presentation() {
        let presentation: StatusPresentation = present_status("definitely_not_a_status");
        assert_eq!(presentation.label, "Unknown");
        assert_eq!(presentation.color_class, "status-unknown");
    }

    #[test]
    fn test_known_raw_string_resolves() {
        let presentation: StatusPresentation = present_status("approved");
        assert_eq!(presentation.label, "Approved");
    }

    #[test]
    fn test_legacy_vocabulary_resolves() {
        let presentation: StatusPresentation = present_status("documents");
        assert_eq!(presentation.label, "Document Check");
    }
}
