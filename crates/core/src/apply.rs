// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use time::OffsetDateTime;
use uni_apply_domain::{Application, validate_submission};
use uni_apply_timeline::TimelineEvent;

/// The outcome of a successfully applied command.
///
/// Every transition carries the new application state and the single
/// timeline event recording the change. Callers persist both together;
/// there is no way to change a status without producing its event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The application after the command.
    pub new_application: Application,
    /// The timeline event recording the transition.
    pub event: TimelineEvent,
}

/// Applies a command, producing a new application and its timeline event.
///
/// The input application is never mutated. `current` must be `None` for
/// `SubmitApplication` and `Some` for every other command.
///
/// # Arguments
///
/// * `current` - The application being acted on, if it already exists
/// * `command` - The command to apply
/// * `actor` - Optional reference to the actor causing the change
/// * `now` - The instant the transition takes effect
///
/// # Errors
///
/// Returns an error if:
/// - The command does not match the presence of `current`
/// - Submission validation fails
/// - The status transition is not permitted by the lifecycle rules
pub fn apply(
    current: Option<&Application>,
    command: Command,
    actor: Option<&str>,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::SubmitApplication { application } => {
            if current.is_some() {
                return Err(CoreError::InvalidCommand(format!(
                    "application '{}' already exists",
                    application.id
                )));
            }

            validate_submission(&application)?;

            let event: TimelineEvent = TimelineEvent::new(
                application.id.clone(),
                application.status,
                Some(String::from("Application submitted")),
                actor.map(String::from),
                now,
            );

            Ok(TransitionResult {
                new_application: application,
                event,
            })
        }
        Command::UpdateStatus { new_status, note } => {
            let Some(application) = current else {
                return Err(CoreError::InvalidCommand(String::from(
                    "status update requires an existing application",
                )));
            };

            application.status.validate_transition(new_status)?;

            let new_application: Application = application.with_status(new_status, now);
            let event: TimelineEvent = TimelineEvent::new(
                application.id.clone(),
                new_status,
                note,
                actor.map(String::from),
                now,
            );

            Ok(TransitionResult {
                new_application,
                event,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uni_apply_domain::{ApplicationForm, ApplicationId, ApplicationStatus, DomainError};

    fn submittable_application(now: OffsetDateTime) -> Application {
        Application::new(
            ApplicationId::new("APP-1"),
            ApplicationForm {
                program: Some(String::from("BSc Computer Science")),
                university: Some(String::from("University of Leeds")),
                ..ApplicationForm::default()
            },
            now,
        )
    }

    #[test]
    fn test_submission_produces_submitted_event() {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let application: Application = submittable_application(now);

        let result = apply(
            None,
            Command::SubmitApplication { application },
            Some("student-1"),
            now,
        );

        let transition: TransitionResult = match result {
            Ok(t) => t,
            Err(e) => panic!("submission failed: {e}"),
        };
        assert_eq!(
            transition.new_application.status,
            ApplicationStatus::Submitted
        );
        assert_eq!(transition.event.status, ApplicationStatus::Submitted);
        assert_eq!(transition.event.created_by.as_deref(), Some("student-1"));
        assert_eq!(transition.event.created_at, now);
    }

    #[test]
    fn test_submission_over_existing_application_fails() {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let existing: Application = submittable_application(now);
        let duplicate: Application = submittable_application(now);

        let result = apply(
            Some(&existing),
            Command::SubmitApplication {
                application: duplicate,
            },
            None,
            now,
        );

        assert!(matches!(result, Err(CoreError::InvalidCommand(_))));
    }

    #[test]
    fn test_invalid_submission_is_rejected() {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let application: Application =
            Application::new(ApplicationId::new("APP-1"), ApplicationForm::default(), now);

        let result = apply(None, Command::SubmitApplication { application }, None, now);

        assert!(matches!(
            result,
            Err(CoreError::DomainViolation(DomainError::InvalidProgram(_)))
        ));
    }

    #[test]
    fn test_status_update_pairs_state_and_event() {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let application: Application = submittable_application(now);

        let result = apply(
            Some(&application),
            Command::UpdateStatus {
                new_status: ApplicationStatus::DocumentCheck,
                note: Some(String::from("All documents received")),
            },
            Some("admin-3"),
            now,
        );

        let transition: TransitionResult = match result {
            Ok(t) => t,
            Err(e) => panic!("update failed: {e}"),
        };
        assert_eq!(
            transition.new_application.status,
            ApplicationStatus::DocumentCheck
        );
        assert_eq!(transition.event.status, ApplicationStatus::DocumentCheck);
        assert_eq!(
            transition.event.note.as_deref(),
            Some("All documents received")
        );
        // Input application is untouched
        assert_eq!(application.status, ApplicationStatus::Submitted);
    }

    #[test]
    fn test_status_update_without_application_fails() {
        let now: OffsetDateTime = OffsetDateTime::now_utc();

        let result = apply(
            None,
            Command::UpdateStatus {
                new_status: ApplicationStatus::DocumentCheck,
                note: None,
            },
            None,
            now,
        );

        assert!(matches!(result, Err(CoreError::InvalidCommand(_))));
    }

    #[test]
    fn test_illegal_transition_is_a_domain_violation() {
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let application: Application =
            submittable_application(now).with_status(ApplicationStatus::Approved, now);

        let result = apply(
            Some(&application),
            Command::UpdateStatus {
                new_status: ApplicationStatus::Submitted,
                note: None,
            },
            None,
            now,
        );

        assert!(matches!(
            result,
            Err(CoreError::DomainViolation(
                DomainError::InvalidStatusTransition { .. }
            ))
        ));
    }
}
