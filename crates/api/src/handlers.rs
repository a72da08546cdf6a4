// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Each handler enforces authorization first, translates the request
//! into a core command or query, and translates every failure into an
//! `ApiError`.

use time::OffsetDateTime;
use tracing::info;
use uni_apply::{Command, TransitionResult, apply};
use uni_apply_domain::{
    Application, ApplicationId, ApplicationStatus, StatusPresentation, completion_percent,
};
use uni_apply_persistence::SqlitePersistence;
use uni_apply_timeline::{Timeline, TimelineEvent, TimelineReader};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
use crate::request_response::{
    ApplicationInfo, GetProgressResponse, GetTimelineResponse, ListApplicationsResponse,
    SubmitApplicationRequest, SubmitApplicationResponse, TimelineEventInfo, UpdateStatusRequest,
    UpdateStatusResponse,
};

fn application_info(application: &Application) -> ApplicationInfo {
    let presentation: StatusPresentation = application.status.presentation();
    ApplicationInfo {
        application_id: application.id.value().to_string(),
        status: application.status.as_str().to_string(),
        status_label: presentation.label.to_string(),
        status_icon: presentation.icon.to_string(),
        status_color_class: presentation.color_class.to_string(),
        completion_percent: completion_percent(&application.form),
        form: application.form.clone(),
        created_at: application.created_at,
        updated_at: application.updated_at,
    }
}

fn timeline_event_info(event: &TimelineEvent) -> TimelineEventInfo {
    TimelineEventInfo {
        event_id: event.event_id,
        status: event.status.as_str().to_string(),
        status_label: event.status.presentation().label.to_string(),
        note: event.note.clone(),
        created_by: event.created_by.clone(),
        created_at: event.created_at,
    }
}

/// Submits a new application via the API boundary with authorization.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The API request to submit an application
/// * `actor` - The authenticated actor performing this action
/// * `now` - The submission instant
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (Student or Agent required)
/// - The form is missing a program or university choice
/// - The application identifier is already taken
pub fn submit_application(
    persistence: &mut SqlitePersistence,
    request: SubmitApplicationRequest,
    actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<SubmitApplicationResponse, ApiError> {
    AuthorizationService::authorize_submit_application(actor)?;

    let application: Application = Application::new(
        ApplicationId::new(&request.application_id),
        request.form,
        now,
    );
    let application_id: String = application.id.value().to_string();

    let result: TransitionResult = apply(
        None,
        Command::SubmitApplication { application },
        Some(&actor.id),
        now,
    )
    .map_err(translate_core_error)?;

    let event_id: i64 = persistence
        .insert_application(&result)
        .map_err(translate_persistence_error)?;

    info!(
        application_id = %application_id,
        actor = %actor.id,
        event_id,
        "Application submitted"
    );

    let status: ApplicationStatus = result.new_application.status;
    Ok(SubmitApplicationResponse {
        application_id,
        status: status.as_str().to_string(),
        status_label: status.presentation().label.to_string(),
        event_id,
        message: String::from("Application submitted"),
    })
}

/// Moves an application to a new status with authorization.
///
/// Legacy status vocabulary in the request is normalized before the
/// transition rules run.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `application_id` - The application to update
/// * `request` - The API request carrying the new status
/// * `actor` - The authenticated actor performing this action
/// * `now` - The transition instant
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (Admin or Agent required)
/// - The application does not exist
/// - The status string is unrecognized
/// - The transition is not permitted by the lifecycle rules
pub fn update_status(
    persistence: &mut SqlitePersistence,
    application_id: &str,
    request: UpdateStatusRequest,
    actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<UpdateStatusResponse, ApiError> {
    AuthorizationService::authorize_update_status(actor)?;

    let id: ApplicationId = ApplicationId::new(application_id);
    let application: Application = persistence
        .get_application(&id)
        .map_err(translate_persistence_error)?;

    let new_status: ApplicationStatus = request
        .new_status
        .parse::<ApplicationStatus>()
        .map_err(translate_domain_error)?;

    let result: TransitionResult = apply(
        Some(&application),
        Command::UpdateStatus {
            new_status,
            note: request.note,
        },
        Some(&actor.id),
        now,
    )
    .map_err(translate_core_error)?;

    let event_id: i64 = persistence
        .persist_transition(&result)
        .map_err(translate_persistence_error)?;

    info!(
        application_id = %id,
        actor = %actor.id,
        from = application.status.as_str(),
        to = new_status.as_str(),
        event_id,
        "Application status updated"
    );

    Ok(UpdateStatusResponse {
        application_id: id.value().to_string(),
        status: new_status.as_str().to_string(),
        status_label: new_status.presentation().label.to_string(),
        event_id,
        message: String::from("Status updated"),
    })
}

/// Retrieves a single application.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `application_id` - The application to retrieve
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns an error if the application does not exist.
pub fn get_application(
    persistence: &mut SqlitePersistence,
    application_id: &str,
    actor: &AuthenticatedActor,
) -> Result<ApplicationInfo, ApiError> {
    AuthorizationService::authorize_read_application(actor)?;

    let application: Application = persistence
        .get_application(&ApplicationId::new(application_id))
        .map_err(translate_persistence_error)?;

    Ok(application_info(&application))
}

/// Lists all applications, oldest submission first.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns an error if the actor is not authorized (Admin or Agent
/// required) or the database cannot be queried.
pub fn list_applications(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedActor,
) -> Result<ListApplicationsResponse, ApiError> {
    AuthorizationService::authorize_list_applications(actor)?;

    let applications: Vec<Application> = persistence
        .list_applications()
        .map_err(translate_persistence_error)?;

    Ok(ListApplicationsResponse {
        applications: applications.iter().map(application_info).collect(),
    })
}

/// Retrieves the timeline for an application.
///
/// The persisted history is used when present; otherwise a plausible
/// history is synthesized from the current status and flagged as such.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `application_id` - The application whose timeline to resolve
/// * `actor` - The authenticated actor
/// * `now` - The instant synthesized timelines are anchored to
///
/// # Errors
///
/// Returns an error if the application does not exist. Store read
/// failures do not surface; they degrade to synthesis.
pub fn get_timeline(
    persistence: &mut SqlitePersistence,
    application_id: &str,
    actor: &AuthenticatedActor,
    now: OffsetDateTime,
) -> Result<GetTimelineResponse, ApiError> {
    AuthorizationService::authorize_read_application(actor)?;

    let id: ApplicationId = ApplicationId::new(application_id);
    let application: Application = persistence
        .get_application(&id)
        .map_err(translate_persistence_error)?;

    let mut reader: TimelineReader = TimelineReader::new().with_store(persistence);
    let timeline: Timeline = reader.timeline_for(&id, application.status, now);

    Ok(GetTimelineResponse {
        application_id: id.value().to_string(),
        synthesized: timeline.synthesized,
        events: timeline.events.iter().map(timeline_event_info).collect(),
    })
}

/// Retrieves the form completion percentage for an application.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `application_id` - The application whose progress to project
/// * `actor` - The authenticated actor
///
/// # Errors
///
/// Returns an error if the application does not exist.
pub fn get_progress(
    persistence: &mut SqlitePersistence,
    application_id: &str,
    actor: &AuthenticatedActor,
) -> Result<GetProgressResponse, ApiError> {
    AuthorizationService::authorize_read_application(actor)?;

    let application: Application = persistence
        .get_application(&ApplicationId::new(application_id))
        .map_err(translate_persistence_error)?;

    Ok(GetProgressResponse {
        application_id: application.id.value().to_string(),
        completion_percent: completion_percent(&application.form),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use uni_apply_domain::{ApplicationForm, PersonalInfo};

    fn persistence() -> SqlitePersistence {
        SqlitePersistence::new_in_memory().expect("in-memory database")
    }

    fn actor(role: Role) -> AuthenticatedActor {
        AuthenticatedActor::new(String::from("actor-1"), role)
    }

    fn submit_request(id: &str) -> SubmitApplicationRequest {
        SubmitApplicationRequest {
            application_id: String::from(id),
            form: ApplicationForm {
                program: Some(String::from("BSc Computer Science")),
                university: Some(String::from("University of Leeds")),
                personal_info: Some(PersonalInfo {
                    first_name: Some(String::from("Amina")),
                    last_name: Some(String::from("Yusuf")),
                    email: Some(String::from("amina@example.com")),
                    ..PersonalInfo::default()
                }),
                ..ApplicationForm::default()
            },
        }
    }

    #[test]
    fn test_submit_and_get_application() {
        let mut persistence: SqlitePersistence = persistence();
        let now: OffsetDateTime = OffsetDateTime::now_utc();

        let response: SubmitApplicationResponse = submit_application(
            &mut persistence,
            submit_request("APP-1"),
            &actor(Role::Student),
            now,
        )
        .expect("submission");
        assert_eq!(response.status, "submitted");
        assert_eq!(response.status_label, "Submitted");
        assert!(response.event_id > 0);

        let info: ApplicationInfo =
            get_application(&mut persistence, "APP-1", &actor(Role::Student)).expect("get");
        assert_eq!(info.application_id, "APP-1");
        assert_eq!(info.status, "submitted");
    }

    #[test]
    fn test_admin_may_not_submit() {
        let mut persistence: SqlitePersistence = persistence();
        let result = submit_application(
            &mut persistence,
            submit_request("APP-1"),
            &actor(Role::Admin),
            OffsetDateTime::now_utc(),
        );
        assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    }

    #[test]
    fn test_duplicate_submission_is_a_rule_violation() {
        let mut persistence: SqlitePersistence = persistence();
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let student: AuthenticatedActor = actor(Role::Student);

        submit_application(&mut persistence, submit_request("APP-1"), &student, now)
            .expect("first submission");
        let second = submit_application(&mut persistence, submit_request("APP-1"), &student, now);

        assert!(matches!(
            second,
            Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "unique_application_id"
        ));
    }

    #[test]
    fn test_update_status_accepts_legacy_vocabulary() {
        let mut persistence: SqlitePersistence = persistence();
        let now: OffsetDateTime = OffsetDateTime::now_utc();

        submit_application(
            &mut persistence,
            submit_request("APP-1"),
            &actor(Role::Student),
            now,
        )
        .expect("submission");

        // "documents" is the legacy token for the document check stage
        let response: UpdateStatusResponse = update_status(
            &mut persistence,
            "APP-1",
            UpdateStatusRequest {
                new_status: String::from("documents"),
                note: Some(String::from("Passport received")),
            },
            &actor(Role::Agent),
            now,
        )
        .expect("update");

        assert_eq!(response.status, "document_check");
    }

    #[test]
    fn test_student_may_not_update_status() {
        let mut persistence: SqlitePersistence = persistence();
        let now: OffsetDateTime = OffsetDateTime::now_utc();

        submit_application(
            &mut persistence,
            submit_request("APP-1"),
            &actor(Role::Student),
            now,
        )
        .expect("submission");

        let result = update_status(
            &mut persistence,
            "APP-1",
            UpdateStatusRequest {
                new_status: String::from("approved"),
                note: None,
            },
            &actor(Role::Student),
            now,
        );
        assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    }

    #[test]
    fn test_unrecognized_status_is_invalid_input() {
        let mut persistence: SqlitePersistence = persistence();
        let now: OffsetDateTime = OffsetDateTime::now_utc();

        submit_application(
            &mut persistence,
            submit_request("APP-1"),
            &actor(Role::Student),
            now,
        )
        .expect("submission");

        let result = update_status(
            &mut persistence,
            "APP-1",
            UpdateStatusRequest {
                new_status: String::from("telepathic_review"),
                note: None,
            },
            &actor(Role::Admin),
            now,
        );
        assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
    }

    #[test]
    fn test_backward_transition_is_a_rule_violation() {
        let mut persistence: SqlitePersistence = persistence();
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let admin: AuthenticatedActor = actor(Role::Admin);

        submit_application(
            &mut persistence,
            submit_request("APP-1"),
            &actor(Role::Student),
            now,
        )
        .expect("submission");
        update_status(
            &mut persistence,
            "APP-1",
            UpdateStatusRequest {
                new_status: String::from("university_review"),
                note: None,
            },
            &admin,
            now,
        )
        .expect("forward transition");

        let backward = update_status(
            &mut persistence,
            "APP-1",
            UpdateStatusRequest {
                new_status: String::from("document_check"),
                note: None,
            },
            &admin,
            now,
        );
        assert!(matches!(
            backward,
            Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "status_transition"
        ));
    }

    #[test]
    fn test_timeline_reads_persisted_history() {
        let mut persistence: SqlitePersistence = persistence();
        let now: OffsetDateTime = OffsetDateTime::now_utc();

        submit_application(
            &mut persistence,
            submit_request("APP-1"),
            &actor(Role::Student),
            now,
        )
        .expect("submission");
        update_status(
            &mut persistence,
            "APP-1",
            UpdateStatusRequest {
                new_status: String::from("document_check"),
                note: None,
            },
            &actor(Role::Admin),
            now,
        )
        .expect("update");

        let response: GetTimelineResponse =
            get_timeline(&mut persistence, "APP-1", &actor(Role::Student), now)
                .expect("timeline");

        assert!(!response.synthesized);
        assert_eq!(response.events.len(), 2);
        assert_eq!(response.events[0].status, "submitted");
        assert_eq!(response.events[1].status, "document_check");
    }

    #[test]
    fn test_timeline_for_missing_application_is_not_found() {
        let mut persistence: SqlitePersistence = persistence();
        let result = get_timeline(
            &mut persistence,
            "APP-404",
            &actor(Role::Student),
            OffsetDateTime::now_utc(),
        );
        assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
    }

    #[test]
    fn test_progress_counts_partial_form() {
        let mut persistence: SqlitePersistence = persistence();
        let now: OffsetDateTime = OffsetDateTime::now_utc();

        submit_application(
            &mut persistence,
            submit_request("APP-1"),
            &actor(Role::Student),
            now,
        )
        .expect("submission");

        let response: GetProgressResponse =
            get_progress(&mut persistence, "APP-1", &actor(Role::Student)).expect("progress");

        // 3 of 8 personal fields (9) + program and university (50)
        assert_eq!(response.completion_percent, 59);
        assert_eq!(response.application_id, "APP-1");
    }

    #[test]
    fn test_list_applications_requires_staff_role() {
        let mut persistence: SqlitePersistence = persistence();
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let student: AuthenticatedActor = actor(Role::Student);

        submit_application(&mut persistence, submit_request("APP-1"), &student, now)
            .expect("submission");

        assert!(matches!(
            list_applications(&mut persistence, &student),
            Err(ApiError::Unauthorized { .. })
        ));

        let listed: ListApplicationsResponse =
            list_applications(&mut persistence, &actor(Role::Admin)).expect("list");
        assert_eq!(listed.applications.len(), 1);
    }
}
