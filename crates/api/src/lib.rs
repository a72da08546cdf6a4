// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the University Application Portal.
//!
//! Handlers here translate API requests into core commands, enforce
//! role-based authorization, and translate every internal error into an
//! `ApiError` so domain and persistence errors are never leaked raw to
//! the transport layer.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod fixtures;
mod handlers;
mod request_response;

pub use auth::{AuthenticatedActor, AuthorizationService, Role, authenticate_stub};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use fixtures::{DemoApplication, demo_applications};
pub use handlers::{
    get_application, get_progress, get_timeline, list_applications, submit_application,
    update_status,
};
pub use request_response::{
    ApplicationInfo, GetProgressResponse, GetTimelineResponse, ListApplicationsResponse,
    SubmitApplicationRequest, SubmitApplicationResponse, TimelineEventInfo, UpdateStatusRequest,
    UpdateStatusResponse,
};
