// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod application_status;
mod error;
mod presentation;
mod progress;
mod types;
mod validation;

pub use application_status::{ApplicationStatus, STEP_INCOMPLETE, STEP_REJECTED};
pub use error::DomainError;
pub use presentation::{StatusPresentation, present_status};
pub use progress::{
    AcademicInfo, ApplicationForm, DocumentUpload, PersonalInfo, completion_percent,
};
pub use types::{Application, ApplicationId};
pub use validation::validate_submission;
