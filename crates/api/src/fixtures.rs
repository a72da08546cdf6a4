// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo data factory.
//!
//! Generates plausible applications for demo deployments and manual
//! testing. The generator only picks WHICH applications exist and what
//! status each should land in; the applications still travel through the
//! normal submit/update pipeline so every demo row has a real history.

use rand::Rng;
use rand::RngExt;
use rand::seq::IndexedRandom;
use uni_apply_domain::{AcademicInfo, ApplicationForm, ApplicationStatus, PersonalInfo};

use crate::request_response::SubmitApplicationRequest;

const PROGRAMS: [&str; 6] = [
    "BSc Computer Science",
    "MSc Data Science",
    "BA International Relations",
    "MEng Civil Engineering",
    "BSc Nursing",
    "MBA",
];

const UNIVERSITIES: [&str; 5] = [
    "University of Leeds",
    "University of Edinburgh",
    "King's College London",
    "University of Manchester",
    "Cardiff University",
];

const FIRST_NAMES: [&str; 6] = ["Amina", "Chen", "Diego", "Fatima", "Lukas", "Priya"];
const LAST_NAMES: [&str; 6] = ["Yusuf", "Wang", "Alvarez", "Khan", "Novak", "Sharma"];

/// A generated demo application: the submission request plus the status
/// the application should be moved to after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoApplication {
    /// The submission request.
    pub request: SubmitApplicationRequest,
    /// The status to move the application to. `Submitted` means leave
    /// it where submission put it.
    pub target_status: ApplicationStatus,
}

fn pick<'a>(rng: &mut impl Rng, options: &[&'a str]) -> &'a str {
    options.choose(rng).copied().unwrap_or(options[0])
}

/// Generates `count` demo applications.
///
/// Identifiers are sequential (`APP-1001`, `APP-1002`, ...) so repeated
/// seeding against the same database fails loudly on the duplicate
/// check instead of silently doubling the data.
///
/// # Arguments
///
/// * `count` - How many applications to generate
/// * `rng` - The random source; pass a seeded generator for
///   reproducible fixtures
pub fn demo_applications(count: usize, rng: &mut impl Rng) -> Vec<DemoApplication> {
    (0..count)
        .map(|index| {
            let first_name: &str = pick(rng, &FIRST_NAMES);
            let last_name: &str = pick(rng, &LAST_NAMES);
            let fully_filled: bool = rng.random_bool(0.5);

            let personal_info: PersonalInfo = PersonalInfo {
                first_name: Some(first_name.to_string()),
                last_name: Some(last_name.to_string()),
                email: Some(format!(
                    "{}.{}@example.com",
                    first_name.to_lowercase(),
                    last_name.to_lowercase()
                )),
                phone: fully_filled.then(|| String::from("+44 7700 900123")),
                date_of_birth: fully_filled.then(|| String::from("2002-03-14")),
                nationality: fully_filled.then(|| String::from("Kenyan")),
                passport_number: fully_filled.then(|| String::from("AK0481029")),
                address: fully_filled.then(|| String::from("12 Harehills Lane, Leeds")),
            };

            let academic_info: Option<AcademicInfo> = fully_filled.then(|| AcademicInfo {
                highest_qualification: Some(String::from("High School Diploma")),
                institution: Some(String::from("Nairobi School")),
                gpa: Some(String::from("3.6")),
                graduation_year: Some(String::from("2024")),
                english_test_score: Some(String::from("IELTS 7.0")),
            });

            let target_status: ApplicationStatus = ApplicationStatus::all()
                .choose(rng)
                .copied()
                .unwrap_or(ApplicationStatus::Submitted);

            DemoApplication {
                request: SubmitApplicationRequest {
                    application_id: format!("APP-{}", 1001 + index),
                    form: ApplicationForm {
                        personal_info: Some(personal_info),
                        academic_info,
                        documents: None,
                        program: Some(pick(rng, &PROGRAMS).to_string()),
                        university: Some(pick(rng, &UNIVERSITIES).to_string()),
                    },
                },
                target_status,
            }
        })
        .collect()
}
