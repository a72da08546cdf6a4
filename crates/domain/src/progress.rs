// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Completion estimation over partially-filled application forms.
//!
//! Each of the four form sections contributes up to 25 points. Missing
//! sections contribute 0; the projector never fails on absent data.

use serde::{Deserialize, Serialize};

/// Points available per form section.
const SECTION_POINTS: f64 = 25.0;

/// Personal information section of the application form.
///
/// All fields are optional; only non-empty fields count toward
/// completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// The applicant's first name.
    pub first_name: Option<String>,
    /// The applicant's last name.
    pub last_name: Option<String>,
    /// Contact email address.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Date of birth (ISO 8601).
    pub date_of_birth: Option<String>,
    /// Nationality.
    pub nationality: Option<String>,
    /// Passport number.
    pub passport_number: Option<String>,
    /// Postal address.
    pub address: Option<String>,
}

impl PersonalInfo {
    /// Number of fields in the fixed checklist.
    pub const FIELD_COUNT: usize = 8;

    /// Counts the filled (present and non-blank) fields.
    #[must_use]
    pub fn filled_fields(&self) -> usize {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.date_of_birth,
            &self.nationality,
            &self.passport_number,
            &self.address,
        ]
        .into_iter()
        .filter(|field| is_filled(field))
        .count()
    }
}

/// Academic information section of the application form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicInfo {
    /// Highest qualification attained.
    pub highest_qualification: Option<String>,
    /// Institution the qualification was earned at.
    pub institution: Option<String>,
    /// Grade point average or equivalent.
    pub gpa: Option<String>,
    /// Graduation year.
    pub graduation_year: Option<String>,
    /// English proficiency test score (IELTS/TOEFL).
    pub english_test_score: Option<String>,
}

impl AcademicInfo {
    /// Number of fields in the fixed checklist.
    pub const FIELD_COUNT: usize = 5;

    /// Counts the filled (present and non-blank) fields.
    #[must_use]
    pub fn filled_fields(&self) -> usize {
        [
            &self.highest_qualification,
            &self.institution,
            &self.gpa,
            &self.graduation_year,
            &self.english_test_score,
        ]
        .into_iter()
        .filter(|field| is_filled(field))
        .count()
    }
}

/// A document slot on the application checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentUpload {
    /// The document name (e.g., "Transcript").
    pub name: String,
    /// Whether this document is required for submission.
    pub required: bool,
    /// Whether a file has been uploaded for this slot.
    pub uploaded: bool,
}

/// A partially-filled application form.
///
/// Sections are tagged-optional so that "missing section contributes 0"
/// is enforced by the type system rather than by scattered null checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationForm {
    /// The personal information section.
    pub personal_info: Option<PersonalInfo>,
    /// The academic information section.
    pub academic_info: Option<AcademicInfo>,
    /// The document checklist.
    pub documents: Option<Vec<DocumentUpload>>,
    /// The chosen program.
    pub program: Option<String>,
    /// The chosen university.
    pub university: Option<String>,
}

/// Returns true if an optional field is present and non-blank.
fn is_filled(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Scores the document checklist section.
///
/// Only required documents count. An absent array or a checklist with no
/// required documents contributes 0. More uploads than required slots
/// cannot push the section past full credit.
fn document_score(documents: Option<&[DocumentUpload]>) -> f64 {
    let Some(docs) = documents else {
        return 0.0;
    };

    let required: usize = docs.iter().filter(|d| d.required).count();
    if required == 0 {
        return 0.0;
    }

    let uploaded_required: usize = docs
        .iter()
        .filter(|d| d.required && d.uploaded)
        .count()
        .min(required);

    // usize counts here are tiny; precision loss is not a concern
    #[allow(clippy::cast_precision_loss)]
    {
        SECTION_POINTS * (uploaded_required as f64 / required as f64)
    }
}

/// Computes the completion percentage for a form.
///
/// Personal and academic info score proportionally over their fixed field
/// checklists. Documents score proportionally over required uploads.
/// Program and university selection is all-or-nothing. The sum is rounded
/// to the nearest integer and clamped to `[0, 100]`.
#[must_use]
pub fn completion_percent(form: &ApplicationForm) -> u8 {
    #[allow(clippy::cast_precision_loss)]
    let personal: f64 = form.personal_info.as_ref().map_or(0.0, |info| {
        SECTION_POINTS * (info.filled_fields() as f64 / PersonalInfo::FIELD_COUNT as f64)
    });

    #[allow(clippy::cast_precision_loss)]
    let academic: f64 = form.academic_info.as_ref().map_or(0.0, |info| {
        SECTION_POINTS * (info.filled_fields() as f64 / AcademicInfo::FIELD_COUNT as f64)
    });

    let documents: f64 = document_score(form.documents.as_deref());

    let selection: f64 = if is_filled(&form.program) && is_filled(&form.university) {
        SECTION_POINTS
    } else {
        0.0
    };

    let total: f64 = (personal + academic + documents + selection).round();

    // Defensive clamp: intermediate sums must never escape [0, 100]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        total.clamp(0.0, 100.0) as u8
    }
}
