// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use uni_apply_domain::{Application, ApplicationStatus};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request application changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit a new application.
    SubmitApplication {
        /// The application to submit, already carrying its form data.
        application: Application,
    },
    /// Move an existing application to a new status.
    UpdateStatus {
        /// The status to move to.
        new_status: ApplicationStatus,
        /// Optional reviewer note explaining the change.
        note: Option<String>,
    },
}
