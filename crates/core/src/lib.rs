// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lifecycle transition core.
//!
//! Commands are the only way to change an application. Applying a
//! command never mutates the input; it produces a new application plus
//! exactly one timeline event describing the change, so the pairing of
//! status updates with history is enforced by construction rather than
//! by convention.

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

mod apply;
mod command;
mod error;

pub use apply::{TransitionResult, apply};
pub use command::Command;
pub use error::CoreError;
