// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timeline events for the University Application Portal.
//!
//! An application's history is an append-only list of status-change
//! events. This crate defines the event type, the storage seam
//! ([`TimelineStore`]), an in-memory demo store, a deterministic
//! synthesizer for applications with no persisted history, and the
//! fallback-chain reader that ties the three together.
//!
//! Nothing in this crate (or anywhere in the workspace) mutates or
//! deletes an event once recorded.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod event;
mod reader;
mod store;
mod synthesizer;

pub use event::TimelineEvent;
pub use reader::{Timeline, TimelineReader};
pub use store::{MemoryTimelineStore, TimelineStore, TimelineStoreError};
pub use synthesizer::{SYNTHESIS_OFFSETS_DAYS, synthesize_timeline};
