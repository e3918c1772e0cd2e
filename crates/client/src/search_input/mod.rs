// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Debounced search text input.
//!
//! Edits are reflected in the displayed text immediately, but only
//! committed into the canonical query after a quiet period without
//! further edits. Each edit bumps a generation counter and arms a
//! fresh delay task. Delay tasks of outdated generations expire
//! silently, i.e. only the delay armed by the most recent edit ever
//! commits.
//!
//! Synchronizing the text from an external source like the browsed
//! URL cancels any pending commit without ever committing itself.

use std::time::Duration;

pub mod effect;
pub mod intent;
pub mod state;
pub mod task;

pub use self::{effect::Effect, intent::Intent, state::State, task::Task};

pub type Action = crate::prelude::Action<Effect, Task>;
pub type ModelUpdate = crate::prelude::mutable::ModelUpdated<Effect, Task>;

/// Quiet period between the last edit and the commit.
pub const COMMIT_DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

pub type Generation = usize;

#[cfg(test)]
mod tests;
