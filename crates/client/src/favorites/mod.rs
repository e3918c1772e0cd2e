// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Favorite videos.
//!
//! Toggling is optimistic. The local set is updated immediately and
//! rolled back if the server rejects the mutation.

pub mod effect;
pub mod intent;
pub mod state;
pub mod task;

pub use self::{effect::Effect, intent::Intent, state::State, task::Task};

pub type Action = crate::prelude::Action<Effect, Task>;
pub type ModelUpdate = crate::prelude::mutable::ModelUpdated<Effect, Task>;

#[cfg(test)]
mod tests;
