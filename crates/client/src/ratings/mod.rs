// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Star ratings of videos.
//!
//! Clicking the currently effective star removes the rating, any
//! other star sets it. Mutations are optimistic: a local overlay
//! shadows the rating delivered with the video data and is rolled
//! back to the previously effective value if the server rejects the
//! mutation.

pub mod effect;
pub mod intent;
pub mod state;
pub mod task;

pub use self::{effect::Effect, intent::Intent, state::State, task::Task};

pub type Action = crate::prelude::Action<Effect, Task>;
pub type ModelUpdate = crate::prelude::mutable::ModelUpdated<Effect, Task>;

#[cfg(test)]
mod tests;
