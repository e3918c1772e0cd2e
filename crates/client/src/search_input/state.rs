// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::Generation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Idle,
    PendingCommit,
}

#[derive(Debug)]
pub struct State {
    pub(super) text: String,
    pub(super) control_state: ControlState,
    pub(super) generation: Generation,
}

impl Default for State {
    fn default() -> Self {
        Self {
            text: String::new(),
            control_state: ControlState::Idle,
            generation: 0,
        }
    }
}

impl State {
    /// The locally-displayed text, which may not have been committed yet.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn control_state(&self) -> ControlState {
        self.control_state
    }

    pub(super) fn bump_generation(&mut self) -> Generation {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}
