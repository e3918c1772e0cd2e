// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::{Actor, Tag};

use crate::prelude::remote::{DataSnapshot, RemoteData};

#[derive(Debug, Default)]
pub struct State {
    pub(super) tags: RemoteData<Vec<Tag>>,
    pub(super) actors: RemoteData<Vec<Actor>>,
}

impl State {
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        self.tags.last_value().map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn actors(&self) -> &[Actor] {
        self.actors
            .last_value()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn tags_snapshot(&self) -> Option<&DataSnapshot<Vec<Tag>>> {
        self.tags.last_snapshot()
    }

    #[must_use]
    pub fn actors_snapshot(&self) -> Option<&DataSnapshot<Vec<Actor>>> {
        self.actors.last_snapshot()
    }
}
