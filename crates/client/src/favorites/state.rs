// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashSet;

use videotheca_core::VideoId;

#[derive(Debug, Default)]
pub struct State {
    pub(super) video_ids: HashSet<VideoId>,
}

impl State {
    #[must_use]
    pub fn is_favorite(&self, video_id: &VideoId) -> bool {
        self.video_ids.contains(video_id)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.video_ids.len()
    }
}
