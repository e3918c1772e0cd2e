// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;

use videotheca_core::{Stars, Video, VideoId};

use super::Intent;

#[derive(Debug, Default)]
pub struct State {
    pub(super) overlay: HashMap<VideoId, Stars>,
}

impl State {
    /// The effective rating, i.e. the local overlay if present or the
    /// rating delivered with the video data otherwise.
    #[must_use]
    pub fn effective_rating(&self, video: &Video) -> Stars {
        self.overlay
            .get(&video.id)
            .copied()
            .unwrap_or(video.rating)
    }

    /// Translate a star click into the corresponding intent.
    ///
    /// Clicking the currently effective star removes the rating.
    #[must_use]
    pub fn click_star(&self, video: &Video, clicked: Stars) -> Intent {
        let previous = self.effective_rating(video);
        if clicked == previous {
            Intent::Remove {
                video_id: video.id.clone(),
                previous,
            }
        } else {
            Intent::Set {
                video_id: video.id.clone(),
                stars: clicked,
                previous,
            }
        }
    }
}
