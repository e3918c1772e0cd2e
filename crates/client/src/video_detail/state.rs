// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::Video;

use crate::prelude::remote::{DataSnapshot, RemoteData};

#[derive(Debug, Default)]
pub struct State {
    pub(super) video: RemoteData<Video>,
    pub(super) pictures: RemoteData<Vec<String>>,
}

impl State {
    #[must_use]
    pub fn video(&self) -> Option<&Video> {
        self.video.last_value()
    }

    /// Relative paths of the still pictures on the media file server.
    #[must_use]
    pub fn pictures(&self) -> &[String] {
        self.pictures
            .last_value()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn video_snapshot(&self) -> Option<&DataSnapshot<Video>> {
        self.video.last_snapshot()
    }

    #[must_use]
    pub fn pictures_snapshot(&self) -> Option<&DataSnapshot<Vec<String>>> {
        self.pictures.last_snapshot()
    }

    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.video.is_pending() || self.pictures.is_pending()
    }

    pub fn reset(&mut self) {
        self.video.reset();
        self.pictures.reset();
    }
}
