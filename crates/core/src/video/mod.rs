// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{actor::Actor, tag::Tag, util::null_to_default};

/// Opaque identifier of a video in the catalog.
///
/// Assigned by the backend, never interpreted by clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VideoId(String);

impl VideoId {
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for VideoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for VideoId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Star rating of a video.
///
/// `0` denotes unrated, valid ratings are `1..=5`.
pub type Stars = u8;

/// Upper bound of the star rating scale (inclusive).
pub const STARS_MAX: Stars = 5;

/// A playable rendition of a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFormat {
    pub id: i64,
    pub name: String,
    pub file_path: String,
}

/// A cataloged video with its facets and media references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,

    pub title: String,

    /// Source URL the video was cataloged from.
    pub url: String,

    pub date: String,

    /// Relative path of the thumbnail image on the media file server.
    pub jpg: String,

    /// Relative path of the still picture directory on the media file server.
    pub pictures_dir: String,

    #[serde(default, deserialize_with = "null_to_default")]
    pub actors: Vec<Actor>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub tags: Vec<Tag>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub formats: Vec<VideoFormat>,

    #[serde(default)]
    pub rating: Stars,

    pub created_at: String,

    pub updated_at: String,
}

impl Video {
    /// Whether at least one playable rendition exists.
    #[must_use]
    pub fn has_playable_format(&self) -> bool {
        !self.formats.is_empty()
    }
}
