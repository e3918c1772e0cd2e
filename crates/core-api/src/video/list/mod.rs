// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The URL-synchronized query state of the video list view.
//!
//! The encoded query string is the only durable representation of this
//! state. All mutations go through [`ListQuery`] so that the page-reset
//! rule and the minimality invariant cannot be bypassed by hand-assembled
//! query strings.

use std::borrow::Cow;

use url::form_urlencoded;

use videotheca_core::{STARS_MAX, Stars};

use crate::PageNumber;

/// URL key of the free-text search term.
pub const QUERY_KEY_SEARCH_TEXT: &str = "q";

/// URL key of the tag facet (repeated).
pub const QUERY_KEY_TAG: &str = "tag";

/// URL key of the actor facet (repeated).
pub const QUERY_KEY_ACTOR: &str = "actor";

/// URL key of the playable-format toggle.
pub const QUERY_KEY_HAS_VIDEO: &str = "has_video";

/// URL key of the minimum star rating threshold.
pub const QUERY_KEY_MIN_RATING: &str = "min_rating";

/// URL key of the page number.
pub const QUERY_KEY_PAGE: &str = "page";

const DEFAULT_PAGE: PageNumber = 1;

/// The resolved query/filter state of the video list view.
///
/// Field defaults are never serialized (minimality invariant), i.e.
/// a query at its default state encodes to the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based result page, always positive.
    pub page: PageNumber,

    /// Free-text search term, empty when absent.
    pub search_text: String,

    /// Selected tag facet values in insertion order, without duplicates.
    pub tags: Vec<String>,

    /// Selected actor facet values in insertion order, without duplicates.
    pub actors: Vec<String>,

    /// Restrict results to videos with at least one playable format.
    pub has_video: bool,

    /// Include only videos rated at least this many stars, 0 = unfiltered.
    pub min_rating: Stars,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            search_text: String::new(),
            tags: Vec::new(),
            actors: Vec::new(),
            has_video: true,
            min_rating: 0,
        }
    }
}

impl ListQuery {
    /// Decode a query string into the resolved list state.
    ///
    /// Total over arbitrary input: unknown keys are ignored and malformed
    /// values decode to the respective field's default. A leading `?` is
    /// tolerated. Repeated `tag`/`actor` keys are collected in appearance
    /// order, dropping duplicate values.
    #[must_use]
    pub fn decode(query_str: &str) -> Self {
        let query_str = query_str.strip_prefix('?').unwrap_or(query_str);
        let mut decoded = Self::default();
        for (key, value) in form_urlencoded::parse(query_str.as_bytes()) {
            match key.as_ref() {
                QUERY_KEY_SEARCH_TEXT => {
                    decoded.search_text = value.into_owned();
                }
                QUERY_KEY_TAG => {
                    push_facet_value(&mut decoded.tags, value);
                }
                QUERY_KEY_ACTOR => {
                    push_facet_value(&mut decoded.actors, value);
                }
                QUERY_KEY_HAS_VIDEO => {
                    decoded.has_video = value != "false";
                }
                QUERY_KEY_MIN_RATING => {
                    decoded.min_rating = value
                        .parse::<Stars>()
                        .ok()
                        .filter(|min_rating| *min_rating <= STARS_MAX)
                        .unwrap_or(0);
                }
                QUERY_KEY_PAGE => {
                    decoded.page = value
                        .parse::<PageNumber>()
                        .ok()
                        .filter(|page| *page > 0)
                        .unwrap_or(DEFAULT_PAGE);
                }
                _ => (), // Unknown keys are ignored
            }
        }
        decoded
    }

    /// Encode the canonical query string.
    ///
    /// Fields at their default are omitted entirely. The key order is
    /// canonical so that re-encoding a decoded query is stable.
    #[must_use]
    pub fn encode(&self) -> String {
        let Self {
            page,
            search_text,
            tags,
            actors,
            has_video,
            min_rating,
        } = self;
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !search_text.is_empty() {
            serializer.append_pair(QUERY_KEY_SEARCH_TEXT, search_text);
        }
        for tag in tags {
            serializer.append_pair(QUERY_KEY_TAG, tag);
        }
        for actor in actors {
            serializer.append_pair(QUERY_KEY_ACTOR, actor);
        }
        if !has_video {
            serializer.append_pair(QUERY_KEY_HAS_VIDEO, "false");
        }
        if *min_rating > 0 {
            serializer.append_pair(QUERY_KEY_MIN_RATING, &min_rating.to_string());
        }
        if *page != DEFAULT_PAGE {
            serializer.append_pair(QUERY_KEY_PAGE, &page.to_string());
        }
        serializer.finish()
    }

    /// Toggle a tag facet value in place.
    ///
    /// Removes the value if selected, otherwise appends it to the end of
    /// the ordered selection. Resets the page.
    pub fn toggle_tag(&mut self, name: &str) {
        toggle_facet_value(&mut self.tags, name);
        self.page = DEFAULT_PAGE;
    }

    /// Toggle an actor facet value in place. Resets the page.
    pub fn toggle_actor(&mut self, name: &str) {
        toggle_facet_value(&mut self.actors, name);
        self.page = DEFAULT_PAGE;
    }

    /// Clear the tag facet only. Resets the page.
    pub fn clear_tags(&mut self) {
        self.tags.clear();
        self.page = DEFAULT_PAGE;
    }

    /// Clear the actor facet only. Resets the page.
    pub fn clear_actors(&mut self) {
        self.actors.clear();
        self.page = DEFAULT_PAGE;
    }

    /// Replace the committed search text. Resets the page.
    pub fn commit_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = DEFAULT_PAGE;
    }

    /// Switch the playable-format restriction. Resets the page.
    pub fn set_has_video(&mut self, has_video: bool) {
        self.has_video = has_video;
        self.page = DEFAULT_PAGE;
    }

    /// Apply a click on a star rating threshold level.
    ///
    /// Clicking the current threshold clears the filter, clicking any
    /// other level replaces it (single-value control, not a set).
    /// Resets the page.
    pub fn click_min_rating(&mut self, stars: Stars) {
        debug_assert!(stars >= 1);
        debug_assert!(stars <= STARS_MAX);
        if self.min_rating == stars {
            self.min_rating = 0;
        } else {
            self.min_rating = stars;
        }
        self.page = DEFAULT_PAGE;
    }

    /// Pure page navigation, never touches any filter field.
    pub fn set_page(&mut self, page: PageNumber) {
        debug_assert!(page > 0);
        self.page = page.max(DEFAULT_PAGE);
    }
}

fn push_facet_value(selection: &mut Vec<String>, value: Cow<'_, str>) {
    if value.is_empty() {
        return;
    }
    if selection.iter().any(|selected| *selected == value) {
        // Set semantics, keep the first occurrence
        return;
    }
    selection.push(value.into_owned());
}

fn toggle_facet_value(selection: &mut Vec<String>, name: &str) {
    if let Some(index) = selection.iter().position(|selected| selected == name) {
        // Untouched entries keep their relative order
        selection.remove(index);
    } else {
        selection.push(name.to_owned());
    }
}
