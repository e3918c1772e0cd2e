// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::Video;
use videotheca_core_api::{
    PaginatedResult,
    pagination::{PageWindowItem, page_window},
    video::list::ListQuery,
};

use crate::prelude::remote::{DataSnapshot, RemoteData};

#[derive(Debug, Default)]
pub struct State {
    pub(super) query: ListQuery,
    pub(super) results: RemoteData<PaginatedResult<Video>>,
}

impl State {
    #[must_use]
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }

    /// The canonical URL query string of the current state.
    #[must_use]
    pub fn encoded_query(&self) -> String {
        self.query.encode()
    }

    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.results.is_pending()
    }

    /// The last received result page, which may still reflect a
    /// preceding query while a fetch is in flight.
    #[must_use]
    pub fn last_results(&self) -> Option<&PaginatedResult<Video>> {
        self.results.last_value()
    }

    #[must_use]
    pub fn results_snapshot(&self) -> Option<&DataSnapshot<PaginatedResult<Video>>> {
        self.results.last_snapshot()
    }

    /// The compressed page-number window of the last received results.
    ///
    /// The page count reported by the server governs the window, not
    /// the page number of the local query.
    #[must_use]
    pub fn page_window(&self) -> Vec<PageWindowItem> {
        self.last_results()
            .map(|results| page_window(results.page, results.total_pages))
            .unwrap_or_default()
    }
}
