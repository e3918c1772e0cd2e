// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(clippy::pedantic)]
// Additional restrictions
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::self_named_module_files)]
// Repetitions of module/type names occur frequently when using many
// modules for keeping the size of the source files handy. Often
// types have the same name as their parent module.
#![allow(clippy::module_name_repetitions)]
// Repeating the type name in `Default::default()` expressions is not needed
// as long as the context is obvious.
#![allow(clippy::default_trait_access)]
// Using wildcard imports consciously is acceptable.
#![allow(clippy::wildcard_imports)]

use serde::{Deserialize, Serialize};

use videotheca_core::util::null_to_default;

pub mod pagination;
pub mod video;

/// 1-based page number.
pub type PageNumber = u32;

/// One page of results as returned by the backend.
///
/// Ephemeral response data, never cached beyond the query that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedResult<T> {
    #[serde(rename = "data", default, deserialize_with = "null_to_default")]
    pub items: Vec<T>,

    pub total: u64,

    pub page: PageNumber,

    pub per_page: u32,

    pub total_pages: PageNumber,
}

impl<T> PaginatedResult<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}
