// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Compressed page-number window for pagination controls.

use crate::PageNumber;

/// Show all page numbers up to this many total pages.
const UNCOMPRESSED_MAX_TOTAL_PAGES: PageNumber = 7;

/// An element of the rendered page-number window.
///
/// Ellipsis markers are decorative and carry no navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageWindowItem {
    Page(PageNumber),
    Ellipsis,
}

/// Compute the compressed page-number window around the current page.
///
/// All pages are shown while the total fits. Otherwise the window keeps
/// the first and last page visible and compresses the far side(s) into
/// an ellipsis:
///
/// - `page <= 4`: `1 2 3 4 5 … last`
/// - `page >= total_pages - 3`: `1 … last-4 last-3 last-2 last-1 last`
/// - otherwise: `1 … page-1 page page+1 … last`
#[must_use]
pub fn page_window(page: PageNumber, total_pages: PageNumber) -> Vec<PageWindowItem> {
    use PageWindowItem::*;

    if total_pages <= UNCOMPRESSED_MAX_TOTAL_PAGES {
        return (1..=total_pages).map(Page).collect();
    }
    if page <= 4 {
        let mut window: Vec<_> = (1..=5).map(Page).collect();
        window.push(Ellipsis);
        window.push(Page(total_pages));
        return window;
    }
    if page >= total_pages - 3 {
        let mut window = vec![Page(1), Ellipsis];
        window.extend((total_pages - 4..=total_pages).map(Page));
        return window;
    }
    vec![
        Page(1),
        Ellipsis,
        Page(page - 1),
        Page(page),
        Page(page + 1),
        Ellipsis,
        Page(total_pages),
    ]
}

#[cfg(test)]
mod tests;
