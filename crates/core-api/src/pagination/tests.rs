// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{PageWindowItem::*, *};

#[test]
fn no_pages() {
    assert!(page_window(1, 0).is_empty());
}

#[test]
fn all_pages_up_to_seven() {
    assert_eq!(vec![Page(1)], page_window(1, 1));
    assert_eq!(
        vec![
            Page(1),
            Page(2),
            Page(3),
            Page(4),
            Page(5),
            Page(6),
            Page(7)
        ],
        page_window(3, 7)
    );
}

#[test]
fn near_the_start() {
    for page in 1..=4 {
        assert_eq!(
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(9)
            ],
            page_window(page, 9)
        );
    }
}

#[test]
fn near_the_end() {
    for page in 6..=9 {
        assert_eq!(
            vec![
                Page(1),
                Ellipsis,
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Page(9)
            ],
            page_window(page, 9)
        );
    }
}

#[test]
fn in_the_middle() {
    assert_eq!(
        vec![
            Page(1),
            Ellipsis,
            Page(4),
            Page(5),
            Page(6),
            Ellipsis,
            Page(9)
        ],
        page_window(5, 9)
    );
    assert_eq!(
        vec![
            Page(1),
            Ellipsis,
            Page(49),
            Page(50),
            Page(51),
            Ellipsis,
            Page(100)
        ],
        page_window(50, 100)
    );
}

#[test]
fn boundaries_between_window_shapes() {
    // 8 pages: page 4 still anchors at the start, page 5 at the end
    assert_eq!(
        vec![
            Page(1),
            Page(2),
            Page(3),
            Page(4),
            Page(5),
            Ellipsis,
            Page(8)
        ],
        page_window(4, 8)
    );
    assert_eq!(
        vec![
            Page(1),
            Ellipsis,
            Page(4),
            Page(5),
            Page(6),
            Page(7),
            Page(8)
        ],
        page_window(5, 8)
    );
}
