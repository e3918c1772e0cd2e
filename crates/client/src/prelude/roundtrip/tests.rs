// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn initial_is_not_pending() {
    assert!(!Watermark::INITIAL.is_pending());
}

#[test]
fn start_then_finish_pending() {
    let mut watermark = Watermark::INITIAL;
    let token = watermark.start_pending();
    assert!(watermark.is_pending());
    assert!(watermark.finish_pending(token));
    assert!(!watermark.is_pending());
}

#[test]
fn superseded_token_is_rejected() {
    let mut watermark = Watermark::INITIAL;
    let first_token = watermark.start_pending();
    let second_token = watermark.start_pending();
    assert!(!watermark.finish_pending(first_token));
    assert!(watermark.is_pending());
    assert!(watermark.finish_pending(second_token));
    assert!(!watermark.is_pending());
}

#[test]
fn reset_invalidates_pending_token() {
    let mut watermark = Watermark::INITIAL;
    let token = watermark.start_pending();
    watermark.reset();
    assert!(!watermark.is_pending());
    assert!(!watermark.finish_pending(token));
}

#[test]
fn finished_token_cannot_be_reused() {
    let mut watermark = Watermark::INITIAL;
    let token = watermark.start_pending();
    assert!(watermark.finish_pending(token));
    assert!(!watermark.finish_pending(token));
}
