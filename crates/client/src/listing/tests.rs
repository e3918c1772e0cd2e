// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::Video;
use videotheca_core_api::{PaginatedResult, video::list::ListQuery};

use crate::prelude::{mutable::ModelMutation, roundtrip::PendingToken};

use super::*;

fn result_page(page: u32, total_pages: u32) -> PaginatedResult<Video> {
    PaginatedResult {
        items: Vec::new(),
        total: u64::from(total_pages) * 20,
        page,
        per_page: 20,
        total_pages,
    }
}

fn start_fetch(state: &mut State) -> PendingToken {
    let update = Effect::QueryUpdated.apply_on(state);
    match update.next_action {
        Some(Action::DispatchTask(Task::FetchResults { token, .. })) => token,
        next_action => panic!("unexpected action: {next_action:?}"),
    }
}

fn assert_unchanged_without_action(update: &ModelUpdate) {
    assert_eq!(ModelMutation::Unchanged, update.state_mutation);
    assert!(update.next_action.is_none());
}

#[test]
fn toggling_a_tag_updates_the_query_and_requests_a_fetch() {
    let mut state = State::default();
    state.query = ListQuery::decode("?page=3&q=abc");

    let update = Intent::ToggleTag("tag1".to_owned()).apply_on(&mut state);

    assert!(matches!(
        update.next_action,
        Some(Action::ApplyEffect(Effect::QueryUpdated))
    ));
    assert_eq!(vec!["tag1".to_owned()], state.query().tags);
    assert_eq!("abc", state.query().search_text);
    // Filter mutations reset the page
    assert_eq!(1, state.query().page);
}

#[test]
fn navigating_to_a_page_keeps_the_filters() {
    let mut state = State::default();
    state.query = ListQuery::decode("?q=abc&tag=t&min_rating=2");

    let update = Intent::GoToPage(4).apply_on(&mut state);

    assert!(matches!(
        update.next_action,
        Some(Action::ApplyEffect(Effect::QueryUpdated))
    ));
    assert_eq!(4, state.query().page);
    assert_eq!("abc", state.query().search_text);
    assert_eq!(vec!["t".to_owned()], state.query().tags);
    assert_eq!(2, state.query().min_rating);
}

#[test]
fn navigating_to_the_current_url_is_a_no_op() {
    let mut state = State::default();
    state.query = ListQuery::decode("?q=abc&tag=t");

    let update = Intent::NavigateUrl(ListQuery::decode("?q=abc&tag=t")).apply_on(&mut state);

    assert_unchanged_without_action(&update);
}

#[test]
fn committing_unchanged_search_text_is_a_no_op() {
    let mut state = State::default();
    state.query = ListQuery::decode("?page=3&q=abc");

    let update = Intent::CommitSearchText("abc".to_owned()).apply_on(&mut state);

    assert_unchanged_without_action(&update);
    // No page reset without an effective change
    assert_eq!(3, state.query().page);
}

#[test]
fn fetched_results_replace_the_last_results() {
    let mut state = State::default();
    let token = start_fetch(&mut state);
    assert!(state.is_fetching());

    let update = Effect::ResultsFetched {
        token,
        result: Ok(result_page(1, 3)),
    }
    .apply_on(&mut state);

    assert!(update.next_action.is_none());
    assert!(!state.is_fetching());
    assert_eq!(Some(1), state.last_results().map(|results| results.page));
}

#[test]
fn results_of_a_superseded_fetch_are_discarded() {
    let mut state = State::default();
    let superseded_token = start_fetch(&mut state);
    state.query.set_page(2);
    let latest_token = start_fetch(&mut state);

    // The responses arrive out of order
    let update = Effect::ResultsFetched {
        token: latest_token,
        result: Ok(result_page(2, 3)),
    }
    .apply_on(&mut state);
    assert!(update.next_action.is_none());
    assert_eq!(Some(2), state.last_results().map(|results| results.page));

    let update = Effect::ResultsFetched {
        token: superseded_token,
        result: Ok(result_page(1, 3)),
    }
    .apply_on(&mut state);
    assert_unchanged_without_action(&update);
    assert_eq!(Some(2), state.last_results().map(|results| results.page));
}

#[test]
fn error_of_a_superseded_fetch_is_discarded() {
    let mut state = State::default();
    let superseded_token = start_fetch(&mut state);
    let latest_token = start_fetch(&mut state);

    let update = Effect::ResultsFetched {
        token: superseded_token,
        result: Err(anyhow::anyhow!("request timed out")),
    }
    .apply_on(&mut state);
    assert_unchanged_without_action(&update);
    assert!(state.is_fetching());

    let update = Effect::ResultsFetched {
        token: latest_token,
        result: Ok(result_page(1, 1)),
    }
    .apply_on(&mut state);
    assert!(update.next_action.is_none());
    assert!(!state.is_fetching());
}

#[test]
fn failed_fetch_keeps_the_last_results_and_reports_the_error() {
    let mut state = State::default();
    let token = start_fetch(&mut state);
    Effect::ResultsFetched {
        token,
        result: Ok(result_page(1, 3)),
    }
    .apply_on(&mut state);

    let token = start_fetch(&mut state);
    let update = Effect::ResultsFetched {
        token,
        result: Err(anyhow::anyhow!("service unavailable")),
    }
    .apply_on(&mut state);

    assert!(matches!(
        update.next_action,
        Some(Action::ApplyEffect(Effect::ErrorOccurred(_)))
    ));
    assert!(!state.is_fetching());
    assert_eq!(Some(1), state.last_results().map(|results| results.page));
}

#[test]
fn going_to_page_zero_is_rejected() {
    let mut state = State::default();
    state.query = ListQuery::decode("?q=abc&page=3");

    let update = Intent::GoToPage(0).apply_on(&mut state);

    assert_unchanged_without_action(&update);
    assert_eq!(3, state.query().page);
}

#[test]
fn page_navigation_is_bounded_by_the_last_results() {
    let mut state = State::default();

    // No results received yet
    assert_unchanged_without_action(&Intent::NextPage.apply_on(&mut state));
    assert_unchanged_without_action(&Intent::PreviousPage.apply_on(&mut state));

    let token = start_fetch(&mut state);
    Effect::ResultsFetched {
        token,
        result: Ok(result_page(3, 3)),
    }
    .apply_on(&mut state);

    // Already on the last page
    assert_unchanged_without_action(&Intent::NextPage.apply_on(&mut state));

    let update = Intent::PreviousPage.apply_on(&mut state);
    assert!(matches!(
        update.next_action,
        Some(Action::ApplyEffect(Effect::QueryUpdated))
    ));
    assert_eq!(2, state.query().page);
}

#[test]
fn page_window_follows_the_reported_results() {
    use videotheca_core_api::pagination::PageWindowItem::*;

    let mut state = State::default();
    assert!(state.page_window().is_empty());

    let token = start_fetch(&mut state);
    Effect::ResultsFetched {
        token,
        result: Ok(result_page(5, 9)),
    }
    .apply_on(&mut state);

    assert_eq!(
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(9)],
        state.page_window()
    );
}
