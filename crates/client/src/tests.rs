// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use reqwest::Url;

use crate::{
    Action, Effect, Intent, State, Task, listing,
    prelude::{
        Environment, MessageHandled, message_channel,
        mutable::{handle_next_message, message_loop},
        send_message,
    },
    search_input,
};

fn dummy_api_url() -> Url {
    "http://[::1]:8080".parse().unwrap()
}

fn test_env() -> Environment {
    Environment::new(dummy_api_url())
}

#[test]
fn should_handle_error() {
    let shared_env = Arc::new(test_env());
    let (message_tx, _) = message_channel();
    let mut state = State::default();
    let effect = Effect::ErrorOccurred(anyhow::anyhow!("an error occurred"));
    assert_eq!(
        MessageHandled::NoProgress,
        handle_next_message(
            &shared_env,
            &mut state,
            &message_tx,
            effect.into(),
            &mut |_| { None },
        )
    );
    assert_eq!(1, state.last_errors().len());
}

#[test]
fn should_handle_listing_error() {
    let shared_env = Arc::new(test_env());
    let (message_tx, _) = message_channel();
    let mut state = State::default();
    let effect = listing::Effect::ErrorOccurred(anyhow::anyhow!("an error occurred"));
    assert_eq!(
        MessageHandled::NoProgress,
        handle_next_message(
            &shared_env,
            &mut state,
            &message_tx,
            effect.into(),
            &mut |_| { None },
        )
    );
    assert_eq!(1, state.last_errors().len());
}

#[tokio::test]
async fn should_catch_error_and_terminate() {
    let shared_env = Arc::new(test_env());
    let (message_tx, message_rx) = message_channel();
    let effect = Effect::ErrorOccurred(anyhow::anyhow!("an error occurred"));
    send_message(&message_tx, Intent::InjectEffect(Box::new(effect)));
    let state = message_loop(
        shared_env,
        (message_tx, message_rx),
        Default::default(),
        Box::new(|_: &State| None),
    )
    .await;
    assert_eq!(1, state.last_errors().len());
}

#[tokio::test]
async fn should_terminate_on_intent_when_no_tasks_pending() {
    let shared_env = Arc::new(test_env());
    let (message_tx, message_rx) = message_channel();
    send_message(&message_tx, Intent::Terminate);
    let state = message_loop(
        shared_env,
        (message_tx, message_rx),
        Default::default(),
        Box::new(|_: &State| None),
    )
    .await;
    assert!(state.is_terminating());
    assert!(state.last_errors().is_empty());
}

#[test]
fn clearing_more_errors_than_remain_is_clamped() {
    fn apply_next_effect(state: &mut State, update: crate::ModelUpdated) {
        match update.next_action {
            Some(Action::ApplyEffect(effect)) => {
                effect.apply_on(state);
            }
            next_action => panic!("unexpected action: {next_action:?}"),
        }
    }

    let mut state = State::default();
    Effect::ErrorOccurred(anyhow::anyhow!("first")).apply_on(&mut state);
    Effect::ErrorOccurred(anyhow::anyhow!("second")).apply_on(&mut state);
    assert_eq!(2, state.last_errors().len());

    // Overlapping clear requests: the second one was issued while the
    // first one was still in flight and outnumbers the errors that
    // remain after the first one has been applied.
    let first_clear = Intent::ClearFirstErrorsBeforeNextRenderState(1).apply_on(&mut state);
    apply_next_effect(&mut state, first_clear);
    assert_eq!(1, state.last_errors().len());

    let second_clear = Intent::ClearFirstErrorsBeforeNextRenderState(2).apply_on(&mut state);
    apply_next_effect(&mut state, second_clear);
    assert!(state.last_errors().is_empty());
}

#[test]
fn committed_search_text_flows_into_the_canonical_query() {
    let mut state = State::default();

    let update =
        Intent::SearchInputIntent(search_input::Intent::EditText("abc".to_owned()))
            .apply_on(&mut state);
    let generation = match update.next_action {
        Some(Action::DispatchTask(Task::SearchInput(search_input::Task::DelayCommit {
            generation,
        }))) => generation,
        next_action => panic!("unexpected action: {next_action:?}"),
    };
    assert_eq!("abc", state.search_input.text());
    // The canonical query is still untouched
    assert_eq!("", state.listing.query().search_text);

    // The commit delay elapses and the effects cascade into a fetch
    let mut next_effect =
        Effect::SearchInputEffect(search_input::Effect::CommitDue { generation });
    let task = loop {
        let update = next_effect.apply_on(&mut state);
        match update.next_action {
            Some(Action::ApplyEffect(effect)) => next_effect = effect,
            Some(Action::DispatchTask(task)) => break task,
            None => panic!("expected a dispatched fetch"),
        }
    };
    match task {
        Task::Listing(listing::Task::FetchResults { query, .. }) => {
            assert_eq!("abc", query.search_text);
            // Committing the search text resets the page
            assert_eq!(1, query.page);
        }
        task => panic!("unexpected task: {task:?}"),
    }
    assert_eq!("abc", state.listing.query().search_text);
}

#[test]
fn url_change_syncs_the_search_text_without_committing() {
    let mut state = State::default();

    // An edit is still pending when the URL changes
    Intent::SearchInputIntent(search_input::Intent::EditText("pending".to_owned()))
        .apply_on(&mut state);

    let update = Intent::UrlChanged("?page=3&q=xyz&tag=t".to_owned()).apply_on(&mut state);
    assert!(matches!(
        update.next_action,
        Some(Action::ApplyEffect(Effect::ListingEffect(
            listing::Effect::QueryUpdated
        )))
    ));
    assert_eq!("xyz", state.search_input.text());
    assert_eq!("xyz", state.listing.query().search_text);
    // Navigating never resets the page
    assert_eq!(3, state.listing.query().page);
    assert_eq!(vec!["t".to_owned()], state.listing.query().tags);
}

#[test]
fn url_change_to_the_current_query_is_a_no_op() {
    let mut state = State::default();
    Intent::UrlChanged("?q=abc".to_owned()).apply_on(&mut state);

    let update = Intent::UrlChanged("?q=abc".to_owned()).apply_on(&mut state);
    assert!(update.next_action.is_none());
}

#[tokio::test]
async fn url_change_cancels_a_pending_commit() {
    let shared_env = Arc::new(test_env());
    let (message_tx, message_rx) = message_channel();
    send_message(
        &message_tx,
        Intent::SearchInputIntent(search_input::Intent::EditText("abc".to_owned())),
    );
    // Syncing from the unchanged URL cancels the pending commit, so
    // the delay expires silently and no fetch is ever dispatched.
    send_message(&message_tx, Intent::UrlChanged(String::new()));
    send_message(&message_tx, Intent::Terminate);
    let state = message_loop(
        shared_env,
        (message_tx, message_rx),
        Default::default(),
        Box::new(|_: &State| None),
    )
    .await;
    assert_eq!("", state.search_input.text());
    assert_eq!("", state.listing.query().search_text);
    assert!(state.listing.last_results().is_none());
    assert!(state.last_errors().is_empty());
}
