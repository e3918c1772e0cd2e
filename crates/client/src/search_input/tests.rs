// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::mutable::ModelMutation;

use super::{state::ControlState, *};

fn edit_text(state: &mut State, text: &str) -> Generation {
    let update = Intent::EditText(text.to_owned()).apply_on(state);
    match update.next_action {
        Some(Action::DispatchTask(Task::DelayCommit { generation })) => generation,
        next_action => panic!("unexpected action: {next_action:?}"),
    }
}

#[test]
fn editing_updates_the_text_immediately_and_arms_a_delayed_commit() {
    let mut state = State::default();

    let generation = edit_text(&mut state, "abc");

    assert_eq!("abc", state.text());
    assert_eq!(ControlState::PendingCommit, state.control_state());
    assert_eq!(state.generation, generation);
}

#[test]
fn only_the_latest_edit_commits() {
    let mut state = State::default();

    let outdated_generation = edit_text(&mut state, "a");
    let latest_generation = edit_text(&mut state, "ab");
    assert_ne!(outdated_generation, latest_generation);

    // The delay of the first edit expires silently
    let update = Effect::CommitDue {
        generation: outdated_generation,
    }
    .apply_on(&mut state);
    assert_eq!(ModelMutation::Unchanged, update.state_mutation);
    assert!(update.next_action.is_none());
    assert_eq!(ControlState::PendingCommit, state.control_state());

    // The delay of the last edit commits the displayed text
    let update = Effect::CommitDue {
        generation: latest_generation,
    }
    .apply_on(&mut state);
    match update.next_action {
        Some(Action::ApplyEffect(Effect::TextCommitted(text))) => {
            assert_eq!("ab", text);
        }
        next_action => panic!("unexpected action: {next_action:?}"),
    }
    assert_eq!(ControlState::Idle, state.control_state());
}

#[test]
fn commit_delay_cannot_fire_twice() {
    let mut state = State::default();

    let generation = edit_text(&mut state, "abc");
    let update = Effect::CommitDue { generation }.apply_on(&mut state);
    assert!(update.next_action.is_some());

    let update = Effect::CommitDue { generation }.apply_on(&mut state);
    assert!(update.next_action.is_none());
}

#[test]
fn syncing_cancels_a_pending_commit_without_committing() {
    let mut state = State::default();

    let generation = edit_text(&mut state, "abc");

    let update = Intent::SyncText("xyz".to_owned()).apply_on(&mut state);
    assert!(update.next_action.is_none());
    assert_eq!("xyz", state.text());
    assert_eq!(ControlState::Idle, state.control_state());

    // The delay armed before the sync expires silently
    let update = Effect::CommitDue { generation }.apply_on(&mut state);
    assert_eq!(ModelMutation::Unchanged, update.state_mutation);
    assert!(update.next_action.is_none());
}

#[test]
fn syncing_identical_text_still_cancels_a_pending_commit() {
    let mut state = State::default();

    edit_text(&mut state, "abc");
    let generation = state.generation;

    Intent::SyncText("abc".to_owned()).apply_on(&mut state);
    assert_eq!(ControlState::Idle, state.control_state());

    let update = Effect::CommitDue { generation }.apply_on(&mut state);
    assert!(update.next_action.is_none());
}
