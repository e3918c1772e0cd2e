// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::VideoId;

use super::*;

#[test]
fn toggling_adds_and_removes_optimistically() {
    let mut state = State::default();
    let video_id = VideoId::from("video-1");

    let update = Intent::Toggle(video_id.clone()).apply_on(&mut state);
    assert!(matches!(
        update.next_action,
        Some(Action::DispatchTask(Task::Add { .. }))
    ));
    assert!(state.is_favorite(&video_id));

    let update = Intent::Toggle(video_id.clone()).apply_on(&mut state);
    assert!(matches!(
        update.next_action,
        Some(Action::DispatchTask(Task::Remove { .. }))
    ));
    assert!(!state.is_favorite(&video_id));
}

#[test]
fn failed_add_rolls_back() {
    let mut state = State::default();
    let video_id = VideoId::from("video-1");

    Intent::Toggle(video_id.clone()).apply_on(&mut state);
    assert!(state.is_favorite(&video_id));

    let update = Effect::AddFinished {
        video_id: video_id.clone(),
        result: Err(anyhow::anyhow!("service unavailable")),
    }
    .apply_on(&mut state);

    assert!(matches!(
        update.next_action,
        Some(Action::ApplyEffect(Effect::ErrorOccurred(_)))
    ));
    assert!(!state.is_favorite(&video_id));
}

#[test]
fn failed_remove_rolls_back() {
    let mut state = State::default();
    let video_id = VideoId::from("video-1");

    Effect::AllFetched(Ok(vec![video_id.clone()])).apply_on(&mut state);
    Intent::Toggle(video_id.clone()).apply_on(&mut state);
    assert!(!state.is_favorite(&video_id));

    Effect::RemoveFinished {
        video_id: video_id.clone(),
        result: Err(anyhow::anyhow!("service unavailable")),
    }
    .apply_on(&mut state);

    assert!(state.is_favorite(&video_id));
}

#[test]
fn successful_mutations_keep_the_optimistic_state() {
    let mut state = State::default();
    let video_id = VideoId::from("video-1");

    Intent::Toggle(video_id.clone()).apply_on(&mut state);
    let update = Effect::AddFinished {
        video_id: video_id.clone(),
        result: Ok(()),
    }
    .apply_on(&mut state);

    assert!(update.next_action.is_none());
    assert!(state.is_favorite(&video_id));
}

#[test]
fn fetched_favorites_replace_the_local_set() {
    let mut state = State::default();
    Intent::Toggle(VideoId::from("video-1")).apply_on(&mut state);

    Effect::AllFetched(Ok(vec![VideoId::from("video-2"), VideoId::from("video-3")]))
        .apply_on(&mut state);

    assert!(!state.is_favorite(&VideoId::from("video-1")));
    assert!(state.is_favorite(&VideoId::from("video-2")));
    assert_eq!(2, state.count());
}
