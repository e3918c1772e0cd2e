// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::{Video, VideoId};

use super::*;

fn video(id: &str, rating: u8) -> Video {
    Video {
        id: VideoId::from(id),
        title: "Title".to_owned(),
        url: String::new(),
        date: String::new(),
        jpg: String::new(),
        pictures_dir: String::new(),
        actors: Vec::new(),
        tags: Vec::new(),
        formats: Vec::new(),
        rating,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

#[test]
fn clicking_a_different_star_sets_the_rating() {
    let mut state = State::default();
    let video = video("video-1", 2);

    let intent = state.click_star(&video, 4);
    assert!(matches!(intent, Intent::Set { stars: 4, .. }));

    let update = intent.apply_on(&mut state);
    assert!(matches!(
        update.next_action,
        Some(Action::DispatchTask(Task::Set { stars: 4, .. }))
    ));
    assert_eq!(4, state.effective_rating(&video));
}

#[test]
fn clicking_the_effective_star_removes_the_rating() {
    let mut state = State::default();
    let video = video("video-1", 3);

    let intent = state.click_star(&video, 3);
    assert!(matches!(intent, Intent::Remove { .. }));

    let update = intent.apply_on(&mut state);
    assert!(matches!(
        update.next_action,
        Some(Action::DispatchTask(Task::Remove { .. }))
    ));
    assert_eq!(0, state.effective_rating(&video));
}

#[test]
fn the_overlay_shadows_the_delivered_rating() {
    let mut state = State::default();
    let video = video("video-1", 2);

    state.click_star(&video, 5).apply_on(&mut state);
    assert_eq!(5, state.effective_rating(&video));

    // Clicking the overlaid star removes the rating
    let intent = state.click_star(&video, 5);
    assert!(matches!(intent, Intent::Remove { previous: 5, .. }));
}

#[test]
fn failed_set_rolls_back_to_the_previous_rating() {
    let mut state = State::default();
    let video = video("video-1", 2);

    state.click_star(&video, 4).apply_on(&mut state);
    assert_eq!(4, state.effective_rating(&video));

    let update = Effect::SetFinished {
        video_id: video.id.clone(),
        previous: 2,
        result: Err(anyhow::anyhow!("service unavailable")),
    }
    .apply_on(&mut state);

    assert!(matches!(
        update.next_action,
        Some(Action::ApplyEffect(Effect::ErrorOccurred(_)))
    ));
    assert_eq!(2, state.effective_rating(&video));
}

#[test]
fn failed_remove_rolls_back_to_the_previous_rating() {
    let mut state = State::default();
    let video = video("video-1", 3);

    state.click_star(&video, 3).apply_on(&mut state);
    assert_eq!(0, state.effective_rating(&video));

    Effect::RemoveFinished {
        video_id: video.id.clone(),
        previous: 3,
        result: Err(anyhow::anyhow!("service unavailable")),
    }
    .apply_on(&mut state);

    assert_eq!(3, state.effective_rating(&video));
}

#[test]
fn out_of_range_ratings_are_rejected() {
    let mut state = State::default();
    let video = video("video-1", 0);

    let update = Intent::Set {
        video_id: video.id.clone(),
        stars: 6,
        previous: 0,
    }
    .apply_on(&mut state);

    assert!(update.next_action.is_none());
    assert_eq!(0, state.effective_rating(&video));
}
