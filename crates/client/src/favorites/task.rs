// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::Serialize;

use videotheca_core::{Video, VideoId};
use videotheca_core_api::PaginatedResult;

use crate::{prelude::Environment, webapi::receive_response_body};

use super::Effect;

#[derive(Debug)]
pub enum Task {
    FetchAll,
    Add { video_id: VideoId },
    Remove { video_id: VideoId },
}

impl Task {
    pub async fn execute_with(self, env: &Environment) -> Effect {
        log::trace!("Executing task {self:?}");
        match self {
            Self::FetchAll => {
                let result = fetch_all(env).await;
                Effect::AllFetched(result)
            }
            Self::Add { video_id } => {
                let result = add(env, &video_id).await;
                Effect::AddFinished { video_id, result }
            }
            Self::Remove { video_id } => {
                let result = remove(env, &video_id).await;
                Effect::RemoveFinished { video_id, result }
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct AddRequestBody<'a> {
    video_id: &'a VideoId,
}

async fn fetch_all(env: &Environment) -> anyhow::Result<Vec<VideoId>> {
    let request_url = env.join_api_url("favorites")?;
    let response = env.client().get(request_url).send().await?;
    let response_body = receive_response_body(response).await?;
    let favorites = serde_json::from_slice::<PaginatedResult<Video>>(&response_body)?;
    log::debug!(
        "Fetched {num_favorites} favorite(s)",
        num_favorites = favorites.items.len()
    );
    Ok(favorites.items.into_iter().map(|video| video.id).collect())
}

async fn add(env: &Environment, video_id: &VideoId) -> anyhow::Result<()> {
    let request_url = env.join_api_url("favorites")?;
    let request_body = serde_json::to_vec(&AddRequestBody { video_id })?;
    let response = env.client().post(request_url).body(request_body).send().await?;
    receive_response_body(response).await?;
    Ok(())
}

async fn remove(env: &Environment, video_id: &VideoId) -> anyhow::Result<()> {
    let request_url = env.join_api_url(&format!("favorites/{video_id}"))?;
    let response = env.client().delete(request_url).send().await?;
    receive_response_body(response).await?;
    Ok(())
}
