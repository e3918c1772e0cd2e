// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::Serialize;

use videotheca_core::{Stars, VideoId};

use crate::{prelude::Environment, webapi::receive_response_body};

use super::Effect;

#[derive(Debug)]
pub enum Task {
    Set {
        video_id: VideoId,
        stars: Stars,
        previous: Stars,
    },
    Remove {
        video_id: VideoId,
        previous: Stars,
    },
}

impl Task {
    pub async fn execute_with(self, env: &Environment) -> Effect {
        log::trace!("Executing task {self:?}");
        match self {
            Self::Set {
                video_id,
                stars,
                previous,
            } => {
                let result = set(env, &video_id, stars).await;
                Effect::SetFinished {
                    video_id,
                    previous,
                    result,
                }
            }
            Self::Remove { video_id, previous } => {
                let result = remove(env, &video_id).await;
                Effect::RemoveFinished {
                    video_id,
                    previous,
                    result,
                }
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct SetRequestBody {
    rating: Stars,
}

async fn set(env: &Environment, video_id: &VideoId, stars: Stars) -> anyhow::Result<()> {
    let request_url = env.join_api_url(&format!("ratings/{video_id}"))?;
    let request_body = serde_json::to_vec(&SetRequestBody { rating: stars })?;
    let response = env.client().put(request_url).body(request_body).send().await?;
    receive_response_body(response).await?;
    Ok(())
}

async fn remove(env: &Environment, video_id: &VideoId) -> anyhow::Result<()> {
    let request_url = env.join_api_url(&format!("ratings/{video_id}"))?;
    let response = env.client().delete(request_url).send().await?;
    receive_response_body(response).await?;
    Ok(())
}
