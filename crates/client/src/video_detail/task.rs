// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use serde::Deserialize;

use videotheca_core::{Video, VideoId, util::null_to_default};

use crate::{
    prelude::{Environment, roundtrip::PendingToken},
    webapi::receive_response_body,
};

use super::Effect;

#[derive(Debug)]
pub enum Task {
    FetchVideo {
        token: PendingToken,
        video_id: VideoId,
    },
    FetchPictures {
        token: PendingToken,
        video_id: VideoId,
    },
}

impl Task {
    pub async fn execute_with(self, env: &Environment) -> Effect {
        log::trace!("Executing task {self:?}");
        match self {
            Self::FetchVideo { token, video_id } => {
                let result = fetch_video(env, &video_id).await;
                Effect::VideoFetched { token, result }
            }
            Self::FetchPictures { token, video_id } => {
                let result = fetch_pictures(env, &video_id).await;
                Effect::PicturesFetched { token, result }
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct PicturesResponseBody {
    #[serde(default, deserialize_with = "null_to_default")]
    pictures: Vec<String>,
}

async fn fetch_video(env: &Environment, video_id: &VideoId) -> anyhow::Result<Video> {
    let request_url = env.join_api_url(&format!("videos/{video_id}"))?;
    let response = env.client().get(request_url).send().await?;
    let response_body = receive_response_body(response).await?;
    let video = serde_json::from_slice::<Video>(&response_body)?;
    Ok(video)
}

async fn fetch_pictures(env: &Environment, video_id: &VideoId) -> anyhow::Result<Vec<String>> {
    let request_url = env.join_api_url(&format!("videos/{video_id}/pictures"))?;
    let response = env.client().get(request_url).send().await?;
    let response_body = receive_response_body(response).await?;
    let PicturesResponseBody { pictures } = serde_json::from_slice(&response_body)?;
    log::debug!(
        "Fetched {num_pictures} picture(s)",
        num_pictures = pictures.len()
    );
    Ok(pictures)
}
