// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_core::Video;
use videotheca_core_api::{PaginatedResult, video::list::ListQuery};

use crate::{
    prelude::{Environment, roundtrip::PendingToken},
    webapi::receive_response_body,
};

use super::Effect;

#[derive(Debug)]
pub enum Task {
    FetchResults { token: PendingToken, query: ListQuery },
}

impl Task {
    pub async fn execute_with(self, env: &Environment) -> Effect {
        log::trace!("Executing task {self:?}");
        match self {
            Self::FetchResults { token, query } => {
                let result = fetch_results(env, &query).await;
                Effect::ResultsFetched { token, result }
            }
        }
    }
}

async fn fetch_results(
    env: &Environment,
    query: &ListQuery,
) -> anyhow::Result<PaginatedResult<Video>> {
    let encoded_query = query.encode();
    let request_url = if encoded_query.is_empty() {
        env.join_api_url("videos")?
    } else {
        env.join_api_url(&format!("videos?{encoded_query}"))?
    };
    let response = env.client().get(request_url).send().await?;
    let response_body = receive_response_body(response).await?;
    let results = serde_json::from_slice::<PaginatedResult<Video>>(&response_body)?;
    log::debug!(
        "Fetched page {page} of {total_pages} with {num_items} video(s)",
        page = results.page,
        total_pages = results.total_pages,
        num_items = results.items.len()
    );
    Ok(results)
}
