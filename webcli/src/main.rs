// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{env, sync::Arc, time::Instant};

use clap::{Arg, Command};
use tokio::signal;
use url::Url;

use videotheca_client as client;
use videotheca_client::prelude::{
    Environment, message_channel, mutable::message_loop, send_message,
};
use videotheca_core_api::{pagination::PageWindowItem, video::list::ListQuery};

mod model;
use self::model::{CliModel, Intent};
use crate::model::effect::print_usage;

const DEFAULT_LOG_FILTER: &str = "info";

const DEFAULT_API_URL: &str = "http://[::1]:8080";

const API_URL_ARG: &str = "api-url";

const INITIAL_QUERY_ARG: &str = "query";

/// Incremental console rendering of the model.
///
/// Tracks what has already been displayed and only prints the
/// sections that changed since the last invocation.
#[derive(Debug, Default)]
struct RenderCliModel {
    last_rendered_url: Option<String>,
    listing_was_fetching: bool,
    last_results_since: Option<Instant>,
    last_tags_since: Option<Instant>,
    last_actors_since: Option<Instant>,
    last_video_since: Option<Instant>,
    last_pictures_since: Option<Instant>,
}

impl RenderCliModel {
    #[allow(clippy::too_many_lines)]
    fn render(&mut self, model: &CliModel) -> Option<Intent> {
        let client = &model.client;

        if !client.last_errors().is_empty() {
            for err in client.last_errors() {
                log::error!("{err:#}");
            }
            let intent =
                client::Intent::ClearFirstErrorsBeforeNextRenderState(client.last_errors().len());
            return Some(Intent::Client(intent));
        }

        if self.last_rendered_url.as_deref() != Some(model.current_url()) {
            self.last_rendered_url = Some(model.current_url().to_owned());
            println!("--> /videos?{}", model.current_url());
        }

        if client.listing.is_fetching() {
            if !self.listing_was_fetching {
                self.listing_was_fetching = true;
                println!("Fetching...");
            }
        } else {
            self.listing_was_fetching = false;
        }

        if let Some(results) = client.listing.results_snapshot() {
            if self.last_results_since != Some(results.since) {
                self.last_results_since = Some(results.since);
                let results = &results.value;
                for video in &results.items {
                    let favorite = if client.favorites.is_favorite(&video.id) {
                        '*'
                    } else {
                        ' '
                    };
                    let stars = render_stars(client.ratings.effective_rating(video));
                    println!("{favorite} {stars} {id}  {title}", id = video.id, title = video.title);
                }
                println!(
                    "{num_items} of {total} video(s), page {page}/{total_pages}",
                    num_items = results.items.len(),
                    total = results.total,
                    page = results.page,
                    total_pages = results.total_pages,
                );
                let page_window = client
                    .listing
                    .page_window()
                    .iter()
                    .map(|item| match item {
                        PageWindowItem::Page(page) if *page == results.page => {
                            format!("[{page}]")
                        }
                        PageWindowItem::Page(page) => page.to_string(),
                        PageWindowItem::Ellipsis => "...".to_owned(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("Pages: {page_window}");
            }
        }

        if let Some(tags) = client.catalog.tags_snapshot() {
            if self.last_tags_since != Some(tags.since) {
                self.last_tags_since = Some(tags.since);
                let names = tags
                    .value
                    .iter()
                    .map(|tag| tag.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("Tags: {names}");
            }
        }
        if let Some(actors) = client.catalog.actors_snapshot() {
            if self.last_actors_since != Some(actors.since) {
                self.last_actors_since = Some(actors.since);
                let names = actors
                    .value
                    .iter()
                    .map(|actor| actor.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("Actors: {names}");
            }
        }

        if let Some(video) = client.video_detail.video_snapshot() {
            if self.last_video_since != Some(video.since) {
                self.last_video_since = Some(video.since);
                let video = &video.value;
                println!("{id}  {title}", id = video.id, title = video.title);
                println!("  date: {date}", date = video.date);
                println!(
                    "  rating: {stars}",
                    stars = render_stars(client.ratings.effective_rating(video))
                );
                if !video.tags.is_empty() {
                    let names = video
                        .tags
                        .iter()
                        .map(|tag| tag.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!("  tags: {names}");
                }
                if !video.actors.is_empty() {
                    let names = video
                        .actors
                        .iter()
                        .map(|actor| actor.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!("  actors: {names}");
                }
                for format in &video.formats {
                    println!(
                        "  format: {name} ({file_path})",
                        name = format.name,
                        file_path = format.file_path
                    );
                }
            }
        }
        if let Some(pictures) = client.video_detail.pictures_snapshot() {
            if self.last_pictures_since != Some(pictures.since) {
                self.last_pictures_since = Some(pictures.since);
                for picture in &pictures.value {
                    println!("  picture: {picture}");
                }
            }
        }

        if client.is_terminating() || model.command_pending {
            return None;
        }
        Some(Intent::AwaitCommand)
    }
}

fn render_stars(rating: videotheca_core::Stars) -> String {
    let rating = usize::from(rating.min(videotheca_core::STARS_MAX));
    let mut stars = "#".repeat(rating);
    stars.push_str(&"-".repeat(usize::from(videotheca_core::STARS_MAX) - rating));
    stars
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let default_api_url = env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());

    let matches = Command::new("videotheca-webcli")
        .about("Interactive command-line frontend for browsing the video library")
        .arg(
            Arg::new(API_URL_ARG)
                .long(API_URL_ARG)
                .num_args(1)
                .required(false)
                .help("Base URL of the web service"),
        )
        .arg(
            Arg::new(INITIAL_QUERY_ARG)
                .num_args(1)
                .required(false)
                .help("Initial encoded query string, e.g. \"q=abc&tag=xyz\""),
        )
        .get_matches();

    let api_url: Url = matches
        .get_one::<String>(API_URL_ARG)
        .unwrap_or(&default_api_url)
        .parse()?;

    let shared_env = Arc::new(Environment::new(api_url));
    let (message_tx, message_rx) = message_channel();

    // Handle Ctrl-C/SIGINT signals to terminate gracefully
    tokio::spawn({
        let message_tx = message_tx.clone();
        async move {
            if let Err(err) = signal::ctrl_c().await {
                log::error!("Failed to receive Ctrl-C/SIGINT signal: {err}");
            }
            log::info!("Terminating after receiving Ctrl-C/SIGINT...");
            send_message(&message_tx, Intent::Client(client::Intent::Terminate));
        }
    });

    print_usage();

    // Kick off the loop before awaiting its termination
    send_message(
        &message_tx,
        Intent::Client(client::catalog::Intent::FetchTags.into()),
    );
    send_message(
        &message_tx,
        Intent::Client(client::catalog::Intent::FetchActors.into()),
    );
    send_message(
        &message_tx,
        Intent::Client(client::favorites::Intent::FetchAll.into()),
    );
    let initial_query = matches
        .get_one::<String>(INITIAL_QUERY_ARG)
        .cloned()
        .unwrap_or_default();
    if ListQuery::decode(&initial_query) == ListQuery::default() {
        send_message(
            &message_tx,
            Intent::Client(client::listing::Intent::RefreshResults.into()),
        );
    } else {
        send_message(&message_tx, Intent::OpenUrl(initial_query));
    }

    let mut render_model = RenderCliModel::default();
    message_loop(
        shared_env,
        (message_tx, message_rx),
        CliModel::default(),
        Box::new(move |model: &CliModel| render_model.render(model)),
    )
    .await;

    log::info!("Exiting");
    Ok(())
}
