// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_client as client;
use videotheca_core::{Stars, VideoId};

use super::{Action, CliModel, ModelUpdate, Task, apply_client_intent};

#[derive(Debug)]
pub enum Intent {
    /// Wait for the next command line on stdin.
    AwaitCommand,
    /// Navigate back to the previously browsed URL.
    Back,
    /// Navigate to a URL, e.g. when following a deep link.
    OpenUrl(String),
    /// Click a star of a listed video.
    Rate { video_id: VideoId, stars: Stars },
    Client(client::Intent),
}

impl Intent {
    pub fn apply_on(self, model: &mut CliModel) -> ModelUpdate {
        log::debug!("Applying intent {self:?}");
        match self {
            Self::AwaitCommand => {
                if model.command_pending || model.client.is_terminating() {
                    return ModelUpdate::unchanged(None);
                }
                model.command_pending = true;
                ModelUpdate::unchanged(Action::dispatch_task(Task::ReadCommand))
            }
            Self::Back => {
                let Some(previous_url) = model.history.pop() else {
                    log::warn!("History is empty");
                    return ModelUpdate::unchanged(None);
                };
                // Replace the current URL before navigating so that
                // going back never pushes onto the history again.
                model.current_url.clone_from(&previous_url);
                apply_client_intent(model, client::Intent::UrlChanged(previous_url))
            }
            Self::OpenUrl(url) => apply_client_intent(model, client::Intent::UrlChanged(url)),
            Self::Rate { video_id, stars } => {
                let Some(video) = model.client.listing.last_results().and_then(|results| {
                    results.items.iter().find(|video| video.id == video_id)
                }) else {
                    log::warn!("No listed video with id {video_id}");
                    return ModelUpdate::unchanged(None);
                };
                let intent = model.client.ratings.click_star(video, stars);
                apply_client_intent(model, intent)
            }
            Self::Client(intent) => apply_client_intent(model, intent),
        }
    }
}

/// Parse a command line into the intent it stands for.
pub(crate) fn parse_command_line(line: &str) -> Result<Option<Intent>, String> {
    let line = line.trim();
    let (command, args) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, args)| (command, args.trim()));
    let intent = match command {
        "" => None,
        "search" => Some(client::Intent::SearchInputIntent(
            client::search_input::Intent::EditText(args.to_owned()),
        )),
        "tag" => {
            if args.is_empty() {
                return Err("missing tag name".to_owned());
            }
            Some(client::listing::Intent::ToggleTag(args.to_owned()).into())
        }
        "actor" => {
            if args.is_empty() {
                return Err("missing actor name".to_owned());
            }
            Some(client::listing::Intent::ToggleActor(args.to_owned()).into())
        }
        "clear-tags" => Some(client::listing::Intent::ClearTags.into()),
        "clear-actors" => Some(client::listing::Intent::ClearActors.into()),
        "has-video" => match args {
            "on" => Some(client::listing::Intent::SetHasVideo(true).into()),
            "off" => Some(client::listing::Intent::SetHasVideo(false).into()),
            _ => return Err("expected `on` or `off`".to_owned()),
        },
        "rating" => {
            let stars = args
                .parse()
                .map_err(|_| format!("invalid star rating: {args}"))?;
            Some(client::listing::Intent::ClickMinRating(stars).into())
        }
        "rate" => {
            let (video_id, stars) = args
                .split_once(char::is_whitespace)
                .ok_or_else(|| "expected a video id and a star rating".to_owned())?;
            let stars = stars
                .trim()
                .parse()
                .map_err(|_| format!("invalid star rating: {stars}"))?;
            return Ok(Some(Intent::Rate {
                video_id: VideoId::from(video_id),
                stars,
            }));
        }
        "page" => {
            let page = args.parse().map_err(|_| format!("invalid page: {args}"))?;
            Some(client::listing::Intent::GoToPage(page).into())
        }
        "next" => Some(client::listing::Intent::NextPage.into()),
        "prev" => Some(client::listing::Intent::PreviousPage.into()),
        "refresh" => Some(client::listing::Intent::RefreshResults.into()),
        "open" => return Ok(Some(Intent::OpenUrl(args.to_owned()))),
        "back" => return Ok(Some(Intent::Back)),
        "tags" => Some(client::catalog::Intent::FetchTags.into()),
        "actors" => Some(client::catalog::Intent::FetchActors.into()),
        "favorites" => Some(client::favorites::Intent::FetchAll.into()),
        "favorite" => {
            if args.is_empty() {
                return Err("missing video id".to_owned());
            }
            Some(client::favorites::Intent::Toggle(VideoId::from(args)).into())
        }
        "show" => {
            if args.is_empty() {
                return Err("missing video id".to_owned());
            }
            Some(client::video_detail::Intent::FetchVideo(VideoId::from(args)).into())
        }
        "pictures" => {
            if args.is_empty() {
                return Err("missing video id".to_owned());
            }
            Some(client::video_detail::Intent::FetchPictures(VideoId::from(args)).into())
        }
        "quit" | "exit" => Some(client::Intent::Terminate),
        _ => return Err(format!("unknown command: {command}")),
    };
    Ok(intent.map(Intent::Client))
}
