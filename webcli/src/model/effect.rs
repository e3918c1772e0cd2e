// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use videotheca_client as client;

use super::{CliModel, ModelUpdate, intent::parse_command_line, model_updated};

#[derive(Debug)]
pub enum Effect {
    /// A command line has been read from stdin, `None` on end of input.
    CommandRead(Option<String>),
    Client(client::Effect),
}

impl Effect {
    pub fn apply_on(self, model: &mut CliModel) -> ModelUpdate {
        log::debug!("Applying effect {self:?}");
        match self {
            Self::CommandRead(line) => {
                model.command_pending = false;
                let Some(line) = line else {
                    log::info!("End of input, terminating");
                    return model_updated(client::Intent::Terminate.apply_on(&mut model.client));
                };
                match parse_command_line(&line) {
                    Ok(Some(intent)) => intent.apply_on(model),
                    Ok(None) => ModelUpdate::maybe_changed(None),
                    Err(reason) => {
                        println!("{reason}");
                        print_usage();
                        ModelUpdate::maybe_changed(None)
                    }
                }
            }
            Self::Client(effect) => model_updated(effect.apply_on(&mut model.client)),
        }
    }
}

pub(crate) fn print_usage() {
    println!(
        "Commands:
  search <text>        edit the search text (commits after a quiet period)
  tag <name>           toggle a tag filter
  actor <name>         toggle an actor filter
  clear-tags           deselect all tags
  clear-actors         deselect all actors
  has-video on|off     restrict the listing to playable videos
  rating <stars>       filter by minimum rating, same value clears
  page <n> | next | prev
  refresh              re-fetch the current results
  open <query>         navigate to an encoded query string
  back                 navigate to the previous query
  tags | actors        fetch the selectable facets
  favorites            fetch all favorites
  favorite <video-id>  toggle a favorite
  rate <video-id> <stars>
  show <video-id>      fetch the details of a video
  pictures <video-id>  fetch the still pictures of a video
  quit | exit"
    );
}
