// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use tokio::io::{AsyncBufReadExt as _, BufReader, stdin};

use videotheca_client as client;

#[derive(Debug)]
pub enum Task {
    /// Read the next command line from stdin.
    ReadCommand,
    Client(client::Task),
}

/// Read a single line from stdin, `None` on end of input.
///
/// TODO: Keep a persistent reader across commands to avoid dropping
/// buffered type-ahead input.
pub(super) async fn read_command_line() -> Option<String> {
    let mut line = String::new();
    match BufReader::new(stdin()).read_line(&mut line).await {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(err) => {
            log::error!("Failed to read from stdin: {err}");
            None
        }
    }
}
