// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use tokio::time::sleep;

use super::{COMMIT_DEBOUNCE_DELAY, Effect, Generation};

#[derive(Debug)]
pub enum Task {
    DelayCommit { generation: Generation },
}

impl Task {
    pub async fn execute(self) -> Effect {
        log::trace!("Executing task {self:?}");
        match self {
            Self::DelayCommit { generation } => {
                sleep(COMMIT_DEBOUNCE_DELAY).await;
                Effect::CommitDue { generation }
            }
        }
    }
}
