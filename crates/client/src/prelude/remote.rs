// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::time::Instant;

use super::roundtrip::{PendingToken, Watermark};

/// A value received from the server together with the time of arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSnapshot<T> {
    pub value: T,
    pub since: Instant,
}

impl<T> DataSnapshot<T> {
    pub fn new(value: impl Into<T>, since: impl Into<Instant>) -> Self {
        Self {
            value: value.into(),
            since: since.into(),
        }
    }

    pub fn now(value: impl Into<T>) -> Self {
        Self {
            value: value.into(),
            since: Instant::now(),
        }
    }
}

/// Remote data with last-write-wins round-trip tracking.
///
/// Keeps the last received snapshot while a refresh is in flight.
/// Responses of superseded round-trips are detected and rejected when
/// finishing, i.e. the most recently requested data always wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteData<T> {
    watermark: Watermark,
    pending_since: Option<Instant>,
    last_snapshot: Option<DataSnapshot<T>>,
}

impl<T> RemoteData<T> {
    #[must_use]
    pub const fn default() -> Self {
        Self {
            watermark: Watermark::INITIAL,
            pending_since: None,
            last_snapshot: None,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    #[must_use]
    pub const fn last_snapshot(&self) -> Option<&DataSnapshot<T>> {
        self.last_snapshot.as_ref()
    }

    #[must_use]
    pub fn last_value(&self) -> Option<&T> {
        self.last_snapshot().map(|snapshot| &snapshot.value)
    }

    pub fn reset(&mut self) {
        self.watermark.reset();
        self.pending_since = None;
        self.last_snapshot = None;
    }

    /// Start a new round-trip, superseding any pending one.
    pub fn start_pending_now(&mut self) -> PendingToken {
        self.pending_since = Some(Instant::now());
        self.watermark.start_pending()
    }

    /// Finish a round-trip without updating the value.
    ///
    /// Returns `false` if the round-trip has been superseded.
    pub fn finish_pending(&mut self, token: PendingToken) -> bool {
        if !self.watermark.finish_pending(token) {
            return false;
        }
        self.pending_since = None;
        true
    }

    /// Finish a round-trip with the received value.
    ///
    /// Returns the received value as an error if the round-trip has
    /// been superseded, otherwise the replaced snapshot.
    pub fn finish_pending_with_value_now(
        &mut self,
        token: PendingToken,
        value: impl Into<T>,
    ) -> Result<Option<DataSnapshot<T>>, T> {
        if !self.watermark.finish_pending(token) {
            return Err(value.into());
        }
        self.pending_since = None;
        Ok(self.last_snapshot.replace(DataSnapshot::now(value)))
    }
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self::default()
    }
}
