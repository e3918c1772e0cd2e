// SPDX-FileCopyrightText: Copyright (C) 2024-2026 The videotheca authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Last-write-wins tracking of request/response round-trips.

/// Monotonic marker for the freshness of remote data.
///
/// Odd sequence numbers denote a pending round-trip. Resetting the
/// owner bumps the epoch and thereby invalidates all tokens that are
/// still in flight.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Watermark {
    epoch: usize,
    sequence: usize,
}

impl Watermark {
    pub const INITIAL: Self = Self {
        epoch: 0,
        sequence: 0,
    };

    #[must_use]
    pub const fn is_pending(self) -> bool {
        self.sequence % 2 != 0
    }

    /// Start the next round-trip, superseding any pending one.
    pub fn start_pending(&mut self) -> PendingToken {
        self.sequence = if self.is_pending() {
            self.sequence.wrapping_add(2)
        } else {
            self.sequence.wrapping_add(1)
        };
        debug_assert!(self.is_pending());
        PendingToken(*self)
    }

    /// Finish a round-trip.
    ///
    /// Returns `false` if the token has been superseded by a later
    /// round-trip or invalidated by a reset. The corresponding
    /// response must be discarded in this case.
    pub fn finish_pending(&mut self, token: PendingToken) -> bool {
        let PendingToken(pending) = token;
        if *self != pending {
            return false;
        }
        self.sequence = self.sequence.wrapping_add(1);
        debug_assert!(!self.is_pending());
        true
    }

    pub fn reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.sequence = 0;
    }
}

impl Default for Watermark {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Opaque token issued when starting a round-trip.
///
/// Carried along through the asynchronous task and handed back when
/// applying the resulting effect.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PendingToken(Watermark);

#[cfg(test)]
mod tests;
