// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observability hooks for the motion debounce.
//!
//! The detector keeps no history of its own. Pass a [`MotionTrace`] to
//! [`MotionDebounce::update_traced`](crate::MotionDebounce::update_traced) to
//! observe phase changes, for example to drive a "moving" indicator or to log
//! commits while tuning sensitivity. [`MotionLog`] records everything it sees.

use alloc::vec::Vec;

use crate::debounce::MotionCommit;

/// A callback sink for motion debounce transitions.
///
/// `()` is a sink that ignores everything.
pub trait MotionTrace {
    /// Called when a high-force sample starts a new motion episode.
    fn motion_started(&mut self, timestamp_ms: u64);

    /// Called when a motion episode settles and commits.
    fn committed(&mut self, commit: &MotionCommit);
}

impl MotionTrace for () {
    fn motion_started(&mut self, _timestamp_ms: u64) {}

    fn committed(&mut self, _commit: &MotionCommit) {}
}

/// One entry of a [`MotionLog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionEvent {
    /// A motion episode started at this timestamp.
    Started {
        /// Timestamp of the first high-force sample.
        timestamp_ms: u64,
    },
    /// A motion episode committed.
    Committed(MotionCommit),
}

/// Records every transition, in order.
#[derive(Clone, Debug, Default)]
pub struct MotionLog {
    events: Vec<MotionEvent>,
}

impl MotionLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &[MotionEvent] {
        &self.events
    }

    /// Number of recorded commits.
    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, MotionEvent::Committed(_)))
            .count()
    }

    /// Clears the log.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl MotionTrace for MotionLog {
    fn motion_started(&mut self, timestamp_ms: u64) {
        self.events.push(MotionEvent::Started { timestamp_ms });
    }

    fn committed(&mut self, commit: &MotionCommit) {
        self.events.push(MotionEvent::Committed(*commit));
    }
}
