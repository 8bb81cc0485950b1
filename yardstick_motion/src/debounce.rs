// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

use crate::sample::MotionSample;
use crate::settings::MotionSettings;
use crate::trace::MotionTrace;

/// Phase of a [`MotionDebounce`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MotionPhase {
    /// No motion pending.
    #[default]
    Idle,
    /// A high-force sample was seen and the device has not settled yet.
    Moving,
}

/// Emitted once per motion episode, when the device has settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MotionCommit {
    /// Timestamp of the sample that committed.
    pub timestamp_ms: u64,
    /// Timestamp of the last high-force sample of the episode.
    pub last_motion_ms: u64,
}

impl MotionCommit {
    /// How long the device had been still when the episode committed.
    #[must_use]
    pub fn settled_for_ms(&self) -> u64 {
        self.timestamp_ms.saturating_sub(self.last_motion_ms)
    }
}

/// Decides when a "lift and place" motion should commit an endless step.
///
/// Feed it every sensor sample in timestamp order. A sample whose acceleration
/// exceeds the sensitivity on either in-plane axis moves the detector to
/// [`MotionPhase::Moving`] and restarts the settling window. The first later
/// sample that arrives strictly more than the settling time after the last
/// high-force sample commits and returns the detector to
/// [`MotionPhase::Idle`].
///
/// ```
/// use yardstick_motion::{MotionDebounce, MotionSample, MotionSettings};
///
/// let mut debounce = MotionDebounce::new(MotionSettings::default());
/// assert!(debounce.update(MotionSample::from_xyz(0, 0.8, 0.0, 9.8)).is_none());
/// assert!(debounce.update(MotionSample::from_xyz(200, 0.1, 0.0, 9.8)).is_none());
/// let commit = debounce.update(MotionSample::from_xyz(1250, 0.1, 0.0, 9.8));
/// assert_eq!(commit.map(|c| c.last_motion_ms), Some(0));
/// ```
#[derive(Clone, Debug)]
pub struct MotionDebounce {
    settings: MotionSettings,
    last_high_ms: Option<u64>,
    last_acceleration: Vec2,
}

impl MotionDebounce {
    /// Creates an idle detector.
    #[must_use]
    pub fn new(settings: MotionSettings) -> Self {
        Self {
            settings,
            last_high_ms: None,
            last_acceleration: Vec2::ZERO,
        }
    }

    /// The settings in use.
    #[must_use]
    pub fn settings(&self) -> MotionSettings {
        self.settings
    }

    /// Replaces the settings; a pending episode keeps its timestamp.
    pub fn set_settings(&mut self, settings: MotionSettings) {
        self.settings = settings;
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> MotionPhase {
        if self.last_high_ms.is_some() {
            MotionPhase::Moving
        } else {
            MotionPhase::Idle
        }
    }

    /// In-plane acceleration of the most recent sample.
    #[must_use]
    pub fn last_acceleration(&self) -> Vec2 {
        self.last_acceleration
    }

    /// Timestamp of the last high-force sample of the pending episode.
    #[must_use]
    pub fn last_motion_ms(&self) -> Option<u64> {
        self.last_high_ms
    }

    /// Drops any pending episode, e.g. when endless measurement is switched
    /// off.
    pub fn reset(&mut self) {
        self.last_high_ms = None;
        self.last_acceleration = Vec2::ZERO;
    }

    /// Processes one sample and returns the commit it triggers, if any.
    pub fn update(&mut self, sample: MotionSample) -> Option<MotionCommit> {
        self.update_traced(sample, &mut ())
    }

    /// Like [`update`](Self::update), reporting transitions to `trace`.
    pub fn update_traced(
        &mut self,
        sample: MotionSample,
        trace: &mut impl MotionTrace,
    ) -> Option<MotionCommit> {
        self.last_acceleration = sample.acceleration;
        let now = sample.timestamp_ms;

        if sample.exceeds(self.settings.sensitivity) {
            if self.last_high_ms.is_none() {
                trace.motion_started(now);
            }
            self.last_high_ms = Some(now);
            return None;
        }

        let last_high = self.last_high_ms?;
        if now.saturating_sub(last_high) > self.settings.settling_time_ms {
            self.last_high_ms = None;
            let commit = MotionCommit {
                timestamp_ms: now,
                last_motion_ms: last_high,
            };
            trace.committed(&commit);
            return Some(commit);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{MotionEvent, MotionLog};

    fn high(t: u64) -> MotionSample {
        MotionSample::from_xyz(t, 0.8, 0.0, 0.0)
    }

    fn low(t: u64) -> MotionSample {
        MotionSample::from_xyz(t, 0.1, 0.05, 0.0)
    }

    fn run(debounce: &mut MotionDebounce, samples: &[MotionSample]) -> usize {
        samples
            .iter()
            .filter_map(|s| debounce.update(*s))
            .count()
    }

    #[test]
    fn settling_one_past_the_window_commits_once() {
        let mut d = MotionDebounce::new(MotionSettings::default());
        let commits = run(&mut d, &[high(0), low(500), low(1001), low(1500), low(3000)]);
        assert_eq!(commits, 1);
        assert_eq!(d.phase(), MotionPhase::Idle);
    }

    #[test]
    fn settling_one_short_of_the_window_does_not_commit() {
        let mut d = MotionDebounce::new(MotionSettings::default());
        let commits = run(&mut d, &[high(0), low(999), high(1000), low(1999)]);
        assert_eq!(commits, 0);
        assert_eq!(d.phase(), MotionPhase::Moving);
        assert_eq!(d.last_motion_ms(), Some(1000));
    }

    #[test]
    fn exactly_the_settling_time_is_not_enough() {
        let mut d = MotionDebounce::new(MotionSettings::default());
        assert!(d.update(high(0)).is_none());
        assert!(d.update(low(1000)).is_none());
        assert!(d.update(low(1001)).is_some());
    }

    #[test]
    fn no_commit_without_prior_motion() {
        let mut d = MotionDebounce::new(MotionSettings::default());
        let commits = run(&mut d, &[low(0), low(2000), low(10_000)]);
        assert_eq!(commits, 0);
        assert_eq!(d.phase(), MotionPhase::Idle);
    }

    #[test]
    fn each_episode_commits_separately() {
        let mut d = MotionDebounce::new(MotionSettings::new(0.5, 500));
        let commits = run(
            &mut d,
            &[high(0), high(100), low(700), high(800), low(900), low(1400)],
        );
        assert_eq!(commits, 2);
    }

    #[test]
    fn sensitivity_is_used_unclamped() {
        // Far outside the user range, still honoured.
        let mut d = MotionDebounce::new(MotionSettings::new(5.0, 10));
        assert!(d.update(high(0)).is_none());
        assert_eq!(d.phase(), MotionPhase::Idle);

        d.set_settings(MotionSettings::new(0.05, 10));
        assert!(d.update(low(0)).is_none());
        assert_eq!(d.phase(), MotionPhase::Moving);
    }

    #[test]
    fn reset_drops_pending_episode() {
        let mut d = MotionDebounce::new(MotionSettings::default());
        d.update(high(0));
        assert_eq!(d.last_acceleration(), Vec2::new(0.8, 0.0));
        d.reset();
        assert_eq!(d.phase(), MotionPhase::Idle);
        assert!(d.update(low(5000)).is_none());
    }

    #[test]
    fn trace_sees_start_and_commit() {
        let mut d = MotionDebounce::new(MotionSettings::default());
        let mut log = MotionLog::new();
        for sample in [high(0), high(50), low(200), low(1250)] {
            d.update_traced(sample, &mut log);
        }
        assert_eq!(
            log.events(),
            &[
                MotionEvent::Started { timestamp_ms: 0 },
                MotionEvent::Committed(MotionCommit {
                    timestamp_ms: 1250,
                    last_motion_ms: 50,
                }),
            ]
        );
        assert_eq!(log.commit_count(), 1);
        assert_eq!(
            MotionCommit {
                timestamp_ms: 1250,
                last_motion_ms: 50,
            }
            .settled_for_ms(),
            1200
        );
        log.clear();
        assert!(log.events().is_empty());
    }
}
