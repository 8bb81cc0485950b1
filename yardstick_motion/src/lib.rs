// Copyright 2025 the Yardstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=yardstick_motion --heading-base-level=0

//! Yardstick Motion: commit endless-measurement steps from device motion.
//!
//! Endless measurement lets a user measure something longer than the screen
//! by lifting the device and placing it again. This crate decides when one
//! such placement is complete:
//! - [`MotionSample`]: an in-plane linear-acceleration reading with a
//!   monotonic millisecond timestamp.
//! - [`MotionDebounce`]: a two-phase state machine
//!   ([`MotionPhase::Idle`] and [`MotionPhase::Moving`]) that emits one
//!   [`MotionCommit`] per motion episode, once the device has been still for
//!   longer than the settling time.
//! - [`MotionSettings`]: sensitivity and settling time, with the user ranges
//!   and the fallbacks used for stored values.
//! - [`MotionTrace`]: an optional hook for observing transitions, with the
//!   [`MotionLog`] recorder.
//!
//! The detector holds mutable state and must be driven from one logical
//! thread, in timestamp order.
//!
//! ## Minimal example
//!
//! ```rust
//! use yardstick_motion::{MotionDebounce, MotionPhase, MotionSample, MotionSettings};
//!
//! let settings = MotionSettings::new(0.5, 1000);
//! let mut debounce = MotionDebounce::new(settings);
//!
//! let mut commits = 0;
//! for (t, ax) in [(0, 0.8), (200, 0.1), (1250, 0.1)] {
//!     if debounce.update(MotionSample::from_xyz(t, ax, 0.0, 9.81)).is_some() {
//!         // Add the current viewport span to the endless total here.
//!         commits += 1;
//!     }
//! }
//! assert_eq!(commits, 1);
//! assert_eq!(debounce.phase(), MotionPhase::Idle);
//! ```
//!
//! This crate is `no_std` and uses `alloc` for [`MotionLog`].

#![no_std]

extern crate alloc;

mod debounce;
mod sample;
mod settings;
mod trace;

pub use debounce::{MotionCommit, MotionDebounce, MotionPhase};
pub use sample::MotionSample;
pub use settings::MotionSettings;
pub use trace::{MotionEvent, MotionLog, MotionTrace};
