//! Single-pole low-pass filter for smoothing sensor readings on
//! microcontrollers.
//!
//! The filter is driven by an injected monotonic [`Clock`], making its
//! smoothing depend on real elapsed time instead of on the call rate:
//!
//! ```
//! use fugit::TimerDurationU32;
//! use lp_filter::{LowPassFilter, ManualClock};
//!
//! let mut filter = LowPassFilter::<_, 1_000>::new(ManualClock::new());
//! filter.init(1.0).unwrap();
//!
//! filter.clock().advance(TimerDurationU32::from_ticks(10));
//! let y = filter.step(1.0).unwrap();
//! assert!(y > 0.0 && y < 0.1);
//! ```

#![cfg_attr(not(test), no_std)]

// NOTE: This must go first, so the logging macros are visible to the
// modules below.
mod fmt;

pub mod clock;
pub mod config;
pub mod discretization;
pub mod error;
pub mod low_pass_filter;

pub use self::clock::{Clock, ManualClock};
pub use self::config::Config;
pub use self::discretization::Discretization;
pub use self::error::{Error, Result};
pub use self::low_pass_filter::LowPassFilter;
