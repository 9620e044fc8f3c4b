//! Single-pole low-pass filter stepped in real time.
//!
//! Every step weighs the new sample by the time that passed since the
//! previous one, so the break frequency holds even when the sampling loop
//! runs irregularly. This makes it suitable for smoothing sensor readings
//! polled from a control loop without a fixed rate.

use core::f32::consts::TAU;

use fugit::{TimerDurationU32, TimerInstantU32};

use crate::clock::Clock;
use crate::config::Config;
use crate::discretization::Discretization;
use crate::error::{Error, Result};

/// Filter state.
///
/// Starts uninitialized, `step` fails until one of the `init` methods
/// succeeds. Initializing again re-seeds the filter.
#[derive(Debug)]
pub struct LowPassFilter<C, const HZ: u32> {
    clock: C,
    w: Option<f32>,
    discretization: Discretization,
    y: f32,
    dt: TimerDurationU32<HZ>,
    time: TimerInstantU32<HZ>,
}

impl<C, const HZ: u32> LowPassFilter<C, HZ>
where
    C: Clock<HZ>,
{
    const ASSERT_TICK_RATE: () = assert!(HZ > 0, "clock tick rate must be positive");

    pub fn new(clock: C) -> Self {
        let () = Self::ASSERT_TICK_RATE;

        Self {
            clock,
            w: None,
            discretization: Discretization::default(),
            y: 0.0,
            dt: TimerDurationU32::from_ticks(0),
            time: TimerInstantU32::from_ticks(0),
        }
    }

    /// Initialize with the given break frequency in Hz and zero output.
    pub fn init(&mut self, break_frequency: f32) -> Result<()> {
        self.init_with_config(&Config::new(break_frequency))
    }

    pub fn init_with_output(&mut self, break_frequency: f32, initial_output: f32) -> Result<()> {
        self.init_with_config(&Config::new(break_frequency).with_initial_output(initial_output))
    }

    /// Apply the configuration and start measuring time from now.
    ///
    /// An invalid configuration leaves the filter as it was.
    pub fn init_with_config(&mut self, config: &Config) -> Result<()> {
        if let Err(err) = config.validate() {
            warn!("Rejecting filter configuration: {}", err);
            return Err(err);
        }

        let w = config.cutoff_angular_frequency();
        self.w = Some(w);
        self.discretization = config.discretization;
        self.y = config.initial_output;
        self.dt = TimerDurationU32::from_ticks(0);
        self.time = self.clock.now();

        debug!(
            "Filter initialized with w={} rad/s, y={}, at tick {}",
            w,
            self.y,
            self.time.ticks()
        );

        Ok(())
    }

    /// Feed a new sample and return the updated output.
    ///
    /// Two steps within the same clock tick leave the output untouched.
    pub fn step(&mut self, u: f32) -> Result<f32> {
        let w = self.w.ok_or(Error::NotInitialized)?;
        if !u.is_finite() {
            return Err(Error::NonFiniteSample);
        }

        let now = self.clock.now();
        self.dt = self.elapsed_until(now);
        self.time = now;

        let dt = self.dt.ticks() as f32 / HZ as f32;
        let alpha = self.discretization.smoothing_coefficient(w, dt);
        // NOTE: The difference of two extreme f32 samples may not fit in f32.
        // The interpolated result always does, as it lies between y and u.
        let y = f64::from(self.y);
        self.y = (y + f64::from(alpha) * (f64::from(u) - y)) as f32;

        Ok(self.y)
    }

    // NOTE: A reading more than half of the counter range behind the last
    // one is taken as the clock going backwards, not as a wrap-around.
    fn elapsed_until(&self, now: TimerInstantU32<HZ>) -> TimerDurationU32<HZ> {
        now.checked_duration_since(self.time).unwrap_or_else(|| {
            warn!(
                "Clock went backwards from tick {} to {}",
                self.time.ticks(),
                now.ticks()
            );
            TimerDurationU32::from_ticks(0)
        })
    }
}

impl<C, const HZ: u32> LowPassFilter<C, HZ> {
    pub fn output(&self) -> f32 {
        self.y
    }

    /// Time between the two most recent clock readings.
    pub fn elapsed(&self) -> TimerDurationU32<HZ> {
        self.dt
    }

    pub fn last_update(&self) -> TimerInstantU32<HZ> {
        self.time
    }

    pub fn is_initialized(&self) -> bool {
        self.w.is_some()
    }

    /// Cutoff in radians per second.
    pub fn cutoff_angular_frequency(&self) -> Option<f32> {
        self.w
    }

    pub fn break_frequency(&self) -> Option<f32> {
        self.w.map(|w| w / TAU)
    }

    /// Time constant in seconds.
    pub fn time_constant(&self) -> Option<f32> {
        self.w.map(|w| 1.0 / w)
    }

    pub fn discretization(&self) -> Discretization {
        self.discretization
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(feature = "defmt")]
impl<C, const HZ: u32> defmt::Format for LowPassFilter<C, HZ> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LowPassFilter {{ w: {}, y: {}, dt: {}, time: {} }}",
            self.w,
            self.y,
            self.dt.ticks(),
            self.time.ticks()
        );
    }
}
