//! Monotonic time source the filter measures its steps with.
//!
//! The counter is a `u32` of ticks at `HZ` ticks per second, the shape of a
//! `millis()`/`micros()` style timer on a microcontroller. It is allowed to
//! wrap around, elapsed time is always computed wrap-aware.

use core::cell::Cell;

use fugit::{TimerDurationU32, TimerInstantU32};

/// Source of the current time.
pub trait Clock<const HZ: u32> {
    fn now(&self) -> TimerInstantU32<HZ>;
}

/// Any closure returning an instant is a clock, e.g. `|| monotonics::now()`
/// converted to `u32` ticks, or a wrapper around a HAL timer counter.
impl<F, const HZ: u32> Clock<HZ> for F
where
    F: Fn() -> TimerInstantU32<HZ>,
{
    fn now(&self) -> TimerInstantU32<HZ> {
        self()
    }
}

/// Clock that only moves when told to.
///
/// Time is kept in a `Cell`, so it can be advanced through a shared
/// reference while the filter owns the clock.
#[derive(Debug, Default)]
pub struct ManualClock<const HZ: u32> {
    ticks: Cell<u32>,
}

impl<const HZ: u32> ManualClock<HZ> {
    pub const fn new() -> Self {
        Self {
            ticks: Cell::new(0),
        }
    }

    pub const fn starting_at(instant: TimerInstantU32<HZ>) -> Self {
        Self {
            ticks: Cell::new(instant.ticks()),
        }
    }

    pub fn set(&self, instant: TimerInstantU32<HZ>) {
        self.ticks.set(instant.ticks());
    }

    pub fn advance(&self, duration: TimerDurationU32<HZ>) {
        self.ticks.set(self.ticks.get().wrapping_add(duration.ticks()));
    }
}

impl<const HZ: u32> Clock<HZ> for ManualClock<HZ> {
    fn now(&self) -> TimerInstantU32<HZ> {
        TimerInstantU32::from_ticks(self.ticks.get())
    }
}

/// Lets the filter borrow a clock that is driven from elsewhere.
impl<const HZ: u32> Clock<HZ> for &ManualClock<HZ> {
    fn now(&self) -> TimerInstantU32<HZ> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_starts_at_zero() {
        let clock = ManualClock::<1_000>::new();
        assert_eq!(clock.now().ticks(), 0);
    }

    #[test]
    fn manual_clock_advances_by_duration() {
        let clock = ManualClock::<1_000>::new();
        clock.advance(TimerDurationU32::from_ticks(10));
        clock.advance(TimerDurationU32::from_ticks(15));
        assert_eq!(clock.now().ticks(), 25);
    }

    #[test]
    fn manual_clock_wraps_around() {
        let clock =
            ManualClock::<1_000>::starting_at(TimerInstantU32::from_ticks(u32::MAX - 1));
        clock.advance(TimerDurationU32::from_ticks(3));
        assert_eq!(clock.now().ticks(), 1);
    }

    #[test]
    fn borrowed_manual_clock_follows_owner() {
        let clock = ManualClock::<1_000>::new();
        let borrowed = &clock;
        clock.advance(TimerDurationU32::from_ticks(7));
        assert_eq!(Clock::now(&borrowed).ticks(), 7);
    }

    #[test]
    fn closure_acts_as_clock() {
        let ticks = Cell::new(42_u32);
        let clock = || TimerInstantU32::<1_000_000>::from_ticks(ticks.get());
        assert_eq!(Clock::now(&clock).ticks(), 42);
        ticks.set(43);
        assert_eq!(Clock::now(&clock).ticks(), 43);
    }
}
