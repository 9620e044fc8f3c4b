use core::f32::consts::TAU;

use crate::discretization::Discretization;
use crate::error::{Error, Result};

/// Parameters the filter is initialized with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// -3 dB frequency in Hz.
    pub break_frequency: f32,
    /// Output the filter holds until the first step.
    pub initial_output: f32,
    pub discretization: Discretization,
}

impl Config {
    pub fn new(break_frequency: f32) -> Self {
        Self {
            break_frequency,
            initial_output: 0.0,
            discretization: Discretization::default(),
        }
    }

    #[must_use]
    pub fn with_initial_output(mut self, initial_output: f32) -> Self {
        self.initial_output = initial_output;
        self
    }

    #[must_use]
    pub fn with_discretization(mut self, discretization: Discretization) -> Self {
        self.discretization = discretization;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.break_frequency.is_finite() && self.break_frequency > 0.0) {
            return Err(Error::InvalidArgument(
                "break frequency must be a positive finite number",
            ));
        }
        if !self.initial_output.is_finite() {
            return Err(Error::InvalidArgument("initial output must be a finite number"));
        }
        Ok(())
    }

    /// Cutoff in radians per second.
    pub fn cutoff_angular_frequency(&self) -> f32 {
        TAU * self.break_frequency
    }
}
