//! `embedded-hal` 1.0 adapters
//!
//! Lets board crates hand plain digital pins to the engine: a stateful
//! output pin becomes an [`OutputLine`], an array of input pins becomes an
//! [`InputSampler`].

use blinker_core::{InputMask, MAX_SWITCHES};
use embedded_hal::digital::{InputPin, StatefulOutputPin};

use crate::error::{HalError, HalResult};
use crate::gpio::{InputSampler, OutputLine};

/// Output line backed by a stateful output pin
pub struct PinLine<P> {
    pin: P,
}

impl<P: StatefulOutputPin> PinLine<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Current output level
    pub fn is_set_high(&mut self) -> HalResult<bool> {
        self.pin.is_set_high().map_err(|_| HalError::Pin)
    }

    /// Give back the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin + Send> OutputLine for PinLine<P> {
    fn toggle(&mut self) -> HalResult<()> {
        self.pin.toggle().map_err(|_| HalError::Pin)
    }
}

/// Electrical level of a pressed switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Pressed switch pulls the pin high
    ActiveHigh,
    /// Pressed switch pulls the pin low (pull-up wiring)
    ActiveLow,
}

/// Input sampler reading one pin per switch; pin `i` maps to bit `i`
pub struct PinBank<P, const N: usize> {
    pins: [P; N],
    polarity: Polarity,
}

impl<P: InputPin, const N: usize> PinBank<P, N> {
    /// Group `pins`; more than [`MAX_SWITCHES`] pins is rejected
    pub fn new(pins: [P; N], polarity: Polarity) -> HalResult<Self> {
        if N > MAX_SWITCHES {
            return Err(HalError::InvalidParameter);
        }
        Ok(Self { pins, polarity })
    }

    /// Give back the pins
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: InputPin, const N: usize> InputSampler for PinBank<P, N> {
    fn sample(&mut self) -> HalResult<InputMask> {
        let mut mask = InputMask::EMPTY;
        for (switch, pin) in self.pins.iter_mut().enumerate() {
            let pressed = match self.polarity {
                Polarity::ActiveHigh => pin.is_high(),
                Polarity::ActiveLow => pin.is_low(),
            }
            .map_err(|_| HalError::Pin)?;
            mask = mask.with(switch as u8, pressed);
        }
        Ok(mask)
    }
}
