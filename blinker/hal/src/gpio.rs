//! Output line and input switch abstractions

use blinker_core::InputMask;

use crate::error::HalResult;

/// Single binary output line driven from the tick handler
///
/// `toggle` is called from interrupt context and must not block.
pub trait OutputLine: Send {
    /// Flip the physical output level
    fn toggle(&mut self) -> HalResult<()>;
}

/// Source of the debounced switch state
///
/// Debouncing happens behind this trait; `sample` returns immediately.
pub trait InputSampler {
    /// Current switch state, bit `i` set when switch `i` is pressed
    fn sample(&mut self) -> HalResult<InputMask>;
}

impl<T: OutputLine + ?Sized> OutputLine for &mut T {
    fn toggle(&mut self) -> HalResult<()> {
        (**self).toggle()
    }
}

impl<T: InputSampler + ?Sized> InputSampler for &mut T {
    fn sample(&mut self) -> HalResult<InputMask> {
        (**self).sample()
    }
}
