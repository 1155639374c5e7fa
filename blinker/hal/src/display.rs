//! Display sink abstraction

use blinker_core::DisplayCounter;

use crate::error::HalResult;

/// Renders a four-bit value
///
/// Multiplexing and segment decoding live behind this trait.
pub trait DisplaySink {
    /// Show `value`; must not block
    fn render(&mut self, value: DisplayCounter) -> HalResult<()>;
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn render(&mut self, value: DisplayCounter) -> HalResult<()> {
        (**self).render(value)
    }
}
