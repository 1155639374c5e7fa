//! Collaborator doubles shared by the engine tests

#![allow(dead_code)]

use std::collections::VecDeque;

use blinker_core::{DisplayCounter, InputMask};
use blinker_hal::{DisplaySink, HalError, HalResult, InputSampler, OutputLine};

/// Output line that counts toggles and can be told to fail
#[derive(Debug, Default)]
pub struct CountingLine {
    pub toggles: u32,
    pub level: bool,
    pub fail: bool,
}

impl OutputLine for CountingLine {
    fn toggle(&mut self) -> HalResult<()> {
        if self.fail {
            return Err(HalError::Pin);
        }
        self.toggles += 1;
        self.level = !self.level;
        Ok(())
    }
}

/// Sampler replaying a fixed sequence, then repeating its last mask
#[derive(Debug, Default)]
pub struct Script {
    pub masks: VecDeque<HalResult<InputMask>>,
    pub last: InputMask,
}

impl Script {
    pub fn new(masks: impl IntoIterator<Item = u8>) -> Self {
        Self {
            masks: masks.into_iter().map(|m| Ok(InputMask::from_bits(m))).collect(),
            last: InputMask::EMPTY,
        }
    }

    pub fn push_error(&mut self, err: HalError) {
        self.masks.push_back(Err(err));
    }
}

impl InputSampler for Script {
    fn sample(&mut self) -> HalResult<InputMask> {
        match self.masks.pop_front() {
            Some(Ok(mask)) => {
                self.last = mask;
                Ok(mask)
            }
            Some(Err(err)) => Err(err),
            None => Ok(self.last),
        }
    }
}

/// Display remembering everything it was asked to show
#[derive(Debug, Default)]
pub struct Screen {
    pub frames: Vec<DisplayCounter>,
    pub fail: bool,
}

impl DisplaySink for Screen {
    fn render(&mut self, value: DisplayCounter) -> HalResult<()> {
        if self.fail {
            return Err(HalError::Display);
        }
        self.frames.push(value);
        Ok(())
    }
}
