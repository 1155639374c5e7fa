//! Single-writer cells shared between the interrupt and foreground contexts
//!
//! Each cell is typed by the context that owns writes to it. Reading is open
//! to both contexts; storing requires the owner's token, so a field written
//! from the wrong context fails to compile.
//!
//! Every access is atomic over the full width of the value:
//! - word-sized and narrower values use `core::sync::atomic` with
//!   release stores and acquire loads;
//! - on targets without 32-bit atomics, [`SharedWord`] falls back to a
//!   critical section;
//! - [`SharedWide`] (64-bit) always uses a critical section, since 32-bit
//!   MCUs cannot load or store it in one instruction.
//!
//! Because there is only one writer, read-modify-write sequences such as
//! [`SharedWord::update`] need no compare-and-swap.

use core::cell::Cell;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

#[cfg(target_has_atomic = "32")]
use core::sync::atomic::AtomicU32;

use critical_section::Mutex;

use crate::{DisplayCounter, ExecutionContext, ForegroundContext, InterruptContext};

mod sealed {
    pub trait Sealed {}
}

/// Context that owns writes to a shared cell
pub trait Owner: sealed::Sealed {
    /// Token that must be presented to store into the cell
    type Token;

    /// Owning context
    const CONTEXT: ExecutionContext;
}

/// Cells written only from the periodic tick handler
pub enum IsrOwned {}

/// Cells written only from the foreground loop
pub enum ForegroundOwned {}

impl sealed::Sealed for IsrOwned {}
impl sealed::Sealed for ForegroundOwned {}

impl Owner for IsrOwned {
    type Token = InterruptContext;
    const CONTEXT: ExecutionContext = ExecutionContext::Interrupt;
}

impl Owner for ForegroundOwned {
    type Token = ForegroundContext;
    const CONTEXT: ExecutionContext = ExecutionContext::Foreground;
}

/// 32-bit shared value
pub struct SharedWord<O: Owner> {
    #[cfg(target_has_atomic = "32")]
    value: AtomicU32,
    #[cfg(not(target_has_atomic = "32"))]
    value: Mutex<Cell<u32>>,
    _owner: PhantomData<O>,
}

impl<O: Owner> SharedWord<O> {
    /// Create a new cell
    pub const fn new(value: u32) -> Self {
        Self {
            #[cfg(target_has_atomic = "32")]
            value: AtomicU32::new(value),
            #[cfg(not(target_has_atomic = "32"))]
            value: Mutex::new(Cell::new(value)),
            _owner: PhantomData,
        }
    }

    /// Read the current value
    #[inline]
    pub fn load(&self) -> u32 {
        #[cfg(target_has_atomic = "32")]
        {
            self.value.load(Ordering::Acquire)
        }
        #[cfg(not(target_has_atomic = "32"))]
        {
            critical_section::with(|cs| self.value.borrow(cs).get())
        }
    }

    /// Publish a new value
    #[inline]
    pub fn store(&self, _owner: &O::Token, value: u32) {
        #[cfg(target_has_atomic = "32")]
        {
            self.value.store(value, Ordering::Release);
        }
        #[cfg(not(target_has_atomic = "32"))]
        {
            critical_section::with(|cs| self.value.borrow(cs).set(value));
        }
    }

    /// Replace the value with `f(value)` and return the new value
    #[inline]
    pub fn update(&self, owner: &O::Token, f: impl FnOnce(u32) -> u32) -> u32 {
        let next = f(self.load());
        self.store(owner, next);
        next
    }

    /// Owning context
    pub const fn owner(&self) -> ExecutionContext {
        O::CONTEXT
    }
}

/// Shared display counter, always in `0..=15`
pub struct SharedCounter<O: Owner> {
    value: AtomicU8,
    _owner: PhantomData<O>,
}

impl<O: Owner> SharedCounter<O> {
    /// Create a new cell
    pub const fn new(value: DisplayCounter) -> Self {
        Self {
            value: AtomicU8::new(value.get()),
            _owner: PhantomData,
        }
    }

    /// Read the current value
    #[inline]
    pub fn load(&self) -> DisplayCounter {
        // Only DisplayCounter values are ever stored, so masking is a no-op.
        DisplayCounter::from_low_bits(self.value.load(Ordering::Acquire))
    }

    /// Publish a new value
    #[inline]
    pub fn store(&self, _owner: &O::Token, value: DisplayCounter) {
        self.value.store(value.get(), Ordering::Release);
    }

    /// Owning context
    pub const fn owner(&self) -> ExecutionContext {
        O::CONTEXT
    }
}

/// Shared boolean
pub struct SharedFlag<O: Owner> {
    value: AtomicBool,
    _owner: PhantomData<O>,
}

impl<O: Owner> SharedFlag<O> {
    /// Create a new cell
    pub const fn new(value: bool) -> Self {
        Self {
            value: AtomicBool::new(value),
            _owner: PhantomData,
        }
    }

    /// Read the current value
    #[inline]
    pub fn load(&self) -> bool {
        self.value.load(Ordering::Acquire)
    }

    /// Publish a new value
    #[inline]
    pub fn store(&self, _owner: &O::Token, value: bool) {
        self.value.store(value, Ordering::Release);
    }

    /// Invert the value and return the new state
    #[inline]
    pub fn flip(&self, owner: &O::Token) -> bool {
        let next = !self.load();
        self.store(owner, next);
        next
    }

    /// Owning context
    pub const fn owner(&self) -> ExecutionContext {
        O::CONTEXT
    }
}

/// 64-bit shared value, accessed inside a critical section
pub struct SharedWide<O: Owner> {
    value: Mutex<Cell<u64>>,
    _owner: PhantomData<O>,
}

impl<O: Owner> SharedWide<O> {
    /// Create a new cell
    pub const fn new(value: u64) -> Self {
        Self {
            value: Mutex::new(Cell::new(value)),
            _owner: PhantomData,
        }
    }

    /// Read the current value
    #[inline]
    pub fn load(&self) -> u64 {
        critical_section::with(|cs| self.value.borrow(cs).get())
    }

    /// Publish a new value
    #[inline]
    pub fn store(&self, _owner: &O::Token, value: u64) {
        critical_section::with(|cs| self.value.borrow(cs).set(value));
    }

    /// Replace the value with `f(value)` in one critical section
    #[inline]
    pub fn update(&self, _owner: &O::Token, f: impl FnOnce(u64) -> u64) -> u64 {
        critical_section::with(|cs| {
            let cell = self.value.borrow(cs);
            let next = f(cell.get());
            cell.set(next);
            next
        })
    }

    /// Owning context
    pub const fn owner(&self) -> ExecutionContext {
        O::CONTEXT
    }
}
