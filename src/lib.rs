//! # elro433
//!
//! A portable, no_std Rust driver for Elro-style self-learning 433 MHz
//! remote-controlled mains switches, driven through cheap OOK transmitter
//! modules like the FS1000A.
//!
//! This driver implements the fixed-frame switch protocol in software using:
//! - `embedded-hal` traits for digital I/O and timing
//! - a pure symbol codec building each 16-symbol frame from scratch
//! - a pulse expander flattening frames into 128 output levels
//! - a blocking transmitter repeating each frame for receiver training
//!
//! ## Crate features
//! | Feature     | Description |
//! |-------------|-------------|
//! | `std`       | Disables `#![no_std]` support and replaces `heapless::Vec`s with `std::vec::Vec`s |
//! | `defmt-0-3` | Uses `defmt` logging |
//! | `log`       | Uses `log` logging |
//!
//! ## Protocol
//!
//! Each receiver carries a 5-way dip-switch key and up to five channels
//! (A–E). A frame encodes (key, channel mask, on/off) as 16 symbols, each
//! symbol one of two fixed 8-bit pulse patterns plus a constant trailer. The
//! frame is expanded to 128 output levels, each held for a fixed pulse width
//! (300 µs by default), and the whole waveform is sent 10 times back-to-back
//! so the open-loop receivers can majority-vote the code. There is no
//! reception, no acknowledgment, and no notion of delivery success.
//!
//! ## Usage
//!
//! ```rust
//! # use embedded_hal_mock::eh1::digital::{Mock as Pin, State as PinState, Transaction as PinTransaction};
//! # use embedded_hal_mock::eh1::delay::NoopDelay;
//! use elro433::codec::Key;
//! use elro433::consts::CHANNEL_A;
//! use elro433::driver::SwitchDriver;
//!
//! # let pin = Pin::new(&[PinTransaction::set(PinState::Low)]);
//! # let delay = NoopDelay::new();
//! let key = Key::new([true, true, true, true, true]);
//! let driver = SwitchDriver::new(pin, delay, key, CHANNEL_A)?;
//! // driver.switch_on()?;
//! # let (mut pin, _delay) = driver.free();
//! # pin.done();
//! # Ok::<(), elro433::error::Error<embedded_hal_mock::eh1::MockError>>(())
//! ```
//!
//! ## Integration Notes
//!
//! - The data pin must already be configured as a push-pull output; the
//!   driver only toggles its level.
//! - A transmission blocks for `repeat × 128 × pulse_width` (≈ 384 ms at the
//!   defaults) and must not be preempted by other users of the line; the
//!   exclusive `&mut` borrow enforces this within one program.
//! - Level timing rides on the supplied `DelayNs`; coarse sleeps corrupt the
//!   waveform for receivers tuned to fixed-width pulses.
//!
//! --
//! Designed for `#![no_std]` use in resource-constrained embedded environments.

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
pub use heapless;

pub mod codec;
pub mod consts;
pub mod driver;
pub mod error;
pub mod wave;
