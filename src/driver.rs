//! Blocking OOK transmitter for Elro-style remote switches.
//!
//! This module provides the [`SwitchDriver`] struct, which owns the digital
//! output line of a 433 MHz OOK transmitter module (e.g., FS1000A) and drives
//! complete switch frames through it. It uses `embedded-hal` traits for pin
//! access and timing, allowing portability across a wide range of platforms.
//!
//! ## Transmission
//!
//! Transmission is plain On-Off Keying (OOK) on a single output pin:
//! - `HIGH` = carrier on
//! - `LOW`  = carrier off
//!
//! One transmission drives the line level-by-level through an expanded
//! waveform, holding each level for a fixed pulse width, and repeats the
//! whole waveform back-to-back a configured number of times. The receivers
//! are open-loop and re-learn each code by majority vote over the repeated
//! frames, so there is no acknowledgment and no notion of delivery success.
//!
//! ## Timing
//!
//! Each level-hold suspends via [`embedded_hal::delay::DelayNs`]. The pulse
//! width (300 µs by default) is the correctness contract of the whole
//! protocol: a delay provider that overshoots by more than a small fraction
//! of the pulse width will corrupt the waveform as seen by receivers tuned
//! to fixed-width pulses. Supply a fine-grained (busy-wait or hardware
//! timer) delay, not a coarse scheduler sleep.
//!
//! A transmission is one long blocking call (about 384 ms at the defaults)
//! and runs to completion once started; cancellation mid-waveform is
//! unsupported because it can leave the line at a level a receiver misreads
//! as a valid partial code. The `&mut self` receiver makes overlapping
//! transmissions on one line unrepresentable; callers with concurrent
//! sources of requests must queue them in front of the driver.
//!
//! ## Example
//!
//! ```rust
//! # use embedded_hal_mock::eh1::digital::{Mock as Pin, State as PinState, Transaction as PinTransaction};
//! # use embedded_hal_mock::eh1::delay::NoopDelay;
//! use elro433::driver::SwitchDriver;
//! use elro433::codec::{Command, Key};
//! use elro433::consts::CHANNEL_A;
//!
//! # let pin = Pin::new(&[PinTransaction::set(PinState::Low)]);
//! # let delay = NoopDelay::new();
//! let key = Key::new([true, true, true, true, true]);
//! let driver = SwitchDriver::new(pin, delay, key, CHANNEL_A).unwrap();
//! # let (mut pin, _delay) = driver.free();
//! # pin.done();
//! ```
//!
//! ## Design Notes
//!
//! Frame construction lives in [`crate::codec`] and [`crate::wave`]; this
//! module is only the real-time half. Encoding errors are rejected before
//! the line is touched, and a pin failure mid-frame aborts the remaining
//! level-holds immediately with [`Error::Transmission`].

use crate::codec::{Command, Key, encode};
use crate::consts::{DEFAULT_PULSE_WIDTH_US, DEFAULT_REPEAT};
use crate::error::Error;
use crate::wave::expand;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// A blocking transmitter for Elro-style 433 MHz remote switches.
///
/// `SwitchDriver` owns the transmitter data pin and a delay provider for the
/// lifetime of the driver, together with the startup configuration: the
/// dip-switch key shared with the receivers, a default device mask, and the
/// transmission parameters.
///
/// ## Type Parameters
///
/// - `TX`: a type implementing [`embedded_hal::digital::OutputPin`], the
///   output line feeding the RF module's data input
/// - `D`: a type implementing [`embedded_hal::delay::DelayNs`], used to hold
///   each output level for one pulse width
///
/// ## Notes
///
/// - The pin must already be configured as a push-pull output; the driver
///   never touches pin mode.
/// - Construction drives the line low so every transmission starts from a
///   known idle level.
/// - The key and device mask are set once at startup; per-call device masks
///   can still be passed to [`issue()`](SwitchDriver::issue) and
///   [`trigger()`](SwitchDriver::trigger).
#[derive(Debug)]
pub struct SwitchDriver<TX, D>
where
    TX: OutputPin,
    D: DelayNs,
{
    tx: TX,
    delay: D,
    key: Key,
    device: u8,
    pulse_width_us: u32,
    repeat: u8,
}

impl<TX, D> SwitchDriver<TX, D>
where
    TX: OutputPin,
    D: DelayNs,
{
    /// Creates a new `SwitchDriver` owning the given output line.
    ///
    /// # Arguments
    /// - `tx`: the output pin feeding the RF module (carrier on/off).
    /// - `delay`: the delay provider used for level-hold timing.
    /// - `key`: the dip-switch key configured on the receivers.
    /// - `device`: default device mask for
    ///   [`switch_on()`](SwitchDriver::switch_on) and
    ///   [`switch_off()`](SwitchDriver::switch_off); one bit per channel
    ///   (see [`crate::consts::CHANNEL_A`] through
    ///   [`crate::consts::CHANNEL_E`]).
    ///
    /// Pulse width and repeat count start at the protocol defaults
    /// ([`DEFAULT_PULSE_WIDTH_US`], [`DEFAULT_REPEAT`]).
    ///
    /// # Errors
    /// Returns [`Error::Transmission`] if driving the line to its idle low
    /// level fails.
    pub fn new(tx: TX, delay: D, key: Key, device: u8) -> Result<Self, Error<TX::Error>> {
        let mut driver = Self {
            tx,
            delay,
            key,
            device,
            pulse_width_us: DEFAULT_PULSE_WIDTH_US,
            repeat: DEFAULT_REPEAT,
        };
        driver.write_tx(false)?; // Ensure idle
        Ok(driver)
    }

    /// Releases the output pin and delay provider.
    pub fn free(self) -> (TX, D) {
        (self.tx, self.delay)
    }

    /// Replaces the default device mask used by the convenience switches.
    pub fn set_device(&mut self, device: u8) {
        self.device = device;
    }

    /// Replaces the per-level hold time, in microseconds.
    pub fn set_pulse_width(&mut self, pulse_width_us: u32) {
        self.pulse_width_us = pulse_width_us;
    }

    /// Replaces the number of waveform repetitions per transmission.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] for a repeat count of zero; a
    /// zero-repeat transmission would never reach the air.
    pub fn set_repeat(&mut self, repeat: u8) -> Result<(), Error<TX::Error>> {
        if repeat == 0 {
            return Err(Error::InvalidConfiguration("repeat count must be at least 1"));
        }
        self.repeat = repeat;
        Ok(())
    }

    fn write_tx(&mut self, level: bool) -> Result<(), Error<TX::Error>> {
        if level {
            self.tx.set_high().map_err(Error::Transmission)
        } else {
            self.tx.set_low().map_err(Error::Transmission)
        }
    }

    /// Switches the default device on.
    pub fn switch_on(&mut self) -> Result<(), Error<TX::Error>> {
        self.issue(self.device, Command::On)
    }

    /// Switches the default device off.
    pub fn switch_off(&mut self) -> Result<(), Error<TX::Error>> {
        self.issue(self.device, Command::Off)
    }

    /// Encodes and transmits a command for the given device mask.
    ///
    /// Runs the full pipeline: codeword encoding against the configured key,
    /// pulse expansion, then the blocking transmission. Blocks for
    /// `repeat × 128 × pulse_width` (≈ 384 ms at the defaults).
    ///
    /// # Errors
    /// Returns [`Error::Transmission`] if the output line fails.
    pub fn issue(&mut self, device: u8, command: Command) -> Result<(), Error<TX::Error>> {
        #[cfg(feature = "log")]
        log::debug!("issuing {command:?} for device mask {device:#07b}");
        let codeword = encode(&self.key, device, command);
        let waveform = expand(&codeword);
        self.transmit(&waveform)
    }

    /// Caller-facing trigger: parses a command token and transmits it.
    ///
    /// Accepts exactly `"on"` and `"off"`. Anything else is rejected with
    /// [`Error::InvalidCommand`] before the output line is touched, so a bad
    /// token can never put a partial frame on the air.
    pub fn trigger(&mut self, device: u8, token: &str) -> Result<(), Error<TX::Error>> {
        let command = token.parse::<Command>().map_err(Error::widen)?;
        self.issue(device, command)
    }

    /// Drives the output line through one transmission of `waveform`.
    ///
    /// The line is first set low so the frame starts from a known idle
    /// state, then every level of the waveform is emitted in order, each
    /// held for one pulse width, and the whole waveform is repeated
    /// back-to-back `repeat` times with no gap in between. The physical
    /// signal is one continuous stream of `repeat × len` level-holds.
    ///
    /// The call blocks for its full duration and is not cancellable once
    /// started. Each invocation is self-contained; the driver keeps no
    /// state between transmissions.
    ///
    /// # Errors
    /// Returns [`Error::Transmission`] as soon as a pin write fails; the
    /// remaining level-holds of the frame are abandoned. There is no
    /// internal retry: the repeat count exists for RF-channel noise, and
    /// local pin faults are the caller's to handle.
    pub fn transmit(&mut self, waveform: &[bool]) -> Result<(), Error<TX::Error>> {
        #[cfg(feature = "log")]
        log::trace!(
            "transmitting {} levels x{} at {} us/level",
            waveform.len(),
            self.repeat,
            self.pulse_width_us
        );
        self.write_tx(false)?;
        for _ in 0..self.repeat {
            for &level in waveform {
                self.write_tx(level)?;
                self.delay.delay_us(self.pulse_width_us);
            }
        }
        #[cfg(feature = "log")]
        log::trace!("transmission complete");
        Ok(())
    }
}
