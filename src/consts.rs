//! Constants used across the remote-switch protocol implementation.
//!
//! This module defines the fixed symbol alphabet, frame layout, and default
//! transmission parameters for the Elro-style self-learning switch protocol.
//!
//! These values mirror the framing used by the original Elro receivers and
//! their clones; the receivers re-learn each code by majority vote over
//! repeated identical frames, which is why [`DEFAULT_REPEAT`] is well above 1.
//!
//! ## Key Concepts
//!
//! - **Symbols**: each codeword entry is one of two fixed 8-bit micro-patterns
//!   ([`SYMBOL_SHORT`] or [`SYMBOL_LONG`]), plus a fixed frame trailer.
//! - **Codeword Layout**: 5 key symbols, 5 channel symbols, a 2-symbol
//!   command pair, and a 4-symbol trailer, always exactly
//!   [`CODEWORD_LEN`] symbols.
//! - **Waveform Sizing**: each symbol expands to [`BITS_PER_SYMBOL`] output
//!   levels, MSB first, giving [`WAVEFORM_LEN`] levels per frame.
//! - **Channels**: receiver channels A–E map to one bit each of the device
//!   mask; a transmission addresses every channel whose bit is set.

/// The "short" tri-bit symbol, `0b1000_1110`.
///
/// Encodes a logical 0 in the key and channel sections of a codeword, and
/// forms half of the command pair.
pub const SYMBOL_SHORT: u8 = 0b1000_1110;

/// The "long" tri-bit symbol, `0b1000_1000`.
///
/// Encodes a logical 1 in the key and channel sections of a codeword, and
/// forms the other half of the command pair.
pub const SYMBOL_LONG: u8 = 0b1000_1000;

/// The first trailer symbol, marking the end of a frame.
///
/// A lone leading pulse followed by silence; the three remaining trailer
/// symbols are all-zero and never vary.
pub const FRAME_SYNC: u8 = 0b1000_0000;

/// Number of symbols in a codeword. Every codeword is exactly this long.
pub const CODEWORD_LEN: usize = 16;

/// Number of dip switches on a receiver, and thus entries in a key.
pub const KEY_LEN: usize = 5;

/// Number of receiver channels addressable by one device mask.
pub const CHANNEL_COUNT: usize = 5;

/// Bitmask selecting the valid channel bits of a device address.
///
/// Bits above bit 4 carry no meaning on the air and are silently discarded
/// when encoding, matching the behavior of existing transmitters.
pub const DEVICE_MASK: u8 = 0x1f;

/// Output levels emitted per symbol (one per symbol bit, MSB first).
pub const BITS_PER_SYMBOL: usize = 8;

/// Number of output levels in one expanded waveform period.
pub const WAVEFORM_LEN: usize = CODEWORD_LEN * BITS_PER_SYMBOL;

/// The template codeword before key, channel, and command bits are applied.
///
/// Indices 0–10 are [`SYMBOL_SHORT`], index 11 is [`SYMBOL_LONG`] (together
/// with index 10 this is the OFF command pair), and indices 12–15 are the
/// fixed trailer.
pub const BASE_CODEWORD: [u8; CODEWORD_LEN] = [
    SYMBOL_SHORT,
    SYMBOL_SHORT,
    SYMBOL_SHORT,
    SYMBOL_SHORT,
    SYMBOL_SHORT,
    SYMBOL_SHORT,
    SYMBOL_SHORT,
    SYMBOL_SHORT,
    SYMBOL_SHORT,
    SYMBOL_SHORT,
    SYMBOL_SHORT,
    SYMBOL_LONG,
    FRAME_SYNC,
    0,
    0,
    0,
];

/// Receiver channel A (device bit 0).
pub const CHANNEL_A: u8 = 1 << 0;
/// Receiver channel B (device bit 1).
pub const CHANNEL_B: u8 = 1 << 1;
/// Receiver channel C (device bit 2).
pub const CHANNEL_C: u8 = 1 << 2;
/// Receiver channel D (device bit 3).
pub const CHANNEL_D: u8 = 1 << 3;
/// Receiver channel E (device bit 4).
pub const CHANNEL_E: u8 = 1 << 4;

/// Default hold time for each output level, in microseconds.
pub const DEFAULT_PULSE_WIDTH_US: u32 = 300;

/// Default number of consecutive waveform repetitions per transmission.
///
/// The channel is open-loop OOK; repeating the frame is the only redundancy
/// the receivers get.
pub const DEFAULT_REPEAT: u8 = 10;
