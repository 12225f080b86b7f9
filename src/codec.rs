//! Symbol codec for the remote-switch frame format.
//!
//! This module maps a (dip-switch key, device mask, command) triple onto the
//! fixed 16-symbol codeword the receivers are trained on. It provides the
//! input carrier types and a single pure encoding function.
//!
//! ## Frame layout
//!
//! A codeword always has exactly [`CODEWORD_LEN`] symbols, 0-indexed:
//!
//! | Index | Meaning |
//! |-------|---------|
//! | 0–4   | key bits: [`SYMBOL_LONG`] where the dip switch is on |
//! | 5–9   | channel bits: [`SYMBOL_LONG`] where the device-mask bit is set |
//! | 10–11 | command pair: `(SHORT, LONG)` = off, `(LONG, SHORT)` = on |
//! | 12–15 | fixed trailer: [`FRAME_SYNC`] then three zero symbols |
//!
//! The command pair is the only part of the frame a command changes.
//!
//! ## Purity
//!
//! [`encode`] builds every codeword fresh from [`BASE_CODEWORD`]; there is no
//! shared scratch state, so concurrent encodes can never bleed into each
//! other and two calls with equal inputs yield bit-identical frames.
//!
//! ## Limitations
//!
//! - Device-mask bits above bit 4 are silently discarded (see
//!   [`DEVICE_MASK`]); a mask of 32 addresses no channel at all rather than
//!   failing. This matches the transmitters already in the field.

use crate::consts::{
    BASE_CODEWORD, CHANNEL_COUNT, CODEWORD_LEN, DEVICE_MASK, KEY_LEN, SYMBOL_LONG, SYMBOL_SHORT,
};
use crate::error::{CodecError, Error};

/// The dip-switch key shared between transmitter and receivers.
///
/// One boolean per physical switch, in switch order. Configured once at
/// startup and immutable afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key([bool; KEY_LEN]);

impl Key {
    /// Creates a key from its five switch positions.
    pub const fn new(switches: [bool; KEY_LEN]) -> Self {
        Self(switches)
    }

    /// Creates a key from a switch slice.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfiguration`] unless the slice has exactly
    /// [`KEY_LEN`] entries.
    pub fn from_slice(switches: &[bool]) -> Result<Self, CodecError> {
        if switches.len() != KEY_LEN {
            return Err(Error::InvalidConfiguration("key must have 5 switches"));
        }
        let mut key = [false; KEY_LEN];
        key.copy_from_slice(switches);
        Ok(Self(key))
    }

    /// Creates a key from a bitmask, bit 0 being the first dip switch.
    ///
    /// Bits above bit 4 are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        let mut key = [false; KEY_LEN];
        let mut i = 0;
        while i < KEY_LEN {
            key[i] = bits & (1 << i) != 0;
            i += 1;
        }
        Self(key)
    }

    /// The switch positions, in switch order.
    pub const fn switches(&self) -> &[bool; KEY_LEN] {
        &self.0
    }
}

/// The two things a remote switch can be told to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Close the relay (power the socket).
    On,
    /// Open the relay.
    Off,
}

impl core::str::FromStr for Command {
    type Err = CodecError;

    /// Parses the caller-facing trigger tokens `"on"` and `"off"`.
    ///
    /// Any other token is rejected with [`Error::InvalidCommand`]; a bad
    /// token never reaches the output line.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "on" => Ok(Command::On),
            "off" => Ok(Command::Off),
            _ => Err(Error::InvalidCommand),
        }
    }
}

/// One encoded frame: exactly [`CODEWORD_LEN`] symbol bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codeword([u8; CODEWORD_LEN]);

impl Codeword {
    /// Wraps a raw symbol buffer of the right length.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCodeword`] with the observed length unless the
    /// slice holds exactly [`CODEWORD_LEN`] symbols. A wrong length here is a
    /// programming defect in the caller, not an expected runtime condition.
    pub fn from_slice(symbols: &[u8]) -> Result<Self, CodecError> {
        if symbols.len() != CODEWORD_LEN {
            return Err(Error::InvalidCodeword(symbols.len()));
        }
        let mut buf = [0u8; CODEWORD_LEN];
        buf.copy_from_slice(symbols);
        Ok(Self(buf))
    }

    /// The raw symbol bytes.
    pub const fn as_symbols(&self) -> &[u8; CODEWORD_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Codeword {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Encodes a (key, device, command) triple into a fresh codeword.
///
/// Starts from [`BASE_CODEWORD`], overwrites the key symbols for switches
/// that are on, the channel symbols for device-mask bits that are set, and
/// flips the command pair for [`Command::On`]. [`Command::Off`] is the base
/// pair and changes nothing.
///
/// Pure and deterministic: no state is carried between calls.
pub fn encode(key: &Key, device: u8, command: Command) -> Codeword {
    let mut symbols = BASE_CODEWORD;

    for (i, &on) in key.switches().iter().enumerate() {
        if on {
            symbols[i] = SYMBOL_LONG;
        }
    }

    let device = device & DEVICE_MASK;
    for i in 0..CHANNEL_COUNT {
        if device & (1 << i) != 0 {
            symbols[KEY_LEN + i] = SYMBOL_LONG;
        }
    }

    if command == Command::On {
        symbols[10] = SYMBOL_LONG;
        symbols[11] = SYMBOL_SHORT;
    }

    Codeword(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CHANNEL_A, FRAME_SYNC};
    use core::str::FromStr;

    const TRAILER: [u8; 4] = [FRAME_SYNC, 0, 0, 0];

    #[test]
    fn base_codeword_survives_all_zero_inputs() {
        let key = Key::new([false; 5]);
        let word = encode(&key, 0, Command::Off);
        assert_eq!(word.as_symbols(), &BASE_CODEWORD);
    }

    #[test]
    fn known_frame_for_all_switches_channel_a_on() {
        // key 11111, device A, command on
        let key = Key::new([true; 5]);
        let word = encode(&key, CHANNEL_A, Command::On);
        let s = word.as_symbols();

        assert_eq!(&s[0..5], &[SYMBOL_LONG; 5]);
        assert_eq!(s[5], SYMBOL_LONG);
        assert_eq!(&s[6..10], &[SYMBOL_SHORT; 4]);
        assert_eq!(s[10], SYMBOL_LONG);
        assert_eq!(s[11], SYMBOL_SHORT);
        assert_eq!(&s[12..16], &TRAILER);
    }

    #[test]
    fn command_pair_is_the_only_command_dependence() {
        let key = Key::from_bits(0b10101);
        for device in 0..=31u8 {
            let off = encode(&key, device, Command::Off);
            let on = encode(&key, device, Command::On);

            assert_eq!(off.as_symbols()[10], SYMBOL_SHORT);
            assert_eq!(off.as_symbols()[11], SYMBOL_LONG);
            assert_eq!(on.as_symbols()[10], SYMBOL_LONG);
            assert_eq!(on.as_symbols()[11], SYMBOL_SHORT);

            assert_eq!(&off.as_symbols()[..10], &on.as_symbols()[..10]);
            assert_eq!(&off.as_symbols()[12..], &on.as_symbols()[12..]);
        }
    }

    #[test]
    fn key_switches_map_onto_leading_symbols() {
        for bits in 0..32u8 {
            let key = Key::from_bits(bits);
            let word = encode(&key, 0, Command::Off);
            for i in 0..5 {
                let expected = if bits & (1 << i) != 0 {
                    SYMBOL_LONG
                } else {
                    SYMBOL_SHORT
                };
                assert_eq!(word.as_symbols()[i], expected, "key bit {i} of {bits:#07b}");
            }
        }
    }

    #[test]
    fn device_bits_map_onto_channel_symbols() {
        let key = Key::new([false; 5]);
        for device in 0..32u8 {
            let word = encode(&key, device, Command::Off);
            for i in 0..5 {
                let expected = if device & (1 << i) != 0 {
                    SYMBOL_LONG
                } else {
                    SYMBOL_SHORT
                };
                assert_eq!(word.as_symbols()[5 + i], expected);
            }
        }
    }

    #[test]
    fn trailer_is_fixed_for_all_inputs() {
        for bits in 0..32u8 {
            for device in [0u8, 1, 17, 31, 255] {
                for command in [Command::On, Command::Off] {
                    let word = encode(&Key::from_bits(bits), device, command);
                    assert_eq!(&word.as_symbols()[12..16], &TRAILER);
                }
            }
        }
    }

    #[test]
    fn device_bits_above_bit4_are_ignored() {
        let key = Key::from_bits(0b00110);
        let narrow = encode(&key, 0b0001_0110, Command::On);
        let wide = encode(&key, 0b1101_0110, Command::On);
        assert_eq!(narrow, wide);
    }

    #[test]
    fn encode_is_idempotent() {
        let key = Key::new([true, false, true, false, true]);
        let a = encode(&key, 9, Command::On);
        let b = encode(&key, 9, Command::On);
        assert_eq!(a, b);
    }

    #[test]
    fn key_from_slice_rejects_wrong_lengths() {
        assert_eq!(
            Key::from_slice(&[true, false]),
            Err(Error::InvalidConfiguration("key must have 5 switches"))
        );
        assert_eq!(
            Key::from_slice(&[false; 6]),
            Err(Error::InvalidConfiguration("key must have 5 switches"))
        );
        assert!(Key::from_slice(&[true; 5]).is_ok());
    }

    #[test]
    fn codeword_from_slice_rejects_wrong_lengths() {
        assert_eq!(
            Codeword::from_slice(&[SYMBOL_SHORT; 15]),
            Err(Error::InvalidCodeword(15))
        );
        let word = Codeword::from_slice(&BASE_CODEWORD).unwrap();
        assert_eq!(word.as_symbols(), &BASE_CODEWORD);
    }

    #[test]
    fn command_tokens_parse() {
        assert_eq!(Command::from_str("on"), Ok(Command::On));
        assert_eq!(Command::from_str("off"), Ok(Command::Off));
        assert_eq!(Command::from_str("toggle"), Err(Error::InvalidCommand));
        assert_eq!(Command::from_str(""), Err(Error::InvalidCommand));
        assert_eq!(Command::from_str("ON"), Err(Error::InvalidCommand));
    }
}
