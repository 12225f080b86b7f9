//! Pulse expansion from codewords to physical output levels.
//!
//! A codeword is a logical frame; what actually goes on the air is one output
//! level per symbol bit. This module flattens the 16 symbols of a
//! [`Codeword`] into the [`WAVEFORM_LEN`](crate::consts::WAVEFORM_LEN) booleans of one waveform period,
//! walking each symbol from its most significant bit to its least
//! significant bit.
//!
//! Expansion is total and pure: a well-formed codeword always yields exactly
//! `8 *` [`CODEWORD_LEN`] levels, and nothing here touches hardware. The
//! only failure mode is handing the slice-level [`expand_buffer`] a buffer
//! that is not a whole codeword.
//!
//! ## Functions
//!
//! - [`expand`]: converts a [`Codeword`] into an owned [`Waveform`]
//! - [`expand_buffer`]: expands a raw symbol slice into a caller-provided
//!   level buffer

use crate::codec::Codeword;
use crate::consts::{BITS_PER_SYMBOL, CODEWORD_LEN};
#[cfg(not(feature = "std"))]
use crate::consts::WAVEFORM_LEN;
use crate::error::{CodecError, Error};

/// One full waveform period: the output levels for a single frame.
#[cfg(not(feature = "std"))]
pub type Waveform = heapless::Vec<bool, WAVEFORM_LEN>;

/// One full waveform period: the output levels for a single frame.
#[cfg(feature = "std")]
pub type Waveform = Vec<bool>;

/// Expands a codeword into the level sequence of one waveform period.
///
/// Each symbol contributes [`BITS_PER_SYMBOL`] levels, most significant bit
/// first; a set bit means the line is driven high for one pulse width. The
/// result always holds exactly [`WAVEFORM_LEN`](crate::consts::WAVEFORM_LEN) levels.
pub fn expand(codeword: &Codeword) -> Waveform {
    let mut levels = Waveform::new();
    for &symbol in codeword.as_symbols() {
        for bit in (0..BITS_PER_SYMBOL).rev() {
            let level = symbol & (1 << bit) != 0;
            #[cfg(not(feature = "std"))]
            let _ = levels.push(level); // capacity is exactly WAVEFORM_LEN
            #[cfg(feature = "std")]
            levels.push(level);
        }
    }
    levels
}

/// Expands a raw symbol slice into the level buffer `output`.
///
/// # Arguments
/// - `input`: the symbol bytes of one codeword
/// - `output`: the level buffer to fill; must hold at least
///   [`WAVEFORM_LEN`](crate::consts::WAVEFORM_LEN) entries
///
/// # Returns
/// The number of levels written (always [`WAVEFORM_LEN`](crate::consts::WAVEFORM_LEN) on success).
///
/// # Errors
/// Returns [`Error::InvalidCodeword`] if `input` is not exactly
/// [`CODEWORD_LEN`] symbols long. Nothing is written in that case.
pub fn expand_buffer(input: &[u8], output: &mut [bool]) -> Result<usize, CodecError> {
    if input.len() != CODEWORD_LEN {
        return Err(Error::InvalidCodeword(input.len()));
    }
    let mut i = 0;
    for &symbol in input {
        for bit in (0..BITS_PER_SYMBOL).rev() {
            output[i] = symbol & (1 << bit) != 0;
            i += 1;
        }
    }
    Ok(i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Command, Key, encode};
    use crate::consts::WAVEFORM_LEN;
    use crate::consts::{BASE_CODEWORD, SYMBOL_LONG, SYMBOL_SHORT};

    #[test]
    fn expansion_ratio_is_eight_levels_per_symbol() {
        let word = encode(&Key::from_bits(0b01010), 6, Command::On);
        let levels: Waveform = expand(&word);
        assert_eq!(levels.len(), WAVEFORM_LEN);
        assert_eq!(levels.len(), 8 * word.as_symbols().len());
    }

    #[test]
    fn symbols_expand_msb_first() {
        // SHORT = 0b1000_1110, LONG = 0b1000_1000
        let word = Codeword::from_slice(&BASE_CODEWORD).unwrap();
        let levels = expand(&word);

        let short_levels = [true, false, false, false, true, true, true, false];
        let long_levels = [true, false, false, false, true, false, false, false];
        assert_eq!(&levels[0..8], &short_levels);
        assert_eq!(&levels[11 * 8..12 * 8], &long_levels);
    }

    #[test]
    fn trailer_expands_to_sync_pulse_then_silence() {
        let word = encode(&Key::new([true; 5]), 31, Command::On);
        let levels = expand(&word);

        // FRAME_SYNC = 0b1000_0000, then three all-zero symbols
        assert!(levels[12 * 8]);
        assert!(levels[12 * 8 + 1..].iter().all(|&level| !level));
    }

    #[test]
    fn expand_buffer_matches_expand() {
        let word = encode(&Key::from_bits(0b11011), 20, Command::Off);
        let mut buf = [false; WAVEFORM_LEN];
        let written = expand_buffer(word.as_ref(), &mut buf).unwrap();
        assert_eq!(written, WAVEFORM_LEN);
        assert_eq!(&buf[..], &expand(&word)[..]);
    }

    #[test]
    fn expand_buffer_rejects_partial_codewords() {
        let mut buf = [false; WAVEFORM_LEN];
        assert_eq!(
            expand_buffer(&[SYMBOL_SHORT; 12], &mut buf),
            Err(Error::InvalidCodeword(12))
        );
        assert_eq!(
            expand_buffer(&[SYMBOL_LONG; 17], &mut buf),
            Err(Error::InvalidCodeword(17))
        );
        assert!(buf.iter().all(|&level| !level));
    }
}
