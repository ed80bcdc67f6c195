//! Piano key classification
//!
//! Maps a chromatic note index onto the physical piano layout: which
//! slots are white keys, and which half of the octave they sit in.
//!
//! ```text
//!  C# D#    F# G# A#
//! ┌─┬─┬─┬─┬─┬─┬─┬─┬─┬─┬─┬─┐
//! │ │█│ │█│ │ │█│ │█│ │█│ │
//! │C│ │D│ │E│F│ │G│ │A│ │B│
//! └─┴─┴─┴─┴─┴─┴─┴─┴─┴─┴─┴─┘
//!  ─ lower ─  ──── upper ────
//! ```
//!
//! The lower half (C..E) sits before the two-black-key gap and the upper
//! half (F..B) after it. Each half gets its own color band on the track.

/// Number of chromatic slots in one octave
pub const NOTES_PER_OCTAVE: u8 = 12;

/// Whether a chromatic slot is a white key (index by note % 12)
const WHITE_KEYS: [bool; NOTES_PER_OCTAVE as usize] = [
    true,  // C
    false, // C#
    true,  // D
    false, // D#
    true,  // E
    true,  // F
    false, // F#
    true,  // G
    false, // G#
    true,  // A
    false, // A#
    true,  // B
];

/// Whether a chromatic slot belongs to the lower half of the octave
const LOWER_HALF: [bool; NOTES_PER_OCTAVE as usize] = [
    true, true, true, true, true, // C..E
    false, false, false, false, false, false, false, // F..B
];

const NOTE_NAMES: [&str; NOTES_PER_OCTAVE as usize] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Key color on a piano keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyColor {
    White,
    Black,
}

/// Which side of the octave's black-key gap a note sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardHalf {
    /// C, C#, D, D#, E
    Lower,
    /// F through B
    Upper,
}

/// Check if a chromatic note is a white key
///
/// Accepts any note number; only `note % 12` is considered.
pub fn is_white_key(note: u8) -> bool {
    WHITE_KEYS[(note % NOTES_PER_OCTAVE) as usize]
}

/// Check if a chromatic note is in the lower half of its octave
pub fn is_lower_half_key(note: u8) -> bool {
    LOWER_HALF[(note % NOTES_PER_OCTAVE) as usize]
}

pub fn key_color(note: u8) -> KeyColor {
    if is_white_key(note) {
        KeyColor::White
    } else {
        KeyColor::Black
    }
}

pub fn keyboard_half(note: u8) -> KeyboardHalf {
    if is_lower_half_key(note) {
        KeyboardHalf::Lower
    } else {
        KeyboardHalf::Upper
    }
}

/// Note name without octave ("C", "C#", ... "B")
pub fn note_name(note: u8) -> &'static str {
    NOTE_NAMES[(note % NOTES_PER_OCTAVE) as usize]
}

/// Count the white keys in a chromatic span starting at C
pub fn white_key_count(total_keys: usize) -> usize {
    (0..total_keys)
        .filter(|&i| is_white_key((i % NOTES_PER_OCTAVE as usize) as u8))
        .count()
}
