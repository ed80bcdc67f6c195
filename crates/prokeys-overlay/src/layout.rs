//! White key layout
//!
//! Scans the chromatic range of the keyboard and produces one
//! [`WhiteKeySlot`] per white key, in ascending chromatic order.
//!
//! # Bands
//!
//! Every octave is split into two color bands at the black-key gap:
//!
//! ```text
//! chromatic:  0  2  4 | 5  7  9 11 | 12 14 16 | 17 19 21 23 | 24
//! note:       C  D  E | F  G  A  B | C  D  E  | F  G  A  B  | C
//! band:       0  0  0 | 1  1  1  1 | 2  2  2  | 3  3  3  3  | 4
//! edge:       N     M | N        M | N     M  | N        M  |
//! ```
//!
//! `N`/`M` mark the keys that carry the edge gradient texture, normal or
//! mirrored, so that both sides of a band fade symmetrically.

use crate::piano::{is_lower_half_key, is_white_key, NOTES_PER_OCTAVE};

/// Total chromatic keys on the ProKeys lane (two octaves plus the closing C)
pub const TOTAL_KEY_COUNT: usize = 25;

/// Number of white keys that fit across the track width
pub const WHITE_KEY_VISIBLE_COUNT: usize = 14;

/// Chromatic index pairs bounding each gradient span.
///
/// The first key of a pair draws the gradient as-is, the second one
/// mirrored. The closing C (24) is intentionally left untextured.
pub const BAND_EDGE_PAIRS: [(usize, usize); 4] = [(0, 4), (5, 11), (12, 16), (17, 23)];

/// Horizontal orientation of a band edge gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOrientation {
    /// Left edge of a band
    Normal,
    /// Right edge of a band (texture flipped horizontally)
    Mirrored,
}

impl EdgeOrientation {
    /// Horizontal texture scale for this orientation
    pub fn texture_scale_x(self) -> f32 {
        match self {
            Self::Normal => 1.0,
            Self::Mirrored => -1.0,
        }
    }
}

/// Look up whether a chromatic key sits on a band edge
pub fn band_edge_for(chromatic_index: usize) -> Option<EdgeOrientation> {
    BAND_EDGE_PAIRS.iter().find_map(|&(start, end)| {
        if chromatic_index == start {
            Some(EdgeOrientation::Normal)
        } else if chromatic_index == end {
            Some(EdgeOrientation::Mirrored)
        } else {
            None
        }
    })
}

/// A white key's position on the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhiteKeySlot {
    /// Dense index in scan order; the only valid highlight address
    pub sequential_index: usize,
    /// Position within the full chromatic range
    pub chromatic_index: usize,
    pub octave_index: usize,
    /// 0-11, C = 0
    pub note_in_octave: u8,
    /// Color band (two per octave)
    pub band_group: usize,
    /// Some when the key carries the edge gradient
    pub band_edge: Option<EdgeOrientation>,
}

impl WhiteKeySlot {
    pub fn is_band_edge(&self) -> bool {
        self.band_edge.is_some()
    }

    pub fn is_mirrored(&self) -> bool {
        self.band_edge == Some(EdgeOrientation::Mirrored)
    }
}

/// Build the white key slots for a keyboard of `total_keys` chromatic keys
///
/// The keyboard is assumed to start on C.
pub fn build_white_key_slots(total_keys: usize) -> Vec<WhiteKeySlot> {
    let octave_len = NOTES_PER_OCTAVE as usize;
    let mut slots = Vec::with_capacity(total_keys);
    let mut sequential_index = 0;

    for chromatic_index in 0..total_keys {
        let note_in_octave = (chromatic_index % octave_len) as u8;
        if !is_white_key(note_in_octave) {
            continue;
        }

        let octave_index = chromatic_index / octave_len;
        let band_group = octave_index * 2 + if is_lower_half_key(note_in_octave) { 0 } else { 1 };

        slots.push(WhiteKeySlot {
            sequential_index,
            chromatic_index,
            octave_index,
            note_in_octave,
            band_group,
            band_edge: band_edge_for(chromatic_index),
        });
        sequential_index += 1;
    }

    slots
}

/// Translate a chromatic key index into its white key (sequential) index
///
/// Returns `None` for black keys and keys outside the layout.
pub fn sequential_index_for(slots: &[WhiteKeySlot], chromatic_index: usize) -> Option<usize> {
    slots
        .binary_search_by_key(&chromatic_index, |slot| slot.chromatic_index)
        .ok()
        .map(|pos| slots[pos].sequential_index)
}
