//! Zobrist hashing keys.
//!
//! Every key is drawn from a splitmix64 stream seeded with a fixed constant,
//! so repeated runs produce identical keys. Index allocation is fixed:
//! piece keys first (color * 384 + piece * 64 + square, 768 total), then the
//! side-to-move key (768), the 16 castling-rights keys (769..784), and the 64
//! en-passant keys (785..848).

use once_cell::sync::Lazy;

const SEED: u64 = 0xA5B3C7D9E1F23412;

/// One step of the splitmix64 output function.
#[inline]
#[must_use]
pub(crate) const fn splitmix64(state: u64) -> u64 {
    let mut z = state.wrapping_add(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

const fn nth_key(index: u64) -> u64 {
    splitmix64(SEED.wrapping_add(index))
}

pub(crate) struct ZobristKeys {
    /// `piece[color][piece_index][square]`
    pub piece: [[[u64; 64]; 6]; 2],
    pub side_to_move: u64,
    /// Indexed by the raw 4-bit castling mask.
    pub castling: [u64; 16],
    /// Indexed by the en-passant target square.
    pub en_passant: [u64; 64],
}

pub(crate) static KEYS: Lazy<ZobristKeys> = Lazy::new(|| {
    let mut keys = ZobristKeys {
        piece: [[[0; 64]; 6]; 2],
        side_to_move: nth_key(768),
        castling: [0; 16],
        en_passant: [0; 64],
    };
    for color in 0..2 {
        for piece in 0..6 {
            for sq in 0..64 {
                keys.piece[color][piece][sq] =
                    nth_key((color * 384 + piece * 64 + sq) as u64);
            }
        }
    }
    for idx in 0..16 {
        keys.castling[idx] = nth_key(769 + idx as u64);
    }
    for sq in 0..64 {
        keys.en_passant[sq] = nth_key(785 + sq as u64);
    }
    keys
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_splitmix64_deterministic() {
        assert_eq!(splitmix64(42), splitmix64(42));
        assert_ne!(splitmix64(42), splitmix64(43));
    }

    #[test]
    fn test_key_layout() {
        // Piece keys occupy indices 0..768 in (color, piece, square) order.
        assert_eq!(KEYS.piece[0][0][0], nth_key(0));
        assert_eq!(KEYS.piece[0][1][0], nth_key(64));
        assert_eq!(KEYS.piece[1][0][0], nth_key(384));
        assert_eq!(KEYS.piece[1][5][63], nth_key(767));
        assert_eq!(KEYS.side_to_move, nth_key(768));
        assert_eq!(KEYS.castling[0], nth_key(769));
        assert_eq!(KEYS.castling[15], nth_key(784));
        assert_eq!(KEYS.en_passant[0], nth_key(785));
        assert_eq!(KEYS.en_passant[63], nth_key(848));
    }

    #[test]
    fn test_keys_distinct() {
        let mut seen = HashSet::new();
        for color in 0..2 {
            for piece in 0..6 {
                for sq in 0..64 {
                    assert!(seen.insert(KEYS.piece[color][piece][sq]));
                }
            }
        }
        assert!(seen.insert(KEYS.side_to_move));
        for key in KEYS.castling {
            assert!(seen.insert(key));
        }
        for key in KEYS.en_passant {
            assert!(seen.insert(key));
        }
        assert_eq!(seen.len(), 768 + 1 + 16 + 64);
    }
}
