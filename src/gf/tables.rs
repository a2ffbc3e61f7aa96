//! Precomputed arithmetic tables for GF(4).
//!
//! Elements are encoded as `0 = 0`, `1 = 1`, `2 = u`, `3 = v` where `u` is a
//! root of `x² + x + 1` and `v = u² = u + 1`. With this encoding addition is
//! bitwise XOR, but the tables are kept explicit so every operation is a
//! single lookup that cannot leave the domain `0..4`.

/// Number of elements in the field.
pub const ORDER: usize = 4;

/// Addition table: `ADD[a][b] = a + b`.
pub const ADD: [[u8; ORDER]; ORDER] = [
    [0, 1, 2, 3],
    [1, 0, 3, 2],
    [2, 3, 0, 1],
    [3, 2, 1, 0],
];

/// Multiplication table: `MUL[a][b] = a * b`.
pub const MUL: [[u8; ORDER]; ORDER] = [
    [0, 0, 0, 0],
    [0, 1, 2, 3],
    [0, 2, 3, 1],
    [0, 3, 1, 2],
];

/// Frobenius conjugation table: `CONJ[a] = a²` (swaps `u` and `v`).
pub const CONJ: [u8; ORDER] = [0, 1, 3, 2];

/// Absolute trace to GF(2): `TRACE[a] = a + a²`.
pub const TRACE: [u8; ORDER] = [0, 0, 1, 1];

/// Canonical one-character symbols.
pub const SYMBOLS: [char; ORDER] = ['0', '1', 'u', 'v'];
