//! Galois field GF(4) arithmetic.
//!
//! GF(4) is the field with four elements `{0, 1, u, v}`, characteristic 2,
//! where `u² = v`, `u·v = 1` and `u + v = 1`. It is the alphabet of the
//! convolutional codes in this crate.
//!
//! ## Overview
//!
//! - [`Gf4`]: the element type, a `Copy` value with table-driven arithmetic
//! - [`tables`]: the addition, multiplication, conjugation and trace tables
//!
//! ## Example
//!
//! ```
//! use gf4codes::gf::Gf4;
//!
//! let a = Gf4::U;
//! let b: Gf4 = "v".parse().unwrap();
//!
//! assert_eq!(a + b, Gf4::ONE);
//! assert_eq!(a * b, Gf4::ONE);
//! assert_eq!(a + a, Gf4::ZERO); // characteristic 2
//! ```

mod element;
pub mod tables;

pub use element::Gf4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_axioms() {
        // Test all pairs and triples exhaustively
        for a in Gf4::elements() {
            // Identity
            assert_eq!(a + Gf4::ZERO, a);
            assert_eq!(a * Gf4::ONE, a);

            // Additive inverse is the element itself
            assert_eq!(a + a, Gf4::ZERO);

            // Conjugation is an involution
            assert_eq!(a.conj().conj(), a);

            for b in Gf4::elements() {
                // Commutativity
                assert_eq!(a + b, b + a);
                assert_eq!(a * b, b * a);

                // Conjugation is a ring automorphism
                assert_eq!((a + b).conj(), a.conj() + b.conj());
                assert_eq!((a * b).conj(), a.conj() * b.conj());

                for c in Gf4::elements() {
                    // Associativity
                    assert_eq!((a + b) + c, a + (b + c));
                    assert_eq!((a * b) * c, a * (b * c));

                    // Distributivity
                    assert_eq!(a * (b + c), a * b + a * c);
                }
            }
        }
    }

    #[test]
    fn test_multiplicative_group_is_cyclic() {
        let u = Gf4::U;
        assert_eq!(u * u, Gf4::V);
        assert_eq!(u * u * u, Gf4::ONE);
    }
}
