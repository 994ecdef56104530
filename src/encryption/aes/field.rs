//! Arithmetic in GF(2^8) for AES.
//!
//! AES uses the field GF(2^8) defined by the irreducible polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B). Addition is XOR; multiplication is
//! carry-less polynomial multiplication reduced modulo that polynomial.
//!
//! Everything here is `const fn` so the round constant table can be
//! generated at compile time.

/// Low byte of the reduction polynomial x^8 + x^4 + x^3 + x + 1.
const REDUCTION: u8 = 0x1B;

/// Multiplies `a` by x (i.e. by 2) in GF(2^8).
#[inline(always)]
pub(crate) const fn xtime(a: u8) -> u8 {
    let carry = a & 0x80;
    let shifted = a << 1;

    if carry != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements.
///
/// Shift-and-add over the bits of `b`, reducing after every doubling of
/// `a`.
#[inline]
pub(crate) const fn mul(mut a: u8, mut b: u8) -> u8 {
    let mut res = 0u8;

    while b != 0 {
        if b & 1 != 0 {
            res ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }

    res
}

/// Builds the sequence 1, x, x^2, ... of successive doublings.
pub(crate) const fn powers_of_x<const N: usize>() -> [u8; N] {
    let mut out = [0u8; N];
    let mut value = 1u8;
    let mut i = 0;

    while i < N {
        out[i] = value;
        value = xtime(value);
        i += 1;
    }

    out
}
