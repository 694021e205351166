use ark_ff::{Field, PrimeField};
use ark_std::vec::Vec;

use crate::error::Error;

/// Return the first `num` powers `[1, s, s^2, ..., s^(num-1)]` of `s`.
pub(crate) fn powers<F: Field>(s: F, num: usize) -> Vec<F> {
    let mut powers = Vec::with_capacity(num);
    let mut cur = F::one();
    for _ in 0..num {
        powers.push(cur);
        cur *= s;
    }
    powers
}

/// Parse a canonical field element from big-endian bytes.
///
/// The integer must be a reduced representative: any value greater than or
/// equal to the field modulus, or too wide for the field's integer
/// representation, fails with [`Error::InvalidFieldElement`]. This is the
/// entry point for untrusted scalar inputs; nothing downstream of it ever
/// reduces a raw integer silently.
pub fn field_element_from_be_bytes<F: PrimeField>(bytes: &[u8]) -> Result<F, Error> {
    let mut repr = F::BigInt::from(0u64);
    let num_limbs = repr.as_ref().len();
    for (i, chunk) in bytes.rchunks(8).enumerate() {
        if i >= num_limbs {
            if chunk.iter().any(|b| *b != 0) {
                return Err(Error::InvalidFieldElement);
            }
            continue;
        }
        let mut limb = [0u8; 8];
        limb[8 - chunk.len()..].copy_from_slice(chunk);
        repr.as_mut()[i] = u64::from_be_bytes(limb);
    }
    F::from_bigint(repr).ok_or(Error::InvalidFieldElement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_ff::BigInteger;
    use ark_std::{test_rng, UniformRand};

    #[test]
    fn canonical_round_trip() {
        let rng = &mut test_rng();
        for _ in 0..10 {
            let x = Fr::rand(rng);
            let bytes = x.into_bigint().to_bytes_be();
            assert_eq!(field_element_from_be_bytes::<Fr>(&bytes).unwrap(), x);
        }
    }

    #[test]
    fn modulus_is_rejected() {
        let modulus = <Fr as PrimeField>::MODULUS.to_bytes_be();
        assert!(matches!(
            field_element_from_be_bytes::<Fr>(&modulus),
            Err(Error::InvalidFieldElement)
        ));
    }

    #[test]
    fn oversized_integer_is_rejected() {
        let bytes = [0xffu8; 40];
        assert!(matches!(
            field_element_from_be_bytes::<Fr>(&bytes),
            Err(Error::InvalidFieldElement)
        ));
    }

    #[test]
    fn short_input_is_zero_extended() {
        assert_eq!(
            field_element_from_be_bytes::<Fr>(&[0x05]).unwrap(),
            Fr::from(5u64)
        );
    }
}
