//! Access to the powers-of-tau structured reference string.
//!
//! The SRS is the output of a one-time trusted setup: the two sequences
//! `{τ^i · G}` in G1 and `{τ^i · H}` in G2 for a secret, discarded scalar τ.
//! The commitment scheme only ever reads prefixes of these sequences, so the
//! accessor is a capability returning the first `len` points of either group.
//! Implementations must be read-only; the SRS is immutable for the lifetime
//! of the process and concurrent reads are always consistent.

use ark_ec::pairing::Pairing;
use ark_ec::scalar_mul::ScalarMul;
use ark_std::rand::RngCore;
use ark_std::vec::Vec;
use ark_std::UniformRand;

use crate::error::Error;
use crate::utils::powers;

#[cfg(feature = "std")]
mod file;
#[cfg(feature = "std")]
pub use file::FileSrs;

/// Read-only access to prefixes of a powers-of-tau SRS.
pub trait Srs<E: Pairing> {
    /// Returns the first `len` G1 elements `{τ^i · G}`, `i = 0..len`.
    ///
    /// Fails with [`Error::SrsExhausted`] if `len` exceeds the stored SRS
    /// size.
    fn powers_of_g(&self, len: usize) -> Result<Vec<E::G1Affine>, Error>;

    /// Returns the first `len` G2 elements `{τ^i · H}`, `i = 0..len`.
    ///
    /// Fails with [`Error::SrsExhausted`] if `len` exceeds the stored SRS
    /// size.
    fn powers_of_h(&self, len: usize) -> Result<Vec<E::G2Affine>, Error>;
}

impl<E: Pairing, T: Srs<E>> Srs<E> for &T {
    fn powers_of_g(&self, len: usize) -> Result<Vec<E::G1Affine>, Error> {
        (**self).powers_of_g(len)
    }

    fn powers_of_h(&self, len: usize) -> Result<Vec<E::G2Affine>, Error> {
        (**self).powers_of_h(len)
    }
}

/// An SRS held in memory as two point vectors.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct MemorySrs<E: Pairing> {
    powers_of_g: Vec<E::G1Affine>,
    powers_of_h: Vec<E::G2Affine>,
}

impl<E: Pairing> MemorySrs<E> {
    /// Wraps existing powers-of-tau sequences, e.g. points loaded once from a
    /// ceremony transcript and shared across provers.
    pub fn new(powers_of_g: Vec<E::G1Affine>, powers_of_h: Vec<E::G2Affine>) -> Self {
        Self {
            powers_of_g,
            powers_of_h,
        }
    }

    /// Generates an SRS supporting degrees up to `max_degree` from a locally
    /// drawn trapdoor, which is dropped on return.
    ///
    /// This is support for tests and local tooling only. A sound production
    /// SRS comes from a multi-party ceremony; whoever runs this function
    /// could have kept τ and forge evaluation proofs.
    pub fn setup<R: RngCore>(max_degree: usize, rng: &mut R) -> Self {
        let setup_time = start_timer!(|| format!("Sampling SRS with degree {}", max_degree));
        let tau = E::ScalarField::rand(rng);
        let powers_of_tau = powers(tau, max_degree + 1);

        let g = E::G1::rand(rng);
        let powers_of_g = g.batch_mul(&powers_of_tau);

        let h = E::G2::rand(rng);
        let powers_of_h = h.batch_mul(&powers_of_tau);
        end_timer!(setup_time);

        Self {
            powers_of_g,
            powers_of_h,
        }
    }

    /// The number of stored powers in each group.
    pub fn size(&self) -> usize {
        self.powers_of_g.len()
    }
}

impl<E: Pairing> Srs<E> for MemorySrs<E> {
    fn powers_of_g(&self, len: usize) -> Result<Vec<E::G1Affine>, Error> {
        Error::check_srs_length(len, self.powers_of_g.len())?;
        Ok(self.powers_of_g[..len].to_vec())
    }

    fn powers_of_h(&self, len: usize) -> Result<Vec<E::G2Affine>, Error> {
        Error::check_srs_length(len, self.powers_of_h.len())?;
        Ok(self.powers_of_h[..len].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Bn254;
    use ark_std::test_rng;

    #[test]
    fn prefixes_are_prefixes() {
        let rng = &mut test_rng();
        let srs = MemorySrs::<Bn254>::setup(7, rng);
        assert_eq!(srs.size(), 8);

        let all = srs.powers_of_g(8).unwrap();
        let some = srs.powers_of_g(3).unwrap();
        assert_eq!(&all[..3], &some[..]);
        assert_eq!(srs.powers_of_h(2).unwrap().len(), 2);
    }

    #[test]
    fn exhausted_prefix_is_an_error() {
        let rng = &mut test_rng();
        let srs = MemorySrs::<Bn254>::setup(3, rng);
        assert!(matches!(
            srs.powers_of_g(5),
            Err(Error::SrsExhausted {
                requested: 5,
                available: 4
            })
        ));
        assert!(matches!(
            srs.powers_of_h(9),
            Err(Error::SrsExhausted { .. })
        ));
    }
}
