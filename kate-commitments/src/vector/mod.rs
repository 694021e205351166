//! Vector commitments on top of the polynomial scheme.
//!
//! A vector `v_0, ..., v_(m-1)` is committed by interpolating the unique
//! polynomial `p` of degree below `d` with `p(ω^i) = v_i` over a
//! power-of-two domain `{ω^0, ..., ω^(d-1)}`, `d` being the smallest power
//! of two at least `m`, and committing to `p`. Proving membership of `v_i`
//! at index `i` is then exactly an evaluation opening at `ω^i`.

use ark_ec::pairing::Pairing;
use ark_ff::{FftField, Field};
use ark_poly::{DenseUVPolynomial, EvaluationDomain, Evaluations, Radix2EvaluationDomain};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{ops::Div, vec::Vec};

use crate::error::Error;
use crate::kzg10::{Commitment, Proof, KZG10};
use crate::srs::Srs;

/// A commitment to an indexed vector of scalars, output by
/// `KZG10::commit_vector`. Immutable once produced.
#[derive(Derivative, CanonicalSerialize, CanonicalDeserialize)]
#[derivative(
    Hash(bound = ""),
    Clone(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct VectorCommitment<E: Pairing, P: DenseUVPolynomial<E::ScalarField>> {
    /// Size of the evaluation domain: the smallest power of two at least the
    /// committed vector's length.
    pub domain_size: usize,
    /// A primitive `domain_size`-th root of unity ω; entry `i` lives at
    /// `ω^i`.
    pub domain_root: E::ScalarField,
    /// The interpolated polynomial, with `polynomial(ω^i) = v_i` for stored
    /// entries and zero for padded indices.
    pub polynomial: P,
    /// The commitment to `polynomial`.
    pub commitment: Commitment<E>,
}

/// Returns the smallest radix-2 evaluation domain holding `len` points, or
/// [`Error::DomainTooLarge`] if the scalar field has no subgroup that big.
pub(crate) fn domain_for_len<F: FftField>(len: usize) -> Result<Radix2EvaluationDomain<F>, Error> {
    Radix2EvaluationDomain::new(len).ok_or(Error::DomainTooLarge {
        requested: len.checked_next_power_of_two().unwrap_or(usize::MAX),
        supported: 1usize.checked_shl(F::TWO_ADICITY).unwrap_or(usize::MAX),
    })
}

/// Interpolates `values` as evaluations over a power-of-two root-of-unity
/// domain.
///
/// Returns `(d, ω, p)` where `d` is the smallest power of two at least
/// `values.len()`, ω is a primitive `d`-th root of unity, and `p` is the
/// unique polynomial of degree below `d` with `p(ω^i) = values[i]` for every
/// stored index and `p(ω^i) = 0` for the zero-padded indices up to `d`.
pub fn interpolate<F: FftField, P: DenseUVPolynomial<F>>(
    values: &[F],
) -> Result<(usize, F, P), Error> {
    let domain = domain_for_len::<F>(values.len())?;
    let interpolate_time = start_timer!(|| format!(
        "Interpolating {} values over a domain of size {}",
        values.len(),
        domain.size()
    ));

    let mut padded = values.to_vec();
    padded.resize(domain.size(), F::zero());
    let polynomial = Evaluations::from_vec_and_domain(padded, domain).interpolate();

    end_timer!(interpolate_time);
    Ok((
        domain.size(),
        domain.group_gen,
        P::from_coefficients_vec(polynomial.coeffs),
    ))
}

impl<E, P, S> KZG10<E, P, S>
where
    E: Pairing,
    P: DenseUVPolynomial<E::ScalarField, Point = E::ScalarField>,
    for<'a, 'b> &'a P: Div<&'b P, Output = P>,
    S: Srs<E>,
{
    /// Commits to `values` as a vector: interpolates them over a
    /// root-of-unity domain via [`interpolate`] and commits to the
    /// interpolant.
    ///
    /// Deterministic: the same vector over the same SRS always yields the
    /// same [`VectorCommitment`].
    pub fn commit_vector(&self, values: &[E::ScalarField]) -> Result<VectorCommitment<E, P>, Error> {
        let (domain_size, domain_root, polynomial) = interpolate(values)?;
        let commitment = self.commit(&polynomial)?;
        Ok(VectorCommitment {
            domain_size,
            domain_root,
            polynomial,
            commitment,
        })
    }

    /// Opens `vector_commitment` at `index`, proving that the committed
    /// vector stores `value` there.
    ///
    /// `value` must be the entry actually stored at `index`, or zero for a
    /// padded index; as with [`Self::open`], opening at a wrong value yields
    /// a proof that verifiers reject.
    pub fn open_index(
        &self,
        value: E::ScalarField,
        index: u64,
        vector_commitment: &VectorCommitment<E, P>,
    ) -> Result<Proof<E, P>, Error> {
        self.open(
            &vector_commitment.polynomial,
            vector_commitment.domain_root.pow([index]),
            value,
        )
    }

    /// Verifies that the vector committed inside `comm` over the domain
    /// generated by `domain_root` stores `value` at `index`.
    pub fn check_index(
        &self,
        comm: &Commitment<E>,
        domain_root: E::ScalarField,
        value: E::ScalarField,
        index: u64,
        proof: &Proof<E, P>,
    ) -> Result<bool, Error> {
        self.check(comm, domain_root.pow([index]), value, proof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srs::MemorySrs;
    use ark_bn254::{Bn254, Fr};
    use ark_ff::{One, Zero};
    use ark_poly::univariate::DensePolynomial;
    use ark_poly::Polynomial;
    use ark_std::{test_rng, UniformRand};

    type UniPoly = DensePolynomial<Fr>;
    type KZG = KZG10<Bn254, UniPoly, MemorySrs<Bn254>>;

    #[test]
    fn interpolation_matches_the_vector() {
        let rng = &mut test_rng();
        let values = (0..5).map(|_| Fr::rand(rng)).collect::<Vec<_>>();

        let (domain_size, root, polynomial) = interpolate::<Fr, UniPoly>(&values).unwrap();
        assert_eq!(domain_size, 8);
        assert_eq!(root.pow([8u64]), Fr::one());

        assert_eq!(polynomial.evaluate(&Fr::one()), values[0]);
        for (i, value) in values.iter().enumerate() {
            assert_eq!(polynomial.evaluate(&root.pow([i as u64])), *value);
        }
        // Padded indices interpolate to zero.
        for i in values.len()..domain_size {
            assert!(polynomial.evaluate(&root.pow([i as u64])).is_zero());
        }
    }

    #[test]
    fn vector_round_trip() {
        let rng = &mut test_rng();
        let srs = MemorySrs::setup(8, rng);
        let kzg = KZG::new(srs);

        let values = (0..5).map(|_| Fr::rand(rng)).collect::<Vec<_>>();
        let vc = kzg.commit_vector(&values).unwrap();
        assert_eq!(vc.domain_size, 8);

        for (i, value) in values.iter().enumerate() {
            let proof = kzg.open_index(*value, i as u64, &vc).unwrap();
            assert!(kzg
                .check_index(&vc.commitment, vc.domain_root, *value, i as u64, &proof)
                .unwrap());
        }
    }

    #[test]
    fn wrong_entry_is_rejected() {
        let rng = &mut test_rng();
        let srs = MemorySrs::setup(4, rng);
        let kzg = KZG::new(srs);

        let values = (0..4).map(|_| Fr::rand(rng)).collect::<Vec<_>>();
        let vc = kzg.commit_vector(&values).unwrap();

        let proof = kzg.open_index(values[1], 1, &vc).unwrap();
        assert!(!kzg
            .check_index(
                &vc.commitment,
                vc.domain_root,
                values[1] + Fr::one(),
                1,
                &proof
            )
            .unwrap());
        // A proof for one index does not open another.
        assert!(!kzg
            .check_index(&vc.commitment, vc.domain_root, values[1], 2, &proof)
            .unwrap());
    }

    #[test]
    fn padded_indices_open_to_zero() {
        let rng = &mut test_rng();
        let srs = MemorySrs::setup(8, rng);
        let kzg = KZG::new(srs);

        let values = (0..5).map(|_| Fr::rand(rng)).collect::<Vec<_>>();
        let vc = kzg.commit_vector(&values).unwrap();

        let proof = kzg.open_index(Fr::zero(), 6, &vc).unwrap();
        assert!(kzg
            .check_index(&vc.commitment, vc.domain_root, Fr::zero(), 6, &proof)
            .unwrap());
    }

    #[test]
    fn singleton_vector_uses_a_trivial_domain() {
        let rng = &mut test_rng();
        let srs = MemorySrs::setup(1, rng);
        let kzg = KZG::new(srs);

        let values = [Fr::rand(rng)];
        let vc = kzg.commit_vector(&values).unwrap();
        assert_eq!(vc.domain_size, 1);

        let proof = kzg.open_index(values[0], 0, &vc).unwrap();
        assert!(kzg
            .check_index(&vc.commitment, vc.domain_root, values[0], 0, &proof)
            .unwrap());
    }

    #[test]
    fn oversized_domain_is_rejected() {
        let too_big = (1usize << <Fr as FftField>::TWO_ADICITY) + 1;
        assert!(matches!(
            domain_for_len::<Fr>(too_big),
            Err(Error::DomainTooLarge { .. })
        ));
    }
}
