//! Here we construct a polynomial commitment that enables users to commit to
//! a single polynomial `p`, and then later provide an evaluation proof that
//! convinces verifiers that a claimed value `v` is the true evaluation of `p`
//! at a chosen point `x`. Our construction follows the template of the
//! construction proposed by Kate, Zaverucha, and Goldberg
//! ([KZG10](http://cacr.uwaterloo.ca/techreports/2010/cacr2010-10.pdf)),
//! instantiated over a pre-generated powers-of-tau SRS that is injected at
//! construction time rather than sampled by the scheme itself.

use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{One, PrimeField};
use ark_poly::DenseUVPolynomial;
use ark_serialize::Valid;
use ark_std::{marker::PhantomData, ops::Div, vec, vec::Vec};

use crate::error::Error;
use crate::srs::Srs;
use crate::utils::field_element_from_be_bytes;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

mod data_structures;
pub use data_structures::*;

/// `KZG10` is an implementation of the polynomial commitment scheme of
/// [Kate, Zaverucha and Goldberg][kzg10] over an externally supplied
/// powers-of-tau SRS.
///
/// All operations are pure: the same inputs over the same SRS always produce
/// the same outputs, and nothing is written back to the SRS. Batches of
/// independent commitments, openings, and checks may therefore be run
/// concurrently without coordination.
///
/// [kzg10]: http://cacr.uwaterloo.ca/techreports/2010/cacr2010-10.pdf
pub struct KZG10<E, P, S>
where
    E: Pairing,
    P: DenseUVPolynomial<E::ScalarField, Point = E::ScalarField>,
    S: Srs<E>,
{
    srs: S,
    _engine: PhantomData<E>,
    _poly: PhantomData<P>,
}

impl<E, P, S> KZG10<E, P, S>
where
    E: Pairing,
    P: DenseUVPolynomial<E::ScalarField, Point = E::ScalarField>,
    for<'a, 'b> &'a P: Div<&'b P, Output = P>,
    S: Srs<E>,
{
    /// Constructs the scheme over the given SRS accessor.
    pub fn new(srs: S) -> Self {
        Self {
            srs,
            _engine: PhantomData,
            _poly: PhantomData,
        }
    }

    /// Returns a reference to the underlying SRS accessor.
    pub fn srs(&self) -> &S {
        &self.srs
    }

    /// Outputs a commitment to `polynomial`: the multi-scalar sum
    /// `Σ coeff_i · τ^i G`, affine-normalized.
    ///
    /// Fails with [`Error::SrsExhausted`] if the polynomial has more
    /// coefficients than the SRS has points.
    pub fn commit(&self, polynomial: &P) -> Result<Commitment<E>, Error> {
        let commit_time = start_timer!(|| format!(
            "Committing to polynomial of degree {}",
            polynomial.degree()
        ));
        let powers_of_g = self.srs.powers_of_g(polynomial.coeffs().len())?;

        let (num_leading_zeros, plain_coeffs) =
            skip_leading_zeros_and_convert_to_bigints(polynomial);

        let msm_time = start_timer!(|| "MSM to compute commitment to plaintext poly");
        let commitment = <E::G1 as VariableBaseMSM>::msm_bigint(
            &powers_of_g[num_leading_zeros..],
            &plain_coeffs,
        );
        end_timer!(msm_time);

        end_timer!(commit_time);
        Ok(Commitment(commitment.into_affine()))
    }

    /// Commits to coefficients supplied as untrusted big-endian byte strings.
    ///
    /// Every coefficient must be a canonical scalar; otherwise this fails
    /// with [`Error::InvalidFieldElement`] before any group arithmetic is
    /// performed, and nothing is committed.
    pub fn commit_bytes(&self, coefficients: &[impl AsRef<[u8]>]) -> Result<Commitment<E>, Error> {
        let coeffs = coefficients
            .iter()
            .map(|c| field_element_from_be_bytes(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.commit(&P::from_coefficients_vec(coeffs))
    }

    /// Commits to each polynomial in `polynomials` independently.
    pub fn batch_commit<'a>(
        &self,
        polynomials: impl IntoIterator<Item = &'a P>,
    ) -> Result<Vec<Commitment<E>>, Error>
    where
        P: 'a,
    {
        polynomials.into_iter().map(|p| self.commit(p)).collect()
    }

    /// Computes the witness polynomial `(p - value) / (X - point)`.
    ///
    /// The division is exact precisely when `value == p.evaluate(&point)`.
    /// For any other `value` the nonzero remainder is dropped and the
    /// resulting quotient proves nothing: [`Self::check`] will reject the
    /// opening built from it.
    pub fn compute_witness_polynomial(
        polynomial: &P,
        point: E::ScalarField,
        value: E::ScalarField,
    ) -> P {
        let mut shifted = polynomial.coeffs().to_vec();
        if shifted.is_empty() {
            shifted.push(-value);
        } else {
            shifted[0] -= value;
        }
        let numerator = P::from_coefficients_vec(shifted);
        let divisor = P::from_coefficients_vec(vec![-point, E::ScalarField::one()]);
        &numerator / &divisor
    }

    /// On input `polynomial`, a `point`, and the claimed evaluation `value`,
    /// outputs a proof that the polynomial committed via [`Self::commit`]
    /// evaluates to `value` at `point`.
    ///
    /// The caller is responsible for passing the true evaluation: opening at
    /// a `value != polynomial.evaluate(&point)` yields a well-formed proof
    /// object that no verifier will accept.
    pub fn open(
        &self,
        polynomial: &P,
        point: E::ScalarField,
        value: E::ScalarField,
    ) -> Result<Proof<E, P>, Error> {
        let open_time =
            start_timer!(|| format!("Opening polynomial of degree {}", polynomial.degree()));

        let witness_time = start_timer!(|| "Computing witness polynomial");
        let witness_polynomial = Self::compute_witness_polynomial(polynomial, point, value);
        end_timer!(witness_time);

        let w = self.commit(&witness_polynomial)?;

        end_timer!(open_time);
        Ok(Proof {
            w: w.0,
            witness_polynomial,
        })
    }

    /// Verifies that `value` is the evaluation at `point` of the polynomial
    /// committed inside `comm`, by checking the pairing equation
    /// `e(C - value·G, H) == e(w, τH - point·H)`.
    ///
    /// Returns `Ok(false)` only for a well-formed but false claim; malformed
    /// group elements fail with [`Error::InvalidPoint`] before any pairing is
    /// attempted. The check is not constant-time; do not expose it where the
    /// verifier's timing is adversarially observable.
    pub fn check(
        &self,
        comm: &Commitment<E>,
        point: E::ScalarField,
        value: E::ScalarField,
        proof: &Proof<E, P>,
    ) -> Result<bool, Error> {
        let check_time = start_timer!(|| "Checking evaluation");
        comm.0.check().map_err(|_| Error::InvalidPoint)?;
        proof.w.check().map_err(|_| Error::InvalidPoint)?;

        let g = self.srs.powers_of_g(1)?[0];
        let powers_of_h = self.srs.powers_of_h(2)?;
        let (h, tau_h) = (powers_of_h[0], powers_of_h[1]);

        let inner = comm.0.into_group() - g * value;
        let lhs = E::pairing(inner, h);

        let inner = tau_h.into_group() - h * point;
        let rhs = E::pairing(proof.w, inner);

        let result = lhs == rhs;
        end_timer!(check_time, || format!("Result: {}", result));
        Ok(result)
    }
}

fn skip_leading_zeros_and_convert_to_bigints<F: PrimeField, P: DenseUVPolynomial<F>>(
    p: &P,
) -> (usize, Vec<F::BigInt>) {
    let mut num_leading_zeros = 0;
    while num_leading_zeros < p.coeffs().len() && p.coeffs()[num_leading_zeros].is_zero() {
        num_leading_zeros += 1;
    }
    let coeffs = convert_to_bigints(&p.coeffs()[num_leading_zeros..]);
    (num_leading_zeros, coeffs)
}

fn convert_to_bigints<F: PrimeField>(p: &[F]) -> Vec<F::BigInt> {
    let to_bigint_time = start_timer!(|| "Converting polynomial coeffs to bigints");
    let coeffs = ark_std::cfg_iter!(p)
        .map(|s| s.into_bigint())
        .collect::<Vec<_>>();
    end_timer!(to_bigint_time);
    coeffs
}
