use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup};
use ark_poly::DenseUVPolynomial;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress};
use ark_std::ops::{Add, AddAssign};

/// `Commitment` commits to a polynomial. It is output by `KZG10::commit`.
#[derive(Derivative, CanonicalSerialize, CanonicalDeserialize)]
#[derivative(
    Default(bound = ""),
    Hash(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct Commitment<E: Pairing>(
    /// The commitment is a group element.
    pub E::G1Affine,
);

impl<E: Pairing> Commitment<E> {
    /// The commitment to the zero polynomial.
    #[inline]
    pub fn empty() -> Self {
        Commitment(E::G1Affine::zero())
    }

    /// Size in bytes of the compressed commitment.
    pub fn size_in_bytes(&self) -> usize {
        self.0.serialized_size(Compress::Yes)
    }
}

impl<E: Pairing> Add for Commitment<E> {
    type Output = Self;

    /// Commitments are additively homomorphic: the sum of two commitments
    /// commits to the coefficient-wise sum of the underlying polynomials.
    fn add(self, other: Self) -> Self {
        Commitment((self.0 + other.0).into_affine())
    }
}

impl<'a, E: Pairing> AddAssign<(E::ScalarField, &'a Commitment<E>)> for Commitment<E> {
    #[inline]
    fn add_assign(&mut self, (f, other): (E::ScalarField, &'a Commitment<E>)) {
        let mut other = other.0 * f;
        other.add_assign(&self.0);
        self.0 = other.into();
    }
}

/// `Proof` is an evaluation proof output by `KZG10::open`.
#[derive(Derivative, CanonicalSerialize, CanonicalDeserialize)]
#[derivative(
    Hash(bound = ""),
    Clone(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct Proof<E: Pairing, P: DenseUVPolynomial<E::ScalarField>> {
    /// The commitment to the witness polynomial; this single group element is
    /// all a verifier needs.
    pub w: E::G1Affine,
    /// The witness (quotient) polynomial `(p - value) / (X - point)` itself.
    /// Verification ignores it; it is retained for callers composing larger
    /// protocols or debugging an opening.
    pub witness_polynomial: P,
}

impl<E: Pairing, P: DenseUVPolynomial<E::ScalarField>> Proof<E, P> {
    /// Size in bytes of the compressed proof element, excluding the retained
    /// witness polynomial.
    pub fn size_in_bytes(&self) -> usize {
        self.w.serialized_size(Compress::Yes)
    }
}
