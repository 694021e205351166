/// The error type for the commitment scheme and its SRS accessors.
#[derive(Debug)]
pub enum Error {
    /// A scalar input is not a canonical (reduced) element of the scalar
    /// field. Raw inputs are checked eagerly, before any arithmetic.
    InvalidFieldElement,

    /// A group element is not a valid point: it fails either the curve
    /// equation or the prime-order-subgroup check.
    InvalidPoint,

    /// The interpolation domain implied by the input length exceeds the
    /// largest power-of-two multiplicative subgroup of the scalar field.
    DomainTooLarge {
        /// The power-of-two domain size that was requested.
        requested: usize,
        /// The largest domain size the field supports.
        supported: usize,
    },

    /// A request for an SRS prefix exceeded the stored SRS size.
    SrsExhausted {
        /// The number of points requested.
        requested: usize,
        /// The number of points the SRS actually holds.
        available: usize,
    },

    /// An I/O failure while reading the SRS. The SRS is static, so this is a
    /// deployment problem rather than a transient condition; it is propagated
    /// and never retried.
    Io(ark_std::io::Error),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidFieldElement => write!(
                f,
                "a scalar input is not a canonical element of the scalar field"
            ),
            Error::InvalidPoint => write!(
                f,
                "a group element is not a valid point of the prime-order subgroup"
            ),
            Error::DomainTooLarge {
                requested,
                supported,
            } => write!(
                f,
                "an evaluation domain of size {:?} exceeds the largest \
                 power-of-two subgroup of the scalar field ({:?})",
                requested, supported
            ),
            Error::SrsExhausted {
                requested,
                available,
            } => write!(
                f,
                "the requested SRS prefix ({:?} points) exceeds the stored SRS \
                 ({:?} points)",
                requested, available
            ),
            Error::Io(err) => write!(f, "I/O failure while reading the SRS: {}", err),
        }
    }
}

impl From<ark_std::io::Error> for Error {
    fn from(other: ark_std::io::Error) -> Self {
        Error::Io(other)
    }
}

impl ark_std::error::Error for Error {}

impl Error {
    pub(crate) fn check_srs_length(requested: usize, available: usize) -> Result<(), Self> {
        if requested > available {
            Err(Error::SrsExhausted {
                requested,
                available,
            })
        } else {
            Ok(())
        }
    }
}
