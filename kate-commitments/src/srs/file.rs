//! File-backed SRS access in the raw powers-of-tau export layout for BN254.

use ark_bn254::{Bn254, Fq, Fq2, G1Affine, G2Affine};
use ark_serialize::Valid;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::srs::Srs;
use crate::utils::field_element_from_be_bytes;

/// Width in bytes of one big-endian base-field coordinate.
const COORDINATE_BYTES: usize = 32;
/// Width in bytes of one encoded G1 point: affine `(x, y)`.
const G1_POINT_BYTES: usize = 2 * COORDINATE_BYTES;
/// Width in bytes of one encoded G2 point: affine `(x.c0, x.c1, y.c0, y.c1)`.
const G2_POINT_BYTES: usize = 4 * COORDINATE_BYTES;

/// A powers-of-tau SRS backed by a pair of raw point files.
///
/// The files are headerless concatenations of fixed-width affine points,
/// ordered by increasing power of τ starting at τ^0: 64 bytes per G1 point
/// and 128 bytes per G2 point, every coordinate a 32-byte big-endian integer.
/// Reading the first `len` points reads exactly `len · 64` (respectively
/// `len · 128`) bytes from offset 0.
///
/// Each request opens the file independently; the files are immutable, so
/// concurrent readers never observe inconsistent state. Every decoded point
/// is validated against the curve equation and the prime-order subgroup, and
/// rejected with [`Error::InvalidPoint`] otherwise.
#[derive(Clone, Debug)]
pub struct FileSrs {
    g1_path: PathBuf,
    g2_path: PathBuf,
}

impl FileSrs {
    /// Creates an accessor over the given G1 and G2 point files.
    pub fn new(g1_path: impl Into<PathBuf>, g2_path: impl Into<PathBuf>) -> Self {
        Self {
            g1_path: g1_path.into(),
            g2_path: g2_path.into(),
        }
    }

    /// Reads the first `len * point_size` bytes of `path`, failing with
    /// [`Error::SrsExhausted`] if the file holds fewer than `len` points.
    fn read_prefix(path: &Path, len: usize, point_size: usize) -> Result<Vec<u8>, Error> {
        let file = File::open(path)?;
        let available = file.metadata()?.len() as usize / point_size;
        Error::check_srs_length(len, available)?;

        let mut bytes = vec![0u8; len * point_size];
        file.take((len * point_size) as u64).read_exact(&mut bytes)?;
        Ok(bytes)
    }
}

fn coordinate_from_be_bytes(bytes: &[u8]) -> Result<Fq, Error> {
    field_element_from_be_bytes(bytes).map_err(|_| Error::InvalidPoint)
}

fn g1_from_be_bytes(bytes: &[u8]) -> Result<G1Affine, Error> {
    let x = coordinate_from_be_bytes(&bytes[..COORDINATE_BYTES])?;
    let y = coordinate_from_be_bytes(&bytes[COORDINATE_BYTES..])?;
    let point = G1Affine::new_unchecked(x, y);
    point.check().map_err(|_| Error::InvalidPoint)?;
    Ok(point)
}

fn g2_from_be_bytes(bytes: &[u8]) -> Result<G2Affine, Error> {
    let x = Fq2::new(
        coordinate_from_be_bytes(&bytes[..COORDINATE_BYTES])?,
        coordinate_from_be_bytes(&bytes[COORDINATE_BYTES..2 * COORDINATE_BYTES])?,
    );
    let y = Fq2::new(
        coordinate_from_be_bytes(&bytes[2 * COORDINATE_BYTES..3 * COORDINATE_BYTES])?,
        coordinate_from_be_bytes(&bytes[3 * COORDINATE_BYTES..])?,
    );
    let point = G2Affine::new_unchecked(x, y);
    point.check().map_err(|_| Error::InvalidPoint)?;
    Ok(point)
}

impl Srs<Bn254> for FileSrs {
    fn powers_of_g(&self, len: usize) -> Result<Vec<G1Affine>, Error> {
        let bytes = Self::read_prefix(&self.g1_path, len, G1_POINT_BYTES)?;
        bytes.chunks_exact(G1_POINT_BYTES).map(g1_from_be_bytes).collect()
    }

    fn powers_of_h(&self, len: usize) -> Result<Vec<G2Affine>, Error> {
        let bytes = Self::read_prefix(&self.g2_path, len, G2_POINT_BYTES)?;
        bytes.chunks_exact(G2_POINT_BYTES).map(g2_from_be_bytes).collect()
    }
}
