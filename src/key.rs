//! Public key validity probing.
//!
//! Point validation is delegated entirely to [`k256`]; this module only
//! strips the optional `0x` prefix and decodes hex. A value that already is a
//! [`PublicKey`] needs no probing; it was validated at construction.

use k256::PublicKey;

/// Error type returned by [`parse_public_key`].
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    /// The input is not valid hex.
    #[error("invalid hex encoding: {0}")]
    Hex(#[from] hex::FromHexError),
    /// The decoded bytes are not a valid SEC1 curve point.
    #[error("invalid SEC1 public key: {0}")]
    Sec1(k256::elliptic_curve::Error),
}

/// Parses a hex-encoded SEC1 public key, compressed or uncompressed, with an
/// optional `0x` prefix.
pub fn parse_public_key(value: &str) -> Result<PublicKey, KeyError> {
    let stripped = value.strip_prefix("0x").unwrap_or(value);
    let bytes = hex::decode(stripped)?;
    PublicKey::from_sec1_bytes(&bytes).map_err(KeyError::Sec1)
}

/// True when `value` parses as a public key; any parse error collapses to
/// `false` with no detail preserved.
pub fn is_valid_public_key(value: impl AsRef<str>) -> bool {
    parse_public_key(value.as_ref()).is_ok()
}
