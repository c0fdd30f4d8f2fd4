//! SHA-1 digests as stored in the `pwdlist` table.
//!
//! A [`Sha1Digest`] is always 40 uppercase hexadecimal characters. It can only
//! be built by validating caller input ([`Sha1Digest::parse`]) or by hashing a
//! cleartext password ([`Sha1Digest::of_password`]).

use crate::error::CheckError;
use sha1::{Digest, Sha1};
use std::fmt;
use std::str::FromStr;

/// Length of a hex-encoded SHA-1 digest.
pub const DIGEST_HEX_LEN: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sha1Digest(String);

impl Sha1Digest {
    /// Validate a hex digest supplied by a caller, normalizing it to uppercase.
    pub fn parse(input: &str) -> Result<Self, CheckError> {
        if input.len() != DIGEST_HEX_LEN || !input.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CheckError::InvalidDigest);
        }
        Ok(Self(input.to_ascii_uppercase()))
    }

    /// Hash a cleartext password given as text.
    pub fn of_password(password: &str) -> Self {
        Self::of_bytes(password.as_bytes())
    }

    /// Hash a cleartext password given as raw bytes, in any encoding.
    pub fn of_bytes(password: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(password);
        Self(hex::encode_upper(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Sha1Digest {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Sha1Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWORD_SHA1: &str = "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8";

    #[test]
    fn parse_normalizes_lowercase_to_uppercase() {
        let digest = Sha1Digest::parse("5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8").unwrap();
        assert_eq!(digest.as_str(), PASSWORD_SHA1);
    }

    #[test]
    fn parse_accepts_mixed_case() {
        let digest: Sha1Digest = "5BaA61e4C9b93f3F0682250b6cf8331B7ee68fD8".parse().unwrap();
        assert_eq!(digest.as_str(), PASSWORD_SHA1);
    }

    #[test]
    fn parse_accepts_all_zeros() {
        let zeros = "0".repeat(DIGEST_HEX_LEN);
        assert_eq!(Sha1Digest::parse(&zeros).unwrap().as_str(), zeros);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        let too_long = format!("{PASSWORD_SHA1}0");
        let cases = [
            "",
            "notavalidhash",
            &PASSWORD_SHA1[..39],
            too_long.as_str(),
            "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FDG",
            "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD ",
            " 5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD",
        ];
        for case in cases {
            assert!(
                matches!(Sha1Digest::parse(case), Err(CheckError::InvalidDigest)),
                "accepted {case:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_multibyte_input_of_matching_byte_length() {
        // 20 two-byte characters is 40 bytes but not hex.
        let input = "é".repeat(20);
        assert_eq!(input.len(), DIGEST_HEX_LEN);
        assert!(Sha1Digest::parse(&input).is_err());
    }

    #[test]
    fn of_password_matches_known_digests() {
        assert_eq!(Sha1Digest::of_password("password").as_str(), PASSWORD_SHA1);
        assert_eq!(
            Sha1Digest::of_password("qwerty").as_str(),
            "B1B3773A05C0ED0176787A4F1574FF0075F7521E"
        );
        assert_eq!(
            Sha1Digest::of_password("").as_str(),
            "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709"
        );
    }

    #[test]
    fn of_bytes_hashes_non_utf8_input() {
        assert_eq!(
            Sha1Digest::of_bytes(b"password"),
            Sha1Digest::of_password("password")
        );
        assert_eq!(
            Sha1Digest::of_bytes(&[0xFF]).as_str(),
            "85E53271E14006F0265921D02D4D736CDC580B0B"
        );
    }

    #[test]
    fn of_password_does_not_trim() {
        assert_ne!(
            Sha1Digest::of_password(" password"),
            Sha1Digest::of_password("password")
        );
    }

    #[test]
    fn of_password_output_round_trips_through_parse() {
        let hashed = Sha1Digest::of_password("password123");
        assert_eq!(Sha1Digest::parse(hashed.as_str()).unwrap(), hashed);
        assert_eq!(hashed, Sha1Digest::of_password("password123"));
    }
}
