//! URL-safe base64 without padding, the encoding relying parties use for
//! every binary member of ceremony JSON.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("malformed base64url -> {0}")]
pub struct MalformedEncodingError(#[from] base64::DecodeError);

/// Rejects the standard alphabet (`+`, `/`), padding, impossible lengths and
/// non-canonical trailing bits.
pub fn decode(text: &str) -> Result<Vec<u8>, MalformedEncodingError> {
    Ok(URL_SAFE_NO_PAD.decode(text)?)
}

pub fn encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};

    #[test]
    fn decode_known_values() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(decode("AAEC")?, [0, 1, 2]);
        assert_eq!(decode("AQID")?, [1, 2, 3]);
        assert_eq!(decode("")?, b"");
        assert_eq!(decode("X3Rlc3RfY2hhbGxlbmdlXw")?, b"_test_challenge_");
        assert_eq!(decode("-_8")?, [0xfb, 0xff]);

        Ok(())
    }

    #[test]
    fn encode_strips_padding() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(encode(b"_test_challenge_"), "X3Rlc3RfY2hhbGxlbmdlXw");
        assert_eq!(encode(&[0xfb, 0xff]), "-_8");
        assert_eq!(encode(&[0]), "AA");
        assert!(!encode(&[1, 2, 3, 4]).contains('='));

        Ok(())
    }

    #[test]
    fn decode_rejects_standard_alphabet_and_padding() -> Result<(), Box<dyn std::error::Error>> {
        assert!(decode("+_8").is_err());
        assert!(decode("-/8").is_err());
        assert!(decode("AA==").is_err());
        assert!(decode("AAE=").is_err());
        assert!(decode("AA E").is_err());

        Ok(())
    }

    #[test]
    fn decode_rejects_impossible_length() -> Result<(), Box<dyn std::error::Error>> {
        assert!(decode("A").is_err());
        assert!(decode("AAECA").is_err());

        Ok(())
    }

    #[test]
    fn decode_rejects_non_canonical_trailing_bits() -> Result<(), Box<dyn std::error::Error>> {
        // "AB" carries bits beyond the single byte it encodes
        assert!(decode("AB").is_err());
        assert_eq!(decode("AA")?, [0]);

        Ok(())
    }

    #[test]
    fn random_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let mut rng = thread_rng();

        for length in 0..64 {
            let test_bytes: Vec<u8> = (0..length).map(|_| rng.gen()).collect();
            let test_text = encode(&test_bytes);

            assert_eq!(decode(&test_text)?, test_bytes);
            assert_eq!(encode(&decode(&test_text)?), test_text);
        }

        Ok(())
    }
}
