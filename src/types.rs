// src/types.rs
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Supported proof-of-work algorithms
///
/// The canonical block hash is always double SHA256; this enum selects the
/// digest that gets compared against the difficulty target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmType {
    /// Double SHA256 (Bitcoin-style)
    ///
    /// The proof-of-work digest is identical to the canonical block hash.
    #[value(name = "sha256", alias = "sha256d")]
    Sha256d,

    /// Scrypt key derivation (Litecoin-style)
    ///
    /// The header is fed to scrypt as both password and salt with
    /// N=1024, r=1, p=1 and a 32-byte output.
    #[value(name = "scrypt")]
    Scrypt,
}

impl fmt::Display for AlgorithmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmType::Sha256d => write!(f, "SHA256"),
            AlgorithmType::Scrypt => write!(f, "scrypt"),
        }
    }
}

impl FromStr for AlgorithmType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha256" | "sha256d" => Ok(AlgorithmType::Sha256d),
            "scrypt" => Ok(AlgorithmType::Scrypt),
            _ => Err(format!("Unknown algorithm: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_algorithms() {
        assert_eq!("SHA256".parse::<AlgorithmType>(), Ok(AlgorithmType::Sha256d));
        assert_eq!("sha256d".parse::<AlgorithmType>(), Ok(AlgorithmType::Sha256d));
        assert_eq!("scrypt".parse::<AlgorithmType>(), Ok(AlgorithmType::Scrypt));
    }

    #[test]
    fn test_parse_unknown_algorithm_fails() {
        assert!("x11".parse::<AlgorithmType>().is_err());
    }

    #[test]
    fn test_display_matches_cli_names() {
        assert_eq!(AlgorithmType::Sha256d.to_string(), "SHA256");
        assert_eq!(AlgorithmType::Scrypt.to_string(), "scrypt");
    }
}
