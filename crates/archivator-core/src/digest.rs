//! Content-addressed asset names: a digest of the resolved asset URL plus its
//! file extension.
//!
//! The digest algorithm and output encoding are picked once, when the namer is
//! built; an unknown name fails there rather than on first use.

use base64::Engine as _;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use std::fmt;
use std::str::FromStr;

use crate::error::{to_url, NormalizeError, Result};
use crate::url_model::path_extension;

/// Digest algorithms available for asset names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    Md5,
    #[default]
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 6] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha224,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha224 => "sha224",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
        }
    }

    /// Raw digest bytes of `message`.
    pub fn digest(self, message: &[u8]) -> Vec<u8> {
        match self {
            DigestAlgorithm::Md5 => Md5::digest(message).to_vec(),
            DigestAlgorithm::Sha1 => Sha1::digest(message).to_vec(),
            DigestAlgorithm::Sha224 => Sha224::digest(message).to_vec(),
            DigestAlgorithm::Sha256 => Sha256::digest(message).to_vec(),
            DigestAlgorithm::Sha384 => Sha384::digest(message).to_vec(),
            DigestAlgorithm::Sha512 => Sha512::digest(message).to_vec(),
        }
    }

    fn supported() -> String {
        Self::ALL
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| NormalizeError::UnsupportedAlgorithm {
                name: s.to_string(),
                supported: Self::supported(),
            })
    }
}

/// Text encoding of the digest bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestEncoding {
    /// Lowercase hexadecimal.
    #[default]
    Hex,
    /// Standard alphabet, padded.
    Base64,
}

impl DigestEncoding {
    pub fn name(self) -> &'static str {
        match self {
            DigestEncoding::Hex => "hex",
            DigestEncoding::Base64 => "base64",
        }
    }

    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            DigestEncoding::Hex => hex::encode(bytes),
            DigestEncoding::Base64 => base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}

impl fmt::Display for DigestEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestEncoding {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self> {
        [DigestEncoding::Hex, DigestEncoding::Base64]
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| NormalizeError::UnsupportedEncoding {
                name: s.to_string(),
                supported: "hex, base64".to_string(),
            })
    }
}

/// Digest-based file name computed for a resolved asset URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedReference {
    /// Digest followed by the lowercased extension, if any.
    pub reference: String,
    pub has_extension: bool,
}

/// Names assets after a digest of their resolved URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentAddressNamer {
    algorithm: DigestAlgorithm,
    encoding: DigestEncoding,
}

impl ContentAddressNamer {
    /// Builds a namer from algorithm and encoding names (e.g. `"sha256"`, `"base64"`).
    pub fn new(algorithm: &str, encoding: &str) -> Result<Self> {
        Ok(Self {
            algorithm: algorithm.parse()?,
            encoding: encoding.parse()?,
        })
    }

    pub fn with(algorithm: DigestAlgorithm, encoding: DigestEncoding) -> Self {
        Self {
            algorithm,
            encoding,
        }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn encoding(&self) -> DigestEncoding {
        self.encoding
    }

    /// Encoded digest of `message`, without extension.
    pub fn hash(&self, message: &str) -> String {
        self.encoding
            .encode(&self.algorithm.digest(message.as_bytes()))
    }

    /// Names the asset at `resolved_url`.
    ///
    /// `http://www.example.org/a/b/c.png` with sha1/hex gives
    /// `4c49ccbf4cdbdbcfc7f91cf87f6e9636008e4a97.png`.
    pub fn name(&self, resolved_url: &str) -> Result<NamedReference> {
        let url = to_url(resolved_url)?;
        let extension = path_extension(url.path());
        let has_extension = !extension.is_empty();
        let reference = self.hash(resolved_url) + &extension;
        Ok(NamedReference {
            reference,
            has_extension,
        })
    }
}
