//! Error type shared by the normalization and asset resolution modules.

use thiserror::Error;

/// Failure of a normalization step. Every variant is returned to the caller as-is;
/// nothing in this crate retries or recovers from them.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A source document URL, an intermediate base, or a resolved candidate is
    /// not an absolute URL.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// An asset descriptor was used out of order (e.g. `dest` before `reference`).
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// Digest algorithm name outside the supported set.
    #[error("unsupported hash \"{name}\", currently supported: {supported}")]
    UnsupportedAlgorithm { name: String, supported: String },

    /// Digest output encoding outside the supported set.
    #[error("unsupported digest encoding format \"{name}\", currently supported: {supported}")]
    UnsupportedEncoding { name: String, supported: String },
}

pub type Result<T, E = NormalizeError> = std::result::Result<T, E>;

/// Parses `input` as an absolute URL, mapping failures to [`NormalizeError::InvalidUrl`].
pub fn to_url(input: &str) -> Result<url::Url> {
    url::Url::parse(input).map_err(|source| NormalizeError::InvalidUrl {
        url: input.to_string(),
        source,
    })
}
