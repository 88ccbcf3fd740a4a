pub mod config;
pub mod logging;

pub mod archivable;
pub mod asset;
pub mod digest;
pub mod error;
pub mod url_model;

pub use asset::{AssetCatalog, AssetDescriptor, ReferenceHandler};
pub use digest::{ContentAddressNamer, DigestAlgorithm, DigestEncoding, NamedReference};
pub use error::NormalizeError;
pub use url_model::{directory_slug, resolve_reference};
