//! Assets found in an archived document: where to fetch them from and where to
//! store them.

mod catalog;

pub use catalog::AssetCatalog;

use serde::Serialize;

use crate::digest::{ContentAddressNamer, NamedReference};
use crate::error::{NormalizeError, Result};
use crate::url_model::{directory_slug, resolve_reference};

/// One asset referenced by a source document.
///
/// `match` is the reference as written in the document, `src` the absolute URL
/// to download it from. `reference` (the local file name) and `dest` (the
/// storage path, relative to the archive root) are filled in later, in that
/// order, and each only once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetDescriptor {
    dest: Option<String>,
    #[serde(rename = "match")]
    matched: String,
    reference: Option<String>,
    src: String,
}

impl AssetDescriptor {
    /// Resolves `matched` against `source_document`.
    pub fn new(source_document: &str, matched: &str) -> Result<Self> {
        let src = resolve_reference(source_document, matched)?;
        Ok(Self {
            dest: None,
            matched: matched.to_string(),
            reference: None,
            src,
        })
    }

    /// The reference exactly as found in the document.
    pub fn matched(&self) -> &str {
        &self.matched
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn dest(&self) -> Option<&str> {
        self.dest.as_deref()
    }

    /// Records the file name of this asset. Fails if one was already assigned.
    pub fn assign_reference(&mut self, reference: impl Into<String>) -> Result<()> {
        if let Some(existing) = &self.reference {
            return Err(NormalizeError::IllegalState(format!(
                "asset {} already has reference {existing}",
                self.matched
            )));
        }
        self.reference = Some(reference.into());
        Ok(())
    }

    /// Storage path for this asset: the slug of `source_document` joined with the
    /// reference. Fails until a reference has been assigned.
    pub fn extract_dest(&self, source_document: &str) -> Result<String> {
        let reference = self.reference.as_deref().ok_or_else(|| {
            NormalizeError::IllegalState(format!(
                "missing reference for asset {}, assign a reference before computing dest",
                self.matched
            ))
        })?;
        let base = directory_slug(source_document)?;
        Ok(format!("{base}/{reference}"))
    }

    /// Computes and records `dest`. Fails without a reference or if `dest` is already set.
    pub fn assign_dest(&mut self, source_document: &str) -> Result<()> {
        if self.dest.is_some() {
            return Err(NormalizeError::IllegalState(format!(
                "asset {} already has a dest",
                self.matched
            )));
        }
        self.dest = Some(self.extract_dest(source_document)?);
        Ok(())
    }
}

/// Decides the local file name of an asset.
///
/// [`ContentAddressNamer`] is the stock implementation; a catalog can be given
/// any other via [`AssetCatalog::set_reference_handler`].
pub trait ReferenceHandler {
    fn reference(&self, asset: &AssetDescriptor) -> Result<NamedReference>;
}

impl ReferenceHandler for ContentAddressNamer {
    fn reference(&self, asset: &AssetDescriptor) -> Result<NamedReference> {
        self.name(asset.src())
    }
}

impl<F> ReferenceHandler for F
where
    F: Fn(&AssetDescriptor) -> Result<NamedReference>,
{
    fn reference(&self, asset: &AssetDescriptor) -> Result<NamedReference> {
        self(asset)
    }
}
