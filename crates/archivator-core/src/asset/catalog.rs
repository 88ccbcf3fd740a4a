//! Lazy catalog of the assets referenced by one source document.

use std::iter::FusedIterator;

use indexmap::IndexMap;

use super::{AssetDescriptor, ReferenceHandler};
use crate::digest::ContentAddressNamer;
use crate::error::{to_url, NormalizeError, Result};

/// Assets found on a web page, resolved one at a time while iterating.
///
/// ```
/// use archivator_core::asset::AssetCatalog;
///
/// let source = "http://renoirboulanger.com/page/3/";
/// let catalog = AssetCatalog::new(source, ["/wp-content/themes/renoirb/assets/img/zce_logo.jpg"]).unwrap();
/// let assets: Vec<_> = catalog.collect::<Result<_, _>>().unwrap();
/// assert_eq!(
///     assets[0].src(),
///     "http://renoirboulanger.com/wp-content/themes/renoirb/assets/img/zce_logo.jpg"
/// );
/// assert_eq!(
///     assets[0].dest(),
///     Some("renoirboulanger.com/page/3/840257d7de220958ca4cc05a3c0ee337e2b0401d.jpg")
/// );
/// ```
///
/// Items come out in input order, duplicates included. The catalog is consumed
/// by iteration; build a new one to go over the same references again.
pub struct AssetCatalog {
    source_document: String,
    references: std::vec::IntoIter<String>,
    handler: Box<dyn ReferenceHandler>,
}

impl AssetCatalog {
    /// Creates a catalog named with sha1/hex digests until another handler is set.
    ///
    /// Fails if `source_document` is not an absolute URL.
    pub fn new<I, S>(source_document: &str, references: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        to_url(source_document)?;
        let references: Vec<String> = references.into_iter().map(Into::into).collect();
        tracing::debug!(
            source_document,
            count = references.len(),
            "asset catalog created"
        );
        Ok(Self {
            source_document: source_document.to_string(),
            references: references.into_iter(),
            handler: Box::new(ContentAddressNamer::default()),
        })
    }

    pub fn source_document(&self) -> &str {
        &self.source_document
    }

    /// Replaces the reference handler for every asset not yet yielded.
    pub fn set_reference_handler<H>(&mut self, handler: H)
    where
        H: ReferenceHandler + 'static,
    {
        self.handler = Box::new(handler);
    }

    /// Drains the remaining assets into a map from the reference as found in the
    /// document to its local file name, for rewriting the document afterwards.
    ///
    /// Entries keep the order references were given in; a repeated reference
    /// keeps its first position.
    pub fn into_reference_map(self) -> Result<IndexMap<String, String>> {
        let mut out = IndexMap::new();
        for asset in self {
            let asset = asset?;
            let reference = asset.reference().ok_or_else(|| {
                NormalizeError::IllegalState(format!("missing asset reference for {}", asset.matched()))
            })?;
            out.insert(asset.matched().to_string(), reference.to_string());
        }
        Ok(out)
    }

    fn describe(&self, matched: &str) -> Result<AssetDescriptor> {
        let mut asset = AssetDescriptor::new(&self.source_document, matched)?;
        let named = self.handler.reference(&asset)?;
        asset.assign_reference(named.reference)?;
        asset.assign_dest(&self.source_document)?;
        tracing::trace!(
            matched = asset.matched(),
            src = asset.src(),
            dest = asset.dest(),
            "asset resolved"
        );
        Ok(asset)
    }
}

impl Iterator for AssetCatalog {
    type Item = Result<AssetDescriptor>;

    fn next(&mut self) -> Option<Self::Item> {
        let matched = self.references.next()?;
        Some(self.describe(&matched))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.references.size_hint()
    }
}

impl ExactSizeIterator for AssetCatalog {}

impl FusedIterator for AssetCatalog {}
