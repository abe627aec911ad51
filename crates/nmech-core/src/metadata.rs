//! # Metadata
//!
//! Free-form annotations attached to a record. Metadata never affects the
//! meaning of a document; it is carried through rendering unchanged.

use std::collections::BTreeMap;

use serde_json::Value;

/// String-keyed mapping of arbitrary serializable values.
pub type Metadata = BTreeMap<String, Value>;

/// Records that may carry optional metadata.
pub trait HasMetadata {
    /// The attached metadata, if any.
    fn metadata(&self) -> Option<&Metadata>;

    /// Mutable access to the metadata slot.
    fn metadata_mut(&mut self) -> &mut Option<Metadata>;

    /// Attach one annotation, creating the mapping on first use.
    fn annotate(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.metadata_mut()
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
    }
}
