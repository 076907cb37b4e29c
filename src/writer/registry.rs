//! Writer registry and pool

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::ObjectType;
use crate::writer::{
    compatible_document::CompatibleDocumentWriter,
    doc_option::DocOptionWriter,
    forbidden_word_list::ForbiddenWordListWriter,
    header::HeaderWriter,
    ref_list::{ItemGroupWriter, RefListWriter},
    track_change_config::TrackChangeConfigWriter,
    ElementWriter,
};

/// Pool of reusable per-type writers, keyed by type tag.
///
/// The pool is a multiset: checking out a tag whose idle set is empty
/// constructs a fresh instance, so re-entrant writes of the same tag are
/// legal and never corrupt an enclosing call's writer. One registry serves
/// one tree walk at a time; independent documents written in parallel each
/// need their own registry and builder.
pub struct WriterRegistry {
    idle: HashMap<ObjectType, Vec<Box<dyn ElementWriter>>>,
    live: usize,
}

impl WriterRegistry {
    pub fn new() -> Self {
        Self {
            idle: HashMap::new(),
            live: 0,
        }
    }

    /// Hand out a writer for the given tag, reusing an idle instance when
    /// one exists.
    pub fn checkout(&mut self, tag: ObjectType) -> Result<Box<dyn ElementWriter>> {
        let writer = match self.idle.get_mut(&tag).and_then(Vec::pop) {
            Some(writer) => writer,
            None => create_writer(tag)?,
        };
        self.live += 1;
        Ok(writer)
    }

    /// Return a writer to the idle set.
    pub fn release(&mut self, writer: Box<dyn ElementWriter>) {
        debug_assert!(self.live > 0, "release without a matching checkout");
        self.live = self.live.saturating_sub(1);
        self.idle.entry(writer.sort()).or_default().push(writer);
    }

    /// Total number of idle instances across all tags.
    pub fn idle_count(&self) -> usize {
        self.idle.values().map(Vec::len).sum()
    }

    /// Number of writers currently checked out.
    pub fn live_count(&self) -> usize {
        self.live
    }
}

impl Default for WriterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Construct a writer for a tag; tags written inline by their parent
/// (BeginNum, MetaTag) have no writer of their own.
fn create_writer(tag: ObjectType) -> Result<Box<dyn ElementWriter>> {
    match tag {
        ObjectType::Head => Ok(Box::new(HeaderWriter::new())),
        ObjectType::RefList => Ok(Box::new(RefListWriter::new())),
        ObjectType::Fontfaces | ObjectType::BorderFills | ObjectType::CharProperties => {
            Ok(Box::new(ItemGroupWriter::new(tag)))
        }
        ObjectType::ForbiddenWordList => Ok(Box::new(ForbiddenWordListWriter::new())),
        ObjectType::CompatibleDocument => Ok(Box::new(CompatibleDocumentWriter::new())),
        ObjectType::DocOption => Ok(Box::new(DocOptionWriter::new())),
        ObjectType::TrackChangeConfig => Ok(Box::new(TrackChangeConfigWriter::new())),
        ObjectType::BeginNum | ObjectType::MetaTag => Err(Error::UnknownWriter(tag)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_reuses_idle_instance() {
        let mut registry = WriterRegistry::new();
        let writer = registry.checkout(ObjectType::RefList).unwrap();
        registry.release(writer);
        assert_eq!(registry.idle_count(), 1);

        let _writer = registry.checkout(ObjectType::RefList).unwrap();
        assert_eq!(registry.idle_count(), 0);
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn test_reentrant_same_tag_checkout_allocates_fresh() {
        let mut registry = WriterRegistry::new();
        let outer = registry.checkout(ObjectType::RefList).unwrap();
        let inner = registry.checkout(ObjectType::RefList).unwrap();
        assert_eq!(registry.live_count(), 2);

        registry.release(inner);
        registry.release(outer);
        assert_eq!(registry.live_count(), 0);
        assert_eq!(registry.idle_count(), 2);
    }

    #[test]
    fn test_unknown_tag_is_an_error() {
        let mut registry = WriterRegistry::new();
        match registry.checkout(ObjectType::BeginNum) {
            Err(Error::UnknownWriter(ObjectType::BeginNum)) => {}
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected an error for an inlined tag"),
        }
    }

    #[test]
    fn test_sort_matches_checkout_tag() {
        let mut registry = WriterRegistry::new();
        for tag in [
            ObjectType::Head,
            ObjectType::RefList,
            ObjectType::Fontfaces,
            ObjectType::BorderFills,
            ObjectType::CharProperties,
            ObjectType::ForbiddenWordList,
            ObjectType::CompatibleDocument,
            ObjectType::DocOption,
            ObjectType::TrackChangeConfig,
        ] {
            let writer = registry.checkout(tag).unwrap();
            assert_eq!(writer.sort(), tag);
            registry.release(writer);
        }
    }
}
