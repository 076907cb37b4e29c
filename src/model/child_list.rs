//! Ordered child list: the order carrier for heterogeneous children

use crate::model::ObjectType;

/// A child variant that knows its own type tag.
pub trait TaggedChild {
    fn tag(&self) -> ObjectType;
}

/// Ordered sequence of heterogeneous children; insertion order is document
/// order.
///
/// The list is the single owner of its entries. Typed accessors on the
/// parent node are lookups into this list, so mutating a child through an
/// accessor and mutating the list directly can never drift apart — there is
/// only one storage to mutate. Duplicate tags are legal (some documents
/// repeat a reference list).
#[derive(Clone, Debug)]
pub struct ChildList<C> {
    entries: Vec<C>,
}

impl<C: TaggedChild> ChildList<C> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a child at the end (the reader appends in source order).
    pub fn push(&mut self, child: C) {
        self.entries.push(child);
    }

    /// Insert a child at `index`, shifting later entries.
    pub fn insert(&mut self, index: usize, child: C) {
        self.entries.insert(index, child);
    }

    /// First entry with the given tag.
    pub fn first(&self, tag: ObjectType) -> Option<&C> {
        self.entries.iter().find(|c| c.tag() == tag)
    }

    /// First entry with the given tag, mutable.
    pub fn first_mut(&mut self, tag: ObjectType) -> Option<&mut C> {
        self.entries.iter_mut().find(|c| c.tag() == tag)
    }

    /// Whether any entry carries the given tag.
    pub fn contains(&self, tag: ObjectType) -> bool {
        self.entries.iter().any(|c| c.tag() == tag)
    }

    /// Replace the first entry with the same tag as `child`, keeping its
    /// position; append when no such entry exists. Returns the replaced
    /// entry, if any.
    pub fn set_first(&mut self, child: C) -> Option<C> {
        let tag = child.tag();
        match self.entries.iter().position(|c| c.tag() == tag) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx], child)),
            None => {
                self.entries.push(child);
                None
            }
        }
    }

    /// Remove the first entry with the given tag; no-op when absent.
    pub fn remove_first(&mut self, tag: ObjectType) -> Option<C> {
        self.entries
            .iter()
            .position(|c| c.tag() == tag)
            .map(|idx| self.entries.remove(idx))
    }

    /// Remove the entry at `index`; no-op when out of range.
    pub fn remove(&mut self, index: usize) -> Option<C> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Entries in list order. This is the only traversal writers use.
    pub fn iter(&self) -> impl Iterator<Item = &C> {
        self.entries.iter()
    }

    /// Entries in list order, mutable.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut C> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: TaggedChild> Default for ChildList<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C: TaggedChild> IntoIterator for &'a ChildList<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocOption, HeaderChild, RefList};

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut list: ChildList<HeaderChild> = ChildList::new();
        list.push(HeaderChild::DocOption(DocOption::default()));
        list.push(HeaderChild::RefList(RefList::new()));

        let tags: Vec<_> = list.iter().map(|c| c.tag()).collect();
        assert_eq!(tags, vec![ObjectType::DocOption, ObjectType::RefList]);
    }

    #[test]
    fn test_set_first_preserves_position() {
        let mut list: ChildList<HeaderChild> = ChildList::new();
        list.push(HeaderChild::DocOption(DocOption::default()));
        list.push(HeaderChild::RefList(RefList::new()));
        list.push(HeaderChild::MetaTag("m".into()));

        // Replacing the middle entry must not move it
        let old = list.set_first(HeaderChild::RefList(RefList::new()));
        assert!(old.is_some());
        let tags: Vec<_> = list.iter().map(|c| c.tag()).collect();
        assert_eq!(
            tags,
            vec![ObjectType::DocOption, ObjectType::RefList, ObjectType::MetaTag]
        );
    }

    #[test]
    fn test_set_first_appends_when_absent() {
        let mut list: ChildList<HeaderChild> = ChildList::new();
        assert!(list.set_first(HeaderChild::RefList(RefList::new())).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_first_is_noop_when_absent() {
        let mut list: ChildList<HeaderChild> = ChildList::new();
        list.push(HeaderChild::MetaTag("m".into()));
        assert!(list.remove_first(ObjectType::RefList).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_duplicate_tags_are_kept() {
        let mut list: ChildList<HeaderChild> = ChildList::new();
        list.push(HeaderChild::RefList(RefList::new()));
        list.push(HeaderChild::RefList(RefList::new()));
        assert_eq!(list.len(), 2);
        assert!(list.contains(ObjectType::RefList));
    }

    #[test]
    fn test_remove_by_index() {
        let mut list: ChildList<HeaderChild> = ChildList::new();
        list.push(HeaderChild::MetaTag("a".into()));
        list.push(HeaderChild::MetaTag("b".into()));
        assert!(list.remove(5).is_none());
        assert!(list.remove(0).is_some());
        assert_eq!(list.len(), 1);
    }
}
