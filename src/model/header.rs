//! Header root node (hh:head) and its numbering directive

use crate::error::{Error, Result};
use crate::model::{
    ChildList, CompatibleDocument, DocOption, ForbiddenWordList, ObjectRef, ObjectType, RefList,
    TaggedChild, TrackChangeConfig,
};

/// Begin-numbering directive (hh:beginNum).
///
/// Attribute order on the wire is fixed: page, footnote, endnote, pic,
/// tbl, equation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeginNum {
    pub page: u32,
    pub footnote: u32,
    pub endnote: u32,
    pub pic: u32,
    pub tbl: u32,
    pub equation: u32,
}

impl Default for BeginNum {
    fn default() -> Self {
        Self {
            page: 1,
            footnote: 1,
            endnote: 1,
            pic: 1,
            tbl: 1,
            equation: 1,
        }
    }
}

/// Heterogeneous child of hh:head, in its ordered child list.
#[derive(Clone, Debug)]
pub enum HeaderChild {
    BeginNum(BeginNum),
    RefList(RefList),
    ForbiddenWordList(ForbiddenWordList),
    CompatibleDocument(CompatibleDocument),
    DocOption(DocOption),
    /// Free-form metadata, text-only element
    MetaTag(String),
    TrackChangeConfig(TrackChangeConfig),
}

impl TaggedChild for HeaderChild {
    fn tag(&self) -> ObjectType {
        match self {
            HeaderChild::BeginNum(_) => ObjectType::BeginNum,
            HeaderChild::RefList(_) => ObjectType::RefList,
            HeaderChild::ForbiddenWordList(_) => ObjectType::ForbiddenWordList,
            HeaderChild::CompatibleDocument(_) => ObjectType::CompatibleDocument,
            HeaderChild::DocOption(_) => ObjectType::DocOption,
            HeaderChild::MetaTag(_) => ObjectType::MetaTag,
            HeaderChild::TrackChangeConfig(_) => ObjectType::TrackChangeConfig,
        }
    }
}

impl HeaderChild {
    /// Borrowed, tagged reference for writer dispatch.
    pub fn as_object_ref(&self) -> ObjectRef<'_> {
        match self {
            HeaderChild::BeginNum(n) => ObjectRef::BeginNum(n),
            HeaderChild::RefList(n) => ObjectRef::RefList(n),
            HeaderChild::ForbiddenWordList(n) => ObjectRef::ForbiddenWordList(n),
            HeaderChild::CompatibleDocument(n) => ObjectRef::CompatibleDocument(n),
            HeaderChild::DocOption(n) => ObjectRef::DocOption(n),
            HeaderChild::MetaTag(t) => ObjectRef::MetaTag(t.as_str()),
            HeaderChild::TrackChangeConfig(n) => ObjectRef::TrackChangeConfig(n),
        }
    }
}

/// The header part root (hh:head).
///
/// The ordered child list is the source of truth for emission order. The
/// typed accessors below look the child up in the list, so list and
/// accessor always denote the same owned node. `begin_num` additionally has
/// a fixed slot for trees built without order information (a fresh
/// document); when a BeginNum is present in the list, the list entry wins
/// and the slot is ignored on write.
#[derive(Clone, Debug, Default)]
pub struct HeaderXml {
    version: String,
    sec_cnt: u32,
    begin_num_slot: Option<BeginNum>,
    children: ChildList<HeaderChild>,
}

impl HeaderXml {
    /// Create a header with its two mandatory attributes.
    pub fn new(version: impl Into<String>, sec_cnt: u32) -> Self {
        Self {
            version: version.into(),
            sec_cnt,
            begin_num_slot: None,
            children: ChildList::new(),
        }
    }

    /// File format version string (e.g. "1.31").
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    /// Number of sections in the document.
    pub fn sec_cnt(&self) -> u32 {
        self.sec_cnt
    }

    pub fn set_sec_cnt(&mut self, sec_cnt: u32) {
        self.sec_cnt = sec_cnt;
    }

    /// Ordered child list; the writer drains this in order.
    pub fn children(&self) -> &ChildList<HeaderChild> {
        &self.children
    }

    /// Ordered child list, mutable, for structural edits.
    pub fn children_mut(&mut self) -> &mut ChildList<HeaderChild> {
        &mut self.children
    }

    /// Begin-numbering directive; prefers the list entry over the slot.
    pub fn begin_num(&self) -> Option<&BeginNum> {
        match self.children.first(ObjectType::BeginNum) {
            Some(HeaderChild::BeginNum(n)) => Some(n),
            _ => self.begin_num_slot.as_ref(),
        }
    }

    pub fn begin_num_mut(&mut self) -> Option<&mut BeginNum> {
        if self.children.contains(ObjectType::BeginNum) {
            match self.children.first_mut(ObjectType::BeginNum) {
                Some(HeaderChild::BeginNum(n)) => Some(n),
                _ => None,
            }
        } else {
            self.begin_num_slot.as_mut()
        }
    }

    /// Set or remove the begin-numbering directive, updating whichever
    /// storage currently holds it (list entry keeps its position). When
    /// the node moves to the list, the slot is emptied so a later direct
    /// list edit cannot fall back to a stale value.
    pub fn set_begin_num(&mut self, begin_num: Option<BeginNum>) {
        match begin_num {
            Some(n) if self.children.contains(ObjectType::BeginNum) => {
                self.children.set_first(HeaderChild::BeginNum(n));
                self.begin_num_slot = None;
            }
            Some(n) => self.begin_num_slot = Some(n),
            None => {
                self.children.remove_first(ObjectType::BeginNum);
                self.begin_num_slot = None;
            }
        }
    }

    /// Check the dual-representation invariant: a begin-numbering
    /// directive registered in both the fixed slot and the child list is
    /// a consistency violation. Writers tolerate it (the list wins), but
    /// callers that validate trees can surface it as an error.
    pub fn check_consistency(&self) -> Result<()> {
        if self.begin_num_slot.is_some() && self.children.contains(ObjectType::BeginNum) {
            return Err(Error::Consistency(
                "hh:beginNum registered in both the fixed slot and the child list".into(),
            ));
        }
        Ok(())
    }

    /// The fixed slot alone, ignoring the list. Writers use this together
    /// with the list to decide the emission path.
    pub fn begin_num_slot(&self) -> Option<&BeginNum> {
        self.begin_num_slot.as_ref()
    }

    /// First reference list, if present.
    pub fn ref_list(&self) -> Option<&RefList> {
        match self.children.first(ObjectType::RefList) {
            Some(HeaderChild::RefList(n)) => Some(n),
            _ => None,
        }
    }

    pub fn ref_list_mut(&mut self) -> Option<&mut RefList> {
        match self.children.first_mut(ObjectType::RefList) {
            Some(HeaderChild::RefList(n)) => Some(n),
            _ => None,
        }
    }

    pub fn set_ref_list(&mut self, ref_list: Option<RefList>) {
        match ref_list {
            Some(n) => {
                self.children.set_first(HeaderChild::RefList(n));
            }
            None => {
                self.children.remove_first(ObjectType::RefList);
            }
        }
    }

    pub fn forbidden_word_list(&self) -> Option<&ForbiddenWordList> {
        match self.children.first(ObjectType::ForbiddenWordList) {
            Some(HeaderChild::ForbiddenWordList(n)) => Some(n),
            _ => None,
        }
    }

    pub fn set_forbidden_word_list(&mut self, list: Option<ForbiddenWordList>) {
        match list {
            Some(n) => {
                self.children.set_first(HeaderChild::ForbiddenWordList(n));
            }
            None => {
                self.children.remove_first(ObjectType::ForbiddenWordList);
            }
        }
    }

    pub fn compatible_document(&self) -> Option<&CompatibleDocument> {
        match self.children.first(ObjectType::CompatibleDocument) {
            Some(HeaderChild::CompatibleDocument(n)) => Some(n),
            _ => None,
        }
    }

    pub fn set_compatible_document(&mut self, doc: Option<CompatibleDocument>) {
        match doc {
            Some(n) => {
                self.children.set_first(HeaderChild::CompatibleDocument(n));
            }
            None => {
                self.children.remove_first(ObjectType::CompatibleDocument);
            }
        }
    }

    pub fn doc_option(&self) -> Option<&DocOption> {
        match self.children.first(ObjectType::DocOption) {
            Some(HeaderChild::DocOption(n)) => Some(n),
            _ => None,
        }
    }

    pub fn set_doc_option(&mut self, option: Option<DocOption>) {
        match option {
            Some(n) => {
                self.children.set_first(HeaderChild::DocOption(n));
            }
            None => {
                self.children.remove_first(ObjectType::DocOption);
            }
        }
    }

    pub fn meta_tag(&self) -> Option<&str> {
        match self.children.first(ObjectType::MetaTag) {
            Some(HeaderChild::MetaTag(t)) => Some(t),
            _ => None,
        }
    }

    pub fn set_meta_tag(&mut self, meta_tag: Option<String>) {
        match meta_tag {
            Some(t) => {
                self.children.set_first(HeaderChild::MetaTag(t));
            }
            None => {
                self.children.remove_first(ObjectType::MetaTag);
            }
        }
    }

    pub fn track_change_config(&self) -> Option<&TrackChangeConfig> {
        match self.children.first(ObjectType::TrackChangeConfig) {
            Some(HeaderChild::TrackChangeConfig(n)) => Some(n),
            _ => None,
        }
    }

    pub fn set_track_change_config(&mut self, config: Option<TrackChangeConfig>) {
        match config {
            Some(n) => {
                self.children.set_first(HeaderChild::TrackChangeConfig(n));
            }
            None => {
                self.children.remove_first(ObjectType::TrackChangeConfig);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_views_the_list_entry() {
        let mut header = HeaderXml::new("1.31", 1);
        let mut rl = RefList::new();
        rl.set_fontfaces(Some(crate::model::Fontfaces { item_cnt: Some(2) }));
        header.children_mut().push(HeaderChild::RefList(rl));

        // The accessor must see the very node the list owns
        assert!(header.ref_list().is_some());
        header.ref_list_mut().unwrap().set_fontfaces(None);
        match header.children().first(ObjectType::RefList) {
            Some(HeaderChild::RefList(rl)) => assert!(rl.fontfaces().is_none()),
            _ => panic!("ref list entry lost"),
        }
    }

    #[test]
    fn test_setter_removal_keeps_other_entries() {
        let mut header = HeaderXml::new("1.31", 1);
        header.set_ref_list(Some(RefList::new()));
        header.set_doc_option(Some(DocOption::default()));
        header.set_ref_list(None);

        assert!(header.ref_list().is_none());
        assert!(header.doc_option().is_some());
        assert_eq!(header.children().len(), 1);
    }

    #[test]
    fn test_begin_num_prefers_list_over_slot() {
        let mut header = HeaderXml::new("1.31", 1);
        header.set_begin_num(Some(BeginNum::default()));
        assert!(header.begin_num_slot().is_some());

        let listed = BeginNum {
            page: 7,
            ..BeginNum::default()
        };
        header.children_mut().push(HeaderChild::BeginNum(listed));
        assert_eq!(header.begin_num().unwrap().page, 7);

        // The setter now routes to the list entry, keeping one storage live
        header.set_begin_num(Some(BeginNum {
            page: 9,
            ..BeginNum::default()
        }));
        assert_eq!(header.begin_num().unwrap().page, 9);
        assert_eq!(header.children().first(ObjectType::BeginNum).map(|c| c.tag()),
            Some(ObjectType::BeginNum));
    }

    #[test]
    fn test_list_routed_setter_empties_the_slot() {
        let mut header = HeaderXml::new("1.31", 1);
        header.set_begin_num(Some(BeginNum::default()));
        header.children_mut().push(HeaderChild::BeginNum(BeginNum {
            page: 5,
            ..BeginNum::default()
        }));

        // Setter routes to the list entry; the slot must not keep the old
        // value around
        header.set_begin_num(Some(BeginNum {
            page: 9,
            ..BeginNum::default()
        }));
        assert!(header.begin_num_slot().is_none());

        // A direct list edit must therefore fully remove the directive
        header.children_mut().remove_first(ObjectType::BeginNum);
        assert!(header.begin_num().is_none());
    }

    #[test]
    fn test_check_consistency_flags_double_registration() {
        let mut header = HeaderXml::new("1.31", 1);
        header.set_begin_num(Some(BeginNum::default()));
        assert!(header.check_consistency().is_ok());

        header
            .children_mut()
            .push(HeaderChild::BeginNum(BeginNum::default()));
        assert!(matches!(
            header.check_consistency(),
            Err(Error::Consistency(_))
        ));
    }

    #[test]
    fn test_set_begin_num_none_clears_both_paths() {
        let mut header = HeaderXml::new("1.31", 1);
        header.set_begin_num(Some(BeginNum::default()));
        header
            .children_mut()
            .push(HeaderChild::BeginNum(BeginNum::default()));
        header.set_begin_num(None);
        assert!(header.begin_num().is_none());
        assert!(!header.children().contains(ObjectType::BeginNum));
    }
}
