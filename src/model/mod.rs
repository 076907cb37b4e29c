//! Document model for the header part
//!
//! Every concrete node type corresponds to one XML element. Nodes with
//! heterogeneous optional children own them through a [`ChildList`], which
//! records source document order; typed accessors are views over the same
//! owned entries, never copies.

mod child_list;
mod compatible_document;
mod doc_option;
mod forbidden_word_list;
mod header;
mod ref_list;
mod track_change_config;

pub use child_list::{ChildList, TaggedChild};
pub use compatible_document::{CompatibleDocument, LayoutCompatibility, LayoutFlag, TargetProgram};
pub use doc_option::{DocOption, LinkInfo};
pub use forbidden_word_list::ForbiddenWordList;
pub use header::{BeginNum, HeaderChild, HeaderXml};
pub use ref_list::{BorderFills, CharProperties, Fontfaces, RefChild, RefList};
pub use track_change_config::TrackChangeConfig;

/// Type tag discriminating which writer applies to a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Head,
    BeginNum,
    RefList,
    Fontfaces,
    BorderFills,
    CharProperties,
    ForbiddenWordList,
    CompatibleDocument,
    DocOption,
    MetaTag,
    TrackChangeConfig,
}

/// Borrowed reference to any node, tagged for dispatch.
#[derive(Clone, Copy, Debug)]
pub enum ObjectRef<'a> {
    Head(&'a HeaderXml),
    BeginNum(&'a BeginNum),
    RefList(&'a RefList),
    Fontfaces(&'a Fontfaces),
    BorderFills(&'a BorderFills),
    CharProperties(&'a CharProperties),
    ForbiddenWordList(&'a ForbiddenWordList),
    CompatibleDocument(&'a CompatibleDocument),
    DocOption(&'a DocOption),
    MetaTag(&'a str),
    TrackChangeConfig(&'a TrackChangeConfig),
}

impl ObjectRef<'_> {
    /// The type tag of the referenced node.
    pub fn tag(&self) -> ObjectType {
        match self {
            ObjectRef::Head(_) => ObjectType::Head,
            ObjectRef::BeginNum(_) => ObjectType::BeginNum,
            ObjectRef::RefList(_) => ObjectType::RefList,
            ObjectRef::Fontfaces(_) => ObjectType::Fontfaces,
            ObjectRef::BorderFills(_) => ObjectType::BorderFills,
            ObjectRef::CharProperties(_) => ObjectType::CharProperties,
            ObjectRef::ForbiddenWordList(_) => ObjectType::ForbiddenWordList,
            ObjectRef::CompatibleDocument(_) => ObjectType::CompatibleDocument,
            ObjectRef::DocOption(_) => ObjectType::DocOption,
            ObjectRef::MetaTag(_) => ObjectType::MetaTag,
            ObjectRef::TrackChangeConfig(_) => ObjectType::TrackChangeConfig,
        }
    }
}
