//! Element and attribute wire names for the header part
//!
//! Every logical name has exactly one canonical wire name; all writers go
//! through these constants, so a format-version difference is a one-line
//! change here rather than a hunt through the writer population.

/// Element names (prefixed)
pub mod element {
    pub const HH_HEAD: &str = "hh:head";
    pub const HH_BEGIN_NUM: &str = "hh:beginNum";
    pub const HH_REF_LIST: &str = "hh:refList";
    pub const HH_FONTFACES: &str = "hh:fontfaces";
    pub const HH_BORDER_FILLS: &str = "hh:borderFills";
    pub const HH_CHAR_PROPERTIES: &str = "hh:charProperties";
    pub const HH_FORBIDDEN_WORD_LIST: &str = "hh:forbiddenWordList";
    pub const HH_FORBIDDEN_WORD: &str = "hh:forbiddenWord";
    pub const HH_COMPATIBLE_DOCUMENT: &str = "hh:compatibleDocument";
    pub const HH_LAYOUT_COMPATIBILITY: &str = "hh:layoutCompatibility";
    pub const HH_DOC_OPTION: &str = "hh:docOption";
    pub const HH_LINK_INFO: &str = "hh:linkinfo";
    pub const HH_META_TAG: &str = "hh:metaTag";
    pub const HH_TRACK_CHANGE_CONFIG: &str = "hh:trackchangeConfig";
}

/// Attribute names
pub mod attribute {
    pub const VERSION: &str = "version";
    pub const SEC_CNT: &str = "secCnt";
    pub const PAGE: &str = "page";
    pub const FOOTNOTE: &str = "footnote";
    pub const ENDNOTE: &str = "endnote";
    pub const PIC: &str = "pic";
    pub const TBL: &str = "tbl";
    pub const EQUATION: &str = "equation";
    pub const ITEM_CNT: &str = "itemCnt";
    pub const TARGET_PROGRAM: &str = "targetProgram";
    pub const PATH: &str = "path";
    pub const PAGE_INHERIT: &str = "pageInherit";
    pub const FOOTNOTE_INHERIT: &str = "footnoteInherit";
    pub const FLAGS: &str = "flags";
}
