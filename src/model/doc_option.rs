//! Document option block (hh:docOption)

/// Link info for linked documents (hh:linkinfo).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkInfo {
    /// Path of the linked document
    pub path: String,
    /// Inherit page numbering from the linked document
    pub page_inherit: bool,
    /// Inherit footnote numbering from the linked document
    pub footnote_inherit: bool,
}

/// Document option block (hh:docOption) with its single fixed-slot child.
#[derive(Clone, Debug, Default)]
pub struct DocOption {
    link_info: Option<LinkInfo>,
}

impl DocOption {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link_info(&self) -> Option<&LinkInfo> {
        self.link_info.as_ref()
    }

    pub fn link_info_mut(&mut self) -> Option<&mut LinkInfo> {
        self.link_info.as_mut()
    }

    pub fn set_link_info(&mut self, link_info: Option<LinkInfo>) {
        self.link_info = link_info;
    }
}
