//! Writer for hh:docOption

use crate::error::Result;
use crate::model::{ObjectRef, ObjectType};
use crate::writer::{type_mismatch, ElementWriter, WriteContext};
use crate::xml::names::{attribute, element};

/// Writer for hh:docOption with its single fixed-slot child, hh:linkinfo.
pub struct DocOptionWriter;

impl DocOptionWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ElementWriter for DocOptionWriter {
    fn sort(&self) -> ObjectType {
        ObjectType::DocOption
    }

    fn write(&mut self, obj: ObjectRef<'_>, ctx: &mut WriteContext<'_>) -> Result<()> {
        let option = match obj {
            ObjectRef::DocOption(o) => o,
            other => return Err(type_mismatch(ObjectType::DocOption, other.tag())),
        };

        let xsb = ctx.xsb();
        xsb.open_element(element::HH_DOC_OPTION)?;
        if let Some(link_info) = option.link_info() {
            xsb.open_element(element::HH_LINK_INFO)?;
            xsb.attribute(attribute::PATH, link_info.path.as_str())?;
            xsb.attribute(attribute::PAGE_INHERIT, link_info.page_inherit)?;
            xsb.attribute(attribute::FOOTNOTE_INHERIT, link_info.footnote_inherit)?;
            xsb.close_element()?;
        }
        xsb.close_element()
    }
}
