//! Writer for hh:compatibleDocument

use crate::error::Result;
use crate::model::{ObjectRef, ObjectType};
use crate::writer::{type_mismatch, ElementWriter, WriteContext};
use crate::xml::names::{attribute, element};

/// Writer for hh:compatibleDocument and its layout compatibility switches.
pub struct CompatibleDocumentWriter;

impl CompatibleDocumentWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ElementWriter for CompatibleDocumentWriter {
    fn sort(&self) -> ObjectType {
        ObjectType::CompatibleDocument
    }

    fn write(&mut self, obj: ObjectRef<'_>, ctx: &mut WriteContext<'_>) -> Result<()> {
        let doc = match obj {
            ObjectRef::CompatibleDocument(d) => d,
            other => return Err(type_mismatch(ObjectType::CompatibleDocument, other.tag())),
        };

        let xsb = ctx.xsb();
        xsb.open_element(element::HH_COMPATIBLE_DOCUMENT)?;
        if let Some(target) = doc.target_program() {
            xsb.attribute(attribute::TARGET_PROGRAM, target.as_token())?;
        }
        if let Some(layout) = doc.layout_compatibility() {
            xsb.open_element(element::HH_LAYOUT_COMPATIBILITY)?;
            for flag in &layout.flags {
                xsb.open_element(flag.wire_name())?;
                xsb.close_element()?;
            }
            xsb.close_element()?;
        }
        xsb.close_element()
    }
}
