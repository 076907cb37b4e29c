//! Writer for hh:forbiddenWordList

use crate::error::Result;
use crate::model::{ObjectRef, ObjectType};
use crate::writer::{type_mismatch, ElementWriter, WriteContext};
use crate::xml::names::{attribute, element};

/// Writer for hh:forbiddenWordList; each word is a text-only child.
pub struct ForbiddenWordListWriter;

impl ForbiddenWordListWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ElementWriter for ForbiddenWordListWriter {
    fn sort(&self) -> ObjectType {
        ObjectType::ForbiddenWordList
    }

    fn write(&mut self, obj: ObjectRef<'_>, ctx: &mut WriteContext<'_>) -> Result<()> {
        let list = match obj {
            ObjectRef::ForbiddenWordList(l) => l,
            other => return Err(type_mismatch(ObjectType::ForbiddenWordList, other.tag())),
        };

        ctx.xsb().open_element(element::HH_FORBIDDEN_WORD_LIST)?;
        ctx.xsb()
            .attribute(attribute::ITEM_CNT, list.len() as u32)?;
        for word in list.words() {
            ctx.text_only_element(element::HH_FORBIDDEN_WORD, word)?;
        }
        ctx.xsb().close_element()
    }
}
