//! Writers for hh:refList and its item groups

use crate::error::Result;
use crate::model::{ObjectRef, ObjectType};
use crate::writer::{type_mismatch, ElementWriter, WriteContext};
use crate::xml::names::{attribute, element};

/// Writer for hh:refList: pure dispatch over the ordered child list.
pub struct RefListWriter;

impl RefListWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ElementWriter for RefListWriter {
    fn sort(&self) -> ObjectType {
        ObjectType::RefList
    }

    fn write(&mut self, obj: ObjectRef<'_>, ctx: &mut WriteContext<'_>) -> Result<()> {
        let ref_list = match obj {
            ObjectRef::RefList(r) => r,
            other => return Err(type_mismatch(ObjectType::RefList, other.tag())),
        };

        ctx.xsb().open_element(element::HH_REF_LIST)?;
        for child in ref_list.children() {
            ctx.write_child(child.as_object_ref())?;
        }
        ctx.xsb().close_element()
    }
}

/// Shared writer for the itemCnt-carrying definition groups
/// (hh:fontfaces, hh:borderFills, hh:charProperties). One instance per
/// tag, selected by the registry.
pub struct ItemGroupWriter {
    sort: ObjectType,
}

impl ItemGroupWriter {
    pub fn new(sort: ObjectType) -> Self {
        debug_assert!(matches!(
            sort,
            ObjectType::Fontfaces | ObjectType::BorderFills | ObjectType::CharProperties
        ));
        Self { sort }
    }

    fn element_name(&self) -> &'static str {
        match self.sort {
            ObjectType::BorderFills => element::HH_BORDER_FILLS,
            ObjectType::CharProperties => element::HH_CHAR_PROPERTIES,
            _ => element::HH_FONTFACES,
        }
    }
}

impl ElementWriter for ItemGroupWriter {
    fn sort(&self) -> ObjectType {
        self.sort
    }

    fn write(&mut self, obj: ObjectRef<'_>, ctx: &mut WriteContext<'_>) -> Result<()> {
        let item_cnt = match (self.sort, obj) {
            (ObjectType::Fontfaces, ObjectRef::Fontfaces(n)) => n.item_cnt,
            (ObjectType::BorderFills, ObjectRef::BorderFills(n)) => n.item_cnt,
            (ObjectType::CharProperties, ObjectRef::CharProperties(n)) => n.item_cnt,
            (expected, other) => return Err(type_mismatch(expected, other.tag())),
        };

        let xsb = ctx.xsb();
        xsb.open_element(self.element_name())?;
        if let Some(cnt) = item_cnt {
            xsb.attribute(attribute::ITEM_CNT, cnt)?;
        }
        xsb.close_element()
    }
}
