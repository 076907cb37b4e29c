//! Writer for the header root (hh:head)

use crate::error::Result;
use crate::model::{BeginNum, HeaderChild, ObjectRef, ObjectType};
use crate::writer::{type_mismatch, ElementWriter, WriteContext};
use crate::xml::names::{attribute, element};
use crate::xml::{header_namespaces, XmlStreamBuilder};

/// Root writer: starts a fresh document, declares the header namespaces,
/// then replays the child list in source order.
pub struct HeaderWriter;

impl HeaderWriter {
    pub fn new() -> Self {
        Self
    }

    /// hh:beginNum is a leaf written inline, the same way on both the
    /// fixed-slot path and the list path.
    fn begin_num(xsb: &mut XmlStreamBuilder, begin_num: &BeginNum) -> Result<()> {
        xsb.open_element(element::HH_BEGIN_NUM)?;
        xsb.attribute(attribute::PAGE, begin_num.page)?;
        xsb.attribute(attribute::FOOTNOTE, begin_num.footnote)?;
        xsb.attribute(attribute::ENDNOTE, begin_num.endnote)?;
        xsb.attribute(attribute::PIC, begin_num.pic)?;
        xsb.attribute(attribute::TBL, begin_num.tbl)?;
        xsb.attribute(attribute::EQUATION, begin_num.equation)?;
        xsb.close_element()
    }
}

impl ElementWriter for HeaderWriter {
    fn sort(&self) -> ObjectType {
        ObjectType::Head
    }

    fn write(&mut self, obj: ObjectRef<'_>, ctx: &mut WriteContext<'_>) -> Result<()> {
        let header = match obj {
            ObjectRef::Head(h) => h,
            other => return Err(type_mismatch(ObjectType::Head, other.tag())),
        };

        let xsb = ctx.xsb();
        xsb.clear()?;
        xsb.open_element(element::HH_HEAD)?;
        for binding in header_namespaces() {
            xsb.namespace(*binding)?;
        }
        xsb.attribute(attribute::VERSION, header.version())?;
        xsb.attribute(attribute::SEC_CNT, header.sec_cnt())?;

        // The list is authoritative for emission order. The fixed slot is
        // only written when no list entry denotes the same child, so a
        // doubly-registered hh:beginNum comes out exactly once.
        let listed_begin_num = header.children().contains(ObjectType::BeginNum);
        if let Err(violation) = header.check_consistency() {
            // The tree is still written; the list entry wins below.
            log::warn!("{violation}; emitting the list entry only");
        }
        if let Some(begin_num) = header.begin_num_slot() {
            if !listed_begin_num {
                Self::begin_num(ctx.xsb(), begin_num)?;
            }
        }

        for child in header.children() {
            match child {
                HeaderChild::BeginNum(begin_num) => Self::begin_num(ctx.xsb(), begin_num)?,
                HeaderChild::MetaTag(text) => {
                    ctx.text_only_element(element::HH_META_TAG, text)?
                }
                other => ctx.write_child(other.as_object_ref())?,
            }
        }

        ctx.xsb().close_element()
    }
}

impl Default for HeaderWriter {
    fn default() -> Self {
        Self::new()
    }
}
