//! Per-type element writers and the dispatch protocol
//!
//! Each node type has one writer. A writer emits its element's own
//! attributes, recurses into fixed-slot children directly, and drains the
//! node's ordered child list through the registry, so heterogeneous
//! children come out in source document order.

mod compatible_document;
mod doc_option;
mod forbidden_word_list;
mod header;
mod ref_list;
mod registry;
mod track_change_config;

pub use registry::WriterRegistry;

use crate::error::{Error, Result};
use crate::model::{HeaderXml, ObjectRef, ObjectType};
use crate::xml::XmlStreamBuilder;

/// Serialization handler for one node type.
pub trait ElementWriter {
    /// The type tag this writer handles.
    fn sort(&self) -> ObjectType;

    /// Emit `obj` (which must carry this writer's tag) and its subtree.
    fn write(&mut self, obj: ObjectRef<'_>, ctx: &mut WriteContext<'_>) -> Result<()>;
}

/// Shared collaborators of one tree walk: the token sink and the pool.
pub struct WriteContext<'a> {
    xsb: &'a mut XmlStreamBuilder,
    registry: &'a mut WriterRegistry,
}

impl<'a> WriteContext<'a> {
    pub fn new(xsb: &'a mut XmlStreamBuilder, registry: &'a mut WriterRegistry) -> Self {
        Self { xsb, registry }
    }

    /// The shared token sink.
    pub fn xsb(&mut self) -> &mut XmlStreamBuilder {
        self.xsb
    }

    /// Dispatch one child node: check its writer out of the pool, write
    /// the subtree, return the writer. The writer goes back to the pool on
    /// failure too.
    pub fn write_child(&mut self, obj: ObjectRef<'_>) -> Result<()> {
        let mut writer = self.registry.checkout(obj.tag())?;
        let result = writer.write(obj, self);
        self.registry.release(writer);
        result
    }

    /// Emit an element whose entire content is character data.
    pub fn text_only_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.xsb.open_element(name)?;
        self.xsb.text(text)?;
        self.xsb.close_element()
    }
}

/// Write a header tree through caller-provided collaborators, so one
/// builder/registry pair can serve several top-level writes on a thread.
pub fn write_header_xml(
    header: &HeaderXml,
    xsb: &mut XmlStreamBuilder,
    registry: &mut WriterRegistry,
) -> Result<()> {
    let mut ctx = WriteContext::new(xsb, registry);
    ctx.write_child(ObjectRef::Head(header))
}

/// Serialize a header tree to an XML string with fresh collaborators.
pub fn serialize_header_xml(header: &HeaderXml) -> Result<String> {
    let mut xsb = XmlStreamBuilder::new();
    let mut registry = WriterRegistry::new();
    write_header_xml(header, &mut xsb, &mut registry)?;
    xsb.into_xml()
}

pub(crate) fn type_mismatch(expected: ObjectType, found: ObjectType) -> Error {
    Error::TypeMismatch { expected, found }
}
