//! Append-only XML token sink shared by all element writers

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};
use crate::xml::namespace::NamespaceBinding;
use crate::xml::value::AttrValue;

/// Append-only XML token sink.
///
/// Tracks open-element nesting for well-formedness but knows nothing about
/// document semantics. The open tag of an element is held back until the
/// first child token (or the close call) arrives, so that childless
/// elements are emitted self-closed and attributes can only be added while
/// the element is still in its attribute phase.
pub struct XmlStreamBuilder {
    writer: Writer<Vec<u8>>,
    /// Open tag not yet committed to the output, with its name.
    pending: Option<(String, BytesStart<'static>)>,
    /// Names of elements whose open tag has been written.
    open: Vec<String>,
}

impl XmlStreamBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
            pending: None,
            open: Vec::new(),
        }
    }

    /// Reset to an empty document and emit the XML declaration.
    ///
    /// Used by root writers to start a new top-level write on a reused
    /// builder.
    pub fn clear(&mut self) -> Result<()> {
        self.writer = Writer::new(Vec::new());
        self.pending = None;
        self.open.clear();
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(())
    }

    /// Open an element with the given (prefixed) name.
    pub fn open_element(&mut self, name: &str) -> Result<()> {
        self.commit_pending()?;
        self.pending = Some((name.to_owned(), BytesStart::new(name.to_owned())));
        Ok(())
    }

    /// Add an attribute to the element opened by the last `open_element`.
    ///
    /// Only legal while that element is still in its attribute phase, i.e.
    /// before any text, child element, or close.
    pub fn attribute(&mut self, name: &str, value: impl AttrValue) -> Result<()> {
        let encoded = value.canonical()?;
        match &mut self.pending {
            Some((_, start)) => {
                start.push_attribute((name, encoded.as_ref()));
                Ok(())
            }
            None => Err(Error::Structural(format!(
                "attribute '{name}' emitted outside of an element start tag"
            ))),
        }
    }

    /// Declare a namespace on the element currently in its attribute phase.
    pub fn namespace(&mut self, binding: NamespaceBinding) -> Result<()> {
        match &mut self.pending {
            Some((_, start)) => {
                let key = format!("xmlns:{}", binding.prefix);
                start.push_attribute((key.as_str(), binding.uri));
                Ok(())
            }
            None => Err(Error::Structural(format!(
                "namespace 'xmlns:{}' emitted outside of an element start tag",
                binding.prefix
            ))),
        }
    }

    /// Emit character content inside the innermost open element.
    ///
    /// Only `&`, `<`, and `>` are escaped; quotes are character data and
    /// pass through byte-for-byte.
    pub fn text(&mut self, content: &str) -> Result<()> {
        self.commit_pending()?;
        if self.open.is_empty() {
            return Err(Error::Structural(
                "text emitted outside of an open element".into(),
            ));
        }
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(content))))?;
        Ok(())
    }

    /// Close the innermost still-open element.
    ///
    /// An element closed while still in its attribute phase is emitted
    /// self-closed.
    pub fn close_element(&mut self) -> Result<()> {
        if let Some((_, start)) = self.pending.take() {
            self.writer.write_event(Event::Empty(start))?;
            return Ok(());
        }
        match self.open.pop() {
            Some(name) => {
                self.writer.write_event(Event::End(BytesEnd::new(name)))?;
                Ok(())
            }
            None => Err(Error::Structural("no open element to close".into())),
        }
    }

    /// Current element nesting depth (committed opens plus a pending one).
    pub fn depth(&self) -> usize {
        self.open.len() + usize::from(self.pending.is_some())
    }

    /// Finish the document and return the accumulated XML.
    pub fn into_xml(self) -> Result<String> {
        if self.pending.is_some() || !self.open.is_empty() {
            return Err(Error::Structural(format!(
                "{} element(s) left open at end of document",
                self.depth()
            )));
        }
        let bytes = self.writer.into_inner();
        Ok(String::from_utf8(bytes)?)
    }

    /// Write the held-back open tag, if any, as a normal start tag.
    fn commit_pending(&mut self) -> Result<()> {
        if let Some((name, start)) = self.pending.take() {
            self.writer.write_event(Event::Start(start))?;
            self.open.push(name);
        }
        Ok(())
    }
}

impl Default for XmlStreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_childless_element_self_closes() {
        let mut xsb = XmlStreamBuilder::new();
        xsb.open_element("hh:beginNum").unwrap();
        xsb.attribute("page", 1u32).unwrap();
        xsb.close_element().unwrap();

        assert_eq!(xsb.into_xml().unwrap(), r#"<hh:beginNum page="1"/>"#);
    }

    #[test]
    fn test_nested_elements() {
        let mut xsb = XmlStreamBuilder::new();
        xsb.open_element("hh:docOption").unwrap();
        xsb.open_element("hh:linkinfo").unwrap();
        xsb.attribute("path", "a.hwpx").unwrap();
        xsb.close_element().unwrap();
        xsb.close_element().unwrap();

        assert_eq!(
            xsb.into_xml().unwrap(),
            r#"<hh:docOption><hh:linkinfo path="a.hwpx"/></hh:docOption>"#
        );
    }

    #[test]
    fn test_text_content_is_escaped() {
        let mut xsb = XmlStreamBuilder::new();
        xsb.open_element("hh:metaTag").unwrap();
        xsb.text("a < b & c").unwrap();
        xsb.close_element().unwrap();

        assert_eq!(
            xsb.into_xml().unwrap(),
            "<hh:metaTag>a &lt; b &amp; c</hh:metaTag>"
        );
    }

    #[test]
    fn test_text_keeps_quotes_unescaped() {
        let mut xsb = XmlStreamBuilder::new();
        xsb.open_element("hh:metaTag").unwrap();
        xsb.text(r#"{"phase":"review"}"#).unwrap();
        xsb.close_element().unwrap();

        assert_eq!(
            xsb.into_xml().unwrap(),
            r#"<hh:metaTag>{"phase":"review"}</hh:metaTag>"#
        );
    }

    #[test]
    fn test_attribute_after_child_is_structural_error() {
        let mut xsb = XmlStreamBuilder::new();
        xsb.open_element("hh:head").unwrap();
        xsb.open_element("hh:beginNum").unwrap();
        xsb.close_element().unwrap();
        // hh:head is no longer in its attribute phase
        let err = xsb.attribute("version", "1.31").unwrap_err();
        assert!(matches!(err, Error::Structural(_)));
    }

    #[test]
    fn test_close_without_open_is_structural_error() {
        let mut xsb = XmlStreamBuilder::new();
        let err = xsb.close_element().unwrap_err();
        assert!(matches!(err, Error::Structural(_)));
    }

    #[test]
    fn test_unclosed_element_rejected_at_finish() {
        let mut xsb = XmlStreamBuilder::new();
        xsb.open_element("hh:head").unwrap();
        xsb.open_element("hh:refList").unwrap();
        xsb.close_element().unwrap();
        assert!(matches!(xsb.into_xml(), Err(Error::Structural(_))));
    }

    #[test]
    fn test_clear_starts_a_fresh_document() {
        let mut xsb = XmlStreamBuilder::new();
        xsb.open_element("hh:head").unwrap();
        xsb.clear().unwrap();
        xsb.open_element("hh:head").unwrap();
        xsb.close_element().unwrap();

        assert_eq!(
            xsb.into_xml().unwrap(),
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><hh:head/>"#
        );
    }

    #[test]
    fn test_namespace_declaration() {
        use crate::xml::namespace;

        let mut xsb = XmlStreamBuilder::new();
        xsb.open_element("hh:head").unwrap();
        xsb.namespace(NamespaceBinding::new("hh", namespace::HH))
            .unwrap();
        xsb.close_element().unwrap();

        assert_eq!(
            xsb.into_xml().unwrap(),
            r#"<hh:head xmlns:hh="http://www.hancom.co.kr/hwpml/2011/head"/>"#
        );
    }
}
