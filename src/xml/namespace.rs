//! XML namespaces used in HWPX

/// Application info namespace
pub const HA: &str = "http://www.hancom.co.kr/hwpml/2011/app";
/// Paragraph namespace
pub const HP: &str = "http://www.hancom.co.kr/hwpml/2011/paragraph";
/// Paragraph namespace (2010 revision)
pub const HP10: &str = "http://www.hancom.co.kr/hwpml/2010/paragraph";
/// Section namespace
pub const HS: &str = "http://www.hancom.co.kr/hwpml/2011/section";
/// Core namespace
pub const HC: &str = "http://www.hancom.co.kr/hwpml/2011/core";
/// Head (document header) namespace
pub const HH: &str = "http://www.hancom.co.kr/hwpml/2011/head";
/// History namespace
pub const HHS: &str = "http://www.hancom.co.kr/hwpml/2011/history";
/// Master page namespace
pub const HM: &str = "http://www.hancom.co.kr/hwpml/2011/master-page";
/// Package file namespace
pub const HPF: &str = "http://www.hancom.co.kr/schema/2011/hpf";
/// Dublin Core namespace
pub const DC: &str = "http://purl.org/dc/elements/1.1/";
/// Open Packaging Format namespace
pub const OPF: &str = "http://www.idpf.org/2007/opf/";
/// OOXML chart namespace
pub const OOXMLCHART: &str = "http://www.hancom.co.kr/hwpml/2016/ooxmlchart";
/// HWP unit character namespace
pub const HWPUNITCHAR: &str = "http://www.hancom.co.kr/hwpml/2016/HwpUnitChar";
/// EPUB namespace
pub const EPUB: &str = "http://www.idpf.org/2007/ops";
/// OpenDocument config namespace
pub const CONFIG: &str = "urn:oasis:names:tc:opendocument:xmlns:config:1.0";

/// One prefix→URI binding, declared on a document-part root element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamespaceBinding {
    /// Prefix without the leading "xmlns:"
    pub prefix: &'static str,
    /// Namespace URI
    pub uri: &'static str,
}

impl NamespaceBinding {
    pub const fn new(prefix: &'static str, uri: &'static str) -> Self {
        Self { prefix, uri }
    }
}

/// Namespace declarations for header.xml, in declaration order.
///
/// XML namespace scoping is lexical, so these are declared once on the
/// `hh:head` root and never re-declared on descendants.
pub fn header_namespaces() -> &'static [NamespaceBinding] {
    const BINDINGS: &[NamespaceBinding] = &[
        NamespaceBinding::new("ha", HA),
        NamespaceBinding::new("hp", HP),
        NamespaceBinding::new("hp10", HP10),
        NamespaceBinding::new("hs", HS),
        NamespaceBinding::new("hc", HC),
        NamespaceBinding::new("hh", HH),
        NamespaceBinding::new("hhs", HHS),
        NamespaceBinding::new("hm", HM),
        NamespaceBinding::new("hpf", HPF),
        NamespaceBinding::new("dc", DC),
        NamespaceBinding::new("opf", OPF),
        NamespaceBinding::new("ooxmlchart", OOXMLCHART),
        NamespaceBinding::new("hwpunitchar", HWPUNITCHAR),
        NamespaceBinding::new("epub", EPUB),
        NamespaceBinding::new("config", CONFIG),
    ];
    BINDINGS
}
