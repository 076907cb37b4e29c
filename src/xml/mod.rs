//! XML plumbing: wire names, namespaces, canonical values, token stream

pub mod names;
pub mod namespace;
mod stream;
mod value;

pub use namespace::{header_namespaces, NamespaceBinding};
pub use stream::XmlStreamBuilder;
pub use value::AttrValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_namespace_table() {
        let bindings = header_namespaces();
        assert_eq!(bindings.len(), 15);
        assert_eq!(bindings[0].prefix, "ha");
        assert!(bindings.iter().any(|b| b.prefix == "hh" && b.uri.contains("head")));
    }
}
