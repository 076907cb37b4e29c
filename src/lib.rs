//! # linch-hwpx-rs
//!
//! An HWPX header XML writing library for Rust.
//!
//! ## Features
//!
//! - Serialize the header part (`Contents/header.xml`) of an HWPX package
//! - Round-trip order preservation (heterogeneous children are replayed in
//!   source document order, not in a fixed schema order)
//! - Typed accessors over the same owned nodes the order list traverses
//!
//! ## Quick Start
//!
//! ```rust
//! use linch_hwpx_rs::model::{BeginNum, HeaderXml, RefList};
//! use linch_hwpx_rs::writer::serialize_header_xml;
//!
//! let mut header = HeaderXml::new("1.31", 1);
//! header.set_begin_num(Some(BeginNum::default()));
//! header.set_ref_list(Some(RefList::new()));
//!
//! let xml = serialize_header_xml(&header).unwrap();
//! assert!(xml.contains("hh:head"));
//! ```

pub mod error;
pub mod model;
pub mod writer;
pub mod xml;

pub use error::{Error, Result};
pub use model::{HeaderXml, ObjectType};
pub use writer::serialize_header_xml;
pub use xml::XmlStreamBuilder;
