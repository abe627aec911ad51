//! # nmech-render — Document Rendering
//!
//! Renders NeuroMech and Mujoco documents to JSON, XML and YAML and writes
//! them to files named after the document identifier:
//!
//! ```text
//! TestMujoco.json   TestMujoco.xml   TestMujoco.yaml
//! ```
//!
//! JSON and YAML come straight from `serde_json` / `serde_yaml`. XML is
//! written with `quick-xml`, using the record descriptors to decide which
//! fields become attributes and how child elements are named.
//!
//! JSON and YAML documents can be loaded back with [`load_document`];
//! loading goes through descriptor-checked construction, so an invalid file
//! never yields a partially built document. XML loading is not provided.

pub mod error;
pub mod output;
pub mod text;
pub mod xml;

pub use error::RenderError;
pub use output::{load_document, output_path, render, write_document, RenderOptions};
pub use text::{to_json, to_yaml};
pub use xml::to_xml;
