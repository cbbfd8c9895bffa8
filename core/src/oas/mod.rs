#![deny(missing_docs)]

//! # OpenAPI Document Module
//!
//! - **models**: Ordered, default-tolerant view of the document.
//! - **document**: Reading and parsing (JSON or YAML).
//! - **lenient**: Serde helpers for scalar text fields.

pub mod document;
pub mod lenient;
pub mod models;

pub use document::{load_api_document, parse_api_document, InputFormat};
pub use models::{
    ApiDocument, Components, ExampleObject, Info, MediaType, Operation, PathItem, Paths,
    PropertySchema, RequestBody, Response, Schema, SecurityScheme,
};
