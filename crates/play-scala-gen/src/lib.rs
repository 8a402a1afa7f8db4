//! Configuration engine for generating Scala Play-WS client libraries.
//!
//! Maps abstract schema types to Scala type expressions, normalizes raw
//! schema names into valid Scala identifiers, synthesizes default values,
//! filters security-scheme metadata, deduplicates same-package model
//! imports, and plans the fixed support files emitted with every client.
//! Parsing the API description, rendering templates, and writing files are
//! the caller's responsibility.

pub mod generator;
pub mod reserved;
