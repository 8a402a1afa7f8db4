pub mod ast;
pub mod config;
pub mod defaults;
pub mod imports;
pub mod security;
pub mod support_files;
pub mod transforms;
pub mod type_resolver;
