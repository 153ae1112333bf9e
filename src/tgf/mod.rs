/// TGF dependency graph core
///
/// `domain` holds the value types and the parsed document with its queries;
/// `services` turns raw TGF text into that document.
pub mod domain;
pub mod services;
