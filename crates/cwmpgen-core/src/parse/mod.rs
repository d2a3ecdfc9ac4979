pub mod document;
pub mod object;
pub mod parameter;

pub use document::{Document, RawModel};
pub use object::RawObject;
pub use parameter::{RawParameter, Syntax};

use crate::error::ParseError;

/// Deserialize a data model document from its XML text.
///
/// This only performs structural deserialization; path composition, type
/// resolution, and multiplicity flags happen in [`crate::transform`].
pub fn from_xml(input: &str) -> Result<Document, ParseError> {
    let document: Document = quick_xml::de::from_str(input)?;
    Ok(document)
}

/// Deserialize a data model document from raw bytes, checking the encoding.
pub fn from_bytes(input: &[u8]) -> Result<Document, ParseError> {
    let text = String::from_utf8(input.to_vec())?;
    from_xml(&text)
}
