//! Parse a `replies_raw` file and generate the numeric reply declarations.

use serde::Serialize;

pub mod enumeration;
pub mod source;
pub mod table;

/// A numeric reply declared in the source file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub code: i32,
    pub mnemonic: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Reply {
    pub fn new(code: i32, mnemonic: impl Into<String>) -> Self {
        Reply {
            code,
            mnemonic: mnemonic.into(),
            example: None,
            description: None,
        }
    }
}
