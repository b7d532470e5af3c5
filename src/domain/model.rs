use serde::{Deserialize, Serialize};
use std::fmt;

/// A single crowd-submitted definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub author: String,
    pub current_vote: String,
    pub defid: u64,
    pub definition: String,
    pub example: String,
    pub permalink: String,
    pub thumbs_down: u64,
    pub thumbs_up: u64,
    pub word: String,
}

/// The full payload of a define/random API call.
///
/// Fields the server omits decode to their empty values rather than
/// failing the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionResponse {
    #[serde(default)]
    pub list: Vec<Definition>,
    #[serde(default)]
    pub result_type: String,
    #[serde(default)]
    pub sounds: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DefinitionResponse {
    /// The top-ranked entry, if the server returned any.
    pub fn into_top(self) -> Option<Definition> {
        self.list.into_iter().next()
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json) => f.write_str(&json),
            Err(e) => write!(f, "{}", e),
        }
    }
}

impl fmt::Display for DefinitionResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json) => f.write_str(&json),
            Err(e) => write!(f, "{}", e),
        }
    }
}
