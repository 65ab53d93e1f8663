use serde::{Deserialize, Serialize};

/// Query shape for the keymap endpoint: the key code and the tag name
/// of the element that had focus when the key went down.
#[derive(Debug, Deserialize)]
pub struct KeymapQuery {
    pub key: u32,
    pub target: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct KeymapResponse {
    pub href: String,
}

#[derive(Debug, Serialize, Default)]
pub struct APIResponse {
    pub status: String,
}

impl APIResponse {
    pub fn new(msg: &str) -> Self {
        return APIResponse { status: msg.to_owned() };
    }
}
