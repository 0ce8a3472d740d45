use crate::Result;
use serde::{Deserialize, Serialize};

/// The message travelling through the queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Identifier of the post
    #[serde(rename = "postId")]
    pub post_id: u64,

    /// Body of the post
    pub text: String,
}

impl BlogPost {
    pub fn new(post_id: u64, text: impl ToString) -> Self {
        Self {
            post_id,
            text: text.to_string(),
        }
    }

    /// Encode into the JSON text that is stored in the queue
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from the JSON text popped from the queue
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
