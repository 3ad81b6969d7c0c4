use serde::{Deserialize, Serialize};

use crate::adapters::switch::error::SwitchError;

/// One datagram on the switch transport: a boolean published on a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchMessage {
    pub topic: String,
    pub data: bool,
}

impl SwitchMessage {
    pub fn decode(bytes: &[u8]) -> Result<Self, SwitchError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn encode(&self) -> Result<Vec<u8>, SwitchError> {
        Ok(serde_json::to_vec(self)?)
    }
}
