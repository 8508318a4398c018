//! Roster - the versioned save document holding every character record.

use serde::{Deserialize, Serialize};

use torchledger_domain::{Character, CharacterId};

use crate::error::StoreError;

/// Current save format version. Bumped when the document shape changes in a
/// way old builds cannot read.
pub const SAVE_FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    SAVE_FORMAT_VERSION
}

/// The persisted save document: a version stamp plus the character records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Roster {
    #[serde(default = "default_version")]
    pub version: u32,
    pub characters: Vec<Character>,
    /// The character last open in the sheet view.
    pub active_character_id: Option<CharacterId>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            version: SAVE_FORMAT_VERSION,
            characters: Vec::new(),
            active_character_id: None,
        }
    }
}

impl Roster {
    /// Parse a save document, rejecting versions newer than this build reads.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let roster: Roster = serde_json::from_str(json)?;
        if roster.version > SAVE_FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: roster.version,
                supported: SAVE_FORMAT_VERSION,
            });
        }
        Ok(roster)
    }

    /// Compact encoding for the storage backend.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty encoding for export files a user will keep as a backup.
    pub fn to_json_pretty(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn find(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn find_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }
}
