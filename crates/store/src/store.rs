//! Character store - the canonical mutable roster behind the storage port.

use std::sync::Arc;

use tracing::{debug, info};

use torchledger_domain::{Character, CharacterId};

use crate::error::StoreError;
use crate::roster::{Roster, SAVE_FORMAT_VERSION};
use crate::storage::{storage_keys, StoragePort};

/// Holds the character roster and persists every mutation through the
/// injected storage port.
///
/// Readers get clones ("snapshots"); the rules engine never sees a live
/// mutable record. Edits go through [`CharacterStore::update`], which
/// validates the result before committing it, stamps `updated_at`, and
/// persists.
pub struct CharacterStore {
    storage: Arc<dyn StoragePort>,
    roster: Roster,
}

impl CharacterStore {
    /// Load the roster from storage, or start empty if none was saved yet.
    pub fn open(storage: Arc<dyn StoragePort>) -> Result<Self, StoreError> {
        let roster = match storage.read(storage_keys::ROSTER)? {
            Some(json) => Roster::from_json(&json)?,
            None => Roster::default(),
        };
        info!(characters = roster.characters.len(), "character store opened");
        Ok(Self { storage, roster })
    }

    fn persist(&self) -> Result<(), StoreError> {
        let json = self.roster.to_json()?;
        self.storage.write(storage_keys::ROSTER, &json)?;
        debug!(bytes = json.len(), "roster persisted");
        Ok(())
    }

    pub fn characters(&self) -> &[Character] {
        &self.roster.characters
    }

    pub fn len(&self) -> usize {
        self.roster.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.characters.is_empty()
    }

    /// A read-only copy of one record, for the rules engine and the sheet
    /// view.
    pub fn snapshot(&self, id: CharacterId) -> Option<Character> {
        self.roster.find(id).cloned()
    }

    /// Add a record (or replace one with the same id). Persists on success.
    pub fn insert(&mut self, character: Character) -> Result<CharacterId, StoreError> {
        character.validate()?;
        let id = character.id;
        if let Some(existing) = self.roster.find_mut(id) {
            *existing = character;
        } else {
            self.roster.characters.push(character);
        }
        self.persist()?;
        debug!(%id, "character inserted");
        Ok(id)
    }

    /// Apply an edit to one record. The edit runs on a copy; if the result
    /// fails validation the stored record is untouched.
    pub fn update<F>(&mut self, id: CharacterId, edit: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Character),
    {
        let Some(existing) = self.roster.find_mut(id) else {
            return Err(StoreError::CharacterNotFound(id.to_string()));
        };
        let mut updated = existing.clone();
        edit(&mut updated);
        updated.touch();
        updated.validate()?;
        *existing = updated;
        self.persist()?;
        debug!(%id, "character updated");
        Ok(())
    }

    /// Remove a record. Clears the active pointer if it referenced it.
    pub fn remove(&mut self, id: CharacterId) -> Result<(), StoreError> {
        let Some(index) = self.roster.characters.iter().position(|c| c.id == id) else {
            return Err(StoreError::CharacterNotFound(id.to_string()));
        };
        self.roster.characters.remove(index);
        if self.roster.active_character_id == Some(id) {
            self.roster.active_character_id = None;
        }
        self.persist()?;
        info!(%id, "character removed");
        Ok(())
    }

    /// Point the sheet view at a record (or none).
    pub fn set_active(&mut self, id: Option<CharacterId>) -> Result<(), StoreError> {
        if let Some(id) = id {
            if self.roster.find(id).is_none() {
                return Err(StoreError::CharacterNotFound(id.to_string()));
            }
        }
        self.roster.active_character_id = id;
        self.persist()
    }

    pub fn active(&self) -> Option<&Character> {
        self.roster
            .active_character_id
            .and_then(|id| self.roster.find(id))
    }

    /// Pretty JSON of the whole roster, for backup files.
    pub fn export_json(&self) -> Result<String, StoreError> {
        info!(characters = self.len(), "roster exported");
        self.roster.to_json_pretty()
    }

    /// Replace the roster with an imported document. Every record must pass
    /// validation; on any failure the current roster is kept.
    pub fn import_json(&mut self, json: &str) -> Result<usize, StoreError> {
        let mut incoming = Roster::from_json(json)?;
        for character in &incoming.characters {
            character.validate()?;
        }
        if incoming
            .active_character_id
            .is_some_and(|id| incoming.find(id).is_none())
        {
            incoming.active_character_id = None;
        }
        incoming.version = SAVE_FORMAT_VERSION;
        let count = incoming.characters.len();
        self.roster = incoming;
        self.persist()?;
        info!(characters = count, "roster imported");
        Ok(count)
    }
}
