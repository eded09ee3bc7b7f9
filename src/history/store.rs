use log::warn;

use super::slot::StorageSlot;
use crate::error::StorageError;
use crate::models::history::HistoryItem;

/// Newest-first log of generated greetings, written through to one slot.
pub struct HistoryStore {
    slot: Box<dyn StorageSlot>,
    items: Vec<HistoryItem>,
}

impl HistoryStore {
    /// Reads the slot. Absent or unreadable state starts empty.
    pub fn load(slot: Box<dyn StorageSlot>) -> Self {
        let items = match slot.read() {
            Ok(Some(blob)) =>
                match serde_json::from_str::<Vec<HistoryItem>>(&blob) {
                    Ok(items) => items,
                    Err(e) => {
                        warn!("Discarding malformed history: {}", e);
                        Vec::new()
                    }
                }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read history, starting empty: {}", e);
                Vec::new()
            }
        };
        Self { slot, items }
    }

    pub fn append(&mut self, item: HistoryItem) -> Result<(), StorageError> {
        self.items.insert(0, item);
        if let Err(e) = self.persist() {
            self.items.remove(0);
            return Err(e);
        }
        Ok(())
    }

    pub fn list(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Irreversible. Callers confirm with the user first.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        let previous = std::mem::take(&mut self.items);
        if let Err(e) = self.persist() {
            self.items = previous;
            return Err(e);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let blob = serde_json::to_string(&self.items)?;
        self.slot.write(&blob)
    }
}
