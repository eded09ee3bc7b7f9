mod slot;
mod stats;
mod store;

pub use slot::{ FileSlot, MemorySlot, StorageSlot };
pub use stats::{ HistoryStats, NO_DATA, NO_TIMESTAMP };
pub use store::HistoryStore;

use crate::config::GeneratorConfig;
use log::info;

pub fn initialize_history_store(config: &GeneratorConfig) -> HistoryStore {
    let slot = FileSlot::new(&config.data_dir, &config.history_key);
    info!("Greeting history will be stored in: {}", slot.path().display());
    HistoryStore::load(Box::new(slot))
}
