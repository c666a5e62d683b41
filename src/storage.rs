/// Lead store: the in-memory lead collection mirrored to key-value storage
use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use crate::config::STORAGE_KEY;
use crate::error::{LeadError, Result, StorageError};
use crate::lead::{Lead, StoredLead};

/// Key-value storage the snapshot is written to
pub trait SnapshotStorage {
    fn read(&self, key: &str) -> std::result::Result<Option<String>, StorageError>;

    fn write(&mut self, key: &str, value: &str) -> std::result::Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> std::result::Result<(), StorageError>;
}

/// In-memory storage, used in tests and when no browser storage is available
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> std::result::Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Ordered, duplicate-free lead collection with write-through persistence.
///
/// After every successful mutation the snapshot under [`STORAGE_KEY`] equals
/// the in-memory collection. A failed write rolls the mutation back.
#[derive(Debug)]
pub struct LeadStore<S> {
    storage: S,
    leads: Vec<Lead>,
}

impl<S: SnapshotStorage> LeadStore<S> {
    /// Create an empty store; call [`LeadStore::load`] to read the snapshot
    pub fn new(storage: S) -> Self {
        LeadStore {
            storage,
            leads: Vec::new(),
        }
    }

    /// Replace the in-memory collection with the persisted snapshot.
    ///
    /// A missing snapshot yields an empty collection. An unparseable one is
    /// erased and reported as [`LeadError::CorruptSnapshot`]; the store is
    /// left empty and usable.
    pub fn load(&mut self) -> Result<usize> {
        self.leads.clear();

        let Some(raw) = self.storage.read(STORAGE_KEY)? else {
            debug!("No snapshot under {}", STORAGE_KEY);
            return Ok(0);
        };

        match decode_snapshot(&raw) {
            Ok(leads) => {
                self.leads = leads;
                debug!("Loaded {} leads", self.leads.len());
                Ok(self.leads.len())
            }
            Err(e) => {
                warn!("Discarding unreadable snapshot: {}", e);
                self.storage.remove(STORAGE_KEY)?;
                Err(LeadError::CorruptSnapshot(e.to_string()))
            }
        }
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.leads.iter().any(|lead| lead.url == url)
    }

    /// Append a lead unless one with the same url is already saved
    pub fn add(&mut self, lead: Lead) -> Result<()> {
        if self.contains(&lead.url) {
            return Err(LeadError::Duplicate(lead.url));
        }

        self.leads.push(lead);
        if let Err(e) = self.persist() {
            self.leads.pop();
            return Err(e);
        }

        debug!("Added lead, {} saved", self.leads.len());
        Ok(())
    }

    /// Remove the lead at `index` of the full collection
    pub fn remove_at(&mut self, index: usize) -> Result<Lead> {
        if index >= self.leads.len() {
            return Err(LeadError::IndexOutOfRange {
                index,
                len: self.leads.len(),
            });
        }

        let removed = self.leads.remove(index);
        if let Err(e) = self.persist() {
            self.leads.insert(index, removed);
            return Err(e);
        }

        debug!("Removed lead at {}, {} saved", index, self.leads.len());
        Ok(removed)
    }

    /// Remove the lead saved under `url`
    pub fn remove_url(&mut self, url: &str) -> Result<Lead> {
        let index = self
            .leads
            .iter()
            .position(|lead| lead.url == url)
            .ok_or_else(|| LeadError::NotFound(url.to_string()))?;

        self.remove_at(index)
    }

    /// Delete every lead and erase the snapshot
    pub fn clear(&mut self) -> Result<()> {
        if self.leads.is_empty() {
            return Err(LeadError::NothingToDelete);
        }

        self.storage.remove(STORAGE_KEY)?;
        let count = self.leads.len();
        self.leads.clear();

        debug!("Cleared {} leads", count);
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        let snapshot = serde_json::to_string(&self.leads)
            .map_err(|e| StorageError(format!("Failed to serialize leads: {}", e)))?;
        self.storage.write(STORAGE_KEY, &snapshot)?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }
}

/// Parse a snapshot, upgrading bare URL strings and dropping repeated urls
fn decode_snapshot(raw: &str) -> serde_json::Result<Vec<Lead>> {
    let stored: Option<Vec<StoredLead>> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    let mut leads = Vec::new();
    for lead in stored.unwrap_or_default().into_iter().map(Lead::from) {
        if seen.insert(lead.url.clone()) {
            leads.push(lead);
        } else {
            warn!("Dropping repeated url in snapshot: {}", lead.url);
        }
    }

    Ok(leads)
}
