use crate::domain::entity::{Entity, Mapping};
use crate::domain::ports::Storage;
use crate::utils::error::{HotelSystemError, Result};
use crate::utils::validation::Validate;
use std::collections::BTreeMap;
use std::sync::Arc;

/// All records of one entity type, mirrored to a single JSON file.
///
/// The file holds an object keyed by identifier. Every mutation builds the
/// complete next record set, writes it, and only then swaps it in, so a
/// failed write leaves both the file and the in-memory view untouched.
pub struct Collection<E: Entity> {
    storage: Arc<dyn Storage>,
    file: String,
    records: BTreeMap<String, E>,
}

impl<E: Entity> Collection<E> {
    /// Loads `file`; a file that does not exist yet is an empty collection.
    pub fn open(storage: Arc<dyn Storage>, file: impl Into<String>) -> Result<Self> {
        let file = file.into();
        let records = Self::load(storage.as_ref(), &file)?;
        tracing::debug!("Loaded {} {} records from {}", records.len(), E::KIND, file);
        Ok(Self {
            storage,
            file,
            records,
        })
    }

    fn load(storage: &dyn Storage, file: &str) -> Result<BTreeMap<String, E>> {
        let Some(bytes) = storage.read_file(file)? else {
            return Ok(BTreeMap::new());
        };

        let corrupt = |message: String| HotelSystemError::persistence(storage.locate(file), message);

        let raw: BTreeMap<String, Mapping> = serde_json::from_slice(&bytes)
            .map_err(|e| corrupt(format!("not a JSON object of {} records: {}", E::KIND, e)))?;

        let mut records = BTreeMap::new();
        for (key, mapping) in raw {
            let entity = E::from_mapping(mapping)
                .map_err(|e| corrupt(format!("record '{}' is invalid: {}", key, e)))?;
            if entity.id() != key {
                return Err(corrupt(format!(
                    "record stored under '{}' has ID '{}'",
                    key,
                    entity.id()
                )));
            }
            records.insert(key, entity);
        }
        Ok(records)
    }

    pub fn get(&self, id: &str) -> Option<&E> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn insert(&mut self, entity: E) -> Result<()> {
        if self.contains(entity.id()) {
            return Err(HotelSystemError::DuplicateKeyError {
                kind: E::KIND,
                id: entity.id().to_string(),
            });
        }
        entity.validate()?;

        let mut next = self.records.clone();
        next.insert(entity.id().to_string(), entity);
        self.commit(next)
    }

    /// Overwrites the record stored under `id` and returns the previous one.
    pub fn replace(&mut self, id: &str, entity: E) -> Result<E> {
        let Some(previous) = self.records.get(id).cloned() else {
            return Err(HotelSystemError::not_found(E::KIND, id));
        };
        if entity.id() != id {
            return Err(HotelSystemError::validation(
                format!("{}_id", E::KIND.as_str()),
                format!("replacement carries ID '{}' instead of '{}'", entity.id(), id),
            ));
        }
        entity.validate()?;

        let mut next = self.records.clone();
        next.insert(id.to_string(), entity);
        self.commit(next)?;
        Ok(previous)
    }

    pub fn remove(&mut self, id: &str) -> Result<E> {
        let mut next = self.records.clone();
        let Some(removed) = next.remove(id) else {
            return Err(HotelSystemError::not_found(E::KIND, id));
        };
        self.commit(next)?;
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.commit(BTreeMap::new())
    }

    /// Reads the file again into a new collection, leaving `self` untouched.
    pub fn reopen(&self) -> Result<Self> {
        Self::open(self.storage.clone(), self.file.clone())
    }

    fn commit(&mut self, next: BTreeMap<String, E>) -> Result<()> {
        let mut document = serde_json::Map::new();
        for (id, entity) in &next {
            document.insert(id.clone(), serde_json::Value::Object(entity.to_mapping()?));
        }
        let data = serde_json::to_vec_pretty(&document)?;

        self.storage.write_file(&self.file, &data)?;
        tracing::debug!("Wrote {} {} records to {}", next.len(), E::KIND, self.file);

        self.records = next;
        Ok(())
    }
}
