use serde::Serialize;

use crate::{
    error::{AviaryError, enclosure_full, extinct_record, incompatible_classification},
    policy,
    record::{BirdRecord, Classification},
};

pub const ENCLOSURE_CAPACITY: usize = 5;

pub type EnclosureId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enclosure {
    id: EnclosureId,
    location: String,
    residents: Vec<BirdRecord>,
}

impl Enclosure {
    pub fn new(id: EnclosureId, location: impl Into<String>) -> Self {
        Self {
            id,
            location: location.into(),
            residents: Vec::with_capacity(ENCLOSURE_CAPACITY),
        }
    }

    pub fn id(&self) -> EnclosureId {
        self.id
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn residents(&self) -> &[BirdRecord] {
        &self.residents
    }

    pub fn len(&self) -> usize {
        self.residents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.residents.len() >= ENCLOSURE_CAPACITY
    }

    /// `None` while empty, otherwise the classification of the first resident.
    pub fn classification(&self) -> Option<Classification> {
        self.residents.first().map(policy::classify)
    }

    pub fn has_resident(&self, record: &BirdRecord) -> bool {
        self.residents.contains(record)
    }

    pub fn try_admit(&self, record: &BirdRecord) -> bool {
        !record.is_extinct() && !self.is_full() && policy::can_coexist(record, self)
    }

    pub fn admit(&mut self, record: BirdRecord) -> Result<(), AviaryError> {
        if record.is_extinct() {
            return Err(extinct_record(format!(
                "cannot admit extinct {} to enclosure {}",
                record.display_name(),
                self.id
            )));
        }
        if self.is_full() {
            return Err(enclosure_full(format!(
                "enclosure {} is at maximum capacity of {}",
                self.id, ENCLOSURE_CAPACITY
            )));
        }
        if !policy::can_coexist(&record, self) {
            return Err(incompatible_classification(format!(
                "{} ({}) cannot be housed with {} in enclosure {}",
                record.display_name(),
                record.classification(),
                self.classification()
                    .map(Classification::name)
                    .unwrap_or("nobody"),
                self.id
            )));
        }

        self.residents.push(record);
        Ok(())
    }
}
