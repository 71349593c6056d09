use std::fmt;

use serde::Serialize;

use crate::{
    enclosure::{Enclosure, EnclosureId},
    error::{
        AviaryError, AviaryErrorKind, directory_full, duplicate_intake, extinct_record,
        unknown_enclosure_id,
    },
    record::{BirdRecord, Species},
    report,
};

pub const MAX_ENCLOSURES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnclosureRef {
    pub id: EnclosureId,
    pub location: String,
}

impl EnclosureRef {
    fn of(enclosure: &Enclosure) -> Self {
        Self {
            id: enclosure.id(),
            location: enclosure.location().to_string(),
        }
    }
}

impl fmt::Display for EnclosureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Enclosure {} ({})", self.id, self.location)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementOutcome {
    AlreadyHoused,
    Joined,
    Opened,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub species: Species,
    pub enclosure: EnclosureRef,
    pub outcome: PlacementOutcome,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            PlacementOutcome::AlreadyHoused => {
                write!(f, "{} is already in {}", self.species, self.enclosure)
            }
            PlacementOutcome::Joined => {
                write!(f, "{} assigned to {}", self.species, self.enclosure)
            }
            PlacementOutcome::Opened => {
                write!(f, "{} assigned to new {}", self.species, self.enclosure)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LookupStatus {
    Housed { enclosure: EnclosureRef },
    AwaitingAssignment,
    Unknown,
}

/// Owns every enclosure and every intaken-but-unplaced bird.
///
/// Enclosures are append-only and kept in creation order; placement scans
/// them first-fit in that order, so identical call sequences always produce
/// identical layouts.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationDirectory {
    enclosures: Vec<Enclosure>,
    unassigned: Vec<BirdRecord>,
    next_enclosure_id: EnclosureId,
}

impl AllocationDirectory {
    pub fn new() -> Self {
        Self {
            enclosures: Vec::new(),
            unassigned: Vec::new(),
            next_enclosure_id: 1,
        }
    }

    pub fn enclosures(&self) -> &[Enclosure] {
        &self.enclosures
    }

    pub fn unassigned(&self) -> &[BirdRecord] {
        &self.unassigned
    }

    pub fn resident_count(&self) -> usize {
        self.enclosures.iter().map(Enclosure::len).sum()
    }

    pub fn intake(&mut self, record: BirdRecord) -> Result<(), AviaryError> {
        if self.unassigned.contains(&record) || self.housing_of(&record).is_some() {
            return Err(duplicate_intake(format!(
                "{} has already been intaken",
                record.display_name()
            )));
        }

        tracing::debug!(
            target: "directory",
            species = %record.species(),
            classification = %record.classification(),
            "record_intaken"
        );
        self.unassigned.push(record);
        Ok(())
    }

    pub fn assign(&mut self, record: &BirdRecord) -> Result<Placement, AviaryError> {
        if record.is_extinct() {
            tracing::warn!(
                target: "directory",
                species = %record.species(),
                kind = ?AviaryErrorKind::ExtinctRecord,
                "assignment_rejected"
            );
            return Err(extinct_record(format!(
                "extinct {} cannot be housed in an enclosure",
                record.display_name()
            )));
        }

        if let Some(enclosure) = self.housing_of(record) {
            return Ok(Placement {
                species: record.species(),
                enclosure: EnclosureRef::of(enclosure),
                outcome: PlacementOutcome::AlreadyHoused,
            });
        }

        let placement = match self
            .enclosures
            .iter()
            .position(|enclosure| enclosure.try_admit(record))
        {
            Some(index) => {
                let enclosure = &mut self.enclosures[index];
                enclosure.admit(record.clone())?;
                Placement {
                    species: record.species(),
                    enclosure: EnclosureRef::of(enclosure),
                    outcome: PlacementOutcome::Joined,
                }
            }
            None => {
                let enclosure = self.open_enclosure_for(record)?;
                Placement {
                    species: record.species(),
                    enclosure: EnclosureRef::of(enclosure),
                    outcome: PlacementOutcome::Opened,
                }
            }
        };

        self.unassigned.retain(|pending| pending != record);

        tracing::debug!(
            target: "directory",
            species = %record.species(),
            enclosure_id = placement.enclosure.id,
            outcome = ?placement.outcome,
            "record_assigned"
        );
        Ok(placement)
    }

    pub fn lookup(&self, record: &BirdRecord) -> LookupStatus {
        if let Some(enclosure) = self.housing_of(record) {
            return LookupStatus::Housed {
                enclosure: EnclosureRef::of(enclosure),
            };
        }
        if self.unassigned.contains(record) {
            return LookupStatus::AwaitingAssignment;
        }
        LookupStatus::Unknown
    }

    pub fn get_enclosure_by_id(&self, id: EnclosureId) -> Result<&Enclosure, AviaryError> {
        self.enclosures
            .iter()
            .find(|enclosure| enclosure.id() == id)
            .ok_or_else(|| unknown_enclosure_id(format!("no enclosure found with id {}", id)))
    }

    pub fn enclosure_sign(&self, id: EnclosureId) -> Result<String, AviaryError> {
        self.get_enclosure_by_id(id).map(report::enclosure_sign)
    }

    fn housing_of(&self, record: &BirdRecord) -> Option<&Enclosure> {
        self.enclosures
            .iter()
            .find(|enclosure| enclosure.has_resident(record))
    }

    fn open_enclosure_for(&mut self, record: &BirdRecord) -> Result<&Enclosure, AviaryError> {
        if self.enclosures.len() >= MAX_ENCLOSURES {
            tracing::warn!(
                target: "directory",
                species = %record.species(),
                enclosure_count = self.enclosures.len(),
                kind = ?AviaryErrorKind::DirectoryFull,
                "assignment_rejected"
            );
            return Err(directory_full(format!(
                "directory has reached maximum capacity of {} enclosures",
                MAX_ENCLOSURES
            )));
        }

        let classification = record.classification();
        let section = 1 + self
            .enclosures
            .iter()
            .filter(|enclosure| enclosure.classification() == Some(classification))
            .count();
        let location = format!("{} Wing - Section {}", classification, section);

        let id = self.next_enclosure_id;
        self.next_enclosure_id += 1;

        let mut enclosure = Enclosure::new(id, location);
        enclosure.admit(record.clone())?;

        tracing::info!(
            target: "directory",
            enclosure_id = enclosure.id(),
            location = %enclosure.location(),
            "enclosure_opened"
        );
        self.enclosures.push(enclosure);
        Ok(&self.enclosures[self.enclosures.len() - 1])
    }
}

impl Default for AllocationDirectory {
    fn default() -> Self {
        Self::new()
    }
}
