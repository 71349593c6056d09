//! Mixing rules for housing birds together.
//!
//! Restricted classifications only share an enclosure with their own kind.
//! Every other classification mingles freely with the rest of the minglers.

use crate::{
    enclosure::Enclosure,
    record::{BirdRecord, Classification},
};

pub const RESTRICTED: [Classification; 3] = [
    Classification::BirdsOfPrey,
    Classification::FlightlessBirds,
    Classification::Waterfowl,
];

pub fn classify(record: &BirdRecord) -> Classification {
    record.species().classification()
}

pub fn is_restricted(classification: Classification) -> bool {
    RESTRICTED.contains(&classification)
}

/// Whether `candidate` may live alongside the current residents of `enclosure`.
///
/// Capacity is not considered here; see [`Enclosure::try_admit`].
pub fn can_coexist(candidate: &BirdRecord, enclosure: &Enclosure) -> bool {
    if candidate.is_extinct() {
        return false;
    }

    let Some(existing) = enclosure.residents().first().map(classify) else {
        return true;
    };

    let incoming = classify(candidate);
    if is_restricted(incoming) {
        return incoming == existing;
    }

    !is_restricted(existing)
}
