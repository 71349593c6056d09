use std::collections::BTreeMap;

use crate::{directory::AllocationDirectory, record::Food};

/// One unit of each preferred food per housed bird.
///
/// Unplaced birds eat nothing here, and foods nobody prefers are absent.
pub fn consumption_totals(directory: &AllocationDirectory) -> BTreeMap<Food, u32> {
    let mut totals = BTreeMap::new();
    for enclosure in directory.enclosures() {
        for resident in enclosure.residents() {
            for food in resident.diet() {
                *totals.entry(*food).or_insert(0) += 1;
            }
        }
    }
    totals
}
