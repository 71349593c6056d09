use crate::{
    directory::AllocationDirectory,
    enclosure::{ENCLOSURE_CAPACITY, Enclosure},
    record::Food,
};

const MAP_WIDTH: usize = 62;

pub fn enclosure_sign(enclosure: &Enclosure) -> String {
    let mut out = format!(
        "=== Enclosure {} ===\nLocation: {}\n\n",
        enclosure.id(),
        enclosure.location()
    );

    if enclosure.is_empty() {
        out.push_str("This enclosure is currently empty.\n");
        return out;
    }

    out.push_str("Birds housed here:\n");
    out.push_str(&"-".repeat(40));
    out.push('\n');
    for resident in enclosure.residents() {
        out.push_str(&format!("{}\n\n", resident));
    }
    out
}

pub fn enclosure_summary(enclosure: &Enclosure) -> String {
    format!(
        "Enclosure {} ({}) - {}/{} birds",
        enclosure.id(),
        enclosure.location(),
        enclosure.len(),
        ENCLOSURE_CAPACITY
    )
}

pub fn directory_map(directory: &AllocationDirectory) -> String {
    let mut out = String::from("ENCLOSURE MAP\n\n");
    if directory.enclosures().is_empty() {
        out.push_str("No enclosures have been created yet.\n");
        return out;
    }

    for enclosure in directory.enclosures() {
        let header = format!("+- Enclosure {} - {} ", enclosure.id(), enclosure.location());
        out.push_str(&padded(&header, '-', '+'));
        for resident in enclosure.residents() {
            let line = format!(
                "|  * {} ({})",
                resident.display_name(),
                resident.classification()
            );
            out.push_str(&padded(&line, ' ', '|'));
        }
        out.push_str(&format!("+{}+\n\n", "-".repeat(MAP_WIDTH - 1)));
    }
    out
}

fn padded(text: &str, fill: char, edge: char) -> String {
    let width = MAP_WIDTH.saturating_sub(text.chars().count());
    format!("{}{}{}\n", text, fill.to_string().repeat(width), edge)
}

/// Every housed bird, alphabetical by display name, ties kept in placement order.
pub fn bird_index(directory: &AllocationDirectory) -> String {
    let mut rows: Vec<(&str, &Enclosure)> = directory
        .enclosures()
        .iter()
        .flat_map(|enclosure| {
            enclosure
                .residents()
                .iter()
                .map(move |resident| (resident.display_name(), enclosure))
        })
        .collect();

    let mut out = String::from("BIRD INDEX (A-Z)\n\n");
    if rows.is_empty() {
        out.push_str("No birds are currently housed.\n");
        return out;
    }

    rows.sort_by_key(|(name, _)| *name);
    for (name, enclosure) in rows {
        out.push_str(&format!(
            "{:<30} -> Enclosure {} ({})\n",
            name,
            enclosure.id(),
            enclosure.location()
        ));
    }
    out
}

pub fn food_report<'a>(totals: impl IntoIterator<Item = (&'a Food, &'a u32)>) -> String {
    let mut out = String::from("Food requirements:\n");
    for (food, units) in totals {
        out.push_str(&format!(" - {}: {}\n", food, units));
    }
    out
}
