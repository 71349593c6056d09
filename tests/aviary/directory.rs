use aviary::{
    AllocationDirectory, AviaryErrorKind, BirdRecord, LookupStatus, PlacementOutcome, Species,
    directory::MAX_ENCLOSURES, enclosure::ENCLOSURE_CAPACITY,
};

use crate::{assert_housing_invariants, bird, spec};

fn numbered(species: Species, count: usize) -> Vec<BirdRecord> {
    (0..count)
        .map(|index| bird(species, &format!("{species} #{index}")))
        .collect()
}

#[test]
fn given_two_birds_of_prey_when_assigned_then_they_share_the_first_section() {
    let mut directory = AllocationDirectory::new();
    let hawk = bird(Species::Hawk, "Sharp hooked beak");
    let eagle = bird(Species::Eagle, "Powerful talons");

    directory.intake(hawk.clone()).expect("hawk intake");
    directory.intake(eagle.clone()).expect("eagle intake");
    let first = directory.assign(&hawk).expect("hawk should be placed");
    let second = directory.assign(&eagle).expect("eagle should be placed");

    assert_eq!(first.outcome, PlacementOutcome::Opened);
    assert_eq!(second.outcome, PlacementOutcome::Joined);
    assert_eq!(first.enclosure, second.enclosure);
    assert_eq!(first.enclosure.location, "Birds of Prey Wing - Section 1");
    assert_eq!(directory.enclosures().len(), 1);
    assert!(directory.unassigned().is_empty());
}

#[test]
fn given_hawk_then_duck_when_assigned_then_two_enclosures_are_opened() {
    let mut directory = AllocationDirectory::new();
    let hawk = directory
        .assign(&bird(Species::Hawk, "beak"))
        .expect("hawk should be placed");
    let duck = directory
        .assign(&bird(Species::Duck, "feathers"))
        .expect("duck should be placed");

    assert_ne!(hawk.enclosure.id, duck.enclosure.id);
    assert_eq!(duck.outcome, PlacementOutcome::Opened);
    assert_eq!(duck.enclosure.location, "Waterfowl Wing - Section 1");
    assert_housing_invariants(&directory);
}

#[test]
fn given_owl_parrot_pigeon_when_assigned_then_all_mingle_in_first_enclosure() {
    let mut directory = AllocationDirectory::new();
    let ids: Vec<_> = [Species::Owl, Species::GrayParrot, Species::Pigeon]
        .into_iter()
        .map(|species| {
            directory
                .assign(&bird(species, "mingler"))
                .expect("mingler should be placed")
                .enclosure
                .id
        })
        .collect();

    assert_eq!(ids, vec![1, 1, 1]);
    assert_eq!(directory.enclosures().len(), 1);
    assert_eq!(directory.enclosures()[0].location(), "Owls Wing - Section 1");
}

#[test]
fn given_full_mingler_enclosure_when_sixth_mingler_assigned_then_second_enclosure_holds_it() {
    let mut directory = AllocationDirectory::new();
    for record in numbered(Species::Owl, ENCLOSURE_CAPACITY) {
        directory.assign(&record).expect("owl should be placed");
    }

    let sixth = bird(Species::Dove, "sixth");
    let placement = directory.assign(&sixth).expect("sixth should be placed");

    assert_eq!(placement.outcome, PlacementOutcome::Opened);
    assert_eq!(placement.enclosure.id, 2);
    assert_eq!(placement.enclosure.location, "Pigeons Wing - Section 1");
    let second = directory.get_enclosure_by_id(2).expect("second enclosure");
    assert_eq!(second.residents(), &[sixth][..]);
}

#[test]
fn given_partially_filled_enclosures_when_assigned_then_earliest_admissible_wins() {
    let mut directory = AllocationDirectory::new();
    for record in numbered(Species::Owl, 4) {
        directory.assign(&record).expect("owl should be placed");
    }
    directory
        .assign(&bird(Species::Hawk, "divider"))
        .expect("hawk should open enclosure 2");

    let pigeons = numbered(Species::Pigeon, 2);
    let first = directory.assign(&pigeons[0]).expect("pigeon placed");
    let second = directory.assign(&pigeons[1]).expect("pigeon placed");
    let hawk = directory
        .assign(&bird(Species::Eagle, "joins the divider"))
        .expect("eagle placed");
    let owl = directory.assign(&bird(Species::Owl, "later")).expect("owl placed");

    assert_eq!(first.enclosure.id, 1);
    assert_eq!(first.outcome, PlacementOutcome::Joined);
    assert_eq!(second.enclosure.id, 3);
    assert_eq!(second.outcome, PlacementOutcome::Opened);
    assert_eq!(hawk.enclosure.id, 2);
    assert_eq!(owl.enclosure.id, 3);
    assert_housing_invariants(&directory);
}

#[test]
fn given_housed_bird_when_assigned_again_then_same_enclosure_and_no_mutation() {
    let mut directory = AllocationDirectory::new();
    let parrot = bird(Species::GrayParrot, "Intelligent");
    let first = directory.assign(&parrot).expect("parrot placed");
    let before = directory.resident_count();

    let second = directory.assign(&parrot).expect("re-assign should succeed");

    assert_eq!(second.outcome, PlacementOutcome::AlreadyHoused);
    assert_eq!(second.enclosure, first.enclosure);
    assert_eq!(directory.resident_count(), before);
    assert_eq!(
        second.to_string(),
        format!("Gray Parrot is already in Enclosure 1 ({})", first.enclosure.location)
    );
}

#[test]
fn given_extinct_bird_when_assigned_then_always_rejected() {
    let mut directory = AllocationDirectory::new();
    let moa = spec(Species::Moa, "Towering grazer").extinct().build().expect("valid");

    let err = directory.assign(&moa).expect_err("empty directory must reject");
    assert_eq!(err.kind, AviaryErrorKind::ExtinctRecord);

    directory.intake(moa.clone()).expect("extinct birds may still be intaken");
    directory.assign(&bird(Species::Emu, "living")).expect("emu placed");
    let err = directory.assign(&moa).expect_err("populated directory must reject");
    assert_eq!(err.kind, AviaryErrorKind::ExtinctRecord);
    assert_eq!(directory.lookup(&moa), LookupStatus::AwaitingAssignment);
}

#[test]
fn given_intaken_or_housed_bird_when_intaken_again_then_duplicate_intake() {
    let mut directory = AllocationDirectory::new();
    let kiwi = bird(Species::Kiwi, "Nocturnal");
    directory.intake(kiwi.clone()).expect("first intake");
    let err = directory.intake(kiwi.clone()).expect_err("second intake must fail");
    assert_eq!(err.kind, AviaryErrorKind::DuplicateIntake);

    directory.assign(&kiwi).expect("kiwi placed");
    let err = directory.intake(kiwi).expect_err("housed bird cannot be intaken");
    assert_eq!(err.kind, AviaryErrorKind::DuplicateIntake);
}

#[test]
fn given_record_lifecycle_when_looked_up_then_status_tracks_each_stage() {
    let mut directory = AllocationDirectory::new();
    let swan = bird(Species::Swan, "Long neck");
    assert_eq!(directory.lookup(&swan), LookupStatus::Unknown);

    directory.intake(swan.clone()).expect("intake");
    assert_eq!(directory.lookup(&swan), LookupStatus::AwaitingAssignment);

    let placement = directory.assign(&swan).expect("swan placed");
    assert_eq!(
        directory.lookup(&swan),
        LookupStatus::Housed {
            enclosure: placement.enclosure
        }
    );
    assert!(directory.unassigned().is_empty());
}

#[test]
fn given_bird_never_intaken_when_assigned_then_placed_without_touching_unassigned() {
    let mut directory = AllocationDirectory::new();
    let waiting = bird(Species::Goose, "waiting");
    directory.intake(waiting.clone()).expect("intake");

    directory
        .assign(&bird(Species::Osprey, "fresh"))
        .expect("fresh bird placed");

    assert_eq!(directory.unassigned(), &[waiting][..]);
}

#[test]
fn given_unknown_id_when_fetched_then_unknown_enclosure_id() {
    let mut directory = AllocationDirectory::new();
    directory.assign(&bird(Species::Owl, "only")).expect("owl placed");

    assert!(directory.get_enclosure_by_id(1).is_ok());
    let err = directory.get_enclosure_by_id(7).expect_err("id 7 does not exist");
    assert_eq!(err.kind, AviaryErrorKind::UnknownEnclosureId);
    let err = directory.enclosure_sign(0).expect_err("id 0 does not exist");
    assert_eq!(err.kind, AviaryErrorKind::UnknownEnclosureId);
}

#[test]
fn given_full_sections_when_more_prey_arrive_then_sections_are_numbered_in_order() {
    let mut directory = AllocationDirectory::new();
    for record in numbered(Species::Hawk, ENCLOSURE_CAPACITY * 2 + 1) {
        directory.assign(&record).expect("hawk placed");
    }

    let locations: Vec<_> = directory
        .enclosures()
        .iter()
        .map(|enclosure| (enclosure.id(), enclosure.location().to_string()))
        .collect();
    assert_eq!(
        locations,
        vec![
            (1, "Birds of Prey Wing - Section 1".to_string()),
            (2, "Birds of Prey Wing - Section 2".to_string()),
            (3, "Birds of Prey Wing - Section 3".to_string()),
        ]
    );
}

#[test]
fn given_twenty_full_enclosures_when_another_bird_needs_room_then_directory_full() {
    let mut directory = AllocationDirectory::new();
    for record in numbered(Species::Hawk, MAX_ENCLOSURES * ENCLOSURE_CAPACITY) {
        directory.assign(&record).expect("hawk placed");
    }
    assert_eq!(directory.enclosures().len(), MAX_ENCLOSURES);

    let err = directory
        .assign(&bird(Species::Hawk, "one too many"))
        .expect_err("no room left");
    assert_eq!(err.kind, AviaryErrorKind::DirectoryFull);
    assert_eq!(directory.enclosures().len(), MAX_ENCLOSURES);
    assert_housing_invariants(&directory);
}

#[test]
fn given_capped_directory_with_open_slot_when_compatible_bird_arrives_then_existing_slot_is_used() {
    let mut directory = AllocationDirectory::new();
    for record in numbered(Species::Hawk, (MAX_ENCLOSURES - 1) * ENCLOSURE_CAPACITY) {
        directory.assign(&record).expect("hawk placed");
    }
    directory
        .assign(&bird(Species::Owl, "last section"))
        .expect("owl opens the final enclosure");

    let pigeon = directory
        .assign(&bird(Species::Pigeon, "still fits"))
        .expect("existing slots are searched before failing");
    assert_eq!(pigeon.enclosure.id, MAX_ENCLOSURES as u32);

    let err = directory
        .assign(&bird(Species::Duck, "needs its own"))
        .expect_err("waterfowl needs a new enclosure");
    assert_eq!(err.kind, AviaryErrorKind::DirectoryFull);
}

#[test]
fn given_mixed_arrivals_when_assigned_then_invariants_hold_and_replay_is_deterministic() {
    let arrivals: Vec<BirdRecord> = (0..40)
        .map(|index| {
            let species = Species::ALL[(index * 7) % Species::ALL.len()];
            bird(species, &format!("arrival {index}"))
        })
        .collect();

    let run = || {
        let mut directory = AllocationDirectory::new();
        let mut ids = Vec::new();
        for record in &arrivals {
            match directory.assign(record) {
                Ok(placement) => ids.push(Some(placement.enclosure.id)),
                Err(err) => {
                    assert_eq!(err.kind, AviaryErrorKind::DirectoryFull);
                    ids.push(None);
                }
            }
            assert_housing_invariants(&directory);
        }
        ids
    };

    assert_eq!(run(), run());
}
