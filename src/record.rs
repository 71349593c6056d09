use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::error::{
    AviaryError, invalid_characteristic, invalid_diet_size, invalid_vocabulary,
    invalid_wing_count, missing_water_body,
};

pub const MIN_DIET_SIZE: usize = 2;
pub const MAX_DIET_SIZE: usize = 4;
pub const MAX_VOCABULARY_SIZE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    BirdsOfPrey,
    FlightlessBirds,
    Owls,
    Parrots,
    Pigeons,
    Shorebirds,
    Waterfowl,
}

impl Classification {
    pub fn name(self) -> &'static str {
        match self {
            Self::BirdsOfPrey => "Birds of Prey",
            Self::FlightlessBirds => "Flightless Birds",
            Self::Owls => "Owls",
            Self::Parrots => "Parrots",
            Self::Pigeons => "Pigeons",
            Self::Shorebirds => "Shorebirds",
            Self::Waterfowl => "Waterfowl",
        }
    }

    /// Classifications whose members carry a vocabulary and a favorite phrase.
    pub fn is_talking(self) -> bool {
        matches!(self, Self::Parrots)
    }

    /// Classifications whose members are tied to a named body of water.
    pub fn is_aquatic(self) -> bool {
        matches!(self, Self::Shorebirds | Self::Waterfowl)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Hawk,
    Eagle,
    Osprey,
    Emu,
    Kiwi,
    Moa,
    Owl,
    RoseRingParakeet,
    GrayParrot,
    SulfurCrestedCockatoo,
    Pigeon,
    Dove,
    GreatAuk,
    HornedPuffin,
    AfricanJacana,
    Duck,
    Swan,
    Goose,
}

impl Species {
    pub const ALL: [Species; 18] = [
        Self::Hawk,
        Self::Eagle,
        Self::Osprey,
        Self::Emu,
        Self::Kiwi,
        Self::Moa,
        Self::Owl,
        Self::RoseRingParakeet,
        Self::GrayParrot,
        Self::SulfurCrestedCockatoo,
        Self::Pigeon,
        Self::Dove,
        Self::GreatAuk,
        Self::HornedPuffin,
        Self::AfricanJacana,
        Self::Duck,
        Self::Swan,
        Self::Goose,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Hawk => "Hawk",
            Self::Eagle => "Eagle",
            Self::Osprey => "Osprey",
            Self::Emu => "Emu",
            Self::Kiwi => "Kiwi",
            Self::Moa => "Moa",
            Self::Owl => "Owl",
            Self::RoseRingParakeet => "Rose-ring Parakeet",
            Self::GrayParrot => "Gray Parrot",
            Self::SulfurCrestedCockatoo => "Sulfur-crested Cockatoo",
            Self::Pigeon => "Pigeon",
            Self::Dove => "Dove",
            Self::GreatAuk => "Great Auk",
            Self::HornedPuffin => "Horned Puffin",
            Self::AfricanJacana => "African Jacana",
            Self::Duck => "Duck",
            Self::Swan => "Swan",
            Self::Goose => "Goose",
        }
    }

    pub fn classification(self) -> Classification {
        match self {
            Self::Hawk | Self::Eagle | Self::Osprey => Classification::BirdsOfPrey,
            Self::Emu | Self::Kiwi | Self::Moa => Classification::FlightlessBirds,
            Self::Owl => Classification::Owls,
            Self::RoseRingParakeet | Self::GrayParrot | Self::SulfurCrestedCockatoo => {
                Classification::Parrots
            }
            Self::Pigeon | Self::Dove => Classification::Pigeons,
            Self::GreatAuk | Self::HornedPuffin | Self::AfricanJacana => Classification::Shorebirds,
            Self::Duck | Self::Swan | Self::Goose => Classification::Waterfowl,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Food {
    Berries,
    Seeds,
    Fruit,
    Insects,
    OtherBirds,
    Eggs,
    SmallMammals,
    Fish,
    Buds,
    Larvae,
    AquaticInvertebrates,
    Nuts,
    Vegetation,
}

impl Food {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Berries => "berries",
            Self::Seeds => "seeds",
            Self::Fruit => "fruit",
            Self::Insects => "insects",
            Self::OtherBirds => "other birds",
            Self::Eggs => "eggs",
            Self::SmallMammals => "small mammals",
            Self::Fish => "fish",
            Self::Buds => "buds",
            Self::Larvae => "larvae",
            Self::AquaticInvertebrates => "aquatic invertebrates",
            Self::Nuts => "nuts",
            Self::Vegetation => "vegetation",
        }
    }
}

impl fmt::Display for Food {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Classification-specific payload carried by talking and aquatic species.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Traits {
    Talking {
        vocabulary_size: u8,
        favorite_phrase: String,
    },
    Aquatic {
        water_body: String,
    },
}

/// Unvalidated description of a bird, as it arrives from a caller or a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirdSpec {
    pub species: Species,
    pub characteristic: String,
    #[serde(default)]
    pub extinct: bool,
    pub wing_count: i32,
    pub diet: Vec<Food>,
    #[serde(default)]
    pub vocabulary_size: Option<i32>,
    #[serde(default)]
    pub favorite_phrase: Option<String>,
    #[serde(default)]
    pub water_body: Option<String>,
}

impl BirdSpec {
    pub fn new(
        species: Species,
        characteristic: impl Into<String>,
        wing_count: i32,
        diet: impl IntoIterator<Item = Food>,
    ) -> Self {
        Self {
            species,
            characteristic: characteristic.into(),
            extinct: false,
            wing_count,
            diet: diet.into_iter().collect(),
            vocabulary_size: None,
            favorite_phrase: None,
            water_body: None,
        }
    }

    pub fn extinct(mut self) -> Self {
        self.extinct = true;
        self
    }

    pub fn talking(mut self, vocabulary_size: i32, favorite_phrase: impl Into<String>) -> Self {
        self.vocabulary_size = Some(vocabulary_size);
        self.favorite_phrase = Some(favorite_phrase.into());
        self
    }

    pub fn near(mut self, water_body: impl Into<String>) -> Self {
        self.water_body = Some(water_body.into());
        self
    }

    pub fn build(self) -> Result<BirdRecord, AviaryError> {
        BirdRecord::new(self)
    }
}

/// One validated, immutable bird. Equality covers every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BirdRecord {
    species: Species,
    characteristic: String,
    extinct: bool,
    wing_count: u32,
    diet: BTreeSet<Food>,
    traits: Option<Traits>,
}

impl BirdRecord {
    pub fn new(spec: BirdSpec) -> Result<Self, AviaryError> {
        let BirdSpec {
            species,
            characteristic,
            extinct,
            wing_count,
            diet,
            vocabulary_size,
            favorite_phrase,
            water_body,
        } = spec;

        if characteristic.trim().is_empty() {
            return Err(invalid_characteristic(format!(
                "{} needs a non-empty defining characteristic",
                species
            )));
        }

        let wing_count = u32::try_from(wing_count).map_err(|_| {
            invalid_wing_count(format!(
                "wing count cannot be negative, got {} for {}",
                wing_count, species
            ))
        })?;

        let diet: BTreeSet<Food> = diet.into_iter().collect();
        if !(MIN_DIET_SIZE..=MAX_DIET_SIZE).contains(&diet.len()) {
            return Err(invalid_diet_size(format!(
                "{} must prefer {}-{} distinct foods, got {}",
                species,
                MIN_DIET_SIZE,
                MAX_DIET_SIZE,
                diet.len()
            )));
        }

        let classification = species.classification();
        let traits = if classification.is_talking() {
            if water_body.is_some() {
                return Err(invalid_characteristic(format!(
                    "{} is not aquatic and cannot carry a water body",
                    species
                )));
            }
            let vocabulary_size = vocabulary_size.ok_or_else(|| {
                invalid_vocabulary(format!("{} requires a vocabulary size", species))
            })?;
            let vocabulary_size = u8::try_from(vocabulary_size)
                .ok()
                .filter(|size| *size <= MAX_VOCABULARY_SIZE)
                .ok_or_else(|| {
                    invalid_vocabulary(format!(
                        "vocabulary size must be between 0 and {}, got {}",
                        MAX_VOCABULARY_SIZE, vocabulary_size
                    ))
                })?;
            Some(Traits::Talking {
                vocabulary_size,
                favorite_phrase: favorite_phrase.unwrap_or_default(),
            })
        } else if classification.is_aquatic() {
            if vocabulary_size.is_some() || favorite_phrase.is_some() {
                return Err(invalid_characteristic(format!(
                    "{} does not talk and cannot carry a vocabulary",
                    species
                )));
            }
            match water_body {
                Some(water_body) if !water_body.trim().is_empty() => {
                    Some(Traits::Aquatic { water_body })
                }
                _ => {
                    return Err(missing_water_body(format!(
                        "{} requires a non-empty body of water",
                        species
                    )));
                }
            }
        } else {
            if vocabulary_size.is_some() || favorite_phrase.is_some() || water_body.is_some() {
                return Err(invalid_characteristic(format!(
                    "{} ({}) carries no talking or aquatic details",
                    species, classification
                )));
            }
            None
        };

        Ok(Self {
            species,
            characteristic,
            extinct,
            wing_count,
            diet,
            traits,
        })
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn classification(&self) -> Classification {
        self.species.classification()
    }

    pub fn characteristic(&self) -> &str {
        &self.characteristic
    }

    pub fn is_extinct(&self) -> bool {
        self.extinct
    }

    pub fn wing_count(&self) -> u32 {
        self.wing_count
    }

    pub fn diet(&self) -> &BTreeSet<Food> {
        &self.diet
    }

    pub fn traits(&self) -> Option<&Traits> {
        self.traits.as_ref()
    }

    pub fn display_name(&self) -> &'static str {
        self.species.display_name()
    }
}

impl fmt::Display for BirdRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.species,
            self.classification(),
            self.characteristic
        )?;
        if self.extinct {
            f.write_str(" [EXTINCT]")?;
        }
        write!(f, ". Wings: {}. Preferred food: ", self.wing_count)?;
        let foods: Vec<&str> = self.diet.iter().map(|food| food.display_name()).collect();
        write!(f, "{}.", foods.join(", "))?;

        match &self.traits {
            Some(Traits::Talking {
                vocabulary_size,
                favorite_phrase,
            }) => {
                write!(f, " Vocabulary: {} words.", vocabulary_size)?;
                if !favorite_phrase.is_empty() {
                    write!(f, " Favorite saying: \"{}\".", favorite_phrase)?;
                }
            }
            Some(Traits::Aquatic { water_body }) => {
                write!(f, " Lives near: {}.", water_body)?;
            }
            None => {}
        }
        Ok(())
    }
}
