//! Boolean attributes of a plant.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::schema::PLANT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum PlantFlag {
    Hybrid,
    DeadheadSuggested,
    GoodForBorder,
    GoodForContainer,
    GoodForLandscape,
    GoodForRockGarden,
    GoodForShrubs,
    AttractsButterflies,
    AttractsHummingbirds,
    PollinatorFriendly,
    DeerResistant,
    RabbitResistant,
    RepelsMosquitoes,
    DroughtTolerant,
    HeatTolerant,
    Waterwise,
    Evergreen,
    EarthKind,
    Organic,
    NonGmo,
}

impl PlantFlag {
    pub const ALL: &'static [Self] = &[
        Self::Hybrid,
        Self::DeadheadSuggested,
        Self::GoodForBorder,
        Self::GoodForContainer,
        Self::GoodForLandscape,
        Self::GoodForRockGarden,
        Self::GoodForShrubs,
        Self::AttractsButterflies,
        Self::AttractsHummingbirds,
        Self::PollinatorFriendly,
        Self::DeerResistant,
        Self::RabbitResistant,
        Self::RepelsMosquitoes,
        Self::DroughtTolerant,
        Self::HeatTolerant,
        Self::Waterwise,
        Self::Evergreen,
        Self::EarthKind,
        Self::Organic,
        Self::NonGmo,
    ];

    /// Column holding the flag.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match *self {
            Self::Hybrid => "is_hybrid",
            Self::DeadheadSuggested => "deadhead_suggested",
            Self::GoodForBorder => "good_for_border",
            Self::GoodForContainer => "good_for_container",
            Self::GoodForLandscape => "good_for_landscape",
            Self::GoodForRockGarden => "good_for_rock_garden",
            Self::GoodForShrubs => "good_for_shrubs",
            Self::AttractsButterflies => "attracts_butterflies",
            Self::AttractsHummingbirds => "attracts_hummingbirds",
            Self::PollinatorFriendly => "pollinator_friendly",
            Self::DeerResistant => "is_deer_resistant",
            Self::RabbitResistant => "is_rabbit_resistant",
            Self::RepelsMosquitoes => "repels_mosquitoes",
            Self::DroughtTolerant => "drought_tolerant",
            Self::HeatTolerant => "heat_tolerant",
            Self::Waterwise => "is_waterwise",
            Self::Evergreen => "is_evergreen",
            Self::EarthKind => "earth_kind",
            Self::Organic => "is_organic",
            Self::NonGmo => "is_non_gmo",
        }
    }
}

impl FromStr for PlantFlag {
    type Err = CoreError;

    /// Accepts the column name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|f| f.column() == s).ok_or_else(|| {
            CoreError::UnknownField { entity: PLANT.to_owned(), field: s.to_owned() }
        })
    }
}
