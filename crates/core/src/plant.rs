//! The plant record.

mod builder;
mod flag;

pub use builder::PlantBuilder;
pub use flag::PlantFlag;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::schema::{PLANT, SchemaState};

/// A catalogued plant, in its latest shape.
///
/// Enumerated attributes hold raw codes; which codes are valid depends on the
/// schema position the store is at, see [`Plant::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Plant {
    /// `None` until the record is first saved.
    pub id: Option<i64>,
    pub name_common: String,
    pub name_scientific: Option<String>,
    pub plant_type: String,
    pub exposure: String,
    pub description: String,

    pub is_hybrid: bool,
    pub deadhead_suggested: bool,
    pub good_for_border: bool,
    pub good_for_container: bool,
    pub good_for_landscape: bool,
    pub good_for_rock_garden: bool,
    pub good_for_shrubs: bool,
    pub attracts_butterflies: bool,
    pub attracts_hummingbirds: bool,
    pub pollinator_friendly: bool,
    pub is_deer_resistant: bool,
    pub is_rabbit_resistant: bool,
    pub repels_mosquitoes: bool,
    pub drought_tolerant: bool,
    pub heat_tolerant: bool,
    pub is_waterwise: bool,
    pub is_evergreen: bool,
    pub earth_kind: bool,
    pub is_organic: bool,
    pub is_non_gmo: bool,

    pub hardiness_zone_low: String,
    pub hardiness_zone_high: String,
    /// Inches. `spacing_min <= spacing_max` is not enforced.
    pub spacing_min: u32,
    pub spacing_max: u32,
    /// Inches. `height_min <= height_max` is not enforced.
    pub height_min: u32,
    pub height_max: u32,
    /// Gallons.
    pub suggested_container_size: u32,
    pub medicinal_benefits: Option<String>,
    pub germination_days: u32,
    pub maturity_days: u32,
}

impl Plant {
    /// Returns a new builder with the required fields set.
    #[must_use]
    pub fn builder(name_common: impl Into<String>) -> PlantBuilder {
        PlantBuilder::new(name_common.into())
    }

    #[must_use]
    pub const fn flag(&self, flag: PlantFlag) -> bool {
        *self.flag_ref(flag)
    }

    #[must_use]
    pub const fn flag_ref(&self, flag: PlantFlag) -> &bool {
        match flag {
            PlantFlag::Hybrid => &self.is_hybrid,
            PlantFlag::DeadheadSuggested => &self.deadhead_suggested,
            PlantFlag::GoodForBorder => &self.good_for_border,
            PlantFlag::GoodForContainer => &self.good_for_container,
            PlantFlag::GoodForLandscape => &self.good_for_landscape,
            PlantFlag::GoodForRockGarden => &self.good_for_rock_garden,
            PlantFlag::GoodForShrubs => &self.good_for_shrubs,
            PlantFlag::AttractsButterflies => &self.attracts_butterflies,
            PlantFlag::AttractsHummingbirds => &self.attracts_hummingbirds,
            PlantFlag::PollinatorFriendly => &self.pollinator_friendly,
            PlantFlag::DeerResistant => &self.is_deer_resistant,
            PlantFlag::RabbitResistant => &self.is_rabbit_resistant,
            PlantFlag::RepelsMosquitoes => &self.repels_mosquitoes,
            PlantFlag::DroughtTolerant => &self.drought_tolerant,
            PlantFlag::HeatTolerant => &self.heat_tolerant,
            PlantFlag::Waterwise => &self.is_waterwise,
            PlantFlag::Evergreen => &self.is_evergreen,
            PlantFlag::EarthKind => &self.earth_kind,
            PlantFlag::Organic => &self.is_organic,
            PlantFlag::NonGmo => &self.is_non_gmo,
        }
    }

    pub const fn set_flag(&mut self, flag: PlantFlag, value: bool) {
        let slot = match flag {
            PlantFlag::Hybrid => &mut self.is_hybrid,
            PlantFlag::DeadheadSuggested => &mut self.deadhead_suggested,
            PlantFlag::GoodForBorder => &mut self.good_for_border,
            PlantFlag::GoodForContainer => &mut self.good_for_container,
            PlantFlag::GoodForLandscape => &mut self.good_for_landscape,
            PlantFlag::GoodForRockGarden => &mut self.good_for_rock_garden,
            PlantFlag::GoodForShrubs => &mut self.good_for_shrubs,
            PlantFlag::AttractsButterflies => &mut self.attracts_butterflies,
            PlantFlag::AttractsHummingbirds => &mut self.attracts_hummingbirds,
            PlantFlag::PollinatorFriendly => &mut self.pollinator_friendly,
            PlantFlag::DeerResistant => &mut self.is_deer_resistant,
            PlantFlag::RabbitResistant => &mut self.is_rabbit_resistant,
            PlantFlag::RepelsMosquitoes => &mut self.repels_mosquitoes,
            PlantFlag::DroughtTolerant => &mut self.drought_tolerant,
            PlantFlag::HeatTolerant => &mut self.heat_tolerant,
            PlantFlag::Waterwise => &mut self.is_waterwise,
            PlantFlag::Evergreen => &mut self.is_evergreen,
            PlantFlag::EarthKind => &mut self.earth_kind,
            PlantFlag::Organic => &mut self.is_organic,
            PlantFlag::NonGmo => &mut self.is_non_gmo,
        };
        *slot = value;
    }

    /// Flags currently set, in declaration order.
    pub fn active_flags(&self) -> impl Iterator<Item = PlantFlag> + '_ {
        PlantFlag::ALL.iter().copied().filter(|f| self.flag(*f))
    }

    /// Checks the record against the schema in effect.
    pub fn validate(&self, schema: &SchemaState) -> Result<(), CoreError> {
        schema.check_text(PLANT, "name_common", Some(&self.name_common))?;
        schema.check_text(PLANT, "name_scientific", self.name_scientific.as_deref())?;
        schema.check_text(PLANT, "description", Some(&self.description))?;
        schema.check_text(PLANT, "medicinal_benefits", self.medicinal_benefits.as_deref())?;
        schema.check_choice(PLANT, "plant_type", &self.plant_type)?;
        schema.check_choice(PLANT, "exposure", &self.exposure)?;
        schema.check_choice(PLANT, "hardiness_zone_low", &self.hardiness_zone_low)?;
        schema.check_choice(PLANT, "hardiness_zone_high", &self.hardiness_zone_high)?;
        Ok(())
    }
}

impl std::fmt::Display for Plant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name_scientific.as_deref() {
            Some(scientific) if !scientific.is_empty() => {
                write!(f, "{} ({scientific})", self.name_common)
            },
            _ => f.write_str(&self.name_common),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_latest_schema() {
        let schema = SchemaState::latest().unwrap();
        let plant = Plant::builder("Tomato").build();
        assert_eq!(schema.default_of(PLANT, "plant_type").unwrap(), Some(plant.plant_type));
        assert_eq!(schema.default_of(PLANT, "exposure").unwrap(), Some(plant.exposure));
        assert_eq!(
            schema.default_of(PLANT, "hardiness_zone_low").unwrap(),
            Some(plant.hardiness_zone_low)
        );
        assert_eq!(
            schema.default_of(PLANT, "hardiness_zone_high").unwrap(),
            Some(plant.hardiness_zone_high)
        );
    }

    #[test]
    fn default_plant_is_valid() {
        let schema = SchemaState::latest().unwrap();
        assert!(Plant::builder("Tomato").build().validate(&schema).is_ok());
    }

    #[test]
    fn removed_exposure_code_is_invalid() {
        let schema = SchemaState::latest().unwrap();
        let plant = Plant::builder("Lantana").exposure("fp").build();
        assert_eq!(
            plant.validate(&schema),
            Err(CoreError::InvalidCode { entity: PLANT, field: "exposure", code: "fp".to_owned() })
        );
    }

    #[test]
    fn name_longer_than_100_chars_is_rejected() {
        let schema = SchemaState::latest().unwrap();
        let plant = Plant::builder("a".repeat(101)).build();
        assert!(matches!(plant.validate(&schema), Err(CoreError::TooLong { max: 100, .. })));
    }

    #[test]
    fn empty_description_is_allowed() {
        let schema = SchemaState::latest().unwrap();
        let plant = Plant::builder("Basil").description("").build();
        assert!(plant.validate(&schema).is_ok());
    }

    #[test]
    fn flags_round_trip_through_setter() {
        let mut plant = Plant::builder("Rosemary").build();
        assert_eq!(plant.active_flags().count(), 0);
        plant.set_flag(PlantFlag::DeerResistant, true);
        plant.set_flag(PlantFlag::DroughtTolerant, true);
        assert!(plant.is_deer_resistant);
        let active: Vec<_> = plant.active_flags().collect();
        assert_eq!(active, vec![PlantFlag::DeerResistant, PlantFlag::DroughtTolerant]);
    }

    #[test]
    fn display_includes_scientific_name() {
        let plant = Plant::builder("China Rose").name_scientific("Rosa chinensis").build();
        assert_eq!(plant.to_string(), "China Rose (Rosa chinensis)");
        assert_eq!(Plant::builder("Mint").build().to_string(), "Mint");
    }
}
