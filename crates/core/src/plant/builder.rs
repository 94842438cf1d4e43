//! Builder for [`Plant`].

use super::{Plant, PlantFlag};
use crate::choices::{EXPOSURE_FULL_SUN, PLANT_TYPE_UNKNOWN, ZONE_NOT_PROVIDED};

/// Builder for constructing [`Plant`] instances with the latest schema defaults.
#[derive(Debug, Clone)]
pub struct PlantBuilder {
    plant: Plant,
}

impl PlantBuilder {
    pub(super) fn new(name_common: String) -> Self {
        Self {
            plant: Plant {
                id: None,
                name_common,
                name_scientific: None,
                plant_type: PLANT_TYPE_UNKNOWN.to_owned(),
                exposure: EXPOSURE_FULL_SUN.to_owned(),
                description: String::new(),
                is_hybrid: false,
                deadhead_suggested: false,
                good_for_border: false,
                good_for_container: false,
                good_for_landscape: false,
                good_for_rock_garden: false,
                good_for_shrubs: false,
                attracts_butterflies: false,
                attracts_hummingbirds: false,
                pollinator_friendly: false,
                is_deer_resistant: false,
                is_rabbit_resistant: false,
                repels_mosquitoes: false,
                drought_tolerant: false,
                heat_tolerant: false,
                is_waterwise: false,
                is_evergreen: false,
                earth_kind: false,
                is_organic: false,
                is_non_gmo: false,
                hardiness_zone_low: ZONE_NOT_PROVIDED.to_owned(),
                hardiness_zone_high: ZONE_NOT_PROVIDED.to_owned(),
                spacing_min: 0,
                spacing_max: 0,
                height_min: 0,
                height_max: 0,
                suggested_container_size: 0,
                medicinal_benefits: None,
                germination_days: 0,
                maturity_days: 0,
            },
        }
    }

    #[must_use]
    pub fn id(mut self, id: i64) -> Self {
        self.plant.id = Some(id);
        self
    }

    #[must_use]
    pub fn name_scientific(mut self, name: impl Into<String>) -> Self {
        self.plant.name_scientific = Some(name.into());
        self
    }

    #[must_use]
    pub fn plant_type(mut self, code: impl Into<String>) -> Self {
        self.plant.plant_type = code.into();
        self
    }

    #[must_use]
    pub fn exposure(mut self, code: impl Into<String>) -> Self {
        self.plant.exposure = code.into();
        self
    }

    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.plant.description = text.into();
        self
    }

    #[must_use]
    pub fn flag(mut self, flag: PlantFlag) -> Self {
        self.plant.set_flag(flag, true);
        self
    }

    #[must_use]
    pub fn hardiness_zones(mut self, low: impl Into<String>, high: impl Into<String>) -> Self {
        self.plant.hardiness_zone_low = low.into();
        self.plant.hardiness_zone_high = high.into();
        self
    }

    #[must_use]
    pub fn spacing(mut self, min: u32, max: u32) -> Self {
        self.plant.spacing_min = min;
        self.plant.spacing_max = max;
        self
    }

    #[must_use]
    pub fn height(mut self, min: u32, max: u32) -> Self {
        self.plant.height_min = min;
        self.plant.height_max = max;
        self
    }

    #[must_use]
    pub fn suggested_container_size(mut self, gallons: u32) -> Self {
        self.plant.suggested_container_size = gallons;
        self
    }

    #[must_use]
    pub fn medicinal_benefits(mut self, text: impl Into<String>) -> Self {
        self.plant.medicinal_benefits = Some(text.into());
        self
    }

    #[must_use]
    pub fn germination_days(mut self, days: u32) -> Self {
        self.plant.germination_days = days;
        self
    }

    #[must_use]
    pub fn maturity_days(mut self, days: u32) -> Self {
        self.plant.maturity_days = days;
        self
    }

    #[must_use]
    pub fn build(self) -> Plant {
        self.plant
    }
}
