//! The migration chain.
//!
//! Append-only. Each entry names its predecessor; the chain must stay a
//! single line with no branches and no merges.

use std::collections::HashSet;

use super::field::{FieldDef, Migration, Operation};
use super::{NURSERY, PLANT, PLANT_LINK, PLANTS_RELATION, PROFILE};
use crate::choices::{
    EXPOSURE_FULL_SUN, EXPOSURES, EXPOSURES_WITH_FULL_TO_PARTIAL, HARDINESS_ZONES,
    HARDINESS_ZONES_WITH_UNSET, LINK_TYPES, LINK_TYPES_INITIAL, PLANT_TYPE_PERENNIAL,
    PLANT_TYPE_UNKNOWN, PLANT_TYPES, PLANT_TYPES_INITIAL, PLANT_TYPES_WITH_TENDER,
    PLANT_TYPES_WITHOUT_UNKNOWN, ZONE_DEFAULT_LEGACY, ZONE_NOT_PROVIDED,
};
use crate::error::CoreError;

const INITIAL_PLANT_FIELDS: &[FieldDef] = &[
    FieldDef::id(),
    FieldDef::text("name_common", 100),
    FieldDef::optional_text("name_scientific", Some(100)),
    FieldDef::choice("plant_type", PLANT_TYPES_INITIAL, Some(PLANT_TYPE_PERENNIAL), 2),
    FieldDef::optional_text("description", None),
    FieldDef::flag("earth_kind"),
    FieldDef::choice("hardiness_zone_low", HARDINESS_ZONES, Some(ZONE_DEFAULT_LEGACY), 3),
    FieldDef::choice("hardiness_zone_high", HARDINESS_ZONES, Some(ZONE_DEFAULT_LEGACY), 3),
    FieldDef::positive("spacing_min"),
    FieldDef::positive("spacing_max"),
    FieldDef::positive("height_min"),
    FieldDef::positive("height_max"),
    FieldDef::positive("suggested_container_size"),
    FieldDef::positive("germination_days"),
    FieldDef::positive("maturity_days"),
];

const INITIAL_PROFILE_FIELDS: &[FieldDef] = &[FieldDef::id(), FieldDef::text("name", 50)];

const INITIAL_LINK_FIELDS: &[FieldDef] = &[
    FieldDef::id(),
    FieldDef::text("title", 50),
    FieldDef::url("url", true),
    FieldDef::choice("link_type", LINK_TYPES_INITIAL, None, 2),
];

const NURSERY_FIELDS: &[FieldDef] =
    &[FieldDef::id(), FieldDef::text("name", 50), FieldDef::url("url", false)];

const fn add_flag(name: &'static str) -> Operation {
    Operation::AddField { entity: PLANT, field: FieldDef::flag(name) }
}

const fn alter_plant_type(
    choices: &'static [crate::choices::Choice],
    default: &'static str,
) -> Operation {
    Operation::AlterField {
        entity: PLANT,
        field: FieldDef::choice("plant_type", choices, Some(default), 2),
    }
}

/// Every migration, oldest first.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        name: "0001_initial",
        predecessor: None,
        operations: &[
            Operation::CreateEntity { entity: PLANT, fields: INITIAL_PLANT_FIELDS },
            Operation::CreateEntity { entity: PROFILE, fields: INITIAL_PROFILE_FIELDS },
            Operation::CreateEntity { entity: PLANT_LINK, fields: INITIAL_LINK_FIELDS },
            Operation::AddManyToMany { entity: PLANT_LINK, relation: PLANTS_RELATION, to: PLANT },
        ],
    },
    Migration {
        name: "0002_plant_medicinal_benefits",
        predecessor: Some("0001_initial"),
        operations: &[Operation::AddField {
            entity: PLANT,
            field: FieldDef::optional_text("medicinal_benefits", None),
        }],
    },
    Migration {
        name: "0003_alter_plant_plant_type",
        predecessor: Some("0002_plant_medicinal_benefits"),
        operations: &[alter_plant_type(PLANT_TYPES_WITHOUT_UNKNOWN, PLANT_TYPE_PERENNIAL)],
    },
    Migration {
        name: "0004_plant_exposure",
        predecessor: Some("0003_alter_plant_plant_type"),
        operations: &[Operation::AddField {
            entity: PLANT,
            field: FieldDef::choice("exposure", EXPOSURES, Some(EXPOSURE_FULL_SUN), 2),
        }],
    },
    Migration {
        name: "0005_alter_plant_exposure",
        predecessor: Some("0004_plant_exposure"),
        operations: &[Operation::AlterField {
            entity: PLANT,
            field: FieldDef::choice(
                "exposure",
                EXPOSURES_WITH_FULL_TO_PARTIAL,
                Some(EXPOSURE_FULL_SUN),
                2,
            ),
        }],
    },
    Migration {
        name: "0006_plant_deadhead_suggested_and_more",
        predecessor: Some("0005_alter_plant_exposure"),
        operations: &[
            add_flag("deadhead_suggested"),
            add_flag("good_for_border"),
            add_flag("good_for_container"),
            add_flag("good_for_landscape"),
            add_flag("good_for_rock_garden"),
            add_flag("good_for_shrubs"),
        ],
    },
    Migration {
        name: "0007_alter_plant_exposure",
        predecessor: Some("0006_plant_deadhead_suggested_and_more"),
        operations: &[Operation::AlterField {
            entity: PLANT,
            field: FieldDef::choice("exposure", EXPOSURES, Some(EXPOSURE_FULL_SUN), 2),
        }],
    },
    Migration {
        name: "0008_alter_plant_link_title_link_type",
        predecessor: Some("0007_alter_plant_exposure"),
        operations: &[
            Operation::AlterField { entity: PLANT_LINK, field: FieldDef::text("title", 75) },
            Operation::AlterField {
                entity: PLANT_LINK,
                field: FieldDef::choice("link_type", LINK_TYPES, None, 2),
            },
        ],
    },
    Migration {
        name: "0009_plant_drought_tolerant_heat_tolerant",
        predecessor: Some("0008_alter_plant_link_title_link_type"),
        operations: &[add_flag("drought_tolerant"), add_flag("heat_tolerant")],
    },
    Migration {
        name: "0010_nursery",
        predecessor: Some("0009_plant_drought_tolerant_heat_tolerant"),
        operations: &[
            Operation::CreateEntity { entity: NURSERY, fields: NURSERY_FIELDS },
            Operation::AddManyToMany { entity: NURSERY, relation: PLANTS_RELATION, to: PLANT },
        ],
    },
    Migration {
        name: "0011_plant_attracts_butterflies_and_more",
        predecessor: Some("0010_nursery"),
        operations: &[
            add_flag("attracts_butterflies"),
            add_flag("attracts_hummingbirds"),
            add_flag("pollinator_friendly"),
            add_flag("repels_mosquitoes"),
        ],
    },
    Migration {
        name: "0012_plant_is_organic_is_non_gmo",
        predecessor: Some("0011_plant_attracts_butterflies_and_more"),
        operations: &[add_flag("is_organic"), add_flag("is_non_gmo")],
    },
    Migration {
        name: "0013_plant_is_deer_resistant_is_hybrid_and_more",
        predecessor: Some("0012_plant_is_organic_is_non_gmo"),
        operations: &[
            add_flag("is_deer_resistant"),
            add_flag("is_hybrid"),
            add_flag("is_rabbit_resistant"),
        ],
    },
    Migration {
        name: "0014_alter_plant_plant_type",
        predecessor: Some("0013_plant_is_deer_resistant_is_hybrid_and_more"),
        operations: &[alter_plant_type(PLANT_TYPES_WITH_TENDER, PLANT_TYPE_PERENNIAL)],
    },
    Migration {
        name: "0015_plant_is_waterwise_is_evergreen",
        predecessor: Some("0014_alter_plant_plant_type"),
        operations: &[add_flag("is_waterwise"), add_flag("is_evergreen")],
    },
    Migration {
        name: "0016_alter_plant_plant_type",
        predecessor: Some("0015_plant_is_waterwise_is_evergreen"),
        operations: &[alter_plant_type(PLANT_TYPES, PLANT_TYPE_PERENNIAL)],
    },
    Migration {
        name: "0017_alter_plant_plant_type",
        predecessor: Some("0016_alter_plant_plant_type"),
        operations: &[alter_plant_type(PLANT_TYPES, PLANT_TYPE_UNKNOWN)],
    },
    Migration {
        name: "0018_alter_plant_hardiness_zones",
        predecessor: Some("0017_alter_plant_plant_type"),
        operations: &[
            Operation::AlterField {
                entity: PLANT,
                field: FieldDef::choice(
                    "hardiness_zone_low",
                    HARDINESS_ZONES_WITH_UNSET,
                    Some(ZONE_NOT_PROVIDED),
                    3,
                ),
            },
            Operation::AlterField {
                entity: PLANT,
                field: FieldDef::choice(
                    "hardiness_zone_high",
                    HARDINESS_ZONES_WITH_UNSET,
                    Some(ZONE_NOT_PROVIDED),
                    3,
                ),
            },
        ],
    },
    Migration {
        name: "0019_profile_user_plants",
        predecessor: Some("0018_alter_plant_hardiness_zones"),
        operations: &[
            Operation::AddField { entity: PROFILE, field: FieldDef::one_to_one("user_id", "user") },
            Operation::AddManyToMany { entity: PROFILE, relation: PLANTS_RELATION, to: PLANT },
        ],
    },
];

/// Checks that `chain` is one linear history.
///
/// The first entry has no predecessor, every later entry names the entry
/// right before it, and names are unique.
pub fn validate_chain(chain: &[Migration]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(chain.len());
    let mut previous: Option<&'static str> = None;
    for migration in chain {
        if !seen.insert(migration.name) {
            return Err(CoreError::BrokenChain(format!(
                "migration '{}' appears more than once",
                migration.name
            )));
        }
        if migration.predecessor != previous {
            return Err(CoreError::BrokenChain(format!(
                "migration '{}' follows {:?}, expected {:?}",
                migration.name, migration.predecessor, previous
            )));
        }
        previous = Some(migration.name);
    }
    Ok(())
}
