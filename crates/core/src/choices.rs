//! Enumerated code sets.
//!
//! Every enumerated field stores a short code. The set of valid codes is not
//! fixed: migrations redefine it over time, so each historical set is kept as
//! its own constant and referenced by the migration that introduced it.

use serde::Serialize;

/// One `(code, label)` pair of an enumerated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub code: &'static str,
    pub label: &'static str,
}

impl Choice {
    #[must_use]
    pub const fn new(code: &'static str, label: &'static str) -> Self {
        Self { code, label }
    }
}

/// Finds the choice carrying `code`.
#[must_use]
pub fn find_choice<'a>(choices: &'a [Choice], code: &str) -> Option<&'a Choice> {
    choices.iter().find(|c| c.code == code)
}

/// Human-readable label for `code`, if the set contains it.
#[must_use]
pub fn choice_label(choices: &[Choice], code: &str) -> Option<&'static str> {
    find_choice(choices, code).map(|c| c.label)
}

pub const PLANT_TYPE_UNKNOWN: &str = "un";
pub const PLANT_TYPE_PERENNIAL: &str = "pe";
pub const EXPOSURE_FULL_SUN: &str = "fs";
pub const EXPOSURE_FULL_TO_PARTIAL_SUN: &str = "fp";
pub const ZONE_NOT_PROVIDED: &str = "np";
pub const ZONE_DEFAULT_LEGACY: &str = "8b";

/// Plant types as first introduced, including `un`.
pub const PLANT_TYPES_INITIAL: &[Choice] = &[
    Choice::new("an", "Annual"),
    Choice::new("bi", "Biennial"),
    Choice::new("pe", "Perennial"),
    Choice::new("sh", "Shrub"),
    Choice::new("tr", "Tree"),
    Choice::new("vi", "Vine"),
    Choice::new("un", "Unknown"),
];

/// `un` dropped.
pub const PLANT_TYPES_WITHOUT_UNKNOWN: &[Choice] = &[
    Choice::new("an", "Annual"),
    Choice::new("bi", "Biennial"),
    Choice::new("pe", "Perennial"),
    Choice::new("sh", "Shrub"),
    Choice::new("tr", "Tree"),
    Choice::new("vi", "Vine"),
];

/// Tender Perennial added.
pub const PLANT_TYPES_WITH_TENDER: &[Choice] = &[
    Choice::new("an", "Annual"),
    Choice::new("bi", "Biennial"),
    Choice::new("pe", "Perennial"),
    Choice::new("tp", "Tender Perennial"),
    Choice::new("sh", "Shrub"),
    Choice::new("tr", "Tree"),
    Choice::new("vi", "Vine"),
];

/// Current plant types: `un` is back.
pub const PLANT_TYPES: &[Choice] = &[
    Choice::new("an", "Annual"),
    Choice::new("bi", "Biennial"),
    Choice::new("pe", "Perennial"),
    Choice::new("tp", "Tender Perennial"),
    Choice::new("sh", "Shrub"),
    Choice::new("tr", "Tree"),
    Choice::new("vi", "Vine"),
    Choice::new("un", "Unknown"),
];

pub const EXPOSURES: &[Choice] = &[
    Choice::new("fs", "Full Sun (6+)"),
    Choice::new("pu", "Partial Sun (morning, 4-6H)"),
    Choice::new("pd", "Partial Shade (morning, <=4H)"),
    Choice::new("sh", "Shade"),
];

/// Transient set carrying `fp`, removed again by a later migration.
pub const EXPOSURES_WITH_FULL_TO_PARTIAL: &[Choice] = &[
    Choice::new("fs", "Full Sun (6+)"),
    Choice::new("fp", "Full to Partial Sun"),
    Choice::new("pu", "Partial Sun (morning, 4-6H)"),
    Choice::new("pd", "Partial Shade (morning, <=4H)"),
    Choice::new("sh", "Shade"),
];

pub const LINK_TYPES_INITIAL: &[Choice] = &[
    Choice::new("aa", "Academic Article"),
    Choice::new("bl", "Blog"),
    Choice::new("bk", "Book"),
    Choice::new("mg", "Master Gardener"),
    Choice::new("ot", "Other"),
    Choice::new("yt", "YouTube"),
];

pub const LINK_TYPES: &[Choice] = &[
    Choice::new("aa", "Academic Article"),
    Choice::new("bl", "Blog"),
    Choice::new("bk", "Book"),
    Choice::new("mg", "Master Gardener"),
    Choice::new("nu", "Nursery Information"),
    Choice::new("ot", "Other"),
    Choice::new("yt", "YouTube"),
];

macro_rules! hardiness_zones {
    ($($extra:expr),* $(,)?) => {
        &[
            Choice::new("1a", "1a (-60 to -55 °F/-51.1 to -48.3 °C)"),
            Choice::new("1b", "1b (-55 to -50 °F/-48.3 to -45.6 °C)"),
            Choice::new("2a", "2a (-50 to -45 °F/-45.6 to -42.8 °C)"),
            Choice::new("2b", "2b (-45 to -40 °F/-42.8 to -40 °C)"),
            Choice::new("3a", "3a (-40 to -35 °F/-40 to -37.2 °C)"),
            Choice::new("3b", "3b (-35 to -30 °F/-37.2 to -34.4 °C)"),
            Choice::new("4a", "4a (-30 to -25 °F/-34.4 to -31.7 °C)"),
            Choice::new("4b", "4b (-25 to -20 °F/-31.7 to -28.9 °C)"),
            Choice::new("5a", "5a (-20 to -15 °F/-28.9 to -26.1 °C)"),
            Choice::new("5b", "5b (-15 to -10 °F/-26.1 to -23.3 °C)"),
            Choice::new("6a", "6a (-10 to -5 °F/-23.3 to -20.6 °C)"),
            Choice::new("6b", "6b (-5 to 0 °F/-20.6 to -17.8 °C)"),
            Choice::new("7a", "7a (0 to 5 °F/-17.8 to -15 °C)"),
            Choice::new("7b", "7b (5 to 10 °F/-15 to -12.2 °C)"),
            Choice::new("8a", "8a (10 to 15 °F/-12.2 to -9.4 °C)"),
            Choice::new("8b", "8b (15 to 20 °F/-9.4 to -6.7 °C)"),
            Choice::new("9a", "9a (20 to 25 °F/-6.7 to -3.9 °C)"),
            Choice::new("9b", "9b (25 to 30 °F/-3.9 to -1.1 °C)"),
            Choice::new("10a", "10a (30 to 35 °F/-1.1 to 1.7 °C)"),
            Choice::new("10b", "10b (35 to 40 °F/1.7 to 4.4 °C)"),
            Choice::new("11a", "11a (40 to 45 °F/4.4 to 7.2 °C)"),
            Choice::new("11b", "11b (45 to 50 °F/7.2 to 10 °C)"),
            Choice::new("12a", "12a (50 to 55 °F/10 to 12.8 °C)"),
            Choice::new("12b", "12b (55 to 60 °F/12.8 to 15.6 °C)"),
            Choice::new("13a", "13a (60 to 65 °F/15.6 to 18.3 °C)"),
            Choice::new("13b", "13b (65 to 70 °F/18.3 to 21.1 °C)"),
            $($extra,)*
        ]
    };
}

/// The 26 half-zones of the USDA scale.
pub const HARDINESS_ZONES: &[Choice] = hardiness_zones!();

/// The 26 half-zones plus the "not provided" sentinel.
pub const HARDINESS_ZONES_WITH_UNSET: &[Choice] =
    hardiness_zones!(Choice::new(ZONE_NOT_PROVIDED, "Not provided"));
