//! Copy-with-marker semantics shared by every duplicable entity.

use crate::catalog::{Nursery, PlantLink};
use crate::constants::COPY_MARKER;
use crate::plant::Plant;
use crate::schema::{NURSERY, PLANT, PLANT_LINK};

/// A record that can be cloned into a new, unsaved copy.
///
/// The copy keeps every field except the identity, and its display field
/// gets [`COPY_MARKER`] prepended. An already marked value is marked again.
pub trait Duplicable: Clone {
    const ENTITY: &'static str;
    /// Field receiving the copy marker.
    const MARKED_FIELD: &'static str;

    fn id(&self) -> Option<i64>;
    fn clear_id(&mut self);
    fn marked_value(&self) -> &str;
    fn marked_value_mut(&mut self) -> &mut String;

    #[must_use]
    fn as_copy(&self) -> Self {
        let mut copy = self.clone();
        copy.clear_id();
        mark_copy(copy.marked_value_mut());
        copy
    }
}

/// Prepends [`COPY_MARKER`] in place.
pub fn mark_copy(value: &mut String) {
    value.insert_str(0, COPY_MARKER);
}

impl Duplicable for Plant {
    const ENTITY: &'static str = PLANT;
    const MARKED_FIELD: &'static str = "name_common";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn clear_id(&mut self) {
        self.id = None;
    }

    fn marked_value(&self) -> &str {
        &self.name_common
    }

    fn marked_value_mut(&mut self) -> &mut String {
        &mut self.name_common
    }
}

impl Duplicable for PlantLink {
    const ENTITY: &'static str = PLANT_LINK;
    const MARKED_FIELD: &'static str = "title";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn clear_id(&mut self) {
        self.id = None;
    }

    fn marked_value(&self) -> &str {
        &self.title
    }

    fn marked_value_mut(&mut self) -> &mut String {
        &mut self.title
    }
}

impl Duplicable for Nursery {
    const ENTITY: &'static str = NURSERY;
    const MARKED_FIELD: &'static str = "name";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn clear_id(&mut self) {
        self.id = None;
    }

    fn marked_value(&self) -> &str {
        &self.name
    }

    fn marked_value_mut(&mut self) -> &mut String {
        &mut self.name
    }
}
