//! Satellite records related to plants.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::plant::Plant;
use crate::schema::{NURSERY, PLANT_LINK, PROFILE, SchemaState};

/// Reference link about one or more plants.
///
/// Listed by type code, then title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantLink {
    pub id: Option<i64>,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub link_type: String,
}

impl PlantLink {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>, link_type: impl Into<String>) -> Self {
        Self { id: None, title: title.into(), url: url.into(), link_type: link_type.into() }
    }

    pub fn validate(&self, schema: &SchemaState) -> Result<(), CoreError> {
        schema.check_text(PLANT_LINK, "title", Some(&self.title))?;
        schema.check_text(PLANT_LINK, "url", Some(&self.url))?;
        schema.check_choice(PLANT_LINK, "link_type", &self.link_type)
    }
}

/// A nursery stocking plants. Listed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nursery {
    pub id: Option<i64>,
    pub name: String,
    pub url: Option<String>,
}

impl Nursery {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: None, name: name.into(), url: None }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn validate(&self, schema: &SchemaState) -> Result<(), CoreError> {
        schema.check_text(NURSERY, "name", Some(&self.name))?;
        schema.check_text(NURSERY, "url", self.url.as_deref())
    }
}

/// A user's plant collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Option<i64>,
    pub name: String,
    /// Identity of the owning user, held by an external system. At most one profile per user.
    pub user_id: Option<i64>,
}

impl Profile {
    #[must_use]
    pub fn new(name: impl Into<String>, user_id: Option<i64>) -> Self {
        Self { id: None, name: name.into(), user_id }
    }

    pub fn validate(&self, schema: &SchemaState) -> Result<(), CoreError> {
        schema.check_text(PROFILE, "name", Some(&self.name))
    }
}

/// A plant together with the records associated with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantDetail {
    pub plant: Plant,
    pub links: Vec<PlantLink>,
    pub nurseries: Vec<Nursery>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_type_serializes_as_type() {
        let link = PlantLink::new("Growing roses", "https://example.org/roses", "bl");
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["type"], "bl");
        assert!(json.get("link_type").is_none());
    }

    #[test]
    fn link_requires_url_and_known_type() {
        let schema = SchemaState::latest().unwrap();
        assert!(PlantLink::new("Guide", "https://example.org", "nu").validate(&schema).is_ok());
        assert_eq!(
            PlantLink::new("Guide", "", "bl").validate(&schema),
            Err(CoreError::Required { entity: PLANT_LINK, field: "url" })
        );
        assert!(matches!(
            PlantLink::new("Guide", "https://example.org", "xx").validate(&schema),
            Err(CoreError::InvalidCode { .. })
        ));
    }

    #[test]
    fn nursery_url_is_optional() {
        let schema = SchemaState::latest().unwrap();
        assert!(Nursery::new("Green Acres").validate(&schema).is_ok());
        let long = Nursery::new("n".repeat(51));
        assert!(matches!(long.validate(&schema), Err(CoreError::TooLong { max: 50, .. })));
    }

    #[test]
    fn profile_name_is_bounded() {
        let schema = SchemaState::latest().unwrap();
        assert!(Profile::new("Backyard", Some(7)).validate(&schema).is_ok());
        assert!(Profile::new("", None).validate(&schema).is_err());
    }
}
