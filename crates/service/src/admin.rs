//! Explicit admin action registry.
//!
//! Actions are keyed by entity kind and name. Each handler receives only the
//! store capability for its own entity.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use plant_catalog_core::MAX_BATCH_IDS;
use plant_catalog_storage::{NurseryStore, PlantLinkStore, PlantStore, Storage};
use serde::Serialize;

use crate::ServiceError;

pub const DUPLICATE_SELECTED: &str = "duplicate_selected";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EntityKind {
    #[serde(rename = "plant")]
    Plant,
    #[serde(rename = "link")]
    PlantLink,
    #[serde(rename = "nursery")]
    Nursery,
}

impl EntityKind {
    pub const ALL: [Self; 3] = [Self::Plant, Self::PlantLink, Self::Nursery];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plant => "plant",
            Self::PlantLink => "link",
            Self::Nursery => "nursery",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plant" | "plants" => Ok(Self::Plant),
            "link" | "links" | "plant_link" => Ok(Self::PlantLink),
            "nursery" | "nurseries" => Ok(Self::Nursery),
            _ => Err(ServiceError::UnknownEntity(s.to_owned())),
        }
    }
}

type PlantHandler = fn(&dyn PlantStore, &[i64]) -> Result<Vec<i64>, ServiceError>;
type LinkHandler = fn(&dyn PlantLinkStore, &[i64]) -> Result<Vec<i64>, ServiceError>;
type NurseryHandler = fn(&dyn NurseryStore, &[i64]) -> Result<Vec<i64>, ServiceError>;

/// Handler for one entity kind. Returns the ids of records it created.
#[derive(Clone, Copy)]
pub enum ActionHandler {
    Plants(PlantHandler),
    Links(LinkHandler),
    Nurseries(NurseryHandler),
}

impl ActionHandler {
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Plants(_) => EntityKind::Plant,
            Self::Links(_) => EntityKind::PlantLink,
            Self::Nurseries(_) => EntityKind::Nursery,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AdminAction {
    pub name: &'static str,
    pub description: &'static str,
    pub handler: ActionHandler,
}

impl AdminAction {
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.handler.kind()
    }
}

/// Listing entry for a registered action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionInfo {
    pub entity: EntityKind,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub entity: EntityKind,
    pub action: String,
    /// Ids of newly created records, in selection order.
    pub created: Vec<i64>,
}

fn duplicate_plants(store: &dyn PlantStore, ids: &[i64]) -> Result<Vec<i64>, ServiceError> {
    Ok(store.duplicate_plants(ids)?.into_iter().filter_map(|p| p.id).collect())
}

fn duplicate_links(store: &dyn PlantLinkStore, ids: &[i64]) -> Result<Vec<i64>, ServiceError> {
    Ok(store.duplicate_links(ids)?.into_iter().filter_map(|l| l.id).collect())
}

fn duplicate_nurseries(store: &dyn NurseryStore, ids: &[i64]) -> Result<Vec<i64>, ServiceError> {
    Ok(store.duplicate_nurseries(ids)?.into_iter().filter_map(|n| n.id).collect())
}

#[derive(Default)]
pub struct AdminRegistry {
    actions: Vec<AdminAction>,
}

impl AdminRegistry {
    /// Empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { actions: Vec::new() }
    }

    /// Registry with `duplicate_selected` for every entity kind.
    #[must_use]
    pub fn with_defaults() -> Self {
        const DESCRIPTION: &str = "Duplicate selected items";
        let mut registry = Self::new();
        for handler in [
            ActionHandler::Plants(duplicate_plants),
            ActionHandler::Links(duplicate_links),
            ActionHandler::Nurseries(duplicate_nurseries),
        ] {
            registry.actions.push(AdminAction {
                name: DUPLICATE_SELECTED,
                description: DESCRIPTION,
                handler,
            });
        }
        registry
    }

    /// Adds an action. A name can only be registered once per entity kind.
    pub fn register(&mut self, action: AdminAction) -> Result<(), ServiceError> {
        if self.find(action.kind(), action.name).is_some() {
            return Err(ServiceError::InvalidInput(format!(
                "action '{}' is already registered for {}",
                action.name,
                action.kind()
            )));
        }
        self.actions.push(action);
        Ok(())
    }

    pub fn actions(&self) -> impl Iterator<Item = ActionInfo> + '_ {
        self.actions.iter().map(|a| ActionInfo {
            entity: a.kind(),
            name: a.name,
            description: a.description,
        })
    }

    #[must_use]
    pub fn find(&self, kind: EntityKind, name: &str) -> Option<&AdminAction> {
        self.actions.iter().find(|a| a.kind() == kind && a.name == name)
    }

    /// Runs `action` for `kind` over the selected ids.
    pub fn run<S>(
        &self,
        store: &S,
        kind: EntityKind,
        action: &str,
        ids: &[i64],
    ) -> Result<ActionOutcome, ServiceError>
    where
        S: PlantStore + PlantLinkStore + NurseryStore,
    {
        let found = self.find(kind, action).ok_or_else(|| ServiceError::UnknownAction {
            entity: kind.as_str().to_owned(),
            action: action.to_owned(),
        })?;
        if ids.is_empty() {
            return Err(ServiceError::InvalidInput("no items selected".to_owned()));
        }
        if ids.len() > MAX_BATCH_IDS {
            return Err(ServiceError::InvalidInput(format!(
                "selection of {} exceeds the maximum of {MAX_BATCH_IDS}",
                ids.len()
            )));
        }

        let created = match found.handler {
            ActionHandler::Plants(handler) => handler(store, ids)?,
            ActionHandler::Links(handler) => handler(store, ids)?,
            ActionHandler::Nurseries(handler) => handler(store, ids)?,
        };
        tracing::info!(
            entity = %kind,
            action,
            selected = ids.len(),
            created = created.len(),
            "Admin action applied"
        );
        Ok(ActionOutcome { entity: kind, action: action.to_owned(), created })
    }
}

/// Admin operations over the shared storage.
pub struct AdminService {
    storage: Arc<Storage>,
    registry: AdminRegistry,
}

impl AdminService {
    #[must_use]
    pub fn new(storage: Arc<Storage>) -> Self {
        Self::with_registry(storage, AdminRegistry::with_defaults())
    }

    #[must_use]
    pub const fn with_registry(storage: Arc<Storage>, registry: AdminRegistry) -> Self {
        Self { storage, registry }
    }

    pub fn actions(&self) -> Vec<ActionInfo> {
        self.registry.actions().collect()
    }

    /// Parses `entity` and runs the named action.
    pub fn run(
        &self,
        entity: &str,
        action: &str,
        ids: &[i64],
    ) -> Result<ActionOutcome, ServiceError> {
        let kind: EntityKind = entity.parse()?;
        self.registry.run(self.storage.as_ref(), kind, action, ids)
    }
}
