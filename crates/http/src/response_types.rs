//! Response types (Serialize)

use std::collections::BTreeMap;

use plant_catalog_service::ActionInfo;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionEntry {
    pub name: &'static str,
    pub description: &'static str,
}

/// Registered actions grouped by entity kind.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ActionsResponse(pub BTreeMap<&'static str, Vec<ActionEntry>>);

impl FromIterator<ActionInfo> for ActionsResponse {
    fn from_iter<I: IntoIterator<Item = ActionInfo>>(iter: I) -> Self {
        let mut grouped: BTreeMap<&'static str, Vec<ActionEntry>> = BTreeMap::new();
        for info in iter {
            grouped
                .entry(info.entity.as_str())
                .or_default()
                .push(ActionEntry { name: info.name, description: info.description });
        }
        Self(grouped)
    }
}
