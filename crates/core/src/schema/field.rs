//! Field definitions and migration operations.

use crate::choices::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Surrogate integer key.
    AutoId,
    Text { max_len: Option<usize>, required: bool },
    Url { required: bool },
    /// Short code out of a closed set.
    Choice { choices: &'static [Choice], default: Option<&'static str>, max_len: usize },
    Bool { default: bool },
    PositiveInt { default: u32 },
    /// Unique reference to a record owned outside this schema.
    OneToOne { to: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    #[must_use]
    pub const fn id() -> Self {
        Self { name: "id", kind: FieldKind::AutoId }
    }

    #[must_use]
    pub const fn text(name: &'static str, max_len: usize) -> Self {
        Self { name, kind: FieldKind::Text { max_len: Some(max_len), required: true } }
    }

    #[must_use]
    pub const fn optional_text(name: &'static str, max_len: Option<usize>) -> Self {
        Self { name, kind: FieldKind::Text { max_len, required: false } }
    }

    #[must_use]
    pub const fn url(name: &'static str, required: bool) -> Self {
        Self { name, kind: FieldKind::Url { required } }
    }

    #[must_use]
    pub const fn choice(
        name: &'static str,
        choices: &'static [Choice],
        default: Option<&'static str>,
        max_len: usize,
    ) -> Self {
        Self { name, kind: FieldKind::Choice { choices, default, max_len } }
    }

    /// Boolean flag defaulting to `false`.
    #[must_use]
    pub const fn flag(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Bool { default: false } }
    }

    /// Non-negative integer defaulting to 0.
    #[must_use]
    pub const fn positive(name: &'static str) -> Self {
        Self { name, kind: FieldKind::PositiveInt { default: 0 } }
    }

    #[must_use]
    pub const fn one_to_one(name: &'static str, to: &'static str) -> Self {
        Self { name, kind: FieldKind::OneToOne { to } }
    }

    /// Code set of an enumerated field.
    #[must_use]
    pub const fn choices(&self) -> Option<&'static [Choice]> {
        match self.kind {
            FieldKind::Choice { choices, .. } => Some(choices),
            _ => None,
        }
    }
}

/// One schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateEntity { entity: &'static str, fields: &'static [FieldDef] },
    /// Adds a column; existing rows take the field's default.
    AddField { entity: &'static str, field: FieldDef },
    /// Redefines an existing field (length, code set, default).
    AlterField { entity: &'static str, field: FieldDef },
    AddManyToMany { entity: &'static str, relation: &'static str, to: &'static str },
}

impl Operation {
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        match *self {
            Self::CreateEntity { entity, .. }
            | Self::AddField { entity, .. }
            | Self::AlterField { entity, .. }
            | Self::AddManyToMany { entity, .. } => entity,
        }
    }

    /// Short description for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match *self {
            Self::CreateEntity { entity, fields } => {
                format!("create {entity} ({} fields)", fields.len())
            },
            Self::AddField { entity, field } => format!("add {entity}.{}", field.name),
            Self::AlterField { entity, field } => format!("alter {entity}.{}", field.name),
            Self::AddManyToMany { entity, relation, to } => {
                format!("add {entity}.{relation} <-> {to}")
            },
        }
    }
}

/// A named step in the chain, pointing at the step it follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Migration {
    pub name: &'static str,
    pub predecessor: Option<&'static str>,
    pub operations: &'static [Operation],
}
