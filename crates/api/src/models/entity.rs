use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

/// Stable identifier of a documentable class or interface.
///
/// Holds the fully qualified name (`kotlin.collections.List`). Two refs denote the
/// same entity iff they are equal.
#[derive(
    Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(transparent)]
pub struct EntityRef(#[schemars(with = "String")] SmolStr);

impl EntityRef {
    pub fn new(fqn: impl Into<SmolStr>) -> Self {
        Self(fqn.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Package part of the name, empty for the default package.
    pub fn package(&self) -> &str {
        match self.0.rfind('.') {
            Some(pos) => &self.0[..pos],
            None => "",
        }
    }

    /// Simple class name (`List` for `kotlin.collections.List`).
    pub fn class_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(pos) => &self.0[pos + 1..],
            None => &self.0,
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EntityRef {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    #[default]
    Class,
    Interface,
}

impl EntityKind {
    pub fn is_interface(self) -> bool {
        matches!(self, EntityKind::Interface)
    }

    /// Merge two sightings of the same entity; an interface tag is never lost.
    pub fn merge(self, other: EntityKind) -> EntityKind {
        if self.is_interface() || other.is_interface() {
            EntityKind::Interface
        } else {
            EntityKind::Class
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Class => f.write_str("class"),
            EntityKind::Interface => f.write_str("interface"),
        }
    }
}
