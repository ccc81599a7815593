use super::entity::{EntityKind, EntityRef};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What a symbol source declares about one entity: its kind and its direct supertypes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct SupertypeFact {
    pub entity: EntityRef,
    #[serde(default)]
    pub supertypes: Vec<EntityRef>,
    #[serde(default)]
    pub kind: EntityKind,
}

impl SupertypeFact {
    pub fn new(entity: impl Into<EntityRef>, kind: EntityKind) -> Self {
        Self {
            entity: entity.into(),
            supertypes: Vec::new(),
            kind,
        }
    }

    pub fn extends<I, R>(mut self, supertypes: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<EntityRef>,
    {
        self.supertypes.extend(supertypes.into_iter().map(Into::into));
        self
    }
}

/// All facts one source reported during a collection pass.
#[derive(Serialize, Deserialize, Debug, Clone, Default, JsonSchema)]
pub struct SourceFacts {
    pub name: String,
    #[serde(default)]
    pub facts: Vec<SupertypeFact>,
}

/// Parent-oriented fact fed to the graph merger: the known direct subtypes of an
/// entity, together with its own interface supertypes and kind.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct InheritanceFact {
    pub entity: EntityRef,
    pub children: Vec<EntityRef>,
    pub interfaces: Vec<EntityRef>,
    pub kind: EntityKind,
}

impl InheritanceFact {
    pub fn new(entity: impl Into<EntityRef>, kind: EntityKind) -> Self {
        Self {
            entity: entity.into(),
            children: Vec::new(),
            interfaces: Vec::new(),
            kind,
        }
    }

    pub fn with_children<I, R>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<EntityRef>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn with_interfaces<I, R>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<EntityRef>,
    {
        self.interfaces.extend(interfaces.into_iter().map(Into::into));
        self
    }
}
