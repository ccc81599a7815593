use docscope_api::models::EntityRef;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROOT: &str = "kotlin.Any";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Universal root type every hierarchy is resolved from.
    pub root: EntityRef,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            root: EntityRef::from(DEFAULT_ROOT),
        }
    }
}

impl HierarchyConfig {
    pub fn with_root(mut self, root: impl Into<EntityRef>) -> Self {
        self.root = root.into();
        self
    }
}
