//! JSON fact bundles
//!
//! A bundle carries a page tree plus the raw answers of one or more symbol sources,
//! so a hierarchy can be computed without the language model that produced them.

use crate::config::HierarchyConfig;
use crate::error::Result;
use crate::hierarchy::FactCollector;
use crate::page::PageNode;
use docscope_api::models::{EntityRef, SourceFacts, SupertypeFact};
use docscope_api::source::FactSource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
pub struct FactBundle {
    #[serde(default)]
    pub config: HierarchyConfig,
    pub pages: PageNode,
    #[serde(default)]
    pub sources: Vec<SourceFacts>,
}

impl FactBundle {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let bundle = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            sources = bundle.sources.len(),
            "loaded fact bundle"
        );
        Ok(bundle)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn fact_sources(&self) -> Vec<Arc<dyn FactSource>> {
        self.sources
            .iter()
            .map(|s| Arc::new(JsonFactSource::new(s)) as Arc<dyn FactSource>)
            .collect()
    }

    pub fn collector(&self) -> FactCollector {
        FactCollector::new(self.fact_sources())
    }
}

/// `FactSource` answering from one bundle source.
pub struct JsonFactSource {
    name: String,
    facts: HashMap<EntityRef, SupertypeFact>,
}

impl JsonFactSource {
    /// Index the facts of `source`; the first fact about an entity wins.
    pub fn new(source: &SourceFacts) -> Self {
        let mut facts = HashMap::with_capacity(source.facts.len());
        for fact in &source.facts {
            if facts.contains_key(&fact.entity) {
                warn!(source = %source.name, entity = %fact.entity, "duplicate fact ignored");
                continue;
            }
            facts.insert(fact.entity.clone(), fact.clone());
        }
        Self {
            name: source.name.clone(),
            facts,
        }
    }
}

impl FactSource for JsonFactSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self, entity: &EntityRef) -> Option<SupertypeFact> {
        self.facts.get(entity).cloned()
    }
}
