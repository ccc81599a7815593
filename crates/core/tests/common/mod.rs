//! In-memory fact source for hierarchy tests.

#![allow(dead_code)]

use docscope_api::models::{EntityKind, EntityRef, SupertypeFact};
use docscope_api::source::FactSource;
use docscope_core::hierarchy::FactCollector;
use std::collections::HashMap;
use std::sync::Arc;

/// A mock fact source built with a fluent API.
#[derive(Default, Clone)]
pub struct MockFactSource {
    name: String,
    facts: HashMap<EntityRef, SupertypeFact>,
}

impl MockFactSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            facts: HashMap::new(),
        }
    }

    /// Add a class with its direct supertypes.
    pub fn class(mut self, fqn: &str, supertypes: &[&str]) -> Self {
        self.add(fqn, EntityKind::Class, supertypes);
        self
    }

    /// Add an interface with its direct supertypes.
    pub fn interface(mut self, fqn: &str, supertypes: &[&str]) -> Self {
        self.add(fqn, EntityKind::Interface, supertypes);
        self
    }

    fn add(&mut self, fqn: &str, kind: EntityKind, supertypes: &[&str]) {
        let fact = SupertypeFact::new(fqn, kind).extends(supertypes.iter().copied());
        self.facts.insert(fact.entity.clone(), fact);
    }

    pub fn into_arc(self) -> Arc<dyn FactSource> {
        Arc::new(self)
    }
}

impl FactSource for MockFactSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self, entity: &EntityRef) -> Option<SupertypeFact> {
        self.facts.get(entity).cloned()
    }
}

pub fn collector(sources: Vec<MockFactSource>) -> FactCollector {
    FactCollector::new(sources.into_iter().map(MockFactSource::into_arc).collect())
}

pub fn refs(names: &[&str]) -> Vec<EntityRef> {
    names.iter().map(|n| EntityRef::from(*n)).collect()
}
