//! Fact collection
//!
//! Walks the supertype closure of the documented entities in every `FactSource`
//! and turns the child -> supertype answers into parent -> children facts.

use docscope_api::models::{EntityKind, EntityRef, InheritanceFact, SourceFacts, SupertypeFact};
use docscope_api::source::FactSource;
use indexmap::{IndexMap, IndexSet};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, info};

pub struct FactCollector {
    sources: Vec<Arc<dyn FactSource>>,
}

impl FactCollector {
    pub fn new(sources: Vec<Arc<dyn FactSource>>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[Arc<dyn FactSource>] {
        &self.sources
    }

    /// Describe every entity reachable from `seeds` through supertype links.
    ///
    /// Each source is walked independently and asked about each entity at most once.
    /// Results keep source order, and within a source the BFS discovery order.
    pub fn collect<I>(&self, seeds: I) -> Vec<SourceFacts>
    where
        I: IntoIterator<Item = EntityRef>,
    {
        let seeds: Vec<EntityRef> = seeds.into_iter().collect();
        self.sources
            .iter()
            .map(|source| {
                let facts = walk_supertypes(source.as_ref(), &seeds);
                info!(
                    source = source.name(),
                    seeds = seeds.len(),
                    facts = facts.len(),
                    "collected supertype facts"
                );
                SourceFacts {
                    name: source.name().to_string(),
                    facts,
                }
            })
            .collect()
    }
}

fn walk_supertypes(source: &dyn FactSource, seeds: &[EntityRef]) -> Vec<SupertypeFact> {
    let mut visited: HashSet<EntityRef> = HashSet::new();
    let mut queue: VecDeque<EntityRef> = VecDeque::new();
    let mut facts = Vec::new();

    for seed in seeds {
        if visited.insert(seed.clone()) {
            queue.push_back(seed.clone());
        }
    }

    while let Some(current) = queue.pop_front() {
        let Some(fact) = source.describe(&current) else {
            debug!(source = source.name(), entity = %current, "entity not described");
            continue;
        };
        for sup in &fact.supertypes {
            if visited.insert(sup.clone()) {
                queue.push_back(sup.clone());
            }
        }
        facts.push(fact);
    }

    facts
}

/// Invert one source's supertype facts into parent -> children facts.
///
/// Every entity that is described or mentioned as a supertype gets exactly one
/// fact. `interfaces` holds the entity's direct supertypes that this same source
/// tags as interfaces. Supertypes another source tags as interfaces are linked by
/// `GraphMerger::build` once the kinds are merged.
pub fn invert(source: &SourceFacts) -> Vec<InheritanceFact> {
    let mut kinds: IndexMap<&EntityRef, EntityKind> = IndexMap::new();
    let mut supertypes: IndexMap<&EntityRef, IndexSet<&EntityRef>> = IndexMap::new();
    let mut children: IndexMap<&EntityRef, IndexSet<&EntityRef>> = IndexMap::new();

    for fact in &source.facts {
        let kind = kinds.entry(&fact.entity).or_default();
        *kind = kind.merge(fact.kind);
        children.entry(&fact.entity).or_default();
        let own = supertypes.entry(&fact.entity).or_default();
        for sup in &fact.supertypes {
            own.insert(sup);
            children.entry(sup).or_default().insert(&fact.entity);
        }
    }

    children
        .into_iter()
        .map(|(entity, subs)| {
            let kind = kinds.get(entity).copied().unwrap_or_default();
            let interfaces = supertypes
                .get(entity)
                .into_iter()
                .flatten()
                .filter(|sup| kinds.get(*sup).is_some_and(|k| k.is_interface()))
                .map(|sup| (*sup).clone());
            InheritanceFact::new(entity.clone(), kind)
                .with_children(subs.into_iter().cloned())
                .with_interfaces(interfaces)
        })
        .collect()
}
