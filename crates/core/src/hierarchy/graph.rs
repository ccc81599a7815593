//! Merged inheritance graph
//!
//! The `MergedGraph` is the deduplicated result of every fact sighting collected
//! for one page. Nodes are addressed solely by their `EntityRef`; edges run from a
//! supertype to its direct subtype.

use docscope_api::models::{EntityKind, EntityRef, InheritanceFact};
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use std::collections::{BTreeSet, HashMap};

/// Accumulated knowledge about one entity.
#[derive(Debug, Clone)]
pub struct EntityEntry {
    pub entity: EntityRef,
    pub interfaces: BTreeSet<EntityRef>,
    pub kind: EntityKind,
}

impl EntityEntry {
    pub fn new(entity: EntityRef) -> Self {
        Self {
            entity,
            interfaces: BTreeSet::new(),
            kind: EntityKind::Class,
        }
    }
}

/// Supertype -> subtype edge marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtypeEdge;

#[derive(Debug, Clone, Default)]
pub(crate) struct MergedGraphInner {
    pub topology: StableDiGraph<EntityEntry, SubtypeEdge>,
    pub ref_index: HashMap<EntityRef, NodeIndex>,
}

/// Read-only merged graph, produced by `GraphMerger::build`.
#[derive(Debug, Clone, Default)]
pub struct MergedGraph {
    inner: MergedGraphInner,
}

impl MergedGraph {
    pub(crate) fn from_inner(inner: MergedGraphInner) -> Self {
        Self { inner }
    }

    pub fn topology(&self) -> &StableDiGraph<EntityEntry, SubtypeEdge> {
        &self.inner.topology
    }

    pub fn contains(&self, entity: &EntityRef) -> bool {
        self.inner.ref_index.contains_key(entity)
    }

    pub fn entry(&self, entity: &EntityRef) -> Option<&EntityEntry> {
        let idx = self.inner.ref_index.get(entity)?;
        self.inner.topology.node_weight(*idx)
    }

    /// Direct subtypes of `entity` in ascending `EntityRef` order.
    ///
    /// Empty when the entity is unknown.
    pub fn children(&self, entity: &EntityRef) -> Vec<&EntityRef> {
        let Some(&idx) = self.inner.ref_index.get(entity) else {
            return Vec::new();
        };
        let mut children: Vec<&EntityRef> = self
            .inner
            .topology
            .neighbors_directed(idx, Direction::Outgoing)
            .filter_map(|n| self.inner.topology.node_weight(n))
            .map(|e| &e.entity)
            .collect();
        children.sort();
        children
    }

    /// All known entities in ascending order.
    pub fn entities(&self) -> Vec<&EntityRef> {
        let mut entities: Vec<&EntityRef> = self.inner.ref_index.keys().collect();
        entities.sort();
        entities
    }

    pub fn len(&self) -> usize {
        self.inner.topology.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.inner.topology.edge_count()
    }

    /// Canonical dump of the graph, one fact per entity in ascending order.
    ///
    /// Two graphs with the same content produce identical dumps.
    pub fn to_facts(&self) -> Vec<InheritanceFact> {
        self.entities()
            .into_iter()
            .filter_map(|entity| {
                let entry = self.entry(entity)?;
                Some(InheritanceFact {
                    entity: entity.clone(),
                    children: self.children(entity).into_iter().cloned().collect(),
                    interfaces: entry.interfaces.iter().cloned().collect(),
                    kind: entry.kind,
                })
            })
            .collect()
    }
}
