//! Fact merging
//!
//! `GraphMerger` folds any number of `InheritanceFact`s into a `MergedGraph`.
//! Repeated sightings of an entity are combined, never replaced:
//!
//! - children: union, deduplicated by `EntityRef`
//! - interfaces: union, plus every parent whose merged kind is interface
//! - kind: interface if any sighting says so
//!
//! Every rule is commutative and idempotent, so the order in which the two symbol
//! sources (or repeated passes of one source) arrive does not matter.

use super::graph::{EntityEntry, MergedGraph, MergedGraphInner, SubtypeEdge};
use docscope_api::models::{EntityRef, InheritanceFact};
use petgraph::stable_graph::NodeIndex;
use tracing::{debug, trace};

/// Mutable graph builder
#[derive(Default)]
pub struct GraphMerger {
    inner: MergedGraphInner,
}

impl GraphMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `facts` into a fresh graph.
    pub fn merge<I>(facts: I) -> MergedGraph
    where
        I: IntoIterator<Item = InheritanceFact>,
    {
        let mut merger = Self::new();
        for fact in facts {
            merger.add_fact(fact);
        }
        merger.build()
    }

    /// Merge one fact.
    ///
    /// Every child mentioned by the fact becomes addressable in the graph even if no
    /// fact about the child itself ever arrives.
    pub fn add_fact(&mut self, fact: InheritanceFact) {
        let InheritanceFact {
            entity,
            children,
            interfaces,
            kind,
        } = fact;

        trace!(
            entity = %entity,
            children = children.len(),
            interfaces = interfaces.len(),
            %kind,
            "merging fact"
        );

        let idx = self.ensure_node(&entity);
        if let Some(entry) = self.inner.topology.node_weight_mut(idx) {
            entry.kind = entry.kind.merge(kind);
            entry.interfaces.extend(interfaces);
        }

        for child in children {
            let child_idx = self.ensure_node(&child);
            self.add_edge(idx, child_idx);
        }
    }

    fn ensure_node(&mut self, entity: &EntityRef) -> NodeIndex {
        if let Some(&idx) = self.inner.ref_index.get(entity) {
            return idx;
        }
        let idx = self
            .inner
            .topology
            .add_node(EntityEntry::new(entity.clone()));
        self.inner.ref_index.insert(entity.clone(), idx);
        idx
    }

    fn add_edge(&mut self, parent: NodeIndex, child: NodeIndex) {
        // Duplicate children collapse onto the existing edge
        if self.inner.topology.find_edge(parent, child).is_none() {
            self.inner.topology.add_edge(parent, child, SubtypeEdge);
        }
    }

    /// Build the read-only graph
    pub fn build(mut self) -> MergedGraph {
        self.link_interfaces();
        debug!(
            entities = self.inner.topology.node_count(),
            edges = self.inner.topology.edge_count(),
            "merged inheritance graph"
        );
        MergedGraph::from_inner(self.inner)
    }

    /// Record each interface parent on its child.
    ///
    /// Runs on the merged kinds, so a parent tagged as interface by one source counts
    /// even when the source describing the child never said so.
    fn link_interfaces(&mut self) {
        let topology = &mut self.inner.topology;
        let links: Vec<(NodeIndex, EntityRef)> = topology
            .edge_indices()
            .filter_map(|edge| topology.edge_endpoints(edge))
            .filter_map(|(parent, child)| {
                let entry = topology.node_weight(parent)?;
                entry
                    .kind
                    .is_interface()
                    .then(|| (child, entry.entity.clone()))
            })
            .collect();

        for (child, interface) in links {
            if let Some(entry) = topology.node_weight_mut(child) {
                entry.interfaces.insert(interface);
            }
        }
    }
}
