//! Inheritance hierarchy pipeline
//!
//! collect -> invert -> merge -> resolve -> split. Every call builds its own graph;
//! nothing is cached or shared between pages.

pub mod collect;
pub mod graph;
pub mod merge;
pub mod resolve;
pub mod view;

pub use collect::{FactCollector, invert};
pub use graph::{EntityEntry, MergedGraph};
pub use merge::GraphMerger;
pub use resolve::TreeResolver;
pub use view::ViewSplitter;

use crate::config::HierarchyConfig;
use docscope_api::HierarchyResult;
use docscope_api::models::{EntityRef, SourceFacts, ViewTree};
use tracing::info;

/// Class and interface view of one hierarchy.
#[derive(Debug, Clone)]
pub struct HierarchyViews {
    pub class: ViewTree,
    pub interface: ViewTree,
}

/// Merge the facts of every source into one graph.
pub fn merge_sources(collected: &[SourceFacts]) -> MergedGraph {
    GraphMerger::merge(collected.iter().flat_map(invert))
}

/// Run the whole pipeline for the entities reachable from `seeds`.
pub fn build_views<I>(
    collector: &FactCollector,
    seeds: I,
    config: &HierarchyConfig,
) -> HierarchyResult<HierarchyViews>
where
    I: IntoIterator<Item = EntityRef>,
{
    let collected = collector.collect(seeds);
    let graph = merge_sources(&collected);
    let tree = TreeResolver::new(&graph).resolve(&config.root)?;
    let (class, interface) = ViewSplitter::new(&tree).split()?;

    info!(
        root = %config.root,
        entities = graph.len(),
        class_nodes = class.root.node_count(),
        interface_nodes = interface.root.node_count(),
        "built hierarchy views"
    );
    Ok(HierarchyViews { class, interface })
}
