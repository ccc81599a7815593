//! Tree resolution
//!
//! Rebuilds the merged graph into a single tree below a root entity. A node reached
//! along several paths (diamond inheritance) is copied once per path. The walk uses
//! an explicit frame stack, so hierarchy depth never grows the call stack.

use super::graph::MergedGraph;
use docscope_api::models::{EntityKind, EntityRef, InheritanceNode};
use docscope_api::{HierarchyError, HierarchyResult};
use std::vec;
use tracing::{debug, warn};

pub struct TreeResolver<'g> {
    graph: &'g MergedGraph,
}

struct Frame<'g> {
    entity: &'g EntityRef,
    interfaces: Vec<EntityRef>,
    kind: EntityKind,
    pending: vec::IntoIter<&'g EntityRef>,
    built: Vec<InheritanceNode>,
}

impl Frame<'_> {
    fn into_node(self) -> InheritanceNode {
        InheritanceNode {
            entity: self.entity.clone(),
            children: self.built,
            interfaces: self.interfaces,
            kind: self.kind,
        }
    }
}

impl<'g> TreeResolver<'g> {
    pub fn new(graph: &'g MergedGraph) -> Self {
        Self { graph }
    }

    /// Resolve the tree rooted at `root`.
    ///
    /// Fails with `Resolution` when the root is unknown and with `CyclicHierarchy`
    /// when an entity turns up among its own descendants. No partial tree is returned.
    pub fn resolve(&self, root: &EntityRef) -> HierarchyResult<InheritanceNode> {
        let Some(root_entry) = self.graph.entry(root) else {
            warn!(root = %root, "root entity missing from merged graph");
            return Err(HierarchyError::Resolution { root: root.clone() });
        };

        let mut stack = vec![self.frame(&root_entry.entity)];
        let mut resolved = None;

        while let Some(top) = stack.last_mut() {
            if let Some(child) = top.pending.next() {
                if let Some(pos) = stack.iter().position(|f| f.entity == child) {
                    let mut chain: Vec<EntityRef> =
                        stack[pos..].iter().map(|f| f.entity.clone()).collect();
                    chain.push(child.clone());
                    warn!(root = %root, entity = %child, "cycle in inheritance graph");
                    return Err(HierarchyError::CyclicHierarchy { chain });
                }
                stack.push(self.frame(child));
                continue;
            }

            if let Some(done) = stack.pop() {
                let node = done.into_node();
                match stack.last_mut() {
                    Some(parent) => parent.built.push(node),
                    None => resolved = Some(node),
                }
            }
        }

        let tree = resolved.ok_or_else(|| HierarchyError::Resolution { root: root.clone() })?;
        debug!(root = %root, nodes = tree.node_count(), "resolved inheritance tree");
        Ok(tree)
    }

    fn frame(&self, entity: &'g EntityRef) -> Frame<'g> {
        // Mentioned-but-never-described entities fall back to an empty class entry
        let (interfaces, kind) = match self.graph.entry(entity) {
            Some(entry) => (entry.interfaces.iter().cloned().collect(), entry.kind),
            None => (Vec::new(), EntityKind::Class),
        };
        Frame {
            entity,
            interfaces,
            kind,
            pending: self.graph.children(entity).into_iter(),
            built: Vec::new(),
        }
    }
}
