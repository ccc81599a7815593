//! Class and interface views
//!
//! Both views are structural folds over a resolved tree.
//!
//! - Class view: interface nodes disappear and their class descendants move up to
//!   the nearest class ancestor. A class that already sits under a class parent is
//!   not promoted a second time through an interface it implements.
//! - Interface view: class nodes disappear. Interfaces keep only interface children;
//!   an interface hanging below a class is promoted unless it already sits under an
//!   interface parent. The result is anchored by a node carrying the root's identity.

use docscope_api::models::{EntityRef, InheritanceNode, ViewKind, ViewTree};
use docscope_api::{HierarchyError, HierarchyResult};
use indexmap::IndexSet;
use std::collections::HashSet;
use tracing::debug;

pub struct ViewSplitter<'t> {
    tree: &'t InheritanceNode,
    /// Entities placed directly below some class node.
    class_parented: HashSet<&'t EntityRef>,
    /// Entities placed directly below some interface node.
    interface_parented: HashSet<&'t EntityRef>,
}

impl<'t> ViewSplitter<'t> {
    pub fn new(tree: &'t InheritanceNode) -> Self {
        let mut class_parented = HashSet::new();
        let mut interface_parented = HashSet::new();
        for node in tree.iter() {
            let parented = if node.is_interface() {
                &mut interface_parented
            } else {
                &mut class_parented
            };
            parented.extend(node.children.iter().map(|c| &c.entity));
        }
        Self {
            tree,
            class_parented,
            interface_parented,
        }
    }

    /// Compute both views.
    pub fn split(&self) -> HierarchyResult<(ViewTree, ViewTree)> {
        Ok((self.class_view()?, self.interface_view()?))
    }

    pub fn class_view(&self) -> HierarchyResult<ViewTree> {
        self.ensure_class_root(ViewKind::Class)?;

        let mut top = self.class_fold();
        if top.len() != 1 {
            return Err(HierarchyError::MalformedHierarchy {
                view: ViewKind::Class,
                detail: format!("expected a single top-level class, found {}", top.len()),
            });
        }
        let root = top.remove(0);
        debug!(root = %root.entity, nodes = root.node_count(), "class view");
        Ok(ViewTree::new(ViewKind::Class, root))
    }

    /// The interface view is always anchored by the root entity; its children are
    /// the top-level interfaces. Without interfaces the anchor has no children.
    pub fn interface_view(&self) -> HierarchyResult<ViewTree> {
        self.ensure_class_root(ViewKind::Interface)?;

        let top = dedup(self.interface_fold());
        let root = self.tree.with_children(top);
        debug!(root = %root.entity, nodes = root.node_count(), "interface view");
        Ok(ViewTree::new(ViewKind::Interface, root))
    }

    fn ensure_class_root(&self, view: ViewKind) -> HierarchyResult<()> {
        if self.tree.is_interface() {
            return Err(HierarchyError::MalformedHierarchy {
                view,
                detail: format!("root {} is an interface", self.tree.entity),
            });
        }
        Ok(())
    }

    fn class_fold(&self) -> Vec<InheritanceNode> {
        self.fold(ViewKind::Class)
    }

    fn interface_fold(&self) -> Vec<InheritanceNode> {
        self.fold(ViewKind::Interface)
    }

    /// Post-order fold of the whole tree into the top-level nodes of `view`.
    ///
    /// A node of the view's kind keeps its folded children. Any other node vanishes
    /// and hands its folded children up to its parent.
    fn fold(&self, view: ViewKind) -> Vec<InheritanceNode> {
        let mut stack = vec![FoldFrame::new(self.tree)];
        let mut top = Vec::new();

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            if let Some(child) = node.children.get(frame.next) {
                frame.next += 1;
                if self.descends(view, node, child) {
                    stack.push(FoldFrame::new(child));
                }
                continue;
            }

            if let Some(done) = stack.pop() {
                let folded = if belongs(view, done.node) {
                    vec![done.node.with_children(dedup(done.folded))]
                } else {
                    done.folded
                };
                match stack.last_mut() {
                    Some(parent) => parent.folded.extend(folded),
                    None => top = folded,
                }
            }
        }

        top
    }

    /// Whether `child` contributes to the fold of `parent`.
    fn descends(
        &self,
        view: ViewKind,
        parent: &InheritanceNode,
        child: &InheritanceNode,
    ) -> bool {
        match (view, parent.is_interface()) {
            // Only classes without a class parent of their own are promoted
            (ViewKind::Class, true) => {
                child.is_interface() || !self.class_parented.contains(&child.entity)
            }
            (ViewKind::Class, false) => true,
            (ViewKind::Interface, true) => child.is_interface(),
            (ViewKind::Interface, false) => {
                !child.is_interface() || !self.interface_parented.contains(&child.entity)
            }
        }
    }
}

struct FoldFrame<'t> {
    node: &'t InheritanceNode,
    next: usize,
    folded: Vec<InheritanceNode>,
}

impl<'t> FoldFrame<'t> {
    fn new(node: &'t InheritanceNode) -> Self {
        Self {
            node,
            next: 0,
            folded: Vec::new(),
        }
    }
}

fn belongs(view: ViewKind, node: &InheritanceNode) -> bool {
    match view {
        ViewKind::Class => !node.is_interface(),
        ViewKind::Interface => node.is_interface(),
    }
}

/// Drop repeated siblings, keeping the first sighting of each entity.
fn dedup(nodes: Vec<InheritanceNode>) -> Vec<InheritanceNode> {
    nodes
        .into_iter()
        .collect::<IndexSet<InheritanceNode>>()
        .into_iter()
        .collect()
}
