use super::entity::{EntityKind, EntityRef};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// One entity's position in an inheritance tree.
///
/// Equality and hashing look at `entity` only. The same entity is discovered several
/// times with differently populated `children`, and all sightings must collapse to one
/// entry in sets and maps.
///
/// Cloning and dropping walk the tree with an explicit stack, so deep hierarchies
/// never grow the call stack.
#[derive(Serialize, Deserialize, Debug, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InheritanceNode {
    pub entity: EntityRef,
    #[serde(default)]
    pub children: Vec<InheritanceNode>,
    /// Direct interface supertypes of this entity.
    #[serde(default)]
    pub interfaces: Vec<EntityRef>,
    #[serde(default)]
    pub kind: EntityKind,
}

impl InheritanceNode {
    pub fn new(entity: impl Into<EntityRef>, kind: EntityKind) -> Self {
        Self {
            entity: entity.into(),
            children: Vec::new(),
            interfaces: Vec::new(),
            kind,
        }
    }

    pub fn is_interface(&self) -> bool {
        self.kind.is_interface()
    }

    /// Copy of this node with `children` replaced.
    pub fn with_children(&self, children: Vec<InheritanceNode>) -> Self {
        Self {
            entity: self.entity.clone(),
            children,
            interfaces: self.interfaces.clone(),
            kind: self.kind,
        }
    }

    /// Pre-order walk over this node and all of its descendants.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Number of tree positions, counting repeated entities once per position.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// First child carrying `entity`, if any.
    pub fn child(&self, entity: &EntityRef) -> Option<&InheritanceNode> {
        self.children.iter().find(|c| &c.entity == entity)
    }

    pub fn child_entities(&self) -> Vec<&EntityRef> {
        self.children.iter().map(|c| &c.entity).collect()
    }
}

impl Clone for InheritanceNode {
    fn clone(&self) -> Self {
        // Post-order: a frame is finished once all of its children are copied
        let mut stack: Vec<(&InheritanceNode, Vec<InheritanceNode>)> = vec![(self, Vec::new())];
        let mut copied = None;

        while let Some((node, built)) = stack.last_mut() {
            let node: &InheritanceNode = *node;
            if let Some(child) = node.children.get(built.len()) {
                stack.push((child, Vec::with_capacity(child.children.len())));
                continue;
            }
            if let Some((node, built)) = stack.pop() {
                let copy = node.with_children(built);
                match stack.last_mut() {
                    Some((_, siblings)) => siblings.push(copy),
                    None => copied = Some(copy),
                }
            }
        }

        copied.unwrap_or_else(|| self.with_children(Vec::new()))
    }
}

impl Drop for InheritanceNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl PartialEq for InheritanceNode {
    fn eq(&self, other: &Self) -> bool {
        self.entity == other.entity
    }
}

impl Eq for InheritanceNode {}

impl Hash for InheritanceNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entity.hash(state);
    }
}

pub struct Iter<'a> {
    stack: Vec<&'a InheritanceNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a InheritanceNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Class,
    Interface,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::Class => f.write_str("class"),
            ViewKind::Interface => f.write_str("interface"),
        }
    }
}

/// A resolved hierarchy tree together with the view that produced it.
#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
pub struct ViewTree {
    pub kind: ViewKind,
    pub root: InheritanceNode,
}

impl ViewTree {
    pub fn new(kind: ViewKind, root: InheritanceNode) -> Self {
        Self { kind, root }
    }
}
