//! Documentation page nodes consumed by the template layer.

pub mod all_classes;
pub mod content;
pub mod tree_view;

pub use all_classes::AllClassesPage;
pub use content::{ContentMap, ContentValue, PageSummary};
pub use tree_view::TreeViewPage;

use docscope_api::models::EntityRef;
use indexmap::IndexSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Main,
    Package,
    Class,
}

impl PageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::Main => "main",
            PageKind::Package => "package",
            PageKind::Class => "class",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
pub struct PageNode {
    pub name: String,
    pub kind: PageKind,
    /// Entities this page is addressable by.
    #[serde(default)]
    pub entities: Vec<EntityRef>,
    /// The class or interface documented on this page.
    #[serde(default)]
    pub documentable: Option<EntityRef>,
    #[serde(default)]
    pub children: Vec<PageNode>,
}

impl PageNode {
    pub fn new(name: impl Into<String>, kind: PageKind) -> Self {
        Self {
            name: name.into(),
            kind,
            entities: Vec::new(),
            documentable: None,
            children: Vec::new(),
        }
    }

    /// A class page documenting `entity`.
    pub fn class(entity: impl Into<EntityRef>) -> Self {
        let entity = entity.into();
        let mut page = Self::new(entity.class_name(), PageKind::Class);
        page.entities.push(entity.clone());
        page.documentable = Some(entity);
        page
    }

    /// Copy of this page with `children` replaced.
    pub fn with_children(&self, children: Vec<PageNode>) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            entities: self.entities.clone(),
            documentable: self.documentable.clone(),
            children,
        }
    }

    pub fn content_map(&self) -> ContentMap {
        let mut map = ContentMap::new();
        map.insert("kind".to_string(), ContentValue::text(self.kind.as_str()));
        map
    }

    pub fn summary(&self) -> PageSummary {
        PageSummary {
            name: self.name.clone(),
            kind: self.kind,
            entity: self.documentable.clone(),
        }
    }

    /// Every entity documented in this page tree, in pre-order, first sighting wins.
    pub fn documented_entities(&self) -> Vec<EntityRef> {
        let mut seen = IndexSet::new();
        let mut stack = vec![self];
        while let Some(page) = stack.pop() {
            if let Some(entity) = &page.documentable {
                seen.insert(entity.clone());
            }
            stack.extend(page.children.iter().rev());
        }
        seen.into_iter().collect()
    }
}
