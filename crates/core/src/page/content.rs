use super::PageKind;
use docscope_api::models::{EntityRef, InheritanceNode};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Insertion-ordered template payload of a page.
pub type ContentMap = IndexMap<String, ContentValue>;

#[derive(Serialize, Debug, Clone)]
#[serde(untagged)]
pub enum ContentValue {
    Text(String),
    List(Vec<PageSummary>),
    Graph(InheritanceNode),
}

impl ContentValue {
    pub fn text(s: impl Into<String>) -> Self {
        ContentValue::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[PageSummary]> {
        match self {
            ContentValue::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_graph(&self) -> Option<&InheritanceNode> {
        match self {
            ContentValue::Graph(g) => Some(g),
            _ => None,
        }
    }
}

/// Link entry for a child page in a `list` payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct PageSummary {
    pub name: String,
    pub kind: PageKind,
    pub entity: Option<EntityRef>,
}
