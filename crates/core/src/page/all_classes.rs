use super::{ContentMap, ContentValue, PageKind, PageNode};

pub const ALL_CLASSES_TITLE: &str = "All Classes";

/// Flat index of every class page.
#[derive(Debug, Clone)]
pub struct AllClassesPage {
    classes: Vec<PageNode>,
}

impl AllClassesPage {
    pub fn new(classes: Vec<PageNode>) -> Self {
        Self { classes }
    }

    /// Collect every class page below `root`.
    pub fn from_root(root: &PageNode) -> Self {
        let mut classes = Vec::new();
        let mut stack = vec![root];
        while let Some(page) = stack.pop() {
            if page.kind == PageKind::Class {
                classes.push(page.clone());
            }
            stack.extend(page.children.iter().rev());
        }
        Self { classes }
    }

    pub fn name(&self) -> &str {
        ALL_CLASSES_TITLE
    }

    pub fn classes(&self) -> &[PageNode] {
        &self.classes
    }

    pub fn content_map(&self) -> ContentMap {
        let mut map = ContentMap::new();
        map.insert("title".to_string(), ContentValue::text(ALL_CLASSES_TITLE));
        map.insert(
            "list".to_string(),
            ContentValue::List(self.classes.iter().map(PageNode::summary).collect()),
        );
        map
    }
}
