//! Class-hierarchy ("tree") page
//!
//! Assembles the template payload of a tree page: its title, the child page list
//! and the class and interface views of the inheritance hierarchy documented
//! below the page tree root.

use super::{ContentMap, ContentValue, PageKind, PageNode};
use crate::config::HierarchyConfig;
use crate::error::{DocscopeError, Result};
use crate::hierarchy::{FactCollector, HierarchyViews, build_views};

pub const ALL_PACKAGES_TITLE: &str = "All packages";

#[derive(Debug, Clone)]
pub struct TreeViewPage {
    name: String,
    packages: Option<Vec<PageNode>>,
    classes: Option<Vec<PageNode>>,
    scope: PageKind,
    views: HierarchyViews,
}

impl TreeViewPage {
    /// Build a tree page listing either `packages` or `classes`.
    ///
    /// `scope` is `Main` for the overview page and `Package` for a package page.
    /// The hierarchy covers every entity documented below `root`.
    pub fn new(
        name: impl Into<String>,
        packages: Option<Vec<PageNode>>,
        classes: Option<Vec<PageNode>>,
        scope: PageKind,
        root: &PageNode,
        collector: &FactCollector,
        config: &HierarchyConfig,
    ) -> Result<Self> {
        let name = name.into();
        validate(&name, &packages, &classes, scope)?;
        let views = build_views(collector, root.documented_entities(), config)?;
        Ok(Self {
            name,
            packages,
            classes,
            scope,
            views,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> PageKind {
        self.scope
    }

    pub fn views(&self) -> &HierarchyViews {
        &self.views
    }

    pub fn title(&self) -> String {
        match self.scope {
            PageKind::Package => format!("{} Class Hierarchy", self.name),
            _ => ALL_PACKAGES_TITLE.to_string(),
        }
    }

    /// Listed child pages, packages first.
    pub fn list(&self) -> impl Iterator<Item = &PageNode> {
        self.packages
            .iter()
            .flatten()
            .chain(self.classes.iter().flatten())
    }

    pub fn content_map(&self) -> ContentMap {
        let mut map = ContentMap::new();
        map.insert("title".to_string(), ContentValue::Text(self.title()));
        map.insert("name".to_string(), ContentValue::text(self.name.as_str()));
        map.insert("kind".to_string(), ContentValue::text(self.scope.as_str()));
        map.insert(
            "list".to_string(),
            ContentValue::List(self.list().map(PageNode::summary).collect()),
        );
        map.insert(
            "classGraph".to_string(),
            ContentValue::Graph(self.views.class.root.clone()),
        );
        map.insert(
            "interfaceGraph".to_string(),
            ContentValue::Graph(self.views.interface.root.clone()),
        );
        map
    }

    /// Copy of this page listing `children` instead; the hierarchy is kept.
    pub fn with_children(&self, name: impl Into<String>, children: Vec<PageNode>) -> Result<Self> {
        let name = name.into();
        let (packages, classes) = partition(children);
        validate(&name, &packages, &classes, self.scope)?;
        Ok(Self {
            name,
            packages,
            classes,
            scope: self.scope,
            views: self.views.clone(),
        })
    }
}

fn validate(
    name: &str,
    packages: &Option<Vec<PageNode>>,
    classes: &Option<Vec<PageNode>>,
    scope: PageKind,
) -> Result<()> {
    if packages.is_some() == classes.is_some() {
        return Err(DocscopeError::InvalidPage(format!(
            "tree page {name} must list either packages or classes"
        )));
    }
    if scope == PageKind::Class {
        return Err(DocscopeError::InvalidPage(format!(
            "tree page {name} cannot be class-scoped"
        )));
    }
    Ok(())
}

fn partition(children: Vec<PageNode>) -> (Option<Vec<PageNode>>, Option<Vec<PageNode>>) {
    let (packages, rest): (Vec<_>, Vec<_>) = children
        .into_iter()
        .partition(|p| p.kind == PageKind::Package);
    let classes: Vec<_> = rest
        .into_iter()
        .filter(|p| p.kind == PageKind::Class)
        .collect();
    (
        Some(packages).filter(|p| !p.is_empty()),
        Some(classes).filter(|c| !c.is_empty()),
    )
}
