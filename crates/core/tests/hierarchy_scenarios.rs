mod common;

use common::{MockFactSource, collector, refs};
use docscope_api::HierarchyError;
use docscope_api::models::{EntityRef, InheritanceNode, ViewKind};
use docscope_core::config::HierarchyConfig;
use docscope_core::hierarchy::{TreeResolver, ViewSplitter, build_views, merge_sources};
use std::collections::{HashMap, HashSet};

fn config(root: &str) -> HierarchyConfig {
    HierarchyConfig::default().with_root(root)
}

fn names(node: &InheritanceNode) -> Vec<&str> {
    node.children.iter().map(|c| c.entity.as_str()).collect()
}

fn occurrences(tree: &InheritanceNode) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for node in tree.iter() {
        *counts.entry(node.entity.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Assert no node is its own ancestor, tracking the path explicitly.
fn assert_acyclic(tree: &InheritanceNode) {
    let mut stack: Vec<(&InheritanceNode, Vec<&EntityRef>)> = vec![(tree, Vec::new())];
    while let Some((node, mut path)) = stack.pop() {
        assert!(
            !path.contains(&&node.entity),
            "{} repeats one of its ancestors",
            node.entity
        );
        path.push(&node.entity);
        for child in &node.children {
            stack.push((child, path.clone()));
        }
    }
}

fn scenario_a() -> MockFactSource {
    MockFactSource::new("descriptors")
        .class("Any", &[])
        .class("Base", &["Any"])
        .interface("IFoo", &["Any"])
        .class("Derived", &["Base", "IFoo"])
}

#[test]
fn test_scenario_a_class_and_interface_views() {
    let collector = collector(vec![scenario_a()]);
    let views = build_views(&collector, refs(&["Derived"]), &config("Any")).unwrap();

    let class = &views.class.root;
    assert_eq!(views.class.kind, ViewKind::Class);
    assert_eq!(class.entity.as_str(), "Any");
    assert_eq!(names(class), vec!["Base"]);
    assert_eq!(names(&class.children[0]), vec!["Derived"]);
    assert!(class.children[0].children[0].children.is_empty());

    let interface = &views.interface.root;
    assert_eq!(views.interface.kind, ViewKind::Interface);
    assert_eq!(interface.entity.as_str(), "Any");
    assert_eq!(names(interface), vec!["IFoo"]);
    assert!(interface.children[0].children.is_empty());
}

#[test]
fn test_scenario_a_carries_interfaces_of_each_entity() {
    let collector = collector(vec![scenario_a()]);
    let views = build_views(&collector, refs(&["Derived"]), &config("Any")).unwrap();

    let derived = views
        .class
        .root
        .iter()
        .find(|n| n.entity.as_str() == "Derived")
        .unwrap();
    assert_eq!(derived.interfaces, refs(&["IFoo"]));
}

#[test]
fn test_scenario_b_diamond_is_copied_per_path() {
    let source = MockFactSource::new("descriptors")
        .class("A", &[])
        .class("B", &["A"])
        .class("C", &["A"])
        .class("D", &["B", "C"]);
    let views = build_views(&collector(vec![source]), refs(&["D"]), &config("A")).unwrap();

    let root = &views.class.root;
    assert_eq!(names(root), vec!["B", "C"]);
    assert_eq!(names(&root.children[0]), vec!["D"]);
    assert_eq!(names(&root.children[1]), vec!["D"]);

    let d_under_b: *const InheritanceNode = &root.children[0].children[0];
    let d_under_c: *const InheritanceNode = &root.children[1].children[0];
    assert_ne!(d_under_b, d_under_c);
    assert_eq!(root.children[0].children[0], root.children[1].children[0]);
}

#[test]
fn test_scenario_c_missing_root() {
    let collector = collector(vec![scenario_a()]);
    let err = build_views(&collector, refs(&["Derived"]), &config("Nothing")).unwrap_err();
    assert!(matches!(err, HierarchyError::Resolution { root } if root.as_str() == "Nothing"));
}

#[test]
fn test_scenario_d_cycle() {
    let source = MockFactSource::new("descriptors")
        .class("X", &["Y"])
        .class("Y", &["X"]);
    let err = build_views(&collector(vec![source]), refs(&["X"]), &config("X")).unwrap_err();
    match err {
        HierarchyError::CyclicHierarchy { chain } => assert_eq!(chain, refs(&["X", "Y", "X"])),
        other => panic!("expected a cycle, got {other}"),
    }
}

#[test]
fn test_resolved_tree_has_no_aliasing() {
    let source = MockFactSource::new("descriptors")
        .class("A", &[])
        .class("B", &["A"])
        .class("C", &["A"])
        .class("D", &["B", "C"])
        .class("E", &["D"]);
    let collected = collector(vec![source]).collect(refs(&["E"]));
    let graph = merge_sources(&collected);
    let tree = TreeResolver::new(&graph).resolve(&"A".into()).unwrap();

    let addresses: HashSet<*const InheritanceNode> =
        tree.iter().map(|n| n as *const InheritanceNode).collect();
    assert_eq!(addresses.len(), tree.node_count());
    assert_eq!(occurrences(&tree)["E"], 2);
    assert_acyclic(&tree);
}

#[test]
fn test_views_are_complete() {
    let source = MockFactSource::new("descriptors")
        .class("Any", &[])
        .class("Base", &["Any"])
        .class("Mid", &["Base", "IFoo"])
        .class("Leaf", &["Mid", "IBar"])
        .class("Solo", &["IFoo"])
        .class("Other", &["Any", "IBaz"])
        .interface("IFoo", &["Any"])
        .interface("IBar", &["IFoo"])
        .interface("IBaz", &["Any"]);
    let collected = collector(vec![source]).collect(refs(&["Leaf", "Solo", "Other"]));
    let graph = merge_sources(&collected);
    let tree = TreeResolver::new(&graph).resolve(&"Any".into()).unwrap();
    assert_acyclic(&tree);

    let (class, interface) = ViewSplitter::new(&tree).split().unwrap();

    let class_counts = occurrences(&class.root);
    for entity in ["Any", "Base", "Mid", "Leaf", "Solo", "Other"] {
        assert_eq!(class_counts.get(entity), Some(&1), "class {entity}");
    }
    assert!(class.root.iter().all(|n| !n.is_interface()));
    assert_eq!(names(&class.root), vec!["Base", "Solo", "Other"]);

    let interface_counts = occurrences(&interface.root);
    for entity in ["IFoo", "IBar", "IBaz"] {
        assert_eq!(interface_counts.get(entity), Some(&1), "interface {entity}");
    }
    assert!(interface.root.children.iter().all(|n| n.is_interface()));
    assert_eq!(names(&interface.root), vec!["IBaz", "IFoo"]);
    assert_eq!(names(&interface.root.children[1]), vec!["IBar"]);
}

#[test]
fn test_disagreeing_sources_are_merged() {
    // The PSI source misses Derived's interface and mistakes IFoo for a class
    let descriptors = MockFactSource::new("descriptors")
        .class("Any", &[])
        .class("Base", &["Any"])
        .interface("IFoo", &["Any"])
        .class("Derived", &["Base", "IFoo"]);
    let psi = MockFactSource::new("psi")
        .class("Any", &[])
        .class("Base", &["Any"])
        .class("IFoo", &["Any"])
        .class("Derived", &["Base"])
        .class("Extra", &["Base"]);

    let views = build_views(
        &collector(vec![psi, descriptors]),
        refs(&["Derived", "Extra"]),
        &config("Any"),
    )
    .unwrap();

    assert_eq!(names(&views.class.root), vec!["Base"]);
    assert_eq!(names(&views.class.root.children[0]), vec!["Derived", "Extra"]);
    assert_eq!(names(&views.interface.root), vec!["IFoo"]);
}

#[test]
fn test_only_one_source_populated() {
    let views = build_views(
        &collector(vec![MockFactSource::new("empty"), scenario_a()]),
        refs(&["Derived"]),
        &config("Any"),
    )
    .unwrap();
    assert_eq!(names(&views.class.root), vec!["Base"]);
}

#[test]
fn test_deep_class_chain_builds_both_views() {
    let mut source = MockFactSource::new("descriptors").class("T0", &[]);
    for i in 1..=20_000 {
        let parent = format!("T{}", i - 1);
        source = source.class(&format!("T{i}"), &[parent.as_str()]);
    }

    let views = build_views(
        &collector(vec![source]),
        refs(&["T20000"]),
        &config("T0"),
    )
    .unwrap();

    let mut depth = 0;
    let mut node = &views.class.root;
    while let Some(next) = node.children.first() {
        assert_eq!(node.children.len(), 1);
        depth += 1;
        node = next;
    }
    assert_eq!(depth, 20_000);
    assert_eq!(node.entity.as_str(), "T20000");
    assert!(views.interface.root.children.is_empty());

    let copy = views.clone();
    assert_eq!(copy.class.root.node_count(), 20_001);
}

#[test]
fn test_interface_kind_from_another_source_reaches_its_implementors() {
    // "psi" describes Derived but does not know IFoo; "descriptors" only knows IFoo
    let psi = MockFactSource::new("psi")
        .class("Any", &[])
        .class("Base", &["Any"])
        .class("Derived", &["Base", "IFoo"]);
    let descriptors = MockFactSource::new("descriptors").interface("IFoo", &["Any"]);

    for sources in [
        vec![psi.clone(), descriptors.clone()],
        vec![descriptors.clone(), psi.clone()],
    ] {
        let collector = collector(sources);
        let collected = collector.collect(refs(&["Derived", "IFoo"]));
        let graph = merge_sources(&collected);

        let derived = graph.entry(&"Derived".into()).unwrap();
        assert_eq!(
            derived.interfaces.iter().cloned().collect::<Vec<_>>(),
            refs(&["IFoo"])
        );

        let views =
            build_views(&collector, refs(&["Derived", "IFoo"]), &config("Any")).unwrap();
        let base = views.class.root.child(&"Base".into()).unwrap();
        assert_eq!(base.child(&"Derived".into()).unwrap().interfaces, refs(&["IFoo"]));
        assert_eq!(names(&views.interface.root), vec!["IFoo"]);
    }
}
