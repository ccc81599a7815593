use docscope_api::models::{EntityKind, EntityRef, InheritanceFact, InheritanceNode};
use docscope_core::hierarchy::GraphMerger;
use std::collections::HashMap;

fn class(name: &str) -> InheritanceFact {
    InheritanceFact::new(name, EntityKind::Class)
}

fn interface(name: &str) -> InheritanceFact {
    InheritanceFact::new(name, EntityKind::Interface)
}

/// Overlapping sightings as two sources would report them.
fn sightings() -> Vec<InheritanceFact> {
    vec![
        class("Any").with_children(["Base", "IFoo"]),
        class("Any").with_children(["Base"]),
        class("Base").with_children(["Derived"]),
        class("IFoo").with_children(["Derived"]),
        interface("IFoo"),
        class("Derived").with_interfaces(["IFoo"]),
        class("Base").with_children(["Other"]),
    ]
}

/// Every permutation of `items` (Heap's algorithm).
fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn heap<T: Clone>(k: usize, items: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        heap(k - 1, items, out);
        for i in 0..k - 1 {
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
            heap(k - 1, items, out);
        }
    }

    let mut items = items.to_vec();
    let mut out = Vec::new();
    heap(items.len(), &mut items, &mut out);
    out
}

#[test]
fn test_merge_is_commutative() {
    let facts = sightings();
    let expected = GraphMerger::merge(facts.clone()).to_facts();

    let all = permutations(&facts);
    assert_eq!(all.len(), 5040);
    for order in all {
        assert_eq!(GraphMerger::merge(order).to_facts(), expected);
    }
}

#[test]
fn test_merge_is_idempotent() {
    let facts = sightings();
    let once = GraphMerger::merge(facts.clone()).to_facts();
    let twice = GraphMerger::merge(facts.iter().chain(facts.iter()).cloned()).to_facts();
    assert_eq!(once, twice);
}

#[test]
fn test_merged_content() {
    let graph = GraphMerger::merge(sightings());
    let dump: HashMap<String, InheritanceFact> = graph
        .to_facts()
        .into_iter()
        .map(|f| (f.entity.to_string(), f))
        .collect();

    assert_eq!(graph.len(), 5);
    assert_eq!(
        dump["Any"].children,
        vec![EntityRef::from("Base"), EntityRef::from("IFoo")]
    );
    assert_eq!(
        dump["Base"].children,
        vec![EntityRef::from("Derived"), EntityRef::from("Other")]
    );
    assert_eq!(dump["IFoo"].kind, EntityKind::Interface);
    assert_eq!(dump["Derived"].interfaces, vec![EntityRef::from("IFoo")]);
    assert_eq!(dump["Other"].kind, EntityKind::Class);
}

#[test]
fn test_nodes_compare_by_identity_only() {
    let sparse = InheritanceNode::new("Base", EntityKind::Class);
    let full = InheritanceNode::new("Base", EntityKind::Class)
        .with_children(vec![InheritanceNode::new("Derived", EntityKind::Class)]);
    assert_eq!(sparse, full);

    let mut by_node: HashMap<InheritanceNode, usize> = HashMap::new();
    *by_node.entry(sparse).or_default() += 1;
    *by_node.entry(full).or_default() += 1;
    assert_eq!(by_node.len(), 1);
    assert_eq!(by_node.values().copied().sum::<usize>(), 2);
}
