/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use graph_walks::adjacency::*;
use graph_walks::algo::traversal::Traversal;
use graph_walks::algo::visits::*;
use graph_walks::walk::Walk;
use serde_json::{json, Value};
use std::convert::Infallible;
use unwrap_infallible::UnwrapInfallible;
use webgraph::prelude::VecGraph;

#[test]
fn test_list_insertion_order() {
    let list = AdjacencyList::from_arcs([(0, 2, 'b'), (0, 1, 'a'), (1, 3, 'c')]);
    assert_eq!(list.num_arcs(), 3);
    assert_eq!(list.arcs(&0), vec![(2, 'b'), (1, 'a')]);

    let walks = Traversal::pre_order(0, list.clone())
        .into_iter()
        .map(|walk| walk.map(|walk| walk.labels().copied().collect::<String>()))
        .collect::<Result<Vec<_>, _>>()
        .unwrap_infallible();
    assert_eq!(walks, vec!["", "b", "a", "ac"]);
}

#[test]
fn test_list_clones_share_arcs() -> Result<()> {
    let list = AdjacencyList::from_arcs([(0, 1, ()), (0, 2, ())]);
    let clone = list.clone();
    let mut visit = PreOrder::new(0, &clone);
    visit.advance()?;
    visit.advance()?;
    visit.remove()?;
    assert_eq!(list.arcs(&0), vec![(2, ())]);
    assert_eq!(list.num_arcs(), 1);
    Ok(())
}

#[test]
fn test_list_successors_remove() {
    let list = AdjacencyList::from_arcs([(0, 1, ()), (0, 2, ()), (0, 3, ())]);
    let mut successors = list.successors(&0).unwrap_infallible();
    assert_eq!(successors.remove(), Err(Unsupported::Remove));
    let first = successors.next_walk().map(UnwrapInfallible::unwrap_infallible);
    assert_eq!(first.map(|walk| *walk.to()), Some(1));
    assert_eq!(successors.remove(), Ok(()));
    assert_eq!(successors.remove(), Err(Unsupported::Remove));
    let second = successors.next_walk().map(UnwrapInfallible::unwrap_infallible);
    assert_eq!(second.map(|walk| *walk.to()), Some(2));
    assert_eq!(list.arcs(&0), vec![(2, ()), (3, ())]);
}

#[test]
fn test_list_successors_of_same_vertex() {
    let list = AdjacencyList::from_arcs([(0, 1, ()), (0, 2, ()), (0, 3, ())]);
    let mut first = list.successors(&0).unwrap_infallible();
    let mut second = list.successors(&0).unwrap_infallible();
    let next = |successors: &mut ListSuccessors<i32, ()>| {
        successors
            .next_walk()
            .map(|walk| *walk.unwrap_infallible().to())
    };

    assert_eq!(next(&mut first), Some(1));
    assert_eq!(next(&mut second), Some(1));
    assert_eq!(first.remove(), Ok(()));
    // The arc is already gone
    assert_eq!(second.remove(), Err(Unsupported::Remove));

    assert_eq!(next(&mut second), Some(2));
    assert_eq!(next(&mut first), Some(2));
    assert_eq!(next(&mut second), Some(3));
    assert_eq!(first.remove(), Ok(()));
    assert_eq!(next(&mut first), Some(3));
    assert_eq!(list.arcs(&0), vec![(3, ())]);
}

#[test]
fn test_list_arcs_added_during_enumeration() {
    let list = AdjacencyList::from_arcs([(0, 1, ())]);
    let mut successors = list.successors(&0).unwrap_infallible();
    assert!(successors.next_walk().is_some());
    list.add_arc(0, 2, ());
    let walk = successors.next_walk().map(UnwrapInfallible::unwrap_infallible);
    assert_eq!(walk.map(|walk| *walk.to()), Some(2));
    assert!(successors.next_walk().is_none());
}

#[test]
fn test_from_fn_is_lazy() {
    let adjacency = from_fn(|&v: &u32| -> Vec<Walk<u32, ()>> {
        assert!(v < 2, "successors of {v} should not be requested");
        vec![Walk::step(v, v + 1, ())]
    });
    let walks = PreOrder::new(0, &adjacency)
        .take(3)
        .map(|walk| *walk.unwrap_infallible().to())
        .collect::<Vec<_>>();
    assert_eq!(walks, vec![0, 1, 2]);
}

#[test]
fn test_from_vertices() {
    let adjacency = from_vertices(|&v: &u32| {
        if v < 4 {
            vec![2 * v + 1, 2 * v + 2]
        } else {
            vec![]
        }
    });
    let leaves = Leaves::new(0, &adjacency)
        .map(|walk| *walk.unwrap_infallible().to())
        .collect::<Vec<_>>();
    assert_eq!(leaves, vec![7, 8, 4, 5, 6]);
}

#[test]
fn test_unsupported_remove() -> Result<()> {
    let adjacency = from_vertices(|&v: &u32| (v < 3).then_some(v + 1));
    let mut visit = PreOrder::new(0, &adjacency);
    visit.advance()?;
    visit.advance()?;
    assert_eq!(
        visit.remove(),
        Err(TraversalError::Unsupported(Unsupported::Remove))
    );
    Ok(())
}

#[test]
fn test_graph() {
    // A = 0, B = 1, C = 2, D = 3, E = 4, G = 5
    let graph = VecGraph::from_arcs([(0, 1), (0, 2), (1, 3), (1, 4), (2, 3), (3, 5)]);
    let adjacency = GraphAdjacency::new(graph);
    let order = |walks: &mut dyn Iterator<Item = Result<Walk<usize, ()>, Infallible>>| {
        walks
            .map(|walk| *walk.unwrap_infallible().to())
            .collect::<Vec<_>>()
    };
    assert_eq!(
        order(&mut PreOrder::new(0, &adjacency)),
        vec![0, 1, 3, 5, 4, 2, 3, 5]
    );
    assert_eq!(
        order(&mut PostOrder::new(0, &adjacency)),
        vec![5, 3, 4, 1, 5, 3, 2, 0]
    );
    assert_eq!(
        order(&mut BreadthFirst::new(0, &adjacency)),
        vec![0, 1, 2, 3, 4, 3, 5, 5]
    );
    assert_eq!(order(&mut Leaves::new(0, &adjacency)), vec![5, 4, 5]);
}

#[test]
fn test_json_pre_order() {
    let document = json!({"a": [true, {"b": null}], "c": "d"});
    let pointers = PreOrder::new(&document, &JsonAdjacency)
        .map(|walk| json_pointer(&walk.unwrap_infallible()))
        .collect::<Vec<_>>();
    assert_eq!(pointers, vec!["", "/a", "/a/0", "/a/1", "/a/1/b", "/c"]);
}

#[test]
fn test_json_pointers_resolve() {
    let document = json!({"x/y": [1, [2, 3]], "t~": {"u": []}});
    for walk in BreadthFirst::new(&document, &JsonAdjacency) {
        let walk = walk.unwrap_infallible();
        assert_eq!(document.pointer(&json_pointer(&walk)), Some(*walk.to()));
    }
}

#[test]
fn test_json_leaves() {
    let document = json!([[], {}, [1, [2]], "s"]);
    let leaves = Leaves::new(&document, &JsonAdjacency)
        .map(|walk| Value::clone(walk.unwrap_infallible().to()))
        .collect::<Vec<_>>();
    assert_eq!(leaves, vec![json!([]), json!({}), json!(1), json!(2), json!("s")]);
}

#[test]
fn test_json_keys() {
    let document = json!({"k": [0]});
    let walk = Leaves::new(&document, &JsonAdjacency)
        .next()
        .expect("the document has a leaf")
        .unwrap_infallible();
    assert_eq!(
        walk.labels().copied().collect::<Vec<_>>(),
        vec![Key::Name("k"), Key::Index(0)]
    );
    assert_eq!(walk.labels().map(ToString::to_string).collect::<Vec<_>>(), ["k", "0"]);
}

#[test]
fn test_json_remove_unsupported() -> Result<()> {
    let document = json!([1]);
    let mut visit = PreOrder::new(&document, &JsonAdjacency);
    visit.advance()?;
    visit.advance()?;
    assert_eq!(
        visit.remove(),
        Err(TraversalError::Unsupported(Unsupported::Remove))
    );
    Ok(())
}
