/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use graph_walks::adjacency::{try_from_fn, AdjacencyList};
use graph_walks::algo::visits::*;
use graph_walks::walk::Walk;
use std::cell::Cell;
use std::convert::Infallible;
use unwrap_infallible::UnwrapInfallible;

/// A -> B, A -> C, B -> D, B -> E, C -> D, D -> G
fn diamond() -> AdjacencyList<char, ()> {
    AdjacencyList::from_arcs([
        ('A', 'B', ()),
        ('A', 'C', ()),
        ('B', 'D', ()),
        ('B', 'E', ()),
        ('C', 'D', ()),
        ('D', 'G', ()),
    ])
}

fn targets(walks: impl Iterator<Item = Result<Walk<char, ()>, Infallible>>) -> Vec<char> {
    walks.map(|walk| *walk.unwrap_infallible().to()).collect()
}

#[test]
fn test_order() {
    let list = diamond();
    assert_eq!(
        targets(PostOrder::new('A', &list)),
        vec!['G', 'D', 'E', 'B', 'G', 'D', 'C', 'A']
    );
}

#[test]
fn test_root_is_last() -> Result<()> {
    let list = diamond();
    let walks = PostOrder::new('A', &list)
        .collect::<Result<Vec<_>, _>>()
        .unwrap_infallible();
    let root = walks.last().expect("the root should be visited");
    assert!(root.is_empty());
    assert_eq!(
        walks
            .iter()
            .map(|walk| walk.vertices().collect::<String>())
            .collect::<Vec<_>>(),
        vec!["ABDG", "ABD", "ABE", "AB", "ACDG", "ACD", "AC", "A"]
    );
    Ok(())
}

#[test]
fn test_single_vertex() -> Result<()> {
    let list = AdjacencyList::<char, ()>::new();
    let mut visit = PostOrder::new('A', &list);
    let root = visit.advance()?.expect("the root should be visited");
    assert!(root.is_empty());
    assert_eq!(visit.advance()?, None);
    Ok(())
}

#[test]
fn test_remove() -> Result<()> {
    let list = diamond();
    let mut visit = PostOrder::new('A', &list);
    assert_eq!(visit.advance()?.map(|walk| *walk.to()), Some('G'));
    assert_eq!(visit.advance()?.map(|walk| *walk.to()), Some('D'));
    assert_eq!(visit.advance()?.map(|walk| *walk.to()), Some('E'));
    visit.remove()?;
    assert_eq!(targets(visit), vec!['B', 'G', 'D', 'C', 'A']);

    assert_eq!(list.arcs(&'B'), vec![('D', ())]);
    assert_eq!(
        targets(PostOrder::new('A', &list)),
        vec!['G', 'D', 'B', 'G', 'D', 'C', 'A']
    );
    Ok(())
}

#[test]
fn test_remove_root() -> Result<()> {
    let list = AdjacencyList::from_arcs([('A', 'B', ())]);
    let mut visit = PostOrder::new('A', &list);
    visit.advance()?;
    assert_eq!(visit.advance()?.map(|walk| *walk.to()), Some('A'));
    assert_eq!(
        visit.remove(),
        Err(TraversalError::Unsupported(Unsupported::Root))
    );
    assert_eq!(visit.advance()?, None);
    Ok(())
}

#[test]
fn test_protocol() -> Result<()> {
    let list = diamond();
    let mut visit = PostOrder::new('A', &list);
    assert_eq!(
        visit.remove(),
        Err(TraversalError::Protocol(ProtocolViolation::NotAdvanced))
    );
    visit.advance()?;
    visit.remove()?;
    assert_eq!(
        visit.remove(),
        Err(TraversalError::Protocol(ProtocolViolation::AlreadyRemoved))
    );
    while visit.advance()?.is_some() {}
    assert_eq!(
        visit.advance(),
        Err(TraversalError::Protocol(ProtocolViolation::Exhausted))
    );
    Ok(())
}

#[test]
fn test_adjacency_failure() {
    let failures = Cell::new(1);
    let adjacency = try_from_fn(|&v: &char| match v {
        'A' => Ok(vec![Ok(Walk::step('A', 'B', ())), Ok(Walk::step('A', 'C', ()))]),
        'C' if failures.get() > 0 => {
            failures.set(failures.get() - 1);
            Err("no successors for C")
        }
        'C' => Ok(vec![Ok(Walk::step('C', 'D', ()))]),
        _ => Ok(vec![]),
    });
    let mut visit = PostOrder::new('A', &adjacency);

    let to = |walk: Option<Walk<char, ()>>| walk.map(|walk| *walk.to());
    assert_eq!(visit.advance().map(to), Ok(Some('B')));
    assert_eq!(
        visit.advance(),
        Err(TraversalError::Adjacency("no successors for C"))
    );
    assert_eq!(
        visit.remove(),
        Err(TraversalError::Protocol(ProtocolViolation::NotAdvanced))
    );
    // The failed call is repeated
    assert_eq!(visit.advance().map(to), Ok(Some('D')));
    assert_eq!(visit.advance().map(to), Ok(Some('C')));
    assert_eq!(visit.advance().map(to), Ok(Some('A')));
    assert_eq!(visit.advance(), Ok(None));
}

#[test]
fn test_failed_successor() {
    let adjacency = try_from_fn(|&v: &char| match v {
        'A' => Ok(vec![Ok(Walk::step('A', 'B', ())), Err("broken successors")]),
        _ => Ok(vec![]),
    });
    let walks = PostOrder::new('A', &adjacency)
        .map(|walk| walk.map(|walk| *walk.to()))
        .collect::<Vec<_>>();
    assert_eq!(walks, vec![Ok('B'), Err("broken successors")]);
}
