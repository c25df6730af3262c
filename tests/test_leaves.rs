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
    assert_eq!(targets(Leaves::new('A', &list)), vec!['G', 'E', 'G']);
}

#[test]
fn test_walks() {
    let list = diamond();
    let walks = Leaves::new('A', &list)
        .map(|walk| walk.unwrap_infallible().vertices().collect::<String>())
        .collect::<Vec<_>>();
    assert_eq!(walks, vec!["ABDG", "ABE", "ACDG"]);
}

#[test]
fn test_root_leaf() -> Result<()> {
    let list = AdjacencyList::<char, ()>::new();
    let mut visit = Leaves::new('A', &list);
    let root = visit.advance()?.expect("the root should be a leaf");
    assert!(root.is_empty());
    assert_eq!(
        visit.remove(),
        Err(TraversalError::Unsupported(Unsupported::Root))
    );
    assert_eq!(visit.advance()?, None);
    Ok(())
}

#[test]
fn test_remove() -> Result<()> {
    let list = diamond();
    let mut visit = Leaves::new('A', &list);
    assert_eq!(visit.advance()?.map(|walk| *walk.to()), Some('G'));
    visit.remove()?;
    // D had a successor when it was explored through B
    assert_eq!(targets(visit), vec!['E', 'D']);

    assert!(list.arcs(&'D').is_empty());
    assert_eq!(targets(Leaves::new('A', &list)), vec!['D', 'E', 'D']);
    Ok(())
}

#[test]
fn test_protocol() -> Result<()> {
    let list = diamond();
    let mut visit = Leaves::new('A', &list);
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
    let mut visit = Leaves::new('A', &adjacency);

    let to = |walk: Option<Walk<char, ()>>| walk.map(|walk| *walk.to());
    assert_eq!(visit.advance().map(to), Ok(Some('B')));
    assert_eq!(
        visit.advance(),
        Err(TraversalError::Adjacency("no successors for C"))
    );
    // The failed call is repeated
    assert_eq!(visit.advance().map(to), Ok(Some('D')));
    assert_eq!(visit.advance(), Ok(None));
}

#[test]
fn test_failed_successor() {
    let adjacency = try_from_fn(|&v: &char| match v {
        'A' => Ok(vec![Ok(Walk::step('A', 'B', ())), Err("broken successors")]),
        _ => Ok(vec![]),
    });
    let mut visit = Leaves::new('A', &adjacency);

    let to = |walk: Option<Walk<char, ()>>| walk.map(|walk| *walk.to());
    assert_eq!(visit.advance().map(to), Ok(Some('B')));
    assert_eq!(
        visit.advance(),
        Err(TraversalError::Adjacency("broken successors"))
    );
    assert_eq!(
        visit.advance(),
        Err(TraversalError::Protocol(ProtocolViolation::Broken))
    );
    assert!(visit.next().is_none());
}
