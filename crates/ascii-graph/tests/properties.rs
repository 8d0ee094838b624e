//! Property tests over generated well-formed diagrams

use std::collections::HashSet;

use ascii_graph::prelude::*;
use ascii_graph::{graph, parse};
use proptest::prelude::*;

/// Arrowheads on a generated horizontal segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heads {
    Neither,
    Right,
    Left,
    Both,
}

impl Heads {
    fn edge_count(self) -> usize {
        match self {
            Heads::Neither | Heads::Both => 2,
            Heads::Right | Heads::Left => 1,
        }
    }
}

fn segment() -> impl Strategy<Value = (String, Heads)> {
    let heads = prop_oneof![
        Just(Heads::Neither),
        Just(Heads::Right),
        Just(Heads::Left),
        Just(Heads::Both),
    ];
    (1usize..8, heads).prop_map(|(length, heads)| {
        let body = "-".repeat(length);
        let text = match heads {
            Heads::Neither => body,
            Heads::Right => format!("{}>", body),
            Heads::Left => format!("<{}", body),
            Heads::Both => format!("<{}>", body),
        };
        (text, heads)
    })
}

/// Label without any connector character; 'v' is a head, so it is excluded
fn label() -> impl Strategy<Value = String> {
    "[a-uw-z0-9]{1,5}"
}

/// A single-row chain `w0 s0 w1 s1 ... wn`
fn chain() -> impl Strategy<Value = (String, Vec<Heads>)> {
    (prop::collection::vec((label(), segment()), 1..6), label()).prop_map(|(links, last)| {
        let mut text = String::new();
        let mut heads = Vec::new();
        for (word, (segment, head)) in links {
            text.push_str(&word);
            text.push_str(&segment);
            heads.push(head);
        }
        text.push_str(&last);
        (text, heads)
    })
}

/// A single column of one-letter labels joined by vertical runs
fn column() -> impl Strategy<Value = (String, usize)> {
    (prop::collection::vec(("[a-uw-z]", 1usize..5), 1..5), "[a-uw-z]").prop_map(
        |(links, last)| {
            let mut rows = Vec::new();
            for (word, length) in &links {
                rows.push(word.clone());
                rows.extend(std::iter::repeat("|".to_string()).take(*length));
            }
            rows.push(last);
            (rows.join("\n"), links.len())
        },
    )
}

fn bracket() -> impl Strategy<Value = String> {
    "[a-z/|<>^-]{1,6}".prop_map(|inner| format!("[{}]", inner))
}

proptest! {
    #[test]
    fn chain_edge_count_follows_arrowheads((text, heads) in chain()) {
        let db = parse(&text).unwrap();
        let expected: usize = heads.iter().map(|h| h.edge_count()).sum();
        prop_assert_eq!(db.edge_count(), expected);
    }

    #[test]
    fn chain_angles_are_horizontal((text, _heads) in chain()) {
        let db = parse(&text).unwrap();
        for (_node, neighbor) in db.edges() {
            prop_assert!(neighbor.angle == Angle::East || neighbor.angle == Angle::West);
        }
    }

    #[test]
    fn reverse_edges_have_opposite_angles((text, _heads) in chain()) {
        let db = parse(&text).unwrap();
        for (node, neighbor) in db.edges() {
            let target = neighbor.node();
            for back in db.neighbors(&target).iter().filter(|back| back.is(node)) {
                prop_assert_eq!(back.angle, neighbor.angle.opposite());
            }
        }
    }

    #[test]
    fn headless_segments_are_symmetric((text, heads) in chain()) {
        prop_assume!(heads.iter().all(|h| *h == Heads::Neither));
        let db = parse(&text).unwrap();
        for (node, neighbor) in db.edges() {
            prop_assert!(db.has_edge(&neighbor.node(), node));
        }
    }

    #[test]
    fn neighbor_lists_have_no_duplicates((text, _heads) in chain()) {
        let adjacency = graph(&text).unwrap();
        for neighbors in adjacency.values() {
            let unique: HashSet<_> = neighbors.iter().collect();
            prop_assert_eq!(unique.len(), neighbors.len());
        }
    }

    #[test]
    fn vertical_runs_resolve_once((text, gaps) in column()) {
        let db = parse(&text).unwrap();
        prop_assert_eq!(db.edge_count(), 2 * gaps);
        for (_node, neighbor) in db.edges() {
            prop_assert!(neighbor.angle == Angle::North || neighbor.angle == Angle::South);
        }
    }

    #[test]
    fn long_runs_are_a_single_pair(length in 1usize..200) {
        let text = format!("a{}b", "-".repeat(length));
        let db = parse(&text).unwrap();
        prop_assert_eq!(db.edge_count(), 2);
        prop_assert_eq!(db.node_count(), 2);
    }

    #[test]
    fn brackets_are_never_split(left in bracket(), right in bracket(), length in 1usize..5) {
        let text = format!("{}{}{}", left, "-".repeat(length), right);
        let adjacency = graph(&text).unwrap();
        let labels: HashSet<_> = adjacency.keys().map(|node| node.text.clone()).collect();
        let expected: HashSet<_> = [left.clone(), right.clone()].into_iter().collect();
        prop_assert_eq!(labels, expected);
    }

    #[test]
    fn angles_are_compass_buckets(
        r1 in -50isize..50, c1 in -50isize..50, r2 in -50isize..50, c2 in -50isize..50
    ) {
        let from = Position::new(r1, c1);
        let to = Position::new(r2, c2);
        match Angle::between(from, to) {
            Some(angle) => {
                prop_assert!(angle.degrees() % 45 == 0 && angle.degrees() < 360);
                prop_assert_eq!(Angle::between(to, from), Some(angle.opposite()));
            }
            None => prop_assert_eq!(from, to),
        }
    }
}
