//! Integration tests for roundabout using the library interface

use std::collections::BTreeSet;
use std::fs;

use pretty_assertions::assert_eq;
use roundabout::commands::{graph_from_text, read_input};
use roundabout::error::RoundaboutError;
use roundabout::graph::{DirectedGraph, NodeId};
use roundabout::parser::parse_sequence;
use roundabout::scc::SccFinder;
use tempfile::TempDir;

/// A ten-node fixture with four components, labeled A=0 .. J=9.
///
/// Edges: A→B, B→C, B→D, C→A, D→E, E→F, F→E, G→E, G→H, H→F, H→I, I→J,
/// J→G, J→H. Expected components: {A,B,C}, {D}, {E,F}, {G,H,I,J}.
fn ten_node_graph() -> DirectedGraph {
    DirectedGraph::from_successors(vec![
        vec![1],    // A -> B
        vec![2, 3], // B -> C, D
        vec![0],    // C -> A
        vec![4],    // D -> E
        vec![5],    // E -> F
        vec![4],    // F -> E
        vec![4, 7], // G -> E, H
        vec![5, 8], // H -> F, I
        vec![9],    // I -> J
        vec![6, 7], // J -> G, H
    ])
    .unwrap()
}

fn components_of(graph: &DirectedGraph) -> Vec<Vec<NodeId>> {
    let mut finder = SccFinder::new();
    finder.find_components(graph);
    finder.components().to_vec()
}

fn as_sets(components: &[Vec<NodeId>]) -> BTreeSet<BTreeSet<NodeId>> {
    components
        .iter()
        .map(|c| c.iter().copied().collect())
        .collect()
}

/// All nodes reachable from `start` by following edges forward.
fn reachable(graph: &DirectedGraph, start: NodeId) -> BTreeSet<NodeId> {
    let mut seen = BTreeSet::from([start]);
    let mut queue = vec![start];
    while let Some(v) = queue.pop() {
        for &u in graph.successors(v) {
            if seen.insert(u) {
                queue.push(u);
            }
        }
    }
    seen
}

#[test]
fn ten_node_scenario_produces_the_four_expected_components() {
    let components = components_of(&ten_node_graph());

    let expected: BTreeSet<BTreeSet<NodeId>> = [
        BTreeSet::from([0, 1, 2]),
        BTreeSet::from([3]),
        BTreeSet::from([4, 5]),
        BTreeSet::from([6, 7, 8, 9]),
    ]
    .into_iter()
    .collect();

    assert_eq!(as_sets(&components), expected);
}

#[test]
fn ten_node_scenario_respects_reverse_topological_order() {
    let graph = ten_node_graph();
    let components = components_of(&graph);

    let position_of = |node: NodeId| {
        components
            .iter()
            .position(|c| c.contains(&node))
            .expect("every node belongs to a component")
    };

    // For every cross-component edge u -> v, v's component closes first
    for u in 0..graph.node_count() {
        for &v in graph.successors(u) {
            if position_of(u) != position_of(v) {
                assert!(
                    position_of(v) < position_of(u),
                    "edge {u} -> {v} points at a later component"
                );
            }
        }
    }
}

#[test]
fn every_component_partition_covers_each_node_exactly_once() {
    for graph in [
        ten_node_graph(),
        DirectedGraph::from_successors(vec![vec![]; 7]).unwrap(),
        DirectedGraph::from_successors(vec![vec![0, 1, 1], vec![0], vec![2]]).unwrap(),
    ] {
        let components = components_of(&graph);

        let mut seen = vec![0usize; graph.node_count()];
        for component in &components {
            assert!(!component.is_empty(), "components are never empty");
            for &node in component {
                seen[node] += 1;
            }
        }
        assert!(
            seen.iter().all(|&count| count == 1),
            "every node appears in exactly one component: {seen:?}"
        );
    }
}

#[test]
fn components_are_mutually_reachable() {
    let graph = ten_node_graph();

    for component in components_of(&graph) {
        for &x in &component {
            let from_x = reachable(&graph, x);
            for &y in &component {
                assert!(from_x.contains(&y), "{x} cannot reach {y}");
            }
        }
    }
}

#[test]
fn components_are_maximal() {
    let graph = ten_node_graph();
    let components = components_of(&graph);

    // No two distinct components may be mergeable: for x in X and y in Y,
    // x -> y and y -> x must not both hold
    for (i, x_comp) in components.iter().enumerate() {
        for y_comp in components.iter().skip(i + 1) {
            let x = x_comp[0];
            let y = y_comp[0];
            let forward = reachable(&graph, x).contains(&y);
            let backward = reachable(&graph, y).contains(&x);
            assert!(
                !(forward && backward),
                "components containing {x} and {y} should have been merged"
            );
        }
    }
}

#[test]
fn edgeless_graph_yields_singletons_in_node_order() {
    let graph = DirectedGraph::from_successors(vec![vec![]; 6]).unwrap();

    let components = components_of(&graph);

    let expected: Vec<Vec<NodeId>> = (0..6).map(|v| vec![v]).collect();
    assert_eq!(components, expected);
}

#[test]
fn invalid_successor_fails_construction_before_any_search() {
    let result = DirectedGraph::from_successors(vec![vec![5], vec![], vec![]]);

    match result {
        Err(RoundaboutError::InvalidEdgeIndex {
            node,
            successor,
            node_count,
        }) => {
            assert_eq!((node, successor, node_count), (0, 5, 3));
        }
        Ok(_) => panic!("construction should have failed"),
        Err(other) => panic!("expected InvalidEdgeIndex, got {other:?}"),
    }
}

#[test]
fn repeated_runs_yield_identical_partitions() {
    let graph = ten_node_graph();
    let mut finder = SccFinder::new();

    finder.find_components(&graph);
    let first = finder.components().to_vec();

    finder.find_components(&graph);
    assert_eq!(finder.components(), &first[..]);
}

#[test]
fn membership_agrees_with_petgraph() {
    use petgraph::graph::DiGraph;

    let fixtures = [
        ten_node_graph(),
        DirectedGraph::from_successors(vec![vec![1], vec![2, 3], vec![0], vec![2]]).unwrap(),
        DirectedGraph::from_successors(vec![vec![0], vec![], vec![1, 1]]).unwrap(),
        DirectedGraph::from_successors(vec![]).unwrap(),
    ];

    for graph in fixtures {
        let mut oracle = DiGraph::<(), ()>::new();
        let indices: Vec<_> = (0..graph.node_count()).map(|_| oracle.add_node(())).collect();
        for v in 0..graph.node_count() {
            for &u in graph.successors(v) {
                oracle.add_edge(indices[v], indices[u], ());
            }
        }

        let expected: BTreeSet<BTreeSet<NodeId>> = petgraph::algo::tarjan_scc(&oracle)
            .into_iter()
            .map(|scc| scc.into_iter().map(|ix| ix.index()).collect())
            .collect();

        assert_eq!(as_sets(&components_of(&graph)), expected);
    }
}

#[test]
fn graph_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ten_nodes.graph");

    // Same ten-node graph, as the CLI would read it
    fs::write(
        &path,
        "# A through J, one successor line per node\n\
         1\n\
         2 3\n\
         0\n\
         4\n\
         5\n\
         4\n\
         4 7\n\
         5 8\n\
         9\n\
         6 7\n",
    )
    .unwrap();

    let text = read_input(Some(&path)).unwrap();
    let graph = graph_from_text(&text, " ").unwrap();

    assert_eq!(graph, ten_node_graph());
    assert_eq!(components_of(&graph).len(), 4);
}

#[test]
fn read_input_reports_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.graph");

    match read_input(Some(&path)) {
        Err(RoundaboutError::FileReadError { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected FileReadError, got {other:?}"),
    }
}

#[test]
fn parser_failure_is_distinct_from_graph_validation_failure() {
    // A bad token surfaces as ParseError...
    let parse_err = graph_from_text("1 oops\n\n", " ").unwrap_err();
    assert!(matches!(parse_err, RoundaboutError::ParseError(_)));

    // ...while a well-formed but out-of-range id is InvalidEdgeIndex
    let edge_err = graph_from_text("9\n\n", " ").unwrap_err();
    assert!(matches!(
        edge_err,
        RoundaboutError::InvalidEdgeIndex { .. }
    ));
}

#[test]
fn parse_sequence_handles_the_documented_shapes() {
    assert_eq!(parse_sequence::<i32>("3 -- 6", "--").unwrap(), vec![3, 6]);
    assert_eq!(
        parse_sequence::<f64>("1.2 2.34 3", " ").unwrap(),
        vec![1.2, 2.34, 3.0]
    );
    assert!(parse_sequence::<u32>("1 2 three", " ").is_err());
}

#[test]
fn long_path_completes_without_native_recursion() {
    let n = 200_000;
    let mut successors: Vec<Vec<NodeId>> = (0..n - 1).map(|v| vec![v + 1]).collect();
    successors.push(vec![]);
    let graph = DirectedGraph::from_successors(successors).unwrap();

    let mut finder = SccFinder::new();
    finder.find_components(&graph);

    assert_eq!(finder.component_count(), n);
    assert!(!finder.has_cycle());
}
