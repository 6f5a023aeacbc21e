use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{Result, TimetableError};
use crate::models::MeetingRegistry;

/// A meeting as a graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictNode {
    /// Stable node index (registration order, 0-based).
    pub index: usize,
    /// Meeting identifier.
    pub label: String,
    /// Number of conflicting meetings.
    pub degree: usize,
    /// Indices of conflicting meetings.
    pub neighbors: BTreeSet<usize>,
    /// Distinct participants of the meeting.
    pub participants: BTreeSet<String>,
}

/// A conflict between two meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEdge {
    /// Lower node index.
    pub a: usize,
    /// Higher node index.
    pub b: usize,
    /// Participants attending both meetings, sorted.
    pub shared: Vec<String>,
}

/// Undirected conflict graph over meetings.
///
/// # Example
///
/// ```
/// use u_timetable::graph::ConflictGraph;
/// use u_timetable::models::MeetingRegistry;
///
/// let mut registry = MeetingRegistry::new();
/// registry.add_participants("design", ["Ana", "Bo"]).unwrap();
/// registry.add_participants("budget", ["Bo"]).unwrap();
/// registry.add_participants("hiring", ["Cy"]).unwrap();
///
/// let graph = ConflictGraph::build(&registry);
/// assert_eq!(graph.node_count(), 3);
/// assert!(graph.are_adjacent(0, 1));
/// assert!(!graph.are_adjacent(0, 2));
/// ```
///
/// Deserialization re-checks the structure `build` guarantees and rejects
/// inconsistent input with `MalformedGraph`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphParts")]
pub struct ConflictGraph {
    nodes: Vec<ConflictNode>,
    edges: Vec<ConflictEdge>,
    participants: BTreeSet<String>,
}

/// Unchecked serialized form of [`ConflictGraph`].
#[derive(Deserialize)]
struct GraphParts {
    nodes: Vec<ConflictNode>,
    edges: Vec<ConflictEdge>,
    participants: BTreeSet<String>,
}

impl TryFrom<GraphParts> for ConflictGraph {
    type Error = TimetableError;

    fn try_from(parts: GraphParts) -> Result<Self> {
        let graph = Self {
            nodes: parts.nodes,
            edges: parts.edges,
            participants: parts.participants,
        };
        graph.check_structure()?;
        Ok(graph)
    }
}

fn malformed(message: String) -> TimetableError {
    TimetableError::MalformedGraph(message)
}

impl ConflictGraph {
    /// Builds the graph from registered meetings.
    ///
    /// Nodes are created in registration order. Each new node is compared
    /// against every node inserted before it, so the same registry always
    /// yields the same indices and edge order.
    pub fn build(registry: &MeetingRegistry) -> Self {
        let mut graph = Self::default();

        for meeting in registry.meetings() {
            let index = graph.nodes.len();
            let participants: BTreeSet<String> = meeting.participants.iter().cloned().collect();

            let mut node = ConflictNode {
                index,
                label: meeting.id.clone(),
                degree: 0,
                neighbors: BTreeSet::new(),
                participants,
            };

            for earlier in graph.nodes.iter_mut() {
                let shared: Vec<String> = earlier
                    .participants
                    .intersection(&node.participants)
                    .cloned()
                    .collect();
                if shared.is_empty() {
                    continue;
                }
                earlier.neighbors.insert(index);
                earlier.degree += 1;
                node.neighbors.insert(earlier.index);
                node.degree += 1;
                graph.edges.push(ConflictEdge {
                    a: earlier.index,
                    b: index,
                    shared,
                });
            }

            graph.participants.extend(node.participants.iter().cloned());
            graph.nodes.push(node);
        }

        tracing::debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            participants = graph.participants.len(),
            "built conflict graph"
        );
        graph
    }

    /// Verifies the invariants `build` establishes: positional indices,
    /// in-range symmetric adjacency without self-loops, degree equal to
    /// neighbor count, one edge per adjacent pair and a participant set
    /// equal to the union over nodes.
    fn check_structure(&self) -> Result<()> {
        let n = self.nodes.len();
        let mut degree_sum = 0;

        for (position, node) in self.nodes.iter().enumerate() {
            if node.index != position {
                return Err(malformed(format!(
                    "node '{}' at position {position} has index {}",
                    node.label, node.index
                )));
            }
            if node.degree != node.neighbors.len() {
                return Err(malformed(format!(
                    "node {position} has degree {} but {} neighbors",
                    node.degree,
                    node.neighbors.len()
                )));
            }
            for &neighbor in &node.neighbors {
                if neighbor >= n {
                    return Err(malformed(format!(
                        "node {position} lists neighbor {neighbor}, but there are {n} nodes"
                    )));
                }
                if neighbor == position {
                    return Err(malformed(format!("node {position} is its own neighbor")));
                }
                if !self.nodes[neighbor].neighbors.contains(&position) {
                    return Err(malformed(format!(
                        "node {position} lists {neighbor} but not the reverse"
                    )));
                }
            }
            degree_sum += node.degree;
        }

        let mut seen = BTreeSet::new();
        for edge in &self.edges {
            if edge.a >= edge.b || !self.are_adjacent(edge.a, edge.b) {
                return Err(malformed(format!(
                    "edge {}-{} does not match the adjacency lists",
                    edge.a, edge.b
                )));
            }
            if !seen.insert((edge.a, edge.b)) {
                return Err(malformed(format!("edge {}-{} appears twice", edge.a, edge.b)));
            }
        }
        if self.edges.len() * 2 != degree_sum {
            return Err(malformed(format!(
                "{} edges for a degree sum of {degree_sum}",
                self.edges.len()
            )));
        }

        let union: BTreeSet<&String> = self.nodes.iter().flat_map(|n| &n.participants).collect();
        if !union.iter().copied().eq(self.participants.iter()) {
            return Err(malformed("participant set differs from the nodes' participants".into()));
        }
        Ok(())
    }

    /// Nodes in index order.
    pub fn nodes(&self) -> &[ConflictNode] {
        &self.nodes
    }

    /// Node by index.
    pub fn node(&self, index: usize) -> Option<&ConflictNode> {
        self.nodes.get(index)
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[ConflictEdge] {
        &self.edges
    }

    /// Every distinct participant across all meetings.
    pub fn all_participants(&self) -> &BTreeSet<String> {
        &self.participants
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Largest node degree, 0 for an empty graph.
    pub fn max_degree(&self) -> usize {
        self.nodes.iter().map(|n| n.degree).max().unwrap_or(0)
    }

    /// Degree of a node (0 if out of range).
    pub fn degree(&self, index: usize) -> usize {
        self.nodes.get(index).map_or(0, |n| n.degree)
    }

    /// Neighbors of a node, ascending.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .get(index)
            .into_iter()
            .flat_map(|n| n.neighbors.iter().copied())
    }

    /// Whether two meetings conflict.
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.nodes
            .get(a)
            .is_some_and(|n| n.neighbors.contains(&b))
    }

    /// Node index of a meeting label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.label == label)
    }

    /// Participants shared by two meetings, if they conflict.
    pub fn shared_participants(&self, a: usize, b: usize) -> Option<&[String]> {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        self.edges
            .iter()
            .find(|e| e.a == lo && e.b == hi)
            .map(|e| e.shared.as_slice())
    }

    /// Edge density: edges / (n·(n-1)/2). `None` below two nodes.
    pub fn density(&self) -> Option<f64> {
        let n = self.nodes.len();
        if n < 2 {
            return None;
        }
        let possible = n * (n - 1) / 2;
        Some(self.edges.len() as f64 / possible as f64)
    }

    /// Indices of the meetings a participant attends.
    pub fn attendance(&self, participant: &str) -> Vec<usize> {
        self.nodes
            .iter()
            .filter(|n| n.participants.contains(participant))
            .map(|n| n.index)
            .collect()
    }

    /// Participant × meeting attendance matrix.
    ///
    /// Rows follow [`all_participants`](Self::all_participants) order,
    /// columns follow node index.
    pub fn attendance_matrix(&self) -> Vec<Vec<bool>> {
        self.participants
            .iter()
            .map(|p| {
                self.nodes
                    .iter()
                    .map(|n| n.participants.contains(p))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_registry;

    fn edge_between(g: &ConflictGraph, a: &str, b: &str) -> bool {
        let (a, b) = (g.index_of(a).unwrap(), g.index_of(b).unwrap());
        g.are_adjacent(a, b)
    }

    #[test]
    fn test_nodes_follow_registration_order() {
        let g = ConflictGraph::build(&sample_registry());
        let labels: Vec<&str> = g.nodes().iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3", "4", "5", "6", "7"]);
        assert!(g.nodes().iter().enumerate().all(|(i, n)| n.index == i));
    }

    #[test]
    fn test_sample_edges() {
        let g = ConflictGraph::build(&sample_registry());
        for (a, b) in [
            ("1", "2"),
            ("1", "3"),
            ("1", "4"),
            ("1", "5"),
            ("1", "7"),
            ("2", "3"),
            ("3", "4"),
            ("3", "5"),
            ("3", "6"),
            ("4", "5"),
            ("4", "7"),
            ("5", "6"),
            ("5", "7"),
        ] {
            assert!(edge_between(&g, a, b), "expected edge {a}-{b}");
            assert!(edge_between(&g, b, a), "edge {a}-{b} must be symmetric");
        }
        for (a, b) in [("2", "4"), ("2", "5"), ("2", "6"), ("2", "7"), ("6", "7"), ("4", "6"), ("3", "7")] {
            assert!(!edge_between(&g, a, b), "unexpected edge {a}-{b}");
        }
        assert_eq!(g.edge_count(), 13);
    }

    #[test]
    fn test_degrees_and_neighbors() {
        let g = ConflictGraph::build(&sample_registry());
        let degrees: Vec<usize> = g.nodes().iter().map(|n| n.degree).collect();
        assert_eq!(degrees, vec![5, 2, 5, 4, 5, 2, 3]);
        assert_eq!(g.max_degree(), 5);
        assert_eq!(g.neighbors(0).collect::<Vec<_>>(), vec![1, 2, 3, 4, 6]);
        assert!(g.nodes().iter().all(|n| n.degree == n.neighbors.len()));
    }

    #[test]
    fn test_shared_participants_annotation() {
        let g = ConflictGraph::build(&sample_registry());
        assert_eq!(g.shared_participants(0, 2).unwrap(), ["Graham", "Sanja"]);
        assert_eq!(g.shared_participants(4, 2).unwrap(), ["Kath", "Sanja"]);
        assert_eq!(g.shared_participants(6, 0).unwrap(), ["Edmund"]);
        assert!(g.shared_participants(1, 3).is_none());
    }

    #[test]
    fn test_all_participants() {
        let g = ConflictGraph::build(&sample_registry());
        let all: Vec<&str> = g.all_participants().iter().map(String::as_str).collect();
        assert_eq!(all, vec!["Edmund", "Graham", "Kath", "Sanja"]);
    }

    #[test]
    fn test_duplicate_participants_are_harmless() {
        let mut r = MeetingRegistry::new();
        r.add_participants("a", ["Ana", "Ana"]).unwrap();
        r.add_participants("b", ["Ana"]).unwrap();
        r.add_participants("a", ["Ana"]).unwrap();
        let g = ConflictGraph::build(&r);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edges()[0].shared, vec!["Ana"]);
        assert_eq!(g.degree(0), 1);
    }

    #[test]
    fn test_attendance() {
        let g = ConflictGraph::build(&sample_registry());
        assert_eq!(g.attendance("Kath"), vec![2, 4, 5]);
        assert!(g.attendance("Nobody").is_empty());

        let matrix = g.attendance_matrix();
        assert_eq!(matrix.len(), 4);
        // Row 0 = Edmund: meetings 1, 4, 5, 7
        assert_eq!(
            matrix[0],
            vec![true, false, false, true, true, false, true]
        );
    }

    #[test]
    fn test_density() {
        let g = ConflictGraph::build(&sample_registry());
        let d = g.density().unwrap();
        assert!((d - 13.0 / 21.0).abs() < 1e-12);
        assert!(ConflictGraph::default().density().is_none());
    }

    #[test]
    fn test_serde_roundtrip() {
        let g = ConflictGraph::build(&sample_registry());
        let json = serde_json::to_string(&g).unwrap();
        let back: ConflictGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    fn single_node_json(neighbors: &str, degree: usize) -> String {
        format!(
            r#"{{"nodes":[{{"index":0,"label":"a","degree":{degree},"neighbors":{neighbors},"participants":["Ana"]}}],"edges":[],"participants":["Ana"]}}"#
        )
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_neighbor() {
        let err = serde_json::from_str::<ConflictGraph>(&single_node_json("[5]", 1)).unwrap_err();
        assert!(err.to_string().contains("neighbor 5"), "{err}");
        assert!(serde_json::from_str::<ConflictGraph>(&single_node_json("[]", 0)).is_ok());
    }

    #[test]
    fn test_deserialize_rejects_degree_mismatch() {
        let err = serde_json::from_str::<ConflictGraph>(&single_node_json("[]", 3)).unwrap_err();
        assert!(err.to_string().contains("degree 3"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_asymmetric_and_missing_edges() {
        let g = ConflictGraph::build(&sample_registry());

        let mut value = serde_json::to_value(&g).unwrap();
        value["nodes"][1]["neighbors"] = serde_json::json!([2]);
        assert!(serde_json::from_value::<ConflictGraph>(value).is_err());

        let mut value = serde_json::to_value(&g).unwrap();
        value["edges"].as_array_mut().unwrap().pop();
        let err = serde_json::from_value::<ConflictGraph>(value).unwrap_err();
        assert!(err.to_string().contains("12 edges"), "{err}");

        let mut value = serde_json::to_value(&g).unwrap();
        value["participants"] = serde_json::json!(["Edmund"]);
        assert!(serde_json::from_value::<ConflictGraph>(value).is_err());
    }

    #[test]
    fn test_empty_graph() {
        let g = ConflictGraph::build(&MeetingRegistry::new());
        assert!(g.is_empty());
        assert_eq!(g.max_degree(), 0);
        assert!(g.all_participants().is_empty());
        assert_eq!(g.neighbors(0).count(), 0);
    }
}
