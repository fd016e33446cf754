use std::collections::BTreeSet;

use crate::teams::Team;

/// Simple undirected graph of teams that have played each other. Repeat
/// matchups collapse onto the same edge; multiplicity is not retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchupGraph {
    nodes: BTreeSet<String>,
    edges: BTreeSet<(String, String)>,
}

impl MatchupGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert both teams and the unordered edge between them. Idempotent.
    pub fn add_matchup(&mut self, a: &Team, b: &Team) {
        self.nodes.insert(a.code.clone());
        self.nodes.insert(b.code.clone());
        let edge = if a.code <= b.code {
            (a.code.clone(), b.code.clone())
        } else {
            (b.code.clone(), a.code.clone())
        };
        self.edges.insert(edge);
    }

    /// Team codes, ordered.
    pub fn nodes(&self) -> &BTreeSet<String> {
        &self.nodes
    }

    /// Unordered code pairs, stored lexicographically, ordered.
    pub fn edges(&self) -> &BTreeSet<(String, String)> {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_team(&self, code: &str) -> bool {
        self.nodes.contains(code)
    }
}
