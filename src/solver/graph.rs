//! Neighbourhood graph around the shortest ladders
//!
//! Every word on a shortest ladder plus each of its direct neighbours, as
//! plain node and edge lists. Drawing it is left to whoever consumes it.

use super::index::AdjacencyIndex;
use crate::core::{Path, Word};
use std::collections::{BTreeMap, BTreeSet};

/// Why a word appears in the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeRole {
    Start,
    Target,
    /// Lies on at least one shortest ladder
    OnPath,
    /// Only adjacent to a ladder word
    Neighbor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub word: Word,
    pub role: NodeRole,
}

/// Undirected edge, stored with `from < to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub from: Word,
    pub to: Word,
    /// Both endpoints lie on shortest ladders
    pub on_path: bool,
}

/// Nodes and edges around a set of shortest ladders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LadderGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl LadderGraph {
    /// Build the graph for the ladders in `paths`
    ///
    /// `begin` and `end` are always present, even when `paths` is empty.
    /// Nodes are ordered by role, then alphabetically; edges alphabetically.
    #[must_use]
    pub fn from_paths<'p>(
        index: &AdjacencyIndex,
        begin: &Word,
        end: &Word,
        paths: impl IntoIterator<Item = &'p Path>,
    ) -> Self {
        let ladder_words: BTreeSet<&Word> = paths.into_iter().flat_map(Path::iter).collect();

        let mut roles: BTreeMap<&Word, NodeRole> = BTreeMap::new();
        let mut edges: BTreeMap<(&Word, &Word), bool> = BTreeMap::new();

        for &word in &ladder_words {
            roles.insert(word, NodeRole::OnPath);

            for neighbour in index.neighbors_of(word) {
                let on_path = ladder_words.contains(neighbour);
                if !on_path {
                    roles.entry(neighbour).or_insert(NodeRole::Neighbor);
                }

                let key = if word < neighbour {
                    (word, neighbour)
                } else {
                    (neighbour, word)
                };
                edges.insert(key, on_path);
            }
        }

        // Endpoint roles win over anything assigned above
        roles.insert(begin, NodeRole::Start);
        roles.insert(end, NodeRole::Target);

        let mut nodes: Vec<GraphNode> = roles
            .into_iter()
            .map(|(word, role)| GraphNode {
                word: word.clone(),
                role,
            })
            .collect();
        nodes.sort_by(|a, b| a.role.cmp(&b.role).then_with(|| a.word.cmp(&b.word)));

        let edges = edges
            .into_iter()
            .map(|((from, to), on_path)| GraphEdge {
                from: from.clone(),
                to: to.clone(),
                on_path,
            })
            .collect();

        Self { nodes, edges }
    }

    /// Role of `word`, if it is in the graph
    #[must_use]
    pub fn role_of(&self, word: &Word) -> Option<NodeRole> {
        self.nodes.iter().find(|n| &n.word == word).map(|n| n.role)
    }

    /// Number of edges joining two ladder words
    #[must_use]
    pub fn on_path_edges(&self) -> usize {
        self.edges.iter().filter(|e| e.on_path).count()
    }
}
