//! Explicit search tree for the 8-puzzle.
//!
//! Nodes live in an arena (`SearchTree`) and refer to each other by `NodeId`.
//! A node owns up to four child slots and keeps a plain id back to its parent,
//! which is only ever walked upwards (depth computation, cycle guard, path
//! reconstruction). Nodes are never removed; the arena grows until the tree is dropped.
use crate::engine::{Board, MAX_MOVES};
use crate::heuristics::Heuristic;
use std::fmt;

/// Index of a node inside a `SearchTree`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One explored board configuration and its place in the tree.
#[derive(Clone, Debug)]
pub struct Node {
    board: Board,
    parent: Option<NodeId>,
    children: [Option<NodeId>; MAX_MOVES],
    moved_tile: Option<u8>,
    depth: usize,
    path_cost: u32,
    heuristic: u32,
    score: u32,
}

impl Node {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[Option<NodeId>; MAX_MOVES] {
        &self.children
    }

    /// Tile slid into the blank to reach this node; `None` for the root.
    pub fn moved_tile(&self) -> Option<u8> {
        self.moved_tile
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `g(n)`, equal to the depth.
    pub fn path_cost(&self) -> u32 {
        self.path_cost
    }

    /// `h(n)`.
    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    /// `f(n) = g(n) + h(n)`.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns `true` once at least one child slot has been filled.
    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    fn evaluate(&mut self, heuristic: Heuristic) {
        self.path_cost = self.depth as u32;
        self.heuristic = heuristic.evaluate(&self.board);
        self.score = self.path_cost + self.heuristic;
    }
}

/// Arena owning every node created during one search.
#[derive(Clone, Debug)]
pub struct SearchTree {
    nodes: Vec<Node>,
    heuristic: Heuristic,
}

impl SearchTree {
    /// Creates a tree holding only the root built from `start`, scored with `heuristic`.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::START_BOARD;
    /// use eight_puzzle_solver::heuristics::Heuristic;
    /// use eight_puzzle_solver::tree::SearchTree;
    ///
    /// let tree = SearchTree::new(START_BOARD, Heuristic::MisplacedTiles);
    /// let root = tree.node(tree.root()).unwrap();
    /// assert_eq!(root.depth(), 0);
    /// assert_eq!(root.moved_tile(), None);
    /// assert_eq!(root.score(), 5);
    /// ```
    pub fn new(start: Board, heuristic: Heuristic) -> Self {
        let mut root = Node {
            board: start,
            parent: None,
            children: [None; MAX_MOVES],
            moved_tile: None,
            depth: 0,
            path_cost: 0,
            heuristic: 0,
            score: 0,
        };
        root.evaluate(heuristic);
        SearchTree {
            nodes: vec![root],
            heuristic,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Total number of nodes created so far, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Looks a node up; `None` if `id` does not belong to this tree.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Creates a child of `parent` holding `board` in the given child slot.
    ///
    /// The child's depth is found by walking the parent chain, after which it
    /// is scored. Returns `None` if `parent` is unknown or `slot` is out of range.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        slot: usize,
        board: Board,
        moved_tile: u8,
    ) -> Option<NodeId> {
        if parent.0 >= self.nodes.len() || slot >= MAX_MOVES {
            return None;
        }
        let id = NodeId(self.nodes.len());
        let mut child = Node {
            board,
            parent: Some(parent),
            children: [None; MAX_MOVES],
            moved_tile: Some(moved_tile),
            depth: 0,
            path_cost: 0,
            heuristic: 0,
            score: 0,
        };
        child.depth = self.chain_length(Some(parent));
        child.evaluate(self.heuristic);
        self.nodes.push(child);
        self.nodes[parent.0].children[slot] = Some(id);
        Some(id)
    }

    /// Number of edges between `id` and the root, counted by walking parent links.
    pub fn depth_of(&self, id: NodeId) -> usize {
        self.node(id).map_or(0, |node| self.chain_length(node.parent))
    }

    // Nodes on the chain starting at `current` and ending at the root.
    fn chain_length(&self, mut current: Option<NodeId>) -> usize {
        let mut count = 0;
        while let Some(id) = current {
            count += 1;
            current = self.node(id).and_then(Node::parent);
        }
        count
    }

    /// Returns the parent's parent, if both links exist.
    pub fn grandparent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.node(id)?.parent?;
        self.node(parent)?.parent
    }

    /// Ids from `id` up to and including the root.
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.node(id).map(|_| id);
        while let Some(next) = current {
            path.push(next);
            current = self.node(next).and_then(Node::parent);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{GOAL_BOARD, START_BOARD};

    fn grow_line(tree: &mut SearchTree, from: NodeId, steps: usize) -> NodeId {
        let mut current = from;
        for _ in 0..steps {
            let board = *tree.node(current).unwrap().board();
            let target = board.legal_moves()[0];
            let tile = board.tile(target);
            current = tree.add_child(current, 0, board.apply_move(target), tile).unwrap();
        }
        current
    }

    #[test]
    fn test_root_is_scored() {
        let tree = SearchTree::new(START_BOARD, Heuristic::Manhattan);
        let root = tree.node(tree.root()).unwrap();
        assert_eq!(root.path_cost(), 0);
        assert_eq!(root.heuristic(), 18);
        assert_eq!(root.score(), 18);
        assert!(root.parent().is_none());
        assert!(!root.has_children());
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_add_child_links_and_scores() {
        let mut tree = SearchTree::new(START_BOARD, Heuristic::MisplacedTiles);
        let root = tree.root();
        let board = START_BOARD.apply_move(4);
        let child = tree.add_child(root, 0, board, 6).unwrap();

        let node = tree.node(child).unwrap();
        assert_eq!(node.parent(), Some(root));
        assert_eq!(node.depth(), 1);
        assert_eq!(node.moved_tile(), Some(6));
        assert_eq!(node.path_cost(), 1);
        assert_eq!(node.heuristic(), 3);
        assert_eq!(node.score(), 4);
        assert_eq!(tree.node(root).unwrap().children(), &[Some(child), None, None, None]);
        assert!(tree.node(root).unwrap().has_children());
    }

    #[test]
    fn test_add_child_rejects_unknown_parent_and_slot() {
        let mut tree = SearchTree::new(GOAL_BOARD, Heuristic::Zero);
        let root = tree.root();
        assert!(tree.add_child(NodeId(5), 0, START_BOARD, 1).is_none());
        assert!(tree.add_child(root, MAX_MOVES, START_BOARD, 1).is_none());
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_depth_walk_matches_stored_depth() {
        let mut tree = SearchTree::new(START_BOARD, Heuristic::Zero);
        let root = tree.root();
        let leaf = grow_line(&mut tree, root, 6);
        assert_eq!(tree.depth_of(leaf), 6);
        assert_eq!(tree.node(leaf).unwrap().depth(), 6);
        assert_eq!(tree.depth_of(tree.root()), 0);
        assert_eq!(tree.depth_of(NodeId(999)), 0);
    }

    #[test]
    fn test_grandparent_lookup() {
        let mut tree = SearchTree::new(START_BOARD, Heuristic::Zero);
        let root = tree.root();
        let child = grow_line(&mut tree, root, 1);
        let grandchild = grow_line(&mut tree, child, 1);
        assert_eq!(tree.grandparent(root), None);
        assert_eq!(tree.grandparent(child), None);
        assert_eq!(tree.grandparent(grandchild), Some(root));
    }

    #[test]
    fn test_path_to_root_order() {
        let mut tree = SearchTree::new(START_BOARD, Heuristic::Zero);
        let root = tree.root();
        let leaf = grow_line(&mut tree, root, 3);
        let path = tree.path_to_root(leaf);
        assert_eq!(path.len(), 4);
        assert_eq!(path.first(), Some(&leaf));
        assert_eq!(path.last(), Some(&tree.root()));
        assert!(tree.path_to_root(NodeId(42)).is_empty());
    }
}
