use crate::engine::Board;
use crate::error::SolveError;
use crate::heuristics::Heuristic;
use crate::tree::{NodeId, SearchTree};
use std::collections::VecDeque;
use std::io::Write;
use std::time::{Duration, Instant};

/// Queue of generated nodes waiting to be expanded.
///
/// Strictly first-in first-out: node scores play no part in the order.
#[derive(Clone, Debug, Default)]
pub struct Fringe {
    queue: VecDeque<NodeId>,
}

impl Fringe {
    pub fn new() -> Self {
        Fringe::default()
    }

    /// Appends `id` at the back.
    pub fn push(&mut self, id: NodeId) {
        self.queue.push_back(id);
    }

    /// Removes and returns the front node.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    pub fn front(&self) -> Option<NodeId> {
        self.queue.front().copied()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// One board along the reconstructed solution path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathStep {
    pub board: Board,
    /// Tile moved into the blank to reach `board`; `None` for the start.
    pub moved_tile: Option<u8>,
    pub score: u32,
}

/// Represents a finished search.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Depth of the reported goal node.
    pub depth: usize,
    /// Nodes still queued when the goal was reported.
    pub fringe_len: usize,
    /// Wall-clock time from the first step to the goal.
    pub elapsed: Duration,
    /// Nodes created, root included.
    pub nodes_generated: usize,
    /// Nodes taken off the fringe.
    pub nodes_dequeued: usize,
    /// Boards from the goal back to the start, in printing order.
    pub path: Vec<PathStep>,
}

/// What a single driver transition did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The focus node was expanded; `enqueued` children passed the cycle guard.
    Expanded { node: NodeId, enqueued: usize },
    /// The front of the fringe became the new focus.
    Dequeued(NodeId),
    /// Terminal: the reported goal node.
    GoalFound(NodeId),
}

/// Returns `true` when `id`'s board equals its grandparent's board.
///
/// Only the grandparent is checked; nodes at depth 0 or 1 always pass.
pub fn is_immediate_repeat(tree: &SearchTree, id: NodeId) -> Result<bool, SolveError> {
    let node = tree.node(id).ok_or(SolveError::MissingNode(id))?;
    let Some(grandparent) = tree.grandparent(id) else {
        return Ok(false);
    };
    let grandparent = tree
        .node(grandparent)
        .ok_or(SolveError::MissingNode(grandparent))?;
    Ok(grandparent.board() == node.board())
}

/// Breadth-first driver over an explicit search tree.
///
/// The fringe is seeded with the root. Each `step` either expands the
/// current focus (if it has no children yet) or dequeues the next node
/// and makes it the focus. The run ends as soon as a generated child is the goal.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::START_BOARD;
/// use eight_puzzle_solver::heuristics::Heuristic;
/// use eight_puzzle_solver::solver::Solver;
///
/// let mut solver = Solver::new(START_BOARD, Heuristic::MisplacedTiles);
/// let solution = solver.solve(&mut std::io::sink()).unwrap();
/// assert_eq!(solution.depth, 5);
/// assert!(solution.path[0].board.is_goal());
/// ```
#[derive(Clone, Debug)]
pub struct Solver {
    tree: SearchTree,
    fringe: Fringe,
    focus: NodeId,
    goal: Option<NodeId>,
    dequeued: usize,
}

impl Solver {
    pub fn new(start: Board, heuristic: Heuristic) -> Self {
        let tree = SearchTree::new(start, heuristic);
        let root = tree.root();
        let mut fringe = Fringe::new();
        fringe.push(root);
        Solver {
            tree,
            fringe,
            focus: root,
            goal: None,
            dequeued: 0,
        }
    }

    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    pub fn fringe(&self) -> &Fringe {
        &self.fringe
    }

    pub fn focus(&self) -> NodeId {
        self.focus
    }

    /// The reported goal node once the search has finished.
    pub fn goal(&self) -> Option<NodeId> {
        self.goal
    }

    /// Performs one driver transition, writing trace lines for dequeued nodes to `out`.
    ///
    /// After `Step::GoalFound` further calls return the same step without doing any work.
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<Step, SolveError> {
        if let Some(goal) = self.goal {
            return Ok(Step::GoalFound(goal));
        }

        let focus = self.focus;
        let node = self
            .tree
            .node(focus)
            .ok_or(SolveError::MissingNode(focus))?;
        if !node.has_children() {
            return self.expand(focus);
        }

        let next = self.fringe.pop().ok_or(SolveError::FringeExhausted)?;
        self.dequeued += 1;
        let node = self.tree.node(next).ok_or(SolveError::MissingNode(next))?;

        if node.board().is_goal() {
            // Reached only when the start itself is the goal; the next queued node is reported.
            let reported = self.fringe.front().ok_or(SolveError::FringeExhausted)?;
            self.goal = Some(reported);
            return Ok(Step::GoalFound(reported));
        }

        writeln!(out, "nodes in memory= {}", self.fringe.len())?;
        writeln!(out, "exploring depth= {}", node.depth())?;
        writeln!(out, "expanding node:")?;
        write!(out, "{}", node.board())?;
        writeln!(out, "with F(N)={}", node.score())?;

        self.focus = next;
        Ok(Step::Dequeued(next))
    }

    /// Generates the children of `id`, queueing those that pass the cycle guard.
    fn expand(&mut self, id: NodeId) -> Result<Step, SolveError> {
        let board = *self
            .tree
            .node(id)
            .ok_or(SolveError::MissingNode(id))?
            .board();
        let mut enqueued = 0;

        for (slot, target) in board.move_slots().into_iter().enumerate() {
            let Some(target) = target else {
                continue;
            };
            let child_board = board.apply_move(target);
            let child = self
                .tree
                .add_child(id, slot, child_board, board.tile(target))
                .ok_or(SolveError::MissingNode(id))?;

            if child_board.is_goal() {
                self.goal = Some(child);
                return Ok(Step::GoalFound(child));
            }

            if !is_immediate_repeat(&self.tree, child)? {
                self.fringe.push(child);
                enqueued += 1;
            }
        }

        Ok(Step::Expanded { node: id, enqueued })
    }

    /// Runs the search to completion, then prints the statistics and the path.
    pub fn solve<W: Write>(&mut self, out: &mut W) -> Result<Solution, SolveError> {
        let started = Instant::now();
        let goal = loop {
            if let Step::GoalFound(goal) = self.step(out)? {
                break goal;
            }
        };
        let elapsed = started.elapsed();

        let depth = self.tree.depth_of(goal);
        writeln!(out)?;
        writeln!(out, "SOLUTION WAS FOUND!")?;
        writeln!(
            out,
            "At depth= {} with nodes= {} in time {}",
            depth,
            self.fringe.len(),
            elapsed.as_millis()
        )?;

        let path = self.reconstruct_path(goal)?;
        write_path(&path, out)?;

        Ok(Solution {
            depth,
            fringe_len: self.fringe.len(),
            elapsed,
            nodes_generated: self.tree.node_count(),
            nodes_dequeued: self.dequeued,
            path,
        })
    }

    /// Collects the boards from `goal` back to the root by following parent links.
    ///
    /// # Arguments
    /// * `goal`: The node the path starts from, normally the reported goal.
    ///
    /// # Returns
    /// * `Ok(Vec<PathStep>)` ordered goal first, root last. Its length is the
    ///   goal's depth plus one, and only the last entry has no moved tile.
    /// * `Err(SolveError::MissingNode)` if a node on the chain is not in the tree.
    pub fn reconstruct_path(&self, goal: NodeId) -> Result<Vec<PathStep>, SolveError> {
        self.tree
            .path_to_root(goal)
            .into_iter()
            .map(|id| -> Result<PathStep, SolveError> {
                let node = self.tree.node(id).ok_or(SolveError::MissingNode(id))?;
                Ok(PathStep {
                    board: *node.board(),
                    moved_tile: node.moved_tile(),
                    score: node.score(),
                })
            })
            .collect()
    }
}

/// Prints a reconstructed path in the order it is given.
///
/// Each step with a moved tile is printed as `Expanded node. Move: <tile>`, its
/// board and `Node's F(N)=<score>`, followed by a blank line. The step without a
/// moved tile is printed as `Initial state: ` and its board.
///
/// # Arguments
/// * `path`: The steps to print, normally the goal-first output of `reconstruct_path`.
/// * `out`: The sink the text is written to.
///
/// # Returns
/// `Err(SolveError::Io)` if writing to `out` fails, `Ok(())` otherwise.
pub fn write_path<W: Write>(path: &[PathStep], out: &mut W) -> Result<(), SolveError> {
    for step in path {
        match step.moved_tile {
            Some(tile) => {
                writeln!(out, "Expanded node. Move: {}", tile)?;
                write!(out, "{}", step.board)?;
                writeln!(out, "Node's F(N)={}", step.score)?;
                writeln!(out)?;
            }
            None => {
                writeln!(out, "Initial state: ")?;
                write!(out, "{}", step.board)?;
            }
        }
    }
    Ok(())
}
