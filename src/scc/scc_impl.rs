use crate::graph::{DirectedGraph, NodeId};

/// Sentinel discovery index for nodes the search has not reached yet.
const UNDISCOVERED: usize = usize::MAX;

/// Finder for the strongly connected components of a directed graph.
///
/// Each call to [`find_components`](SccFinder::find_components) runs a fresh
/// traversal and replaces the stored result, so reusing one finder across
/// graphs (or across repeated runs on the same graph) is fine and always
/// yields the same partition for the same input.
pub struct SccFinder {
    components: Vec<Vec<NodeId>>,
    node_count: usize,
    cyclic: bool,
}

impl Default for SccFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl SccFinder {
    /// Create a new finder with no results.
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            node_count: 0,
            cyclic: false,
        }
    }

    /// Compute all strongly connected components of `graph`.
    ///
    /// Visits nodes in increasing identifier order, restarting the search
    /// from every node the previous passes did not reach, so disconnected
    /// graphs are fully covered. The traversal itself cannot fail: any graph
    /// that survived construction produces a complete partition.
    pub fn find_components(&mut self, graph: &DirectedGraph) {
        self.components = Traversal::new(graph).run();
        self.node_count = graph.node_count();
        self.cyclic = self.components.iter().any(|c| c.len() > 1)
            || (0..graph.node_count()).any(|v| graph.successors(v).contains(&v));
    }

    /// The components, in reverse topological order of the condensation.
    pub fn components(&self) -> &[Vec<NodeId>] {
        &self.components
    }

    /// Number of components found.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Number of nodes in the analyzed graph.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Whether the graph contains any cycle: a component of two or more
    /// nodes, or a self-loop.
    pub fn has_cycle(&self) -> bool {
        self.cyclic
    }
}

/// One suspended step of the simulated recursion: the node being examined
/// and the position of the next successor to look at. The low-link
/// accumulated so far lives in the per-node array, not the frame.
struct Frame {
    node: NodeId,
    next_successor: usize,
}

/// State owned by a single run: created fresh, mutated only by that run,
/// discarded when the component list is returned.
struct Traversal<'g> {
    graph: &'g DirectedGraph,
    /// Discovery order per node; `UNDISCOVERED` until first visit.
    index: Vec<usize>,
    /// Smallest discovery index reachable from the node via tree edges plus
    /// at most one edge into the open stack. Only ever decreases.
    lowlink: Vec<usize>,
    /// True while the node is live: discovered, but its component not yet
    /// emitted. A discovered node that is no longer on the stack belongs to
    /// a closed component, and edges into it are ignored.
    on_stack: Vec<bool>,
    /// Live nodes of all open branches, in discovery-push order.
    stack: Vec<NodeId>,
    /// Simulated call stack.
    frames: Vec<Frame>,
    counter: usize,
    components: Vec<Vec<NodeId>>,
}

impl<'g> Traversal<'g> {
    fn new(graph: &'g DirectedGraph) -> Self {
        let n = graph.node_count();
        Self {
            graph,
            index: vec![UNDISCOVERED; n],
            lowlink: vec![UNDISCOVERED; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            frames: Vec::new(),
            counter: 0,
            components: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Vec<NodeId>> {
        for node in 0..self.graph.node_count() {
            if self.index[node] == UNDISCOVERED {
                self.search_from(node);
            }
        }
        self.components
    }

    /// Give `node` its discovery index and put it on the working stack.
    fn discover(&mut self, node: NodeId) {
        self.index[node] = self.counter;
        self.lowlink[node] = self.counter;
        self.counter += 1;
        self.on_stack[node] = true;
        self.stack.push(node);
        self.frames.push(Frame {
            node,
            next_successor: 0,
        });
    }

    /// Depth-first search from `root`, driven by the explicit frame stack.
    fn search_from(&mut self, root: NodeId) {
        self.discover(root);

        while let Some(frame) = self.frames.last_mut() {
            let v = frame.node;

            if let Some(&u) = self.graph.successors(v).get(frame.next_successor) {
                frame.next_successor += 1;

                if self.index[u] == UNDISCOVERED {
                    // Tree edge: descend. The low-link merge happens when
                    // u's frame completes below.
                    self.discover(u);
                } else if self.on_stack[u] {
                    // Back or cross edge into the open stack: u is part of
                    // an unresolved cycle reaching the current branch.
                    self.lowlink[v] = self.lowlink[v].min(self.index[u]);
                }
                // Otherwise u's component is already closed; a cross edge
                // into it cannot lower v's low-link.
            } else {
                // All successors of v examined: the recursion returns.
                self.frames.pop();

                if self.lowlink[v] == self.index[v] {
                    self.emit_component(v);
                }

                if let Some(parent) = self.frames.last() {
                    let p = parent.node;
                    self.lowlink[p] = self.lowlink[p].min(self.lowlink[v]);
                }
            }
        }
    }

    /// Unwind the working stack down to and including `root`, producing one
    /// finished component. Only now do the popped nodes count as attached to
    /// a closed component.
    fn emit_component(&mut self, root: NodeId) {
        let mut component = Vec::new();
        loop {
            let node = self.stack.pop().expect("root is always on the stack");
            self.on_stack[node] = false;
            component.push(node);
            if node == root {
                break;
            }
        }
        self.components.push(component);
    }
}
