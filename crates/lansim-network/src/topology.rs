//! Ring topology: an arena of nodes linked by successor indices.

use rustc_hash::FxHashMap;

use crate::node::{Node, NodeId, NodeKind};

/// The closed circular chain of nodes representing the LAN.
///
/// Nodes live in an arena and point to their successor by index. Nodes are
/// added in successor order; [`close`](Topology::close) links the last node
/// back to the first and seals the ring. Successor links are never mutated
/// afterwards.
pub struct Topology {
    nodes: Vec<Node>,
    name_index: FxHashMap<String, NodeId>,
    closed: bool,
}

impl Topology {
    /// Creates an empty, open topology.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            name_index: FxHashMap::default(),
            closed: false,
        }
    }

    /// Builds the three-node demo ring:
    /// workstation "Filip" -> node "Hans" -> printer "Andy" -> "Filip".
    pub fn default_example() -> Self {
        let mut topology = Self::new();
        topology.add_node(NodeKind::Workstation, "Filip");
        topology.add_node(NodeKind::Generic, "Hans");
        topology.add_node(NodeKind::Printer, "Andy");
        topology.close();
        topology
    }

    /// Adds a node as successor of the previously added node.
    pub fn add_node(&mut self, kind: NodeKind, name: &str) -> NodeId {
        assert!(!self.closed, "cannot add a node to a closed ring");
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind,
            name: name.to_string(),
            next: id,
        });
        if id > 0 {
            self.nodes[id - 1].next = id;
        }
        // Name uniqueness is convention, not enforced: the first node with a
        // given name stays reachable by lookup.
        self.name_index.entry(name.to_string()).or_insert(id);
        id
    }

    /// Closes the ring by linking the last added node back to the first.
    pub fn close(&mut self) {
        assert!(!self.nodes.is_empty(), "cannot close an empty ring");
        let last = self.nodes.len() - 1;
        self.nodes[last].next = 0;
        self.closed = true;
        self.check_ring();
    }

    /// Verifies that following successor links from the entry node returns
    /// to it after exactly `len()` steps. A violation is a construction bug.
    pub fn check_ring(&self) {
        assert!(self.closed, "ring is not closed");
        let entry = self.entry_node();
        let mut current = entry;
        for _ in 0..self.nodes.len() {
            current = self.nodes[current].next;
        }
        assert_eq!(current, entry, "ring does not close back on the entry node");
    }

    /// Returns whether the ring has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of nodes in the ring.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the topology has no nodes yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The ring's entry node (the first one added).
    pub fn entry_node(&self) -> NodeId {
        assert!(!self.nodes.is_empty(), "empty ring has no entry node");
        0
    }

    /// Borrows a node by id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Finds a node by name.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.name_index.get(name).copied()
    }

    /// Iterates one full lap of the ring in successor order, starting at
    /// `start` and visiting every node exactly once.
    pub fn iter_ring(&self, start: NodeId) -> RingIter<'_> {
        self.check_ring();
        RingIter {
            topology: self,
            start,
            current: start,
            done: false,
        }
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over one full lap of the ring.
pub struct RingIter<'a> {
    topology: &'a Topology,
    start: NodeId,
    current: NodeId,
    done: bool,
}

impl<'a> Iterator for RingIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.done {
            return None;
        }
        let id = self.current;
        self.current = self.topology.node(id).next;
        if self.current == self.start {
            self.done = true;
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::Topology;
    use crate::node::NodeKind;

    #[test]
    fn default_example_layout() {
        let topology = Topology::default_example();
        assert_eq!(topology.len(), 3);
        let filip = topology.lookup("Filip").unwrap();
        let hans = topology.lookup("Hans").unwrap();
        let andy = topology.lookup("Andy").unwrap();
        assert_eq!(topology.node(filip).next(), hans);
        assert_eq!(topology.node(hans).next(), andy);
        assert_eq!(topology.node(andy).next(), filip);
        assert_eq!(topology.node(filip).kind, NodeKind::Workstation);
        assert_eq!(topology.node(andy).kind, NodeKind::Printer);
    }

    #[test]
    fn single_node_ring_points_to_itself() {
        let mut topology = Topology::new();
        let only = topology.add_node(NodeKind::Printer, "only");
        topology.close();
        assert_eq!(topology.node(only).next(), only);
        assert_eq!(topology.iter_ring(only).collect::<Vec<_>>(), vec![only]);
    }

    #[test]
    fn ring_walk_visits_every_node_once() {
        let mut topology = Topology::new();
        for i in 0..5 {
            topology.add_node(NodeKind::Generic, &format!("n{}", i));
        }
        topology.close();
        let start = topology.lookup("n2").unwrap();
        let visited: Vec<_> = topology.iter_ring(start).collect();
        assert_eq!(visited, vec![2, 3, 4, 0, 1]);
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let mut topology = Topology::new();
        let first = topology.add_node(NodeKind::Workstation, "twin");
        topology.add_node(NodeKind::Printer, "twin");
        topology.close();
        assert_eq!(topology.lookup("twin"), Some(first));
    }

    #[test]
    #[should_panic(expected = "cannot close an empty ring")]
    fn closing_empty_ring_panics() {
        Topology::new().close();
    }

    #[test]
    #[should_panic(expected = "cannot add a node to a closed ring")]
    fn adding_to_closed_ring_panics() {
        let mut topology = Topology::new();
        topology.add_node(NodeKind::Generic, "n");
        topology.close();
        topology.add_node(NodeKind::Generic, "late");
    }

    #[test]
    #[should_panic(expected = "ring is not closed")]
    fn walking_an_open_ring_panics() {
        let mut topology = Topology::new();
        topology.add_node(NodeKind::Generic, "n");
        topology.iter_ring(0).count();
    }
}
