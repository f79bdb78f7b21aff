//! Packet circulation over the ring.

use std::io::Write;

use lansim_core::{log_debug, Report};
use serde_json::json;

use crate::node::NodeKind;
use crate::packet::Packet;
use crate::render::{self, RenderMode};
use crate::topology::Topology;

const NETWORK_NAME: &str = "network";

/// Drives packets around a closed token ring and reports the outcomes.
pub struct Network {
    topology: Topology,
}

impl Network {
    /// Creates a network over a closed ring.
    pub fn new(topology: Topology) -> Self {
        topology.check_ring();
        Self { topology }
    }

    /// Creates a network over the three-node demo ring.
    pub fn default_example() -> Self {
        Self::new(Topology::default_example())
    }

    /// Read access to the underlying ring.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Simulates a workstation requesting a document to be printed.
    ///
    /// The packet is handed from successor to successor until a node named
    /// `destination` takes delivery, where kind-specific handling decides
    /// whether the job is accepted. If the walk comes back around to the
    /// starting node without a match the packet is undeliverable; this is
    /// reported and the request returns `false` rather than circling
    /// forever.
    ///
    /// Requires `origin` to name a workstation in the ring.
    pub fn print_document<W: Write>(
        &self,
        origin: &str,
        payload: &str,
        destination: &str,
        report: &mut Report<W>,
    ) -> bool {
        let start = self
            .topology
            .lookup(origin)
            .unwrap_or_else(|| panic!("origin '{}' is not part of the ring", origin));
        assert_eq!(
            self.topology.node(start).kind,
            NodeKind::Workstation,
            "origin '{}' is not a workstation",
            origin
        );

        let packet = Packet::new(payload, origin, destination);
        report.append(&format!(
            "'{}' requests printing of '{}' on '{}' ...\n",
            packet.origin, packet.payload, packet.destination
        ));

        let mut hops = 1;
        let mut current = self.topology.node(start).next();
        loop {
            let node = self.topology.node(current);
            if node.name == packet.destination {
                let accepted = node.handle_document(&packet, report);
                log_debug!(
                    NETWORK_NAME,
                    "delivery after {} hops: {}",
                    hops,
                    json!({"packet": &packet, "accepted": accepted})
                );
                return accepted;
            }
            // Lap termination is by node identity, not name: duplicate names
            // are tolerated in the ring and must not cut the walk short.
            if current == start {
                report.append(&format!(
                    ">>> Destination '{}' not found, print job cancelled.\n\n",
                    packet.destination
                ));
                log_debug!(
                    NETWORK_NAME,
                    "destination not found after {} hops: {}",
                    hops,
                    json!({"packet": &packet})
                );
                return false;
            }
            report.append(&format!("\tNode '{}' passes packet on.\n", node.name));
            current = node.next();
            hops += 1;
        }
    }

    /// Simulates a broadcast packet traversing the whole ring once.
    ///
    /// Every node accepts the packet as it passes; the traversal always
    /// succeeds.
    pub fn broadcast<W: Write>(&self, origin: &str, payload: &str, report: &mut Report<W>) -> bool {
        let start = self
            .topology
            .lookup(origin)
            .unwrap_or_else(|| panic!("origin '{}' is not part of the ring", origin));

        let packet = Packet::new(payload, origin, origin);
        report.append("Broadcast Request\n");
        for id in self.topology.iter_ring(start) {
            report.append(&format!(
                "\tNode '{}' accepts broadcast packet.\n",
                self.topology.node(id).name
            ));
        }
        report.append(">>> Broadcast traversed whole token ring.\n\n");
        log_debug!(
            NETWORK_NAME,
            "broadcast complete after {} hops: {}",
            self.topology.len(),
            json!({"packet": &packet})
        );
        true
    }

    /// Renders the ring topology in the requested mode, starting at the
    /// entry node.
    pub fn render(&self, mode: RenderMode) -> String {
        render::render(&self.topology, self.topology.entry_node(), mode)
    }
}
