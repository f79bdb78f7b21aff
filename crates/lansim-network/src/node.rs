//! Ring node.

use std::io::Write;

use lansim_core::{log_debug, Report};
use serde_json::json;

use crate::document::PrintJob;
use crate::packet::Packet;

/// Unique node id (index into the ring arena).
pub type NodeId = usize;

/// The kind of a node, fixed at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A plain node with no special behavior.
    Generic,
    /// A user workstation, the only kind allowed to originate print requests.
    Workstation,
    /// A printer, the only kind that accepts print jobs.
    Printer,
}

impl NodeKind {
    /// Kind label used in the plain and HTML renderings.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Generic => "Node",
            NodeKind::Workstation => "Workstation",
            NodeKind::Printer => "Printer",
        }
    }

    /// Element name used in the XML rendering.
    pub fn xml_element(&self) -> &'static str {
        match self {
            NodeKind::Generic => "node",
            NodeKind::Workstation => "workstation",
            NodeKind::Printer => "printer",
        }
    }
}

/// A node in the token ring.
pub struct Node {
    /// Node kind.
    pub kind: NodeKind,
    /// Node name, unique within a ring by convention.
    pub name: String,
    pub(crate) next: NodeId,
}

impl Node {
    /// Arena index of the successor node.
    pub fn next(&self) -> NodeId {
        self.next
    }

    /// Delivers a document packet to this node.
    ///
    /// A printer parses the payload and prints it, writing the accounting
    /// record and a completion note to the report. Any other kind writes a
    /// rejection notice. Returns whether the job was accepted.
    pub fn handle_document<W: Write>(&self, packet: &Packet, report: &mut Report<W>) -> bool {
        if self.kind != NodeKind::Printer {
            report.append(">>> Destination is not a printer, print job cancelled.\n\n");
            return false;
        }
        let job = PrintJob::parse(&packet.payload);
        log_debug!(
            self.name.as_str(),
            "print job accepted: {}",
            json!({"job": &job, "origin": &packet.origin})
        );
        report.append(&format!(
            "\tAccounting -- author = '{}' -- title = '{}'\n",
            job.author, job.title
        ));
        report.append(job.completion_note());
        true
    }

    /// Rendering fragment used by the plain and HTML walks,
    /// e.g. `Printer Andy [Printer]`.
    pub fn fragment(&self) -> String {
        format!("{} {} [{}]", self.kind.label(), self.name, self.kind.label())
    }

    /// Rendering fragment used by the XML walk, e.g. `<printer>Andy</printer>`.
    pub fn xml_fragment(&self) -> String {
        let element = self.kind.xml_element();
        format!("<{}>{}</{}>", element, self.name, element)
    }
}

#[cfg(test)]
mod tests {
    use lansim_core::Report;

    use super::{Node, NodeKind};
    use crate::packet::Packet;

    fn node(kind: NodeKind, name: &str) -> Node {
        Node {
            kind,
            name: name.to_string(),
            next: 0,
        }
    }

    fn report_text(report: Report<Vec<u8>>) -> String {
        String::from_utf8(report.into_inner()).unwrap()
    }

    #[test]
    fn printer_accepts_and_accounts() {
        let printer = node(NodeKind::Printer, "Andy");
        let packet = Packet::new("!PS author:Alice.title:Report.", "Filip", "Andy");
        let mut report = Report::new(Vec::new());
        assert!(printer.handle_document(&packet, &mut report));
        assert_eq!(
            report_text(report),
            "\tAccounting -- author = 'Alice' -- title = 'Report'\n>>> Postscript job delivered.\n\n"
        );
    }

    #[test]
    fn workstation_rejects() {
        let ws = node(NodeKind::Workstation, "Filip");
        let packet = Packet::new("!PS author:Alice.title:Report.", "Hans", "Filip");
        let mut report = Report::new(Vec::new());
        assert!(!ws.handle_document(&packet, &mut report));
        assert_eq!(
            report_text(report),
            ">>> Destination is not a printer, print job cancelled.\n\n"
        );
    }

    #[test]
    fn generic_node_rejects_regardless_of_payload() {
        let generic = node(NodeKind::Generic, "Hans");
        for payload in ["!PS author:Alice.", "plain text", ""] {
            let packet = Packet::new(payload, "Filip", "Hans");
            let mut report = Report::new(Vec::new());
            assert!(!generic.handle_document(&packet, &mut report));
        }
    }

    #[test]
    fn fragments_follow_kind() {
        assert_eq!(node(NodeKind::Generic, "n1").fragment(), "Node n1 [Node]");
        assert_eq!(
            node(NodeKind::Workstation, "w1").fragment(),
            "Workstation w1 [Workstation]"
        );
        assert_eq!(
            node(NodeKind::Printer, "p1").xml_fragment(),
            "<printer>p1</printer>"
        );
    }
}
