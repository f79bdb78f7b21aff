//! Textual renderings of the ring topology.

use crate::node::NodeId;
use crate::topology::Topology;

/// Output format of a topology rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Single line with arrow-joined node fragments.
    Plain,
    /// Minimal HTML page listing the ring.
    Html,
    /// XML document with one element per node.
    Xml,
}

/// Renders one full lap of the ring starting at `start`.
///
/// Requires a closed ring; output is deterministic for an unmodified ring.
pub fn render(topology: &Topology, start: NodeId, mode: RenderMode) -> String {
    match mode {
        RenderMode::Plain => render_plain(topology, start),
        RenderMode::Html => render_html(topology, start),
        RenderMode::Xml => render_xml(topology, start),
    }
}

/// Plain rendering: `Workstation Filip [Workstation] -> ... `.
pub fn render_plain(topology: &Topology, start: NodeId) -> String {
    let mut buf = String::new();
    for id in topology.iter_ring(start) {
        buf.push_str(&topology.node(id).fragment());
        buf.push_str(" -> ");
    }
    buf.push_str(" ... ");
    buf
}

/// HTML rendering: a minimal page shell with the ring as an unordered list.
pub fn render_html(topology: &Topology, start: NodeId) -> String {
    let mut buf =
        String::from("<HTML>\n<HEAD>\n<TITLE>LAN Simulation</TITLE>\n</HEAD>\n<BODY>\n<H1>LAN SIMULATION</H1>");
    buf.push_str("\n\n<UL>");
    for id in topology.iter_ring(start) {
        buf.push_str("\n\t<LI> ");
        buf.push_str(&topology.node(id).fragment());
        buf.push_str(" </LI>");
    }
    buf.push_str("\n\t<LI>...</LI>\n</UL>\n\n</BODY>\n</HTML>\n");
    buf
}

/// XML rendering: a declaration line plus a `<network>` root element.
pub fn render_xml(topology: &Topology, start: NodeId) -> String {
    let mut buf = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\n<network>");
    for id in topology.iter_ring(start) {
        buf.push_str("\n\t");
        buf.push_str(&topology.node(id).xml_fragment());
    }
    buf.push_str("\n</network>");
    buf
}
