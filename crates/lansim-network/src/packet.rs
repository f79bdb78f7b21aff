//! Packets circulating in the ring.

use serde::Serialize;

/// An addressed message passed from node to successor around the token ring.
///
/// A packet is created per simulated send, consumed during one traversal and
/// then discarded; no node stores it.
#[derive(Clone, Debug, Serialize)]
pub struct Packet {
    /// Payload text, either a pseudo-PostScript document or plain ASCII.
    pub payload: String,
    /// Name of the sending node.
    pub origin: String,
    /// Name of the intended receiving node.
    pub destination: String,
}

impl Packet {
    /// Creates a new packet.
    pub fn new(payload: &str, origin: &str, destination: &str) -> Self {
        Self {
            payload: payload.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }
}
