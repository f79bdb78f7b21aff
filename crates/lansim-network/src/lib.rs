#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod document;
pub mod network;
pub mod node;
pub mod packet;
pub mod render;
pub mod topology;

pub use document::{DocumentFormat, PrintJob};
pub use network::Network;
pub use node::{Node, NodeId, NodeKind};
pub use packet::Packet;
pub use render::RenderMode;
pub use topology::Topology;
