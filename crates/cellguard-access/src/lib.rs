//! CellGuard Access
//!
//! Authorization core for a facility of rooms.
//!
//! # Model
//!
//! Key card data is parsed into a [`Person`](cellguard_core::Person). Each
//! room holds a fixed allow-list and answers one question: does this person
//! pass? A session-owned registry maps every inmate to their home cell.
//!
//! Key concepts:
//! - Policy: which card data carries a standing grant
//! - Parser: card data to person, the only replaceable policy point
//! - Room: allow-list membership plus a disclosure-safe display form
//! - Graph: rooms and their undirected neighbour edges
//! - Registry: person to home cell, replaced wholesale
//!
//! # Membership vs. disclosure
//!
//! A room admits everyone on its listed allow-list and every holder of a
//! standing grant issued by the policy it was built under. It only ever
//! renders the listed members.

pub mod graph;
pub mod parser;
pub mod policy;
pub mod registry;
pub mod room;

pub use graph::*;
pub use parser::*;
pub use policy::*;
pub use registry::*;
pub use room::*;
