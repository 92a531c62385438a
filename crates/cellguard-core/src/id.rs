//! Identifier types for CellGuard
//!
//! Room identifiers are assigned by whoever builds the facility graph.
//! Grant identifiers are fingerprints of privileged card data.

use std::fmt;

use sha2::{Digest, Sha256};

/// Room identity - unique within one facility graph
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RoomId(pub u32);

impl RoomId {
    pub const ZERO: RoomId = RoomId(0);

    #[inline]
    pub fn new(id: u32) -> Self {
        RoomId(id)
    }

    /// The next identifier in allocation order
    #[inline]
    pub fn next(self) -> Self {
        RoomId(self.0.wrapping_add(1))
    }
}

impl fmt::Debug for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room#{}", self.0)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Standing grant identity - truncated hash of the card data it was issued for
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GrantId(pub u64);

impl GrantId {
    #[inline]
    pub fn new(id: u64) -> Self {
        GrantId(id)
    }

    /// Derive a grant id from raw card data (first 8 bytes of SHA-256)
    pub fn from_card_data(card_data: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(card_data.as_bytes());
        let hash = hasher.finalize();
        let mut id_bytes = [0u8; 8];
        id_bytes.copy_from_slice(&hash[0..8]);
        GrantId(u64::from_le_bytes(id_bytes))
    }
}

impl fmt::Debug for GrantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grant({:016x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_next() {
        assert_eq!(RoomId::new(3).next(), RoomId::new(4));
        assert_eq!(RoomId::ZERO.next(), RoomId::new(1));
    }

    #[test]
    fn test_room_id_display() {
        assert_eq!(RoomId::new(3).to_string(), "#3");
        assert_eq!(format!("{:?}", RoomId::new(3)), "Room#3");
    }

    #[test]
    fn test_grant_id_deterministic() {
        let a = GrantId::from_card_data("Vladimir,Morozov");
        let b = GrantId::from_card_data("Vladimir,Morozov");
        let c = GrantId::from_card_data("Siim,Valdaru");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_grant_id_debug_hides_card_data() {
        let grant = GrantId::from_card_data("Vladimir,Morozov");
        let rendered = format!("{:?}", grant);

        assert!(rendered.starts_with("Grant("));
        assert!(!rendered.contains("Vladimir"));
    }
}
