//! Access policy - which key cards carry a standing grant
//!
//! A standing grant admits its holder to every room built under the policy.
//! Rooms learn the grant ids at construction time; the parser learns which
//! card data maps to which grant.

use std::collections::HashMap;
use std::fmt;

use cellguard_core::GrantId;

/// Standing grants keyed by the exact card data they were issued for
#[derive(Clone, Default)]
pub struct AccessPolicy {
    standing: HashMap<String, GrantId>,
}

impl AccessPolicy {
    /// Create a policy without any standing grants
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`AccessPolicy::issue`]
    pub fn with_standing_grant(mut self, card_data: impl Into<String>) -> Self {
        self.issue(card_data);
        self
    }

    /// Issue a standing grant for the given card data
    ///
    /// Issuing twice for the same card data yields the same grant.
    pub fn issue(&mut self, card_data: impl Into<String>) -> GrantId {
        let card_data = card_data.into();
        let grant = GrantId::from_card_data(&card_data);
        self.standing.insert(card_data, grant);
        grant
    }

    /// Grant issued for this exact card data, if any
    pub fn grant_for(&self, card_data: &str) -> Option<GrantId> {
        self.standing.get(card_data).copied()
    }

    /// All issued grants
    pub fn grants(&self) -> impl Iterator<Item = GrantId> + '_ {
        self.standing.values().copied()
    }

    pub fn len(&self) -> usize {
        self.standing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standing.is_empty()
    }
}

impl fmt::Debug for AccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessPolicy")
            .field("standing_grants", &self.standing.len())
            .finish()
    }
}
