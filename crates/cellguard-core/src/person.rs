//! Person identity
//!
//! A [`Person`] has two faces:
//! - a [`MatchKey`] that drives `Eq`/`Hash` and therefore every allow-list
//!   and registry lookup
//! - a [`Name`] that drives the accessors and the disclosed form
//!
//! For ordinary people the match key is the name itself. A person issued a
//! standing grant matches on the grant instead, while still reporting the
//! name that was on the card.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::GrantId;

/// The two name fields carried on a key card
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name {
    primary: Arc<str>,
    secondary: Arc<str>,
}

impl Name {
    pub fn new(primary: impl Into<Arc<str>>, secondary: impl Into<Arc<str>>) -> Self {
        Name {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    #[inline]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    #[inline]
    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// Does either field occur in `text`?
    pub fn appears_in(&self, text: &str) -> bool {
        text.contains(self.primary()) || text.contains(self.secondary())
    }
}

/// What equality and hashing of a [`Person`] are based on
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatchKey {
    /// Field-wise, case-sensitive name match
    Named(Name),
    /// Standing grant, recognised by rooms built under the issuing policy
    Standing(GrantId),
}

/// A person as seen by the access core
#[derive(Clone, Debug)]
pub struct Person {
    name: Name,
    key: MatchKey,
}

impl Person {
    /// Create an ordinary person; fields are stored verbatim
    pub fn new(primary: impl Into<Arc<str>>, secondary: impl Into<Arc<str>>) -> Self {
        Self::from_name(Name::new(primary, secondary))
    }

    pub fn from_name(name: Name) -> Self {
        Person {
            key: MatchKey::Named(name.clone()),
            name,
        }
    }

    /// Create a person that matches on a standing grant instead of its name
    pub fn with_grant(name: Name, grant: GrantId) -> Self {
        Person {
            name,
            key: MatchKey::Standing(grant),
        }
    }

    #[inline]
    pub fn primary(&self) -> &str {
        self.name.primary()
    }

    #[inline]
    pub fn secondary(&self) -> &str {
        self.name.secondary()
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    #[inline]
    pub fn match_key(&self) -> &MatchKey {
        &self.key
    }

    /// The standing grant this person matches on, if any
    pub fn grant(&self) -> Option<GrantId> {
        match self.key {
            MatchKey::Standing(grant) => Some(grant),
            MatchKey::Named(_) => None,
        }
    }

    pub fn is_privileged(&self) -> bool {
        self.grant().is_some()
    }

    /// The same person without any standing grant
    pub fn named(&self) -> Person {
        Person::from_name(self.name.clone())
    }

    /// Representation for display and logs; never consulted by `Eq`/`Hash`
    pub fn disclosed_form(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person{{primary='{}', secondary='{}'}}",
            self.name.primary(),
            self.name.secondary()
        )
    }
}
