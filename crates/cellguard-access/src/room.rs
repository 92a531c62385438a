//! Rooms and their allow-lists
//!
//! An allow-list is fixed when the room is built. It has two parts:
//! - listed people, inserted explicitly by whoever built the room
//! - standing grants, taken from the policy the room was built under
//!
//! Both count for membership. Only the listed people are ever rendered.

use std::collections::HashSet;
use std::fmt;

use cellguard_core::{GrantId, Person, RoomId};

use crate::AccessPolicy;

/// Immutable set of people allowed into a room
#[derive(Clone, Default)]
pub struct AllowList {
    listed: HashSet<Person>,
    standing: HashSet<GrantId>,
}

impl AllowList {
    /// Allow-list with listed people only
    pub fn new(listed: HashSet<Person>) -> Self {
        Self {
            listed,
            standing: HashSet::new(),
        }
    }

    /// Allow-list that also honours every standing grant in `policy`
    pub fn under_policy(listed: HashSet<Person>, policy: &AccessPolicy) -> Self {
        Self {
            listed,
            standing: policy.grants().collect(),
        }
    }

    /// Membership under the person equality contract
    pub fn contains(&self, person: &Person) -> bool {
        if self.listed.contains(person) {
            return true;
        }
        person
            .grant()
            .is_some_and(|grant| self.standing.contains(&grant))
    }

    /// People explicitly inserted at construction
    pub fn listed(&self) -> impl Iterator<Item = &Person> {
        self.listed.iter()
    }

    pub fn is_listed(&self, person: &Person) -> bool {
        self.listed.contains(person)
    }

    pub fn listed_count(&self) -> usize {
        self.listed.len()
    }

    pub fn standing_count(&self) -> usize {
        self.standing.len()
    }

    /// Disclosed forms of the listed people, sorted for stable output
    fn disclosed(&self) -> Vec<String> {
        let mut forms: Vec<String> = self.listed.iter().map(Person::disclosed_form).collect();
        forms.sort();
        forms
    }
}

impl fmt::Display for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.disclosed().join(", "))
    }
}

impl fmt::Debug for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllowList")
            .field("listed", &self.disclosed())
            .field("standing_grants", &self.standing.len())
            .finish()
    }
}

/// A room in the facility
#[derive(Clone)]
pub struct Room {
    id: RoomId,
    allowed: AllowList,
    neighbours: Vec<RoomId>,
}

impl Room {
    /// Create a room admitting exactly `allowed`
    pub fn new(id: RoomId, allowed: HashSet<Person>) -> Self {
        Self::with_allow_list(id, AllowList::new(allowed))
    }

    /// Create a room admitting `allowed` plus every standing grant of `policy`
    pub fn under_policy(id: RoomId, allowed: HashSet<Person>, policy: &AccessPolicy) -> Self {
        Self::with_allow_list(id, AllowList::under_policy(allowed, policy))
    }

    pub fn with_allow_list(id: RoomId, allowed: AllowList) -> Self {
        Self {
            id,
            allowed,
            neighbours: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// Check if a person may enter
    pub fn allows_entrance(&self, person: &Person) -> bool {
        self.allowed.contains(person)
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allowed
    }

    /// Neighbouring rooms, resolved through the owning graph
    pub fn neighbours(&self) -> &[RoomId] {
        &self.neighbours
    }

    pub(crate) fn add_neighbour(&mut self, neighbour: RoomId) {
        self.neighbours.push(neighbour);
    }

    /// Representation safe to hand to logs
    pub fn display_form(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Room {}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "allowed persons:{}", self.allowed)
    }
}

impl fmt::Debug for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Room")
            .field("id", &self.id)
            .field("allowed", &self.allowed)
            .field("neighbours", &self.neighbours)
            .finish()
    }
}
