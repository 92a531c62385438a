//! Room graph - rooms and their undirected neighbour edges
//!
//! The graph owns every room. Rooms refer to their neighbours by id, so
//! cycles are fine. Edges are stored as reciprocal neighbour entries and are
//! only ever appended.

use std::collections::BTreeMap;

use cellguard_core::{AccessError, AccessResult, Person, RoomId};

use crate::{CellRegistry, Room};

/// A facility: rooms plus neighbour edges
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: BTreeMap<RoomId, Room>,
    edge_count: usize,
}

impl RoomGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a room; ids must be unique within the graph
    pub fn add_room(&mut self, room: Room) -> AccessResult<RoomId> {
        let id = room.id();
        if self.rooms.contains_key(&id) {
            return Err(AccessError::DuplicateRoom(id));
        }
        self.rooms.insert(id, room);
        Ok(id)
    }

    /// Connect two rooms with an undirected edge
    ///
    /// A room connected to itself gets a single neighbour entry.
    pub fn connect(&mut self, a: RoomId, b: RoomId) -> AccessResult<()> {
        if !self.rooms.contains_key(&b) {
            return Err(AccessError::UnknownRoom(b));
        }
        let room_a = self.rooms.get_mut(&a).ok_or(AccessError::UnknownRoom(a))?;
        room_a.add_neighbour(b);

        if a != b {
            if let Some(room_b) = self.rooms.get_mut(&b) {
                room_b.add_neighbour(a);
            }
        }

        self.edge_count += 1;
        tracing::trace!(%a, %b, "rooms connected");
        Ok(())
    }

    /// Get a room by id
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// All rooms, in id order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Neighbouring rooms of `id`
    pub fn neighbours(&self, id: RoomId) -> AccessResult<impl Iterator<Item = &Room>> {
        let room = self.room(id).ok_or(AccessError::UnknownRoom(id))?;
        Ok(room
            .neighbours()
            .iter()
            .filter_map(move |neighbour| self.rooms.get(neighbour)))
    }

    /// Rooms that let `person` in
    pub fn rooms_admitting<'a>(&'a self, person: &'a Person) -> impl Iterator<Item = &'a Room> {
        self.rooms().filter(move |room| room.allows_entrance(person))
    }

    /// Home cell of `person`, resolved against this graph
    pub fn cell_for(&self, registry: &CellRegistry, person: &Person) -> Option<&Room> {
        registry.cell_for(person).and_then(|id| self.room(id))
    }

    /// Get room count
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Get edge count
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
