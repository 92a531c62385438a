//! Facility generator - seeded random room graphs for testing
//!
//! Builds a connected facility the same way every time for a given seed:
//! - a root room, recursively sprouting up to `max_connections - 1` edges,
//!   each either to a freshly created room or to an existing one
//! - one cell per inmate, attached to a random existing room
//!
//! Draw order per room: connection count, then for each connection
//! new-vs-existing, then (for existing) the target index. Every room admits
//! the supervisor; each cell additionally admits its inmate.

use std::collections::HashSet;
use std::sync::Arc;

use cellguard_access::{AccessPolicy, CellMap, CellRegistry, KeyCardParser, Room, RoomGraph};
use cellguard_core::{AccessResult, Name, Person, RoomId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generator configuration
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Random seed
    pub seed: u64,
    /// Exclusive upper bound on extra connections drawn per generated room
    pub max_connections: u32,
    /// Person admitted to every room
    pub supervisor: Name,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            seed: 2000,
            max_connections: 4,
            supervisor: Name::new("Epp-Maria", "Kivimaa"),
        }
    }
}

impl GeneratorConfig {
    /// Corridor-like facility, rooms mostly in a chain
    pub fn sparse() -> Self {
        GeneratorConfig {
            max_connections: 2,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A generated facility with everything a session needs
#[derive(Debug)]
pub struct Facility {
    pub graph: RoomGraph,
    pub registry: CellRegistry,
    pub policy: Arc<AccessPolicy>,
    /// Room ids in creation order
    pub order: Vec<RoomId>,
}

impl Facility {
    /// A parser bound to this facility's policy
    pub fn parser(&self) -> KeyCardParser {
        KeyCardParser::with_policy(self.policy.clone())
    }

    /// Home cell of `person`
    pub fn cell_for(&self, person: &Person) -> Option<&Room> {
        self.graph.cell_for(&self.registry, person)
    }

    /// Rooms whose display form mentions either field of `name`
    pub fn rooms_disclosing<'a>(&'a self, name: &'a Name) -> impl Iterator<Item = &'a Room> {
        self.graph
            .rooms()
            .filter(move |room| name.appears_in(&room.display_form()))
    }
}

/// Seeded facility generator
pub struct FacilityGenerator {
    config: GeneratorConfig,
    policy: Arc<AccessPolicy>,
    rng: StdRng,
    next_id: RoomId,
    graph: RoomGraph,
    order: Vec<RoomId>,
}

impl FacilityGenerator {
    /// Generator whose rooms honour no standing grants
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_policy(config, Arc::new(AccessPolicy::new()))
    }

    /// Generator whose rooms honour every standing grant in `policy`
    pub fn with_policy(config: GeneratorConfig, policy: Arc<AccessPolicy>) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self {
            config,
            policy,
            rng,
            next_id: RoomId::ZERO,
            graph: RoomGraph::new(),
            order: Vec::new(),
        }
    }

    /// Generate the facility, giving each inmate a cell
    pub fn generate(mut self, inmates: &[Person]) -> AccessResult<Facility> {
        self.create_room()?;

        let mut cells = CellMap::new();
        for inmate in inmates {
            let neighbour = self.pick_existing();
            let allowed = HashSet::from([self.supervisor(), inmate.clone()]);
            let cell = self.add_room(allowed)?;
            self.graph.connect(cell, neighbour)?;
            cells.insert(inmate.clone(), cell);
        }

        tracing::debug!(
            rooms = self.graph.len(),
            edges = self.graph.edge_count(),
            cells = cells.len(),
            "facility generated"
        );

        Ok(Facility {
            graph: self.graph,
            registry: CellRegistry::with_cells(cells),
            policy: self.policy,
            order: self.order,
        })
    }

    fn create_room(&mut self) -> AccessResult<RoomId> {
        let allowed = HashSet::from([self.supervisor()]);
        let room = self.add_room(allowed)?;

        let connections = self.rng.gen_range(0..self.config.max_connections.max(1));
        for _ in 0..connections {
            let neighbour = if self.rng.gen::<bool>() {
                self.create_room()?
            } else {
                self.pick_existing()
            };
            self.graph.connect(room, neighbour)?;
        }

        Ok(room)
    }

    fn add_room(&mut self, allowed: HashSet<Person>) -> AccessResult<RoomId> {
        let id = self.next_id;
        self.next_id = id.next();
        self.graph
            .add_room(Room::under_policy(id, allowed, &self.policy))?;
        self.order.push(id);
        Ok(id)
    }

    fn pick_existing(&mut self) -> RoomId {
        let index = self.rng.gen_range(0..self.order.len());
        self.order[index]
    }

    fn supervisor(&self) -> Person {
        Person::from_name(self.config.supervisor.clone())
    }
}
