//! Attack zones and defence pairs
//!
//! Four zones ring the body. A defender covers two adjacent zones; the ring
//! wraps so Legs sits next to Head.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Body zones an attack can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Head,
    Chest,
    Belly,
    Legs,
}

impl Zone {
    /// Returns all zones in menu order
    pub fn all() -> [Zone; 4] {
        [Zone::Head, Zone::Chest, Zone::Belly, Zone::Legs]
    }

    /// Map a 1-based menu choice to a zone
    pub fn from_menu(choice: u32) -> Option<Zone> {
        match choice {
            1 => Some(Zone::Head),
            2 => Some(Zone::Chest),
            3 => Some(Zone::Belly),
            4 => Some(Zone::Legs),
            _ => None,
        }
    }

    /// 1-based menu value
    pub fn menu_value(&self) -> u32 {
        match self {
            Zone::Head => 1,
            Zone::Chest => 2,
            Zone::Belly => 3,
            Zone::Legs => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Zone::Head => "head",
            Zone::Chest => "chest",
            Zone::Belly => "belly",
            Zone::Legs => "legs",
        }
    }

    /// Uniformly random zone
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Zone {
        Zone::all()[rng.gen_range(0..4)]
    }
}

/// Two adjacent zones a defender covers for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefencePair {
    HeadChest,
    ChestBelly,
    BellyLegs,
    LegsHead,
}

impl DefencePair {
    /// Returns all defence pairs in menu order
    pub fn all() -> [DefencePair; 4] {
        [
            DefencePair::HeadChest,
            DefencePair::ChestBelly,
            DefencePair::BellyLegs,
            DefencePair::LegsHead,
        ]
    }

    /// Map a 1-based menu choice to a defence pair
    pub fn from_menu(choice: u32) -> Option<DefencePair> {
        match choice {
            1 => Some(DefencePair::HeadChest),
            2 => Some(DefencePair::ChestBelly),
            3 => Some(DefencePair::BellyLegs),
            4 => Some(DefencePair::LegsHead),
            _ => None,
        }
    }

    /// The two zones this pair protects
    pub fn zones(&self) -> [Zone; 2] {
        match self {
            DefencePair::HeadChest => [Zone::Head, Zone::Chest],
            DefencePair::ChestBelly => [Zone::Chest, Zone::Belly],
            DefencePair::BellyLegs => [Zone::Belly, Zone::Legs],
            DefencePair::LegsHead => [Zone::Legs, Zone::Head],
        }
    }

    pub fn covers(&self, zone: Zone) -> bool {
        self.zones().contains(&zone)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DefencePair::HeadChest => "Head and chest",
            DefencePair::ChestBelly => "Chest and belly",
            DefencePair::BellyLegs => "Belly and legs",
            DefencePair::LegsHead => "Legs and head",
        }
    }

    /// Uniformly random defence pair
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> DefencePair {
        DefencePair::all()[rng.gen_range(0..4)]
    }
}

/// One side's declared choice for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub attack: Zone,
    pub defence: DefencePair,
}

impl Move {
    pub fn new(attack: Zone, defence: DefencePair) -> Self {
        Self { attack, defence }
    }

    /// Uniformly random attack zone and defence pair
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            attack: Zone::random(rng),
            defence: DefencePair::random(rng),
        }
    }
}
