use super::value_objects::Stat;
use serde::Serialize;

/// The six base stats of a creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    /// Returns the value of a single stat
    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// Sum of all six stats
    pub fn total(&self) -> u32 {
        Stat::ALL.iter().map(|s| self.get(*s)).sum()
    }
}

/// A single row of the creature catalog
///
/// Records are loaded once and never mutated. Names are not guaranteed to be
/// unique, and `number` may repeat for alternate forms.
///
/// # Example
/// ```
/// use pokebuilder::domain::creature::{BaseStats, Creature, Stat};
///
/// let pika = Creature::new(
///     25,
///     "Pikachu",
///     "Electric",
///     None,
///     BaseStats { hp: 35, attack: 55, ..Default::default() },
/// );
///
/// assert!(pika.has_type("Electric"));
/// assert_eq!(pika.stat(Stat::Hp), 35);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creature {
    number: u32,
    name: String,
    type1: String,
    type2: Option<String>,
    stats: BaseStats,
    generation: Option<u32>,
    legendary: Option<bool>,
}

impl Creature {
    /// Creates a record with no generation or legendary information
    pub fn new(
        number: u32,
        name: impl Into<String>,
        type1: impl Into<String>,
        type2: Option<String>,
        stats: BaseStats,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            type1: type1.into(),
            type2,
            stats,
            generation: None,
            legendary: None,
        }
    }

    /// Attaches the optional catalog columns
    pub fn with_details(mut self, generation: Option<u32>, legendary: Option<bool>) -> Self {
        self.generation = generation;
        self.legendary = legendary;
        self
    }

    // ===== Getters =====

    /// Catalog ordering key (the `#` column)
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type1(&self) -> &str {
        &self.type1
    }

    pub fn type2(&self) -> Option<&str> {
        self.type2.as_deref()
    }

    pub fn stats(&self) -> &BaseStats {
        &self.stats
    }

    pub fn stat(&self, stat: Stat) -> u32 {
        self.stats.get(stat)
    }

    pub fn generation(&self) -> Option<u32> {
        self.generation
    }

    pub fn legendary(&self) -> Option<bool> {
        self.legendary
    }

    /// True when either the primary or the secondary type equals `type_name`
    pub fn has_type(&self, type_name: &str) -> bool {
        self.type1 == type_name || self.type2.as_deref() == Some(type_name)
    }
}
