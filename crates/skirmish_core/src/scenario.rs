use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ScenarioError;
use crate::narration::Narrator;
use crate::unit::{Archer, Combatant, Mage, Swordman, Unit};
use crate::weapon::{Armament, Bow, Stick, Sword};

const MIN_ROSTER: usize = 2;

/// Roster description, normally read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub units: Vec<UnitSpec>,
}

impl ScenarioConfig {
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let data = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&data)
    }

    pub fn from_toml_str(data: &str) -> Result<Self, ScenarioError> {
        let cfg: ScenarioConfig = toml::from_str(data)?;
        Ok(cfg)
    }

    pub fn build_roster(&self) -> Result<Roster, ScenarioError> {
        if self.units.len() < MIN_ROSTER {
            return Err(ScenarioError::TooFewUnits(self.units.len()));
        }
        let units = self.units.iter().map(UnitSpec::build).collect();
        Ok(Roster { units })
    }
}

/// Arthur, Robin and Merlin.
impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            units: vec![
                UnitSpec::Swordman {
                    name: "Arthur".into(),
                    hp: 120,
                    power: 50,
                    weapon: None,
                },
                UnitSpec::Archer {
                    name: "Robin".into(),
                    hp: 100,
                    arrows: 20,
                    weapon: None,
                },
                UnitSpec::Mage {
                    name: "Merlin".into(),
                    hp: 80,
                    mana: 50,
                    weapon: None,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "class", rename_all = "lowercase")]
pub enum UnitSpec {
    Swordman {
        name: String,
        hp: u32,
        power: u32,
        #[serde(default)]
        weapon: Option<WeaponSpec>,
    },
    Archer {
        name: String,
        hp: u32,
        arrows: u32,
        #[serde(default)]
        weapon: Option<WeaponSpec>,
    },
    Mage {
        name: String,
        hp: u32,
        mana: u32,
        #[serde(default)]
        weapon: Option<WeaponSpec>,
    },
}

impl UnitSpec {
    pub fn build(&self) -> Combatant {
        let (mut unit, weapon) = match self {
            UnitSpec::Swordman {
                name,
                hp,
                power,
                weapon,
            } => (Combatant::from(Swordman::new(name.as_str(), *hp, *power)), weapon),
            UnitSpec::Archer {
                name,
                hp,
                arrows,
                weapon,
            } => (Combatant::from(Archer::new(name.as_str(), *hp, *arrows)), weapon),
            UnitSpec::Mage {
                name,
                hp,
                mana,
                weapon,
            } => (Combatant::from(Mage::new(name.as_str(), *hp, *mana)), weapon),
        };
        if let Some(spec) = weapon {
            unit.base_mut().equip(spec.build());
        }
        unit
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WeaponSpec {
    Stick { name: String, charges: u32 },
    Sword { name: String },
    Bow { name: String, max_damage: u32 },
}

impl WeaponSpec {
    pub fn build(&self) -> Armament {
        match self {
            WeaponSpec::Stick { name, charges } => Stick::new(name.as_str(), *charges).into(),
            WeaponSpec::Sword { name } => Sword::new(name.as_str()).into(),
            WeaponSpec::Bow { name, max_damage } => Bow::new(name.as_str(), *max_damage).into(),
        }
    }
}

/// Units taking part in a round, in turn order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    units: Vec<Combatant>,
}

impl Roster {
    pub fn units(&self) -> &[Combatant] {
        &self.units
    }

    /// Each unit attacks the next one, the last wrapping to the first.
    pub fn run_round(&mut self, narrator: &mut dyn Narrator) {
        let count = self.units.len();
        info!(target: "skirmish.scenario", units = count, "round started");
        for attacker in 0..count {
            let target = (attacker + 1) % count;
            let (unit, foe) = attacker_and_target(&mut self.units, attacker, target);
            debug!(target: "skirmish.scenario", attacker = unit.name(), target = foe.name(), "turn");
            unit.attack(foe, narrator);
        }
    }

    /// Every unit narrates its defense in turn order.
    pub fn defend_all(&self, narrator: &mut dyn Narrator) {
        for unit in &self.units {
            unit.defense(narrator);
        }
    }
}

// Requires attacker != target.
fn attacker_and_target(
    units: &mut [Combatant],
    attacker: usize,
    target: usize,
) -> (&mut Combatant, &Combatant) {
    if attacker < target {
        let (head, tail) = units.split_at_mut(target);
        (&mut head[attacker], &tail[0])
    } else {
        let (head, tail) = units.split_at_mut(attacker);
        (&mut tail[0], &head[target])
    }
}
