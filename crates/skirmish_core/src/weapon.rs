//! Grade-ranked weapons and their upgrade progression.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Base damage given to weapons built without explicit stats.
pub const DEFAULT_DAMAGE: u32 = 10;

const STICK_CHARGES_PER_UPGRADE: u32 = 5;
const BOW_DAMAGE_PER_UPGRADE: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Grade {
    pub const ALL: [Grade; 5] = [
        Grade::Common,
        Grade::Rare,
        Grade::Epic,
        Grade::Legendary,
        Grade::Mythic,
    ];

    /// The following rank. Mythic maps to itself.
    pub fn next(self) -> Self {
        match self {
            Grade::Common => Grade::Rare,
            Grade::Rare => Grade::Epic,
            Grade::Epic => Grade::Legendary,
            Grade::Legendary => Grade::Mythic,
            Grade::Mythic => Grade::Mythic,
        }
    }

    pub fn is_max(self) -> bool {
        self == Grade::Mythic
    }
}

/// Capabilities shared by every weapon.
pub trait Weapon {
    /// Returns the current grade.
    ///
    /// Despite the name this is not a damage magnitude; callers that want
    /// the base damage number use [`WeaponBase::damage`].
    fn get_damage(&self) -> Grade;

    fn upgrade(&mut self);

    fn name(&self) -> &str;
}

/// Plain weapon state. Every variant embeds one and delegates grade
/// advancement to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponBase {
    grade: Grade,
    name: String,
    damage: u32,
}

impl WeaponBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_stats(Grade::Common, name, DEFAULT_DAMAGE)
    }

    pub fn with_stats(grade: Grade, name: impl Into<String>, damage: u32) -> Self {
        Self {
            grade,
            name: name.into(),
            damage,
        }
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }
}

impl Weapon for WeaponBase {
    fn get_damage(&self) -> Grade {
        self.grade
    }

    fn upgrade(&mut self) {
        if self.grade.is_max() {
            debug!(target: "skirmish.weapon", weapon = %self.name, "already at max grade");
            return;
        }
        self.grade = self.grade.next();
        debug!(target: "skirmish.weapon", weapon = %self.name, grade = ?self.grade, "grade advanced");
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stick {
    base: WeaponBase,
    charges: u32,
}

impl Stick {
    pub fn new(name: impl Into<String>, charges: u32) -> Self {
        Self {
            base: WeaponBase::new(name),
            charges,
        }
    }

    pub fn charges(&self) -> u32 {
        self.charges
    }

    pub fn base(&self) -> &WeaponBase {
        &self.base
    }
}

impl Weapon for Stick {
    fn get_damage(&self) -> Grade {
        self.base.get_damage()
    }

    // Charges grow even when the grade is already capped.
    fn upgrade(&mut self) {
        self.base.upgrade();
        self.charges = self.charges.saturating_add(STICK_CHARGES_PER_UPGRADE);
    }

    fn name(&self) -> &str {
        self.base.name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sword {
    base: WeaponBase,
}

impl Sword {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: WeaponBase::new(name),
        }
    }

    pub fn base(&self) -> &WeaponBase {
        &self.base
    }
}

impl Weapon for Sword {
    fn get_damage(&self) -> Grade {
        self.base.get_damage()
    }

    fn upgrade(&mut self) {
        self.base.upgrade();
    }

    fn name(&self) -> &str {
        self.base.name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bow {
    base: WeaponBase,
    max_damage: u32,
}

impl Bow {
    pub fn new(name: impl Into<String>, max_damage: u32) -> Self {
        Self {
            base: WeaponBase::new(name),
            max_damage,
        }
    }

    pub fn max_damage(&self) -> u32 {
        self.max_damage
    }

    pub fn base(&self) -> &WeaponBase {
        &self.base
    }
}

impl Weapon for Bow {
    fn get_damage(&self) -> Grade {
        self.base.get_damage()
    }

    fn upgrade(&mut self) {
        self.base.upgrade();
        self.max_damage = self.max_damage.saturating_add(BOW_DAMAGE_PER_UPGRADE);
    }

    fn name(&self) -> &str {
        self.base.name()
    }
}

/// Any weapon a unit can carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Armament {
    Stick(Stick),
    Sword(Sword),
    Bow(Bow),
}

impl Armament {
    fn as_weapon(&self) -> &dyn Weapon {
        match self {
            Armament::Stick(w) => w,
            Armament::Sword(w) => w,
            Armament::Bow(w) => w,
        }
    }

    fn as_weapon_mut(&mut self) -> &mut dyn Weapon {
        match self {
            Armament::Stick(w) => w,
            Armament::Sword(w) => w,
            Armament::Bow(w) => w,
        }
    }
}

impl Weapon for Armament {
    fn get_damage(&self) -> Grade {
        self.as_weapon().get_damage()
    }

    fn upgrade(&mut self) {
        self.as_weapon_mut().upgrade();
    }

    fn name(&self) -> &str {
        self.as_weapon().name()
    }
}

impl From<Stick> for Armament {
    fn from(value: Stick) -> Self {
        Armament::Stick(value)
    }
}

impl From<Sword> for Armament {
    fn from(value: Sword) -> Self {
        Armament::Sword(value)
    }
}

impl From<Bow> for Armament {
    fn from(value: Bow) -> Self {
        Armament::Bow(value)
    }
}
