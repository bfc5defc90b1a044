//! Combatants and their attack/defense narration.

use tracing::debug;

use crate::narration::Narrator;
use crate::weapon::Armament;

/// Speed every unit starts with. Nothing changes it.
pub const UNIT_SPEED: u32 = 10;
/// HP for units built from a name alone.
pub const DEFAULT_HP: u32 = 100;

const MANA_PER_SPELL: u32 = 10;

/// Capabilities shared by every combatant.
pub trait Unit {
    fn name(&self) -> &str;

    /// Narrates an attack on `target`. The target is only named, never
    /// modified.
    fn attack(&mut self, target: &dyn Unit, narrator: &mut dyn Narrator);

    fn defense(&self, narrator: &mut dyn Narrator);
}

/// State shared by all combatants, plus the generic attack/defense lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitBase {
    name: String,
    hp: u32,
    speed: u32,
    weapon: Option<Armament>,
}

impl UnitBase {
    pub fn new(name: impl Into<String>, hp: u32) -> Self {
        Self {
            name: name.into(),
            hp,
            speed: UNIT_SPEED,
            weapon: None,
        }
    }

    pub fn nameless(hp: u32) -> Self {
        Self::new(String::new(), hp)
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_HP)
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn weapon(&self) -> Option<&Armament> {
        self.weapon.as_ref()
    }

    pub fn weapon_mut(&mut self) -> Option<&mut Armament> {
        self.weapon.as_mut()
    }

    /// Puts `weapon` in the slot and hands back whatever was there.
    pub fn equip(&mut self, weapon: Armament) -> Option<Armament> {
        self.weapon.replace(weapon)
    }
}

impl Unit for UnitBase {
    fn name(&self) -> &str {
        &self.name
    }

    fn attack(&mut self, target: &dyn Unit, narrator: &mut dyn Narrator) {
        narrator.narrate(&format!("{} attacks {}!", self.name, target.name()));
    }

    fn defense(&self, narrator: &mut dyn Narrator) {
        narrator.narrate(&format!("{} defends!", self.name));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swordman {
    base: UnitBase,
    power: u32,
}

impl Swordman {
    pub fn new(name: impl Into<String>, hp: u32, power: u32) -> Self {
        Self {
            base: UnitBase::new(name, hp),
            power,
        }
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn base(&self) -> &UnitBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut UnitBase {
        &mut self.base
    }
}

impl Unit for Swordman {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn attack(&mut self, target: &dyn Unit, narrator: &mut dyn Narrator) {
        narrator.narrate(&format!("{} strikes with power {}!", self.name(), self.power));
        self.base.attack(target, narrator);
    }

    fn defense(&self, narrator: &mut dyn Narrator) {
        narrator.narrate(&format!("{} raises a shield!", self.name()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archer {
    base: UnitBase,
    arrows: u32,
}

impl Archer {
    pub fn new(name: impl Into<String>, hp: u32, arrows: u32) -> Self {
        Self {
            base: UnitBase::new(name, hp),
            arrows,
        }
    }

    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    pub fn base(&self) -> &UnitBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut UnitBase {
        &mut self.base
    }
}

impl Unit for Archer {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn attack(&mut self, target: &dyn Unit, narrator: &mut dyn Narrator) {
        if self.arrows > 0 {
            narrator.narrate(&format!("{} shoots an arrow!", self.name()));
            self.arrows -= 1;
            debug!(target: "skirmish.unit", unit = self.name(), arrows = self.arrows, "arrow loosed");
        } else {
            narrator.narrate(&format!("{} is out of arrows!", self.name()));
        }
        self.base.attack(target, narrator);
    }

    fn defense(&self, narrator: &mut dyn Narrator) {
        narrator.narrate(&format!("{} dodges swiftly!", self.name()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mage {
    base: UnitBase,
    // Nominally 0..=100.
    mana: u32,
}

impl Mage {
    pub fn new(name: impl Into<String>, hp: u32, mana: u32) -> Self {
        Self {
            base: UnitBase::new(name, hp),
            mana,
        }
    }

    pub fn mana(&self) -> u32 {
        self.mana
    }

    pub fn base(&self) -> &UnitBase {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut UnitBase {
        &mut self.base
    }
}

impl Unit for Mage {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn attack(&mut self, target: &dyn Unit, narrator: &mut dyn Narrator) {
        if self.mana >= MANA_PER_SPELL {
            narrator.narrate(&format!("{} casts a spell!", self.name()));
            self.mana -= MANA_PER_SPELL;
            debug!(target: "skirmish.unit", unit = self.name(), mana = self.mana, "spell cast");
        } else {
            narrator.narrate(&format!("{} is out of mana!", self.name()));
        }
        self.base.attack(target, narrator);
    }

    fn defense(&self, narrator: &mut dyn Narrator) {
        narrator.narrate(&format!("{} conjures a magical shield!", self.name()));
    }
}

/// Any unit that can take part in a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Combatant {
    Swordman(Swordman),
    Archer(Archer),
    Mage(Mage),
}

impl Combatant {
    pub fn base(&self) -> &UnitBase {
        match self {
            Combatant::Swordman(u) => u.base(),
            Combatant::Archer(u) => u.base(),
            Combatant::Mage(u) => u.base(),
        }
    }

    pub fn base_mut(&mut self) -> &mut UnitBase {
        match self {
            Combatant::Swordman(u) => u.base_mut(),
            Combatant::Archer(u) => u.base_mut(),
            Combatant::Mage(u) => u.base_mut(),
        }
    }

    fn as_unit(&self) -> &dyn Unit {
        match self {
            Combatant::Swordman(u) => u,
            Combatant::Archer(u) => u,
            Combatant::Mage(u) => u,
        }
    }

    fn as_unit_mut(&mut self) -> &mut dyn Unit {
        match self {
            Combatant::Swordman(u) => u,
            Combatant::Archer(u) => u,
            Combatant::Mage(u) => u,
        }
    }
}

impl Unit for Combatant {
    fn name(&self) -> &str {
        self.as_unit().name()
    }

    fn attack(&mut self, target: &dyn Unit, narrator: &mut dyn Narrator) {
        self.as_unit_mut().attack(target, narrator);
    }

    fn defense(&self, narrator: &mut dyn Narrator) {
        self.as_unit().defense(narrator);
    }
}

impl From<Swordman> for Combatant {
    fn from(value: Swordman) -> Self {
        Combatant::Swordman(value)
    }
}

impl From<Archer> for Combatant {
    fn from(value: Archer) -> Self {
        Combatant::Archer(value)
    }
}

impl From<Mage> for Combatant {
    fn from(value: Mage) -> Self {
        Combatant::Mage(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::Transcript;
    use crate::weapon::{Bow, Sword};

    fn dummy() -> UnitBase {
        UnitBase::named("Dummy")
    }

    #[test]
    fn swordman_narrates_power_then_base_line() {
        let mut arthur = Swordman::new("Arthur", 120, 50);
        let mut transcript = Transcript::new();
        arthur.attack(&dummy(), &mut transcript);
        assert_eq!(
            vec!["Arthur strikes with power 50!", "Arthur attacks Dummy!"],
            transcript.into_lines()
        );
        assert_eq!(50, arthur.power());
    }

    #[test]
    fn archer_spends_one_arrow_per_attack() {
        let mut robin = Archer::new("Robin", 100, 2);
        let mut transcript = Transcript::new();
        robin.attack(&dummy(), &mut transcript);
        assert_eq!(1, robin.arrows());
        assert_eq!("Robin shoots an arrow!", transcript.lines()[0]);
    }

    #[test]
    fn archer_without_arrows_stays_at_zero() {
        let mut robin = Archer::new("Robin", 100, 0);
        let mut transcript = Transcript::new();
        robin.attack(&dummy(), &mut transcript);
        robin.attack(&dummy(), &mut transcript);
        assert_eq!(0, robin.arrows());
        assert_eq!(
            vec![
                "Robin is out of arrows!",
                "Robin attacks Dummy!",
                "Robin is out of arrows!",
                "Robin attacks Dummy!",
            ],
            transcript.into_lines()
        );
    }

    #[test]
    fn mage_below_threshold_keeps_mana() {
        let mut merlin = Mage::new("Merlin", 80, 5);
        let mut transcript = Transcript::new();
        merlin.attack(&dummy(), &mut transcript);
        assert_eq!(5, merlin.mana());
        assert_eq!("Merlin is out of mana!", transcript.lines()[0]);
    }

    #[test]
    fn mage_casts_once_then_runs_dry() {
        let mut merlin = Mage::new("Merlin", 80, 15);
        let mut transcript = Transcript::new();
        merlin.attack(&dummy(), &mut transcript);
        assert_eq!(5, merlin.mana());
        merlin.attack(&dummy(), &mut transcript);
        assert_eq!(5, merlin.mana());
        assert_eq!(
            vec![
                "Merlin casts a spell!",
                "Merlin attacks Dummy!",
                "Merlin is out of mana!",
                "Merlin attacks Dummy!",
            ],
            transcript.into_lines()
        );
    }

    #[test]
    fn mage_at_exact_threshold_casts() {
        let mut merlin = Mage::new("Merlin", 80, 10);
        let mut transcript = Transcript::new();
        merlin.attack(&dummy(), &mut transcript);
        assert_eq!(0, merlin.mana());
        assert_eq!("Merlin casts a spell!", transcript.lines()[0]);
    }

    #[test]
    fn attacks_leave_the_target_untouched() {
        let mut arthur = Swordman::new("Arthur", 120, 50);
        let robin = Archer::new("Robin", 100, 20);
        let before = robin.clone();
        arthur.attack(&robin, &mut Transcript::new());
        assert_eq!(before, robin);
        assert_eq!(120, arthur.base().hp());
    }

    #[test]
    fn variants_override_defense_without_base_line() {
        let mut transcript = Transcript::new();
        Swordman::new("Arthur", 120, 50).defense(&mut transcript);
        Archer::new("Robin", 100, 20).defense(&mut transcript);
        Mage::new("Merlin", 80, 50).defense(&mut transcript);
        assert_eq!(
            vec![
                "Arthur raises a shield!",
                "Robin dodges swiftly!",
                "Merlin conjures a magical shield!",
            ],
            transcript.into_lines()
        );
    }

    #[test]
    fn base_unit_uses_generic_lines() {
        let mut grunt = UnitBase::named("Grunt");
        let mut transcript = Transcript::new();
        grunt.attack(&dummy(), &mut transcript);
        grunt.defense(&mut transcript);
        assert_eq!(
            vec!["Grunt attacks Dummy!", "Grunt defends!"],
            transcript.into_lines()
        );
    }

    #[test]
    fn base_constructors_fill_defaults() {
        let named = UnitBase::named("Scout");
        assert_eq!(DEFAULT_HP, named.hp());
        assert_eq!(UNIT_SPEED, named.speed());
        assert!(named.weapon().is_none());

        let nameless = UnitBase::nameless(40);
        assert_eq!("", nameless.name());
        assert_eq!(40, nameless.hp());
        assert_eq!(UNIT_SPEED, nameless.speed());
    }

    #[test]
    fn equip_swaps_the_weapon_slot() {
        let mut robin = Combatant::from(Archer::new("Robin", 100, 20));
        assert!(robin.base().weapon().is_none());

        let previous = robin.base_mut().equip(Bow::new("Longbow", 30).into());
        assert!(previous.is_none());

        let previous = robin.base_mut().equip(Sword::new("Shortsword").into());
        assert!(matches!(previous, Some(Armament::Bow(_))));
        assert!(matches!(robin.base().weapon(), Some(Armament::Sword(_))));
    }

    #[test]
    fn combatant_dispatches_to_variant() {
        let mut merlin = Combatant::from(Mage::new("Merlin", 80, 50));
        let arthur = Combatant::from(Swordman::new("Arthur", 120, 50));
        let mut transcript = Transcript::new();
        merlin.attack(&arthur, &mut transcript);
        assert_eq!(
            vec!["Merlin casts a spell!", "Merlin attacks Arthur!"],
            transcript.into_lines()
        );
        match merlin {
            Combatant::Mage(mage) => assert_eq!(40, mage.mana()),
            other => panic!("unexpected variant {other:?}"),
        }
    }
}
