//! Weapon and unit model for the skirmish demo.

pub mod error;
pub mod narration;
pub mod scenario;
pub mod unit;
pub mod weapon;

pub use error::ScenarioError;
pub use narration::{Narrator, Transcript};
pub use scenario::{Roster, ScenarioConfig, UnitSpec, WeaponSpec};
pub use unit::{Archer, Combatant, Mage, Swordman, Unit, UnitBase, DEFAULT_HP, UNIT_SPEED};
pub use weapon::{Armament, Bow, Grade, Stick, Sword, Weapon, WeaponBase, DEFAULT_DAMAGE};
