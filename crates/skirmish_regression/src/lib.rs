//! Golden traces for regression tests.

use serde_json::json;
use skirmish_core::{Combatant, Roster, ScenarioConfig, ScenarioError, Transcript, Unit};

/// Runs one round of `config` and captures narration plus the resources
/// each unit has left.
pub fn round_trace(config: &ScenarioConfig) -> Result<serde_json::Value, ScenarioError> {
    let mut roster = config.build_roster()?;
    let mut transcript = Transcript::new();
    roster.run_round(&mut transcript);
    Ok(json!({
        "narration": transcript.lines(),
        "units": unit_states(&roster),
    }))
}

pub fn default_round_trace() -> Result<serde_json::Value, ScenarioError> {
    round_trace(&ScenarioConfig::default())
}

fn unit_states(roster: &Roster) -> Vec<serde_json::Value> {
    roster
        .units()
        .iter()
        .map(|unit| {
            let base = unit.base();
            let (class, resource) = match unit {
                Combatant::Swordman(u) => ("swordman", json!({ "power": u.power() })),
                Combatant::Archer(u) => ("archer", json!({ "arrows": u.arrows() })),
                Combatant::Mage(u) => ("mage", json!({ "mana": u.mana() })),
            };
            json!({
                "class": class,
                "name": unit.name(),
                "hp": base.hp(),
                "speed": base.speed(),
                "resource": resource,
            })
        })
        .collect()
}
