use std::collections::HashMap;

/// Stat keys the classifier requires; classification refuses to guess when any
/// of them is absent.
pub const REQUIRED_STATS: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

const FAST_SPEED: i64 = 90;
const PHYSICAL_ATTACK: i64 = 85;
const SPECIAL_ATTACK: i64 = 90;
const TANK_GUARD: i64 = 90;
const DEFENSIVE_HP: i64 = 80;
const DEFENSIVE_GUARD: i64 = 80;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required stat '{0}'")]
pub struct MissingStatError(pub String);

/// Derive battle-role tags from base stats.
///
/// Thresholds are inclusive and fixed; tags may co-occur and are returned in
/// rule-evaluation order. Pure: the same stats always yield the same tags.
pub fn classify(stats: &HashMap<String, i64>) -> Result<Vec<String>, MissingStatError> {
    for name in REQUIRED_STATS {
        if !stats.contains_key(name) {
            return Err(MissingStatError(name.to_string()));
        }
    }

    // Presence was just checked; the default is unreachable.
    let stat = |name: &str| stats.get(name).copied().unwrap_or_default();

    let speed = stat("speed");
    let attack = stat("attack");
    let special_attack = stat("special-attack");
    let defense = stat("defense");
    let special_defense = stat("special-defense");
    let hp = stat("hp");

    let mut tags = Vec::new();
    if speed >= FAST_SPEED {
        tags.push("fast".to_string());
    }
    if attack >= PHYSICAL_ATTACK {
        tags.push("physical-attacker".to_string());
    }
    if special_attack >= SPECIAL_ATTACK {
        tags.push("special-attacker".to_string());
    }
    if defense >= TANK_GUARD || special_defense >= TANK_GUARD {
        tags.push("tank".to_string());
    }
    if hp >= DEFENSIVE_HP && (defense >= DEFENSIVE_GUARD || special_defense >= DEFENSIVE_GUARD) {
        tags.push("defensive".to_string());
    }

    Ok(tags)
}
