use super::normalizer::NormalizedPokemon;

/// Fallback text for absent numeric fields (base experience, height, weight).
const UNKNOWN: &str = "unknown";

/// Render the fixed-template description for a normalized record.
///
/// Pure: the same record always produces byte-identical output. Empty roles
/// render as "none", empty ability lists as "None".
pub fn render(creature: &NormalizedPokemon) -> String {
    let name = capitalize(&creature.species);
    let types = join_capitalized(creature.type_names.iter().map(String::as_str));
    let roles = or_literal(
        join_capitalized(creature.role_tags.iter().map(String::as_str)),
        "none",
    );

    let standard = or_literal(
        join_capitalized(ability_names(creature, false)),
        "None",
    );
    let hidden = or_literal(
        join_capitalized(ability_names(creature, true)),
        "None",
    );

    let base_experience = creature
        .base_experience
        .map(|value| value.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());
    let height = tenths(creature.height_decimeters);
    let weight = tenths(creature.weight_hectograms);

    format!(
        "{name} is a {types} type Pokémon with the standard ability {standard} \
         and hidden ability {hidden}. It plays the following roles: {roles}. \
         It has a base experience of {base_experience}, stands {height} meters tall, \
         and weighs {weight} kilograms."
    )
}

fn ability_names(creature: &NormalizedPokemon, hidden: bool) -> impl Iterator<Item = &str> {
    creature
        .ability_flags
        .iter()
        .filter(move |(_, flag)| *flag == hidden)
        .map(|(name, _)| name.as_str())
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn join_capitalized<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.map(capitalize).collect::<Vec<_>>().join(", ")
}

fn or_literal(joined: String, literal: &str) -> String {
    if joined.is_empty() {
        literal.to_string()
    } else {
        joined
    }
}

/// Decimeters to meters, hectograms to kilograms: one decimal place.
fn tenths(raw: Option<i64>) -> String {
    match raw {
        Some(value) => format!("{:.1}", value as f64 / 10.0),
        None => UNKNOWN.to_string(),
    }
}
