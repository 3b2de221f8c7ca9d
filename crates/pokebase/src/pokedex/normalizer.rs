use serde_json::Value;
use std::collections::HashMap;

/// Untyped document returned by the upstream pokedex API.
///
/// Upstream payloads are loosely shaped, so every accessor tolerates missing or
/// differently-typed keys and yields an empty value instead of failing.
#[derive(Debug, Clone)]
pub struct RawPokemon(Value);

impl RawPokemon {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    fn str_at(&self, path: &[&str]) -> &str {
        let mut cursor = &self.0;
        for key in path {
            match cursor.get(key) {
                Some(next) => cursor = next,
                None => return "",
            }
        }
        cursor.as_str().unwrap_or("")
    }

    fn int_at(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(Value::as_i64)
    }

    fn entries(&self, key: &str) -> &[Value] {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Compact per-request record derived from a [`RawPokemon`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NormalizedPokemon {
    /// Lowercase species identifier.
    pub species: String,
    /// Ability name to hidden flag, in encounter order; duplicate names keep
    /// the last flag seen.
    pub ability_flags: Vec<(String, bool)>,
    pub move_names: Vec<String>,
    pub type_names: Vec<String>,
    /// Stat name to base value; duplicate names keep the last value seen.
    pub stats: HashMap<String, i64>,
    pub base_experience: Option<i64>,
    pub height_decimeters: Option<i64>,
    pub weight_hectograms: Option<i64>,
    /// Derived battle roles in rule-evaluation order. Empty until filled by the
    /// role classifier.
    pub role_tags: Vec<String>,
}

/// Best-effort reshape of the upstream document. Never fails: absent fields
/// become empty collections or `None`.
pub fn normalize(raw: &RawPokemon) -> NormalizedPokemon {
    let mut ability_flags: Vec<(String, bool)> = Vec::new();
    for entry in raw.entries("abilities") {
        let name = nested_name(entry, "ability");
        let hidden = entry
            .get("is_hidden")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        match ability_flags.iter_mut().find(|(known, _)| known == &name) {
            Some(slot) => slot.1 = hidden,
            None => ability_flags.push((name, hidden)),
        }
    }

    let move_names = raw
        .entries("moves")
        .iter()
        .map(|entry| nested_name(entry, "move"))
        .collect();

    let type_names = raw
        .entries("types")
        .iter()
        .map(|entry| nested_name(entry, "type"))
        .collect();

    let mut stats = HashMap::new();
    for entry in raw.entries("stats") {
        // Entries without a numeric base_stat are dropped; the strict role
        // classifier reports them as missing.
        if let Some(value) = entry.get("base_stat").and_then(Value::as_i64) {
            stats.insert(nested_name(entry, "stat"), value);
        }
    }

    NormalizedPokemon {
        species: raw.str_at(&["species", "name"]).to_string(),
        ability_flags,
        move_names,
        type_names,
        stats,
        base_experience: raw.int_at("base_experience"),
        height_decimeters: raw.int_at("height"),
        weight_hectograms: raw.int_at("weight"),
        role_tags: Vec::new(),
    }
}

fn nested_name(entry: &Value, key: &str) -> String {
    entry
        .get(key)
        .and_then(|inner| inner.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_document() -> Value {
        json!({
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "species": {"name": "pikachu"},
            "abilities": [
                {"ability": {"name": "static"}, "is_hidden": false},
                {"ability": {"name": "lightning-rod"}, "is_hidden": true}
            ],
            "moves": [
                {"move": {"name": "thunder-shock"}},
                {"move": {"name": "tail-whip"}},
                {"move": {"name": "quick-attack"}}
            ],
            "types": [
                {"type": {"name": "electric"}}
            ],
            "stats": [
                {"stat": {"name": "hp"}, "base_stat": 35},
                {"stat": {"name": "attack"}, "base_stat": 55},
                {"stat": {"name": "defense"}, "base_stat": 40},
                {"stat": {"name": "special-attack"}, "base_stat": 50},
                {"stat": {"name": "special-defense"}, "base_stat": 50},
                {"stat": {"name": "speed"}, "base_stat": 90}
            ]
        })
    }

    #[test]
    fn extracts_all_fields_from_a_complete_document() {
        let record = normalize(&RawPokemon::new(sample_document()));

        assert_eq!(record.species, "pikachu");
        assert_eq!(
            record.ability_flags,
            vec![
                ("static".to_string(), false),
                ("lightning-rod".to_string(), true)
            ]
        );
        assert_eq!(record.move_names.len(), 3);
        assert_eq!(record.type_names, vec!["electric".to_string()]);
        assert_eq!(record.stats.get("speed"), Some(&90));
        assert_eq!(record.base_experience, Some(112));
        assert_eq!(record.height_decimeters, Some(4));
        assert_eq!(record.weight_hectograms, Some(60));
        assert!(record.role_tags.is_empty());
    }

    #[test]
    fn empty_document_yields_defaults_without_failing() {
        let record = normalize(&RawPokemon::new(json!({})));

        assert_eq!(record.species, "");
        assert!(record.ability_flags.is_empty());
        assert!(record.move_names.is_empty());
        assert!(record.type_names.is_empty());
        assert!(record.stats.is_empty());
        assert_eq!(record.base_experience, None);
        assert_eq!(record.height_decimeters, None);
        assert_eq!(record.weight_hectograms, None);
    }

    #[test]
    fn non_object_document_yields_defaults() {
        let record = normalize(&RawPokemon::new(json!("surprise")));
        assert_eq!(record, NormalizedPokemon::default());
    }

    #[test]
    fn duplicate_ability_names_keep_the_last_flag() {
        let record = normalize(&RawPokemon::new(json!({
            "abilities": [
                {"ability": {"name": "static"}, "is_hidden": false},
                {"ability": {"name": "static"}, "is_hidden": true}
            ]
        })));

        assert_eq!(record.ability_flags, vec![("static".to_string(), true)]);
    }

    #[test]
    fn duplicate_stat_names_keep_the_last_value() {
        let record = normalize(&RawPokemon::new(json!({
            "stats": [
                {"stat": {"name": "speed"}, "base_stat": 45},
                {"stat": {"name": "speed"}, "base_stat": 90}
            ]
        })));

        assert_eq!(record.stats.get("speed"), Some(&90));
    }

    #[test]
    fn stat_entries_without_numeric_values_are_skipped() {
        let record = normalize(&RawPokemon::new(json!({
            "stats": [
                {"stat": {"name": "hp"}, "base_stat": null},
                {"stat": {"name": "speed"}, "base_stat": 90}
            ]
        })));

        assert!(!record.stats.contains_key("hp"));
        assert_eq!(record.stats.get("speed"), Some(&90));
    }

    #[test]
    fn malformed_list_entries_become_empty_names() {
        let record = normalize(&RawPokemon::new(json!({
            "moves": [{"move": {}}, {"unexpected": true}]
        })));

        assert_eq!(record.move_names, vec![String::new(), String::new()]);
    }
}
