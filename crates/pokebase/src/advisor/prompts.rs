/// Which of the two fixed prompt templates to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Strategy,
    TeamBuilding,
}

const STRATEGY_TEMPLATE: &str = r#"
You are a Pokémon battle strategist.
Your role is to analyze a given Pokémon and recommend optimal counter-strategies or type matchups in response to a user query.

You will be given:
- "QUERY": A user-submitted request related to countering a specific Pokémon.
- "POKÉMON DESCRIPTION": A description of the Pokémon, including its type, abilities, roles, and other attributes.

Your task:
- Use the Pokémon's type, abilities, and traits to identify weaknesses or strategic disadvantages.
- Suggest effective counter-strategies, including:
  - Strong type matchups or resistances
  - Recommended counter Pokémon
  - Effective move types or tactics (e.g., status effects, priority moves, hazard setups)
  - Role-based counters (e.g., stallers, sweepers, tanks), if applicable
- Ensure the response is concise and directly addresses the query.

Input Format:
"QUERY": {user_query}
"POKÉMON DESCRIPTION": {pokemon_description}

Mention the potential Pokémon and output a clear and actionable strategy.
"#;

const TEAM_BUILDING_TEMPLATE: &str = r#"
You are an expert Pokémon battle strategist and team builder. Based on the user's query and the provided Pokémon descriptions, your task is to select the most optimal team of 6 Pokémon. Choose a well-balanced team that aligns with the user's battle goals, strategy preferences, or thematic constraints as mentioned in the query.

Input Format:
"QUERY": {user_query}
"POKÉMON DESCRIPTIONS": {pokemon_description}

Output Format:
1. A list of exactly 6 Pokémon names, separated by commas.
2. A single, coherent paragraph summarizing the overall team strategy and synergy based on the chosen Pokémon and their descriptions.

Output Format:

"Team: list of 6 pokemon names". Followed by a description of the team.

Ensure that the selected team demonstrates strong synergy, type coverage, and strategic diversity (e.g., offense, defense, support roles). Prioritize cohesion and effectiveness for the scenario described in the user query.
"#;

/// Fill the selected template with the user query and the corpus serialized as
/// a JSON list. Verbatim substitution: no truncation, no relevance filtering,
/// empty queries pass through unchanged.
pub fn compose(kind: PromptKind, user_query: &str, corpus: &[String]) -> String {
    let template = match kind {
        PromptKind::Strategy => STRATEGY_TEMPLATE,
        PromptKind::TeamBuilding => TEAM_BUILDING_TEMPLATE,
    };

    let serialized = serde_json::to_string(corpus).unwrap_or_else(|_| "[]".to_string());

    template
        .replace("{user_query}", user_query)
        .replace("{pokemon_description}", &serialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "Pikachu is a Electric type Pokémon.".to_string(),
            "Snorlax is a Normal type Pokémon.".to_string(),
        ]
    }

    #[test]
    fn strategy_prompt_substitutes_query_and_corpus() {
        let prompt = compose(PromptKind::Strategy, "how do I counter pikachu?", &corpus());

        assert!(prompt.contains("\"QUERY\": how do I counter pikachu?"));
        assert!(prompt.contains("Pikachu is a Electric type Pokémon."));
        assert!(prompt.contains("Snorlax is a Normal type Pokémon."));
        assert!(!prompt.contains("{user_query}"));
        assert!(!prompt.contains("{pokemon_description}"));
    }

    #[test]
    fn team_building_prompt_uses_its_own_template() {
        let prompt = compose(PromptKind::TeamBuilding, "rain team please", &corpus());
        assert!(prompt.contains("team of 6 Pokémon"));
        assert!(prompt.contains("rain team please"));
    }

    #[test]
    fn empty_query_still_composes() {
        let prompt = compose(PromptKind::Strategy, "", &corpus());
        assert!(prompt.contains("\"QUERY\": \n"));
    }

    #[test]
    fn empty_corpus_serializes_as_an_empty_list() {
        let prompt = compose(PromptKind::Strategy, "anything", &[]);
        assert!(prompt.contains("\"POKÉMON DESCRIPTION\": []"));
    }
}
