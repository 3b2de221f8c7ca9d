use std::sync::Arc;

use super::corpus::DescriptionCorpus;
use super::gemini::{CompletionError, CompletionModel};
use super::prompts::{compose, PromptKind};

/// Service composing the prompt templates, the shared description corpus, and
/// the completion model.
pub struct BattleAdvisor<M> {
    model: Arc<M>,
    corpus: Arc<DescriptionCorpus>,
}

impl<M> BattleAdvisor<M>
where
    M: CompletionModel + 'static,
{
    pub fn new(model: Arc<M>, corpus: Arc<DescriptionCorpus>) -> Self {
        Self { model, corpus }
    }

    /// Counter-strategy advice for the given query.
    pub async fn counter_strategy(&self, user_query: &str) -> Result<Option<String>, CompletionError> {
        self.ask(PromptKind::Strategy, user_query).await
    }

    /// Six-member team recommendation for the given query.
    pub async fn recommend_team(&self, user_query: &str) -> Result<Option<String>, CompletionError> {
        self.ask(PromptKind::TeamBuilding, user_query).await
    }

    async fn ask(
        &self,
        kind: PromptKind,
        user_query: &str,
    ) -> Result<Option<String>, CompletionError> {
        let prompt = compose(kind, user_query, self.corpus.descriptions());
        self.model.complete(&prompt).await
    }
}
