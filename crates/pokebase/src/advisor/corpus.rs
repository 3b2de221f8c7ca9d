use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Precomputed description strings used as model context. Loaded once at
/// startup and shared read-only for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct DescriptionCorpus {
    descriptions: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read description corpus: {0}")]
    Io(#[from] std::io::Error),
    #[error("description corpus is not a JSON list of strings: {0}")]
    Parse(#[from] serde_json::Error),
}

impl DescriptionCorpus {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let descriptions: Vec<String> = serde_json::from_reader(reader)?;
        Ok(Self { descriptions })
    }

    pub fn from_descriptions(descriptions: Vec<String>) -> Self {
        Self { descriptions }
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_a_json_list_of_strings() {
        let corpus = DescriptionCorpus::from_reader(Cursor::new(
            r#"["Pikachu is fast.", "Snorlax is a tank."]"#,
        ))
        .expect("corpus parses");

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.descriptions()[1], "Snorlax is a tank.");
    }

    #[test]
    fn rejects_non_list_payloads() {
        let error = DescriptionCorpus::from_reader(Cursor::new(r#"{"not": "a list"}"#))
            .expect_err("object is not a corpus");
        assert!(matches!(error, CorpusError::Parse(_)));
    }

    #[test]
    fn missing_file_surfaces_an_io_error() {
        let error =
            DescriptionCorpus::from_path("./does-not-exist.json").expect_err("expected io error");
        assert!(matches!(error, CorpusError::Io(_)));
    }
}
