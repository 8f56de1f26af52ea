use std::path::{Path, PathBuf};

use jexpr_core::lexicon::{DictionaryRecord, Forms, LexiconError, LexiconSource};
use serde::Deserialize;

/// JMdict part-of-speech tag for expressions
pub const EXPRESSION_POS: &str = "exp";

const GLOSS_DELIMITER: &str = "; ";

// JSON structures for parsing jmdict-simplified format
#[derive(Debug, Deserialize)]
struct JMdictJson {
    words: Vec<JMdictJsonEntry>,
}

#[derive(Debug, Deserialize)]
struct JMdictJsonEntry {
    id: String,
    #[serde(default)]
    kanji: Vec<KanjiElement>,
    #[serde(default)]
    kana: Vec<KanaElement>,
    #[serde(default)]
    sense: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct KanjiElement {
    text: String,
}

#[derive(Debug, Deserialize)]
struct KanaElement {
    text: String,
}

#[derive(Debug, Deserialize)]
struct Sense {
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: Vec<String>,
    #[serde(default)]
    gloss: Vec<Gloss>,
}

#[derive(Debug, Deserialize)]
struct Gloss {
    lang: String,
    text: String,
}

/// Full JMdict in jmdict-simplified JSON, narrowed down to expressions
pub struct JMdictSimplified {
    path: PathBuf,
}

impl JMdictSimplified {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records for every word tagged as an expression that has English glosses
    pub fn from_json(json_str: &str) -> Result<Vec<DictionaryRecord>, LexiconError> {
        let data: JMdictJson =
            serde_json::from_str(json_str).map_err(|e| LexiconError::Parse(e.to_string()))?;

        let total = data.words.len();
        let mut records = Vec::new();

        for word in data.words {
            let is_expression = word
                .sense
                .iter()
                .any(|s| s.part_of_speech.iter().any(|p| p == EXPRESSION_POS));
            if !is_expression {
                continue;
            }

            // Only use English glosses
            let glosses: Vec<&str> = word
                .sense
                .iter()
                .flat_map(|s| s.gloss.iter())
                .filter(|g| g.lang == "eng")
                .map(|g| g.text.as_str())
                .collect();

            if glosses.is_empty() {
                tracing::debug!("Skipping expression {} with no English gloss", word.id);
                continue;
            }

            let meaning = glosses.join(GLOSS_DELIMITER);
            let kanji: Vec<String> = word.kanji.into_iter().map(|k| k.text).collect();
            let kana: Vec<String> = word.kana.into_iter().map(|k| k.text).collect();

            records.push(DictionaryRecord {
                id: Some(word.id),
                written: (!kanji.is_empty()).then(|| Forms::List(kanji)),
                phonetic: (!kana.is_empty()).then(|| Forms::List(kana)),
                meaning,
            });
        }

        tracing::debug!("Kept {} expressions out of {} words", records.len(), total);

        Ok(records)
    }
}

impl LexiconSource for JMdictSimplified {
    fn records(&self) -> Result<Vec<DictionaryRecord>, LexiconError> {
        tracing::info!("Loading JMdict from file: {}", self.path.display());

        if !self.path.exists() {
            return Err(LexiconError::NotFound(self.path.display().to_string()));
        }

        let json = std::fs::read_to_string(&self.path)?;
        Self::from_json(&json)
    }
}
