use std::path::{Path, PathBuf};

use jexpr_core::lexicon::{DictionaryRecord, Forms, LexiconError, LexiconSource};
use serde::Deserialize;

// One object of the flat expression export: `[{"ent_seq", "keb", "reb", "meaning"}, ...]`
#[derive(Debug, Deserialize)]
struct ExpressionJson {
    #[serde(default)]
    ent_seq: Option<String>,
    #[serde(default)]
    keb: Option<Forms>,
    #[serde(default)]
    reb: Option<Forms>,
    #[serde(default)]
    meaning: Option<String>,
}

/// Flat JSON export of JMdict expressions, kanji in `keb` and kana in `reb`
pub struct ExpressionFile {
    path: PathBuf,
}

impl ExpressionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the export from a JSON string
    pub fn parse(json: &str) -> Result<Vec<DictionaryRecord>, LexiconError> {
        let data: Vec<ExpressionJson> =
            serde_json::from_str(json).map_err(|e| LexiconError::Parse(e.to_string()))?;

        data.into_iter()
            .enumerate()
            .map(|(index, expr)| {
                let meaning = expr.meaning.ok_or_else(|| LexiconError::MissingMeaning {
                    index,
                    id: expr.ent_seq.clone(),
                })?;

                Ok(DictionaryRecord {
                    id: expr.ent_seq,
                    written: expr.keb,
                    phonetic: expr.reb,
                    meaning,
                })
            })
            .collect()
    }
}

impl LexiconSource for ExpressionFile {
    fn records(&self) -> Result<Vec<DictionaryRecord>, LexiconError> {
        tracing::info!("Loading expressions from file: {}", self.path.display());

        if !self.path.exists() {
            return Err(LexiconError::NotFound(self.path.display().to_string()));
        }

        let json = std::fs::read_to_string(&self.path)?;
        let records = Self::parse(&json)?;
        tracing::info!("Read {} expression records", records.len());
        Ok(records)
    }
}
