use serde::{Deserialize, Serialize};

/// Separator used by dictionary exports that store several forms in one string
pub const FORM_DELIMITER: &str = "; ";

/// Written or phonetic forms of a record, as stored by the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Forms {
    /// `"; "`-delimited string, e.g. `"お疲れ様; 御疲れ様"`
    Delimited(String),
    List(Vec<String>),
}

impl Forms {
    /// Trimmed, non-empty tokens in source order
    fn tokens(&self) -> Vec<&str> {
        match self {
            Forms::Delimited(raw) => raw
                .split(FORM_DELIMITER)
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect(),
            Forms::List(items) => items
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

impl From<&str> for Forms {
    fn from(raw: &str) -> Self {
        Forms::Delimited(raw.to_string())
    }
}

impl From<Vec<String>> for Forms {
    fn from(items: Vec<String>) -> Self {
        Forms::List(items)
    }
}

/// One dictionary entry as handed over by a lexicon source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryRecord {
    /// Source identifier (JMdict `ent_seq`), only used in diagnostics
    pub id: Option<String>,
    pub written: Option<Forms>,
    pub phonetic: Option<Forms>,
    pub meaning: String,
}

impl DictionaryRecord {
    pub fn new(meaning: impl Into<String>) -> Self {
        Self {
            id: None,
            written: None,
            phonetic: None,
            meaning: meaning.into(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn written(mut self, forms: impl Into<Forms>) -> Self {
        self.written = Some(forms.into());
        self
    }

    pub fn phonetic(mut self, forms: impl Into<Forms>) -> Self {
        self.phonetic = Some(forms.into());
        self
    }
}

/// Normalized lexicon unit: every reading is trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconEntry {
    pub readings: Vec<String>,
    pub meaning: String,
}

/// Anything able to hand over the full set of dictionary records
pub trait LexiconSource {
    fn records(&self) -> Result<Vec<DictionaryRecord>, LexiconError>;
}

impl LexiconSource for Vec<DictionaryRecord> {
    fn records(&self) -> Result<Vec<DictionaryRecord>, LexiconError> {
        Ok(self.clone())
    }
}

/// In-memory lexicon, read-only once built
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
}

impl Lexicon {
    /// Pull every record from `source` and normalize it
    pub fn load(source: &dyn LexiconSource) -> Result<Self, LexiconError> {
        let records = source.records()?;
        let lexicon = Self::from_records(records)?;
        tracing::info!(
            "Loaded lexicon with {} entries ({} readings)",
            lexicon.len(),
            lexicon.reading_count()
        );
        Ok(lexicon)
    }

    /// Normalize records into entries. Fails on the first malformed record.
    pub fn from_records<I>(records: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = DictionaryRecord>,
    {
        let entries = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| normalize(index, record))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reading_count(&self) -> usize {
        self.entries.iter().map(|e| e.readings.len()).sum()
    }
}

fn normalize(index: usize, record: DictionaryRecord) -> Result<LexiconEntry, LexiconError> {
    if record.meaning.trim().is_empty() {
        return Err(LexiconError::MissingMeaning {
            index,
            id: record.id,
        });
    }

    let mut readings: Vec<String> = Vec::new();
    let forms = [record.written.as_ref(), record.phonetic.as_ref()];

    for token in forms.into_iter().flatten().flat_map(Forms::tokens) {
        if token.contains(';') {
            return Err(LexiconError::MalformedForms {
                index,
                id: record.id.clone(),
                token: token.to_string(),
            });
        }
        if !readings.iter().any(|r| r == token) {
            readings.push(token.to_string());
        }
    }

    Ok(LexiconEntry {
        readings,
        meaning: record.meaning,
    })
}

fn describe_id(id: &Option<String>) -> String {
    match id {
        Some(id) => format!(" (id {id})"),
        None => String::new(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("Lexicon source not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record {index}{} has no meaning", describe_id(.id))]
    MissingMeaning { index: usize, id: Option<String> },

    #[error("Record {index}{} has malformed form list near {token:?}", describe_id(.id))]
    MalformedForms {
        index: usize,
        id: Option<String>,
        token: String,
    },
}
