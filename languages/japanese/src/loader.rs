use std::fmt;
use std::path::Path;
use std::str::FromStr;

use jexpr_core::lexicon::{Lexicon, LexiconError, LexiconSource};

use crate::dictionary::JMdictSimplified;
use crate::expressions::ExpressionFile;

/// On-disk layout of a lexicon file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexiconFormat {
    /// Flat expression export (`keb` / `reb` / `meaning`)
    #[default]
    Expressions,
    /// jmdict-simplified JSON, filtered to expressions
    JMdictSimplified,
}

impl FromStr for LexiconFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "expressions" | "expr" => Ok(LexiconFormat::Expressions),
            "jmdict" | "jmdict-simplified" => Ok(LexiconFormat::JMdictSimplified),
            other => Err(format!("unknown lexicon format: {other}")),
        }
    }
}

impl fmt::Display for LexiconFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconFormat::Expressions => f.write_str("expressions"),
            LexiconFormat::JMdictSimplified => f.write_str("jmdict"),
        }
    }
}

pub struct LexiconLoader;

impl LexiconLoader {
    /// Source reading `path` in the given format
    pub fn open(path: &Path, format: LexiconFormat) -> Box<dyn LexiconSource> {
        match format {
            LexiconFormat::Expressions => Box::new(ExpressionFile::new(path)),
            LexiconFormat::JMdictSimplified => Box::new(JMdictSimplified::new(path)),
        }
    }

    /// Load and normalize the lexicon at `path`
    pub fn load(path: &Path, format: LexiconFormat) -> Result<Lexicon, LexiconError> {
        tracing::info!("Loading {} lexicon from {}", format, path.display());
        let source = Self::open(path, format);
        Lexicon::load(source.as_ref())
    }
}
