pub mod lexicon;
pub mod matcher;
pub mod report;
pub mod segment;

pub use lexicon::{DictionaryRecord, Forms, Lexicon, LexiconEntry, LexiconError, LexiconSource};
pub use matcher::{ExpressionMatcher, MatchRecord};
pub use report::{Highlight, Report, ReportGroup};
pub use segment::{DefaultSegmenter, Segmenter};
