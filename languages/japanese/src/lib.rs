pub mod dictionary;
pub mod expressions;
pub mod loader;
pub mod script;

pub use dictionary::JMdictSimplified;
pub use expressions::ExpressionFile;
pub use loader::{LexiconFormat, LexiconLoader};
pub use script::{contains_japanese, is_japanese};
