/// Sentence-final marker (ideographic full stop)
pub const SENTENCE_TERMINATOR: char = '。';

/// Blank line separating headings and paragraphs
pub const PARAGRAPH_BREAK: &str = "\n\n";

pub trait Segmenter {
    // Default JP segmenter
    fn segment(&self, text: &str) -> Vec<String> {
        // Headings carry no terminator, so a blank line has to end them too
        let text = text.replace(PARAGRAPH_BREAK, &SENTENCE_TERMINATOR.to_string());

        text.split(SENTENCE_TERMINATOR).map(str::to_string).collect()
    }
}

pub struct DefaultSegmenter;
impl Segmenter for DefaultSegmenter {}
