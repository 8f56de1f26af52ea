use jexpr_config::ColorMode;
use jexpr_core::matcher::DEFAULT_MIN_READING_CHARS;
use jexpr_core::{DefaultSegmenter, ExpressionMatcher, Highlight, Lexicon, Report, Segmenter};

/// Segment `text`, match it against `lexicon` and group the hits
pub fn find_expressions(lexicon: &Lexicon, text: &str, min_reading_chars: usize) -> Report {
    let sentences = DefaultSegmenter.segment(text);
    tracing::debug!("Segmented text into {} sentences", sentences.len());

    if min_reading_chars < DEFAULT_MIN_READING_CHARS {
        tracing::warn!(
            "min_reading_chars {} is below the floor of {}, using {}",
            min_reading_chars,
            DEFAULT_MIN_READING_CHARS,
            DEFAULT_MIN_READING_CHARS
        );
    }

    let matches = ExpressionMatcher::new(lexicon)
        .min_reading_chars(min_reading_chars)
        .find_matches(&sentences);

    let report = Report::from_matches(&matches);
    tracing::info!(
        "Found {} distinct expressions ({} matches)",
        report.groups.len(),
        matches.len()
    );

    report
}

pub fn highlight_for(mode: ColorMode) -> Highlight {
    match mode {
        ColorMode::Always => Highlight::Ansi,
        ColorMode::Never => Highlight::Markers,
        ColorMode::Auto if atty::is(atty::Stream::Stdout) => Highlight::Ansi,
        ColorMode::Auto => Highlight::Markers,
    }
}
