use serde::Serialize;

use crate::lexicon::Lexicon;

/// Readings this short (in chars) or shorter are never reported
pub const DEFAULT_MIN_READING_CHARS: usize = 3;

/// One reading found inside one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub matched_reading: String,
    pub snippet: String,
    pub meaning: String,
}

/// Exact substring matcher over a loaded lexicon
pub struct ExpressionMatcher<'a> {
    lexicon: &'a Lexicon,
    min_reading_chars: usize,
}

impl<'a> ExpressionMatcher<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            min_reading_chars: DEFAULT_MIN_READING_CHARS,
        }
    }

    /// Only readings longer than `chars` can match. The guard can be raised
    /// but never lowered below [`DEFAULT_MIN_READING_CHARS`].
    pub fn min_reading_chars(mut self, chars: usize) -> Self {
        self.min_reading_chars = chars.max(DEFAULT_MIN_READING_CHARS);
        self
    }

    /// Every (entry, sentence, reading) triple where the reading occurs in the sentence
    pub fn find_matches(&self, sentences: &[String]) -> Vec<MatchRecord> {
        let mut matches = Vec::new();

        for entry in self.lexicon.entries() {
            // Filter once per entry instead of once per sentence
            let readings: Vec<&String> = entry
                .readings
                .iter()
                .filter(|r| r.chars().count() > self.min_reading_chars)
                .collect();

            if readings.is_empty() {
                continue;
            }

            for sentence in sentences {
                for reading in &readings {
                    if sentence.contains(reading.as_str()) {
                        matches.push(MatchRecord {
                            matched_reading: (*reading).clone(),
                            snippet: sentence.clone(),
                            meaning: entry.meaning.clone(),
                        });
                    }
                }
            }
        }

        tracing::debug!(
            "Matched {} readings across {} sentences",
            matches.len(),
            sentences.len()
        );

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::DictionaryRecord;
    use crate::segment::{DefaultSegmenter, Segmenter};

    fn build(records: Vec<DictionaryRecord>) -> Lexicon {
        Lexicon::from_records(records).unwrap()
    }

    fn sentences(text: &str) -> Vec<String> {
        DefaultSegmenter.segment(text)
    }

    #[test]
    fn test_single_match_keeps_sentence_and_meaning() {
        let lexicon = build(vec![
            DictionaryRecord::new("Japanese language").written("日本語のテキスト; 日本語"),
        ]);
        let matches = ExpressionMatcher::new(&lexicon)
            .find_matches(&sentences("私は日本語のテキストを読んでいます。"));

        assert_eq!(
            matches,
            vec![MatchRecord {
                matched_reading: "日本語のテキスト".to_string(),
                snippet: "私は日本語のテキストを読んでいます".to_string(),
                meaning: "Japanese language".to_string(),
            }]
        );
    }

    #[test]
    fn test_guard_cannot_be_lowered() {
        let lexicon = build(vec![
            DictionaryRecord::new("Japanese language").written("日本語"),
            DictionaryRecord::new("time").written("時間"),
        ]);
        let text = sentences("日本語を勉強する時間がない。");

        for chars in [0, 1, 2] {
            let matches = ExpressionMatcher::new(&lexicon)
                .min_reading_chars(chars)
                .find_matches(&text);
            assert!(matches.is_empty(), "matched with min_reading_chars({chars})");
        }
    }

    #[test]
    fn test_guard_can_be_raised() {
        let lexicon = build(vec![
            DictionaryRecord::new("good work").written("お疲れ様"),
            DictionaryRecord::new("thanks for the meal").phonetic("ごちそうさま"),
        ]);
        let text = sentences("お疲れ様。ごちそうさまでした。");

        let matches = ExpressionMatcher::new(&lexicon)
            .min_reading_chars(4)
            .find_matches(&text);

        let readings: Vec<&str> = matches.iter().map(|m| m.matched_reading.as_str()).collect();
        assert_eq!(readings, vec!["ごちそうさま"]);
    }

    #[test]
    fn test_short_readings_never_match() {
        let lexicon = build(vec![
            DictionaryRecord::new("Japanese language").written("日本語"),
            DictionaryRecord::new("time").written("時間"),
        ]);

        let matches = ExpressionMatcher::new(&lexicon)
            .find_matches(&sentences("日本語を勉強する時間がない。日本語。"));

        assert!(matches.is_empty());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 4 chars, 12 bytes
        let lexicon = build(vec![DictionaryRecord::new("good work").phonetic("おつかれ")]);
        let matches = ExpressionMatcher::new(&lexicon).find_matches(&sentences("おつかれ。"));
        assert_eq!(matches.len(), 1);

        // 3 chars, 9 bytes
        let lexicon = build(vec![DictionaryRecord::new("tired").phonetic("つかれ")]);
        let matches = ExpressionMatcher::new(&lexicon).find_matches(&sentences("つかれた。"));
        assert!(matches.is_empty());
    }

    #[test]
    fn test_two_readings_in_one_sentence() {
        let lexicon = build(vec![
            DictionaryRecord::new("good work")
                .written("お疲れ様")
                .phonetic("おつかれさま"),
            DictionaryRecord::new("see you tomorrow").phonetic("またあした"),
        ]);

        let matches = ExpressionMatcher::new(&lexicon)
            .find_matches(&sentences("お疲れ様、またあした"));

        let readings: Vec<&str> = matches.iter().map(|m| m.matched_reading.as_str()).collect();
        assert_eq!(readings, vec!["お疲れ様", "またあした"]);
    }

    #[test]
    fn test_shared_reading_keeps_both_meanings() {
        let lexicon = build(vec![
            DictionaryRecord::new("good work").written("お疲れ様"),
            DictionaryRecord::new("goodbye (at work)").written("お疲れ様"),
        ]);

        let matches = ExpressionMatcher::new(&lexicon)
            .find_matches(&sentences("今日もお疲れ様でした。"));

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].snippet, matches[1].snippet);
        assert_eq!(matches[0].meaning, "good work");
        assert_eq!(matches[1].meaning, "goodbye (at work)");
    }

    #[test]
    fn test_matching_is_exact() {
        let lexicon = build(vec![DictionaryRecord::new("thanks").phonetic("ありがとう")]);

        // Katakana and half-width variants are different strings
        let matches = ExpressionMatcher::new(&lexicon)
            .find_matches(&sentences("アリガトウ。ｱﾘｶﾞﾄｳ。"));

        assert!(matches.is_empty());
    }

    #[test]
    fn test_empty_sentences_never_match() {
        let lexicon = build(vec![DictionaryRecord::new("thanks").phonetic("ありがとう")]);
        let matches = ExpressionMatcher::new(&lexicon).find_matches(&["".to_string()]);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_every_match_is_a_long_substring() {
        let lexicon = build(vec![
            DictionaryRecord::new("a").phonetic("いただきます; いただ; きます"),
            DictionaryRecord::new("b").written("ごちそうさま"),
        ]);
        let text = "いただきます。ごちそうさまでした。きます。";

        let matches = ExpressionMatcher::new(&lexicon).find_matches(&sentences(text));

        assert_eq!(matches.len(), 2);
        for m in &matches {
            assert!(m.snippet.contains(&m.matched_reading));
            assert!(m.matched_reading.chars().count() > DEFAULT_MIN_READING_CHARS);
        }
    }
}
