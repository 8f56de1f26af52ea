use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::matcher::MatchRecord;

/// Line opening and closing every section of the rendered report
pub const SECTION_DELIMITER: &str = "-+-+-+-";

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_YELLOW: &str = "\x1b[93m";
const ANSI_RESET: &str = "\x1b[0m";

/// How matched text is set apart from its snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Bold headings, yellow match (terminals)
    Ansi,
    /// `**match**`, plain headings (pipes, files)
    Markers,
}

impl Highlight {
    fn heading(self, text: &str) -> String {
        match self {
            Highlight::Ansi => format!("{ANSI_BOLD}{text}{ANSI_RESET}"),
            Highlight::Markers => text.to_string(),
        }
    }

    fn emphasize(self, text: &str) -> String {
        match self {
            Highlight::Ansi => format!("{ANSI_YELLOW}{text}{ANSI_RESET}"),
            Highlight::Markers => format!("**{text}**"),
        }
    }
}

/// All matches for one distinct reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportGroup {
    pub reading: String,
    /// Distinct meanings, first-seen order. More than one means the reading is shared by several entries.
    pub meanings: Vec<String>,
    /// Distinct snippets, first-seen order
    pub snippets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub groups: Vec<ReportGroup>,
}

impl Report {
    /// Group matches by reading, keeping discovery order
    pub fn from_matches(matches: &[MatchRecord]) -> Self {
        let mut groups: Vec<ReportGroup> = Vec::new();
        // reading -> index into `groups`
        let mut index: HashMap<&str, usize> = HashMap::new();
        // (meanings, snippets) already pushed, parallel to `groups`
        let mut seen: Vec<(HashSet<&str>, HashSet<&str>)> = Vec::new();

        for record in matches {
            let idx = *index
                .entry(record.matched_reading.as_str())
                .or_insert_with(|| {
                    groups.push(ReportGroup {
                        reading: record.matched_reading.clone(),
                        meanings: Vec::new(),
                        snippets: Vec::new(),
                    });
                    seen.push((HashSet::new(), HashSet::new()));
                    groups.len() - 1
                });

            let group = &mut groups[idx];
            let (meanings, snippets) = &mut seen[idx];
            if meanings.insert(record.meaning.as_str()) {
                group.meanings.push(record.meaning.clone());
            }
            if snippets.insert(record.snippet.as_str()) {
                group.snippets.push(record.snippet.clone());
            }
        }

        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Human-readable report; empty string when nothing matched
    pub fn render(&self, highlight: Highlight) -> String {
        let mut out = String::new();

        for group in &self.groups {
            out.push_str(SECTION_DELIMITER);
            out.push('\n');

            out.push_str(&highlight.heading("Expression"));
            out.push('\n');
            out.push_str(&group.reading);
            out.push_str("\n\n");

            out.push_str(&highlight.heading("Meaning"));
            out.push('\n');
            for meaning in &group.meanings {
                out.push_str(meaning);
                out.push('\n');
            }
            out.push('\n');

            out.push_str(&highlight.heading("Snippets:"));
            out.push('\n');
            for snippet in &group.snippets {
                out.push_str(&highlight_snippet(snippet, &group.reading, highlight));
                out.push('\n');
            }

            out.push_str(SECTION_DELIMITER);
            out.push_str("\n\n");
        }

        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Emphasize the first occurrence of `reading`
fn highlight_snippet(snippet: &str, reading: &str, highlight: Highlight) -> String {
    match snippet.find(reading) {
        Some(start) => {
            let end = start + reading.len();
            format!(
                "{}{}{}",
                &snippet[..start],
                highlight.emphasize(&snippet[start..end]),
                &snippet[end..]
            )
        }
        None => snippet.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(reading: &str, snippet: &str, meaning: &str) -> MatchRecord {
        MatchRecord {
            matched_reading: reading.to_string(),
            snippet: snippet.to_string(),
            meaning: meaning.to_string(),
        }
    }

    #[test]
    fn test_empty_matches_render_nothing() {
        let report = Report::from_matches(&[]);
        assert!(report.is_empty());
        assert_eq!(report.render(Highlight::Ansi), "");
        assert_eq!(report.render(Highlight::Markers), "");
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let matches = vec![
            record("またあした", "じゃ、またあした", "see you tomorrow"),
            record("お疲れ様", "お疲れ様でした", "good work"),
            record("またあした", "またあしたね", "see you tomorrow"),
        ];

        let report = Report::from_matches(&matches);
        let readings: Vec<&str> = report.groups.iter().map(|g| g.reading.as_str()).collect();

        assert_eq!(readings, vec!["またあした", "お疲れ様"]);
        assert_eq!(report.groups[0].snippets, vec!["じゃ、またあした", "またあしたね"]);
        assert_eq!(report.groups[0].meanings, vec!["see you tomorrow"]);
    }

    #[test]
    fn test_polysemous_reading_lists_every_meaning() {
        let matches = vec![
            record("お疲れ様", "今日もお疲れ様でした", "good work"),
            record("お疲れ様", "今日もお疲れ様でした", "goodbye (at work)"),
        ];

        let report = Report::from_matches(&matches);

        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.groups[0].meanings, vec!["good work", "goodbye (at work)"]);
        assert_eq!(report.groups[0].snippets, vec!["今日もお疲れ様でした"]);

        let rendered = report.render(Highlight::Markers);
        assert!(rendered.contains("good work\n"));
        assert!(rendered.contains("goodbye (at work)\n"));
    }

    #[test]
    fn test_no_snippet_is_dropped() {
        let matches = vec![
            record("いただきます", "いただきます", "a"),
            record("いただきます", "では、いただきます", "a"),
            record("ごちそうさま", "ごちそうさまでした", "b"),
        ];

        let report = Report::from_matches(&matches);

        for m in &matches {
            let group = report
                .groups
                .iter()
                .find(|g| g.reading == m.matched_reading)
                .unwrap();
            assert!(group.snippets.contains(&m.snippet));
        }
        assert_eq!(report.groups.len(), 2);
    }

    #[test]
    fn test_render_markers_layout() {
        let matches = vec![record("お疲れ様", "今日もお疲れ様でした", "good work")];
        let rendered = Report::from_matches(&matches).render(Highlight::Markers);

        let expected = "-+-+-+-\n\
                        Expression\n\
                        お疲れ様\n\
                        \n\
                        Meaning\n\
                        good work\n\
                        \n\
                        Snippets:\n\
                        今日も**お疲れ様**でした\n\
                        -+-+-+-\n\
                        \n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_ansi_highlights_first_occurrence() {
        let matches = vec![record("またあした", "またあした、またあした", "see you tomorrow")];
        let rendered = Report::from_matches(&matches).render(Highlight::Ansi);

        assert!(rendered.contains("\x1b[1mExpression\x1b[0m"));
        assert!(rendered.contains("\x1b[93mまたあした\x1b[0m、またあした\n"));
        assert_eq!(rendered.matches(SECTION_DELIMITER).count(), 2);
    }

    #[test]
    fn test_many_repeated_matches_keep_order_and_dedup() {
        let mut matches = Vec::new();
        for i in 0..500 {
            let reading = format!("よみかた{}", i % 50);
            let snippet = format!("{}の文{}", reading, i % 7);
            matches.push(record(&reading, &snippet, "gloss"));
        }

        let report = Report::from_matches(&matches);

        assert_eq!(report.groups.len(), 50);
        for (i, group) in report.groups.iter().enumerate() {
            assert_eq!(group.reading, format!("よみかた{i}"));
            assert_eq!(group.meanings, vec!["gloss"]);

            let mut expected: Vec<String> = Vec::new();
            for m in matches.iter().filter(|m| m.matched_reading == group.reading) {
                if !expected.contains(&m.snippet) {
                    expected.push(m.snippet.clone());
                }
            }
            assert_eq!(group.snippets, expected);
        }
    }

    #[test]
    fn test_json_output() {
        let matches = vec![record("お疲れ様", "お疲れ様でした", "good work")];
        let json = Report::from_matches(&matches).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["groups"][0]["reading"], "お疲れ様");
        assert_eq!(value["groups"][0]["snippets"][0], "お疲れ様でした");
    }
}
