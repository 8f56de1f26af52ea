use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap());
static STYLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap());
static NOSCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<noscript\b[^>]*>.*?</noscript\s*>").unwrap());
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static ENTITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").unwrap());

/// Separator placed between surviving fragments, read back as a paragraph break by the segmenter
pub const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Pull visible text out of an HTML page.
///
/// Script, style and comment blocks are dropped, the rest is split on tags.
/// Each fragment is entity-decoded and trimmed, and only fragments accepted
/// by `keep` survive.
pub fn extract_text(html: &str, keep: impl Fn(&str) -> bool) -> String {
    let mut stripped = html.to_string();
    for pattern in [&*SCRIPT, &*STYLE, &*NOSCRIPT, &*COMMENT] {
        stripped = pattern.replace_all(&stripped, "").into_owned();
    }

    let fragments: Vec<String> = TAG
        .split(&stripped)
        .map(decode_entities)
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty() && keep(f))
        .collect();

    tracing::debug!("Extracted {} text fragments", fragments.len());

    fragments.join(FRAGMENT_SEPARATOR)
}

/// Decode named entities common in page text plus numeric references
pub fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse().ok().and_then(char::from_u32)
            } else {
                match body {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some('\u{a0}'),
                    _ => None,
                }
            };

            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
