use std::sync::OnceLock;

use regex::Regex;

use crate::models::ResumeDocument;

const FALLBACK_STEM: &str = "Resume";

fn separator_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\p{Alphabetic}\p{Nd}]+").expect("constant pattern compiles"))
}

/// `<Name>_Resume.<ext>`: every run of characters that are not letters or
/// digits becomes one `_`, with leading and trailing `_` trimmed. A missing or
/// unusable name becomes `Resume`.
pub fn export_file_name(doc: &ResumeDocument, ext: &str) -> String {
    let stem = doc
        .display_name()
        .map(|name| separator_runs().replace_all(name, "_").trim_matches('_').to_string())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| FALLBACK_STEM.to_string());
    format!("{stem}_Resume.{ext}")
}
