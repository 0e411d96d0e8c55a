/// Languages the news API can filter by, as (code, display name).
const LANGUAGES: [(&str, &str); 14] = [
    ("ar", "Arabic"),
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("it", "Italian"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("ud", "Urdu"),
    ("zh", "Chinese"),
];

/// Lookup between news language codes and their display names.
pub struct NewsLanguage;

impl NewsLanguage {
    /// Display names in catalog order.
    pub fn options() -> Vec<String> {
        LANGUAGES.iter().map(|(_, name)| name.to_string()).collect()
    }

    pub fn code_by_name(name: &str) -> Option<&'static str> {
        LANGUAGES
            .iter()
            .find(|(_, candidate)| candidate.eq_ignore_ascii_case(name))
            .map(|(code, _)| *code)
    }

    pub fn name_by_code(code: &str) -> Option<&'static str> {
        LANGUAGES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(code))
            .map(|(_, name)| *name)
    }
}
