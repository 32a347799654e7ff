use isolang::Language;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use crate::errors::AppError;

/// Language utilities for language code handling
///
/// The set of usable codes is owned by the translation service, so it is
/// modelled as a catalog that can be swapped out in tests.
pub trait LanguageCatalog: Send + Sync {
    /// Whether `code` is a key of the catalog
    fn is_valid(&self, code: &str) -> bool;

    /// All (code, name) pairs, sorted by code
    fn list_all(&self) -> Vec<(String, String)>;

    /// Human readable name of `code`, if known
    fn language_name(&self, code: &str) -> Option<String> {
        self.list_all()
            .into_iter()
            .find(|(c, _)| c == code)
            .map(|(_, name)| name)
    }
}

// Code table published by Google Translate for its web API
static GOOGLE_LANGUAGES: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("af", "afrikaans"),
        ("sq", "albanian"),
        ("am", "amharic"),
        ("ar", "arabic"),
        ("hy", "armenian"),
        ("az", "azerbaijani"),
        ("eu", "basque"),
        ("be", "belarusian"),
        ("bn", "bengali"),
        ("bs", "bosnian"),
        ("bg", "bulgarian"),
        ("ca", "catalan"),
        ("ceb", "cebuano"),
        ("ny", "chichewa"),
        ("zh-cn", "chinese (simplified)"),
        ("zh-tw", "chinese (traditional)"),
        ("co", "corsican"),
        ("hr", "croatian"),
        ("cs", "czech"),
        ("da", "danish"),
        ("nl", "dutch"),
        ("en", "english"),
        ("eo", "esperanto"),
        ("et", "estonian"),
        ("tl", "filipino"),
        ("fi", "finnish"),
        ("fr", "french"),
        ("fy", "frisian"),
        ("gl", "galician"),
        ("ka", "georgian"),
        ("de", "german"),
        ("el", "greek"),
        ("gu", "gujarati"),
        ("ht", "haitian creole"),
        ("ha", "hausa"),
        ("haw", "hawaiian"),
        ("iw", "hebrew"),
        ("he", "hebrew"),
        ("hi", "hindi"),
        ("hmn", "hmong"),
        ("hu", "hungarian"),
        ("is", "icelandic"),
        ("ig", "igbo"),
        ("id", "indonesian"),
        ("ga", "irish"),
        ("it", "italian"),
        ("ja", "japanese"),
        ("jw", "javanese"),
        ("kn", "kannada"),
        ("kk", "kazakh"),
        ("km", "khmer"),
        ("ko", "korean"),
        ("ku", "kurdish (kurmanji)"),
        ("ky", "kyrgyz"),
        ("lo", "lao"),
        ("la", "latin"),
        ("lv", "latvian"),
        ("lt", "lithuanian"),
        ("lb", "luxembourgish"),
        ("mk", "macedonian"),
        ("mg", "malagasy"),
        ("ms", "malay"),
        ("ml", "malayalam"),
        ("mt", "maltese"),
        ("mi", "maori"),
        ("mr", "marathi"),
        ("mn", "mongolian"),
        ("my", "myanmar (burmese)"),
        ("ne", "nepali"),
        ("no", "norwegian"),
        ("or", "odia"),
        ("ps", "pashto"),
        ("fa", "persian"),
        ("pl", "polish"),
        ("pt", "portuguese"),
        ("pa", "punjabi"),
        ("ro", "romanian"),
        ("ru", "russian"),
        ("sm", "samoan"),
        ("gd", "scots gaelic"),
        ("sr", "serbian"),
        ("st", "sesotho"),
        ("sn", "shona"),
        ("sd", "sindhi"),
        ("si", "sinhala"),
        ("sk", "slovak"),
        ("sl", "slovenian"),
        ("so", "somali"),
        ("es", "spanish"),
        ("su", "sundanese"),
        ("sw", "swahili"),
        ("sv", "swedish"),
        ("tg", "tajik"),
        ("ta", "tamil"),
        ("te", "telugu"),
        ("th", "thai"),
        ("tr", "turkish"),
        ("uk", "ukrainian"),
        ("ur", "urdu"),
        ("ug", "uyghur"),
        ("uz", "uzbek"),
        ("vi", "vietnamese"),
        ("cy", "welsh"),
        ("xh", "xhosa"),
        ("yi", "yiddish"),
        ("yo", "yoruba"),
        ("zu", "zulu"),
    ]
    .into_iter()
    .collect()
});

/// Catalog backed by the Google Translate code table
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleLanguageCatalog;

impl LanguageCatalog for GoogleLanguageCatalog {
    fn is_valid(&self, code: &str) -> bool {
        GOOGLE_LANGUAGES.contains_key(code)
    }

    fn list_all(&self) -> Vec<(String, String)> {
        GOOGLE_LANGUAGES
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect()
    }

    fn language_name(&self, code: &str) -> Option<String> {
        GOOGLE_LANGUAGES.get(code).map(|name| name.to_string())
    }
}

/// ISO 639-2/B codes that differ from their 639-2/T counterpart
fn part2b_to_part2t(code: &str) -> Option<&'static str> {
    match code {
        "fre" => Some("fra"),
        "ger" => Some("deu"),
        "dut" => Some("nld"),
        "gre" => Some("ell"),
        "chi" => Some("zho"),
        "cze" => Some("ces"),
        "ice" => Some("isl"),
        "alb" => Some("sqi"),
        "arm" => Some("hye"),
        "baq" => Some("eus"),
        "bur" => Some("mya"),
        "per" => Some("fas"),
        "geo" => Some("kat"),
        "may" => Some("msa"),
        "mac" => Some("mkd"),
        "rum" => Some("ron"),
        "slo" => Some("slk"),
        "wel" => Some("cym"),
        _ => None,
    }
}

/// Normalize a user supplied language code
///
/// Trims and lowercases the code. Three-letter ISO 639-2 codes are mapped to
/// their ISO 639-1 form when one exists, so `fra`, `fre` and `fr` all end up
/// as `fr`. Codes the service spells differently (`jv`, `fil`, `nb`, `zh`)
/// are rewritten to its spelling. Anything else is returned as is and left
/// to the catalog to judge.
pub fn normalize_language_code(code: &str) -> String {
    let normalized = code.trim().to_lowercase();

    if normalized.len() == 3 {
        let part2t = part2b_to_part2t(&normalized).unwrap_or(&normalized);
        if let Some(code_639_1) = Language::from_639_3(part2t).and_then(|lang| lang.to_639_1()) {
            return service_alias(code_639_1).unwrap_or(code_639_1).to_string();
        }
    }

    match service_alias(&normalized) {
        Some(alias) => alias.to_string(),
        None => normalized,
    }
}

/// ISO codes the service knows under a different code
fn service_alias(code: &str) -> Option<&'static str> {
    match code {
        "jv" => Some("jw"),
        "fil" => Some("tl"),
        "nb" => Some("no"),
        "zh" => Some("zh-cn"),
        _ => None,
    }
}

/// Normalize `code` and check it against `catalog`
///
/// `role` names the option in the error message ("source", "destination").
pub fn validate_language(
    catalog: &dyn LanguageCatalog,
    code: &str,
    role: &str,
) -> Result<String, AppError> {
    let normalized = normalize_language_code(code);
    if normalized.is_empty() || !catalog.is_valid(&normalized) {
        return Err(AppError::Config(format!(
            "{} language '{}' is not available, run `srt-translator languages` for the list of supported codes",
            role,
            code.trim()
        )));
    }
    Ok(normalized)
}
