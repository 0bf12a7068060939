//! Languages understood by Google's speech endpoint.
//!
//! Codes are matched case-insensitively. Regional variants such as `en-gb`
//! are not distinct languages on the endpoint; they resolve to the base
//! language plus the top-level domain that produces the matching accent.

use serde::Serialize;

use crate::errors::TtsError;

/// A language code and its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    /// Code sent to the engine (e.g. `en`, `zh-CN`).
    pub code: &'static str,
    /// Human readable name.
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> LanguageInfo {
    LanguageInfo { code, name }
}

static LANGUAGES: &[LanguageInfo] = &[
    lang("af", "Afrikaans"),
    lang("ar", "Arabic"),
    lang("bg", "Bulgarian"),
    lang("bn", "Bengali"),
    lang("bs", "Bosnian"),
    lang("ca", "Catalan"),
    lang("cs", "Czech"),
    lang("cy", "Welsh"),
    lang("da", "Danish"),
    lang("de", "German"),
    lang("el", "Greek"),
    lang("en", "English"),
    lang("es", "Spanish"),
    lang("et", "Estonian"),
    lang("fi", "Finnish"),
    lang("fr", "French"),
    lang("gu", "Gujarati"),
    lang("hi", "Hindi"),
    lang("hr", "Croatian"),
    lang("hu", "Hungarian"),
    lang("id", "Indonesian"),
    lang("is", "Icelandic"),
    lang("it", "Italian"),
    lang("iw", "Hebrew"),
    lang("ja", "Japanese"),
    lang("jw", "Javanese"),
    lang("km", "Khmer"),
    lang("kn", "Kannada"),
    lang("ko", "Korean"),
    lang("la", "Latin"),
    lang("lv", "Latvian"),
    lang("ml", "Malayalam"),
    lang("mr", "Marathi"),
    lang("ms", "Malay"),
    lang("my", "Myanmar (Burmese)"),
    lang("ne", "Nepali"),
    lang("nl", "Dutch"),
    lang("no", "Norwegian"),
    lang("pl", "Polish"),
    lang("pt", "Portuguese"),
    lang("ro", "Romanian"),
    lang("ru", "Russian"),
    lang("si", "Sinhala"),
    lang("sk", "Slovak"),
    lang("sq", "Albanian"),
    lang("sr", "Serbian"),
    lang("su", "Sundanese"),
    lang("sv", "Swedish"),
    lang("sw", "Swahili"),
    lang("ta", "Tamil"),
    lang("te", "Telugu"),
    lang("th", "Thai"),
    lang("tl", "Filipino"),
    lang("tr", "Turkish"),
    lang("uk", "Ukrainian"),
    lang("ur", "Urdu"),
    lang("vi", "Vietnamese"),
    lang("zh-CN", "Chinese (Simplified)"),
    lang("zh-TW", "Chinese (Mandarin/Taiwan)"),
];

/// Regional variant -> (base language, accent TLD).
static REGIONAL_ALIASES: &[(&str, &str, &str)] = &[
    ("en-us", "en", "com"),
    ("en-gb", "en", "co.uk"),
    ("en-uk", "en", "co.uk"),
    ("en-au", "en", "com.au"),
    ("en-ca", "en", "ca"),
    ("en-in", "en", "co.in"),
    ("en-ie", "en", "ie"),
    ("en-za", "en", "co.za"),
    ("en-nz", "en", "co.nz"),
    ("en-ng", "en", "com.ng"),
    ("fr-ca", "fr", "ca"),
    ("fr-fr", "fr", "fr"),
    ("pt-br", "pt", "com.br"),
    ("pt-pt", "pt", "pt"),
    ("es-es", "es", "es"),
    ("es-mx", "es", "com.mx"),
    ("es-us", "es", "com"),
    ("zh", "zh-CN", "com"),
    ("zh-cn", "zh-CN", "com"),
    ("zh-tw", "zh-TW", "com"),
    ("he", "iw", "com"),
];

/// A language code ready to send to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLanguage {
    /// Canonical code.
    pub code: String,
    /// Accent TLD implied by a regional variant, if any.
    pub tld: Option<&'static str>,
}

/// All languages in the built-in table, sorted by code.
pub fn supported_languages() -> &'static [LanguageInfo] {
    LANGUAGES
}

/// Resolve a user supplied language code to its canonical form.
///
/// ## Errors
///
/// Returns `TtsError::UnsupportedLanguage` if the code is neither a known
/// language nor a known regional variant.
///
/// ## Examples
///
/// ```
/// use talkie_lib::languages::resolve_language;
///
/// let resolved = resolve_language("en-GB").unwrap();
/// assert_eq!(resolved.code, "en");
/// assert_eq!(resolved.tld, Some("co.uk"));
/// ```
pub fn resolve_language(code: &str) -> Result<ResolvedLanguage, TtsError> {
    let wanted = code.trim();

    if let Some(info) = LANGUAGES
        .iter()
        .find(|info| info.code.eq_ignore_ascii_case(wanted))
    {
        return Ok(ResolvedLanguage {
            code: info.code.to_string(),
            tld: None,
        });
    }

    REGIONAL_ALIASES
        .iter()
        .find(|(alias, _, _)| alias.eq_ignore_ascii_case(wanted))
        .map(|(_, base, tld)| ResolvedLanguage {
            code: (*base).to_string(),
            tld: Some(*tld),
        })
        .ok_or_else(|| TtsError::UnsupportedLanguage {
            language: code.to_string(),
        })
}

/// Parse one line of `gtts-cli --all` output (` code: Name`).
///
/// Returns the `(code, name)` pair, or `None` for lines that cannot be parsed.
pub(crate) fn parse_language_line(line: &str) -> Option<(String, String)> {
    let (code, name) = line.trim().split_once(':')?;
    let (code, name) = (code.trim(), name.trim());

    if code.is_empty() || name.is_empty() {
        return None;
    }

    Some((code.to_string(), name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_code() {
        let resolved = resolve_language("en").unwrap();
        assert_eq!(resolved.code, "en");
        assert_eq!(resolved.tld, None);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve_language("FR").unwrap().code, "fr");
        assert_eq!(resolve_language("zh-cn").unwrap().code, "zh-CN");
        assert_eq!(resolve_language(" de ").unwrap().code, "de");
    }

    #[test]
    fn test_resolve_regional_variants() {
        let gb = resolve_language("en-gb").unwrap();
        assert_eq!(gb.code, "en");
        assert_eq!(gb.tld, Some("co.uk"));

        let br = resolve_language("pt-BR").unwrap();
        assert_eq!(br.code, "pt");
        assert_eq!(br.tld, Some("com.br"));
    }

    #[test]
    fn test_resolve_unknown_language() {
        let err = resolve_language("klingon").unwrap_err();
        assert!(matches!(err, TtsError::UnsupportedLanguage { ref language } if language == "klingon"));
    }

    #[test]
    fn test_aliases_point_at_known_languages() {
        for (alias, base, _) in REGIONAL_ALIASES {
            assert!(
                LANGUAGES.iter().any(|info| info.code == *base),
                "alias {alias} points at unknown language {base}"
            );
        }
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        let codes: Vec<_> = LANGUAGES.iter().map(|info| info.code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_parse_language_line() {
        assert_eq!(
            parse_language_line(" en-au: English (Australia)"),
            Some(("en-au".into(), "English (Australia)".into()))
        );
        assert_eq!(
            parse_language_line(" zh-CN: Chinese (Simplified)"),
            Some(("zh-CN".into(), "Chinese (Simplified)".into()))
        );
    }

    #[test]
    fn test_parse_language_line_rejects_garbage() {
        assert!(parse_language_line("").is_none());
        assert!(parse_language_line("   ").is_none());
        assert!(parse_language_line("no colon here").is_none());
        assert!(parse_language_line(":").is_none());
        assert!(parse_language_line("en:").is_none());
        assert!(parse_language_line(": English").is_none());
    }
}
