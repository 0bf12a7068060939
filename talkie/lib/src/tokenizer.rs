//! Splits text into parts small enough for a single speech request.
//!
//! Google's endpoint refuses inputs longer than [`MAX_CHARS`] characters, so
//! longer text is cut at natural pauses (sentence and clause punctuation)
//! and, failing that, at the last space before the limit.
//!
//! ## Examples
//!
//! ```
//! use talkie_lib::tokenizer::tokenize;
//!
//! assert_eq!(tokenize("Dr. Who"), vec!["Dr Who".to_string()]);
//! assert!(tokenize("?!").is_empty());
//! ```

/// Maximum number of characters per request.
pub const MAX_CHARS: usize = 100;

const TONE_MARKS: [char; 4] = ['?', '!', '？', '！'];
const PERIOD_COMMA: [char; 2] = ['.', ','];
const COLON: char = ':';
const OTHER_PUNCTUATION: [char; 15] = [
    '¡', '(', ')', '[', ']', '¿', '…', '‥', '،', ';', '—', '。', '，', '、', '\n',
];

/// Abbreviations whose trailing period would otherwise read as a sentence end.
const ABBREVIATIONS: [&str; 9] = ["dr", "jr", "mr", "mrs", "ms", "msgr", "prof", "sr", "st"];

const WORD_SUBSTITUTIONS: [(&str, &str); 1] = [("Esq.", "Esquire")];

fn is_punctuation(c: char) -> bool {
    TONE_MARKS.contains(&c)
        || PERIOD_COMMA.contains(&c)
        || c == COLON
        || OTHER_PUNCTUATION.contains(&c)
}

/// Split `text` into request-sized tokens.
///
/// Returns an empty vector when the text holds nothing but whitespace and
/// punctuation.
pub fn tokenize(text: &str) -> Vec<String> {
    let text = preprocess(text.trim());

    if text.chars().count() <= MAX_CHARS {
        return clean_tokens(vec![text]);
    }

    clean_tokens(split_on_punctuation(&text))
        .iter()
        .flat_map(|token| minimize(token))
        .filter(|token| !token.is_empty())
        .collect()
}

fn preprocess(text: &str) -> String {
    let mut spaced = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        spaced.push(c);
        if TONE_MARKS.contains(&c) {
            spaced.push(' ');
        }
    }

    let joined = spaced.replace("-\n", "");
    let mut result = strip_abbreviation_periods(&joined);

    for (from, to) in WORD_SUBSTITUTIONS {
        result = result.replace(from, to);
    }

    result
}

fn strip_abbreviation_periods(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut word_start = 0;

    for (i, &c) in chars.iter().enumerate() {
        if c == '.' {
            let word: String = chars[word_start..i].iter().collect();
            if ABBREVIATIONS.contains(&word.to_lowercase().as_str()) {
                word_start = i + 1;
                continue;
            }
        }
        if !c.is_alphabetic() {
            word_start = i + 1;
        }
        result.push(c);
    }

    result
}

fn split_on_punctuation(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let prev = i.checked_sub(1).map(|j| chars[j]);
        let next = chars.get(i + 1).copied();

        if TONE_MARKS.contains(&c) {
            current.push(c);
            tokens.push(std::mem::take(&mut current));
        } else if PERIOD_COMMA.contains(&c) && next == Some(' ') && !closes_dotted_abbreviation(&chars, i) {
            tokens.push(std::mem::take(&mut current));
            i += 1;
        } else if c == COLON && !prev.is_some_and(|p| p.is_ascii_digit()) {
            tokens.push(std::mem::take(&mut current));
        } else if OTHER_PUNCTUATION.contains(&c) {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }

        i += 1;
    }

    tokens.push(current);
    tokens
}

/// `e.g. ` and `i.e. `: a period preceded by `.x` is not a clause break.
fn closes_dotted_abbreviation(chars: &[char], i: usize) -> bool {
    i >= 2 && chars[i - 2] == '.' && chars[i - 1].is_ascii_lowercase()
}

fn clean_tokens(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|token| !token.chars().all(|c| c.is_whitespace() || is_punctuation(c)))
        .map(|token| token.trim().to_string())
        .collect()
}

fn minimize(token: &str) -> Vec<String> {
    let chars: Vec<char> = token.chars().collect();
    let mut pieces = Vec::new();
    let mut start = 0;

    loop {
        if chars.get(start) == Some(&' ') {
            start += 1;
        }

        let rest = &chars[start..];
        if rest.len() <= MAX_CHARS {
            pieces.push(rest.iter().collect());
            break;
        }

        let cut = rest[..MAX_CHARS]
            .iter()
            .rposition(|c| *c == ' ')
            .unwrap_or(MAX_CHARS);
        pieces.push(rest[..cut].iter().collect());
        start += cut;
    }

    pieces
}
