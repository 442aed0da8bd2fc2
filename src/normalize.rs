//! Per-field normalizers.
//!
//! Each one turns the raw text of a single infobox cell into a typed value. They are pure and
//! independent of each other: `None` means the text didn't have the expected shape.

use std::sync::LazyLock;

use regex::Regex;

static PAREN_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(.*\)").expect("PAREN_SUFFIX_RE should compile"));
static DIGIT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*").expect("DIGIT_RUN_RE should compile"));
static MONEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[$€]?([\d,.]+)\s*(billion|million|trillion)?").expect("MONEY_RE should compile")
});
static RATIO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\D)(\d\.\d+)").expect("RATIO_RE should compile"));
static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([A-Za-z]{3})\)$").expect("CURRENCY_RE should compile"));
static PLACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([\p{L} .,'’-]+?)\s*(?:\d|°|[NSEW][\d°])").expect("PLACE_RE should compile")
});
static QUALIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^()]*\)").expect("QUALIFIER_RE should compile"));
static JOINED_WORDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{Ll})(\p{Lu})").expect("JOINED_WORDS_RE should compile"));
static COUNT_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\s*languages:\s*/").expect("COUNT_PREFIX_RE should compile")
});
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*/[\s/]*").expect("SEPARATOR_RE should compile"));

/// Separator between entries of a cleaned language list.
pub const LANGUAGE_SEPARATOR: char = '/';

/// Population style counts: `"331,002,651 (20th)"` -> `331002651`.
///
/// Parenthetical suffixes (ranks, years) are dropped, then the first run of digits and
/// grouping commas is read.
pub fn count(raw: &str) -> Option<u64> {
    let text = PAREN_SUFFIX_RE.replace(raw, "");
    let digits = DIGIT_RUN_RE.find(&text)?.as_str().replace(',', "");
    digits.parse().ok()
}

/// GDP style amounts in base currency units: `"$21.43 trillion"` -> `21430000000000`.
///
/// Anything after the scale word is ignored. The amount is truncated to an integer; one too
/// large for `u64` is unknown.
pub fn monetary(raw: &str) -> Option<u64> {
    let text = raw.trim().to_lowercase();
    let caps = MONEY_RE.captures(&text)?;

    let value: f64 = caps[1].replace(',', "").parse().ok()?;
    let scale = match caps.get(2).map(|m| m.as_str()) {
        Some("trillion") => 1e12,
        Some("billion") => 1e9,
        Some("million") => 1e6,
        _ => 1.0,
    };

    let amount = value * scale;
    (amount.is_finite() && amount < u64::MAX as f64).then_some(amount as u64)
}

/// HDI style ratios: `"0.921 (very high)"` -> `0.921`.
///
/// Reads the first decimal with a single digit before the point. `"1.000"` is accepted, a
/// number like `"12.5"` is not read as `2.5`. No clamping to `[0, 1]`.
pub fn ratio(raw: &str) -> Option<f64> {
    RATIO_RE.captures(raw)?[1].parse().ok()
}

/// ISO style code from a trailing parenthetical: `"United States dollar (USD)"` -> `"USD"`.
pub fn currency_code(raw: &str) -> Option<String> {
    CURRENCY_RE
        .captures(raw.trim())
        .map(|caps| caps[1].to_string())
}

/// Capital style place names: `"Washington, D.C. 38°54′N"` -> `"Washington, D.C."`.
///
/// The name is the run of letters, spaces and `.,'-` that ends where the coordinates start
/// (a digit, a degree sign, or a compass letter glued to one). Text that doesn't run into
/// coordinates, or that starts with them, has no name.
pub fn place_name(raw: &str) -> Option<String> {
    let caps = PLACE_RE.captures(raw.trim_start())?;
    let name = caps[1].trim_end();
    (!name.is_empty()).then(|| name.to_string())
}

/// Language lists: `"English\nSpanish (de facto)"` -> `"English/Spanish"`.
///
/// Best-effort cleanup, run in order:
/// 1. drop parenthetical qualifiers,
/// 2. line breaks become `/`,
/// 3. split words glued together (`"EnglishFrench"` -> `"English/French"`),
/// 4. drop a `"<N> languages:/"` preamble.
///
/// Separators are then tidied (no blanks around them, no empty entries). Running it on its
/// own output changes nothing. Use [`split_languages`] to get the entries.
pub fn languages(raw: &str) -> Option<String> {
    let mut text = raw.to_string();
    // Nested qualifiers come off one layer per pass.
    while QUALIFIER_RE.is_match(&text) {
        text = QUALIFIER_RE.replace_all(&text, "").into_owned();
    }

    let text = text.replace(['\r', '\n'], "/");
    let text = JOINED_WORDS_RE.replace_all(&text, "$1/$2");
    let text = text.trim_start_matches(|c: char| c == LANGUAGE_SEPARATOR || c.is_whitespace());
    let text = COUNT_PREFIX_RE.replace(text.trim_end(), "");
    let text = SEPARATOR_RE.replace_all(&text, "/");
    let text = text.trim_matches(|c: char| c == LANGUAGE_SEPARATOR || c.is_whitespace());

    (!text.is_empty()).then(|| text.to_string())
}

/// Splits a cleaned language list into its entries, in order.
pub fn split_languages(cleaned: &str) -> Vec<String> {
    cleaned
        .split(LANGUAGE_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
