//! String-form helpers.
//!
//! Pure transformations used for category tokens and the `inflect` command.
//! Nothing here touches I/O or shared state.
//!
//! ## Word boundaries
//!
//! `camelize`, `pascalize`, `underscore` and `dasherize` all locate word
//! boundaries with one regex, `(?:^\w|[A-Z]|\b\w)`: the first character, any
//! uppercase ASCII letter, or a word character that follows a non-word
//! character. Each boundary is rewritten, then whitespace runs are removed.
//! Separators such as `-` or `_` are *not* stripped, so mixed input yields
//! whatever the regex produces:
//!
//! | Input | `camelize` | `underscore` |
//! |-------|------------|--------------|
//! | "hello world" | "helloWorld" | "hello_world" |
//! | "HelloWorld" | "helloWorld" | "hello_world" |
//! | "hello-world" | "hello-World" | "hello-_world" |
//!
//! ## Pluralization
//!
//! Naive English rules only (`y` → `ies`, otherwise append `s`). Irregular
//! nouns produce wrong but well-formed output.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::DomainError;

static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^\w|[A-Z]|\b\w)").expect("boundary regex is valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));

static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("case transition regex is valid"));

static ACRONYM_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z\d]+)").expect("acronym regex is valid"));

/// Rewrite every boundary character, then drop whitespace.
///
/// The closure receives the matched character(s) and whether the match sits at
/// offset 0.
fn rewrite_boundaries(input: &str, rewrite: impl Fn(&str, bool) -> String) -> String {
    let replaced = BOUNDARY.replace_all(input, |caps: &Captures| {
        let m = &caps[0];
        let first = caps.get(0).is_some_and(|whole| whole.start() == 0);
        rewrite(m, first)
    });
    WHITESPACE.replace_all(&replaced, "").into_owned()
}

/// `"hello world"` → `"helloWorld"`.
pub fn camelize(input: &str) -> String {
    rewrite_boundaries(input, |word, first| {
        if first {
            word.to_lowercase()
        } else {
            word.to_uppercase()
        }
    })
}

/// `"hello world"` → `"HelloWorld"`.
pub fn pascalize(input: &str) -> String {
    rewrite_boundaries(input, |word, _| word.to_uppercase())
}

/// `"helloWorld"` → `"hello_world"`.
pub fn underscore(input: &str) -> String {
    joined(input, '_')
}

/// `"helloWorld"` → `"hello-world"`.
pub fn dasherize(input: &str) -> String {
    joined(input, '-')
}

fn joined(input: &str, separator: char) -> String {
    rewrite_boundaries(input, |word, first| {
        if first {
            word.to_lowercase()
        } else {
            format!("{separator}{}", word.to_lowercase())
        }
    })
}

/// Split camel-cased words with `separator` and lowercase the result.
///
/// `"XMLHttpRequest"` with `_` → `"xml_http_request"`.
pub fn decamelize(input: &str, separator: &str) -> String {
    let split = LOWER_UPPER.replace_all(input, |caps: &Captures| {
        format!("{}{separator}{}", &caps[1], &caps[2])
    });
    let split = ACRONYM_WORD.replace_all(&split, |caps: &Captures| {
        format!("{}{separator}{}", &caps[1], &caps[2])
    });
    split.to_lowercase()
}

/// `"employee_salary"` → `"Employee salary"`, `"author_id"` → `"Author"`.
pub fn humanize(input: &str, low_first_letter: bool) -> String {
    let lowered = input.to_lowercase();
    let trimmed = lowered.strip_suffix("_id").unwrap_or(&lowered);
    let spaced = trimmed.replace('_', " ");
    if low_first_letter {
        spaced
    } else {
        capitalize(&spaced)
    }
}

/// Capitalize the first letter of every space-separated word.
///
/// The remainder of each word is left untouched.
pub fn titleize(input: &str) -> String {
    input.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// `"file"` → `"files"`, `"query"` → `"queries"`.
///
/// Words already ending in `s` are returned unchanged.
pub fn pluralize(input: &str) -> String {
    if input.is_empty() || is_pluralizable(input) {
        return input.to_string();
    }
    match input.strip_suffix('y') {
        Some(stem) => format!("{stem}ies"),
        None => format!("{input}s"),
    }
}

/// `"files"` → `"file"`, `"queries"` → `"query"`.
pub fn singularize(input: &str) -> String {
    if let Some(stem) = input.strip_suffix("ies") {
        return format!("{stem}y");
    }
    input.strip_suffix('s').unwrap_or(input).to_string()
}

/// True iff the string ends with `s`.
pub fn is_pluralizable(input: &str) -> bool {
    input.ends_with('s')
}

/// English ordinal suffix for `n` (sign is ignored).
pub fn ordinal(n: i64) -> &'static str {
    let n = n.unsigned_abs();
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `22` → `"22nd"`.
pub fn ordinalize(n: i64) -> String {
    format!("{n}{}", ordinal(n))
}

/// Ordinalize every integer token in a space-separated string.
///
/// Non-numeric tokens are kept as they are: `"floor 3"` → `"floor 3rd"`.
pub fn ordinalize_words(input: &str) -> String {
    input
        .split(' ')
        .map(|token| match token.parse::<i64>() {
            Ok(n) => ordinalize(n),
            Err(_) => token.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Named inflections
// ============================================================================

/// An inflection selectable by name (CLI `inflect` command, config keys).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inflection {
    Camelize,
    Pascalize,
    Underscore,
    Decamelize,
    Humanize,
    Dasherize,
    Pluralize,
    Singularize,
    Titleize,
    Ordinalize,
}

impl Inflection {
    pub const ALL: [Inflection; 10] = [
        Self::Camelize,
        Self::Pascalize,
        Self::Underscore,
        Self::Decamelize,
        Self::Humanize,
        Self::Dasherize,
        Self::Pluralize,
        Self::Singularize,
        Self::Titleize,
        Self::Ordinalize,
    ];

    /// Apply this inflection with default options.
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Camelize => camelize(input),
            Self::Pascalize => pascalize(input),
            Self::Underscore => underscore(input),
            Self::Decamelize => decamelize(input, "_"),
            Self::Humanize => humanize(input, false),
            Self::Dasherize => dasherize(input),
            Self::Pluralize => pluralize(input),
            Self::Singularize => singularize(input),
            Self::Titleize => titleize(input),
            Self::Ordinalize => ordinalize_words(input),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Camelize => "camelize",
            Self::Pascalize => "pascalize",
            Self::Underscore => "underscore",
            Self::Decamelize => "decamelize",
            Self::Humanize => "humanize",
            Self::Dasherize => "dasherize",
            Self::Pluralize => "pluralize",
            Self::Singularize => "singularize",
            Self::Titleize => "titleize",
            Self::Ordinalize => "ordinalize",
        }
    }
}

impl fmt::Display for Inflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Inflection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == wanted)
            .ok_or_else(|| DomainError::UnknownInflection(s.to_string()))
    }
}
