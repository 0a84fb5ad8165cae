//! Best-effort titlecasing for filesystem-style slugs.
//!
//! [`format_label`] turns a single lowercase/kebab-case/camelCase path
//! segment into display text: `"unidad-5"` becomes `"Unidad 5"`, `"guia1"`
//! becomes `"Guía 1"`, `"PDF"` stays `"PDF"`. The heuristic is an ordered
//! rule pipeline; the first matching rule wins for every token.
//!
//! The function is total. Input it does not recognize degrades to plain
//! word capitalization rather than failing.

use std::sync::LazyLock;

use log::error;
use regex::Regex;

/// Numbered-prefix keywords mapped to their canonical display words.
/// Matching is first-in-table; only one prefix is expected per token.
const KEYWORDS: &[(&str, &str)] = &[
  ("unidad", "Unidad"),
  ("guia", "Guía"),
  ("cap", "Capítulo"),
  ("tarea", "Tarea"),
  ("prueba", "Prueba"),
  ("ejercicio", "Ejercicio"),
  ("leccion", "Lección"),
  ("modulo", "Módulo"),
  ("seccion", "Sección"),
  ("parte", "Parte"),
  ("apendice", "Apéndice"),
  ("anexo", "Anexo"),
];

/// Spanish articles, prepositions and conjunctions kept lowercase when they
/// appear mid-label. The first token of a label is never lowered.
const CONNECTORS: &[&str] = &[
  "de", "del", "la", "las", "el", "los", "y", "e", "o", "u", "a", "en",
  "para", "por", "con", "sin",
];

/// Regex that never matches anything, used as a fallback when a static
/// pattern fails to compile.
fn never_matching_regex() -> Regex {
  #[allow(clippy::expect_used)]
  Regex::new(r"[^\s\S]").expect("failed to compile never-matching regex")
}

// Compound-casing boundaries. An uppercase run followed by `Upper+lower`
// must split before the lowercase/uppercase rule so "ABCDef" becomes
// "ABC Def" and not "ABCD ef".
static UPPER_RUN_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap_or_else(|e| {
    error!("failed to compile UPPER_RUN_BOUNDARY regex: {e}");
    never_matching_regex()
  })
});

static LOWER_UPPER_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"([a-z])([A-Z])").unwrap_or_else(|e| {
    error!("failed to compile LOWER_UPPER_BOUNDARY regex: {e}");
    never_matching_regex()
  })
});

static LETTER_DIGIT_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"([A-Za-z])([0-9])").unwrap_or_else(|e| {
    error!("failed to compile LETTER_DIGIT_BOUNDARY regex: {e}");
    never_matching_regex()
  })
});

static DIGIT_LETTER_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"([0-9])([A-Za-z])").unwrap_or_else(|e| {
    error!("failed to compile DIGIT_LETTER_BOUNDARY regex: {e}");
    never_matching_regex()
  })
});

// Acronym-shaped tokens: short uppercase/digit runs ("PDF", "HTML5") or an
// alphanumeric code with at most one letter on each side of the digits.
static ACRONYM_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(?:[A-Z0-9]{2,4}|[A-Z]?[0-9]+[A-Z]?[0-9]*)$").unwrap_or_else(
    |e| {
      error!("failed to compile ACRONYM_TOKEN regex: {e}");
      never_matching_regex()
    },
  )
});

// A single uppercase letter split apart from a following digit run by the
// boundary pass above. Rejoined after classification: "U 1" -> "U1".
// Multi-letter words keep their space ("Capítulo 1" is unaffected).
static SPLIT_CODE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\b([A-Z]) ([0-9]+)").unwrap_or_else(|e| {
    error!("failed to compile SPLIT_CODE regex: {e}");
    never_matching_regex()
  })
});

/// Capitalize the first letter of a string, leaving the rest untouched.
fn capitalize_first(s: &str) -> String {
  let mut chars = s.chars();
  chars.next().map_or_else(String::new, |c| {
    c.to_uppercase().collect::<String>() + chars.as_str()
  })
}

/// Whether a token consists solely of roman numeral letters.
fn is_roman_numeral(token: &str) -> bool {
  !token.is_empty()
    && token.chars().all(|c| {
      matches!(
        c.to_ascii_uppercase(),
        'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M'
      )
    })
}

/// Classify a single token, first matching rule wins.
///
/// Order matters: acronym and roman-numeral rules must run before the
/// keyword and generic rules, else "PDF" degrades to "Pdf". Connector
/// lowering only applies past the first token so a label never starts
/// with a lowercase word.
fn classify_token(token: &str, is_first: bool) -> String {
  if ACRONYM_TOKEN.is_match(token) {
    return token.to_uppercase();
  }

  if is_roman_numeral(token) {
    return token.to_ascii_uppercase();
  }

  let lower = token.to_lowercase();

  for (keyword, canonical) in KEYWORDS {
    if let Some(rest) = lower.strip_prefix(keyword) {
      if rest.is_empty() {
        return (*canonical).to_string();
      }
      return format!("{canonical} {rest}");
    }
  }

  if !is_first && CONNECTORS.contains(&lower.as_str()) {
    return lower;
  }

  capitalize_first(&lower)
}

/// Format a raw slug into human-readable display text.
///
/// The pipeline: separators become spaces, compound casing is split into
/// words, each token is classified (acronym, roman numeral, numbered
/// prefix, connector, plain word), and single-letter codes split from
/// their digits are rejoined.
///
/// Re-running the formatter on its own output is not guaranteed to be a
/// no-op: the casing split in step two may re-split already-formatted
/// text. It is idempotent on lowercase kebab-case inputs, which is what
/// path segments are in practice.
#[must_use]
pub fn format_label(raw: &str) -> String {
  // Step 1: normalize separators.
  let text = raw.replace(['-', '_', '.'], " ");

  // Step 2: split compound casing and letter/digit boundaries.
  let text = UPPER_RUN_BOUNDARY.replace_all(&text, "$1 $2");
  let text = LOWER_UPPER_BOUNDARY.replace_all(&text, "$1 $2");
  let text = LETTER_DIGIT_BOUNDARY.replace_all(&text, "$1 $2");
  let text = DIGIT_LETTER_BOUNDARY.replace_all(&text, "$1 $2");

  // Steps 3-5: tokenize, classify, join.
  let joined = text
    .split_whitespace()
    .enumerate()
    .map(|(idx, token)| classify_token(token, idx == 0))
    .collect::<Vec<_>>()
    .join(" ");

  // Step 6: undo the boundary split for acronym-style alphanumerics.
  let collapsed = SPLIT_CODE.replace_all(&joined, "${1}${2}");

  // Step 7: collapse repeated whitespace and trim.
  collapsed.split_whitespace().collect::<Vec<_>>().join(" ")
}
