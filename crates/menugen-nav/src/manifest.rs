//! Manifest loading, path validation and ordering.
//!
//! The manifest is a JSON array of [`PathRecord`]s driving menu
//! generation. Every `file` value is a `/`-separated relative path that
//! carries a fixed root prefix (e.g. `html/`) and suffix (e.g. `.html`),
//! both stripped before the hierarchy is inferred.

use std::{cmp::Ordering, fs, iter::Peekable, path::Path, str::Chars};

use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// One entry of the navigation manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRecord {
  /// Relative document path, e.g. `html/unidad5/guia1.html`.
  pub file: String,

  /// Optional display-text override for the link. When absent, the link
  /// text is derived from the leaf path segment.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pretty: Option<String>,
}

/// Load and parse the manifest from disk.
///
/// This is the single fallible boundary of a render pass. Both failure
/// kinds abort the entire render; callers are expected to log them and
/// produce an empty menu rather than a partial one.
///
/// # Errors
///
/// Returns [`MenuError::Fetch`] if the file cannot be read and
/// [`MenuError::Parse`] if its content is not a JSON array of records.
pub fn load_manifest(path: &Path) -> Result<Vec<PathRecord>, MenuError> {
  let content = fs::read_to_string(path)?;
  let records = serde_json::from_str(&content)?;
  Ok(records)
}

/// Split a record path into folder segments plus the leaf segment.
///
/// The leaf is always the last element and is never treated as a heading.
///
/// # Errors
///
/// Returns [`MenuError::MalformedRecord`] if the path lacks the expected
/// prefix or suffix, or if any segment (leaf included) is empty.
pub fn split_segments<'a>(
  file: &'a str,
  prefix: &str,
  suffix: &str,
) -> Result<(Vec<&'a str>, &'a str), MenuError> {
  let malformed = |reason: String| {
    MenuError::MalformedRecord {
      path: file.to_string(),
      reason,
    }
  };

  let stripped = file
    .strip_prefix(prefix)
    .ok_or_else(|| malformed(format!("missing `{prefix}` prefix")))?;
  let stripped = stripped
    .strip_suffix(suffix)
    .ok_or_else(|| malformed(format!("missing `{suffix}` suffix")))?;

  let mut segments: Vec<&str> = stripped.split('/').collect();
  let leaf = segments
    .pop()
    .filter(|leaf| !leaf.is_empty())
    .ok_or_else(|| malformed("empty leaf segment".to_string()))?;

  if segments.iter().any(|segment| segment.is_empty()) {
    return Err(malformed("empty folder segment".to_string()));
  }

  Ok((segments, leaf))
}

/// Sort records in place by segment-wise natural path order.
///
/// Ordering is a configuration choice, not a correctness requirement:
/// grouping only depends on records sharing a folder prefix being
/// adjacent, and any consistently applied total order satisfies that.
pub fn sort_records(records: &mut [PathRecord]) {
  records.sort_by(|a, b| natural_cmp(&a.file, &b.file));
}

/// Compare two `/`-separated paths segment by segment, with digit runs
/// compared numerically: `unidad2` sorts before `unidad10`.
///
/// At every depth, folder segments sort before leaf segments. That keeps
/// grouped records contiguous and places root-level items after their
/// sibling groups, which is the order the menu is meant to read in.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
  let segments_a: Vec<&str> = a.split('/').collect();
  let segments_b: Vec<&str> = b.split('/').collect();

  for (idx, (seg_a, seg_b)) in
    segments_a.iter().zip(&segments_b).enumerate()
  {
    let a_is_leaf = idx + 1 == segments_a.len();
    let b_is_leaf = idx + 1 == segments_b.len();
    match a_is_leaf.cmp(&b_is_leaf) {
      Ordering::Equal => {},
      other => return other,
    }

    match natural_segment_cmp(seg_a, seg_b) {
      Ordering::Equal => {},
      other => return other,
    }
  }

  // Equal zipped segments with equal leaf flags implies equal depth; the
  // plain fallback keeps the comparison total either way.
  segments_a
    .len()
    .cmp(&segments_b.len())
    .then_with(|| a.cmp(b))
}

fn natural_segment_cmp(a: &str, b: &str) -> Ordering {
  let mut chars_a = a.chars().peekable();
  let mut chars_b = b.chars().peekable();

  loop {
    match (chars_a.peek().copied(), chars_b.peek().copied()) {
      (None, None) => return Ordering::Equal,
      (None, Some(_)) => return Ordering::Less,
      (Some(_), None) => return Ordering::Greater,
      (Some(ca), Some(cb)) => {
        if ca.is_ascii_digit() && cb.is_ascii_digit() {
          let num_a = take_number(&mut chars_a);
          let num_b = take_number(&mut chars_b);
          match num_a.cmp(&num_b) {
            Ordering::Equal => {},
            other => return other,
          }
        } else {
          match ca
            .to_ascii_lowercase()
            .cmp(&cb.to_ascii_lowercase())
          {
            Ordering::Equal => {
              chars_a.next();
              chars_b.next();
            },
            other => return other,
          }
        }
      },
    }
  }
}

/// Consume a run of ASCII digits, saturating on overflow. Manifest paths
/// are short; saturation only matters for absurd inputs.
fn take_number(chars: &mut Peekable<Chars<'_>>) -> u64 {
  let mut value: u64 = 0;
  while let Some(c) = chars.peek().copied() {
    let Some(digit) = c.to_digit(10) else { break };
    value = value
      .saturating_mul(10)
      .saturating_add(u64::from(digit));
    chars.next();
  }
  value
}

/// Derive the record prefix for documents scanned under `root`.
///
/// The prefix is the tree's own name, the final path component, with a
/// trailing `/`. Leading directories and absolute paths are dropped so
/// that scanning `./docs/html` still yields `html/...` records, which is
/// what a later render run with the default root prefix expects.
#[must_use]
pub fn derive_prefix(root: &Path) -> String {
  let name = root.file_name().map_or_else(
    || {
      root
        .to_string_lossy()
        .replace('\\', "/")
        .trim_matches('/')
        .to_string()
    },
    |name| name.to_string_lossy().into_owned(),
  );
  format!("{name}/")
}

/// Build a manifest by walking a directory tree for documents.
///
/// Files whose names end in `suffix` are collected as records with
/// `prefix` prepended to their root-relative path, then natural-sorted.
/// Unreadable entries are logged and skipped.
///
/// # Errors
///
/// Returns [`MenuError::Fetch`] only when `root` itself cannot be
/// accessed.
pub fn scan_directory(
  root: &Path,
  prefix: &str,
  suffix: &str,
) -> Result<Vec<PathRecord>, MenuError> {
  use walkdir::WalkDir;

  let mut records = Vec::new();

  // WalkDir only tries to open the directory when iterating. If the root
  // itself is unreadable, the first entry is that error.
  let mut walker = WalkDir::new(root)
    .follow_links(true)
    .into_iter()
    .peekable();
  if matches!(walker.peek(), Some(Err(_))) {
    if let Some(Err(e)) = walker.next() {
      return Err(MenuError::Fetch(e.into()));
    }
  }

  for result in walker {
    let entry = match result {
      Ok(entry) => entry,
      Err(e) => {
        log::warn!("skipping unreadable directory entry: {e}");
        continue;
      },
    };

    if entry.file_type().is_dir() {
      continue;
    }

    let Ok(rel_path) = entry.path().strip_prefix(root) else {
      continue;
    };
    let rel = rel_path.to_string_lossy().replace('\\', "/");
    if !rel.ends_with(suffix) {
      continue;
    }

    records.push(PathRecord {
      file:   format!("{prefix}{rel}"),
      pretty: None,
    });
  }

  sort_records(&mut records);
  Ok(records)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use std::fs;

  use super::*;

  #[test]
  fn test_manifest_deserialization() {
    let json = r#"[
      { "file": "html/unidad5/guia1.html" },
      { "file": "html/jaimito.html", "pretty": "El Jaimito" }
    ]"#;

    let records: Vec<PathRecord> =
      serde_json::from_str(json).expect("manifest should parse");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].file, "html/unidad5/guia1.html");
    assert_eq!(records[0].pretty, None);
    assert_eq!(records[1].pretty.as_deref(), Some("El Jaimito"));
  }

  #[test]
  fn test_load_manifest_missing_file_is_fetch_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result = load_manifest(&dir.path().join("list.json"));
    assert!(matches!(result, Err(MenuError::Fetch(_))));
  }

  #[test]
  fn test_load_manifest_invalid_json_is_parse_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("list.json");
    fs::write(&path, "{ not json").expect("Failed to write manifest");

    let result = load_manifest(&path);
    assert!(matches!(result, Err(MenuError::Parse(_))));
  }

  #[test]
  fn test_load_manifest_non_array_is_parse_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("list.json");
    fs::write(&path, r#"{"file": "html/a.html"}"#)
      .expect("Failed to write manifest");

    let result = load_manifest(&path);
    assert!(matches!(result, Err(MenuError::Parse(_))));
  }

  #[test]
  fn test_split_segments_nested_path() {
    let (segments, leaf) =
      split_segments("html/unidad5/guia1.html", "html/", ".html")
        .expect("path should split");
    assert_eq!(segments, vec!["unidad5"]);
    assert_eq!(leaf, "guia1");
  }

  #[test]
  fn test_split_segments_root_level_path() {
    let (segments, leaf) = split_segments("html/jaimito.html", "html/", ".html")
      .expect("path should split");
    assert!(segments.is_empty());
    assert_eq!(leaf, "jaimito");
  }

  #[test]
  fn test_split_segments_rejects_missing_prefix() {
    let result = split_segments("docs/guia1.html", "html/", ".html");
    assert!(matches!(result, Err(MenuError::MalformedRecord { .. })));
  }

  #[test]
  fn test_split_segments_rejects_missing_suffix() {
    let result = split_segments("html/guia1.pdf", "html/", ".html");
    assert!(matches!(result, Err(MenuError::MalformedRecord { .. })));
  }

  #[test]
  fn test_split_segments_rejects_empty_leaf() {
    let result = split_segments("html/unidad5/.html", "html/", ".html");
    assert!(matches!(result, Err(MenuError::MalformedRecord { .. })));
  }

  #[test]
  fn test_natural_cmp_orders_digit_runs_numerically() {
    assert_eq!(
      natural_cmp("html/unidad2/a.html", "html/unidad10/a.html"),
      Ordering::Less
    );
    assert_eq!(natural_cmp("html/guia9.html", "html/guia10.html"), Ordering::Less);
  }

  #[test]
  fn test_natural_cmp_folders_before_root_files() {
    assert_eq!(
      natural_cmp("html/unidad5/guia1.html", "html/jaimito.html"),
      Ordering::Less
    );
    assert_eq!(
      natural_cmp("html/unidad5/guia1.html", "html/unidad5.html"),
      Ordering::Less
    );
  }

  #[test]
  fn test_natural_cmp_is_case_insensitive_on_names() {
    assert_eq!(natural_cmp("html/Alfa.html", "html/beta.html"), Ordering::Less);
  }

  #[test]
  fn test_sort_records_groups_folders_first() {
    let mut records = vec![
      PathRecord {
        file:   "html/unidad10/guia1.html".to_string(),
        pretty: None,
      },
      PathRecord {
        file:   "html/jaimito.html".to_string(),
        pretty: None,
      },
      PathRecord {
        file:   "html/unidad2/guia1.html".to_string(),
        pretty: None,
      },
    ];

    sort_records(&mut records);

    let files: Vec<&str> =
      records.iter().map(|r| r.file.as_str()).collect();
    assert_eq!(
      files,
      vec![
        "html/unidad2/guia1.html",
        "html/unidad10/guia1.html",
        "html/jaimito.html",
      ]
    );
  }

  #[test]
  fn test_derive_prefix_keeps_only_the_final_component() {
    assert_eq!(derive_prefix(Path::new("html")), "html/");
    assert_eq!(derive_prefix(Path::new("html/")), "html/");
    assert_eq!(derive_prefix(Path::new("./docs/html")), "html/");
    assert_eq!(derive_prefix(Path::new("/srv/site/html")), "html/");
  }

  #[test]
  fn test_scan_directory_collects_and_sorts_documents() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let root = dir.path().join("html");
    fs::create_dir_all(root.join("unidad10")).expect("Failed to create dir");
    fs::create_dir_all(root.join("unidad2")).expect("Failed to create dir");
    fs::write(root.join("unidad10").join("guia1.html"), "")
      .expect("Failed to write file");
    fs::write(root.join("unidad2").join("guia1.html"), "")
      .expect("Failed to write file");
    fs::write(root.join("jaimito.html"), "").expect("Failed to write file");
    fs::write(root.join("notas.txt"), "").expect("Failed to write file");

    let records = scan_directory(&root, "html/", ".html")
      .expect("scan should succeed");

    let files: Vec<&str> =
      records.iter().map(|r| r.file.as_str()).collect();
    assert_eq!(
      files,
      vec![
        "html/unidad2/guia1.html",
        "html/unidad10/guia1.html",
        "html/jaimito.html",
      ]
    );
  }

  #[test]
  fn test_scan_directory_missing_root_is_fetch_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result =
      scan_directory(&dir.path().join("nonexistent"), "html/", ".html");
    assert!(matches!(result, Err(MenuError::Fetch(_))));
  }
}
