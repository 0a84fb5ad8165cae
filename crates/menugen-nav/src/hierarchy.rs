//! Grouping path records into a sequence of render instructions.
//!
//! [`build_menu`] is pure: it consumes an ordered record list and returns
//! the headings and links the renderer should emit, in document order.
//! All display side effects (HTML, DOM, whatever the consumer does) live
//! outside this crate, which is what keeps the grouping testable.

use log::warn;

use crate::{
  label::format_label,
  manifest::{self, PathRecord},
};

/// One renderer-agnostic piece of menu output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderInstruction {
  /// A section heading at the given level (2 for top-level folders, 3 for
  /// anything deeper).
  Heading { level: u8, text: String },

  /// A document link. `href` is the record's original `file` value.
  Link { href: String, text: String },
}

/// Options controlling how records are grouped into a menu.
#[derive(Debug, Clone)]
pub struct MenuOptions {
  /// Fixed root prefix every record path must carry, e.g. `html/`.
  pub root_prefix: String,

  /// Fixed suffix every record path must carry, e.g. `.html`.
  pub suffix: String,

  /// Whether to natural-sort records before grouping. When off, the
  /// manifest order is used as-is; grouping only requires that records
  /// sharing a folder prefix are adjacent.
  pub sort: bool,
}

impl Default for MenuOptions {
  fn default() -> Self {
    Self {
      root_prefix: "html/".to_string(),
      suffix:      ".html".to_string(),
      sort:        true,
    }
  }
}

/// Group records into headings and links.
///
/// Single pass over the (optionally sorted) records. A heading is emitted
/// whenever a folder segment differs from the one last seen at that
/// depth; the state for deeper levels is invalidated at the same time, so
/// a changed parent folder forces re-emission of all descendant headings
/// even when a deeper segment name repeats.
///
/// Root-level records have no ancestor heading to sit under, so each one
/// gets its own level-2 heading directly above its link.
///
/// Malformed records are skipped with a warning; one bad entry must not
/// blank the whole menu.
#[must_use]
pub fn build_menu(
  records: &[PathRecord],
  options: &MenuOptions,
) -> Vec<RenderInstruction> {
  let mut records = records.to_vec();
  if options.sort {
    manifest::sort_records(&mut records);
  }

  let mut instructions = Vec::new();

  // Folder-segment values last emitted at each depth. Owned by this call
  // only; discarded when the pass ends.
  let mut current_levels: Vec<String> = Vec::new();

  for record in &records {
    let (segments, leaf) = match manifest::split_segments(
      &record.file,
      &options.root_prefix,
      &options.suffix,
    ) {
      Ok(parts) => parts,
      Err(e) => {
        warn!("skipping manifest record: {e}");
        continue;
      },
    };

    if segments.is_empty() {
      instructions.push(RenderInstruction::Heading {
        level: 2,
        text:  format!("{}:", format_label(leaf)),
      });
    } else {
      for (idx, segment) in segments.iter().enumerate() {
        if current_levels.get(idx).map(String::as_str) != Some(*segment) {
          let level = if idx == 0 { 2 } else { 3 };
          instructions.push(RenderInstruction::Heading {
            level,
            text: format!("{}:", format_label(segment)),
          });

          // Record the new value and invalidate everything deeper.
          current_levels.truncate(idx);
          current_levels.push((*segment).to_string());
        }
      }
    }

    let text = record
      .pretty
      .clone()
      .unwrap_or_else(|| format_label(leaf));
    instructions.push(RenderInstruction::Link {
      href: record.file.clone(),
      text,
    });
  }

  instructions
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(file: &str) -> PathRecord {
    PathRecord {
      file:   file.to_string(),
      pretty: None,
    }
  }

  fn links(instructions: &[RenderInstruction]) -> Vec<&str> {
    instructions
      .iter()
      .filter_map(|i| {
        match i {
          RenderInstruction::Link { href, .. } => Some(href.as_str()),
          RenderInstruction::Heading { .. } => None,
        }
      })
      .collect()
  }

  #[test]
  fn test_end_to_end_example() {
    let records = vec![
      record("html/unidad5/guia1.html"),
      record("html/unidad5/guia2.html"),
      record("html/jaimito.html"),
    ];

    let instructions = build_menu(&records, &MenuOptions::default());

    assert_eq!(
      instructions,
      vec![
        RenderInstruction::Heading {
          level: 2,
          text:  "Unidad 5:".to_string(),
        },
        RenderInstruction::Link {
          href: "html/unidad5/guia1.html".to_string(),
          text: "Guía 1".to_string(),
        },
        RenderInstruction::Link {
          href: "html/unidad5/guia2.html".to_string(),
          text: "Guía 2".to_string(),
        },
        RenderInstruction::Heading {
          level: 2,
          text:  "Jaimito:".to_string(),
        },
        RenderInstruction::Link {
          href: "html/jaimito.html".to_string(),
          text: "Jaimito".to_string(),
        },
      ]
    );
  }

  #[test]
  fn test_one_link_per_well_formed_record_in_order() {
    let records = vec![
      record("html/unidad1/guia1.html"),
      record("docs/oops.pdf"),
      record("html/unidad1/guia2.html"),
      record("html/unidad2/guia1.html"),
    ];

    let options = MenuOptions {
      sort: false,
      ..MenuOptions::default()
    };
    let instructions = build_menu(&records, &options);

    assert_eq!(
      links(&instructions),
      vec![
        "html/unidad1/guia1.html",
        "html/unidad1/guia2.html",
        "html/unidad2/guia1.html",
      ]
    );
  }

  #[test]
  fn test_shared_top_level_folder_emits_one_heading() {
    let records = vec![
      record("html/unidad5/guia1.html"),
      record("html/unidad5/guia2.html"),
    ];

    let instructions = build_menu(&records, &MenuOptions::default());

    let headings: Vec<&RenderInstruction> = instructions
      .iter()
      .filter(|i| matches!(i, RenderInstruction::Heading { .. }))
      .collect();
    assert_eq!(headings.len(), 1);
    assert_eq!(
      headings[0],
      &RenderInstruction::Heading {
        level: 2,
        text:  "Unidad 5:".to_string(),
      }
    );
  }

  #[test]
  fn test_nested_folders_use_level_three_headings() {
    let records = vec![record("html/unidad5/practica/guia1.html")];

    let instructions = build_menu(&records, &MenuOptions::default());

    assert_eq!(
      instructions,
      vec![
        RenderInstruction::Heading {
          level: 2,
          text:  "Unidad 5:".to_string(),
        },
        RenderInstruction::Heading {
          level: 3,
          text:  "Practica:".to_string(),
        },
        RenderInstruction::Link {
          href: "html/unidad5/practica/guia1.html".to_string(),
          text: "Guía 1".to_string(),
        },
      ]
    );
  }

  #[test]
  fn test_changed_parent_reemits_repeated_child_heading() {
    // Both units have a "practica" subfolder. When the unit changes, the
    // subfolder heading must be emitted again even though its name
    // repeats at the same depth.
    let records = vec![
      record("html/unidad1/practica/guia1.html"),
      record("html/unidad2/practica/guia1.html"),
    ];

    let instructions = build_menu(&records, &MenuOptions::default());

    let practica_headings = instructions
      .iter()
      .filter(|i| {
        matches!(
          i,
          RenderInstruction::Heading { level: 3, text } if text == "Practica:"
        )
      })
      .count();
    assert_eq!(practica_headings, 2);
  }

  #[test]
  fn test_every_root_item_gets_its_own_heading() {
    let records = vec![
      record("html/jaimito.html"),
      record("html/pepito.html"),
    ];

    let options = MenuOptions {
      sort: false,
      ..MenuOptions::default()
    };
    let instructions = build_menu(&records, &options);

    assert_eq!(
      instructions,
      vec![
        RenderInstruction::Heading {
          level: 2,
          text:  "Jaimito:".to_string(),
        },
        RenderInstruction::Link {
          href: "html/jaimito.html".to_string(),
          text: "Jaimito".to_string(),
        },
        RenderInstruction::Heading {
          level: 2,
          text:  "Pepito:".to_string(),
        },
        RenderInstruction::Link {
          href: "html/pepito.html".to_string(),
          text: "Pepito".to_string(),
        },
      ]
    );
  }

  #[test]
  fn test_pretty_overrides_link_text() {
    let records = vec![PathRecord {
      file:   "html/jaimito.html".to_string(),
      pretty: Some("El mejor capítulo".to_string()),
    }];

    let instructions = build_menu(&records, &MenuOptions::default());

    assert!(instructions.contains(&RenderInstruction::Link {
      href: "html/jaimito.html".to_string(),
      text: "El mejor capítulo".to_string(),
    }));
  }

  #[test]
  fn test_empty_input_produces_no_instructions() {
    let instructions = build_menu(&[], &MenuOptions::default());
    assert!(instructions.is_empty());
  }
}
