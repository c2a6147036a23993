// src/utils/report.rs

use crate::model::Element;
use crate::physics::configure_element;

/// Detail block for the console when an element is selected
pub fn element_summary(element: &Element) -> String {
  let shells = configure_element(element);
  let group = element
    .group
    .map(|g| g.to_string())
    .unwrap_or_else(|| "-".to_string());

  let mut out = String::new();
  out.push_str(&format!("{} ({})\n", element.name, element.symbol));
  out.push_str("--------------------------------------------------\n");
  out.push_str(&format!("{:<16} {}\n", "Atomic number:", element.atomic_number));
  out.push_str(&format!("{:<16} {}\n", "Category:", element.category.label()));
  out.push_str(&format!("{:<16} {} / {}\n", "Period/Group:", element.period, group));
  out.push_str(&format!("{:<16} {:.3} u\n", "Atomic mass:", element.atomic_mass));
  out.push_str(&format!(
    "{:<16} {} p, {} n, {} e\n",
    "Particles:",
    element.protons(),
    element.neutrons(),
    element.electrons()
  ));
  out.push_str(&format!("{:<16} {}", "Shells:", shells.notation()));
  out
}

/// Text rendering of the list view
pub fn visible_table(visible: &[&Element]) -> String {
  const MAX_ROWS: usize = 40;

  if visible.is_empty() {
    return "No elements match the current filter.".to_string();
  }

  let mut out = String::new();
  out.push_str(&format!(
    "{:<5} {:<8} {:<16} {:<24} {:<10}\n",
    "Z", "Symbol", "Name", "Category", "Mass"
  ));
  out.push_str("------------------------------------------------------------------\n");

  for el in visible.iter().take(MAX_ROWS) {
    out.push_str(&format!(
      "{:<5} {:<8} {:<16} {:<24} {:<10.3}\n",
      el.atomic_number,
      el.symbol,
      el.name,
      el.category.label(),
      el.atomic_mass
    ));
  }

  if visible.len() > MAX_ROWS {
    out.push_str(&format!("... and {} more elements.\n", visible.len() - MAX_ROWS));
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::catalog;

  #[test]
  fn test_summary_sodium() {
    let na = catalog().unwrap().get_by_symbol("Na").unwrap();
    let text = element_summary(na);
    assert!(text.starts_with("Sodium (Na)\n"));
    assert!(text.contains("Alkali Metal"));
    assert!(text.contains("11 p, 12 n, 11 e"));
    assert!(text.ends_with("2, 8, 1"));
  }

  #[test]
  fn test_summary_series_has_no_group() {
    let u = catalog().unwrap().get_by_symbol("U").unwrap();
    assert!(element_summary(u).contains("7 / -"));
  }

  #[test]
  fn test_table_truncates() {
    let all: Vec<&Element> = catalog().unwrap().iter().collect();
    let text = visible_table(&all);
    assert!(text.contains("... and 78 more elements."));
    // header + rule + 40 rows + tail
    assert_eq!(text.lines().count(), 43);
  }

  #[test]
  fn test_table_empty() {
    assert_eq!(visible_table(&[]), "No elements match the current filter.");
  }
}
