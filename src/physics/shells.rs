// src/physics/shells.rs

use crate::error::{PtableError, Result};
use crate::model::Element;
use std::fmt;

/// Simplified Bohr capacities, innermost shell first.
pub const SHELL_CAPACITIES: [u32; 5] = [2, 8, 18, 32, 50];

/// Capacity of shell `index` (0-based), or `None` past the fixed table.
pub fn capacity(index: usize) -> Option<u32> {
  SHELL_CAPACITIES.get(index).copied()
}

/// Electron occupancy per shell, innermost first. Never contains a zero entry.
///
/// Counts are `u64` so any non-negative `i64` fits, overflow shell included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellConfiguration {
  shells: Vec<u64>,
}

impl ShellConfiguration {
  pub fn shells(&self) -> &[u64] {
    &self.shells
  }

  pub fn shell_count(&self) -> usize {
    self.shells.len()
  }

  pub fn total(&self) -> u64 {
    self.shells.iter().sum()
  }

  /// Outermost shell occupancy (0 for no electrons).
  pub fn valence(&self) -> u64 {
    self.shells.last().copied().unwrap_or(0)
  }

  /// "2, 8, 1"
  pub fn notation(&self) -> String {
    self
      .shells
      .iter()
      .map(|n| n.to_string())
      .collect::<Vec<_>>()
      .join(", ")
  }
}

impl fmt::Display for ShellConfiguration {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.notation())
  }
}

fn fill_shells(mut remaining: u64) -> Vec<u64> {
  let mut shells = Vec::new();
  for cap in SHELL_CAPACITIES {
    if remaining == 0 {
      break;
    }
    let fill = remaining.min(u64::from(cap));
    shells.push(fill);
    remaining -= fill;
  }
  // Overflow shell
  if remaining > 0 {
    shells.push(remaining);
  }
  shells
}

/// Greedy shell filling over [`SHELL_CAPACITIES`].
///
/// Electrons left once the table is exhausted all go into one extra shell.
/// This is not how real atoms fill (Og comes out as 2, 8, 18, 32, 50, 8), but
/// the atom view's ring count depends on it.
pub fn configure(electron_count: i64) -> Result<ShellConfiguration> {
  let count = u64::try_from(electron_count).map_err(|_| {
    PtableError::InvalidInput(format!(
      "electron count must be non-negative, got {}",
      electron_count
    ))
  })?;
  Ok(ShellConfiguration {
    shells: fill_shells(count),
  })
}

/// Shells of the neutral atom.
pub fn configure_element(element: &Element) -> ShellConfiguration {
  ShellConfiguration {
    shells: fill_shells(u64::from(element.electrons())),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::catalog;

  #[test]
  fn test_reference_configurations() {
    assert_eq!(configure(0).unwrap().shells(), &[] as &[u64]);
    assert_eq!(configure(2).unwrap().shells(), &[2]);
    assert_eq!(configure(11).unwrap().shells(), &[2, 8, 1]);
    assert_eq!(configure(26).unwrap().shells(), &[2, 8, 16]);
  }

  #[test]
  fn test_overflow_shell_kept() {
    let og = configure(118).unwrap();
    assert_eq!(og.shells(), &[2, 8, 18, 32, 50, 8]);
    assert_eq!(og.total(), 118);

    let big = configure(200).unwrap();
    assert_eq!(big.shells(), &[2, 8, 18, 32, 50, 90]);
  }

  #[test]
  fn test_counts_past_u32_range() {
    let n = u32::MAX as i64 + 1;
    let cfg = configure(n).unwrap();
    assert_eq!(cfg.shells(), &[2, 8, 18, 32, 50, n as u64 - 110]);
    assert_eq!(cfg.total(), n as u64);

    let cfg = configure(10_000_000_000).unwrap();
    assert_eq!(cfg.shell_count(), 6);
    assert_eq!(cfg.valence(), 10_000_000_000 - 110);
    assert_eq!(cfg.total(), 10_000_000_000);

    let cfg = configure(i64::MAX).unwrap();
    assert_eq!(cfg.total(), i64::MAX as u64);
  }

  #[test]
  fn test_negative_is_invalid() {
    assert!(matches!(configure(-1), Err(PtableError::InvalidInput(_))));
  }

  #[test]
  fn test_notation_and_valence() {
    let na = configure(11).unwrap();
    assert_eq!(na.notation(), "2, 8, 1");
    assert_eq!(na.to_string(), "2, 8, 1");
    assert_eq!(na.valence(), 1);
    assert_eq!(configure(0).unwrap().valence(), 0);
  }

  #[test]
  fn test_element_matches_count() {
    let cat = catalog().unwrap();
    for el in cat.iter() {
      let by_count = configure(el.electrons() as i64).unwrap();
      assert_eq!(configure_element(el), by_count, "{}", el.symbol);
    }
  }

  #[test]
  fn test_capacity_table() {
    assert_eq!(capacity(0), Some(2));
    assert_eq!(capacity(4), Some(50));
    assert_eq!(capacity(5), None);
  }
}
