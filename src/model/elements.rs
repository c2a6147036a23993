// src/model/elements.rs

use serde::{Deserialize, Serialize};

/// Linear RGB triple in [0, 1], the form cairo takes.
pub type Rgb = (f64, f64, f64);

/// Periodic-table classification. Drives grouping, grid placement and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
  AlkaliMetal,
  AlkalineEarthMetal,
  TransitionMetal,
  PostTransitionMetal,
  Metalloid,
  Nonmetal,
  Halogen,
  NobleGas,
  Lanthanide,
  Actinide,
  Unknown,
}

impl Category {
  /// Legend order.
  pub const ALL: [Category; 11] = [
    Category::AlkaliMetal,
    Category::AlkalineEarthMetal,
    Category::TransitionMetal,
    Category::PostTransitionMetal,
    Category::Metalloid,
    Category::Nonmetal,
    Category::Halogen,
    Category::NobleGas,
    Category::Lanthanide,
    Category::Actinide,
    Category::Unknown,
  ];

  pub fn label(self) -> &'static str {
    match self {
      Category::AlkaliMetal => "Alkali Metal",
      Category::AlkalineEarthMetal => "Alkaline Earth Metal",
      Category::TransitionMetal => "Transition Metal",
      Category::PostTransitionMetal => "Post-Transition Metal",
      Category::Metalloid => "Metalloid",
      Category::Nonmetal => "Nonmetal",
      Category::Halogen => "Halogen",
      Category::NobleGas => "Noble Gas",
      Category::Lanthanide => "Lanthanide",
      Category::Actinide => "Actinide",
      Category::Unknown => "Unknown",
    }
  }

  /// Kebab-case tag, as used in the dataset.
  pub fn slug(self) -> &'static str {
    match self {
      Category::AlkaliMetal => "alkali-metal",
      Category::AlkalineEarthMetal => "alkaline-earth-metal",
      Category::TransitionMetal => "transition-metal",
      Category::PostTransitionMetal => "post-transition-metal",
      Category::Metalloid => "metalloid",
      Category::Nonmetal => "nonmetal",
      Category::Halogen => "halogen",
      Category::NobleGas => "noble-gas",
      Category::Lanthanide => "lanthanide",
      Category::Actinide => "actinide",
      Category::Unknown => "unknown",
    }
  }

  /// Lanthanides and actinides sit in the detached rows below the main table.
  pub fn is_series(self) -> bool {
    matches!(self, Category::Lanthanide | Category::Actinide)
  }

  pub fn color(self) -> Rgb {
    color_of(self)
  }
}

/// Display color for a category.
pub fn color_of(category: Category) -> Rgb {
  match category {
    Category::AlkaliMetal => (1.00, 0.42, 0.42),         // Coral
    Category::AlkalineEarthMetal => (1.00, 0.79, 0.34),  // Amber
    Category::TransitionMetal => (0.28, 0.86, 0.98),     // Sky
    Category::PostTransitionMetal => (0.11, 0.82, 0.63), // Teal-Green
    Category::Metalloid => (0.64, 0.55, 0.98),           // Lavender
    Category::Nonmetal => (0.00, 0.82, 0.83),            // Cyan
    Category::Halogen => (1.00, 0.62, 0.26),             // Orange
    Category::NobleGas => (1.00, 0.62, 0.95),            // Pink
    Category::Lanthanide => (0.33, 0.63, 1.00),          // Blue
    Category::Actinide => (0.78, 0.84, 0.90),            // Steel
    Category::Unknown => (0.50, 0.53, 0.56),             // Grey
  }
}

/// `#rrggbb` form of [`color_of`].
pub fn color_hex(category: Category) -> String {
  let (r, g, b) = color_of(category);
  let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
  format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
}

/// One chemical element. Immutable once loaded into a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
  #[serde(rename = "number")]
  pub atomic_number: u32,
  pub symbol: String,
  pub name: String,
  pub category: Category,
  pub period: u8,
  /// `None` for lanthanides and actinides.
  #[serde(default)]
  pub group: Option<u8>,
  pub atomic_mass: f64,
}

impl Element {
  pub fn protons(&self) -> u32 {
    self.atomic_number
  }

  /// Neutrons of the reference isotope nearest the standard atomic mass.
  pub fn neutrons(&self) -> u32 {
    let mass_number = self.atomic_mass.round().max(0.0) as u32;
    mass_number.saturating_sub(self.atomic_number)
  }

  /// Neutral atom only.
  pub fn electrons(&self) -> u32 {
    self.protons()
  }

  pub fn color(&self) -> Rgb {
    color_of(self.category)
  }

  /// Case-insensitive match of an already lowercased needle against name or symbol.
  pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
    self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sodium() -> Element {
    Element {
      atomic_number: 11,
      symbol: "Na".into(),
      name: "Sodium".into(),
      category: Category::AlkaliMetal,
      period: 3,
      group: Some(1),
      atomic_mass: 22.99,
    }
  }

  #[test]
  fn test_particle_counts() {
    let na = sodium();
    assert_eq!(na.protons(), 11);
    assert_eq!(na.neutrons(), 12);
    assert_eq!(na.electrons(), na.protons());
  }

  #[test]
  fn test_color_is_category_color() {
    let na = sodium();
    assert_eq!(na.color(), color_of(Category::AlkaliMetal));
    assert_eq!(color_hex(Category::Nonmetal), "#00d1d4");
  }

  #[test]
  fn test_category_serde_tags() {
    let c: Category = serde_json::from_str("\"post-transition-metal\"").unwrap();
    assert_eq!(c, Category::PostTransitionMetal);
    assert_eq!(serde_json::to_string(&Category::NobleGas).unwrap(), "\"noble-gas\"");
    for cat in Category::ALL {
      let tag = serde_json::to_string(&cat).unwrap();
      assert_eq!(tag.trim_matches('"'), cat.slug());
    }
  }

  #[test]
  fn test_series_flag() {
    let series: Vec<_> = Category::ALL.iter().filter(|c| c.is_series()).collect();
    assert_eq!(series, vec![&Category::Lanthanide, &Category::Actinide]);
  }

  #[test]
  fn test_matches_name_or_symbol() {
    let na = sodium();
    assert!(na.matches_lowercase("na"));
    assert!(na.matches_lowercase("odi"));
    assert!(!na.matches_lowercase("mna"));
  }
}
