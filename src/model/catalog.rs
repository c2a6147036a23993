// src/model/catalog.rs

use super::elements::{Category, Element};
use crate::error::{Lookup, PtableError, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Embedded element dataset (H..Og).
const ELEMENTS_JSON: &str = include_str!("../../data/elements.json");

// Global catalog (initialized once, on first use)
static CATALOG: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct Dataset {
  #[serde(default)]
  version: String,
  elements: Vec<Element>,
}

/// Read-only element table, ordered by atomic number.
#[derive(Debug, Clone)]
pub struct Catalog {
  version: String,
  elements: Vec<Element>,
  by_symbol: HashMap<String, usize>,
}

/// Process-wide catalog built from the embedded dataset.
pub fn catalog() -> Result<&'static Catalog> {
  if let Some(cat) = CATALOG.get() {
    return Ok(cat);
  }
  let loaded = Catalog::load()?;
  Ok(CATALOG.get_or_init(|| loaded))
}

impl Catalog {
  /// Parses and validates the embedded dataset.
  pub fn load() -> Result<Self> {
    Self::from_json(ELEMENTS_JSON)
  }

  pub fn from_json(json: &str) -> Result<Self> {
    let dataset: Dataset = serde_json::from_str(json)?;
    let mut catalog = Self::from_elements(dataset.elements)?;
    catalog.version = dataset.version;
    log::info!(
      "Loaded {} elements (dataset {})",
      catalog.len(),
      if catalog.version.is_empty() { "unversioned" } else { &catalog.version }
    );
    Ok(catalog)
  }

  /// Builds a catalog, rejecting data that breaks the table invariants.
  pub fn from_elements(elements: Vec<Element>) -> Result<Self> {
    let mut by_symbol = HashMap::with_capacity(elements.len());
    let mut previous: Option<u32> = None;

    for (idx, el) in elements.iter().enumerate() {
      if el.atomic_number == 0 {
        return Err(PtableError::InvalidCatalog(format!(
          "{} has atomic number 0",
          el.symbol
        )));
      }
      if let Some(prev) = previous {
        if el.atomic_number <= prev {
          return Err(PtableError::InvalidCatalog(format!(
            "atomic numbers must increase strictly ({} follows {})",
            el.atomic_number, prev
          )));
        }
      }
      previous = Some(el.atomic_number);

      let len = el.symbol.chars().count();
      if !(1..=2).contains(&len) || !el.symbol.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(PtableError::InvalidCatalog(format!(
          "malformed symbol '{}' for Z={}",
          el.symbol, el.atomic_number
        )));
      }
      if !(1..=7).contains(&el.period) {
        return Err(PtableError::InvalidCatalog(format!(
          "{} has period {} (expected 1-7)",
          el.symbol, el.period
        )));
      }
      if !(el.atomic_mass.is_finite() && el.atomic_mass > 0.0) {
        return Err(PtableError::InvalidCatalog(format!(
          "{} has non-positive atomic mass",
          el.symbol
        )));
      }
      if by_symbol.insert(el.symbol.to_ascii_lowercase(), idx).is_some() {
        return Err(PtableError::InvalidCatalog(format!(
          "duplicate symbol '{}'",
          el.symbol
        )));
      }
    }

    Ok(Self {
      version: String::new(),
      elements,
      by_symbol,
    })
  }

  pub fn version(&self) -> &str {
    &self.version
  }

  /// All elements in atomic-number order.
  pub fn get_all(&self) -> &[Element] {
    &self.elements
  }

  pub fn iter(&self) -> impl Iterator<Item = &Element> {
    self.elements.iter()
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// Symbol lookup, ignoring ASCII case ("na" finds sodium).
  pub fn get_by_symbol(&self, symbol: &str) -> Result<&Element> {
    let key = symbol.trim().to_ascii_lowercase();
    match self.by_symbol.get(&key) {
      Some(&idx) => Ok(&self.elements[idx]),
      None => {
        log::warn!("Unknown element symbol '{}'", symbol);
        Err(PtableError::NotFound(Lookup::Symbol(symbol.to_string())))
      }
    }
  }

  pub fn get_by_atomic_number(&self, number: u32) -> Result<&Element> {
    match self
      .elements
      .binary_search_by_key(&number, |el| el.atomic_number)
    {
      Ok(idx) => Ok(&self.elements[idx]),
      Err(_) => {
        log::warn!("Unknown atomic number {}", number);
        Err(PtableError::NotFound(Lookup::AtomicNumber(number)))
      }
    }
  }

  /// Members of one category, in catalog order.
  pub fn by_category(&self, category: Category) -> Vec<&Element> {
    self
      .elements
      .iter()
      .filter(|el| el.category == category)
      .collect()
  }

  /// (category, count) pairs for the legend. Empty categories are left out.
  pub fn legend(&self) -> Vec<(Category, usize)> {
    let present: HashSet<Category> = self.elements.iter().map(|el| el.category).collect();
    Category::ALL
      .iter()
      .filter(|c| present.contains(c))
      .map(|&c| (c, self.elements.iter().filter(|el| el.category == c).count()))
      .collect()
  }
}
