// src/table/filter.rs

use super::layout::{CellContent, GridCell, TableLayout};
use crate::model::{Category, Element};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
  #[default]
  Grid,
  List,
}

impl ViewMode {
  pub fn toggled(self) -> Self {
    match self {
      ViewMode::Grid => ViewMode::List,
      ViewMode::List => ViewMode::Grid,
    }
  }
}

/// User interactions that change the filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
  /// `None` shows every category.
  SelectGroup(Option<Category>),
  SetSearch(String),
  ToggleViewMode,
  ToggleNames,
  Reset,
}

/// Session-local filter. Never persisted; a new session starts from `Default`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
  selected_group: Option<Category>,
  search_query: String,
  view_mode: ViewMode,
  show_names: bool,
}

impl FilterState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn selected_group(&self) -> Option<Category> {
    self.selected_group
  }

  pub fn search_query(&self) -> &str {
    &self.search_query
  }

  pub fn view_mode(&self) -> ViewMode {
    self.view_mode
  }

  pub fn show_names(&self) -> bool {
    self.show_names
  }

  /// No category and no search text.
  pub fn is_default(&self) -> bool {
    self.selected_group.is_none() && self.search_query.trim().is_empty()
  }

  /// Next state for `action`. `self` is left untouched.
  pub fn apply(&self, action: FilterAction) -> FilterState {
    let mut next = self.clone();
    match action {
      FilterAction::SelectGroup(group) => next.selected_group = group,
      FilterAction::SetSearch(text) => next.search_query = text,
      FilterAction::ToggleViewMode => next.view_mode = next.view_mode.toggled(),
      FilterAction::ToggleNames => next.show_names = !next.show_names,
      FilterAction::Reset => next = FilterState::default(),
    }
    next
  }

  pub fn select_group(&self, group: Option<Category>) -> FilterState {
    self.apply(FilterAction::SelectGroup(group))
  }

  pub fn set_search(&self, text: impl Into<String>) -> FilterState {
    self.apply(FilterAction::SetSearch(text.into()))
  }

  pub fn toggle_view_mode(&self) -> FilterState {
    self.apply(FilterAction::ToggleViewMode)
  }

  pub fn toggle_names(&self) -> FilterState {
    self.apply(FilterAction::ToggleNames)
  }

  /// Category and search predicates combined.
  pub fn matches(&self, element: &Element) -> bool {
    let group_ok = self
      .selected_group
      .map_or(true, |group| group == element.category);
    if !group_ok {
      return false;
    }

    let needle = self.search_query.trim();
    needle.is_empty() || element.matches_lowercase(&needle.to_lowercase())
  }
}

/// Visible subset of `elements`, in catalog order.
pub fn derive_visible<'a>(elements: &'a [Element], state: &FilterState) -> Vec<&'a Element> {
  elements.iter().filter(|el| state.matches(el)).collect()
}

/// A grid cell and whether the current filter highlights it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightedCell<'a> {
  pub cell: GridCell<'a>,
  pub highlighted: bool,
}

/// Grid-view rendering: every cell keeps its place, non-matching ones are dimmed.
pub fn derive_highlighted<'a>(
  layout: &TableLayout<'a>,
  state: &FilterState,
) -> Vec<HighlightedCell<'a>> {
  layout
    .cells()
    .iter()
    .map(|cell| {
      let highlighted = match cell.content {
        CellContent::Element(el) => state.matches(el),
        CellContent::Placeholder(series) => state
          .selected_group
          .map_or(true, |group| group == series),
      };
      HighlightedCell {
        cell: *cell,
        highlighted,
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::catalog;

  #[test]
  fn test_default_shows_everything() {
    let cat = catalog().unwrap();
    let state = FilterState::new();
    let visible = derive_visible(cat.get_all(), &state);
    assert_eq!(visible.len(), cat.len());
    assert!(visible.iter().zip(cat.iter()).all(|(a, b)| *a == b));
    assert!(state.is_default());
  }

  #[test]
  fn test_search_na() {
    let cat = catalog().unwrap();
    let state = FilterState::new().set_search("Na");
    let symbols: Vec<_> = derive_visible(cat.get_all(), &state)
      .into_iter()
      .map(|el| el.symbol.as_str())
      .collect();
    // Sodium by symbol, Vanadium by name. Argon must not match across "Argon"+"Ar".
    assert_eq!(symbols, vec!["Na", "V"]);
  }

  #[test]
  fn test_search_is_case_insensitive_and_trimmed() {
    let cat = catalog().unwrap();
    let a = derive_visible(cat.get_all(), &FilterState::new().set_search("  GOLD "));
    assert_eq!(a.len(), 1);
    assert_eq!(a[0].symbol, "Au");
  }

  #[test]
  fn test_group_filter() {
    let cat = catalog().unwrap();
    let state = FilterState::new().select_group(Some(Category::NobleGas));
    let symbols: Vec<_> = derive_visible(cat.get_all(), &state)
      .iter()
      .map(|el| el.symbol.clone())
      .collect();
    assert_eq!(symbols, vec!["He", "Ne", "Ar", "Kr", "Xe", "Rn"]);
  }

  #[test]
  fn test_group_and_search_combine() {
    let cat = catalog().unwrap();
    let state = FilterState::new()
      .select_group(Some(Category::Halogen))
      .set_search("ine");
    let visible = derive_visible(cat.get_all(), &state);
    // F, Cl, Br, I, At
    assert_eq!(visible.len(), 5);
    assert!(visible.iter().all(|el| el.category == Category::Halogen));
  }

  #[test]
  fn test_select_group_idempotent() {
    let cat = catalog().unwrap();
    let once = FilterState::new().select_group(Some(Category::Actinide));
    let twice = once.select_group(Some(Category::Actinide));
    assert_eq!(once, twice);
    assert_eq!(
      derive_visible(cat.get_all(), &once),
      derive_visible(cat.get_all(), &twice)
    );
  }

  #[test]
  fn test_view_mode_does_not_change_visible_set() {
    let cat = catalog().unwrap();
    let grid = FilterState::new().set_search("um");
    let list = grid.toggle_view_mode();
    assert_eq!(list.view_mode(), ViewMode::List);
    assert_eq!(list.toggle_view_mode().view_mode(), ViewMode::Grid);
    assert_eq!(
      derive_visible(cat.get_all(), &grid),
      derive_visible(cat.get_all(), &list)
    );
  }

  #[test]
  fn test_names_toggle_and_reset() {
    let s = FilterState::new()
      .toggle_names()
      .set_search("x")
      .select_group(Some(Category::Metalloid));
    assert!(s.show_names());
    assert!(!s.is_default());
    assert_eq!(s.apply(FilterAction::Reset), FilterState::default());
  }

  #[test]
  fn test_apply_leaves_original() {
    let s = FilterState::new();
    let _ = s.set_search("iron");
    assert_eq!(s.search_query(), "");
  }

  #[test]
  fn test_highlighted_cells() {
    let cat = catalog().unwrap();
    let layout = TableLayout::resolve(cat.get_all()).unwrap();
    let state = FilterState::new().select_group(Some(Category::Lanthanide));
    let cells = derive_highlighted(&layout, &state);

    assert_eq!(cells.len(), layout.cells().len());
    let lit: Vec<_> = cells.iter().filter(|c| c.highlighted).collect();
    // 15 lanthanides + their placeholder
    assert_eq!(lit.len(), 16);
    assert!(lit
      .iter()
      .any(|c| c.cell.content == CellContent::Placeholder(Category::Lanthanide)));
  }

  #[test]
  fn test_highlighted_everything_by_default() {
    let cat = catalog().unwrap();
    let layout = TableLayout::resolve(cat.get_all()).unwrap();
    let cells = derive_highlighted(&layout, &FilterState::new());
    assert!(cells.iter().all(|c| c.highlighted));
  }
}
