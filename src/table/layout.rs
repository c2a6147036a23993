// src/table/layout.rs

use crate::error::{PtableError, Result};
use crate::model::{Category, Element};
use std::collections::HashMap;

pub const COLUMNS: u8 = 18;
pub const MAIN_ROWS: u8 = 7;
pub const LANTHANIDE_ROW: u8 = 8;
pub const ACTINIDE_ROW: u8 = 9;
/// Column of the first member of each detached series.
pub const SERIES_FIRST_COLUMN: u8 = 3;

/// 1-based (row, col) in the 18-column display grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
  pub row: u8,
  pub col: u8,
}

impl GridPosition {
  pub const fn new(row: u8, col: u8) -> Self {
    Self { row, col }
  }
}

/// Main-table cell the series was lifted out of.
pub fn placeholder_position(series: Category) -> Option<GridPosition> {
  match series {
    Category::Lanthanide => Some(GridPosition::new(6, SERIES_FIRST_COLUMN)),
    Category::Actinide => Some(GridPosition::new(7, SERIES_FIRST_COLUMN)),
    _ => None,
  }
}

fn series_row(series: Category) -> Option<u8> {
  match series {
    Category::Lanthanide => Some(LANTHANIDE_ROW),
    Category::Actinide => Some(ACTINIDE_ROW),
    _ => None,
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellContent<'a> {
  Element(&'a Element),
  /// Marks where a detached series belongs in the main table.
  Placeholder(Category),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell<'a> {
  pub position: GridPosition,
  pub content: CellContent<'a>,
}

impl<'a> GridCell<'a> {
  pub fn element(&self) -> Option<&'a Element> {
    match self.content {
      CellContent::Element(el) => Some(el),
      CellContent::Placeholder(_) => None,
    }
  }

  pub fn is_placeholder(&self) -> bool {
    matches!(self.content, CellContent::Placeholder(_))
  }
}

/// Position for one element.
///
/// `series_index` is the element's 0-based rank inside its lanthanide or
/// actinide series and is ignored for every other category.
pub fn position_for(element: &Element, series_index: usize) -> Result<GridPosition> {
  if let Some(row) = series_row(element.category) {
    let col = SERIES_FIRST_COLUMN as usize + series_index;
    if col > COLUMNS as usize {
      return Err(PtableError::layout(
        &element.symbol,
        format!("series index {} overflows the {} columns", series_index, COLUMNS),
      ));
    }
    return Ok(GridPosition::new(row, col as u8));
  }

  let group = element
    .group
    .ok_or_else(|| PtableError::layout(&element.symbol, "no group and not in a detached series"))?;

  if !(1..=MAIN_ROWS).contains(&element.period) {
    return Err(PtableError::layout(
      &element.symbol,
      format!("period {} outside 1-{}", element.period, MAIN_ROWS),
    ));
  }
  if !(1..=COLUMNS).contains(&group) {
    return Err(PtableError::layout(
      &element.symbol,
      format!("group {} outside 1-{}", group, COLUMNS),
    ));
  }

  Ok(GridPosition::new(element.period, group))
}

/// Every element's cell plus the two series placeholders.
#[derive(Debug, Clone)]
pub struct TableLayout<'a> {
  cells: Vec<GridCell<'a>>,
  index: HashMap<GridPosition, usize>,
  by_number: HashMap<u32, GridPosition>,
}

impl<'a> TableLayout<'a> {
  /// Places `elements` (catalog order) on the grid.
  ///
  /// Fails on the first element that cannot be placed or that collides with
  /// an occupied cell; nothing is ever dropped to a default position.
  pub fn resolve(elements: &'a [Element]) -> Result<Self> {
    let mut cells: Vec<GridCell<'a>> = Vec::with_capacity(elements.len() + 2);
    let mut index: HashMap<GridPosition, usize> = HashMap::with_capacity(elements.len() + 2);
    let mut by_number = HashMap::with_capacity(elements.len());

    for series in [Category::Lanthanide, Category::Actinide] {
      if let Some(pos) = placeholder_position(series) {
        index.insert(pos, cells.len());
        cells.push(GridCell {
          position: pos,
          content: CellContent::Placeholder(series),
        });
      }
    }

    let mut lanthanides = 0usize;
    let mut actinides = 0usize;

    for el in elements {
      let series_index = match el.category {
        Category::Lanthanide => {
          lanthanides += 1;
          lanthanides - 1
        }
        Category::Actinide => {
          actinides += 1;
          actinides - 1
        }
        _ => 0,
      };

      let pos = position_for(el, series_index)?;
      if let Some(&taken) = index.get(&pos) {
        let occupant = match cells[taken].content {
          CellContent::Element(other) => other.symbol.clone(),
          CellContent::Placeholder(series) => format!("{} placeholder", series.label()),
        };
        return Err(PtableError::layout(
          &el.symbol,
          format!("cell ({}, {}) already holds {}", pos.row, pos.col, occupant),
        ));
      }

      index.insert(pos, cells.len());
      by_number.insert(el.atomic_number, pos);
      cells.push(GridCell {
        position: pos,
        content: CellContent::Element(el),
      });
    }

    cells.sort_by_key(|c| c.position);
    for (i, cell) in cells.iter().enumerate() {
      index.insert(cell.position, i);
    }

    log::debug!("Resolved table layout: {} cells", cells.len());
    Ok(Self {
      cells,
      index,
      by_number,
    })
  }

  pub fn rows(&self) -> u8 {
    ACTINIDE_ROW
  }

  pub fn columns(&self) -> u8 {
    COLUMNS
  }

  /// All cells, row-major.
  pub fn cells(&self) -> &[GridCell<'a>] {
    &self.cells
  }

  pub fn element_cells(&self) -> impl Iterator<Item = &GridCell<'a>> {
    self.cells.iter().filter(|c| !c.is_placeholder())
  }

  pub fn placeholders(&self) -> impl Iterator<Item = &GridCell<'a>> {
    self.cells.iter().filter(|c| c.is_placeholder())
  }

  pub fn cell_at(&self, pos: GridPosition) -> Option<&GridCell<'a>> {
    self.index.get(&pos).map(|&i| &self.cells[i])
  }

  pub fn position_of(&self, atomic_number: u32) -> Option<GridPosition> {
    self.by_number.get(&atomic_number).copied()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::catalog;
  use std::collections::HashSet;

  fn element(z: u32, sym: &str, cat: Category, period: u8, group: Option<u8>) -> Element {
    Element {
      atomic_number: z,
      symbol: sym.into(),
      name: sym.into(),
      category: cat,
      period,
      group,
      atomic_mass: z as f64 * 2.0,
    }
  }

  #[test]
  fn test_main_table_positions() {
    let cat = catalog().unwrap();
    let layout = TableLayout::resolve(cat.get_all()).unwrap();

    assert_eq!(layout.position_of(1), Some(GridPosition::new(1, 1)));
    assert_eq!(layout.position_of(2), Some(GridPosition::new(1, 18)));
    assert_eq!(layout.position_of(11), Some(GridPosition::new(3, 1)));
    assert_eq!(layout.position_of(72), Some(GridPosition::new(6, 4)));
    assert_eq!(layout.position_of(118), Some(GridPosition::new(7, 18)));
  }

  #[test]
  fn test_series_rows() {
    let cat = catalog().unwrap();
    let layout = TableLayout::resolve(cat.get_all()).unwrap();

    // La..Lu -> row 8, cols 3..17
    assert_eq!(layout.position_of(57), Some(GridPosition::new(LANTHANIDE_ROW, 3)));
    assert_eq!(layout.position_of(71), Some(GridPosition::new(LANTHANIDE_ROW, 17)));
    // Ac..Lr -> row 9
    assert_eq!(layout.position_of(89), Some(GridPosition::new(ACTINIDE_ROW, 3)));
    assert_eq!(layout.position_of(103), Some(GridPosition::new(ACTINIDE_ROW, 17)));
  }

  #[test]
  fn test_placeholders() {
    let cat = catalog().unwrap();
    let layout = TableLayout::resolve(cat.get_all()).unwrap();

    let ph: Vec<_> = layout.placeholders().map(|c| (c.position, c.content)).collect();
    assert_eq!(
      ph,
      vec![
        (GridPosition::new(6, 3), CellContent::Placeholder(Category::Lanthanide)),
        (GridPosition::new(7, 3), CellContent::Placeholder(Category::Actinide)),
      ]
    );
  }

  #[test]
  fn test_bijection() {
    let cat = catalog().unwrap();
    let layout = TableLayout::resolve(cat.get_all()).unwrap();

    assert_eq!(layout.element_cells().count(), cat.len());
    let positions: HashSet<_> = layout.cells().iter().map(|c| c.position).collect();
    assert_eq!(positions.len(), layout.cells().len());

    for el in cat.iter() {
      let pos = layout.position_of(el.atomic_number).expect("every element placed");
      let back = layout.cell_at(pos).and_then(|c| c.element()).unwrap();
      assert_eq!(back, el);
    }
  }

  #[test]
  fn test_cells_row_major() {
    let cat = catalog().unwrap();
    let layout = TableLayout::resolve(cat.get_all()).unwrap();
    let positions: Vec<_> = layout.cells().iter().map(|c| c.position).collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert!(positions.iter().all(|p| p.row <= layout.rows() && p.col <= layout.columns()));
  }

  #[test]
  fn test_missing_group_is_layout_error() {
    let els = vec![element(1, "H", Category::Nonmetal, 1, None)];
    match TableLayout::resolve(&els) {
      Err(PtableError::Layout { symbol, .. }) => assert_eq!(symbol, "H"),
      other => panic!("expected layout error, got {:?}", other),
    }
  }

  #[test]
  fn test_group_out_of_range() {
    let els = vec![element(1, "H", Category::Nonmetal, 1, Some(19))];
    assert!(matches!(
      TableLayout::resolve(&els),
      Err(PtableError::Layout { .. })
    ));
  }

  #[test]
  fn test_collision_detected() {
    let els = vec![
      element(1, "H", Category::Nonmetal, 1, Some(1)),
      element(2, "Hx", Category::Nonmetal, 1, Some(1)),
    ];
    assert!(matches!(
      TableLayout::resolve(&els),
      Err(PtableError::Layout { .. })
    ));
  }

  #[test]
  fn test_placeholder_collision() {
    let els = vec![element(57, "La", Category::TransitionMetal, 6, Some(3))];
    assert!(matches!(
      TableLayout::resolve(&els),
      Err(PtableError::Layout { .. })
    ));
  }

  #[test]
  fn test_series_overflow() {
    let els: Vec<Element> = (0..17)
      .map(|i| {
        let sym = format!("{}", (b'A' + i as u8) as char);
        element(100 + i, &sym, Category::Actinide, 7, None)
      })
      .collect();
    assert!(matches!(
      TableLayout::resolve(&els),
      Err(PtableError::Layout { .. })
    ));
  }
}
