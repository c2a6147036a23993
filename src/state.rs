// src/state.rs

use crate::config::Config;
use crate::error::Result;
use crate::model::{Catalog, Element};
use crate::physics::{self, AtomGeometry, Viewport};
use crate::table::{
  derive_highlighted, derive_visible, FilterAction, FilterState, HighlightedCell, TableLayout,
};

/// One viewer session: catalog, its grid, the live filter and the selected atom.
pub struct AppState {
  pub catalog: &'static Catalog,
  pub layout: TableLayout<'static>,
  pub filter: FilterState,
  pub config: Config,
  selected: Option<u32>,
}

impl AppState {
  /// Fails only when the catalog cannot be laid out.
  pub fn new(catalog: &'static Catalog, config: Config) -> Result<Self> {
    let layout = TableLayout::resolve(catalog.get_all())?;
    Ok(Self {
      catalog,
      layout,
      filter: FilterState::new(),
      config,
      selected: None,
    })
  }

  pub fn dispatch(&mut self, action: FilterAction) {
    log::debug!("Filter action: {:?}", action);
    self.filter = self.filter.apply(action);
  }

  pub fn visible(&self) -> Vec<&'static Element> {
    derive_visible(self.catalog.get_all(), &self.filter)
  }

  pub fn highlighted(&self) -> Vec<HighlightedCell<'static>> {
    derive_highlighted(&self.layout, &self.filter)
  }

  /// Selects by symbol. On a miss the previous selection stays.
  pub fn select_symbol(&mut self, symbol: &str) -> Result<&'static Element> {
    let el = self.catalog.get_by_symbol(symbol)?;
    self.selected = Some(el.atomic_number);
    log::info!("Selected {} ({})", el.name, el.symbol);
    Ok(el)
  }

  pub fn select_number(&mut self, atomic_number: u32) -> Result<&'static Element> {
    let el = self.catalog.get_by_atomic_number(atomic_number)?;
    self.selected = Some(el.atomic_number);
    log::info!("Selected {} ({})", el.name, el.symbol);
    Ok(el)
  }

  pub fn clear_selection(&mut self) {
    self.selected = None;
  }

  pub fn selected(&self) -> Option<&'static Element> {
    self
      .selected
      .and_then(|z| self.catalog.get_by_atomic_number(z).ok())
  }

  /// Atom-view layout of the selected element, `None` when nothing is selected.
  pub fn atom_geometry(&self, viewport: Viewport) -> Result<Option<AtomGeometry>> {
    let Some(el) = self.selected() else {
      return Ok(None);
    };
    let shells = physics::configure_element(el);
    let geo = physics::resolve_geometry(
      &shells,
      el.protons(),
      el.neutrons(),
      viewport,
      self.config.spin(),
    )?;
    Ok(Some(geo))
  }
}
