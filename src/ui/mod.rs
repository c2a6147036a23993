pub mod atom_view;
pub mod logger;
pub mod table_view;

use gtk4::prelude::*;
use gtk4::{CheckButton, DrawingArea, DropDown, Grid, ListBox, SearchEntry, Stack, TextView};
use ptable::model::Category;

/// Widgets that get refreshed when the filter or selection changes.
#[derive(Clone)]
pub struct Views {
  pub stack: Stack,
  pub grid: Grid,
  pub list: ListBox,
  pub atom_area: DrawingArea,
  pub console: TextView,
  pub search: SearchEntry,
  pub group_dropdown: DropDown,
  pub list_toggle: CheckButton,
  pub names_toggle: CheckButton,
}

impl Views {
  pub fn new(atom_area: DrawingArea, console: TextView) -> Self {
    let grid = Grid::builder().row_spacing(2).column_spacing(2).build();
    let mut labels = vec!["All"];
    labels.extend(Category::ALL.iter().map(|c| c.label()));

    Self {
      stack: Stack::new(),
      grid,
      list: table_view::build_list(),
      atom_area,
      console,
      search: SearchEntry::new(),
      group_dropdown: DropDown::from_strings(&labels),
      list_toggle: CheckButton::with_label("List view"),
      names_toggle: CheckButton::with_label("Show names"),
    }
  }

  /// Puts the filter widgets back to their defaults. Their handlers dispatch the matching actions.
  pub fn reset_filter_widgets(&self) {
    self.search.set_text("");
    self.group_dropdown.set_selected(0);
    self.list_toggle.set_active(false);
    self.names_toggle.set_active(false);
  }
}

pub fn log_to_console(console_view: &TextView, message: &str) {
  let buffer = console_view.buffer();
  let mut end_iter = buffer.end_iter();
  if buffer.char_count() > 0 {
    buffer.insert(&mut end_iter, "\n--------------------------------\n");
  }
  buffer.insert(&mut end_iter, message);
  let mark = buffer.create_mark(None, &end_iter, false);
  console_view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
  buffer.delete_mark(&mark);
}
