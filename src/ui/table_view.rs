// src/ui/table_view.rs

use super::{log_to_console, Views};
use gtk4::prelude::*;
use gtk4::{gdk, Align, Button, CssProvider, Label, ListBox, Orientation, SelectionMode};
use ptable::model::{color_hex, Category, Element};
use ptable::state::AppState;
use ptable::table::layout::MAIN_ROWS;
use ptable::table::{CellContent, ViewMode};
use ptable::utils::report;
use std::cell::RefCell;
use std::rc::Rc;

const DIMMED_OPACITY: f64 = 0.25;

fn css_class(category: Category) -> String {
  format!("cat-{}", category.slug())
}

/// One background rule per category, installed once for the display.
pub fn install_category_css() {
  let mut css = String::from(
    "button.element { padding: 2px; min-width: 44px; min-height: 44px; color: #111111; }\n\
     label.placeholder { color: #888888; font-size: small; }\n",
  );
  for cat in Category::ALL {
    css.push_str(&format!(
      "button.{} {{ background: {}; }}\n",
      css_class(cat),
      color_hex(cat)
    ));
  }

  let provider = CssProvider::new();
  provider.load_from_data(&css);
  if let Some(display) = gdk::Display::default() {
    gtk4::style_context_add_provider_for_display(
      &display,
      &provider,
      gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
  }
}

pub fn build_list() -> ListBox {
  let list = ListBox::new();
  list.set_selection_mode(SelectionMode::None);
  list
}

fn element_button(
  el: &'static Element,
  show_names: bool,
  state: &Rc<RefCell<AppState>>,
  views: &Views,
) -> Button {
  let text = if show_names {
    format!("<small>{}</small>\n<b>{}</b>\n<small>{}</small>", el.atomic_number, el.symbol, el.name)
  } else {
    format!("<small>{}</small>\n<b>{}</b>", el.atomic_number, el.symbol)
  };
  let label = Label::new(None);
  label.set_markup(&text);
  label.set_justify(gtk4::Justification::Center);

  let button = Button::builder().child(&label).tooltip_text(el.name.as_str()).build();
  button.add_css_class("element");
  button.add_css_class(&css_class(el.category));

  let s = state.clone();
  let v = views.clone();
  button.connect_clicked(move |_| select_element(&s, &v, el.atomic_number));
  button
}

fn select_element(state: &Rc<RefCell<AppState>>, views: &Views, atomic_number: u32) {
  let picked = state.borrow_mut().select_number(atomic_number);
  match picked {
    Ok(el) => {
      log_to_console(&views.console, &report::element_summary(el));
      views.atom_area.queue_draw();
    }
    Err(e) => log::warn!("{}", e),
  }
}

fn clear_grid(grid: &gtk4::Grid) {
  while let Some(child) = grid.first_child() {
    grid.remove(&child);
  }
}

fn clear_list(list: &ListBox) {
  while let Some(child) = list.first_child() {
    list.remove(&child);
  }
}

// Rows below the main table shift down one to leave a visual gap.
fn display_row(row: u8) -> i32 {
  if row > MAIN_ROWS {
    row as i32
  } else {
    row as i32 - 1
  }
}

fn refresh_grid(state: &Rc<RefCell<AppState>>, views: &Views) {
  let (cells, show_names) = {
    let st = state.borrow();
    (st.highlighted(), st.filter.show_names())
  };

  clear_grid(&views.grid);
  for hc in cells {
    let pos = hc.cell.position;
    let widget: gtk4::Widget = match hc.cell.content {
      CellContent::Element(el) => element_button(el, show_names, state, views).upcast(),
      CellContent::Placeholder(series) => {
        let range = if series == Category::Lanthanide { "57-71" } else { "89-103" };
        let label = Label::new(Some(range));
        label.add_css_class("placeholder");
        label.upcast()
      }
    };
    widget.set_opacity(if hc.highlighted { 1.0 } else { DIMMED_OPACITY });
    views
      .grid
      .attach(&widget, pos.col as i32 - 1, display_row(pos.row), 1, 1);
  }

  let spacer = Label::new(None);
  spacer.set_size_request(-1, 12);
  views.grid.attach(&spacer, 0, MAIN_ROWS as i32, 1, 1);
}

fn refresh_list(state: &Rc<RefCell<AppState>>, views: &Views) {
  let (visible, show_names) = {
    let st = state.borrow();
    (st.visible(), st.filter.show_names())
  };

  clear_list(&views.list);
  if visible.is_empty() {
    views
      .list
      .append(&Label::new(Some("No elements match the current filter.")));
    return;
  }

  for el in visible {
    let row = gtk4::Box::new(Orientation::Horizontal, 12);
    row.append(&element_button(el, false, state, views));

    let text = if show_names {
      format!("{}  ·  {}  ·  {:.3} u", el.name, el.category.label(), el.atomic_mass)
    } else {
      format!("{}  ·  {:.3} u", el.category.label(), el.atomic_mass)
    };
    let info = Label::builder().label(text.as_str()).halign(Align::Start).build();
    row.append(&info);
    views.list.append(&row);
  }
}

/// Rebuilds the grid and list pages and shows the one the filter asks for.
pub fn refresh(state: &Rc<RefCell<AppState>>, views: &Views) {
  refresh_grid(state, views);
  refresh_list(state, views);

  let page = match state.borrow().filter.view_mode() {
    ViewMode::Grid => "grid",
    ViewMode::List => "list",
  };
  views.stack.set_visible_child_name(page);
}
