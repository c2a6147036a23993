// src/panels/sidebar.rs

use crate::ui::{log_to_console, table_view, Views};
use gtk4::prelude::*;
use gtk4::{
  Adjustment, Align, Box as GtkBox, DrawingArea, Expander, Label, Orientation, PolicyType,
  Scale, ScrolledWindow, Separator, Switch,
};
use ptable::model::{color_hex, Category};
use ptable::state::AppState;
use ptable::table::{FilterAction, ViewMode};
use ptable::utils::report;
use std::cell::RefCell;
use std::rc::Rc;

// Dropdown index 0 is "All", the rest follow Category::ALL.
fn group_for_index(index: u32) -> Option<Category> {
  match index {
    0 => None,
    i => Category::ALL.get(i as usize - 1).copied(),
  }
}

fn dispatch(state: &Rc<RefCell<AppState>>, views: &Views, action: FilterAction) {
  state.borrow_mut().dispatch(action);
  table_view::refresh(state, views);
}

fn section(title: &str) -> (Expander, GtkBox) {
  let expander = Expander::new(Some(title));
  expander.set_expanded(true);
  let body = GtkBox::new(Orientation::Vertical, 8);
  body.set_margin_top(6);
  body.set_margin_bottom(6);
  body.set_margin_start(5);
  expander.set_child(Some(&body));
  (expander, body)
}

/// Filter controls, atom animation controls and the category legend.
pub fn build(state: Rc<RefCell<AppState>>, views: &Views) -> ScrolledWindow {
  let scroll = ScrolledWindow::builder()
    .hscrollbar_policy(PolicyType::Never)
    .vscrollbar_policy(PolicyType::Automatic)
    .min_content_width(220)
    .build();

  let root_vbox = GtkBox::new(Orientation::Vertical, 10);
  root_vbox.set_margin_start(10);
  root_vbox.set_margin_end(10);
  root_vbox.set_margin_top(10);
  root_vbox.set_margin_bottom(10);
  scroll.set_child(Some(&root_vbox));

  // ============================================================
  // SECTION 1: FILTER
  // ============================================================
  let (filter_expander, filter_box) = section("Filter");

  let search = &views.search;
  search.set_placeholder_text(Some("Name or symbol"));
  let s = state.clone();
  let v = views.clone();
  search.connect_search_changed(move |entry| {
    dispatch(&s, &v, FilterAction::SetSearch(entry.text().to_string()));
  });
  filter_box.append(search);

  let group_dropdown = &views.group_dropdown;
  group_dropdown.set_selected(0);
  let s = state.clone();
  let v = views.clone();
  group_dropdown.connect_selected_notify(move |dd| {
    let group = group_for_index(dd.selected());
    dispatch(&s, &v, FilterAction::SelectGroup(group));
    if let Some(cat) = group {
      let table = report::visible_table(&s.borrow().visible());
      log_to_console(&v.console, &format!("{}\n{}", cat.label(), table));
    }
  });
  filter_box.append(&Label::builder().label("Group").halign(Align::Start).build());
  filter_box.append(group_dropdown);

  // The menu accelerator flips this button too, so only dispatch on disagreement.
  let s = state.clone();
  let v = views.clone();
  views.list_toggle.connect_toggled(move |btn| {
    let in_list = s.borrow().filter.view_mode() == ViewMode::List;
    if btn.is_active() != in_list {
      dispatch(&s, &v, FilterAction::ToggleViewMode);
    }
  });
  filter_box.append(&views.list_toggle);

  let s = state.clone();
  let v = views.clone();
  views.names_toggle.connect_toggled(move |btn| {
    let showing = s.borrow().filter.show_names();
    if btn.is_active() != showing {
      dispatch(&s, &v, FilterAction::ToggleNames);
    }
  });
  filter_box.append(&views.names_toggle);

  root_vbox.append(&filter_expander);
  root_vbox.append(&Separator::new(Orientation::Horizontal));

  // ============================================================
  // SECTION 2: ATOM ANIMATION
  // ============================================================
  let (atom_expander, atom_box) = section("Atom View");
  let (spinning, speed) = {
    let st = state.borrow();
    (st.config.spinning, st.config.rotation_speed)
  };

  let spin_row = GtkBox::new(Orientation::Horizontal, 8);
  spin_row.append(&Label::builder().label("Spin electrons").hexpand(true).halign(Align::Start).build());
  let spin_switch = Switch::builder().active(spinning).valign(Align::Center).build();
  let s = state.clone();
  let da_weak = views.atom_area.downgrade();
  spin_switch.connect_active_notify(move |sw| {
    s.borrow_mut().config.spinning = sw.is_active();
    redraw(&da_weak);
  });
  spin_row.append(&spin_switch);
  atom_box.append(&spin_row);

  atom_box.append(&Label::builder().label("Rotation speed").halign(Align::Start).build());
  let adj = Adjustment::new(speed, 0.0, 3.0, 0.1, 0.5, 0.0);
  let speed_scale = Scale::new(Orientation::Horizontal, Some(&adj));
  speed_scale.set_digits(1);
  speed_scale.set_draw_value(true);
  speed_scale.set_value_pos(gtk4::PositionType::Right);
  let s = state.clone();
  let da_weak = views.atom_area.downgrade();
  speed_scale.connect_value_changed(move |sc| {
    s.borrow_mut().config.rotation_speed = sc.value();
    redraw(&da_weak);
  });
  atom_box.append(&speed_scale);

  root_vbox.append(&atom_expander);
  root_vbox.append(&Separator::new(Orientation::Horizontal));

  // ============================================================
  // SECTION 3: LEGEND
  // ============================================================
  let (legend_expander, legend_box) = section("Legend");
  for (category, count) in state.borrow().catalog.legend() {
    let swatch = Label::new(None);
    swatch.set_markup(&format!(
      "<span background=\"{}\">      </span>",
      color_hex(category)
    ));
    let row = GtkBox::new(Orientation::Horizontal, 8);
    row.append(&swatch);
    row.append(
      &Label::builder()
        .label(format!("{} ({})", category.label(), count).as_str())
        .halign(Align::Start)
        .build(),
    );
    legend_box.append(&row);
  }
  root_vbox.append(&legend_expander);

  scroll
}

fn redraw(da_weak: &gtk4::glib::WeakRef<DrawingArea>) {
  if let Some(da) = da_weak.upgrade() {
    da.queue_draw();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_group_dropdown_mapping() {
    assert_eq!(group_for_index(0), None);
    assert_eq!(group_for_index(1), Some(Category::AlkaliMetal));
    assert_eq!(group_for_index(11), Some(Category::Unknown));
    assert_eq!(group_for_index(12), None);
  }
}
