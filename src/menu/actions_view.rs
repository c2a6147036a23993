// src/menu/actions_view.rs

use crate::ui::{table_view, Views};
use gtk4::prelude::*;
use gtk4::Application;
use ptable::state::AppState;
use ptable::table::FilterAction;
use std::cell::RefCell;
use std::rc::Rc;

pub fn setup(app: &Application, state: Rc<RefCell<AppState>>, views: &Views) {
  // 1. Grid / List
  // Flipping the checkbox dispatches through its own handler in the sidebar.
  let act_view = gtk4::gio::SimpleAction::new("toggle_view", None);
  let toggle_weak = views.list_toggle.downgrade();
  act_view.connect_activate(move |_, _| {
    if let Some(btn) = toggle_weak.upgrade() {
      btn.set_active(!btn.is_active());
    }
  });
  app.add_action(&act_view);

  // 2. Names
  let act_names = gtk4::gio::SimpleAction::new("toggle_names", None);
  let names_weak = views.names_toggle.downgrade();
  act_names.connect_activate(move |_, _| {
    if let Some(btn) = names_weak.upgrade() {
      btn.set_active(!btn.is_active());
    }
  });
  app.add_action(&act_names);

  // 3. Reset Filter
  let act_reset = gtk4::gio::SimpleAction::new("reset_filter", None);
  let s_reset = state.clone();
  let v_reset = views.clone();
  act_reset.connect_activate(move |_, _| {
    s_reset.borrow_mut().dispatch(FilterAction::Reset);
    v_reset.reset_filter_widgets();
    table_view::refresh(&s_reset, &v_reset);
  });
  app.add_action(&act_reset);

  // 4. Clear Selection
  let act_clear = gtk4::gio::SimpleAction::new("clear_selection", None);
  let s_clear = Rc::downgrade(&state);
  let da_weak = views.atom_area.downgrade();
  act_clear.connect_activate(move |_, _| {
    if let Some(st) = s_clear.upgrade() {
      st.borrow_mut().clear_selection();
      if let Some(da) = da_weak.upgrade() {
        da.queue_draw();
      }
    }
  });
  app.add_action(&act_clear);
}
