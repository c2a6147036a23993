use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{
  glib, Application, ApplicationWindow, Frame, Orientation, Paned, ScrolledWindow, TextView,
};
use std::cell::RefCell;
use std::rc::Rc;

mod menu;
mod panels;
mod rendering;
mod ui;

use ptable::config::Config;
use ptable::state::AppState;
use ui::{table_view, Views};

fn main() -> glib::ExitCode {
  let app = Application::builder()
    .application_id("org.mavensgroup.ptable")
    .build();

  app.connect_activate(build_ui);
  app.run()
}

fn build_ui(app: &Application) {
  let window = ApplicationWindow::builder()
    .application(app)
    .title("ptable - Periodic Table Viewer")
    .default_width(1400)
    .default_height(850)
    .build();

  // Console first so startup messages land in it
  let console_view = TextView::builder()
    .editable(false)
    .cursor_visible(false)
    .monospace(true)
    .left_margin(10)
    .right_margin(10)
    .top_margin(10)
    .bottom_margin(10)
    .build();
  if let Err(e) = ui::logger::init(&console_view) {
    eprintln!("Logger already installed: {}", e);
  }

  let config = Config::load();
  let catalog = match ptable::model::catalog() {
    Ok(c) => c,
    Err(e) => {
      log::error!("Element catalog unavailable: {}", e);
      window.set_child(Some(&console_view));
      window.present();
      return;
    }
  };
  let state = match AppState::new(catalog, config) {
    Ok(st) => Rc::new(RefCell::new(st)),
    Err(e) => {
      log::error!("Cannot lay out the periodic table: {}", e);
      window.set_child(Some(&console_view));
      window.present();
      return;
    }
  };

  // 1. TOP LEVEL: Vertical Box (Menu on top, Main Content below)
  let root_vbox = GtkBox::new(Orientation::Vertical, 0);
  window.set_child(Some(&root_vbox));

  let atom_area = ui::atom_view::build(state.clone());
  let views = Views::new(atom_area, console_view);

  // 2. CENTER: Grid and List pages
  let grid_scroll = ScrolledWindow::builder()
    .child(&views.grid)
    .hexpand(true)
    .vexpand(true)
    .build();
  let list_scroll = ScrolledWindow::builder()
    .child(&views.list)
    .hexpand(true)
    .vexpand(true)
    .build();
  views.stack.add_named(&grid_scroll, Some("grid"));
  views.stack.add_named(&list_scroll, Some("list"));

  // 3. RIGHT: Atom view over console
  let info_frame = Frame::new(None);
  let console_scroll = ScrolledWindow::builder()
    .min_content_height(180)
    .child(&views.console)
    .build();
  info_frame.set_child(Some(&console_scroll));

  let right_vbox = GtkBox::new(Orientation::Vertical, 0);
  right_vbox.append(&views.atom_area);
  right_vbox.append(&info_frame);

  let content_paned = Paned::new(Orientation::Horizontal);
  content_paned.set_start_child(Some(&views.stack));
  content_paned.set_end_child(Some(&right_vbox));
  content_paned.set_position(900);

  let main_hbox = GtkBox::new(Orientation::Horizontal, 0);
  main_hbox.append(&panels::sidebar::build(state.clone(), &views));
  main_hbox.append(&content_paned);
  content_paned.set_hexpand(true);

  let menu_bar = menu::build_menu_and_actions(app, &window, state.clone(), &views);
  root_vbox.append(&menu_bar);
  root_vbox.append(&main_hbox);

  table_view::install_category_css();
  table_view::refresh(&state, &views);

  // Preferences persist on close; filter state does not.
  let s_close = state.clone();
  window.connect_close_request(move |_| {
    if let Err(e) = s_close.borrow().config.save() {
      eprintln!("Could not save preferences: {}", e);
    }
    glib::Propagation::Proceed
  });

  window.present();
}
