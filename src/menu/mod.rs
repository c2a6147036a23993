// src/menu/mod.rs

use crate::ui::Views;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow};
use ptable::state::AppState;
use std::cell::RefCell;
use std::rc::Rc;

pub mod actions_file;
pub mod actions_help;
pub mod actions_view;

pub fn build_menu_and_actions(
  app: &Application,
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  views: &Views,
) -> gtk4::Box {
  // Register Actions
  actions_file::setup(app, window, state.clone(), views);
  actions_view::setup(app, state, views);
  actions_help::setup(app, window);

  // Keyboard Shortcuts
  app.set_accels_for_action("app.export", &["<Primary>e"]);
  app.set_accels_for_action("app.save_preferences", &["<Primary>s"]);
  app.set_accels_for_action("app.quit", &["<Primary>q"]);
  app.set_accels_for_action("app.toggle_view", &["<Primary>l"]);
  app.set_accels_for_action("app.toggle_names", &["<Primary>n"]);

  // --- BUILD MENU BAR ---
  let menu_bar = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
  let root_model = gtk4::gio::Menu::new();

  // --- FILE MENU ---
  let file_menu = gtk4::gio::Menu::new();
  file_menu.append(Some("Export Atom Image..."), Some("app.export"));
  file_menu.append(Some("Save Preferences"), Some("app.save_preferences"));
  file_menu.append(Some("Quit"), Some("app.quit"));
  root_model.append_submenu(Some("File"), &file_menu);

  // --- VIEW MENU ---
  let view_menu = gtk4::gio::Menu::new();
  view_menu.append(Some("Toggle Grid/List"), Some("app.toggle_view"));
  view_menu.append(Some("Toggle Names"), Some("app.toggle_names"));
  view_menu.append(Some("Reset Filter"), Some("app.reset_filter"));
  view_menu.append(Some("Clear Selection"), Some("app.clear_selection"));
  root_model.append_submenu(Some("View"), &view_menu);

  // --- HELP MENU ---
  let help_menu = gtk4::gio::Menu::new();
  help_menu.append(Some("About"), Some("app.about"));
  root_model.append_submenu(Some("Help"), &help_menu);

  let popover_bar = gtk4::PopoverMenuBar::from_model(Some(&root_model));
  menu_bar.append(&popover_bar);

  menu_bar
}
