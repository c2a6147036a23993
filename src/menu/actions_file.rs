use crate::rendering::export_atom;
use crate::ui::{log_to_console, Views};
use gtk4::prelude::*;
use gtk4::{
  Application, ApplicationWindow, FileChooserAction, FileChooserNative, FileFilter, ResponseType,
};
use ptable::state::AppState;
use std::cell::RefCell;
use std::rc::Rc;

const EXPORT_SIZE: i32 = 800;

pub fn setup(
  app: &Application,
  window: &ApplicationWindow,
  state: Rc<RefCell<AppState>>,
  views: &Views,
) {
  // --- EXPORT ACTION ---
  let export_action = gtk4::gio::SimpleAction::new("export", None);
  let win_weak = window.downgrade();
  let state_weak = Rc::downgrade(&state);
  let console_weak = views.console.downgrade();

  export_action.connect_activate(move |_, _| {
    let win = match win_weak.upgrade() {
      Some(w) => w,
      None => return,
    };

    let Some(st) = state_weak.upgrade() else {
      return;
    };
    let selected = st.borrow().selected();
    let default_name = match selected {
      Some(el) => format!("{}.png", el.name.to_lowercase()),
      None => {
        log::warn!("Nothing to export: no element selected.");
        return;
      }
    };

    let dialog = FileChooserNative::new(
      Some("Export Atom Image"),
      Some(&win),
      FileChooserAction::Save,
      Some("Export"),
      Some("Cancel"),
    );

    let filter_png = FileFilter::new();
    filter_png.set_name(Some("PNG Image (*.png)"));
    filter_png.add_pattern("*.png");
    dialog.add_filter(&filter_png);

    let filter_svg = FileFilter::new();
    filter_svg.set_name(Some("SVG Vector (*.svg)"));
    filter_svg.add_pattern("*.svg");
    dialog.add_filter(&filter_svg);

    dialog.set_current_name(&default_name);

    let state_weak_inner = state_weak.clone();
    let console_weak_inner = console_weak.clone();

    dialog.connect_response(move |d, response| {
      if response == ResponseType::Accept {
        if let Some(path) = d.file().and_then(|f| f.path()) {
          if let Some(st) = state_weak_inner.upgrade() {
            let msg = match export_atom(&st.borrow(), &path, EXPORT_SIZE) {
              Ok(()) => format!("Exported atom view to {}", path.display()),
              Err(e) => {
                log::error!("Export failed: {}", e);
                format!("Export failed: {}", e)
              }
            };
            if let Some(con) = console_weak_inner.upgrade() {
              log_to_console(&con, &msg);
            }
          }
        }
      }
      d.destroy();
    });
    dialog.show();
  });
  app.add_action(&export_action);

  // --- SAVE PREFERENCES ---
  let save_action = gtk4::gio::SimpleAction::new("save_preferences", None);
  let state_weak_s = Rc::downgrade(&state);
  save_action.connect_activate(move |_, _| {
    if let Some(st) = state_weak_s.upgrade() {
      if let Err(e) = st.borrow().config.save() {
        log::error!("Could not save preferences: {}", e);
      }
    }
  });
  app.add_action(&save_action);

  // --- QUIT ---
  let quit_action = gtk4::gio::SimpleAction::new("quit", None);
  let win_weak_q = window.downgrade();
  quit_action.connect_activate(move |_, _| {
    if let Some(win) = win_weak_q.upgrade() {
      win.close();
    }
  });
  app.add_action(&quit_action);
}
