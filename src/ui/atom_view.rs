// src/ui/atom_view.rs

use crate::rendering::painter;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::DrawingArea;
use ptable::physics::Viewport;
use ptable::state::AppState;
use std::cell::RefCell;
use std::rc::Rc;

/// Bohr-model view of the selected element. Redraws every frame while spinning.
pub fn build(state: Rc<RefCell<AppState>>) -> DrawingArea {
  let drawing_area = DrawingArea::new();
  drawing_area.set_vexpand(true);
  drawing_area.set_hexpand(true);
  drawing_area.set_content_width(360);
  drawing_area.set_content_height(360);

  let s = state.clone();
  drawing_area.set_draw_func(move |da, cr, w, h| {
    let st = s.borrow();
    let style = &st.config.style;
    if let Err(e) = painter::draw_background(cr, style) {
      log::error!("Background draw failed: {}", e);
      return;
    }

    let (width, height) = (w as f64, h as f64);
    let Some(element) = st.selected() else {
      let _ = painter::draw_message(cr, width, height, "Select an element");
      return;
    };

    match st.atom_geometry(Viewport::new(width, height)) {
      Ok(Some(geo)) => {
        // Frame clock time is in microseconds
        let elapsed = da
          .frame_clock()
          .map(|clock| clock.frame_time() as f64 / 1e6)
          .unwrap_or(0.0);
        if let Err(e) = painter::draw_atom(cr, &geo, element, style, elapsed) {
          log::error!("Atom draw failed: {}", e);
        }
      }
      Ok(None) => {}
      Err(e) => log::warn!("Cannot lay out {}: {}", element.symbol, e),
    }
  });

  let s_tick = Rc::downgrade(&state);
  drawing_area.add_tick_callback(move |da, _clock| {
    let Some(st) = s_tick.upgrade() else {
      return glib::ControlFlow::Break;
    };
    let animate = {
      let st = st.borrow();
      st.config.spinning && st.selected().is_some()
    };
    if animate {
      da.queue_draw();
    }
    glib::ControlFlow::Continue
  });

  drawing_area
}
