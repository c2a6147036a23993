// src/rendering/painter.rs

use gtk4::cairo::{self, Context, RadialGradient};
use ptable::config::AtomStyle;
use ptable::model::Element;
use ptable::physics::AtomGeometry;
use std::f64::consts::TAU;

// ============================================================================
// BACKGROUND / EMPTY STATE
// ============================================================================

pub fn draw_background(cr: &Context, style: &AtomStyle) -> Result<(), cairo::Error> {
  let (r, g, b) = style.background_color;
  cr.set_source_rgb(r, g, b);
  cr.paint()
}

/// Centered hint when nothing is selected (or the selection is gone).
pub fn draw_message(cr: &Context, width: f64, height: f64, text: &str) -> Result<(), cairo::Error> {
  cr.set_source_rgb(0.7, 0.7, 0.75);
  cr.set_font_size(16.0);
  let ext = cr.text_extents(text)?;
  cr.move_to((width - ext.width()) / 2.0, height / 2.0);
  cr.show_text(text)
}

// ============================================================================
// NUCLEUS
// ============================================================================

fn draw_nucleus(
  cr: &Context,
  geo: &AtomGeometry,
  element: &Element,
  style: &AtomStyle,
) -> Result<(), cairo::Error> {
  let (x, y) = (geo.center.x, geo.center.y);
  let radius = geo.nucleus_radius;
  let (r, g, b) = element.color();

  // Highlight offset to top-left, shadow at the rim
  let gradient = RadialGradient::new(
    x - radius * 0.3,
    y - radius * 0.3,
    radius * 0.1,
    x,
    y,
    radius,
  );
  gradient.add_color_stop_rgb(0.0, 1.0, 1.0, 1.0);
  gradient.add_color_stop_rgb(0.2, (r + 0.2).min(1.0), (g + 0.2).min(1.0), (b + 0.2).min(1.0));
  gradient.add_color_stop_rgb(1.0, r * 0.6, g * 0.6, b * 0.6);

  cr.set_source(&gradient)?;
  cr.arc(x, y, radius, 0.0, TAU);
  cr.fill()?;

  cr.set_source_rgba(0.0, 0.0, 0.0, 0.3);
  cr.set_line_width((radius * 0.05).max(1.0));
  cr.arc(x, y, radius, 0.0, TAU);
  cr.stroke()?;

  // Symbol, then the nucleon counts underneath
  cr.set_source_rgb(0.05, 0.05, 0.05);
  cr.set_font_size(radius * 0.6);
  let ext = cr.text_extents(&element.symbol)?;
  cr.move_to(x - ext.width() / 2.0 - ext.x_bearing(), y);
  cr.show_text(&element.symbol)?;

  let counts = format!("{}p  {}n", element.protons(), element.neutrons());
  cr.set_font_size(radius * 0.22);
  let ext = cr.text_extents(&counts)?;
  cr.move_to(x - ext.width() / 2.0 - ext.x_bearing(), y + radius * 0.45);

  let (pr, pg, pb) = style.proton_color;
  let (nr, ng, nb) = style.neutron_color;
  cr.set_source_rgb((pr + nr) / 2.0 * 0.4, (pg + ng) / 2.0 * 0.4, (pb + nb) / 2.0 * 0.4);
  cr.show_text(&counts)
}

// ============================================================================
// SHELLS & ELECTRONS
// ============================================================================

pub fn draw_atom(
  cr: &Context,
  geo: &AtomGeometry,
  element: &Element,
  style: &AtomStyle,
  elapsed: f64,
) -> Result<(), cairo::Error> {
  let (sr, sg, sb) = style.shell_color;
  let (er, eg, eb) = style.electron_color;

  // Heavy nuclei reach past the inner rings, so shells go on top.
  draw_nucleus(cr, geo, element, style)?;

  for shell in &geo.shells {
    // Ring (drawn even when empty)
    cr.set_source_rgba(sr, sg, sb, 0.35);
    cr.set_line_width(style.shell_line_width);
    cr.arc(geo.center.x, geo.center.y, shell.radius, 0.0, TAU);
    cr.stroke()?;

    cr.set_source_rgba(er, eg, eb, 0.9);
    for p in shell.positions_at(elapsed) {
      let s = geo.to_screen(&p);
      cr.arc(s.x, s.y, style.electron_radius, 0.0, TAU);
      cr.fill()?;
    }
  }

  Ok(())
}
