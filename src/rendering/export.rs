use super::painter;
use ptable::physics::Viewport;
use ptable::state::AppState;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportFormat {
  Png,
  Svg,
}

impl ExportFormat {
  pub fn from_path(path: &Path) -> Self {
    match path.extension().and_then(|e| e.to_str()) {
      Some(ext) if ext.eq_ignore_ascii_case("svg") => ExportFormat::Svg,
      _ => ExportFormat::Png,
    }
  }
}

// --- File Export Entry Point ---
/// Writes the selected atom, unrotated, to `path`.
pub fn export_atom(state: &AppState, path: &Path, size: i32) -> Result<(), String> {
  let element = state
    .selected()
    .ok_or_else(|| "Select an element before exporting.".to_string())?;
  let geo = state
    .atom_geometry(Viewport::new(size as f64, size as f64))
    .map_err(|e| e.to_string())?
    .ok_or_else(|| "Select an element before exporting.".to_string())?;
  let style = &state.config.style;

  match ExportFormat::from_path(path) {
    ExportFormat::Svg => {
      let surface =
        cairo::SvgSurface::new(size as f64, size as f64, Some(path)).map_err(|e| e.to_string())?;
      let cr = cairo::Context::new(&surface).map_err(|e| e.to_string())?;
      painter::draw_background(&cr, style).map_err(|e| e.to_string())?;
      painter::draw_atom(&cr, &geo, element, style, 0.0).map_err(|e| e.to_string())?;
      surface.finish();
    }
    ExportFormat::Png => {
      let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, size, size)
        .map_err(|e| e.to_string())?;
      let cr = cairo::Context::new(&surface).map_err(|e| e.to_string())?;
      painter::draw_background(&cr, style).map_err(|e| e.to_string())?;
      painter::draw_atom(&cr, &geo, element, style, 0.0).map_err(|e| e.to_string())?;
      drop(cr);

      let mut file = std::fs::File::create(path).map_err(|e| e.to_string())?;
      surface.write_to_png(&mut file).map_err(|e| e.to_string())?;
    }
  }

  log::info!("Exported {} to {}", element.name, path.display());
  Ok(())
}
