// src/config.rs

use crate::error::Result;
use crate::model::Rgb;
use crate::physics::Spin;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

// --- AtomStyle ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtomStyle {
  pub background_color: Rgb,
  pub proton_color: Rgb,
  pub neutron_color: Rgb,
  pub shell_color: Rgb,
  pub electron_color: Rgb,
  pub electron_radius: f64,
  pub shell_line_width: f64,
}

impl Default for AtomStyle {
  fn default() -> Self {
    Self {
      background_color: (0.05, 0.05, 0.10),
      proton_color: (0.90, 0.30, 0.30),
      neutron_color: (0.55, 0.60, 0.70),
      shell_color: (0.60, 0.80, 1.00),
      electron_color: (0.30, 0.60, 1.00),
      electron_radius: 5.0,
      shell_line_width: 1.5,
    }
  }
}

// --- Main Config Struct ---

/// Presentation preferences. Filter state is never stored here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  #[serde(default = "default_spinning")]
  pub spinning: bool,

  #[serde(default = "default_rotation_speed")]
  pub rotation_speed: f64,

  #[serde(default)]
  pub style: AtomStyle,
}

fn default_spinning() -> bool {
  true
}

fn default_rotation_speed() -> f64 {
  1.0
}

impl Default for Config {
  fn default() -> Self {
    Self {
      spinning: default_spinning(),
      rotation_speed: default_rotation_speed(),
      style: AtomStyle::default(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/ptable/settings.json)
  pub fn load() -> Self {
    let path = Self::get_path();
    if !path.exists() {
      log::info!("No config found. Using defaults.");
      return Self::default();
    }
    match Self::load_from(&path) {
      Ok(cfg) => {
        log::info!("Config loaded from {:?}", path);
        cfg
      }
      Err(e) => {
        log::warn!("Error reading config {:?}: {}", path, e);
        Self::default()
      }
    }
  }

  pub fn load_from(path: &Path) -> Result<Self> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut cfg: Config = serde_json::from_reader(reader)?;
    cfg.sanitize();
    Ok(cfg)
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> Result<PathBuf> {
    let path = Self::get_path();
    self.save_to(&path)?;
    log::info!("Config saved to {:?}", path);
    Ok(path)
  }

  pub fn save_to(&self, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, self)?;
    Ok(())
  }

  pub fn spin(&self) -> Spin {
    Spin {
      spinning: self.spinning,
      rotation_speed: self.rotation_speed,
    }
  }

  // Hand-edited files can carry nonsense speeds.
  fn sanitize(&mut self) {
    if !self.rotation_speed.is_finite() || self.rotation_speed < 0.0 {
      self.rotation_speed = default_rotation_speed();
    }
  }

  fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "mavensgroup", "ptable") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::PtableError;

  fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir()
      .join(format!("ptable-test-{}", std::process::id()))
      .join(name)
  }

  #[test]
  fn test_save_and_load() {
    let path = scratch("roundtrip/settings.json");
    let mut cfg = Config::default();
    cfg.spinning = false;
    cfg.rotation_speed = 2.5;
    cfg.style.electron_radius = 7.0;

    cfg.save_to(&path).unwrap();
    let back = Config::load_from(&path).unwrap();
    assert_eq!(back, cfg);

    let _ = fs::remove_file(&path);
  }

  #[test]
  fn test_missing_fields_use_defaults() {
    let cfg: Config = serde_json::from_str("{\"spinning\": false}").unwrap();
    assert!(!cfg.spinning);
    assert_eq!(cfg.rotation_speed, 1.0);
    assert_eq!(cfg.style, AtomStyle::default());
  }

  #[test]
  fn test_negative_speed_sanitized() {
    let path = scratch("sanitize/settings.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{\"rotation_speed\": -3.0}").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.rotation_speed, 1.0);

    let _ = fs::remove_file(&path);
  }

  #[test]
  fn test_corrupt_file_errors() {
    let path = scratch("corrupt/settings.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "not json").unwrap();
    assert!(matches!(Config::load_from(&path), Err(PtableError::Json(_))));
    let _ = fs::remove_file(&path);
  }

  #[test]
  fn test_missing_file_errors() {
    let path = scratch("nowhere/settings.json");
    assert!(matches!(Config::load_from(&path), Err(PtableError::Io(_))));
  }

  #[test]
  fn test_spin_from_config() {
    let cfg = Config::default();
    assert_eq!(cfg.spin(), Spin::default());
  }
}
