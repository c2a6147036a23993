//! Startup logging: loading the dataset announces itself exactly once.

use std::sync::Mutex;

use log::{LevelFilter, Metadata, Record};
use ptable::model::{catalog, Catalog};

static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;

struct CaptureLogger;

impl log::Log for CaptureLogger {
  fn enabled(&self, _: &Metadata) -> bool {
    true
  }

  fn log(&self, record: &Record) {
    if let Ok(mut records) = RECORDS.lock() {
      records.push(record.args().to_string());
    }
  }

  fn flush(&self) {}
}

fn loaded_lines() -> usize {
  RECORDS
    .lock()
    .unwrap()
    .iter()
    .filter(|m| m.starts_with("Loaded "))
    .count()
}

#[test]
fn test_catalog_load_logs_once() {
  log::set_logger(&LOGGER).unwrap();
  log::set_max_level(LevelFilter::Trace);

  let cat = catalog().unwrap();
  assert_eq!(loaded_lines(), 1);

  // The shared catalog is built once; later calls stay quiet.
  assert!(std::ptr::eq(cat, catalog().unwrap()));
  assert_eq!(loaded_lines(), 1);

  Catalog::load().unwrap();
  assert_eq!(loaded_lines(), 2);
}
