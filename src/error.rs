// src/error.rs

use std::fmt;
use thiserror::Error;

/// Key used for a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
  Symbol(String),
  AtomicNumber(u32),
}

impl fmt::Display for Lookup {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Lookup::Symbol(s) => write!(f, "symbol '{}'", s),
      Lookup::AtomicNumber(n) => write!(f, "atomic number {}", n),
    }
  }
}

#[derive(Debug, Error)]
pub enum PtableError {
  /// No element matches the key. Callers render a not-found state.
  #[error("no element with {0}")]
  NotFound(Lookup),

  /// The dataset cannot be placed on the grid. Aborts rendering.
  #[error("cannot place {symbol}: {reason}")]
  Layout { symbol: String, reason: String },

  #[error("invalid input: {0}")]
  InvalidInput(String),

  #[error("invalid element dataset: {0}")]
  InvalidCatalog(String),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

impl PtableError {
  pub(crate) fn layout(symbol: &str, reason: impl Into<String>) -> Self {
    PtableError::Layout {
      symbol: symbol.to_string(),
      reason: reason.into(),
    }
  }

  /// True for conditions the caller is expected to recover from.
  pub fn is_recoverable(&self) -> bool {
    matches!(self, PtableError::NotFound(_) | PtableError::InvalidInput(_))
  }
}

pub type Result<T> = std::result::Result<T, PtableError>;
