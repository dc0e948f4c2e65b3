use thiserror::Error;

use crate::variant::Variant;

/// Failures of the option algebra. Only [`IllegalUnwrap`](Self::IllegalUnwrap) is reachable through the combinators;
/// the other two are raised by [`Option::try_from_parts`](crate::Option::try_from_parts).
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
pub enum OptionError {
  #[error("Option must be an instance of Some or None")]
  IllegalInstantiation { tag: String },
  #[error("tried to unwrap on None")]
  IllegalUnwrap,
  #[error("{variant} should be constructed with {expected} argument(s), but got {count}")]
  InvalidConstruction { variant: Variant, expected: usize, count: usize },
}

impl OptionError {
  #[inline]
  pub fn illegal_instantiation(tag: impl Into<String>) -> Self {
    Self::IllegalInstantiation { tag: tag.into() }
  }
  #[inline]
  pub fn invalid_construction(variant: Variant, count: usize) -> Self {
    Self::InvalidConstruction { variant, expected: variant.arity(), count }
  }
}
