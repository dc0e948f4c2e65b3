use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::OptionError;

/// Tag of an [`Option`](crate::Option) variant.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
  None,
  Some,
}

impl Variant {
  #[inline]
  pub const fn name(self) -> &'static str {
    match self {
      Variant::None => "None",
      Variant::Some => "Some",
    }
  }

  /// Number of construction arguments this variant takes.
  #[inline]
  pub const fn arity(self) -> usize {
    match self {
      Variant::None => 0,
      Variant::Some => 1,
    }
  }
}

impl Display for Variant {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Variant {
  type Err = OptionError;

  fn from_str(tag: &str) -> Result<Self, Self::Err> {
    match tag {
      "None" => Ok(Variant::None),
      "Some" => Ok(Variant::Some),
      _ => Err(OptionError::illegal_instantiation(tag)),
    }
  }
}
