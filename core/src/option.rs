use std::option::Option as StdOption;

use crate::error::OptionError;
use crate::variant::Variant;

/// Optional value: either [`Some`](Self::Some) value of type `T`, or [`None`](Self::None).
///
/// Combinators never mutate `self`; they consume it and produce a new value. Operands that are passed through (such
/// as `other` in [`and`](Self::and) or `self` in [`or`](Self::or)) are moved, never copied.
#[must_use = "this `Option` may be `None`, which should be handled"]
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Option<T> {
  None,
  Some(T),
}

impl<T> Default for Option<T> {
  #[inline]
  fn default() -> Self { Self::None }
}

// Construction

impl<T> Option<T> {
  #[inline]
  pub const fn some(value: T) -> Self { Self::Some(value) }
  #[inline]
  pub const fn none() -> Self { Self::None }

  /// Construct from a variant `tag` and its construction `args`.
  ///
  /// Fails with [`OptionError::IllegalInstantiation`] if `tag` does not name a variant, and with
  /// [`OptionError::InvalidConstruction`] if the number of `args` does not match the variant's
  /// [arity](Variant::arity).
  pub fn try_from_parts(tag: &str, args: Vec<T>) -> Result<Self, OptionError> {
    let result = Self::from_parts(tag, args);
    #[cfg(feature = "tracing")]
    if let Err(cause) = &result {
      tracing::debug!(%cause, tag, "rejected Option construction");
    }
    result
  }

  fn from_parts(tag: &str, args: Vec<T>) -> Result<Self, OptionError> {
    let variant: Variant = tag.parse()?;
    let count = args.len();
    let mut args = args.into_iter();
    match (variant, args.next(), args.next()) {
      (Variant::Some, Some(value), None) => Ok(Self::Some(value)),
      (Variant::None, None, _) => Ok(Self::None),
      _ => Err(OptionError::invalid_construction(variant, count)),
    }
  }
}

// Inspection

impl<T> Option<T> {
  #[inline]
  pub const fn is_some(&self) -> bool { matches!(self, Self::Some(_)) }
  #[inline]
  pub const fn is_none(&self) -> bool { !self.is_some() }

  #[inline]
  pub fn is_some_and(&self, f: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Self::Some(value) => f(value),
      Self::None => false,
    }
  }

  #[inline]
  pub const fn variant(&self) -> Variant {
    match self {
      Self::Some(_) => Variant::Some,
      Self::None => Variant::None,
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Option<&T> {
    match self {
      Self::Some(value) => Option::Some(value),
      Self::None => Option::None,
    }
  }
  #[inline]
  pub fn as_mut(&mut self) -> Option<&mut T> {
    match self {
      Self::Some(value) => Option::Some(value),
      Self::None => Option::None,
    }
  }
}

// Extraction

impl<T> Option<T> {
  /// Returns the contained value.
  ///
  /// # Panics
  ///
  /// Panics with the [`OptionError::IllegalUnwrap`] message if `self` is `None`. Use [`try_unwrap`](Self::try_unwrap),
  /// [`unwrap_or`](Self::unwrap_or), or [`unwrap_or_else`](Self::unwrap_or_else) when absence is expected.
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => unwrap_failed(),
    }
  }

  #[inline]
  pub fn try_unwrap(self) -> Result<T, OptionError> {
    match self {
      Self::Some(value) => Ok(value),
      Self::None => Err(OptionError::IllegalUnwrap),
    }
  }

  /// Returns the contained value, or panics with `message` if `self` is `None`.
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => panic!("{message}"),
    }
  }

  #[inline]
  pub fn unwrap_or(self, fallback: T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => fallback,
    }
  }

  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
    match self {
      Self::Some(value) => value,
      Self::None => f(),
    }
  }

  #[inline]
  pub fn unwrap_or_default(self) -> T where
    T: Default
  {
    self.unwrap_or_else(T::default)
  }
}

#[cold]
#[track_caller]
fn unwrap_failed() -> ! {
  let cause = OptionError::IllegalUnwrap;
  #[cfg(feature = "tracing")]
  tracing::error!(%cause, "unwrap called on None");
  panic!("{cause}")
}

// Mapping

impl<T> Option<T> {
  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
    match self {
      Self::Some(value) => Option::Some(f(value)),
      Self::None => Option::None,
    }
  }

  #[inline]
  pub fn map_or<U>(self, fallback: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Some(value) => f(value),
      Self::None => fallback,
    }
  }

  /// Applies `some` to the contained value, or computes a fallback with `none`. Exactly one of the two is invoked.
  #[inline]
  pub fn map_or_else<U>(self, none: impl FnOnce() -> U, some: impl FnOnce(T) -> U) -> U {
    match self {
      Self::Some(value) => some(value),
      Self::None => none(),
    }
  }
}

// Boolean-style combination

impl<T> Option<T> {
  /// Returns `None` if `self` is `None`, otherwise returns `other` as is.
  ///
  /// `other` is evaluated eagerly; use [`and_then`](Self::and_then) to defer its construction.
  #[inline]
  pub fn and<U>(self, other: Option<U>) -> Option<U> {
    match self {
      Self::Some(_) => other,
      Self::None => Option::None,
    }
  }

  /// Returns `None` if `self` is `None`, otherwise calls `f` with the contained value and returns its result.
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
    match self {
      Self::Some(value) => f(value),
      Self::None => Option::None,
    }
  }

  /// Returns `self` if it contains a value for which `predicate` holds, otherwise `None`.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    if let Self::Some(value) = &self {
      if predicate(value) {
        return self;
      }
    }
    Self::None
  }

  /// Returns `self` if it contains a value, otherwise returns `other` as is.
  ///
  /// `other` is evaluated eagerly; use [`or_else`](Self::or_else) to defer its construction.
  #[inline]
  pub fn or(self, other: Self) -> Self {
    match self {
      Self::Some(_) => self,
      Self::None => other,
    }
  }

  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
    match self {
      Self::Some(_) => self,
      Self::None => f(),
    }
  }

  /// Returns whichever of `self` and `other` contains a value if exactly one of them does, otherwise `None`.
  #[inline]
  pub fn xor(self, other: Self) -> Self {
    match (self, other) {
      (some @ Self::Some(_), Self::None) => some,
      (Self::None, some @ Self::Some(_)) => some,
      _ => Self::None,
    }
  }

  #[inline]
  pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
    match (self, other) {
      (Self::Some(a), Option::Some(b)) => Option::Some((a, b)),
      _ => Option::None,
    }
  }
}

impl<T> Option<Option<T>> {
  /// Removes one level of nesting. Both `Some(None)` and `None` flatten to `None`.
  #[inline]
  pub fn flatten(self) -> Option<T> {
    self.and_then(|inner| inner)
  }
}

// Conversions

impl<T> From<StdOption<T>> for Option<T> {
  #[inline]
  fn from(option: StdOption<T>) -> Self {
    match option {
      Some(value) => Self::Some(value),
      None => Self::None,
    }
  }
}

impl<T> From<Option<T>> for StdOption<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Option::Some(value) => Some(value),
      Option::None => None,
    }
  }
}
