use std::iter::FusedIterator;
use std::option::Option as StdOption;

use crate::option::Option;

impl<T> Option<T> {
  /// Iterator over the contained value, yielding one item for `Some` and none for `None`.
  #[inline]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter { inner: self.as_ref().into() }
  }
}

/// Borrowing iterator created by [`Option::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
  inner: StdOption<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> StdOption<Self::Item> { self.inner.take() }

  #[inline]
  fn size_hint(&self) -> (usize, StdOption<usize>) {
    let len = self.len();
    (len, Some(len))
  }
}
impl<T> DoubleEndedIterator for Iter<'_, T> {
  #[inline]
  fn next_back(&mut self) -> StdOption<Self::Item> { self.inner.take() }
}
impl<T> ExactSizeIterator for Iter<'_, T> {
  #[inline]
  fn len(&self) -> usize { usize::from(self.inner.is_some()) }
}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator created by [`IntoIterator`] on [`Option`].
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
  inner: StdOption<T>,
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> StdOption<T> { self.inner.take() }

  #[inline]
  fn size_hint(&self) -> (usize, StdOption<usize>) {
    let len = self.len();
    (len, Some(len))
  }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
  #[inline]
  fn next_back(&mut self) -> StdOption<T> { self.inner.take() }
}
impl<T> ExactSizeIterator for IntoIter<T> {
  #[inline]
  fn len(&self) -> usize { usize::from(self.inner.is_some()) }
}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Option<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  #[inline]
  fn into_iter(self) -> IntoIter<T> {
    IntoIter { inner: self.into() }
  }
}

impl<'a, T> IntoIterator for &'a Option<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Iter<'a, T> { self.iter() }
}
