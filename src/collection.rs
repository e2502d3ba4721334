// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Indexable views over the objects of one category.
//!
//! A [`Collection`] knows how many objects its category holds once it has
//! asked the device (one `Get` request, cached by the session). Indexing is
//! 0-based while device ids are 1-based: index `i` is object `i + 1`.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Range;

use crate::device::Ipx800;
use crate::error::{IndexError, Result};
use crate::object::{Kind, Object};
use crate::protocol::{HttpClient, Protocol};
use crate::types::Category;

/// A value usable as a collection index.
///
/// Implemented for every primitive integer (negative values are invalid) and
/// for strings holding a decimal integer.
pub trait CollectionIndex {
    /// Converts the index to a 0-based position.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Invalid` if the value is not a non-negative
    /// integer.
    fn to_position(&self) -> std::result::Result<usize, IndexError>;
}

macro_rules! integer_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl CollectionIndex for $t {
                fn to_position(&self) -> std::result::Result<usize, IndexError> {
                    usize::try_from(*self).map_err(|_| IndexError::Invalid(self.to_string()))
                }
            }
        )*
    };
}

integer_index!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl CollectionIndex for str {
    fn to_position(&self) -> std::result::Result<usize, IndexError> {
        self.parse()
            .map_err(|_| IndexError::Invalid(format!("{self:?}")))
    }
}

impl CollectionIndex for String {
    fn to_position(&self) -> std::result::Result<usize, IndexError> {
        self.as_str().to_position()
    }
}

impl<T: CollectionIndex + ?Sized> CollectionIndex for &T {
    fn to_position(&self) -> std::result::Result<usize, IndexError> {
        (**self).to_position()
    }
}

/// The objects of kind `K` on a controller.
///
/// # Examples
///
/// ```no_run
/// use ipx800_lib::Ipx800;
///
/// # fn example() -> ipx800_lib::Result<()> {
/// let ipx = Ipx800::new("http://192.168.1.50")?;
/// let relays = ipx.relays();
///
/// let first = relays.get(0)?;
/// assert_eq!(first.id(), 1);
///
/// for relay in relays.slice(0, 8, 2)? {
///     relay.off()?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct Collection<'a, K, P = HttpClient> {
    device: &'a Ipx800<P>,
    kind: PhantomData<fn() -> K>,
}

impl<'a, K: Kind, P: Protocol> Collection<'a, K, P> {
    pub(crate) fn new(device: &'a Ipx800<P>) -> Self {
        Self {
            device,
            kind: PhantomData,
        }
    }

    /// Returns the category of the objects.
    #[must_use]
    pub fn category(&self) -> Category {
        K::CATEGORY
    }

    /// Returns the number of objects.
    ///
    /// The first call asks the device; later calls reuse the answer.
    ///
    /// # Errors
    ///
    /// Returns error if the probing request fails.
    pub fn len(&self) -> Result<usize> {
        self.device.category_len(K::CATEGORY)
    }

    /// Returns `true` if the device reports no object of this kind.
    ///
    /// # Errors
    ///
    /// Returns error if the probing request fails.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Returns the object at 0-based `index`.
    ///
    /// An invalid index is rejected before any request is made.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::Invalid` for a negative or non-integer index,
    /// `IndexError::OutOfRange` when `index >= len()`, or the error of the
    /// probing request.
    pub fn get<I: CollectionIndex>(&self, index: I) -> Result<Object<'a, K, P>> {
        let index = index.to_position()?;
        let len = self.len()?;
        if index >= len {
            return Err(IndexError::OutOfRange { index, len }.into());
        }
        Ok(Object::new(self.device, index + 1))
    }

    /// Returns the objects at positions `start, start + step, ...` below
    /// `stop`.
    ///
    /// Positions are not checked against the device object count and no
    /// request is made.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::ZeroStep` if `step` is zero.
    pub fn slice(&self, start: usize, stop: usize, step: usize) -> Result<Vec<Object<'a, K, P>>> {
        if step == 0 {
            return Err(IndexError::ZeroStep.into());
        }
        Ok((start..stop)
            .step_by(step)
            .map(|k| Object::new(self.device, k + 1))
            .collect())
    }

    /// Iterates over every object, in id order.
    ///
    /// # Errors
    ///
    /// Returns error if the probing request fails.
    pub fn iter(&self) -> Result<Iter<'a, K, P>> {
        Ok(Iter {
            device: self.device,
            positions: 0..self.len()?,
            kind: PhantomData,
        })
    }
}

impl<K, P> Clone for Collection<'_, K, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, P> Copy for Collection<'_, K, P> {}

impl<K: Kind, P> fmt::Debug for Collection<'_, K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("category", &K::CATEGORY)
            .finish_non_exhaustive()
    }
}

/// Iterator over the objects of a [`Collection`].
pub struct Iter<'a, K, P = HttpClient> {
    device: &'a Ipx800<P>,
    positions: Range<usize>,
    kind: PhantomData<fn() -> K>,
}

impl<'a, K: Kind, P: Protocol> Iterator for Iter<'a, K, P> {
    type Item = Object<'a, K, P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.positions
            .next()
            .map(|k| Object::new(self.device, k + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<K: Kind, P: Protocol> DoubleEndedIterator for Iter<'_, K, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.positions
            .next_back()
            .map(|k| Object::new(self.device, k + 1))
    }
}

impl<K: Kind, P: Protocol> ExactSizeIterator for Iter<'_, K, P> {}

impl<K: Kind, P> fmt::Debug for Iter<'_, K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("category", &K::CATEGORY)
            .field("positions", &self.positions)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::protocol::testing::FakeProtocol;

    fn relays_body(count: usize) -> String {
        let values: Vec<String> = (1..=count).map(|i| format!("\"R{i}\":0")).collect();
        format!(
            r#"{{"product":"IPX800_V4","status":"Success",{}}}"#,
            values.join(",")
        )
    }

    #[test]
    fn integer_positions() {
        assert_eq!(5_u8.to_position(), Ok(5));
        assert_eq!(7_i64.to_position(), Ok(7));
        assert_eq!(0_isize.to_position(), Ok(0));
        assert!(matches!((-1_i32).to_position(), Err(IndexError::Invalid(_))));
    }

    #[test]
    fn string_positions() {
        assert_eq!("12".to_position(), Ok(12));
        assert_eq!(String::from("3").to_position(), Ok(3));
        assert_eq!(
            "abc".to_position(),
            Err(IndexError::Invalid("\"abc\"".to_string()))
        );
        assert!("-2".to_position().is_err());
        assert!("1.5".to_position().is_err());
    }

    #[test]
    fn len_is_cached() {
        let ipx = Ipx800::from_protocol(FakeProtocol::replying(relays_body(56)));
        let relays = ipx.relays();
        assert_eq!(relays.len().unwrap(), 56);
        assert_eq!(relays.len().unwrap(), 56);
        assert!(!relays.is_empty().unwrap());
        assert_eq!(ipx.protocol().request_count(), 1);
    }

    #[test]
    fn get_maps_index_to_id() {
        let ipx = Ipx800::from_protocol(FakeProtocol::replying(relays_body(56)));
        assert_eq!(ipx.relays().get(0).unwrap().id(), 1);
        assert_eq!(ipx.relays().get(55).unwrap().id(), 56);
        assert_eq!(ipx.relays().get("5").unwrap().id(), 6);
    }

    #[test]
    fn get_out_of_range_probes_once() {
        let ipx = Ipx800::from_protocol(FakeProtocol::replying(relays_body(56)));
        let err = ipx.relays().get(998).unwrap_err();
        assert!(matches!(
            err,
            Error::Index(IndexError::OutOfRange { index: 998, len: 56 })
        ));
        assert_eq!(ipx.protocol().request_count(), 1);
        assert!(ipx.relays().get(56).is_err());
        assert_eq!(ipx.protocol().request_count(), 1);
    }

    #[test]
    fn invalid_index_makes_no_request() {
        let ipx = Ipx800::from_protocol(FakeProtocol::replying(relays_body(56)));
        let err = ipx.relays().get("abc").unwrap_err();
        assert!(matches!(err, Error::Index(IndexError::Invalid(_))));
        assert!(ipx.relays().get(-3).is_err());
        assert_eq!(ipx.protocol().request_count(), 0);
    }

    #[test]
    fn slice_is_not_bounds_checked() {
        let ipx = Ipx800::from_protocol(FakeProtocol::replying(relays_body(4)));
        let ids: Vec<usize> = ipx
            .relays()
            .slice(2, 11, 3)
            .unwrap()
            .iter()
            .map(Object::id)
            .collect();
        assert_eq!(ids, [3, 6, 9]);
        assert_eq!(ipx.protocol().request_count(), 0);
    }

    #[test]
    fn slice_edge_cases() {
        let ipx = Ipx800::from_protocol(FakeProtocol::replying(relays_body(4)));
        assert!(ipx.relays().slice(5, 2, 1).unwrap().is_empty());
        assert!(matches!(
            ipx.relays().slice(0, 4, 0),
            Err(Error::Index(IndexError::ZeroStep))
        ));
    }

    #[test]
    fn iter_yields_every_id() {
        let ipx = Ipx800::from_protocol(FakeProtocol::replying(relays_body(56)));
        let iter = ipx.relays().iter().unwrap();
        assert_eq!(iter.len(), 56);
        let ids: Vec<usize> = iter.map(|relay| relay.id()).collect();
        assert_eq!(ids, (1..=56).collect::<Vec<_>>());
        assert_eq!(ipx.relays().iter().unwrap().next_back().unwrap().id(), 56);
        assert_eq!(ipx.protocol().request_count(), 1);
    }

    #[test]
    fn empty_category() {
        let ipx = Ipx800::from_protocol(FakeProtocol::replying(
            r#"{"product":"IPX800_V4","status":"Success"}"#,
        ));
        assert!(ipx.thl_extensions().is_empty().unwrap());
        assert_eq!(ipx.thl_extensions().iter().unwrap().count(), 0);
        assert!(ipx.thl_extensions().get(0).is_err());
    }

    #[test]
    fn debug_names_category() {
        let ipx = Ipx800::from_protocol(FakeProtocol::default());
        let rendered = format!("{:?}", ipx.counters());
        assert!(rendered.contains("Counter"));
    }
}
