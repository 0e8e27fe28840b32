use std::{array, fmt, iter::Flatten};

/// The pairs an insert pushed out of a bijection.
///
/// Inserting `(key, value)` can collide with at most two existing pairs: the one holding `key`
/// and the one holding `value`. `Evicted` is a more ergonomic alternative to
/// `(Option<(K, V)>, Option<(K, V)>)` for reporting them.
///
/// # Examples
/// ```rust
/// use bijection::{Bijection, Evicted::*};
///
/// let mut map: Bijection<u64, &str> = Bijection::new();
/// map.insert(1, "x");
/// map.insert(2, "y");
///
/// match map.insert(1, "y") {
///     Neither => { /*...*/ },
///     ByKey(key, value) => { /*...*/ },
///     ByValue(key, value) => { /*...*/ },
///     Both((k1, v1), (k2, v2)) => {
///         assert_eq!((k1, v1), (1, "x"));
///         assert_eq!((k2, v2), (2, "y"));
///     },
/// }
/// ```
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub enum Evicted<K, V> {
    /// Nothing collided with the new pair
    Neither,
    /// The pair that held the new key
    ByKey(K, V),
    /// The pair that held the new value
    ByValue(K, V),
    /// The pairs that held the new key and the new value, in that order
    Both((K, V), (K, V)),
}

use Evicted::*;

impl<K, V> Evicted<K, V> {
    /// Returns true if `self` is `Evicted::Neither` and false otherwise
    pub fn is_none(&self) -> bool {
        matches!(self, Neither)
    }

    /// Returns the negation of [`is_none`]
    ///
    /// [`is_none`]: enum.Evicted.html#method.is_none
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Returns the number of displaced pairs, between 0 and 2
    pub fn len(&self) -> usize {
        match self {
            Neither => 0,
            ByKey(..) | ByValue(..) => 1,
            Both(..) => 2,
        }
    }

    /// Returns references to the pair displaced because it held the new key
    pub fn by_key(&self) -> Option<(&K, &V)> {
        match self {
            ByKey(k, v) | Both((k, v), _) => Some((k, v)),
            _ => None,
        }
    }

    /// Returns references to the pair displaced because it held the new value
    pub fn by_value(&self) -> Option<(&K, &V)> {
        match self {
            ByValue(k, v) | Both(_, (k, v)) => Some((k, v)),
            _ => None,
        }
    }

    /// Flips every displaced pair, so evictions reported by one direction of a bijection can be
    /// read from the other.
    ///
    /// A pair displaced by key in one direction was displaced by value in the other.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Evicted;
    ///
    /// let ev: Evicted<u64, &str> = Evicted::ByKey(1, "x");
    /// assert_eq!(ev.swap(), Evicted::ByValue("x", 1));
    /// ```
    pub fn swap(self) -> Evicted<V, K> {
        match self {
            Neither => Neither,
            ByKey(k, v) => ByValue(v, k),
            ByValue(k, v) => ByKey(v, k),
            Both((k1, v1), (k2, v2)) => Both((v2, k2), (v1, k1)),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Evicted<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Neither => {
                write!(f, "Neither")
            }
            ByKey(k, v) => {
                write!(f, "ByKey( {k:?}, {v:?} )")
            }
            ByValue(k, v) => {
                write!(f, "ByValue( {k:?}, {v:?} )")
            }
            Both(by_key, by_value) => {
                write!(f, "Both( {by_key:?}, {by_value:?} )")
            }
        }
    }
}

impl<K, V> From<(Option<(K, V)>, Option<(K, V)>)> for Evicted<K, V> {
    fn from(input_pair: (Option<(K, V)>, Option<(K, V)>)) -> Self {
        match input_pair {
            (None, None) => Neither,
            (Some((k, v)), None) => ByKey(k, v),
            (None, Some((k, v))) => ByValue(k, v),
            (Some(by_key), Some(by_value)) => Both(by_key, by_value),
        }
    }
}

impl<K, V> From<Evicted<K, V>> for (Option<(K, V)>, Option<(K, V)>) {
    fn from(evicted: Evicted<K, V>) -> Self {
        match evicted {
            Neither => (None, None),
            ByKey(k, v) => (Some((k, v)), None),
            ByValue(k, v) => (None, Some((k, v))),
            Both(by_key, by_value) => (Some(by_key), Some(by_value)),
        }
    }
}

impl<K, V> IntoIterator for Evicted<K, V> {
    type Item = (K, V);
    type IntoIter = Flatten<array::IntoIter<Option<(K, V)>, 2>>;

    /// Yields the displaced pairs, the one that held the key first
    fn into_iter(self) -> Self::IntoIter {
        let (by_key, by_value): (Option<(K, V)>, Option<(K, V)>) = self.into();
        [by_key, by_value].into_iter().flatten()
    }
}
