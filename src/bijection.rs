use std::{
    borrow::Borrow,
    collections::HashMap,
    fmt,
    hash::{BuildHasher, Hash},
    iter::FusedIterator,
    marker::PhantomData,
    ops::Index,
};

use hashbrown::{
    hash_map::DefaultHashBuilder,
    raw::{RawDrain, RawIntoIter, RawIter},
};
use log::debug;

use crate::{
    error::BijectionError,
    evicted::Evicted,
    inverse::{Inverse, InverseMut},
    utils::*,
};

/// A hash map that is one-to-one in both directions.
///
/// A [`Bijection`] pairs every key with exactly one value and every value with exactly one key.
/// Lookups, inserts, and removals cost the same as they would in a traditional [`HashMap`] from
/// either side, and every element is stored only once.
///
/// It is implemented using two sets, a "forward" set of keys and a "backward" set of values. On
/// insert, the given pair is split. The key is stored in the forward set along with the hash of
/// its value, likewise for the value. Both halves also carry a pairing id, so a companion is
/// always found by hash *and* id even when hashes collide. As such, both types need to implement
/// [`Eq`] and [`Hash`], and as with other hashed collections, it is a logic error for an item to
/// be modified in such a way that its hash or its equality changes while it is in the map.
///
/// Inserting a pair whose key or value is already present evicts the old pair(s), which are
/// returned as an [`Evicted`]. The reverse direction is available as a live view through
/// [`inverse`] and [`inverse_mut`].
///
/// # Examples
/// ```
/// use bijection::Bijection;
///
/// let mut map: Bijection<&str, u64> = Bijection::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
///
/// assert_eq!(map.get("a"), Some(&1));
/// assert_eq!(map.inverse().get(&2), Some(&"b"));
/// assert_eq!(map.len(), 2);
///
/// // "a" takes over 2, pushing out both ("a", 1) and ("b", 2)
/// map.insert("a", 2);
/// assert_eq!(map.len(), 1);
/// assert!(!map.contains_key("b"));
/// assert!(!map.contains_value(&1));
///
/// // Mutations through the inverse view are seen by the map
/// map.inverse_mut().remove(&2);
/// assert!(map.is_empty());
/// ```
///
/// [`inverse`]: struct.Bijection.html#method.inverse
/// [`inverse_mut`]: struct.Bijection.html#method.inverse_mut
pub struct Bijection<A, B, St = DefaultHashBuilder> {
    pub(crate) hash_builder: St,
    pub(crate) counter: u64,
    pub(crate) forward: PairTable<A>,
    pub(crate) backward: PairTable<B>,
}

impl<A, B> Bijection<A, B, DefaultHashBuilder> {
    #[inline]
    /// Creates a new, empty `Bijection`.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    /// let map: Bijection<u64, String> = Bijection::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    /// Creates a new, empty `Bijection` whose inner sets each have at least the given capacity
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    /// let map: Bijection<u64, String> = Bijection::with_capacity(100);
    /// assert!(map.capacity() >= 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<A, B, S> Bijection<A, B, S>
where
    A: Eq + Hash,
    B: Eq + Hash,
    S: BuildHasher + Default,
{
    /// Builds a `Bijection` from pairs that must already be one-to-one.
    ///
    /// Unlike collecting into a `Bijection`, where later pairs silently evict earlier ones, this
    /// fails on the first pair that shares a key or a value with an earlier, different pair. An
    /// exact repeat of an earlier pair is not ambiguous and is accepted.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::{Bijection, BijectionError};
    ///
    /// let map: Bijection<&str, u64> = Bijection::try_from_pairs([("a", 1), ("b", 2)]).unwrap();
    /// assert_eq!(map.len(), 2);
    ///
    /// let err = Bijection::<&str, u64>::try_from_pairs([("a", 1), ("a", 2)]).unwrap_err();
    /// assert_eq!(err, BijectionError::DuplicateKey { index: 1 });
    ///
    /// let err = Bijection::<&str, u64>::try_from_pairs([("a", 1), ("b", 1)]).unwrap_err();
    /// assert_eq!(err, BijectionError::DuplicateValue { index: 1 });
    /// ```
    pub fn try_from_pairs<I>(iter: I) -> Result<Self, BijectionError>
    where
        I: IntoIterator<Item = (A, B)>,
    {
        let iter = iter.into_iter();
        let mut digest = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        for (index, (left, right)) in iter.enumerate() {
            digest.insert_unique(left, right, index)?;
        }
        Ok(digest)
    }
}

impl<A, B, S> Bijection<A, B, S>
where
    A: Eq + Hash,
    B: Eq + Hash,
    S: BuildHasher,
{
    /// Adds a pair of items to the map.
    ///
    /// Should the key already be paired, that pair is removed from both sides. The same goes for
    /// the value. The removed pairs are returned; at most two pairs are ever displaced.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::{Bijection, Evicted::*};
    ///
    /// let mut map: Bijection<u64, String> = (0..5).map(|i| (i, i.to_string())).collect();
    ///
    /// // Neither 5 nor "5" is in map
    /// let ev = map.insert(5, 5.to_string());
    /// assert_eq!(ev, Neither);
    ///
    /// // 0 is in the map, its old pairing is removed
    /// let ev = map.insert(0, 6.to_string());
    /// assert_eq!(ev, ByKey(0, 0.to_string()));
    ///
    /// // "1" is in the map, its old pairing is removed
    /// let ev = map.insert(7, 1.to_string());
    /// assert_eq!(ev, ByValue(1, 1.to_string()));
    ///
    /// // Both 2 and "3" are in the map, so their old pairings are removed
    /// let ev = map.insert(2, 3.to_string());
    /// assert_eq!(ev, Both((2, 2.to_string()), (3, 3.to_string())));
    /// ```
    pub fn insert(&mut self, key: A, value: B) -> Evicted<A, B> {
        insert_pair(
            &self.hash_builder,
            &mut self.counter,
            &mut self.forward,
            &mut self.backward,
            key,
            value,
        )
    }

    // Inserts a pair only if neither half is paired with something else
    pub(crate) fn insert_unique(
        &mut self,
        key: A,
        value: B,
        index: usize,
    ) -> Result<(), BijectionError> {
        if let Some(paired) = self.get(&key) {
            if *paired == value {
                return Ok(());
            }
            debug!("rejecting pair {index}: its key is already paired");
            return Err(BijectionError::DuplicateKey { index });
        }
        if self.contains_value(&value) {
            debug!("rejecting pair {index}: its value is already paired");
            return Err(BijectionError::DuplicateValue { index });
        }
        self.insert(key, value);
        Ok(())
    }

    /// Gets a reference to the value paired with the given key.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    /// let mut map = Bijection::new();
    /// map.insert(1, "1");
    /// assert_eq!(map.get(&1), Some(&"1"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&B>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Gets references to the stored key and its paired value.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&A, &B)>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        get_pair(&self.hash_builder, &self.forward, &self.backward, key)
    }

    /// Like [`get`], but reports a missing key as [`BijectionError::KeyNotFound`].
    ///
    /// # Examples
    /// ```rust
    /// use bijection::{Bijection, BijectionError};
    /// let mut map = Bijection::new();
    /// map.insert("a", 1);
    /// assert_eq!(map.try_get("a"), Ok(&1));
    /// assert_eq!(map.try_get("b"), Err(BijectionError::KeyNotFound));
    /// ```
    ///
    /// [`get`]: struct.Bijection.html#method.get
    pub fn try_get<Q>(&self, key: &Q) -> Result<&B, BijectionError>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(BijectionError::KeyNotFound)
    }

    /// Gets a reference to the key paired with the given value.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    /// let mut map = Bijection::new();
    /// map.insert(1, "1");
    /// assert_eq!(map.get_by_value(&"1"), Some(&1));
    /// assert_eq!(map.get_by_value(&"2"), None);
    /// ```
    pub fn get_by_value<Q>(&self, value: &Q) -> Option<&A>
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        get_pair(&self.hash_builder, &self.backward, &self.forward, value).map(|(_, k)| k)
    }

    /// Returns `true` if the key is in the map and `false` otherwise.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        contains(&self.hash_builder, &self.forward, key)
    }

    /// Returns `true` if the value is in the map and `false` otherwise.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let mut map = Bijection::new();
    /// map.insert(1, "1");
    /// assert!(map.contains_value(&"1"));
    /// assert!(!map.contains_value(&"2"));
    /// ```
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        contains(&self.hash_builder, &self.backward, value)
    }

    /// Determines if two items are paired with one another
    ///
    /// Returns false if either item isn't in the map.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let map: Bijection<String, u64> = Bijection::try_from_pairs([("a".to_string(), 1)]).unwrap();
    /// assert!(map.are_paired("a", &1));
    /// assert!(!map.are_paired("a", &2));
    /// ```
    pub fn are_paired<Q, R>(&self, key: &Q, value: &R) -> bool
    where
        A: Borrow<Q>,
        B: Borrow<R>,
        Q: Hash + Eq + ?Sized,
        R: Hash + Eq + ?Sized,
    {
        self.get(key)
            .map_or(false, |paired| <B as Borrow<R>>::borrow(paired) == value)
    }

    /// Removes a key from the map along with its paired value, returning the value.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let mut map = Bijection::new();
    /// map.insert(1, "1");
    /// assert_eq!(map.remove(&1), Some("1"));
    /// assert_eq!(map.remove(&1), None);
    /// assert!(!map.contains_value(&"1"));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<B>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and its paired value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(A, B)>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        remove_pair(&self.hash_builder, &mut self.forward, &mut self.backward, key)
    }

    /// Like [`remove`], but reports a missing key as [`BijectionError::KeyNotFound`]. The map is
    /// left untouched on failure.
    ///
    /// [`remove`]: struct.Bijection.html#method.remove
    pub fn try_remove<Q>(&mut self, key: &Q) -> Result<B, BijectionError>
    where
        A: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key).ok_or(BijectionError::KeyNotFound)
    }

    /// Removes a value from the map along with its paired key, returning the key.
    ///
    /// This is the same as `self.inverse_mut().remove(value)`.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let mut map = Bijection::new();
    /// map.insert(1, "1");
    /// assert_eq!(map.remove_by_value(&"1"), Some(1));
    /// assert!(!map.contains_key(&1));
    /// ```
    pub fn remove_by_value<Q>(&mut self, value: &Q) -> Option<A>
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        remove_pair(&self.hash_builder, &mut self.backward, &mut self.forward, value)
            .map(|(_, k)| k)
    }

    /// Like [`remove_by_value`], but reports a missing value as
    /// [`BijectionError::KeyNotFound`].
    ///
    /// [`remove_by_value`]: struct.Bijection.html#method.remove_by_value
    pub fn try_remove_by_value<Q>(&mut self, value: &Q) -> Result<A, BijectionError>
    where
        B: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_by_value(value)
            .ok_or(BijectionError::KeyNotFound)
    }

    /// Returns an iterator over the pairs in the map, in arbitrary order.
    ///
    /// The inverse view walks the same set, so both directions agree on the order.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let map: Bijection<u64, String> = (0..5).map(|i| (i, i.to_string())).collect();
    ///
    /// for (key, value) in map.iter() {
    ///     assert_eq!(key.to_string(), *value);
    /// }
    /// assert!(map.iter().zip(map.inverse().iter()).all(|((a, b), (c, d))| a == d && b == c));
    /// ```
    pub fn iter(&self) -> Iter<'_, A, B> {
        self.pairs()
    }

    /// Retains only the pairs for which the predicate returns `true`. Pairs are visited in an
    /// arbitrary order.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let mut map: Bijection<u64, String> = (0..100).map(|i| (i, i.to_string())).collect();
    /// map.retain(|x, _| x % 2 == 0);
    /// assert_eq!(map.len(), 50);
    /// assert!(!map.contains_value("1"));
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&A, &B) -> bool,
    {
        // Erasing the bucket being visited is fine for a `RawIter`, and the backward set is not
        // being iterated.
        unsafe {
            for bucket in self.forward.iter() {
                let pairing = bucket.as_ref();
                let companion = match self.backward.find(pairing.hash, just_id(pairing.id)) {
                    Some(c) => c,
                    None => continue,
                };
                if !f(&pairing.value, &companion.as_ref().value) {
                    self.backward.erase(companion);
                    self.forward.erase(bucket);
                }
            }
        }
    }

    /// Clears the map, returning all pairs as an iterator while keeping the backing memory
    /// allocated for reuse. If the returned iterator is dropped before being fully consumed, it
    /// drops the remaining pairs.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let mut map = Bijection::new();
    /// map.insert(1, "1");
    /// map.insert(2, "2");
    /// let cap = map.capacity();
    ///
    /// for (k, v) in map.drain().take(1) {
    ///     assert!(k == 1 || k == 2);
    ///     assert!(v == "1" || v == "2");
    /// }
    ///
    /// assert!(map.is_empty());
    /// assert!(map.inverse().is_empty());
    /// assert_eq!(map.capacity(), cap);
    /// ```
    pub fn drain(&mut self) -> Drain<'_, A, B> {
        Drain {
            forward_iter: self.forward.drain(),
            backward: &mut self.backward,
        }
    }

    /// Reserves capacity for at least `additional` more pairs. The collection may reserve more
    /// space to avoid frequent reallocations.
    ///
    /// # Panics
    /// Panics if the new allocation size overflows usize.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    /// let mut map: Bijection<&str, i32> = Bijection::new();
    /// map.reserve(10);
    /// assert!(map.capacity() >= 10);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.forward
            .reserve(additional, make_hasher(&self.hash_builder));
        self.backward
            .reserve(additional, make_hasher(&self.hash_builder));
    }

    /// Shrinks the capacity of the map with a lower limit. It will drop down no lower than the
    /// supplied limit while maintaining the internal rules and possibly leaving some space in
    /// accordance with the resize policy.
    ///
    /// This function does nothing if the current capacity is smaller than the supplied minimum
    /// capacity.
    pub fn shrink_to(&mut self, min_capacity: usize) {
        self.forward
            .shrink_to(min_capacity, make_hasher(&self.hash_builder));
        self.backward
            .shrink_to(min_capacity, make_hasher(&self.hash_builder));
    }

    /// Shrinks the capacity of the map as much as possible.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let mut map: Bijection<i32, i32> = Bijection::with_capacity(100);
    /// map.insert(1, 2);
    /// map.insert(3, 4);
    /// assert!(map.capacity() >= 100);
    /// map.shrink_to_fit();
    /// assert!(map.capacity() >= 2);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.shrink_to(self.len());
    }

    /// Returns a read-only view of the map in the other direction.
    ///
    /// The view shares the map's storage; nothing is copied.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let map: Bijection<&str, u64> = [("a", 1), ("b", 2)].into();
    /// let inv = map.inverse();
    /// assert_eq!(inv.get(&2), Some(&"b"));
    /// assert!(std::ptr::eq(inv.inverse(), &map));
    /// ```
    pub fn inverse(&self) -> Inverse<'_, A, B, S> {
        Inverse::new(self)
    }

    /// Returns a mutable view of the map in the other direction. Mutations through the view are
    /// mutations of this map.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let mut map: Bijection<&str, u64> = [("a", 1), ("b", 2)].into();
    /// map.inverse_mut().insert(3, "c");
    /// assert_eq!(map.get("c"), Some(&3));
    ///
    /// map.inverse_mut().remove(&1);
    /// assert_eq!(map.get("a"), None);
    /// ```
    pub fn inverse_mut(&mut self) -> InverseMut<'_, A, B, S> {
        InverseMut::new(self)
    }
}

impl<A, B, S> Clone for Bijection<A, B, S>
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        Self {
            forward: self.forward.clone(),
            backward: self.backward.clone(),
            counter: self.counter,
            hash_builder: self.hash_builder.clone(),
        }
    }
}

impl<A, B, S> Default for Bijection<A, B, S>
where
    S: Default,
{
    fn default() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<A, B, S> fmt::Debug for Bijection<A, B, S>
where
    A: Hash + Eq + fmt::Debug,
    B: Hash + Eq + fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_map().entries(self.iter()).finish()
    }
}

impl<A, B, S> PartialEq<Bijection<A, B, S>> for Bijection<A, B, S>
where
    A: Hash + Eq,
    B: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.are_paired(k, v))
    }
}

impl<A, B, S> Eq for Bijection<A, B, S>
where
    A: Hash + Eq,
    B: Hash + Eq,
    S: BuildHasher,
{
}

impl<A, B, S, Q> Index<&Q> for Bijection<A, B, S>
where
    A: Eq + Hash + Borrow<Q>,
    B: Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Output = B;

    /// Returns a reference to the value paired with the supplied key.
    ///
    /// # Panics
    /// Panics if the key is not present in the `Bijection`.
    fn index(&self, key: &Q) -> &B {
        self.get(key).expect("no entry found for key")
    }
}

impl<A, B, S> Bijection<A, B, S> {
    /// Creates an empty `Bijection` that uses the given hasher.
    ///
    /// Warning: `hash_builder` is normally randomly generated, and is designed to allow
    /// `Bijection`s to be resistant to attacks that cause many collisions and very poor
    /// performance. Setting it manually using this function can expose a DoS attack vector.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let s = RandomState::new();
    /// let mut map = Bijection::with_hasher(s);
    /// map.insert(1, "1");
    /// ```
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self {
            hash_builder,
            counter: 0,
            forward: PairTable::new(),
            backward: PairTable::new(),
        }
    }

    /// Creates a `Bijection` with inner sets that have at least the specified capacity, and that
    /// uses the given hasher.
    ///
    /// The map will be able to hold at least `capacity` many pairs before reallocating.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let s = RandomState::new();
    /// let mut map = Bijection::with_capacity_and_hasher(10, s);
    /// map.insert(1, "1");
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            hash_builder,
            counter: 0,
            forward: PairTable::with_capacity(capacity),
            backward: PairTable::with_capacity(capacity),
        }
    }

    /// Returns a reference to the [`BuildHasher`] used by the map
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns the number of pairs the map can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.forward.capacity().min(self.backward.capacity())
    }

    /// Returns the number of pairs in the map
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let mut map = Bijection::new();
    /// assert_eq!(map.len(), 0);
    /// map.insert(1, "1");
    /// map.insert(2, "2");
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        // The size of the sets is always equal
        self.forward.len()
    }

    /// Returns true if no pairs are in the map and false otherwise
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all pairs from the map while keeping the backing memory allocated for reuse.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let mut map = Bijection::new();
    /// map.insert(1, "a");
    /// assert!(!map.is_empty());
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.forward.clear();
        self.backward.clear();
    }

    /// Returns an iterator over the keys of the map, in the same order as [`iter`].
    ///
    /// [`iter`]: struct.Bijection.html#method.iter
    pub fn keys(&self) -> Keys<'_, A, B> {
        Keys { inner: self.pairs() }
    }

    /// Returns an iterator over the values of the map, in the same order as [`iter`].
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let map: Bijection<u64, String> = (0..20).map(|i| (i, i.to_string())).collect();
    /// assert!(map.keys().zip(map.values()).all(|(k, v)| map.are_paired(k, v)));
    /// ```
    ///
    /// [`iter`]: struct.Bijection.html#method.iter
    pub fn values(&self) -> Values<'_, A, B> {
        Values { inner: self.pairs() }
    }

    // Walks the forward set, following each key to its value
    fn pairs(&self) -> Iter<'_, A, B> {
        Iter {
            forward_iter: unsafe { self.forward.iter() },
            backward: &self.backward,
            marker: PhantomData,
        }
    }

    /// Consumes the map and returns it with its keys and values trading places.
    ///
    /// This is O(1): the two sets are swapped, nothing is rehashed.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let map: Bijection<&str, u64> = [("a", 1), ("b", 2)].into();
    /// let inv: Bijection<u64, &str> = map.into_inverse();
    /// assert_eq!(inv.get(&1), Some(&"a"));
    /// assert_eq!(inv.get_by_value("b"), Some(&2));
    /// ```
    pub fn into_inverse(self) -> Bijection<B, A, S> {
        Bijection {
            hash_builder: self.hash_builder,
            counter: self.counter,
            forward: self.backward,
            backward: self.forward,
        }
    }
}

impl<A, B, S> Extend<(A, B)> for Bijection<A, B, S>
where
    A: Hash + Eq,
    B: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts every pair in turn, so later pairs evict earlier ones they collide with.
    #[inline]
    fn extend<T: IntoIterator<Item = (A, B)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<A, B, S> FromIterator<(A, B)> for Bijection<A, B, S>
where
    A: Hash + Eq,
    B: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Collects pairs with the same last-pair-wins rule as [`Bijection::insert`]. Use
    /// [`Bijection::try_from_pairs`] to reject colliding input instead.
    ///
    /// # Examples
    /// ```rust
    /// use bijection::Bijection;
    ///
    /// let map: Bijection<u64, u64> = [(1, 1), (1, 2), (1, 3)].into_iter().collect();
    /// assert_eq!(map.get(&1), Some(&3));
    ///
    /// let map: Bijection<u64, u64> = [(1, 1), (2, 1), (3, 1)].into_iter().collect();
    /// assert_eq!(map.get_by_value(&1), Some(&3));
    /// assert_eq!(map.len(), 1);
    /// ```
    fn from_iter<T: IntoIterator<Item = (A, B)>>(iter: T) -> Self {
        let mut digest = Bijection::default();
        digest.extend(iter);
        digest
    }
}

impl<A, B, const N: usize> From<[(A, B); N]> for Bijection<A, B>
where
    A: Hash + Eq,
    B: Hash + Eq,
{
    fn from(arr: [(A, B); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<A, B, H> TryFrom<HashMap<A, B, H>> for Bijection<A, B>
where
    A: Hash + Eq,
    B: Hash + Eq,
{
    type Error = BijectionError;

    /// Keys of a [`HashMap`] are already unique, so this only fails with
    /// [`BijectionError::DuplicateValue`].
    fn try_from(map: HashMap<A, B, H>) -> Result<Self, Self::Error> {
        Self::try_from_pairs(map)
    }
}

impl<A, B, S> IntoIterator for Bijection<A, B, S>
where
    A: Hash + Eq,
    B: Hash + Eq,
{
    type Item = (A, B);
    type IntoIter = IntoIter<A, B>;

    fn into_iter(self) -> IntoIter<A, B> {
        IntoIter {
            forward_iter: self.forward.into_iter(),
            backward: self.backward,
        }
    }
}

impl<'a, A, B, S> IntoIterator for &'a Bijection<A, B, S>
where
    A: Hash + Eq,
    B: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a A, &'a B);
    type IntoIter = Iter<'a, A, B>;

    fn into_iter(self) -> Iter<'a, A, B> {
        self.iter()
    }
}

/// An iterator over the pairs of a `Bijection`.
pub struct Iter<'a, A, B> {
    forward_iter: RawIter<MappingPair<A>>,
    backward: &'a PairTable<B>,
    marker: PhantomData<&'a A>,
}

impl<A, B> Clone for Iter<'_, A, B> {
    fn clone(&self) -> Self {
        Self {
            forward_iter: self.forward_iter.clone(),
            backward: self.backward,
            marker: PhantomData,
        }
    }
}

impl<A, B> fmt::Debug for Iter<'_, A, B>
where
    A: fmt::Debug,
    B: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, A, B> Iterator for Iter<'a, A, B> {
    type Item = (&'a A, &'a B);

    fn next(&mut self) -> Option<Self::Item> {
        let bucket = self.forward_iter.next()?;
        let pairing = unsafe { bucket.as_ref() };
        let companion = self.backward.get(pairing.hash, just_id(pairing.id))?;
        Some((&pairing.value, &companion.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.forward_iter.size_hint()
    }
}

impl<A, B> ExactSizeIterator for Iter<'_, A, B> {
    fn len(&self) -> usize {
        self.forward_iter.len()
    }
}

impl<A, B> FusedIterator for Iter<'_, A, B> {}

macro_rules! single_iter {
    ($name:ident, $what:literal, $item:ident, $side:tt) => {
        #[doc = concat!("An iterator over the ", $what, " of a `Bijection`, in the order of [`Iter`].")]
        pub struct $name<'a, A, B> {
            inner: Iter<'a, A, B>,
        }

        impl<A, B> Clone for $name<'_, A, B> {
            fn clone(&self) -> Self {
                Self {
                    inner: self.inner.clone(),
                }
            }
        }

        impl<A, B> fmt::Debug for $name<'_, A, B>
        where
            $item: fmt::Debug,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.clone()).finish()
            }
        }

        impl<'a, A, B> Iterator for $name<'a, A, B> {
            type Item = &'a $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next().map(|pair| pair.$side)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<A, B> ExactSizeIterator for $name<'_, A, B> {
            fn len(&self) -> usize {
                self.inner.len()
            }
        }

        impl<A, B> FusedIterator for $name<'_, A, B> {}
    };
}

single_iter!(Keys, "keys", A, 0);
single_iter!(Values, "values", B, 1);

/// An owning iterator over the pairs of a `Bijection`.
#[allow(missing_debug_implementations)]
pub struct IntoIter<A, B> {
    forward_iter: RawIntoIter<MappingPair<A>>,
    backward: PairTable<B>,
}

impl<A, B> Iterator for IntoIter<A, B> {
    type Item = (A, B);

    fn next(&mut self) -> Option<Self::Item> {
        let pairing = self.forward_iter.next()?;
        let companion = self
            .backward
            .remove_entry(pairing.hash, just_id(pairing.id))?;
        Some((pairing.extract(), companion.extract()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.forward_iter.size_hint()
    }
}

impl<A, B> ExactSizeIterator for IntoIter<A, B> {
    fn len(&self) -> usize {
        self.forward_iter.len()
    }
}

impl<A, B> FusedIterator for IntoIter<A, B> {}

/// A draining iterator over the pairs of a `Bijection`.
#[allow(missing_debug_implementations)]
pub struct Drain<'a, A, B> {
    forward_iter: RawDrain<'a, MappingPair<A>>,
    backward: &'a mut PairTable<B>,
}

impl<A, B> Drop for Drain<'_, A, B> {
    fn drop(&mut self) {
        // The forward set empties itself when `forward_iter` is dropped
        self.backward.clear();
    }
}

impl<A, B> Iterator for Drain<'_, A, B> {
    type Item = (A, B);

    fn next(&mut self) -> Option<Self::Item> {
        let pairing = self.forward_iter.next()?;
        let companion = self
            .backward
            .remove_entry(pairing.hash, just_id(pairing.id))?;
        Some((pairing.extract(), companion.extract()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.forward_iter.size_hint()
    }
}

impl<A, B> ExactSizeIterator for Drain<'_, A, B> {
    fn len(&self) -> usize {
        self.forward_iter.len()
    }
}

impl<A, B> FusedIterator for Drain<'_, A, B> {}
