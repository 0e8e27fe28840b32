use std::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
};

use hashbrown::raw::RawTable;
use log::trace;

use crate::evicted::Evicted;

// One direction of a bijection: a set of items, each linked to its companion in the other set.
pub(crate) type PairTable<T> = RawTable<MappingPair<T>>;

// Contains a value, the hash of the item that the value maps to, and the pairing id the two
// items share.
pub(crate) struct MappingPair<T> {
    pub(crate) value: T,
    pub(crate) hash: u64,
    pub(crate) id: u64,
}

pub(crate) fn equivalent_key<K, Q>(k: &Q) -> impl '_ + Fn(&MappingPair<K>) -> bool
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    move |x| k.eq(x.value.borrow())
}

pub(crate) fn hash_and_id<T>(hash: u64, id: u64) -> impl Fn(&MappingPair<T>) -> bool {
    move |x| id == x.id && hash == x.hash
}

// To be safe, use `hash_and_id` whenever possible
pub(crate) fn just_id<T>(id: u64) -> impl Fn(&MappingPair<T>) -> bool {
    move |x| id == x.id
}

pub(crate) fn make_hash<T, S>(hash_builder: &S, val: &T) -> u64
where
    T: Hash + ?Sized,
    S: BuildHasher,
{
    use core::hash::Hasher;
    let mut state = hash_builder.build_hasher();
    val.hash(&mut state);
    state.finish()
}

pub(crate) fn make_hasher<T, S>(hash_builder: &S) -> impl Fn(&T) -> u64 + '_
where
    T: Hash,
    S: BuildHasher,
{
    move |val| make_hash::<T, S>(hash_builder, val)
}

/// Looks `key` up in `near` and follows its pairing into `far`.
///
/// Every direction-aware read goes through here; the inverse views simply pass the tables in the
/// other order.
pub(crate) fn get_pair<'a, K, V, Q, S>(
    hash_builder: &S,
    near: &'a PairTable<K>,
    far: &'a PairTable<V>,
    key: &Q,
) -> Option<(&'a K, &'a V)>
where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    let hash = make_hash::<Q, S>(hash_builder, key);
    let near_pairing = near.get(hash, equivalent_key(key))?;
    let far_pairing = far.get(near_pairing.hash, hash_and_id(hash, near_pairing.id))?;
    Some((&near_pairing.value, &far_pairing.value))
}

pub(crate) fn contains<K, Q, S>(hash_builder: &S, near: &PairTable<K>, key: &Q) -> bool
where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    let hash = make_hash::<Q, S>(hash_builder, key);
    near.get(hash, equivalent_key(key)).is_some()
}

/// Removes `key` from `near` together with its companion in `far`.
///
/// Nothing is touched unless both halves of the pair are found.
pub(crate) fn remove_pair<K, V, Q, S>(
    hash_builder: &S,
    near: &mut PairTable<K>,
    far: &mut PairTable<V>,
    key: &Q,
) -> Option<(K, V)>
where
    K: Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    let hash = make_hash::<Q, S>(hash_builder, key);
    let near_bucket = near.find(hash, equivalent_key(key))?;
    let (far_hash, id) = unsafe {
        let pairing = near_bucket.as_ref();
        (pairing.hash, pairing.id)
    };
    let far_bucket = far.find(far_hash, hash_and_id(hash, id))?;
    // Both buckets come from tables that are not modified between `find` and `remove`
    let key = unsafe { near.remove(near_bucket) }.extract();
    let value = unsafe { far.remove(far_bucket) }.extract();
    Some((key, value))
}

/// Pairs `key` with `value`, first evicting the pair holding `key` and then the pair holding
/// `value`.
pub(crate) fn insert_pair<K, V, S>(
    hash_builder: &S,
    counter: &mut u64,
    near: &mut PairTable<K>,
    far: &mut PairTable<V>,
    key: K,
    value: V,
) -> Evicted<K, V>
where
    K: Hash + Eq,
    V: Hash + Eq,
    S: BuildHasher,
{
    let by_key = remove_pair(hash_builder, near, far, &key);
    let by_value = remove_pair(hash_builder, far, near, &value).map(|(v, k)| (k, v));
    let digest = Evicted::from((by_key, by_value));
    if digest.is_some() {
        trace!("insert displaced {} existing pair(s)", digest.len());
    }
    let k_hash = make_hash::<K, S>(hash_builder, &key);
    let v_hash = make_hash::<V, S>(hash_builder, &value);
    let id = *counter;
    *counter = counter.wrapping_add(1);
    let near_pairing = MappingPair {
        value: key,
        hash: v_hash,
        id,
    };
    let far_pairing = MappingPair {
        value,
        hash: k_hash,
        id,
    };
    near.insert(
        k_hash,
        near_pairing,
        make_hasher::<MappingPair<K>, S>(hash_builder),
    );
    far.insert(
        v_hash,
        far_pairing,
        make_hasher::<MappingPair<V>, S>(hash_builder),
    );
    digest
}

impl<T> MappingPair<T> {
    // Consumes the pair and returns the held `T`
    pub(crate) fn extract(self) -> T {
        self.value
    }
}

impl<T: Hash> Hash for MappingPair<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl<T: Clone> Clone for MappingPair<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            hash: self.hash,
            id: self.id,
        }
    }
}
