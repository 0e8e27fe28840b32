use crate::Bijection;
use core::{
    fmt,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};
use serde::{
    de::{Error, SeqAccess, Visitor},
    ser::{SerializeSeq, Serializer},
    Deserializer, {Deserialize, Serialize},
};

pub(crate) struct BijectionVisitor<A, B, S> {
    marker: PhantomData<fn() -> Bijection<A, B, S>>,
}

impl<A, B, S> BijectionVisitor<A, B, S>
where
    A: Eq + Hash,
    B: Eq + Hash,
    S: BuildHasher + Default,
{
    fn new() -> Self {
        BijectionVisitor {
            marker: PhantomData,
        }
    }
}

impl<'de, A, B, S> Visitor<'de> for BijectionVisitor<A, B, S>
where
    A: Deserialize<'de> + Eq + Hash,
    B: Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    type Value = Bijection<A, B, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of one-to-one pairs")
    }

    fn visit_seq<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: SeqAccess<'de>,
    {
        let mut map: Bijection<A, B, S> =
            Bijection::with_capacity_and_hasher(access.size_hint().unwrap_or(0), S::default());

        let mut index = 0;
        while let Some((left, right)) = access.next_element::<(A, B)>()? {
            map.insert_unique(left, right, index)
                .map_err(<M::Error as Error>::custom)?;
            index += 1;
        }

        Ok(map)
    }
}

impl<'de, A, B, S> Deserialize<'de> for Bijection<A, B, S>
where
    A: Deserialize<'de> + Eq + Hash,
    B: Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(BijectionVisitor::<A, B, S>::new())
    }
}

impl<A, B, H> Serialize for Bijection<A, B, H>
where
    A: Serialize + Eq + Hash,
    B: Serialize + Eq + Hash,
    H: BuildHasher,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;

        for pair in self.iter() {
            seq.serialize_element(&pair)?;
        }

        seq.end()
    }
}
