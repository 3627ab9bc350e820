use crate::{Extent, View, ViewMut};
use serde::{
    de::{Deserialize, Deserializer, Error, Visitor},
    ser::{Serialize, SerializeSeq, Serializer},
};
use std::{
    fmt::{self, Formatter},
    marker::PhantomData,
};

impl<T, E> Serialize for View<'_, T, E>
where
    T: Serialize,
    E: Extent,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for el in self {
            seq.serialize_element(el)?;
        }
        seq.end()
    }
}

impl<T, E> Serialize for ViewMut<'_, T, E>
where
    T: Serialize,
    E: Extent,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_view().serialize(serializer)
    }
}

/// Byte views borrow straight from the input, so they only deserialize from
/// formats that can lend out bytes or strings.
impl<'de: 'a, 'a, E> Deserialize<'de> for View<'a, u8, E>
where
    E: Extent,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_bytes(ByteViewVisitor(PhantomData))
    }
}

struct ByteViewVisitor<'a, E>(PhantomData<View<'a, u8, E>>)
where
    E: Extent;

impl<'de: 'a, 'a, E> Visitor<'de> for ByteViewVisitor<'a, E>
where
    E: Extent,
{
    type Value = View<'a, u8, E>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        match E::STATIC {
            Some(n) => write!(formatter, "borrowed bytes of length {n}"),
            None => formatter.write_str("borrowed bytes"),
        }
    }

    fn visit_borrowed_bytes<R>(self, bytes: &'de [u8]) -> Result<Self::Value, R>
    where
        R: Error,
    {
        View::try_new(bytes).map_err(R::custom)
    }

    fn visit_borrowed_str<R>(self, s: &'de str) -> Result<Self::Value, R>
    where
        R: Error,
    {
        self.visit_borrowed_bytes(s.as_bytes())
    }
}
