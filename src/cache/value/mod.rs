//! Cache Value Module
//!
//! Defines the closed set of plain-data values a cache entry can hold.

mod ser;

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Unexpected, Visitor};
use serde::Serialize;

use crate::error::{CacheError, Result};

use self::ser::ValueSerializer;

// == Cache Value ==
/// Plain data stored in the cache.
///
/// Scalars, sequences and string-keyed mappings of the same, nested to any
/// depth. Serializes to JSON without tags. Reading accepts only numbers that
/// `Int` or `Float` hold exactly.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum CacheValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<CacheValue>),
    Map(BTreeMap<String, CacheValue>),
}

impl CacheValue {
    // == From Serialize ==
    /// Reduces any serializable value to plain data.
    ///
    /// Fails with [`CacheError::ObjectNotCacheable`] when the value refuses
    /// to serialize or serializes to something outside the plain-data set:
    /// a map keyed by structs, an integer beyond `i64`, or a NaN or infinite
    /// float.
    pub fn from_serialize<T>(value: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        value
            .serialize(ValueSerializer)
            .map_err(|e| CacheError::ObjectNotCacheable(e.to_string()))
    }
}

// == Deserialize ==
impl<'de> Deserialize<'de> for CacheValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CacheValueVisitor)
    }
}

struct CacheValueVisitor;

impl<'de> Visitor<'de> for CacheValueVisitor {
    type Value = CacheValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("plain data with signed 64-bit integers and finite floats")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<CacheValue, E> {
        Ok(CacheValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<CacheValue, E> {
        Ok(CacheValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<CacheValue, E> {
        i64::try_from(v)
            .map(CacheValue::Int)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<CacheValue, E> {
        if v.is_finite() {
            Ok(CacheValue::Float(v))
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<CacheValue, E> {
        Ok(CacheValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<CacheValue, E> {
        Ok(CacheValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<CacheValue, E> {
        Ok(CacheValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<CacheValue, E> {
        Ok(CacheValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<CacheValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        CacheValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<CacheValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(CacheValue::List(items))
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<CacheValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = BTreeMap::new();
        while let Some((key, value)) = access.next_entry::<String, CacheValue>()? {
            map.insert(key, value);
        }
        Ok(CacheValue::Map(map))
    }
}

// == Conversions ==
impl From<bool> for CacheValue {
    fn from(v: bool) -> Self {
        CacheValue::Bool(v)
    }
}

impl From<i64> for CacheValue {
    fn from(v: i64) -> Self {
        CacheValue::Int(v)
    }
}

impl From<i32> for CacheValue {
    fn from(v: i32) -> Self {
        CacheValue::Int(i64::from(v))
    }
}

impl From<u32> for CacheValue {
    fn from(v: u32) -> Self {
        CacheValue::Int(i64::from(v))
    }
}

impl From<f64> for CacheValue {
    fn from(v: f64) -> Self {
        CacheValue::Float(v)
    }
}

impl From<&str> for CacheValue {
    fn from(v: &str) -> Self {
        CacheValue::String(v.to_string())
    }
}

impl From<String> for CacheValue {
    fn from(v: String) -> Self {
        CacheValue::String(v)
    }
}

impl<T: Into<CacheValue>> From<Vec<T>> for CacheValue {
    fn from(v: Vec<T>) -> Self {
        CacheValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, CacheValue>> for CacheValue {
    fn from(v: BTreeMap<String, CacheValue>) -> Self {
        CacheValue::Map(v)
    }
}

impl<T: Into<CacheValue>> From<Option<T>> for CacheValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CacheValue::Null, Into::into)
    }
}
