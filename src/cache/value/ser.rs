//! Value Serializer
//!
//! A [`serde::Serializer`] whose output is a [`CacheValue`]. Numbers that do
//! not fit `Int` or `Float` exactly are refused instead of converted.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::ser::{self, Serialize};
use thiserror::Error;

use super::CacheValue;

// == Error ==
#[derive(Error, Debug)]
#[error("{0}")]
pub struct NotPlainData(String);

impl ser::Error for NotPlainData {
    fn custom<T: Display>(msg: T) -> Self {
        NotPlainData(msg.to_string())
    }
}

type Result<T> = std::result::Result<T, NotPlainData>;

fn int<T>(v: T) -> Result<CacheValue>
where
    T: TryInto<i64> + Display + Copy,
{
    v.try_into()
        .map(CacheValue::Int)
        .map_err(|_| NotPlainData(format!("integer {v} does not fit in a signed 64-bit value")))
}

fn float(v: f64) -> Result<CacheValue> {
    if v.is_finite() {
        Ok(CacheValue::Float(v))
    } else {
        Err(NotPlainData(format!("non-finite number {v}")))
    }
}

fn map_key(key: CacheValue) -> Result<String> {
    match key {
        CacheValue::String(s) => Ok(s),
        CacheValue::Int(i) => Ok(i.to_string()),
        CacheValue::Bool(b) => Ok(b.to_string()),
        _ => Err(NotPlainData("map keys must be strings".to_string())),
    }
}

// == Serializer ==
pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = CacheValue;
    type Error = NotPlainData;

    type SerializeSeq = ListBuilder;
    type SerializeTuple = ListBuilder;
    type SerializeTupleStruct = ListBuilder;
    type SerializeTupleVariant = VariantBuilder<ListBuilder>;
    type SerializeMap = MapBuilder;
    type SerializeStruct = MapBuilder;
    type SerializeStructVariant = VariantBuilder<MapBuilder>;

    fn serialize_bool(self, v: bool) -> Result<CacheValue> {
        Ok(CacheValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<CacheValue> {
        Ok(CacheValue::Int(i64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<CacheValue> {
        Ok(CacheValue::Int(i64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<CacheValue> {
        Ok(CacheValue::Int(i64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<CacheValue> {
        Ok(CacheValue::Int(v))
    }

    fn serialize_i128(self, v: i128) -> Result<CacheValue> {
        int(v)
    }

    fn serialize_u8(self, v: u8) -> Result<CacheValue> {
        Ok(CacheValue::Int(i64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<CacheValue> {
        Ok(CacheValue::Int(i64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<CacheValue> {
        Ok(CacheValue::Int(i64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<CacheValue> {
        int(v)
    }

    fn serialize_u128(self, v: u128) -> Result<CacheValue> {
        int(v)
    }

    fn serialize_f32(self, v: f32) -> Result<CacheValue> {
        float(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<CacheValue> {
        float(v)
    }

    fn serialize_char(self, v: char) -> Result<CacheValue> {
        Ok(CacheValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<CacheValue> {
        Ok(CacheValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<CacheValue> {
        Ok(CacheValue::List(
            v.iter().map(|b| CacheValue::Int(i64::from(*b))).collect(),
        ))
    }

    fn serialize_none(self) -> Result<CacheValue> {
        Ok(CacheValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<CacheValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<CacheValue> {
        Ok(CacheValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<CacheValue> {
        Ok(CacheValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
    ) -> Result<CacheValue> {
        Ok(CacheValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<CacheValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<CacheValue>
    where
        T: ?Sized + Serialize,
    {
        let mut map = BTreeMap::new();
        map.insert(variant.to_string(), value.serialize(self)?);
        Ok(CacheValue::Map(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<ListBuilder> {
        Ok(ListBuilder {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<ListBuilder> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<ListBuilder> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantBuilder<ListBuilder>> {
        Ok(VariantBuilder {
            variant,
            inner: self.serialize_seq(Some(len))?,
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapBuilder> {
        Ok(MapBuilder::default())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<MapBuilder> {
        Ok(MapBuilder::default())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<VariantBuilder<MapBuilder>> {
        Ok(VariantBuilder {
            variant,
            inner: MapBuilder::default(),
        })
    }
}

// == Builders ==
pub struct ListBuilder {
    items: Vec<CacheValue>,
}

impl ListBuilder {
    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }
}

impl ser::SerializeSeq for ListBuilder {
    type Ok = CacheValue;
    type Error = NotPlainData;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<CacheValue> {
        Ok(CacheValue::List(self.items))
    }
}

impl ser::SerializeTuple for ListBuilder {
    type Ok = CacheValue;
    type Error = NotPlainData;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<CacheValue> {
        Ok(CacheValue::List(self.items))
    }
}

impl ser::SerializeTupleStruct for ListBuilder {
    type Ok = CacheValue;
    type Error = NotPlainData;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<CacheValue> {
        Ok(CacheValue::List(self.items))
    }
}

#[derive(Default)]
pub struct MapBuilder {
    map: BTreeMap<String, CacheValue>,
    next_key: Option<String>,
}

impl MapBuilder {
    fn insert<T: ?Sized + Serialize>(&mut self, key: String, value: &T) -> Result<()> {
        self.map.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }
}

impl ser::SerializeMap for MapBuilder {
    type Ok = CacheValue;
    type Error = NotPlainData;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<()> {
        self.next_key = Some(map_key(key.serialize(ValueSerializer)?)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| NotPlainData("map value without a key".to_string()))?;
        self.insert(key, value)
    }

    fn end(self) -> Result<CacheValue> {
        Ok(CacheValue::Map(self.map))
    }
}

impl ser::SerializeStruct for MapBuilder {
    type Ok = CacheValue;
    type Error = NotPlainData;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<CacheValue> {
        Ok(CacheValue::Map(self.map))
    }
}

/// Wraps an enum variant's payload as `{ variant: payload }`.
pub struct VariantBuilder<B> {
    variant: &'static str,
    inner: B,
}

impl<B> VariantBuilder<B> {
    fn wrap(variant: &'static str, payload: CacheValue) -> CacheValue {
        let mut map = BTreeMap::new();
        map.insert(variant.to_string(), payload);
        CacheValue::Map(map)
    }
}

impl ser::SerializeTupleVariant for VariantBuilder<ListBuilder> {
    type Ok = CacheValue;
    type Error = NotPlainData;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.inner.push(value)
    }

    fn end(self) -> Result<CacheValue> {
        Ok(Self::wrap(self.variant, CacheValue::List(self.inner.items)))
    }
}

impl ser::SerializeStructVariant for VariantBuilder<MapBuilder> {
    type Ok = CacheValue;
    type Error = NotPlainData;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        self.inner.insert(key.to_string(), value)
    }

    fn end(self) -> Result<CacheValue> {
        Ok(Self::wrap(self.variant, CacheValue::Map(self.inner.map)))
    }
}
