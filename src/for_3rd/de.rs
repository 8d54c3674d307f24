//! Deserialization of Number.

use core::fmt::Formatter;

use crate::defs::Radix;
use crate::Number;
use serde::de::{Error, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

const FIELDS: &[&str] = &["radix", "value"];

struct NumberVisitor;

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_struct("Number", FIELDS, NumberVisitor)
    }
}

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "a map with `radix` and `value` entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut radix: Option<String> = None;
        let mut value: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "radix" => radix = Some(map.next_value()?),
                "value" => value = Some(map.next_value()?),
                _ => return Err(Error::unknown_field(&key, FIELDS)),
            }
        }

        let radix = radix.ok_or_else(|| Error::missing_field("radix"))?;
        let value = value.ok_or_else(|| Error::missing_field("value"))?;

        let rdx = Radix::from_name(&radix)
            .ok_or_else(|| Error::custom(format!("unknown radix `{radix}`")))?;

        Number::parse(&value, rdx).map_err(Error::custom)
    }
}
