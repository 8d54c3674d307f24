//! Serialization of Number.
//! A number serializes as a structure holding the radix name and the
//! canonical string rendering of the value.

use crate::Number;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("Number", 2)?;
        st.serialize_field("radix", self.radix().name())?;
        st.serialize_field("value", &self.to_string())?;
        st.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::to_string;

    use crate::{Number, Radix};

    #[test]
    fn to_json() {
        let n = Number::parse("-ff.fa1", Radix::Hex).unwrap();
        assert_eq!(
            to_string(&n).unwrap(),
            "{\"radix\":\"hexadecimal\",\"value\":\"-ff.fa1\"}"
        );

        let n = Number::parse("10.41", Radix::Dec).unwrap();
        assert_eq!(
            to_string(&n).unwrap(),
            "{\"radix\":\"decimal\",\"value\":\"10.41\"}"
        );
    }
}
