use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{Bit, BitMatrix};

impl Serialize for Bit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Bit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            0 => Ok(Bit::ZERO),
            1 => Ok(Bit::ONE),
            other => Err(de::Error::custom(format!("expected 0 or 1, got {other}"))),
        }
    }
}

/// Matrices serialize as their alternate string form, e.g. `"[101|011]"`.
///
/// The string form has no room for the row count of a matrix without columns, so such
/// matrices deserialize as `0 x 0`.
impl Serialize for BitMatrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self:#}"))
    }
}

impl<'de> Deserialize<'de> for BitMatrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        string
            .parse()
            .map_err(|error| de::Error::custom(format!("failed to parse BitMatrix: {error}")))
    }
}
