use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::SymplecticVector;

/// Vectors serialize as their Pauli label, which determines every bit.
impl Serialize for SymplecticVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SymplecticVector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        string
            .parse()
            .map_err(|error| de::Error::custom(format!("failed to parse SymplecticVector: {error}")))
    }
}
