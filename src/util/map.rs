use serde::{ser::SerializeMap, Serialize, Serializer};

/// 以單一鍵值序列化的項目，例︰`{"TSLA": {...}}`
#[derive(Debug, Clone, PartialEq)]
pub struct Keyed<V> {
    pub key: String,
    pub value: V,
}

impl<V> Keyed<V> {
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Keyed {
            key: key.into(),
            value,
        }
    }
}

impl<V: Serialize> Serialize for Keyed<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.value)?;
        map.end()
    }
}
