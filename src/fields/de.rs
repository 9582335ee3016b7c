use serde::{Deserialize, Deserializer, de::Visitor};

use super::HeaderMap;

struct HeaderMapVisitor;

impl<'de> Visitor<'de> for HeaderMapVisitor {
    type Value = HeaderMap;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("map of header names to string values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = HeaderMap::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((name, value)) = access.next_entry::<String, String>()? {
            map.merge(name, value);
        }

        Ok(map)
    }
}

impl<'de> Deserialize<'de> for HeaderMap {
    fn deserialize<D>(deserializer: D) -> Result<HeaderMap, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(HeaderMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_json_keeps_order() {
        let map = HeaderMap::from_iter([("Vary", "a"), ("Date", "b"), ("Vary", "c")]);
        let text = serde_json::to_string(&map).unwrap();

        assert_eq!(text, r#"{"Vary":"a, c","Date":"b"}"#);

        let decoded: HeaderMap = serde_json::from_str(r#"{"X-B":"1","X-A":"2"}"#).unwrap();
        assert_eq!(decoded.names().collect::<Vec<_>>(), vec!["X-B", "X-A"]);
    }
}
