use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Node-specific attributes of a document node.
///
/// Keys that a node does not model explicitly end up here, in document order.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, Value>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_getters() {
        let mut attributes = Attributes::new();
        attributes.insert("alias", "account");
        attributes.insert("enabled", true);

        assert_eq!(attributes.get_str("alias"), Some("account"));
        assert_eq!(attributes.get_bool("enabled"), Some(true));
        assert_eq!(attributes.get_str("enabled"), None);
        assert_eq!(attributes.get_bool("missing"), None);
    }

    #[test]
    fn keeps_document_order() {
        let attributes: Attributes =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let keys: Vec<_> = attributes.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }
}
