//! Response Envelopes
//!
//! Every payload from the API is wrapped as `{ "data": ... }`.

use serde::Deserialize;

use super::Todo;

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

/// `data` of `GET /v1/todos`
#[derive(Debug, Default, Deserialize)]
pub struct TodoPage {
    #[serde(default)]
    pub items: Option<Vec<Todo>>,
}

impl Envelope<TodoPage> {
    /// Items of a list response; a missing `data` or `items` means no items.
    pub fn into_items(self) -> Vec<Todo> {
        self.data.and_then(|page| page.items).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Envelope<TodoPage> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_items_present() {
        let items = parse(r#"{"data":{"items":[{"_id":"1","title":"a"}]}}"#).into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "a");
    }

    #[test]
    fn test_single_item_envelope() {
        let envelope: Envelope<Todo> = serde_json::from_str(r#"{"data":{"_id":"5","title":"b"}}"#).unwrap();
        assert_eq!(envelope.data.map(|t| t.id).as_deref(), Some("5"));

        let empty: Envelope<Todo> = serde_json::from_str("{}").unwrap();
        assert!(empty.data.is_none());
    }

    #[test]
    fn test_missing_items_is_empty() {
        assert!(parse(r#"{"data":{}}"#).into_items().is_empty());
        assert!(parse(r#"{"data":{"items":null}}"#).into_items().is_empty());
        assert!(parse(r#"{}"#).into_items().is_empty());
    }
}
