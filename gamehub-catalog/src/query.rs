use serde_json::Value;

/// A query against the bucket's `objects` endpoint: a type filter plus
/// optional field-path equality filters, a property subset, relationship
/// expansion depth, and a page limit.
///
/// Filters serialize as one compact JSON object in the `query` URL
/// parameter; the backing map keeps keys in a deterministic order.
#[derive(Debug, Clone)]
pub struct ObjectQuery {
    filters: serde_json::Map<String, Value>,
    props: Option<String>,
    depth: Option<u8>,
    limit: Option<u32>,
}

impl ObjectQuery {
    /// Start a query for the given object type.
    pub fn new(object_type: &str) -> Self {
        let mut filters = serde_json::Map::new();
        filters.insert("type".to_string(), Value::String(object_type.to_string()));
        Self {
            filters,
            props: None,
            depth: None,
            limit: None,
        }
    }

    /// Add a field-path equality filter, e.g. `metadata.category.slug`.
    pub fn filter(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.filters.insert(path.to_string(), value.into());
        self
    }

    /// Restrict response objects to the given properties.
    pub fn props(mut self, props: &[&str]) -> Self {
        self.props = Some(props.join(","));
        self
    }

    /// Expand related objects this many levels deep.
    pub fn depth(mut self, depth: u8) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Cap the number of objects returned.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The filter object as it goes into the `query` parameter.
    pub(crate) fn query_json(&self) -> String {
        Value::Object(self.filters.clone()).to_string()
    }

    /// Assemble the URL parameters for a request with the given read key.
    pub(crate) fn into_params(self, read_key: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("read_key", read_key.to_string()),
            ("query", Value::Object(self.filters).to_string()),
        ];
        if let Some(props) = self.props {
            params.push(("props", props));
        }
        if let Some(depth) = self.depth {
            params.push(("depth", depth.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_only_query() {
        let query = ObjectQuery::new("games");
        assert_eq!(query.query_json(), r#"{"type":"games"}"#);
    }

    #[test]
    fn field_path_filter_serializes_alongside_type() {
        let query = ObjectQuery::new("games").filter("metadata.category.slug", "puzzle-games");
        assert_eq!(
            query.query_json(),
            r#"{"metadata.category.slug":"puzzle-games","type":"games"}"#
        );
    }

    #[test]
    fn boolean_filter_serializes_unquoted() {
        let query = ObjectQuery::new("games").filter("metadata.is_popular", true);
        assert_eq!(
            query.query_json(),
            r#"{"metadata.is_popular":true,"type":"games"}"#
        );
    }

    #[test]
    fn params_include_only_what_was_set() {
        let params = ObjectQuery::new("categories")
            .props(&["id", "title", "slug", "metadata"])
            .into_params("rk-123");

        assert_eq!(
            params,
            vec![
                ("read_key", "rk-123".to_string()),
                ("query", r#"{"type":"categories"}"#.to_string()),
                ("props", "id,title,slug,metadata".to_string()),
            ]
        );
    }

    #[test]
    fn depth_and_limit_render_as_numbers() {
        let params = ObjectQuery::new("games")
            .depth(1)
            .limit(1)
            .into_params("rk");
        assert!(params.contains(&("depth", "1".to_string())));
        assert!(params.contains(&("limit", "1".to_string())));
    }
}
