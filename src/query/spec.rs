//! Immutable query state and request compilation.

use reqwest::Method;
use url::form_urlencoded;

use crate::query::Direction;
use crate::query::Predicate;
use crate::query::lucene::filters_to_query;
use crate::query::lucene::order_by_to_param;

/// Page number the service assumes when the parameter is absent.
pub const DEFAULT_PAGE: usize = 1;

/// Page size the service assumes when the parameter is absent.
pub const DEFAULT_PAGE_SIZE: usize = 250;

/// Accumulated query state for one request.
///
/// Built up by the fluent methods on [`QueryBuilder`](crate::query::QueryBuilder)
/// and consumed by one of the `compile_*` methods, so a spec describes at most
/// one outbound request and nothing carries over to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub(crate) filters: Vec<(String, Predicate)>,
    pub(crate) page: usize,
    pub(crate) page_size: usize,
    pub(crate) select: Option<String>,
    pub(crate) order_by: Vec<(String, Direction)>,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            select: None,
            order_by: Vec::new(),
        }
    }
}

impl QuerySpec {
    /// Creates an empty spec with default pagination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the predicate for a field.
    ///
    /// A field that is already present keeps its position in the emission
    /// order and has its predicate replaced, matching map-merge semantics.
    pub fn set_filter(&mut self, field: impl Into<String>, predicate: Predicate) {
        let field = field.into();
        match self.filters.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = predicate,
            None => self.filters.push((field, predicate)),
        }
    }

    /// Appends a sort key; the first appended key is the primary sort.
    pub fn push_order(&mut self, field: impl Into<String>, direction: Direction) {
        self.order_by.push((field.into(), direction));
    }

    /// Compiles the accumulated state into a collection request on `resource`.
    ///
    /// Parameters emit in the order the service documents: `q`, `page`,
    /// `pageSize`, `select`, `orderBy`. Defaults are omitted: `page` only
    /// emits above [`DEFAULT_PAGE`] and `pageSize` only away from
    /// [`DEFAULT_PAGE_SIZE`].
    pub fn compile_collection(self, resource: &str) -> RequestSpec {
        let mut params = Vec::new();

        if !self.filters.is_empty() {
            params.push(("q", filters_to_query(&self.filters)));
        }

        if self.page > DEFAULT_PAGE {
            params.push(("page", self.page.to_string()));
        }

        if self.page_size != DEFAULT_PAGE_SIZE {
            params.push(("pageSize", self.page_size.to_string()));
        }

        if let Some(select) = self.select {
            params.push(("select", select));
        }

        if !self.order_by.is_empty() {
            params.push(("orderBy", order_by_to_param(&self.order_by)));
        }

        RequestSpec {
            method: Method::GET,
            path: resource.to_string(),
            params,
        }
    }

    /// Compiles the accumulated state into a single-record lookup on `resource`.
    ///
    /// Only `select` survives into the request. Filters, pagination, and
    /// ordering are consumed along with the rest and never emitted; a lookup
    /// cannot leak them into a later request.
    pub fn compile_lookup(self, resource: &str, identifier: &str) -> RequestSpec {
        let mut params = Vec::new();

        if let Some(select) = self.select {
            params.push(("select", select));
        }

        RequestSpec {
            method: Method::GET,
            path: format!("{}/{}", resource, identifier),
            params,
        }
    }
}

/// One compiled outbound request: method, relative path, ordered parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) params: Vec<(&'static str, String)>,
}

impl RequestSpec {
    /// Creates a parameterless GET request for a path.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the path relative to the API base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters in emission order.
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Joins the request onto a base URL, form-encoding the parameters.
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}/{}", base_url.trim_end_matches('/'), self.path);

        if !self.params.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.params.iter())
                .finish();
            url.push('?');
            url.push_str(&query);
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Direction;
    use crate::query::Predicate;

    fn param_names(request: &RequestSpec) -> Vec<&'static str> {
        request.params().iter().map(|(name, _)| *name).collect()
    }

    #[test]
    fn test_collection_param_order() {
        let mut spec = QuerySpec::new();
        spec.set_filter("rarity", Predicate::value("rare"));
        spec.page = 3;
        spec.page_size = 50;
        spec.select = Some("id,name".to_string());
        spec.push_order("name", Direction::Asc);

        let request = spec.compile_collection("cards");
        assert_eq!(request.path(), "cards");
        assert_eq!(*request.method(), Method::GET);
        assert_eq!(
            param_names(&request),
            vec!["q", "page", "pageSize", "select", "orderBy"]
        );
    }

    #[test]
    fn test_defaults_are_omitted() {
        let request = QuerySpec::new().compile_collection("cards");
        assert!(request.params().is_empty());
        assert_eq!(request.url("https://api.pokemontcg.io/v2"), "https://api.pokemontcg.io/v2/cards");
    }

    #[test]
    fn test_default_page_size_explicitly_set_is_omitted() {
        let mut spec = QuerySpec::new();
        spec.page = DEFAULT_PAGE;
        spec.page_size = DEFAULT_PAGE_SIZE;
        let request = spec.compile_collection("cards");
        assert!(request.params().is_empty());
    }

    #[test]
    fn test_set_filter_replaces_in_place() {
        let mut spec = QuerySpec::new();
        spec.set_filter("types", Predicate::or(["grass"]));
        spec.set_filter("rarity", Predicate::value("rare"));
        spec.set_filter("types", Predicate::or(["water"]));

        assert_eq!(spec.filters.len(), 2);
        assert_eq!(spec.filters[0].0, "types");
        assert_eq!(spec.filters[0].1, Predicate::or(["water"]));
        assert_eq!(spec.filters[1].0, "rarity");
    }

    #[test]
    fn test_lookup_drops_everything_but_select() {
        let mut spec = QuerySpec::new();
        spec.set_filter("rarity", Predicate::value("rare"));
        spec.page = 4;
        spec.page_size = 10;
        spec.select = Some("id,name".to_string());
        spec.push_order("hp", Direction::Desc);

        let request = spec.compile_lookup("cards", "xy7-54");
        assert_eq!(request.path(), "cards/xy7-54");
        assert_eq!(request.params(), &[("select", "id,name".to_string())]);
    }

    #[test]
    fn test_url_encoding() {
        let mut spec = QuerySpec::new();
        spec.set_filter("types", Predicate::or(["grass", "lightning"]));
        spec.page_size = 10;

        let url = spec
            .compile_collection("cards")
            .url("https://api.pokemontcg.io/v2/");
        assert_eq!(
            url,
            "https://api.pokemontcg.io/v2/cards?q=types%3A%22grass%22+OR+types%3A%22lightning%22&pageSize=10"
        );
    }

    #[test]
    fn test_lookup_url_without_select_has_no_query() {
        let url = QuerySpec::new()
            .compile_lookup("cards", "base1-4")
            .url("https://api.pokemontcg.io/v2");
        assert_eq!(url, "https://api.pokemontcg.io/v2/cards/base1-4");
    }
}
