//! Fluent query builder.

use crate::client::TcgClient;
use crate::error::Error;
use crate::query::Direction;
use crate::query::Pages;
use crate::query::Predicate;
use crate::query::QuerySpec;
use crate::registry::AnyModel;
use crate::response::Envelope;
use crate::response::PagedEnvelope;
use crate::response::Pagination;
use crate::response::decode_json;

/// Builder for one query against a resource.
///
/// Mutation methods accumulate state and return the builder; a terminal
/// method consumes it, so a builder describes exactly one request and can
/// never leak filters into the next. Obtain builders from
/// [`TcgClient::cards`], [`TcgClient::sets`], or [`TcgClient::resource`].
///
/// # Example
///
/// ```ignore
/// use pokemon_tcg::query::{Direction, Predicate};
///
/// let cards = client
///     .cards()
///     .filter("types", Predicate::or(["grass", "lightning"]))
///     .filter("rarity", "vmax")
///     .order_by("hp", Direction::Desc)
///     .all()
///     .await?;
/// ```
pub struct QueryBuilder<'a> {
    client: &'a TcgClient,
    resource: String,
    spec: QuerySpec,
}

impl<'a> QueryBuilder<'a> {
    pub(crate) fn new(client: &'a TcgClient, resource: String) -> Self {
        Self {
            client,
            resource,
            spec: QuerySpec::new(),
        }
    }

    /// Adds a filter predicate on a field.
    ///
    /// Scalars convert implicitly (`.filter("rarity", "vmax")`); groups are
    /// built with [`Predicate::and`] / [`Predicate::or`]. Filtering the same
    /// field again replaces its predicate and keeps its position.
    pub fn filter(mut self, field: impl Into<String>, predicate: impl Into<Predicate>) -> Self {
        self.spec.set_filter(field, predicate.into());
        self
    }

    /// Requests a specific page (1-based).
    pub fn page(mut self, page: usize) -> Self {
        self.spec.page = page;
        self
    }

    /// Sets how many records the service returns per page (max 250).
    pub fn page_size(mut self, size: usize) -> Self {
        self.spec.page_size = size;
        self
    }

    /// Restricts response records to the named fields.
    pub fn select(mut self, fields: &[&str]) -> Self {
        if !fields.is_empty() {
            self.spec.select = Some(fields.join(","));
        }
        self
    }

    /// Appends a sort key; the first call gives the primary sort.
    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.spec.push_order(field, direction);
        self
    }

    // =========================================================================
    // Terminal operations
    // =========================================================================

    /// Looks up a single record by identifier.
    ///
    /// Any pending filters, pagination, and ordering are discarded; only a
    /// `select` projection applies to lookups. A 4xx from the service maps
    /// to [`Error::NotFound`] naming the identifier; other failures pass
    /// through unchanged. `Ok(None)` means the record arrived but the
    /// resource has no registered model.
    pub async fn find(self, identifier: impl Into<String>) -> Result<Option<AnyModel>, Error> {
        let identifier = identifier.into();
        let Self {
            client,
            resource,
            spec,
        } = self;

        let request = spec.compile_lookup(&resource, &identifier);
        let response = match client.send(&request).await {
            Ok(response) => response,
            Err(Error::Http { status, .. }) if (400..500).contains(&status) => {
                return Err(Error::not_found(resource, identifier));
            }
            Err(err) => return Err(err),
        };

        let envelope: Envelope<serde_json::Value> = decode_json(response).await?;
        client.registry().decode(&resource, envelope.data)
    }

    /// Fetches one page of records and resolves each through the registry.
    ///
    /// Entries are `None` where the resource has no registered model, in
    /// response order. Use [`pages`](QueryBuilder::pages) to walk beyond
    /// the first page.
    pub async fn all(self) -> Result<Vec<Option<AnyModel>>, Error> {
        let Self {
            client,
            resource,
            spec,
        } = self;

        let request = spec.compile_collection(&resource);
        let response = client.send(&request).await?;
        let envelope: PagedEnvelope = decode_json(response).await?;

        let mut records = Vec::with_capacity(envelope.data.len());
        for raw in envelope.data {
            records.push(client.registry().decode(&resource, raw)?);
        }

        Ok(records)
    }

    /// Fetches only the pagination metadata for the query.
    ///
    /// Runs the same collection request as [`all`](QueryBuilder::all) but
    /// resolves no records.
    pub async fn pagination(self) -> Result<Pagination, Error> {
        let Self {
            client,
            resource,
            spec,
        } = self;

        let request = spec.compile_collection(&resource);
        let response = client.send(&request).await?;
        decode_json(response).await
    }

    /// Converts the query into a pull-based page iterator.
    pub fn pages(self) -> Pages<'a> {
        Pages::new(self.client, self.resource, self.spec)
    }
}
