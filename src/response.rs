//! Response envelopes and pagination metadata.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::registry::AnyModel;

/// Pagination metadata for one collection response.
///
/// An immutable snapshot of where a query landed: which page came back, how
/// many records it holds, and how many records match the query in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    page: usize,
    page_size: usize,
    count: usize,
    total_count: usize,
}

impl Pagination {
    /// The page this response covers (1-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// The page size the service applied.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of records in this page.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of records matching the query across all pages.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of pages the full result spans.
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.total_count.div_ceil(self.page_size)
        }
    }

    /// Returns `true` if pages remain after this one.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages()
    }
}

/// The service's `{"data": ...}` wrapper around every response body.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub(crate) data: T,
}

/// A collection response: the `data` array plus pagination fields beside it.
#[derive(Debug, Deserialize)]
pub(crate) struct PagedEnvelope {
    pub(crate) data: Vec<serde_json::Value>,
    #[serde(flatten)]
    pub(crate) pagination: Pagination,
}

/// One resolved page of a collection query.
///
/// Records are `None` where the resource has no registered model, in the
/// same positions the raw records held.
#[derive(Debug, Clone)]
pub struct ResourcePage {
    records: Vec<Option<AnyModel>>,
    pagination: Pagination,
}

impl ResourcePage {
    pub(crate) fn new(records: Vec<Option<AnyModel>>, pagination: Pagination) -> Self {
        Self {
            records,
            pagination,
        }
    }

    /// Returns the resolved records in response order.
    pub fn records(&self) -> &[Option<AnyModel>] {
        &self.records
    }

    /// Consumes the page and returns the resolved records.
    pub fn into_records(self) -> Vec<Option<AnyModel>> {
        self.records
    }

    /// Returns the pagination snapshot for this page.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if pages remain after this one.
    pub fn has_more(&self) -> bool {
        self.pagination.has_more()
    }
}

/// Reads the full body, then decodes it, keeping the text for error context.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|err| Error::parse_with_body(err.to_string(), body))
}
