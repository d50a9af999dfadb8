//! Pull-based iterator over collection query pages.

use crate::client::TcgClient;
use crate::error::Error;
use crate::query::QuerySpec;
use crate::response::PagedEnvelope;
use crate::response::ResourcePage;
use crate::response::decode_json;

/// Async iterator that yields one [`ResourcePage`] per request.
///
/// Starts at the page the builder selected and advances by page number
/// until the pagination metadata says nothing follows or a page comes back
/// empty. The first error ends iteration.
///
/// # Example
///
/// ```ignore
/// let mut pages = client.cards().filter("rarity", "vmax").pages();
///
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     for record in page.records().iter().flatten() {
///         println!("{:?}", record);
///     }
/// }
/// ```
pub struct Pages<'a> {
    client: &'a TcgClient,
    resource: String,
    spec: QuerySpec,
    next_page: usize,
    done: bool,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(client: &'a TcgClient, resource: String, spec: QuerySpec) -> Self {
        let next_page = spec.page;
        Self {
            client,
            resource,
            spec,
            next_page,
            done: false,
        }
    }

    /// Fetches the next page of results.
    ///
    /// Returns `None` when all pages have been consumed.
    pub async fn next(&mut self) -> Option<Result<ResourcePage, Error>> {
        if self.done {
            return None;
        }

        let mut spec = self.spec.clone();
        spec.page = self.next_page;
        let request = spec.compile_collection(&self.resource);

        let response = match self.client.send(&request).await {
            Ok(response) => response,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };

        let envelope: PagedEnvelope = match decode_json(response).await {
            Ok(envelope) => envelope,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };

        let mut records = Vec::with_capacity(envelope.data.len());
        for raw in envelope.data {
            match self.client.registry().decode(&self.resource, raw) {
                Ok(resolved) => records.push(resolved),
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }

        let page = ResourcePage::new(records, envelope.pagination);
        // An empty page ends iteration even if the counts promise more.
        if page.has_more() && !page.is_empty() {
            self.next_page = page.pagination().page() + 1;
        } else {
            self.done = true;
        }

        Some(Ok(page))
    }
}
