//! Search page state.
//!
//! The view owns three pieces of state (loading flag, user facing error and
//! the current result list) and renders purely from them. Every fetch is
//! issued as a [`FetchTicket`]; only the result for the most recently issued
//! ticket is ever applied, so a slow response can't clobber a newer one.

use std::fmt::Write;

use derive_more::Display;

use crate::{ApiClient, ApiError, Food, FoodSearchResponse};

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch foods from USDA API.";

#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence(u64);

impl Sequence {
    fn next(&mut self) {
        self.0 += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoodsRequest {
    List,
    Search(String),
}

impl FoodsRequest {
    /// An empty query lists everything instead of searching.
    pub fn for_query(query: &str) -> Self {
        if query.is_empty() {
            FoodsRequest::List
        } else {
            FoodsRequest::Search(query.to_string())
        }
    }

    pub fn endpoint(&self) -> String {
        match self {
            FoodsRequest::List => String::from("/foods/list"),
            FoodsRequest::Search(query) => {
                let params = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("query", query)
                    .finish();
                format!("/foods/search?{params}")
            }
        }
    }

    #[tracing::instrument(skip(client))]
    pub async fn send(&self, client: &ApiClient) -> Result<Vec<Food>, ApiError> {
        match self {
            FoodsRequest::List => {
                let body: serde_json::Value = client.get(&self.endpoint()).await?;
                if !body.is_array() {
                    tracing::warn!("food list response was not an array");
                    return Ok(Vec::new());
                }
                Ok(serde_json::from_value(body)?)
            }
            FoodsRequest::Search(_) => {
                let body: FoodSearchResponse = client.get(&self.endpoint()).await?;
                Ok(body.foods)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    sequence: Sequence,
    request: FoodsRequest,
}

impl FetchTicket {
    pub fn sequence(&self) -> Sequence {
        self.sequence
    }

    pub fn request(&self) -> &FoodsRequest {
        &self.request
    }
}

#[derive(Debug)]
pub struct SearchView {
    query: String,
    loading: bool,
    error: Option<String>,
    foods: Vec<Food>,
    latest: Sequence,
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchView {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            loading: true,
            error: None,
            foods: Vec::new(),
            latest: Sequence::default(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    /// Initial unfiltered fetch.
    pub fn mount(&mut self) -> FetchTicket {
        self.begin(FoodsRequest::List)
    }

    pub fn submit(&mut self) -> FetchTicket {
        let request = FoodsRequest::for_query(&self.query);
        self.begin(request)
    }

    pub fn clear(&mut self) -> FetchTicket {
        self.query.clear();
        self.begin(FoodsRequest::List)
    }

    fn begin(&mut self, request: FoodsRequest) -> FetchTicket {
        self.latest.next();
        self.loading = true;

        FetchTicket {
            sequence: self.latest,
            request,
        }
    }

    /// Applies the outcome of `ticket`. Returns `false` when a newer ticket
    /// has been issued since and the result was dropped.
    pub fn apply(&mut self, ticket: FetchTicket, result: Result<Vec<Food>, ApiError>) -> bool {
        if ticket.sequence != self.latest {
            tracing::debug!(
                stale = %ticket.sequence,
                latest = %self.latest,
                "discarding stale food response"
            );
            return false;
        }

        match result {
            Ok(foods) => {
                self.foods = foods;
                self.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch foods");
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;

        true
    }

    /// Sends `ticket` through `client` and applies the response.
    pub async fn run(&mut self, client: &ApiClient, ticket: FetchTicket) -> bool {
        let result = ticket.request.send(client).await;
        self.apply(ticket, result)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.loading {
            out.push_str("Loading foods...\n");
        }

        if let Some(error) = &self.error {
            out.push_str(error);
            out.push('\n');
        }

        if !self.loading && self.error.is_none() {
            let _ = writeln!(out, "Showing {} foods", self.foods.len());
            for food in &self.foods {
                let _ = writeln!(out, "- {}", food.description);
                let details = food.details().collect::<Vec<_>>();
                if !details.is_empty() {
                    let _ = writeln!(out, "  {}", details.join(" | "));
                }
            }
            if self.foods.is_empty() {
                out.push_str("No foods found.\n");
            }
        }

        out
    }
}
