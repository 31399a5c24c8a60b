use reqwest::{Method, Url};

use crate::error::NursysError;

/// Where a call goes: method, path under the base URL and query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    method: Method,
    path: &'static str,
    query: Vec<(&'static str, String)>,
}

impl Endpoint {
    #[must_use]
    pub const fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
        }
    }

    #[must_use]
    pub const fn get(path: &'static str) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub const fn post(path: &'static str) -> Self {
        Self::new(Method::POST, path)
    }

    /// Appends a query parameter; the value is form-url-encoded on the wire.
    #[must_use]
    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Resolves this endpoint against `base_url` by plain concatenation.
    ///
    /// # Errors
    /// Returns `RequestConstruction` when the joined URL does not parse.
    pub fn url(&self, base_url: &str) -> Result<Url, NursysError> {
        let raw = format!("{base_url}{}", self.path);
        let mut url = Url::parse(&raw).map_err(|source| NursysError::RequestConstruction {
            url: raw.clone(),
            source,
        })?;
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }
}
