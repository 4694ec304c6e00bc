//! Payload schemas for POST bodies.
//!
//! Decoding is structural only: missing fields fall back to their zero
//! values and unknown fields are ignored, matching the wire contract the
//! frontend already relies on. No field-level validation (negative price,
//! empty name) is performed.

use serde::Deserialize;

/// Body of a login request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginPayload {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// One item of a payment request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub quantity: i64,
}

/// Shape an endpoint expects in a POST body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySchema {
    /// No body is read for this endpoint.
    None,
    /// A single `LoginPayload` object.
    Login,
    /// A JSON array of `Product`.
    ProductList,
}

/// A successfully decoded POST body, kept only long enough to log it.
#[derive(Debug)]
pub enum DecodedPayload {
    None,
    Login(LoginPayload),
    Products(Vec<Product>),
}

impl BodySchema {
    /// Whether the schema requires a top-level JSON array.
    pub fn expects_array(self) -> bool {
        matches!(self, Self::ProductList)
    }

    /// Structurally decode `body` into the expected shape.
    pub fn decode(self, body: &[u8]) -> Result<DecodedPayload, serde_json::Error> {
        match self {
            Self::None => Ok(DecodedPayload::None),
            Self::Login => serde_json::from_slice(body).map(DecodedPayload::Login),
            Self::ProductList => serde_json::from_slice(body).map(DecodedPayload::Products),
        }
    }
}
