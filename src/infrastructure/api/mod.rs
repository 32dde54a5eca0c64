//! Remote authentication API client.

mod client;
mod dto;

pub use client::{DEFAULT_API_URL, HttpAuthClient};
