//! Upstream feed transport adapter

mod client;

pub use client::FeedFetcherImpl;
