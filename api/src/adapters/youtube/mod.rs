//! YouTube Data API adapter

mod client;

pub use client::YouTubeClientImpl;
