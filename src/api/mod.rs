//! Remote design-data access: screen URLs and the REST client.

mod client;
mod url;

pub use client::{HttpFetcher, ZeplinClient, DEFAULT_API_URL};
pub use url::{parse_screen_url, ScreenRef, APP_HOST};
