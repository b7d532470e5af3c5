//! Client library for the Urban Dictionary REST API.
//!
//! Besides definition lookup, the service surfaces two values only on its
//! HTML pages: the word of the day (in the homepage title) and the list
//! of trending search terms. This crate scrapes both out of the page
//! tree and folds them into the same typed API.
//!
//! ```no_run
//! # async fn run() -> Result<(), urbandict::UrbanError> {
//! let client = urbandict::UrbanClient::new()?;
//!
//! let def = client.define("hygge").await?;
//! println!("{}: {}", def.word, def.definition);
//!
//! let wotd = client.word_of_the_day().await?;
//! let trending = client.trending().await?;
//! # Ok(())
//! # }
//! ```
//!
//! All network calls are async; bring your own runtime. Callers that need
//! the untruncated payload (vote counts, sounds, tags) can use the `_raw`
//! variants, which return the full [`DefinitionResponse`].

mod client;
mod config;
mod domain;
mod scrape;

pub use client::UrbanClient;
pub use config::Endpoints;
pub use domain::error::UrbanError;
pub use domain::model::{Definition, DefinitionResponse};
