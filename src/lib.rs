//! # Cappasity SDK for Rust
//!
//! Rust client for the [Cappasity](https://cappasity.com) 3D/AR marketplace
//! embed-code API. Request an embeddable player (`<iframe>`) for a product
//! model by its marketplace URL or by SKU/barcode, with typed errors and
//! idiomatic async Rust.
//!
//! ## Quick start
//!
//! ```no_run
//! use cappasity::{Client, EmbedAttributes, Subject};
//!
//! #[tokio::main]
//! async fn main() -> cappasity::Result<()> {
//!     // Reads the token argument; see ClientBuilder for the
//!     // CAPPASITY_API_TOKEN environment fallback.
//!     let client = Client::new("eyJhbGciOi...")?;
//!
//!     let attrs = EmbedAttributes {
//!         width: Some(100),   // <= 100 means percent, larger means pixels
//!         height: Some(600),
//!         autorun: Some(true),
//!         ..Default::default()
//!     };
//!
//!     // Look up by marketplace URL...
//!     let subject = Subject::url("https://3d.cappasity.com/u/vendor/2724daa5-cb68-43f9-8d5a-36be7e06f88d");
//!     let code = client.embed_code(&subject, &attrs).await?;
//!     println!("player {:?}: {}", code.id, code.html);
//!
//!     // ...or by SKU/barcode.
//!     let code = client.embed_for_sku("1239172819", &attrs).await?;
//!     println!("{}", code.html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! Every failure surfaces as a [`CappasityError`] variant; nothing is retried
//! or swallowed internally. A 404 (no model for the given URL or SKU) is the
//! one expected failure mode and gets its own variant:
//!
//! ```no_run
//! use cappasity::{CappasityError, Client, EmbedAttributes};
//!
//! # async fn example(client: Client) {
//! match client.embed_for_sku("1239172819", &EmbedAttributes::default()).await {
//!     Ok(code) => println!("{}", code.html),
//!     Err(CappasityError::NotFound { .. }) => println!("no model for that SKU"),
//!     Err(err) => eprintln!("request failed: {err}"),
//! }
//! # }
//! ```

mod client;
mod errors;
mod models;

pub use client::{Client, ClientBuilder};
pub use errors::{CappasityError, Result};
pub use models::{EmbedAttributes, EmbedCode, Subject};
