//! venue-cli
//! =========
//!
//! Command-line interface for the `venue-core` directory engine.
//!
//! This crate primarily provides a binary (`venue-cli`). The library target
//! only carries this overview so the documentation has a landing page.
//!
//! Basic usage:
//!
//! ```text
//! venue-cli --help
//! venue-cli stats
//! venue-cli list --sport padel --city mannheim --sort price-asc
//! venue-cli show padelbox-mannheim
//! venue-cli map --select heidelberg-padel-club
//! venue-cli --input venues.json build --out venues.bin
//! ```
//!
//! For programmatic access use the [`venue-core`] crate directly.
//!
//! [`venue-core`]: https://docs.rs/venue-core
#![cfg_attr(docsrs, feature(doc_cfg))]
