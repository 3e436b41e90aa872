//! # stamp-core
//!
//! Core library for `stamp`: timestamped notes kept as rows of CSV files.
//!
//! A *notebook* is a directory, a *page* is `<notebook>/<name>.csv`, and every
//! row of a page is `timestamp,text`. The active notebook and page are stored
//! in a small JSON config file.
//!
//! - [`config`]: active notebook/page selection and its JSON file
//! - [`page`]: appending to and reading page files
//! - [`query`]: slices and searches over the rows of a page
//! - [`command`]: routing command-line words to a [`Command`]
//! - [`csv`]: the row codec used by [`page`]

pub mod command;
pub mod config;
pub mod csv;
pub mod error;
pub mod page;
pub mod query;

pub use command::Command;
pub use config::{Config, ConfigStore};
pub use error::{StampError, StampResult};
pub use page::{Note, Page};
pub use query::{Selection, TimeQuery};
