//! Builds directory trees on disk from their text drawings.
//!
//! ```text
//! project/
//! ├── src/
//! │   └── main.go
//! └── README.md
//! ```
//!
//! [`parse_input`] turns such a drawing into a [`Node`] tree and
//! [`build_tree`] creates it, relative to the working directory. Use
//! [`Materializer`] to create it somewhere else.

#![allow(clippy::enum_variant_names)]

pub mod application;
pub mod cli;
pub mod config;
pub mod ext;
pub mod materializer;
pub mod parser;
pub mod validator;

pub use materializer::{MaterializeError, MaterializeReport, Materializer, build_tree};
pub use parser::{Node, ParseError, parse_input};
pub use validator::is_valid_path;
