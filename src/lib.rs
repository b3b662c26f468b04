//! # prettytree
//!
//! A structural pretty-printer and deep serializer for runtime values of
//! arbitrary, possibly heterogeneous shape.
//!
//! Any value (scalars, text, sequences, tuples, sets, mappings,
//! enumeration members, or user-defined composites with named fields) can
//! be turned into:
//!
//! - an indented, bracket-delimited display string, and
//! - a fully-expanded plain-data tree built only from primitives, text,
//!   lists, and mappings, ready for JSON encoding, recursing into nested
//!   composites that a shallow conversion would leave opaque
//!
//! ## Command-Line Tool
//!
//! This crate includes the `ptree` CLI tool for inspecting JSON documents
//! from the terminal:
//!
//! ```sh
//! # Install
//! cargo install prettytree
//!
//! # Pretty-print JSON from stdin
//! echo '{"a":1,"b":[1,2]}' | ptree
//!
//! # Emit the deep-serialized JSON tree instead
//! ptree --json input.json
//! ```
//!
//! Run `ptree --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use prettytree::{format_value, Value};
//!
//! let value = Value::Map(vec![
//!     (Value::Text("a".into()), Value::Int(1)),
//!     (Value::Text("b".into()), Value::List(vec![Value::Int(1), Value::Int(2)])),
//! ]);
//!
//! println!("{}", format_value(&value));
//! ```
//!
//! ## Inspecting Rust Types
//!
//! Any type implementing [`serde::Serialize`] converts to a [`Value`]
//! directly, keeping its declared type name and field order:
//!
//! ```rust
//! use prettytree::{format_value, to_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     scores: Vec<i32>,
//! }
//!
//! let player = Player {
//!     name: "Alice".into(),
//!     scores: vec![95, 87],
//! };
//!
//! let value = to_value(&player).unwrap();
//! assert_eq!(
//!     format_value(&value),
//!     "Player(\n    name=\"Alice\",\n    scores=[\n        95,\n        87\n    ]\n)"
//! );
//! ```
//!
//! ## Debug Reports
//!
//! The [`build_report`] and [`run_session`] helpers assemble the pretty
//! text and the deep-serialized JSON into a reply for a host transport,
//! behind injected [`Logger`], [`ReplyChannel`], and [`InputWaiter`]
//! capabilities, with toggles in [`ReportOptions`].
//!
//! ## Example Output
//!
//! ```text
//! Player(
//!     name="Alice",
//!     scores=[
//!         95,
//!         87
//!     ]
//! )
//! ```

mod block;
mod convert;
mod error;
mod formatter;
mod model;
mod options;
mod plain;
mod report;

pub use crate::block::render_block;
pub use crate::convert::{to_value, to_value_with_limit};
pub use crate::error::{PrettyTreeError, Result};
pub use crate::formatter::format_value;
pub use crate::model::{Kind, Value};
pub use crate::options::ReportOptions;
pub use crate::plain::{to_json_string, to_plain_tree};
pub use crate::report::{
    build_report, run_session, InputWaiter, Logger, Reply, ReplyChannel, ReplyPart,
    TracingLogger, INTERNAL_ERROR_NOTICE, TIMEOUT_NOTICE,
};
