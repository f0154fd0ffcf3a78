//! geosite-unpack - Unpack geosite.dat rule lists into text rule files.
//!
//! A `geosite.dat` file groups domain rules under country/region tags. Each
//! rule has a match type (keyword, regexp, domain suffix or full domain) and
//! optional attributes such as `@ads` or `@cn`. This crate decodes such a
//! file and writes the rules out as plain-text lists understood by proxy and
//! DNS filtering tools.
//!
//! # Quick Start
//!
//! ```ignore
//! use geosite_unpack::{unpack, UnpackConfig};
//!
//! // Unpack two selectors into ./rules
//! let config = UnpackConfig::new("geosite.dat")
//!     .with_out_dir("rules")
//!     .with_filters(["cn", "google@cn"]);
//! let written = unpack(&config)?;
//! // rules/geosite_cn.txt, rules/geosite_google@cn.txt
//! ```
//!
//! Without filters every tag is unpacked, split by attribute:
//! `geosite_<tag>.txt` holds the rules without attributes and
//! `geosite_<tag>@<attr>.txt` the rules carrying `<attr>`.
//!
//! # Text Format
//!
//! | Match type | Line              |
//! |------------|-------------------|
//! | Plain      | `keyword:<value>` |
//! | Regex      | `regexp:<value>`  |
//! | Domain     | `<value>`         |
//! | Full       | `full:<value>`    |
//!
//! # Lower-level API
//!
//! The pipeline stages are public for callers that already hold decoded
//! data: [`geosite::decode`], [`TagIndex::build`], [`group::resolve`] /
//! [`group::auto_groups`] and [`TextWriter`].

mod config;
mod error;
mod rule_type;
mod selector;
mod unpack;

pub mod converter;
pub mod geosite;
pub mod group;
pub mod index;

// Re-export core types
pub use config::UnpackConfig;
pub use error::{DecodeError, Error, Result};
pub use rule_type::MatchType;
pub use selector::Selector;

// Re-export pipeline types
pub use converter::{TextParser, TextRule, TextWriter};
pub use group::OutputGroup;
pub use index::TagIndex;
pub use unpack::{unpack, unpack_list, WrittenGroup};
