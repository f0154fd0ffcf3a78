//! geosite.dat decoding.
//!
//! A geosite file is a protobuf `GeoSiteList`:
//!
//! ```text
//! GeoSiteList
//! └── entry: GeoSite*
//!     ├── country_code: string   (the tag, e.g. "CN")
//!     └── domain: Domain*
//!         ├── type: int32        (Plain=0, Regex=1, Domain=2, Full=3)
//!         ├── value: string
//!         └── attribute: Attribute*
//!             ├── key: string
//!             └── bool_value | int_value
//! ```
//!
//! Match type codes are kept as raw integers so that unknown codes survive
//! decoding and are rejected when a group is projected.

mod format;
mod reader;

pub use format::{attribute, Attribute, Domain, GeoSite, GeoSiteList};
pub use reader::{decode, load, load_from_bytes};
