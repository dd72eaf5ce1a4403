//! Dataset metadata to warehouse table mapping.
//!
//! A publish request carries a title, a sample of the uploaded CSV and the
//! URI where the upload landed. [`MetadataMapper`] turns that into a
//! [`TableDescriptor`] whose names the warehouse DDL grammar accepts:
//!
//! ```text
//! title ──────────► normalize ─────────────────────────────► table name
//! header line ────► split ─► header check ─► normalize ─► column check ─► fields
//! target URI ─────► extract location ───────────────────────► location
//! ```
//!
//! ```
//! use dataset_publisher::publisher::{Metadata, MetadataMapper, RestrictedKeywords};
//!
//! let mapper = MetadataMapper::new(RestrictedKeywords::hive());
//! let metadata = Metadata {
//!     org_uuid: "org".to_owned(),
//!     title: "Qatar: GDP (constant LCU)".to_owned(),
//!     data_sample: "Country,Date,Value".to_owned(),
//!     target_uri: "hdfs://nn/cf/broker/instances/9614e6a4/000000_1".to_owned(),
//!     is_public: false,
//! };
//!
//! let table = mapper.map(&metadata, "org")?;
//! assert_eq!(table.table_name, "qatar__gdp__constant_lcu_");
//! assert_eq!(table.fields, ["country", "date_", "value"]);
//! assert_eq!(table.location, "/cf/broker/instances/9614e6a4");
//! # Ok::<(), dataset_publisher::error::PublisherError>(())
//! ```

pub mod keywords;
pub mod location;
pub mod mapper;
pub mod metadata;
pub mod naming;
pub mod table;
pub mod validation;

pub use keywords::{KeywordLookup, RestrictedKeywords};
pub use location::extract_location;
pub use mapper::{MetadataMapper, map_metadata};
pub use metadata::Metadata;
pub use naming::{IDENTIFIER_MAX_LEN, is_valid_identifier, normalize_identifier};
pub use table::{COLUMN_TYPE, TableDescriptor};
pub use validation::{DuplicateKind, find_duplicates, validate_unique};
