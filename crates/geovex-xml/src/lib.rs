//! GVX (GNSS Vector Exchange) document assembly and serialization
//!
//! This crate builds and serializes the hierarchical XML documents used to
//! exchange geodetic survey vector observations between surveying
//! applications. It implements one fixed schema family (GVX, with CVX and
//! LVX sharing the envelope), not arbitrary document structures.
//!
//! The pieces:
//!
//! - [`validate`]: pure predicates for integer/real/datetime field text
//! - [`datefmt`]: normalization of loose date strings into the canonical
//!   `YYYY-MM-DDThh:mm:ss.ss` pattern with floor/ceiling boundary fill
//! - [`document`]: the ordered element tree shared by all variants
//! - [`writer`]: the [`GvxWriter`] builder with per-call validation and
//!   singleton-section enforcement
//! - [`serializer`]: single-pass XML rendering
//!
//! # Example
//!
//! ```
//! use geovex_xml::{GvxWriter, SourceDataArgs};
//!
//! let mut writer = GvxWriter::new("survey.gvx");
//! writer.add_source_data(SourceDataArgs {
//!     name: Some("OPUS Projects".into()),
//!     created_date: Some("2021-06-15T08:30:00.00".into()),
//!     application_name: Some("OPUS".into()),
//!     application_version: Some("5.1".into()),
//!     converted_by_software_name: Some("geovex".into()),
//!     converted_by_converted_date: Some("2021-06-16T00:00:00.00".into()),
//!     ..Default::default()
//! })?;
//! let document = writer.into_document();
//! let xml = document.to_xml()?;
//! assert!(xml.contains("<SOURCE_DATA>"));
//! # Ok::<(), geovex_xml::GvxError>(())
//! ```

pub mod datefmt;
pub mod document;
pub mod error;
pub mod sections;
pub mod serializer;
pub mod validate;
pub mod writer;

pub use datefmt::{normalize_date, Boundary, NormalizedDate};
pub use document::{Document, Element, Format};
pub use error::{GvxError, Result, ValueKind};
pub use sections::{
    CcmBlock, EquipmentArgs, GnssVectorArgs, PointArgs, ProjectInformationArgs,
    ReferenceSystemArgs, SessionArgs, SourceDataArgs, SurveySetupArgs,
};
pub use serializer::serialize_document;
pub use validate::{is_datetime, is_integer, is_real};
pub use writer::GvxWriter;
