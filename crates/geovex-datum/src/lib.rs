//! Reference-system lookups for GVX conversion
//!
//! Survey submissions name their datum loosely ("NAD 83 (2011)", "WGS-84",
//! legacy bluebook codes). This crate maps those spellings onto the ISO
//! register identifiers the exchange format expects, together with the
//! realization epoch where one is defined.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatumError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatumError {
    /// The alias did not match any known datum spelling.
    #[error("no ISO id and epoch known for datum alias {0:?}")]
    UnknownAlias(String),
}

/// An ISO register entry resolved from a datum alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatumRef {
    /// ISO geodetic register identifier
    pub iso_id: &'static str,
    /// Realization epoch, or an epoch range for multi-adjustment realizations
    pub epoch: &'static str,
}

/// An ISO register entry resolved from a bluebook reference-frame code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoRef {
    pub iso_id: &'static str,
    pub name: &'static str,
}

/// Alias spellings are compared after normalization, so the table holds
/// normalized keys only. Multiple spellings may share one entry.
const ALIAS_TABLE: &[(&[&str], DatumRef)] = &[
    (
        &["NAD832011", "NAD1983"],
        DatumRef { iso_id: "126", epoch: "2010.00" },
    ),
    (
        &["NAD83PA11"],
        DatumRef { iso_id: "188", epoch: "2010.00" },
    ),
    (
        &["NAD83MA11"],
        DatumRef { iso_id: "101", epoch: "2010.00" },
    ),
    (
        &["NAD831986", "NAD83ORIGINAL"],
        DatumRef { iso_id: "161", epoch: "1986.00" },
    ),
    (
        &["NAD83HARN", "NAD83HPGN", "NAD831989TONAD831997"],
        DatumRef { iso_id: "119", epoch: "1989-1997" },
    ),
    (
        &["NAD83FBN", "NAD831996TONAD832001"],
        DatumRef { iso_id: "176", epoch: "1996-2001" },
    ),
    (
        &["NAD83CORS96"],
        DatumRef { iso_id: "112", epoch: "2002.00-2003.00" },
    ),
    (
        &["NAD832007NAD"],
        DatumRef { iso_id: "134", epoch: "2007.00" },
    ),
    (
        &["NAD83PACP00"],
        DatumRef { iso_id: "113", epoch: "1993.62" },
    ),
    (
        &["NAD83MARP00"],
        DatumRef { iso_id: "162", epoch: "1993.62" },
    ),
    (
        &["WGS84", "WORLDGEODETICSYS84"],
        DatumRef { iso_id: "131", epoch: "2005.00" },
    ),
];

/// Strips everything but ASCII alphanumerics and uppercases the rest, so
/// "NAD 83 (2011)" and "nad83-2011" compare equal.
fn normalize(alias: &str) -> String {
    alias
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Resolves a datum alias to its ISO id and epoch.
pub fn lookup_alias(alias: &str) -> Result<DatumRef> {
    let normalized = normalize(alias);
    for (names, datum) in ALIAS_TABLE {
        if names.contains(&normalized.as_str()) {
            return Ok(*datum);
        }
    }
    Err(DatumError::UnknownAlias(normalized))
}

/// Resolves a bluebook reference-frame code ("21", "32", ...) to its ISO id
/// and frame name. Returns `None` for codes outside the published table.
pub fn bluebook_to_iso(code: &str) -> Option<IsoRef> {
    let (iso_id, name) = match code {
        "02" => ("156", "World Geodetic System 1984 TRANSIT"),
        "05" => ("192", "ITRF1989"),
        "08" => ("143", "ITRF1991"),
        "11" => ("103", "ITRF1992"),
        "12" => ("122", "ITRF1993"),
        "13" => ("116", "World Geodetic System 1984 (G730)"),
        "15" => ("197", "ITRF1994"),
        "16" => ("135", "World Geodetic System 1984 (G873)"),
        "18" => ("146", "ITRF1996"),
        "19" => ("145", "ITRF1997"),
        "20" => ("142", "IGS97"),
        "21" => ("165", "ITRF2000"),
        "22" => ("194", "IGS00"),
        "23" => ("114", "World Geodetic System 1984 (G1150)"),
        "24" => ("115", "IGb00"),
        "25" => ("105", "ITRF2005"),
        "26" => ("202", "IGS05"),
        "29" => ("179", "ITRF2008"),
        "27" => ("106", "IGS08"),
        "28" => ("159", "IGb08"),
        "30" => ("196", "World Geodetic System 1984 (G1674)"),
        "31" => ("131", "World Geodetic System 1984 (G1762)"),
        "32" => ("175", "ITRF2014"),
        "33" => ("153", "IGS14"),
        "37" => ("724", "IGb14"),
        _ => return None,
    };
    Some(IsoRef { iso_id, name })
}
