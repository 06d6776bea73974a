//! geovex - convert JSON survey job descriptions into GVX XML
//!
//! A job file carries the envelope sections plus any number of body
//! sections. Loose dates are normalized before validation; datum aliases
//! resolve through the ISO register so jobs can say "NAD 83 (2011)" instead
//! of carrying register identifiers around.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing::{info, warn};

use geovex_xml::{
    normalize_date, Boundary, EquipmentArgs, GnssVectorArgs, GvxWriter, NormalizedDate, PointArgs,
    ProjectInformationArgs, ReferenceSystemArgs, SessionArgs, SourceDataArgs, SurveySetupArgs,
};

/// Convert a JSON survey job into a GVX document
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON job description to convert
    #[arg(long, short)]
    input: PathBuf,

    /// Path of the GVX file to write
    #[arg(long, short)]
    output: PathBuf,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

/// One conversion job. Body sections render in the order listed here.
#[derive(Debug, Default, Deserialize)]
struct Job {
    source_data: Option<SourceDataArgs>,
    project_information: Option<ProjectInformationArgs>,
    #[serde(default)]
    reference_systems: Vec<ReferenceSystemJob>,
    #[serde(default)]
    equipment: Vec<EquipmentArgs>,
    #[serde(default)]
    survey_setups: Vec<SurveySetupArgs>,
    #[serde(default)]
    points: Vec<PointArgs>,
    #[serde(default)]
    gnss_vectors: Vec<GnssVectorArgs>,
    #[serde(default)]
    sessions: Vec<SessionArgs>,
}

/// A reference-system entry naming its datum by alias or by legacy bluebook
/// code. A resolved alias fills in the ISO id when the entry leaves it
/// blank, and its epoch becomes the default for points that carry none.
/// A bluebook code fills the id and frame name the same way; unknown codes
/// only warn, since the entry may carry an explicit id of its own.
#[derive(Debug, Default, Deserialize)]
struct ReferenceSystemJob {
    datum_alias: Option<String>,
    bluebook_code: Option<String>,
    #[serde(flatten)]
    section: ReferenceSystemArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let job_content = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read job file: {:?}", args.input))?;
    let job: Job = serde_json::from_str(&job_content).context("failed to parse job file")?;

    let writer = build_writer(job, &args.output)?;
    writer.write_file()?;
    info!("conversion complete: {}", args.output.display());

    Ok(())
}

fn build_writer(mut job: Job, output: &PathBuf) -> Result<GvxWriter> {
    let mut writer = GvxWriter::new(output);

    if let Some(mut source_data) = job.source_data.take() {
        normalize_field(&mut source_data.created_date, Boundary::Floor, "CREATED_DATE");
        normalize_field(
            &mut source_data.converted_by_converted_date,
            Boundary::Floor,
            "CONVERTED_DATE",
        );
        writer
            .add_source_data(source_data)
            .context("SOURCE_DATA rejected")?;
    }

    if let Some(mut project) = job.project_information.take() {
        normalize_field(&mut project.start_date, Boundary::Floor, "START_DATE");
        normalize_field(&mut project.end_date, Boundary::Ceiling, "END_DATE");
        writer
            .add_project_information(project)
            .context("PROJECT_INFORMATION rejected")?;
    }

    let mut default_epoch = None;
    for mut entry in job.reference_systems {
        if let Some(alias) = &entry.datum_alias {
            let datum = geovex_datum::lookup_alias(alias)?;
            if entry.section.id.is_none() {
                entry.section.id = Some(datum.iso_id.to_string());
            }
            default_epoch.get_or_insert_with(|| datum.epoch.to_string());
        }
        if let Some(code) = &entry.bluebook_code {
            match geovex_datum::bluebook_to_iso(code) {
                Some(iso) => {
                    if entry.section.id.is_none() {
                        entry.section.id = Some(iso.iso_id.to_string());
                    }
                    if entry.section.name.is_none() {
                        entry.section.name = Some(iso.name.to_string());
                    }
                }
                None => warn!(code = %code, "no ISO entry for bluebook code"),
            }
        }
        writer
            .add_reference_system(entry.section)
            .context("REFERENCE_SYSTEM rejected")?;
    }

    for equipment in job.equipment {
        writer.add_equipment(equipment).context("EQUIPMENT rejected")?;
    }
    for setup in job.survey_setups {
        writer
            .add_survey_setup(setup)
            .context("SURVEY_SETUP rejected")?;
    }
    for mut point in job.points {
        if point.epoch.is_none() {
            point.epoch = default_epoch.clone();
        }
        writer.add_point(point).context("POINT rejected")?;
    }
    for mut vector in job.gnss_vectors {
        normalize_field(&mut vector.download_date, Boundary::Floor, "DOWNLOAD_DATE");
        writer
            .add_gnss_vector(vector)
            .context("GNSS_VECTOR rejected")?;
    }
    for session in job.sessions {
        writer.add_session(session).context("SESSION rejected")?;
    }

    Ok(writer)
}

/// Normalizes a loose date in place. Unrecognized input passes through so
/// the section validation reports it against the right field name.
fn normalize_field(field: &mut Option<String>, boundary: Boundary, label: &str) {
    if let Some(raw) = field.take() {
        match normalize_date(&raw, boundary) {
            NormalizedDate::Canonical(canonical) => *field = Some(canonical),
            NormalizedDate::Unrecognized(kept) => {
                warn!(field = label, value = %kept, "unrecognized date passed through");
                *field = Some(kept);
            }
        }
    }
}
