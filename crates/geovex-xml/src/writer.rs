//! GVX document builder
//!
//! A [`GvxWriter`] owns one in-progress document. Callers add sections in
//! whatever order the survey data dictates; each add-call validates every
//! supplied field before anything touches the tree, so a failed call leaves
//! the document exactly as it was. The writer is consumed by
//! [`GvxWriter::write_file`] (or [`GvxWriter::into_document`]), which makes
//! re-entry after finalization impossible by construction.

use std::path::{Path, PathBuf};

use crate::document::{Document, Element, Format};
use crate::error::{GvxError, Result, ValueKind};
use crate::sections::{
    self, CcmBlock, EquipmentArgs, GnssVectorArgs, PointArgs, ProjectInformationArgs,
    ReferenceSystemArgs, SessionArgs, SourceDataArgs, SurveySetupArgs,
};

/// Builder for GVX (GNSS Vector Exchange) documents.
///
/// SOURCE_DATA and PROJECT_INFORMATION are single-shot; the repeatable
/// sections append one new instance per call. REFERENCE_SYSTEM is shared:
/// every call appends one more LINEAR_UNIT/ANGULAR_UNIT pair to it.
pub struct GvxWriter {
    path: PathBuf,
    source_data: Option<Element>,
    project_information: Option<Element>,
    reference_system: Element,
    body: Vec<Element>,
}

impl GvxWriter {
    /// Creates a writer that will serialize to `path`. The document envelope
    /// (format code, version) is established here, once.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            source_data: None,
            project_information: None,
            reference_system: sections::reference_system_envelope(),
            body: Vec::new(),
        }
    }

    /// Adds the SOURCE_DATA section. Single-shot.
    pub fn add_source_data(&mut self, args: SourceDataArgs) -> Result<()> {
        if self.source_data.is_some() {
            return Err(GvxError::DuplicateSection("SOURCE_DATA"));
        }
        required("NAME", &args.name)?;
        required_checked("CREATED_DATE", &args.created_date, ValueKind::DateTime)?;
        required("APPLICATION NAME", &args.application_name)?;
        required("APPLICATION VERSION", &args.application_version)?;
        required("CONVERTED_BY SOFTWARE_NAME", &args.converted_by_software_name)?;
        required_checked(
            "CONVERTED_DATE",
            &args.converted_by_converted_date,
            ValueKind::DateTime,
        )?;

        self.source_data = Some(sections::source_data(&args));
        Ok(())
    }

    /// Adds the PROJECT_INFORMATION section. Single-shot.
    pub fn add_project_information(&mut self, args: ProjectInformationArgs) -> Result<()> {
        if self.project_information.is_some() {
            return Err(GvxError::DuplicateSection("PROJECT_INFORMATION"));
        }
        required("TITLE", &args.title)?;
        required("PARTY_CHIEF", &args.party_chief)?;
        required("AGENCY", &args.agency)?;
        required_checked("START_DATE", &args.start_date, ValueKind::DateTime)?;
        required_checked("END_DATE", &args.end_date, ValueKind::DateTime)?;

        self.project_information = Some(sections::project_information(&args));
        Ok(())
    }

    /// Appends one LINEAR_UNIT/ANGULAR_UNIT pair to the shared
    /// REFERENCE_SYSTEM section and refreshes its scalar identification.
    pub fn add_reference_system(&mut self, args: ReferenceSystemArgs) -> Result<()> {
        let id = required("ID", &args.id)?.to_string();
        let name = required("NAME", &args.name)?.to_string();
        required("LINEAR_UNIT NAME", &args.linear_unit_name)?;
        required("ANGULAR_UNIT NAME", &args.angular_unit_name)?;
        optional_checked(
            "LINEAR_UNIT SIGNIFICANT_DIGITS",
            &args.linear_unit_significant_digits,
            ValueKind::Integer,
        )?;
        optional_checked(
            "LINEAR_UNIT CONVERSION_FACTOR",
            &args.linear_unit_conversion_factor,
            ValueKind::Real,
        )?;
        optional_checked(
            "ANGULAR_UNIT SIGNIFICANT_DIGITS",
            &args.angular_unit_significant_digits,
            ValueKind::Integer,
        )?;
        optional_checked(
            "ANGULAR_UNIT CONVERSION_FACTOR",
            &args.angular_unit_conversion_factor,
            ValueKind::Real,
        )?;

        let rs = &mut self.reference_system;
        rs.set_child_text("ID", id);
        rs.set_child_text("NAME", name);
        if let Some(code) = args.code.clone() {
            rs.set_child_text("CODE", code);
        }
        if let Some(remark) = args.remark.clone() {
            rs.set_child_text("REMARK", remark);
        }
        rs.push(sections::unit(
            "LINEAR_UNIT",
            args.linear_unit_name,
            args.linear_unit_significant_digits,
            args.linear_unit_conversion_factor,
        ));
        rs.push(sections::unit(
            "ANGULAR_UNIT",
            args.angular_unit_name,
            args.angular_unit_significant_digits,
            args.angular_unit_conversion_factor,
        ));
        Ok(())
    }

    /// Appends an EQUIPMENT section.
    pub fn add_equipment(&mut self, args: EquipmentArgs) -> Result<()> {
        required("ID", &args.id)?;
        required("RECEIVER TYPE", &args.receiver_type)?;
        required("RECEIVER SERIAL_NUMBER", &args.receiver_serial_number)?;
        required("RECEIVER FIRMWARE_VERSION", &args.receiver_firmware_version)?;
        required("ANTENNA TYPE", &args.antenna_type)?;
        required("ANTENNA SERIAL_NUMBER", &args.antenna_serial_number)?;

        self.body.push(sections::equipment(&args));
        Ok(())
    }

    /// Appends a SURVEY_SETUP section.
    pub fn add_survey_setup(&mut self, args: SurveySetupArgs) -> Result<()> {
        required("ID", &args.id)?;
        required("SOLUTION_TYPE", &args.solution_type)?;
        required("OPERATOR", &args.operator)?;
        required("PROCESSING_SOFTWARE NAME", &args.software_name)?;
        required("PROCESSING_SOFTWARE VERSION", &args.software_version)?;
        optional_checked("IP_PORT", &args.rtk_ip_port, ValueKind::Integer)?;

        self.body.push(sections::survey_setup(&args));
        Ok(())
    }

    /// Appends a POINT section.
    pub fn add_point(&mut self, args: PointArgs) -> Result<()> {
        required("ID", &args.id)?;
        required("NAME", &args.name)?;
        required("EQUIPMENT_ID", &args.equipment_id)?;
        required_checked("ARP_HEIGHT", &args.arp_height, ValueKind::Real)?;
        required("POINT_TYPE", &args.point_type)?;
        required("REFERENCE_SYSTEM_ID", &args.reference_system_id)?;
        required_checked("EPOCH", &args.epoch, ValueKind::Real)?;
        required_checked("LATITUDE", &args.latitude, ValueKind::Real)?;
        required_checked("LONGITUDE", &args.longitude, ValueKind::Real)?;
        required_checked(
            "ELLIPSOIDAL_HEIGHT",
            &args.ellipsoidal_height,
            ValueKind::Real,
        )?;
        // "1"/"0" flag, validated as an integer like the schema asks
        optional_checked("TILT_COMPENSATOR", &args.tilt_compensator, ValueKind::Integer)?;
        optional_checked("X", &args.x, ValueKind::Real)?;
        optional_checked("Y", &args.y, ValueKind::Real)?;
        optional_checked("Z", &args.z, ValueKind::Real)?;
        optional_checked("SDN", &args.sdn, ValueKind::Real)?;
        optional_checked("SDE", &args.sde, ValueKind::Real)?;
        optional_checked("SDU", &args.sdu, ValueKind::Real)?;
        optional_checked("PNE", &args.pne, ValueKind::Real)?;
        optional_checked("PNU", &args.pnu, ValueKind::Real)?;
        optional_checked("PEU", &args.peu, ValueKind::Real)?;
        optional_checked("SDX", &args.sdx, ValueKind::Real)?;
        optional_checked("SDY", &args.sdy, ValueKind::Real)?;
        optional_checked("SDZ", &args.sdz, ValueKind::Real)?;
        optional_checked("PXY", &args.pxy, ValueKind::Real)?;
        optional_checked("PXZ", &args.pxz, ValueKind::Real)?;
        optional_checked("PYZ", &args.pyz, ValueKind::Real)?;

        self.body.push(sections::point(&args));
        Ok(())
    }

    /// Appends a GNSS_VECTOR section.
    pub fn add_gnss_vector(&mut self, args: GnssVectorArgs) -> Result<()> {
        required("ID", &args.id)?;
        required("INITIAL_POINT_ID", &args.initial_point_id)?;
        required("TERMINAL_POINT_ID", &args.terminal_point_id)?;
        required("SURVEY_SETUP_ID", &args.survey_setup_id)?;
        required("START", &args.start)?;
        required("END", &args.end)?;
        required("ORBIT TYPE", &args.orbit_type)?;
        required("ORBIT SOURCE", &args.orbit_source)?;
        required_checked("DX", &args.dx, ValueKind::Real)?;
        required_checked("DY", &args.dy, ValueKind::Real)?;
        required_checked("DZ", &args.dz, ValueKind::Real)?;
        required_checked("SDX", &args.sdx, ValueKind::Real)?;
        required_checked("SDY", &args.sdy, ValueKind::Real)?;
        required_checked("SDZ", &args.sdz, ValueKind::Real)?;
        required_checked("PXY", &args.pxy, ValueKind::Real)?;
        required_checked("PXZ", &args.pxz, ValueKind::Real)?;
        required_checked("PYZ", &args.pyz, ValueKind::Real)?;

        optional_checked("UTC_OFFSET", &args.utc_offset, ValueKind::Real)?;
        optional_checked("LEAP_SECONDS", &args.leap_seconds, ValueKind::Integer)?;
        optional_checked("EPOCHS_USED", &args.epochs_used, ValueKind::Integer)?;
        optional_checked("ELEVATION", &args.elevation, ValueKind::Real)?;
        optional_checked("PDOP_MASK", &args.pdop_mask, ValueKind::Real)?;
        optional_checked("RMS", &args.rms, ValueKind::Real)?;
        optional_checked("GDOP", &args.gdop, ValueKind::Real)?;
        optional_checked("HDOP", &args.hdop, ValueKind::Real)?;
        optional_checked("PDOP", &args.pdop, ValueKind::Real)?;
        optional_checked("TDOP", &args.tdop, ValueKind::Real)?;
        optional_checked("VDOP", &args.vdop, ValueKind::Real)?;
        optional_checked("SATELLITE TOTAL", &args.satellite_total, ValueKind::Integer)?;
        optional_checked("GPS", &args.gps, ValueKind::Integer)?;
        optional_checked("GLONASS", &args.glonass, ValueKind::Integer)?;
        optional_checked("GALILEO", &args.galileo, ValueKind::Integer)?;
        optional_checked("QZSS", &args.qzss, ValueKind::Integer)?;
        optional_checked("BEIDOU", &args.beidou, ValueKind::Integer)?;
        optional_checked("DOWNLOAD_DATE", &args.download_date, ValueKind::DateTime)?;
        optional_checked("CORRECTOR_AGE", &args.corrector_age, ValueKind::Integer)?;

        self.body.push(sections::gnss_vector(&args));
        Ok(())
    }

    /// Appends a SESSION section with its cross-correlation blocks.
    ///
    /// TOTAL_VECTORS and the matrix ORDER are declared values; neither is
    /// cross-checked against the number of blocks supplied.
    pub fn add_session(&mut self, args: SessionArgs) -> Result<()> {
        required("ID", &args.id)?;
        required_checked("TOTAL_VECTORS", &args.total_vectors, ValueKind::Integer)?;
        required("START", &args.start)?;
        required("END", &args.end)?;
        required("ORDER", &args.order)?;
        optional_checked("UTC_OFFSET", &args.utc_offset, ValueKind::Real)?;
        optional_checked("LEAP_SECONDS", &args.leap_seconds, ValueKind::Integer)?;

        self.body.push(sections::session(&args));
        Ok(())
    }

    /// CCM blocks supplied so far are owned by their SESSION args; this
    /// helper builds a block value for callers assembling sessions by hand.
    pub fn ccm_block(
        vector_id_row: impl Into<String>,
        vector_id_col: impl Into<String>,
        correlations: Vec<String>,
    ) -> CcmBlock {
        CcmBlock {
            vector_id_row: vector_id_row.into(),
            vector_id_col: vector_id_col.into(),
            correlations,
        }
    }

    /// Finalizes the builder into an immutable document without writing it.
    pub fn into_document(self) -> Document {
        self.assemble().1
    }

    /// Finalizes the document and writes it to the path given at
    /// construction in a single blocking call. Returns the finalized
    /// document; the file handle is released on every exit path.
    pub fn write_file(self) -> Result<Document> {
        let (path, document) = self.assemble();
        let xml = document.to_xml()?;
        std::fs::write(&path, xml.as_bytes())?;
        tracing::info!(
            path = %path.display(),
            bytes = xml.len(),
            "wrote GVX document"
        );
        Ok(document)
    }

    fn assemble(self) -> (PathBuf, Document) {
        let mut document = Document::new(Format::Gvx);
        let root = document.root_mut();
        // Envelope sections render in schema order even when unpopulated.
        root.push(
            self.source_data
                .unwrap_or_else(|| sections::source_data(&SourceDataArgs::default())),
        );
        root.push(self.project_information.unwrap_or_else(|| {
            sections::project_information(&ProjectInformationArgs::default())
        }));
        root.push(self.reference_system);
        for section in self.body {
            root.push(section);
        }
        (self.path, document)
    }
}

fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str> {
    value.as_deref().ok_or(GvxError::MissingField(field))
}

fn required_checked(field: &'static str, value: &Option<String>, kind: ValueKind) -> Result<()> {
    let text = required(field, value)?;
    if kind.check(text) {
        Ok(())
    } else {
        Err(GvxError::validation(field, kind))
    }
}

fn optional_checked(field: &'static str, value: &Option<String>, kind: ValueKind) -> Result<()> {
    match value {
        Some(text) if !kind.check(text) => Err(GvxError::validation(field, kind)),
        _ => Ok(()),
    }
}
