//! Section argument structs and the fixed GVX section shapes
//!
//! Every field is tri-state through `Option<String>`: `None` means "not
//! supplied" and renders as an empty element, `Some` renders verbatim once
//! validated. A supplied `"0"` is present; presence is never decided by
//! truthiness. The structs deserialize directly from JSON job descriptions.
//!
//! The shape functions reproduce the published schema exactly (element
//! names, nesting depth, sibling order); downstream consumers parse by
//! position and name, so no element may move even when unpopulated.

use serde::{Deserialize, Serialize};

use crate::document::Element;

/// Arguments for the SOURCE_DATA envelope section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDataArgs {
    /// Name of the original data source
    pub name: Option<String>,
    /// Creation timestamp of the source data (canonical datetime)
    pub created_date: Option<String>,
    /// Name of the application that produced the source data
    pub application_name: Option<String>,
    /// Version of that application
    pub application_version: Option<String>,
    pub application_manufacturer: Option<String>,
    pub application_manufacturer_url: Option<String>,
    /// Name of the software that performed the conversion
    pub converted_by_software_name: Option<String>,
    pub converted_by_version: Option<String>,
    pub converted_by_software_url: Option<String>,
    /// Conversion timestamp (canonical datetime)
    pub converted_by_converted_date: Option<String>,
}

/// Arguments for the PROJECT_INFORMATION envelope section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInformationArgs {
    pub title: Option<String>,
    pub email_address: Option<String>,
    pub party_chief: Option<String>,
    pub agency: Option<String>,
    /// Project start (canonical datetime)
    pub start_date: Option<String>,
    /// Project end (canonical datetime)
    pub end_date: Option<String>,
    pub remark: Option<String>,
}

/// Arguments for one REFERENCE_SYSTEM call: the scalar identification plus
/// one linear/angular unit pair. Repeated calls accumulate unit pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSystemArgs {
    /// Standardized reference-system identifier
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub remark: Option<String>,
    pub linear_unit_name: Option<String>,
    /// Integer when supplied
    pub linear_unit_significant_digits: Option<String>,
    /// Real when supplied
    pub linear_unit_conversion_factor: Option<String>,
    pub angular_unit_name: Option<String>,
    pub angular_unit_significant_digits: Option<String>,
    pub angular_unit_conversion_factor: Option<String>,
}

/// Arguments for an EQUIPMENT section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentArgs {
    pub id: Option<String>,
    pub receiver_type: Option<String>,
    pub receiver_serial_number: Option<String>,
    pub receiver_firmware_version: Option<String>,
    pub antenna_type: Option<String>,
    pub antenna_calibration_type: Option<String>,
    pub antenna_calibration_source: Option<String>,
    pub antenna_serial_number: Option<String>,
}

/// Arguments for a SURVEY_SETUP section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySetupArgs {
    pub id: Option<String>,
    pub solution_type: Option<String>,
    pub operator: Option<String>,
    pub software_name: Option<String>,
    pub software_version: Option<String>,
    pub software_url: Option<String>,
    pub corrector_format: Option<String>,
    pub rtk_name: Option<String>,
    pub rtk_mount_point: Option<String>,
    pub rtk_type: Option<String>,
    pub rtk_ip_address: Option<String>,
    /// Integer when supplied ("0" is a valid, present port)
    pub rtk_ip_port: Option<String>,
    pub remark: Option<String>,
}

/// Arguments for a POINT section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointArgs {
    pub id: Option<String>,
    pub name: Option<String>,
    pub code: Option<String>,
    pub equipment_id: Option<String>,
    /// Antenna reference point height, required real
    pub arp_height: Option<String>,
    pub point_type: Option<String>,
    pub network_location: Option<String>,
    /// Integer flag: "1" or "0"
    pub tilt_compensator: Option<String>,
    pub reference_system_id: Option<String>,
    /// Required real
    pub epoch: Option<String>,
    /// Required reals
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub ellipsoidal_height: Option<String>,
    /// Optional geocentric coordinates, reals
    pub x: Option<String>,
    pub y: Option<String>,
    pub z: Option<String>,
    /// Optional local correlation matrix, reals
    pub sdn: Option<String>,
    pub sde: Option<String>,
    pub sdu: Option<String>,
    pub pne: Option<String>,
    pub pnu: Option<String>,
    pub peu: Option<String>,
    /// Optional geocentric correlation matrix, reals
    pub sdx: Option<String>,
    pub sdy: Option<String>,
    pub sdz: Option<String>,
    pub pxy: Option<String>,
    pub pxz: Option<String>,
    pub pyz: Option<String>,
}

/// Arguments for a GNSS_VECTOR section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GnssVectorArgs {
    pub id: Option<String>,
    pub initial_point_id: Option<String>,
    pub terminal_point_id: Option<String>,
    pub survey_setup_id: Option<String>,
    /// Observation window, rendered verbatim
    pub start: Option<String>,
    pub end: Option<String>,
    /// Real when supplied
    pub utc_offset: Option<String>,
    /// Integer when supplied
    pub leap_seconds: Option<String>,
    pub epochs_used: Option<String>,
    /// Mask values, reals
    pub elevation: Option<String>,
    pub pdop_mask: Option<String>,
    pub rms: Option<String>,
    /// Dilution of precision values, reals
    pub gdop: Option<String>,
    pub hdop: Option<String>,
    pub pdop: Option<String>,
    pub tdop: Option<String>,
    pub vdop: Option<String>,
    /// Satellite counts, integers
    pub satellite_total: Option<String>,
    pub gps: Option<String>,
    pub glonass: Option<String>,
    pub galileo: Option<String>,
    pub qzss: Option<String>,
    pub beidou: Option<String>,
    pub orbit_type: Option<String>,
    pub orbit_source: Option<String>,
    pub reference_system_id: Option<String>,
    /// Canonical datetime when supplied
    pub download_date: Option<String>,
    /// Integer when supplied
    pub corrector_age: Option<String>,
    /// ECEF deltas, required reals
    pub dx: Option<String>,
    pub dy: Option<String>,
    pub dz: Option<String>,
    /// Correlation matrix, required reals
    pub sdx: Option<String>,
    pub sdy: Option<String>,
    pub sdz: Option<String>,
    pub pxy: Option<String>,
    pub pxz: Option<String>,
    pub pyz: Option<String>,
}

/// One cross-correlation matrix block: identifies the two vectors it
/// correlates and carries the coefficients in supplied order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcmBlock {
    pub vector_id_row: String,
    pub vector_id_col: String,
    /// Rendered as a comma-joined list, order preserved, values verbatim
    pub correlations: Vec<String>,
}

/// Arguments for a SESSION section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionArgs {
    pub id: Option<String>,
    /// Declared vector count, integer; independent of the block count
    pub total_vectors: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    /// Real when supplied
    pub utc_offset: Option<String>,
    /// Integer when supplied
    pub leap_seconds: Option<String>,
    /// Declared correlation-matrix order; not cross-checked against blocks
    pub order: Option<String>,
    #[serde(default)]
    pub blocks: Vec<CcmBlock>,
}

pub(crate) fn source_data(a: &SourceDataArgs) -> Element {
    let mut sd = Element::new("SOURCE_DATA");
    sd.push(Element::leaf("NAME", a.name.clone()));
    sd.push(Element::leaf("CREATED_DATE", a.created_date.clone()));

    let mut application = Element::new("APPLICATION");
    application.push(Element::leaf("NAME", a.application_name.clone()));
    application.push(Element::leaf("VERSION", a.application_version.clone()));
    application.push(Element::leaf(
        "MANUFACTURER",
        a.application_manufacturer.clone(),
    ));
    application.push(Element::leaf(
        "MANUFACTURER_URL",
        a.application_manufacturer_url.clone(),
    ));
    sd.push(application);

    let mut converted_by = Element::new("CONVERTED_BY");
    converted_by.push(Element::leaf(
        "SOFTWARE_NAME",
        a.converted_by_software_name.clone(),
    ));
    converted_by.push(Element::leaf("VERSION", a.converted_by_version.clone()));
    converted_by.push(Element::leaf(
        "SOFTWARE_URL",
        a.converted_by_software_url.clone(),
    ));
    converted_by.push(Element::leaf(
        "CONVERTED_DATE",
        a.converted_by_converted_date.clone(),
    ));
    sd.push(converted_by);

    sd
}

pub(crate) fn project_information(a: &ProjectInformationArgs) -> Element {
    let mut pi = Element::new("PROJECT_INFORMATION");
    pi.push(Element::leaf("TITLE", a.title.clone()));
    pi.push(Element::leaf("EMAIL_ADDRESS", a.email_address.clone()));
    pi.push(Element::leaf("PARTY_CHIEF", a.party_chief.clone()));
    pi.push(Element::leaf("AGENCY", a.agency.clone()));
    pi.push(Element::leaf("START_DATE", a.start_date.clone()));
    pi.push(Element::leaf("END_DATE", a.end_date.clone()));
    pi.push(Element::leaf("REMARK", a.remark.clone()));
    pi
}

/// The REFERENCE_SYSTEM scalar skeleton. Unit pairs are appended behind
/// these leaves by each builder call.
pub(crate) fn reference_system_envelope() -> Element {
    let mut rs = Element::new("REFERENCE_SYSTEM");
    rs.push(Element::leaf("ID", None));
    rs.push(Element::leaf("CODE", None));
    rs.push(Element::leaf("NAME", None));
    rs.push(Element::leaf("REMARK", None));
    rs
}

pub(crate) fn unit(
    name: &'static str,
    unit_name: Option<String>,
    significant_digits: Option<String>,
    conversion_factor: Option<String>,
) -> Element {
    let mut u = Element::new(name);
    u.push(Element::leaf("NAME", unit_name));
    u.push(Element::leaf("SIGNIFICANT_DIGITS", significant_digits));
    u.push(Element::leaf("CONVERSION_FACTOR", conversion_factor));
    u
}

pub(crate) fn equipment(a: &EquipmentArgs) -> Element {
    let mut eq = Element::new("EQUIPMENT");
    eq.push(Element::leaf("ID", a.id.clone()));

    let mut receiver = Element::new("RECEIVER");
    receiver.push(Element::leaf("TYPE", a.receiver_type.clone()));
    receiver.push(Element::leaf("SERIAL_NUMBER", a.receiver_serial_number.clone()));
    receiver.push(Element::leaf(
        "FIRMWARE_VERSION",
        a.receiver_firmware_version.clone(),
    ));
    eq.push(receiver);

    let mut antenna = Element::new("ANTENNA");
    antenna.push(Element::leaf("TYPE", a.antenna_type.clone()));
    antenna.push(Element::leaf(
        "CALIBRATION_TYPE",
        a.antenna_calibration_type.clone(),
    ));
    antenna.push(Element::leaf(
        "CALIBRATION_SOURCE",
        a.antenna_calibration_source.clone(),
    ));
    antenna.push(Element::leaf(
        "SERIAL_NUMBER",
        a.antenna_serial_number.clone(),
    ));
    eq.push(antenna);

    eq
}

pub(crate) fn survey_setup(a: &SurveySetupArgs) -> Element {
    let mut ss = Element::new("SURVEY_SETUP");
    ss.push(Element::leaf("ID", a.id.clone()));
    ss.push(Element::leaf("SOLUTION_TYPE", a.solution_type.clone()));
    ss.push(Element::leaf("OPERATOR", a.operator.clone()));

    let mut software = Element::new("PROCESSING_SOFTWARE");
    software.push(Element::leaf("NAME", a.software_name.clone()));
    software.push(Element::leaf("VERSION", a.software_version.clone()));
    software.push(Element::leaf("SOFTWARE_URL", a.software_url.clone()));
    ss.push(software);

    ss.push(Element::leaf("CORRECTOR_FORMAT", a.corrector_format.clone()));

    let mut rtk = Element::new("NETWORKRTK");
    rtk.push(Element::leaf("NAME", a.rtk_name.clone()));
    rtk.push(Element::leaf("MOUNT_POINT", a.rtk_mount_point.clone()));
    rtk.push(Element::leaf("TYPE", a.rtk_type.clone()));
    rtk.push(Element::leaf("IP_ADDRESS", a.rtk_ip_address.clone()));
    rtk.push(Element::leaf("IP_PORT", a.rtk_ip_port.clone()));
    ss.push(rtk);

    ss.push(Element::leaf("REMARK", a.remark.clone()));

    ss
}

pub(crate) fn point(a: &PointArgs) -> Element {
    let mut point = Element::new("POINT");
    point.push(Element::leaf("ID", a.id.clone()));
    point.push(Element::leaf("NAME", a.name.clone()));
    point.push(Element::leaf("CODE", a.code.clone()));
    point.push(Element::leaf("EQUIPMENT_ID", a.equipment_id.clone()));
    point.push(Element::leaf("ARP_HEIGHT", a.arp_height.clone()));
    point.push(Element::leaf("POINT_TYPE", a.point_type.clone()));
    point.push(Element::leaf("NETWORK_LOCATION", a.network_location.clone()));
    point.push(Element::leaf("TILT_COMPENSATOR", a.tilt_compensator.clone()));

    let mut coordinates = Element::new("COORDINATES");
    coordinates.push(Element::leaf(
        "REFERENCE_SYSTEM_ID",
        a.reference_system_id.clone(),
    ));
    coordinates.push(Element::leaf("EPOCH", a.epoch.clone()));

    let mut geodetic = Element::new("GEODETIC_COORDINATES");
    geodetic.push(Element::leaf("LATITUDE", a.latitude.clone()));
    geodetic.push(Element::leaf("LONGITUDE", a.longitude.clone()));
    geodetic.push(Element::leaf(
        "ELLIPSOIDAL_HEIGHT",
        a.ellipsoidal_height.clone(),
    ));
    coordinates.push(geodetic);

    let mut geocentric = Element::new("GEOCENTRIC_COORDINATES");
    geocentric.push(Element::leaf("X", a.x.clone()));
    geocentric.push(Element::leaf("Y", a.y.clone()));
    geocentric.push(Element::leaf("Z", a.z.clone()));
    coordinates.push(geocentric);

    let mut local = Element::new("CORRELATION_MATRIX_LOCAL");
    local.push(Element::leaf("SDN", a.sdn.clone()));
    local.push(Element::leaf("SDE", a.sde.clone()));
    local.push(Element::leaf("SDU", a.sdu.clone()));
    local.push(Element::leaf("PNE", a.pne.clone()));
    local.push(Element::leaf("PNU", a.pnu.clone()));
    local.push(Element::leaf("PEU", a.peu.clone()));
    coordinates.push(local);

    let mut matrix = Element::new("CORRELATION_MATRIX");
    matrix.push(Element::leaf("SDX", a.sdx.clone()));
    matrix.push(Element::leaf("SDY", a.sdy.clone()));
    matrix.push(Element::leaf("SDZ", a.sdz.clone()));
    matrix.push(Element::leaf("PXY", a.pxy.clone()));
    matrix.push(Element::leaf("PXZ", a.pxz.clone()));
    matrix.push(Element::leaf("PYZ", a.pyz.clone()));
    coordinates.push(matrix);

    point.push(coordinates);
    point
}

pub(crate) fn gnss_vector(a: &GnssVectorArgs) -> Element {
    let mut vector = Element::new("GNSS_VECTOR");
    vector.push(Element::leaf("ID", a.id.clone()));
    vector.push(Element::leaf("INITIAL_POINT_ID", a.initial_point_id.clone()));
    vector.push(Element::leaf("TERMINAL_POINT_ID", a.terminal_point_id.clone()));
    vector.push(Element::leaf("SURVEY_SETUP_ID", a.survey_setup_id.clone()));

    let mut observation_time = Element::new("OBSERVATION_TIME");
    observation_time.push(Element::leaf("START", a.start.clone()));
    observation_time.push(Element::leaf("END", a.end.clone()));
    observation_time.push(Element::leaf("UTC_OFFSET", a.utc_offset.clone()));
    observation_time.push(Element::leaf("LEAP_SECONDS", a.leap_seconds.clone()));
    vector.push(observation_time);

    let mut quality = Element::new("QUALITY_CONTROL");
    quality.push(Element::leaf("EPOCHS_USED", a.epochs_used.clone()));

    let mut mask = Element::new("MASK");
    mask.push(Element::leaf("ELEVATION", a.elevation.clone()));
    mask.push(Element::leaf("PDOP_MASK", a.pdop_mask.clone()));
    quality.push(mask);

    quality.push(Element::leaf("RMS", a.rms.clone()));

    let mut dilution = Element::new("DILUTION_PRECISION");
    dilution.push(Element::leaf("GDOP", a.gdop.clone()));
    dilution.push(Element::leaf("HDOP", a.hdop.clone()));
    dilution.push(Element::leaf("PDOP", a.pdop.clone()));
    dilution.push(Element::leaf("TDOP", a.tdop.clone()));
    dilution.push(Element::leaf("VDOP", a.vdop.clone()));
    quality.push(dilution);

    let mut satellites = Element::new("SATELLITE_USED");
    satellites.push(Element::leaf("TOTAL", a.satellite_total.clone()));
    satellites.push(Element::leaf("GPS", a.gps.clone()));
    satellites.push(Element::leaf("GLONASS", a.glonass.clone()));
    satellites.push(Element::leaf("GALILEO", a.galileo.clone()));
    satellites.push(Element::leaf("QZSS", a.qzss.clone()));
    satellites.push(Element::leaf("BEIDOU", a.beidou.clone()));
    quality.push(satellites);

    let mut orbit = Element::new("ORBIT");
    orbit.push(Element::leaf("TYPE", a.orbit_type.clone()));
    orbit.push(Element::leaf("SOURCE", a.orbit_source.clone()));
    orbit.push(Element::leaf(
        "REFERENCE_SYSTEM_ID",
        a.reference_system_id.clone(),
    ));
    orbit.push(Element::leaf("DOWNLOAD_DATE", a.download_date.clone()));
    quality.push(orbit);

    quality.push(Element::leaf("CORRECTOR_AGE", a.corrector_age.clone()));

    let mut deltas = Element::new("ECEF_DELTAS");
    deltas.push(Element::leaf("DX", a.dx.clone()));
    deltas.push(Element::leaf("DY", a.dy.clone()));
    deltas.push(Element::leaf("DZ", a.dz.clone()));
    quality.push(deltas);

    let mut matrix = Element::new("CORRELATION_MATRIX");
    matrix.push(Element::leaf("SDX", a.sdx.clone()));
    matrix.push(Element::leaf("SDY", a.sdy.clone()));
    matrix.push(Element::leaf("SDZ", a.sdz.clone()));
    matrix.push(Element::leaf("PXY", a.pxy.clone()));
    matrix.push(Element::leaf("PXZ", a.pxz.clone()));
    matrix.push(Element::leaf("PYZ", a.pyz.clone()));
    quality.push(matrix);

    vector.push(quality);
    vector
}

pub(crate) fn session(a: &SessionArgs) -> Element {
    let mut session = Element::new("SESSION");
    if let Some(id) = &a.id {
        session.set_attr("ID", id.clone());
    }
    if let Some(total) = &a.total_vectors {
        session.set_attr("TOTAL_VECTORS", total.clone());
    }

    let mut time = Element::new("SESSION_TIME");
    time.push(Element::leaf("START", a.start.clone()));
    time.push(Element::leaf("END", a.end.clone()));
    time.push(Element::leaf("UTC_OFFSET", a.utc_offset.clone()));
    time.push(Element::leaf("LEAP_SECONDS", a.leap_seconds.clone()));
    session.push(time);

    let mut ccm = Element::new("CROSS_CORRELATION_MATRIX");
    if let Some(order) = &a.order {
        ccm.set_attr("ORDER", order.clone());
    }
    for block in &a.blocks {
        ccm.push(ccm_block(block));
    }
    session.push(ccm);

    session
}

/// Encodes one correlation block: identifier attributes plus the comma-joined
/// coefficient list, order preserved. The coefficient count is deliberately
/// not checked against the declared matrix order.
pub(crate) fn ccm_block(block: &CcmBlock) -> Element {
    let mut el = Element::new("CCM_BLOCK");
    el.set_attr("VECTOR_ID_ROW", block.vector_id_row.clone());
    el.set_attr("VECTOR_ID_COL", block.vector_id_col.clone());
    el.push(Element::leaf(
        "CORRELATIONS",
        Some(block.correlations.join(",")),
    ));
    el
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_data_shape_is_fixed() {
        let sd = source_data(&SourceDataArgs::default());
        let names: Vec<&str> = sd.children.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["NAME", "CREATED_DATE", "APPLICATION", "CONVERTED_BY"]
        );
        let app = sd.child("APPLICATION").unwrap();
        let app_names: Vec<&str> = app.children.iter().map(|c| c.name).collect();
        assert_eq!(
            app_names,
            vec!["NAME", "VERSION", "MANUFACTURER", "MANUFACTURER_URL"]
        );
    }

    #[test]
    fn test_point_nesting() {
        let args = PointArgs {
            latitude: Some("38.9".into()),
            ..Default::default()
        };
        let p = point(&args);
        let coords = p.child("COORDINATES").unwrap();
        let geodetic = coords.child("GEODETIC_COORDINATES").unwrap();
        assert_eq!(
            geodetic.child("LATITUDE").unwrap().text.as_deref(),
            Some("38.9")
        );
        assert!(coords.child("CORRELATION_MATRIX_LOCAL").is_some());
        assert!(coords.child("CORRELATION_MATRIX").is_some());
    }

    #[test]
    fn test_gnss_vector_quality_control_order() {
        let qc = gnss_vector(&GnssVectorArgs::default());
        let quality = qc.child("QUALITY_CONTROL").unwrap();
        let names: Vec<&str> = quality.children.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "EPOCHS_USED",
                "MASK",
                "RMS",
                "DILUTION_PRECISION",
                "SATELLITE_USED",
                "ORBIT",
                "CORRECTOR_AGE",
                "ECEF_DELTAS",
                "CORRELATION_MATRIX",
            ]
        );
    }

    #[test]
    fn test_ccm_block_joins_coefficients_in_order() {
        let block = CcmBlock {
            vector_id_row: "1".into(),
            vector_id_col: "2".into(),
            correlations: vec!["0.1".into(), "0.2".into(), "0.3".into()],
        };
        let el = ccm_block(&block);
        assert_eq!(
            el.attrs,
            vec![
                ("VECTOR_ID_ROW", "1".to_string()),
                ("VECTOR_ID_COL", "2".to_string()),
            ]
        );
        assert_eq!(
            el.child("CORRELATIONS").unwrap().text.as_deref(),
            Some("0.1,0.2,0.3")
        );
    }

    #[test]
    fn test_session_attributes_and_children() {
        let args = SessionArgs {
            id: Some("S1".into()),
            total_vectors: Some("12".into()),
            order: Some("3".into()),
            ..Default::default()
        };
        let s = session(&args);
        assert_eq!(s.attrs[0], ("ID", "S1".to_string()));
        assert_eq!(s.attrs[1], ("TOTAL_VECTORS", "12".to_string()));
        let ccm = s.child("CROSS_CORRELATION_MATRIX").unwrap();
        assert_eq!(ccm.attrs[0], ("ORDER", "3".to_string()));
        assert!(ccm.children.is_empty());
    }

    #[test]
    fn test_args_deserialize_from_job_json() {
        let json = r#"{
            "id": "PT-1",
            "latitude": "38.889",
            "tilt_compensator": "0"
        }"#;
        let args: PointArgs = serde_json::from_str(json).unwrap();
        assert_eq!(args.id.as_deref(), Some("PT-1"));
        assert_eq!(args.tilt_compensator.as_deref(), Some("0"));
        assert!(args.longitude.is_none());
    }
}
