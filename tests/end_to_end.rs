//! End-to-end test: JSON section arguments through the writer to a file on
//! disk, read back and checked.

use geovex_xml::{
    GvxWriter, PointArgs, ProjectInformationArgs, ReferenceSystemArgs, SourceDataArgs,
};

#[test]
fn json_job_sections_written_to_disk() {
    let source_data: SourceDataArgs = serde_json::from_str(
        r#"{
            "name": "OPUS Projects",
            "created_date": "2021-06-15T08:30:00.00",
            "application_name": "OPUS",
            "application_version": "5.1",
            "converted_by_software_name": "geovex",
            "converted_by_converted_date": "2021-06-16T00:00:00.00"
        }"#,
    )
    .unwrap();

    let project: ProjectInformationArgs = serde_json::from_str(
        r#"{
            "title": "City Control Network",
            "party_chief": "R. Chen",
            "agency": "County Survey Office",
            "start_date": "2021-01-01T00:00:00.00",
            "end_date": "2021-12-31T23:59:59.00"
        }"#,
    )
    .unwrap();

    let reference_system: ReferenceSystemArgs = serde_json::from_str(
        r#"{
            "id": "126",
            "name": "NAD83(2011)",
            "linear_unit_name": "meter",
            "angular_unit_name": "degree"
        }"#,
    )
    .unwrap();

    let point: PointArgs = serde_json::from_str(
        r#"{
            "id": "PT-1",
            "name": "BENCH A",
            "equipment_id": "EQ-1",
            "arp_height": "1.832",
            "point_type": "CORS",
            "reference_system_id": "126",
            "epoch": "2010.00",
            "latitude": "38.889",
            "longitude": "-77.035",
            "ellipsoidal_height": "42.5"
        }"#,
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("network.gvx");

    let mut writer = GvxWriter::new(&path);
    writer.add_source_data(source_data).unwrap();
    writer.add_project_information(project).unwrap();
    writer.add_reference_system(reference_system).unwrap();
    writer.add_point(point).unwrap();
    writer.write_file().unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(written.contains(r#"<GVX VERSION="1.0">"#));
    assert!(written.contains("<NAME>OPUS Projects</NAME>"));
    assert!(written.contains("<PARTY_CHIEF>R. Chen</PARTY_CHIEF>"));
    assert!(written.contains("<LATITUDE>38.889</LATITUDE>"));
    // Unsupplied optional leaves still render, empty.
    assert!(written.contains("<CODE/>"));
}

#[test]
fn datum_alias_resolves_to_register_id() {
    let datum = geovex_datum::lookup_alias("NAD 83 (2011)").unwrap();

    let mut writer = GvxWriter::new("unused.gvx");
    writer
        .add_reference_system(ReferenceSystemArgs {
            id: Some(datum.iso_id.to_string()),
            name: Some("NAD83(2011)".to_string()),
            linear_unit_name: Some("meter".to_string()),
            angular_unit_name: Some("degree".to_string()),
            ..Default::default()
        })
        .unwrap();

    let doc = writer.into_document();
    let rs = doc.root().child("REFERENCE_SYSTEM").unwrap();
    assert_eq!(rs.child("ID").unwrap().text.as_deref(), Some("126"));
}

#[test]
fn write_file_returns_finalized_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.gvx");

    let doc = GvxWriter::new(&path).write_file().unwrap();
    let on_disk = std::fs::read_to_string(&path).unwrap();
    assert_eq!(doc.to_xml().unwrap(), on_disk);
}
