use cwmpgen_core::parse;

const SAMPLE_DEVICE: &str = include_str!("fixtures/sample-device.xml");

#[test]
fn parse_sample_document() {
    let document = parse::from_xml(SAMPLE_DEVICE).unwrap();

    assert_eq!(document.models.len(), 1);
    let model = &document.models[0];
    assert_eq!(model.name, "SampleDevice");
    assert_eq!(model.version, "2.1");
    assert_eq!(model.objects.len(), 1);
    assert_eq!(model.parameters.len(), 1);
}

#[test]
fn parse_object_attributes() {
    let document = parse::from_xml(SAMPLE_DEVICE).unwrap();
    let device = &document.models[0].objects[0];

    assert_eq!(device.name, "Device.");
    assert_eq!(device.access, "readOnly");
    assert_eq!(device.min_entries.as_deref(), Some("1"));
    assert_eq!(device.max_entries.as_deref(), Some("1"));
    assert_eq!(device.objects.len(), 2);

    let interface = &device.objects[1];
    assert_eq!(interface.name, "Interface.{i}.");
    assert_eq!(interface.max_entries.as_deref(), Some("unbounded"));
    assert_eq!(interface.unique_keys.len(), 1);
    assert_eq!(interface.unique_keys[0].parameters[0].ref_name, "Name");
}

#[test]
fn parse_syntax_variants() {
    let document = parse::from_xml(SAMPLE_DEVICE).unwrap();
    let interface = &document.models[0].objects[0].objects[1];

    let enable = &interface.parameters[0];
    assert_eq!(enable.name, "Enable");
    let syntax = enable.syntax.as_ref().unwrap();
    assert!(syntax.boolean.is_some());
    assert_eq!(syntax.default.as_ref().unwrap().value, "false");

    let alias = interface
        .parameters
        .iter()
        .find(|p| p.name == "Alias")
        .unwrap();
    assert!(alias.syntax.is_none());
}

#[test]
fn parse_from_bytes_rejects_invalid_utf8() {
    let err = parse::from_bytes(&[0xff, 0xfe, 0x00]).unwrap_err();
    assert!(err.to_string().contains("UTF-8"));
}

#[test]
fn parse_malformed_xml_fails() {
    assert!(parse::from_xml("<document><model").is_err());
}
