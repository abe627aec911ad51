//! # Rendered File Tests
//!
//! Writes both example documents in every format, loads the JSON and YAML
//! files back, and inspects the XML output.

use nmech_core::{DocumentError, Format, HasMetadata, ModelError};
use nmech_mujoco::Mujoco;
use nmech_neuromech::{Body, Muscle, NeuroMech, Point3D, NEUROMECH_NS, NEUROMECH_SCHEMA_LOCATION, XSI_NS};
use nmech_render::{load_document, render, write_document, RenderError, RenderOptions};

#[test]
fn files_are_named_after_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let doc = nmech_mujoco::example_document();
    let written = write_document(&doc, dir.path(), &Format::ALL, &RenderOptions::default()).unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["TestMujoco.json", "TestMujoco.xml", "TestMujoco.yaml"]);
    for path in &written {
        assert!(path.is_file(), "{} not written", path.display());
    }
}

#[test]
fn output_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("out").join("models");
    let doc = nmech_neuromech::example_document();
    let written = write_document(&doc, &nested, &[Format::Yaml], &RenderOptions::default()).unwrap();
    assert_eq!(written, vec![nested.join("TestNeuroMech.yaml")]);
}

#[test]
fn mujoco_json_and_yaml_load_back_equal() {
    let dir = tempfile::tempdir().unwrap();
    let doc = nmech_mujoco::example_document();
    write_document(&doc, dir.path(), &[Format::Json, Format::Yaml], &RenderOptions::default()).unwrap();

    let from_json: Mujoco = load_document(&dir.path().join("TestMujoco.json")).unwrap();
    let from_yaml: Mujoco = load_document(&dir.path().join("TestMujoco.yaml")).unwrap();
    assert_eq!(from_json, doc);
    assert_eq!(from_yaml, doc);
}

#[test]
fn neuromech_json_and_yaml_load_back_equal() {
    let dir = tempfile::tempdir().unwrap();
    let doc = nmech_neuromech::example_document();
    write_document(&doc, dir.path(), &[Format::Json, Format::Yaml], &RenderOptions::default()).unwrap();

    let from_json: NeuroMech = load_document(&dir.path().join("TestNeuroMech.json")).unwrap();
    let from_yaml: NeuroMech = load_document(&dir.path().join("TestNeuroMech.yaml")).unwrap();
    assert_eq!(from_json, doc);
    assert_eq!(from_yaml, doc);
}

#[test]
fn neuromech_xml_layout() {
    let doc = nmech_neuromech::example_document();
    let xml = render(&doc, Format::Xml, &RenderOptions::default()).unwrap();

    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#), "{xml}");
    assert!(xml.contains(r#"<neuromech id="TestNeuroMech""#), "{xml}");
    assert!(xml.contains(&format!(r#"xmlns="{NEUROMECH_NS}""#)), "{xml}");
    assert!(xml.contains(&format!(r#"xmlns:xsi="{XSI_NS}""#)), "{xml}");
    assert!(xml.contains(&format!(r#"xsi:schemaLocation="{NEUROMECH_SCHEMA_LOCATION}""#)), "{xml}");
    assert!(xml.contains(r#"<body id="forelimb">"#), "{xml}");
    assert!(xml.contains(r#"<muscle id="bicep">"#), "{xml}");
    assert!(xml.contains(r#"<start x="0.0" y="0.0" z="0.0"/>"#), "{xml}");
    assert!(xml.contains(r#"<end x="10.0" y="10.0" z="0.0"/>"#), "{xml}");
    assert!(xml.trim_end().ends_with("</neuromech>"), "{xml}");
}

#[test]
fn mujoco_xml_layout() {
    let doc = nmech_mujoco::example_document();
    let xml = render(&doc, Format::Xml, &RenderOptions { indent: 2 }).unwrap();

    assert!(xml.contains(r#"<mujoco model="TestMujoco">"#), "{xml}");
    assert!(xml.contains(r#"<metadata description="Testing a Mujoco document"/>"#), "{xml}");
    assert!(xml.contains(r#"<light diffuse=".5 .5 .5" pos="0 0 3" dir="0 0 -1"/>"#), "{xml}");
    assert!(xml.contains(r#"<geom type="plane" size="10 1 0.1" rgba="0 0.9 0 1"/>"#), "{xml}");
    assert!(xml.contains(r#"<body pos="0 0 1">"#), "{xml}");
    assert!(xml.contains(r#"<joint type="free"/>"#), "{xml}");
    assert!(xml.contains(r#"<geom type="sphere" size="0.15" rgba="1 1 0 1"/>"#), "{xml}");
    assert_eq!(xml.matches("<body ").count(), 2);
    assert!(xml.contains("\n  <metadata"), "indent of 2 not applied:\n{xml}");
}

#[test]
fn json_uses_configured_indent() {
    let doc = nmech_neuromech::NeuroMech::new("n");
    let json = render(&doc, Format::Json, &RenderOptions { indent: 4 }).unwrap();
    assert!(json.contains("\n    \"id\": \"n\""), "{json}");
}

#[test]
fn loading_invalid_document_reports_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "id: broken\nbodies:\n  - muscles: []\n").unwrap();

    let err = load_document::<NeuroMech>(&path).unwrap_err();
    match err {
        RenderError::Document(DocumentError::Model(ModelError::MissingField { record, field })) => {
            assert_eq!(record, "body");
            assert_eq!(field, "bodies[0].id");
        }
        other => panic!("expected missing field, got: {other}"),
    }
}

#[test]
fn loading_xml_is_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let doc = nmech_neuromech::example_document();
    let written = write_document(&doc, dir.path(), &[Format::Xml], &RenderOptions::default()).unwrap();

    let err = load_document::<NeuroMech>(&written[0]).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Document(DocumentError::UnsupportedFormat { .. })
    ));
}

#[test]
fn invalid_id_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let doc = NeuroMech::new("../escape");
    let err = write_document(&doc, dir.path(), &Format::ALL, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, RenderError::InvalidFileStem(_)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

/// Parse `xml` with quick-xml, reading every attribute.
fn assert_well_formed(xml: &str) {
    use quick_xml::events::Event;

    let mut reader = quick_xml::Reader::from_str(xml);
    loop {
        match reader.read_event().unwrap() {
            Event::Eof => break,
            Event::Start(e) | Event::Empty(e) => {
                for attr in e.attributes() {
                    attr.unwrap();
                }
            }
            _ => {}
        }
    }
}

#[test]
fn example_xml_is_well_formed() {
    let opts = RenderOptions::default();
    assert_well_formed(&render(&nmech_mujoco::example_document(), Format::Xml, &opts).unwrap());
    assert_well_formed(&render(&nmech_neuromech::example_document(), Format::Xml, &opts).unwrap());
}

#[test]
fn metadata_key_that_is_not_an_attribute_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut doc = nmech_mujoco::example_document();
    doc.annotate("has space", 1);

    let err = render(&doc, Format::Xml, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, RenderError::Xml(ref msg) if msg.contains("has space")), "{err}");
    assert!(render(&doc, Format::Json, &RenderOptions::default()).is_ok());

    let err = write_document(&doc, dir.path(), &Format::ALL, &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, RenderError::Xml(_)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn non_finite_coordinate_is_not_rendered() {
    let dir = tempfile::tempdir().unwrap();
    let bicep = Muscle::spanning("bicep", Point3D::new(f64::NAN, 0.0, 0.0), Point3D::ORIGIN);
    let doc = NeuroMech::new("Broken").with_body(Body::new("forelimb").with_muscle(bicep));
    let opts = RenderOptions::default();

    assert!(matches!(render(&doc, Format::Json, &opts), Err(RenderError::Json(_))));
    assert!(matches!(render(&doc, Format::Yaml, &opts), Err(RenderError::Yaml(_))));
    assert!(matches!(
        render(&doc, Format::Xml, &opts),
        Err(RenderError::Model(ModelError::Serialization(_)))
    ));

    write_document(&doc, dir.path(), &Format::ALL, &opts).unwrap_err();
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
