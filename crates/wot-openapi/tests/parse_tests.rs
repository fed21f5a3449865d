use wot_openapi::td::{self, AffordanceKind, OpValue};

const COUNTER: &str = include_str!("fixtures/counter.td.json");
const LAMP: &str = include_str!("fixtures/lamp.td.yaml");

#[test]
fn parse_counter_json() {
    let td = td::from_json(COUNTER).expect("should parse counter.td.json");
    assert_eq!(td.title.as_deref(), Some("Counter"));
    assert_eq!(td.base.as_deref(), Some("http://device.test"));
    assert!(td.has_http_base());

    let properties = td.affordances(AffordanceKind::Property).unwrap();
    assert_eq!(properties.len(), 3);
    assert_eq!(properties["count"].forms.len(), 2);
    // Data schema members are kept aside.
    assert_eq!(properties["lastChange"].extra["readOnly"], true);

    let root_forms = td.forms.as_ref().expect("should have root forms");
    assert_eq!(
        root_forms[0].op,
        Some(OpValue::Multiple(vec![
            "readallproperties".into(),
            "writeallproperties".into()
        ]))
    );
    assert!(root_forms[1].op.is_none());
    assert!(td.extra.contains_key("securityDefinitions"));
}

#[test]
fn parse_lamp_yaml() {
    let td = td::from_yaml(LAMP).expect("should parse lamp.td.yaml");
    assert_eq!(td.title.as_deref(), Some("Lamp"));
    assert!(!td.has_http_base());
    assert!(td.events.is_none());
    assert!(td.actions.as_ref().unwrap().is_empty());

    let status = &td.properties.as_ref().unwrap()["status"];
    assert_eq!(
        status.forms[2].response_content_type(),
        Some("application/cbor")
    );
}

#[test]
fn form_without_href_is_rejected() {
    let result = td::from_json(r#"{"properties": {"p": {"forms": [{"op": "readproperty"}]}}}"#);
    assert!(result.is_err());
}
