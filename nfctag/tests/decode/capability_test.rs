#[path = "../common/mod.rs"]
mod common;

use nfctag::capability::{DeviceCapabilityInfo, GroupValue, InfoValue};

fn group<'a>(value: &'a InfoValue, protocol: &str) -> &'a GroupValue {
    match value {
        InfoValue::Groups(groups) => {
            &groups
                .iter()
                .find(|(p, _)| p == protocol)
                .unwrap_or_else(|| panic!("missing protocol {:?}", protocol))
                .1
        }
        other => panic!("expected groups, got {:?}", other),
    }
}

#[test]
fn protocol_line_parses_to_nested_speeds() {
    let info = DeviceCapabilityInfo::parse("Protocol: ISO14443A (106, 212), ISO14443B (106)");
    let protocols = info.get("Protocol").unwrap();
    assert_eq!(
        group(protocols, "ISO14443A"),
        &GroupValue::Speeds(vec!["106".to_string(), "212".to_string()])
    );
    assert_eq!(
        group(protocols, "ISO14443B"),
        &GroupValue::Speeds(vec!["106".to_string()])
    );
}

#[test]
fn libnfc_style_info_text_parses_every_line() {
    let info = DeviceCapabilityInfo::parse(common::fixtures::pn533_info_text());
    assert_eq!(info.len(), 3);

    assert_eq!(
        info.get("chip"),
        Some(&InfoValue::Text("PN533 v2.7".to_string()))
    );

    let initiator = info.get("initator mode modulations").unwrap();
    assert_eq!(
        group(initiator, "FeliCa"),
        &GroupValue::Speeds(vec!["424 kbps".to_string(), "212 kbps".to_string()])
    );
    assert_eq!(
        group(initiator, "D.E.P."),
        &GroupValue::Speeds(vec![
            "424 kbps".to_string(),
            "212 kbps".to_string(),
            "106 kbps".to_string()
        ])
    );

    let target = info.get("target mode modulations").unwrap();
    assert_eq!(
        group(target, "ISO/IEC 14443A"),
        &GroupValue::Speeds(vec!["106 kbps".to_string()])
    );
}

#[test]
fn line_without_colon_is_stored_under_its_index() {
    let info = DeviceCapabilityInfo::parse("chip: PN533\nacr122_usb driver\n");
    assert_eq!(
        info.get("1"),
        Some(&InfoValue::Text("acr122_usb driver".to_string()))
    );
    assert!(info.get("acr122_usb driver").is_none());
}

#[test]
fn parse_is_lossy_and_one_directional() {
    // Trailing parens are stripped; nothing retains the original text.
    let info = DeviceCapabilityInfo::parse("Protocol: FeliCa (212)");
    assert_eq!(
        group(info.get("Protocol").unwrap(), "FeliCa"),
        &GroupValue::Speeds(vec!["212".to_string()])
    );
}
