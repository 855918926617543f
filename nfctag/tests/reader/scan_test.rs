#[path = "../common/mod.rs"]
mod common;

use nfctag::capability::InfoValue;
use nfctag::reader::{scan_devices, MockReader};

#[test]
fn scan_parses_capability_text_per_device() {
    let mut mock = MockReader::new();
    mock.add_device(
        "pn53x_usb:160:12",
        "SCL3711",
        common::fixtures::pn533_info_text(),
    );
    mock.add_device("acr122_usb:001:004", "ACR122U", "chip: PN532 v1.6");

    let devices = scan_devices(&mut mock).unwrap();
    assert_eq!(devices.len(), 2);

    let scl = &devices["pn53x_usb:160:12"];
    assert_eq!(scl.name, "SCL3711");
    assert_eq!(scl.capabilities.len(), 3);
    assert!(matches!(
        scl.capabilities.get("initator mode modulations"),
        Some(InfoValue::Groups(_))
    ));

    let acr = &devices["acr122_usb:001:004"];
    assert_eq!(
        acr.capabilities.get("chip"),
        Some(&InfoValue::Text("PN532 v1.6".to_string()))
    );
}

#[test]
fn scan_with_no_devices_is_empty() {
    let mut mock = MockReader::new();
    assert!(scan_devices(&mut mock).unwrap().is_empty());
}
