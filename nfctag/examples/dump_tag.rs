// Tag dump example.

// Scans a (mocked) reader source, prints each device's parsed capability
// info, then drains read events and dumps the manufacture block and TLV
// records of every tag. Substitute a real hardware collaborator for
// MockReader to run this against an attached reader.

use nfctag::manufacture::ManufactureData;
use nfctag::prelude::*;
use nfctag::reader::MockReader;
use nfctag::test_support::{terminated_stream, tlv, EnvelopeCodec};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut reader = MockReader::new();
    reader.add_device(
        "pn53x_usb:160:12",
        "SCL3711",
        "chip: PN533 v2.7\ninitator mode modulations: ISO/IEC 14443A (106 kbps), FeliCa (424 kbps, 212 kbps)",
    );

    // Seed one tag read: manufacture block followed by an NDEF TLV stream.
    let mut buf = vec![
        0x04, 0x8c, 0x5f, 0x5f, 0xca, 0x33, 0x2d, 0x80, 0xe6, 0x48, 0x00, 0x00, 0xe1, 0x10,
        0x12, 0x00,
    ];
    buf.extend(terminated_stream(&[tlv(0x03, &[0xd1, 0x01, 0x0b, 0x55])]));
    reader.push_event(TagEvent::Read(TagRead::new(buf, 16)));

    for (id, device) in scan_devices(&mut reader)? {
        println!("device {}: {}", id, device.name);
        for (key, value) in device.capabilities.iter() {
            println!("  {}: {:?}", key, value);
        }
    }

    reader.start("pn53x_usb:160:12")?;
    reader.stop()?;

    loop {
        match reader.next_event()? {
            TagEvent::Read(read) => {
                match ManufactureData::parse(&read.data) {
                    Ok(mfg) => {
                        println!("uid: {}", mfg.uid.to_hex());
                        println!("lock: {}  cc: {}", mfg.lock.to_hex(), mfg.cc.to_hex());
                    }
                    Err(e) => println!("manufacture block: {}", e),
                }
                for record in read.records(&EnvelopeCodec) {
                    println!("tlv {:#04x}: {:?}", record.tlv_type, record.value);
                }
            }
            TagEvent::Error(e) => println!("reader error: {}", e),
            TagEvent::Stopped => {
                println!("stopped");
                break;
            }
        }
    }

    Ok(())
}
