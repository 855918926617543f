// nfctag/src/reader/mock.rs

use std::collections::BTreeMap;

use crate::reader::{RawDeviceInfo, ReaderHandle, ReaderSource, TagEvent};
use crate::{Error, Result};

/// Mock reader for unit tests. It serves a fixed device table for `scan` and
/// returns queued events for `next_event`, recording `start`/`stop` calls.
#[derive(Debug, Default)]
pub struct MockReader {
    pub devices: BTreeMap<String, RawDeviceInfo>,
    pub events: Vec<TagEvent>,
    pub started: Vec<String>,
    pub stopped: bool,
}

impl MockReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a device that subsequent `scan` calls will report.
    pub fn add_device(&mut self, id: &str, name: &str, info: &str) {
        self.devices.insert(
            id.to_string(),
            RawDeviceInfo {
                name: name.to_string(),
                info: info.to_string(),
            },
        );
    }

    pub fn push_event(&mut self, event: TagEvent) {
        self.events.push(event);
    }
}

impl ReaderSource for MockReader {
    fn scan(&mut self) -> Result<BTreeMap<String, RawDeviceInfo>> {
        Ok(self.devices.clone())
    }
}

impl ReaderHandle for MockReader {
    fn start(&mut self, device_id: &str) -> Result<()> {
        if !self.devices.contains_key(device_id) {
            return Err(Error::DeviceNotFound(device_id.to_string()));
        }
        self.stopped = false;
        self.started.push(device_id.to_string());
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        // Mirror the real collaborator: stopping queues a final Stopped
        // event after whatever is still pending.
        self.stopped = true;
        self.events.push(TagEvent::Stopped);
        Ok(())
    }

    fn next_event(&mut self) -> Result<TagEvent> {
        if self.events.is_empty() {
            return Err(Error::ReaderStopped);
        }
        Ok(self.events.remove(0))
    }
}
