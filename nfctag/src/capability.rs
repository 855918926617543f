// nfctag/src/capability.rs

//! Parser for the free-text capability description a reader reports per
//! device.
//!
//! The text is a loose `key: value` block, one entry per line. Values may
//! carry parenthesized protocol groups, e.g.
//!
//! ```text
//! chip: PN533 v2.7
//! initiator mode modulations: ISO/IEC 14443A (106 kbps), FeliCa (424 kbps, 212 kbps)
//! ```
//!
//! The grammar is vendor text, not a format we control, so parsing is
//! delimiter-driven and never fails: a line or group that does not match the
//! expected shape degrades to a fallback entry keyed by its position.

/// The value side of one parsed protocol group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GroupValue {
    /// Bit-rate strings listed in the group's parentheses.
    Speeds(Vec<String>),
    /// Group text that had no `" ("` marker, kept verbatim.
    Text(String),
}

/// The value side of one parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InfoValue {
    /// Plain value with no parenthesized groups.
    Text(String),
    /// Protocol groups, keyed by protocol name (or group index on a
    /// malformed group), in the order they appeared.
    Groups(Vec<(String, GroupValue)>),
}

/// Parsed capability description for one device.
///
/// Entries keep line order; lines without a `key:` prefix are keyed by the
/// decimal rendering of their line index. Produced once per scan and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeviceCapabilityInfo {
    entries: Vec<(String, InfoValue)>,
}

impl DeviceCapabilityInfo {
    /// Parse a newline-delimited capability text block.
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();

        for (index, raw) in text.split('\n').enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            match line.find(':') {
                None | Some(0) => {
                    // No usable key: keep the whole line under its line index.
                    entries.push((index.to_string(), InfoValue::Text(line.to_string())));
                }
                Some(pos) => {
                    let key = &line[..pos];
                    let value = line[pos + 1..].trim();
                    entries.push((key.to_string(), parse_value(value)));
                }
            }
        }

        Self { entries }
    }

    /// Look up the first entry with the given key.
    pub fn get(&self, key: &str) -> Option<&InfoValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Entries in line order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, InfoValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_value(value: &str) -> InfoValue {
    if !value.contains(')') {
        return InfoValue::Text(value.to_string());
    }

    // Groups are separated by the literal `"), "`; the final group keeps its
    // closing paren, stripped below.
    let mut groups = Vec::new();
    for (index, raw) in value.split("), ").enumerate() {
        let group = raw.trim();
        if group.is_empty() {
            continue;
        }

        match group.split_once(" (") {
            None => {
                // No speed list marker: keep the group verbatim under its
                // position in the list.
                groups.push((index.to_string(), GroupValue::Text(group.to_string())));
            }
            Some((protocol, speeds_text)) => {
                let speeds_text = speeds_text.trim();
                let speeds_text = speeds_text.strip_suffix(')').unwrap_or(speeds_text);
                let speeds = speeds_text.split(", ").map(str::to_string).collect();
                groups.push((protocol.to_string(), GroupValue::Speeds(speeds)));
            }
        }
    }

    InfoValue::Groups(groups)
}
