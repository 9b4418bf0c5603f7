//! Parser for `networksetup -listnetworkserviceorder` output.
//!
//! A record is two consecutive lines:
//!
//! ```text
//! (1) Wi-Fi
//! (Hardware Port: Wi-Fi, Device: en0)
//! ```
//!
//! Anything else is skipped without error, including services macOS marks as
//! disabled (`(*) Name`) and the leading "An asterisk (*) denotes..." banner.

use crate::domain::{aggregates::ServiceListing, entities::NetworkServiceEntry};

const HARDWARE_LINE_PREFIX: &str = "(Hardware Port: ";
const HARDWARE_LINE_SUFFIX: &str = ")\n";
const DEVICE_SEPARATOR: &str = ", Device: ";

pub fn parse_service_listing(output: &str) -> ServiceListing {
    let lines = output.split_inclusive('\n').collect::<Vec<_>>();
    let mut entries = Vec::new();
    let mut index = 0_usize;

    while let Some(line) = lines.get(index) {
        let record = lines
            .get(index.saturating_add(1))
            .and_then(|next_line| parse_record(line, next_line));

        match record {
            Some(entry) => {
                entries.push(entry);
                index = index.saturating_add(2);
            }
            None => {
                index = index.saturating_add(1);
            }
        }
    }

    ServiceListing::new(entries)
}

fn parse_record(index_line: &str, hardware_line: &str) -> Option<NetworkServiceEntry> {
    let service_name = parse_service_name(index_line)?;
    let (hardware_port, device) = parse_hardware_line(hardware_line)?;
    NetworkServiceEntry::from_parts(service_name, hardware_port, device).ok()
}

// The "(<digits>) " marker may start anywhere on the line; the leftmost one
// wins and the name runs to the end of the line.
fn parse_service_name(line: &str) -> Option<&str> {
    let line = line.strip_suffix('\n')?;

    line.match_indices('(').find_map(|(start, _)| {
        let after_paren = line.get(start.saturating_add(1)..)?;
        let digit_count = after_paren
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digit_count == 0 {
            return None;
        }

        let name = after_paren.get(digit_count..)?.strip_prefix(") ")?;
        if name.is_empty() { None } else { Some(name) }
    })
}

// The port ends at the first separator that leaves both port and device
// non-empty; the device runs up to the closing parenthesis at end of line.
fn parse_hardware_line(line: &str) -> Option<(&str, &str)> {
    let inner = line
        .strip_prefix(HARDWARE_LINE_PREFIX)?
        .strip_suffix(HARDWARE_LINE_SUFFIX)?;

    inner
        .match_indices(DEVICE_SEPARATOR)
        .find_map(|(separator_start, _)| {
            let port = inner.get(..separator_start)?;
            let device = inner.get(separator_start.saturating_add(DEVICE_SEPARATOR.len())..)?;
            if port.is_empty() || device.is_empty() {
                None
            } else {
                Some((port, device))
            }
        })
}
