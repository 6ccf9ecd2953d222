//! InfluxDB line protocol emission for the standalone binary. The sink
//! port itself is host-agnostic; this adapter writes one line per
//! measurement to stdout.

use keywatch_application::ports::MetricsSink;
use std::time::{SystemTime, UNIX_EPOCH};

pub struct LineProtocolSink;

impl LineProtocolSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LineProtocolSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSink for LineProtocolSink {
    fn record(&self, measurement: &str, fields: &[(&str, f64)], tags: &[(&str, &str)]) {
        let timestamp_ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        println!("{}", format_line(measurement, fields, tags, timestamp_ns));
    }
}

/// `measurement,tag=value field=value timestamp`, with commas, equals
/// signs and spaces escaped in identifiers.
pub fn format_line(
    measurement: &str,
    fields: &[(&str, f64)],
    tags: &[(&str, &str)],
    timestamp_ns: u128,
) -> String {
    let mut line = escape(measurement);

    for (key, value) in tags {
        line.push(',');
        line.push_str(&escape(key));
        line.push('=');
        line.push_str(&escape(value));
    }

    line.push(' ');
    let rendered: Vec<String> = fields
        .iter()
        .map(|(key, value)| format!("{}={}", escape(key), value))
        .collect();
    line.push_str(&rendered.join(","));

    line.push(' ');
    line.push_str(&timestamp_ns.to_string());
    line
}

fn escape(value: &str) -> String {
    value
        .replace(',', "\\,")
        .replace('=', "\\=")
        .replace(' ', "\\ ")
}
