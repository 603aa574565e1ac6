//! The three output encodings for a resolved sample sequence.
//!
//! Formatters are pure: plain and JSON depend only on the samples, monitor
//! additionally on the process identity and an injected wall-clock instant.
//! None of them mutates its input.

use crate::domain::{ProcessIdentity, SampleOutcome, StatSample};
use anyhow::Result;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Reporting interval of the monitoring pipeline, in seconds. Datapoint
/// timestamps are floored to this boundary.
const MONITOR_STEP: i64 = 60;

/// One gauge datapoint in the push-monitoring wire format.
#[derive(Serialize)]
struct MonitorDatapoint<'a> {
    endpoint: &'a str,
    step: i64,
    #[serde(rename = "counterType")]
    counter_type: &'static str,
    timestamp: i64,
    metric: &'static str,
    value: i64,
    tags: String,
}

/// One `name=value` (or `name=errorMessage`) line per sample, in order.
pub fn render_plain(samples: &[StatSample]) -> String {
    let mut out = String::new();
    for sample in samples {
        match &sample.outcome {
            SampleOutcome::Value(value) => out.push_str(&format!("{}={value}\n", sample.name)),
            SampleOutcome::Error(message) => out.push_str(&format!("{}={message}\n", sample.name)),
        }
    }
    out
}

/// Pretty-printed JSON array of single-key objects, one per sample, in order.
pub fn render_json(samples: &[StatSample]) -> Result<String> {
    let entries: Vec<serde_json::Value> = samples.iter().map(json_entry).collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

fn json_entry(sample: &StatSample) -> serde_json::Value {
    let mut object = serde_json::Map::with_capacity(1);
    let value = match &sample.outcome {
        SampleOutcome::Value(value) => serde_json::Value::from(*value),
        SampleOutcome::Error(message) => serde_json::Value::from(message.as_str()),
    };
    object.insert(sample.name.clone(), value);
    serde_json::Value::Object(object)
}

/// Compact JSON array of push-monitoring datapoints.
///
/// Timestamps are floored to the 60-second reporting boundary, so every call
/// within one window reports the same instant. Samples whose lookup failed
/// carry no numeric value and are omitted from the output.
///
/// An identity that fails host-or-IP validation short-circuits: the failure
/// message becomes the entire body. Existing monitoring consumers expect
/// that body under a 200 status, so the caller must not downgrade it.
pub fn render_monitor(
    samples: &[StatSample],
    identity: &ProcessIdentity,
    now: SystemTime,
) -> Result<String> {
    let endpoint = match identity.endpoint() {
        Ok(endpoint) => endpoint,
        Err(err) => return Ok(err.to_string()),
    };

    let now_secs = now
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    let report_timestamp = now_secs - now_secs % MONITOR_STEP;

    let common_tags = format!(
        "project=nebula,city=jd,ip_port={endpoint},module={}",
        identity.role
    );

    let mut datapoints = Vec::with_capacity(samples.len());
    for sample in samples {
        let value = match &sample.outcome {
            SampleOutcome::Value(value) => *value,
            SampleOutcome::Error(message) => {
                tracing::debug!(
                    stat = %sample.name,
                    %message,
                    "skipping failed stat in monitor output"
                );
                continue;
            }
        };
        datapoints.push(MonitorDatapoint {
            endpoint: &endpoint,
            step: MONITOR_STEP,
            counter_type: "GAUGE",
            timestamp: report_timestamp,
            metric: "pv",
            value,
            tags: format!("{common_tags},type={}", sample.name),
        });
    }

    Ok(serde_json::to_string(&datapoints)?)
}
