//! telemetry/snapshot.rs
//! Immutable view of an encoder's telemetry.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::EncoderCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub counters: EncoderCounters,
    /// compressed / decompressed; 0.0 before any chunk.
    pub compression_ratio: f64,
    /// Seek table bytes per decompressed byte; 0.0 before any chunk.
    pub index_overhead_ratio: f64,
    /// Compressed chunks plus the seek table frame.
    pub output_bytes: u64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
    /// Sum over all stages.
    pub stage_time_total: Duration,
}

impl TelemetrySnapshot {
    pub fn from(counters: &EncoderCounters, timer: &TelemetryTimer) -> Self {
        let ratio = |num: u64| {
            if counters.bytes_decompressed > 0 {
                num as f64 / counters.bytes_decompressed as f64
            } else {
                0.0
            }
        };

        Self {
            counters: counters.clone(),
            compression_ratio: ratio(counters.bytes_compressed),
            index_overhead_ratio: ratio(counters.bytes_overhead),
            output_bytes: counters.output_bytes(),
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
            stage_time_total: timer.stage_times.total(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_zero_without_input() {
        let snap = TelemetrySnapshot::from(&EncoderCounters::default(), &TelemetryTimer::new());
        assert_eq!(snap.compression_ratio, 0.0);
        assert_eq!(snap.index_overhead_ratio, 0.0);
    }

    #[test]
    fn snapshot_serializes() {
        let mut c = EncoderCounters::default();
        c.add_chunk(200, 50);
        let snap = TelemetrySnapshot::from(&c, &TelemetryTimer::new());
        assert_eq!(snap.compression_ratio, 0.25);
        assert_eq!(snap.output_bytes, 50);

        let json = snap.to_json().unwrap();
        let back: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.counters, c);
    }
}
