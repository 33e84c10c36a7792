use super::sample::NetCounters;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Throughput {
    pub in_kbs: f64,
    pub out_kbs: f64,
}

/// Turns cumulative byte counters into KB/s between consecutive cycles.
///
/// Speeds are averaged over the wall-clock gap since the previous snapshot,
/// so a delayed cycle reports a smoothed value.
#[derive(Debug, Default)]
pub struct RateTracker {
    last: Option<(NetCounters, f64)>,
}

impl RateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `now` is in seconds. Returns zero throughput for the first snapshot and
    /// whenever no time has elapsed; the stored snapshot is always replaced.
    pub fn update(&mut self, counters: NetCounters, now: f64) -> Throughput {
        let throughput = match self.last {
            Some((prev, prev_time)) => {
                let elapsed = now - prev_time;
                if elapsed > 0.0 {
                    Throughput {
                        in_kbs: delta(counters.bytes_recv, prev.bytes_recv) / elapsed / 1024.0,
                        out_kbs: delta(counters.bytes_sent, prev.bytes_sent) / elapsed / 1024.0,
                    }
                } else {
                    Throughput::default()
                }
            }
            None => Throughput::default(),
        };
        self.last = Some((counters, now));
        throughput
    }

    pub fn has_snapshot(&self) -> bool {
        self.last.is_some()
    }
}

fn delta(current: u64, previous: u64) -> f64 {
    current as f64 - previous as f64
}
