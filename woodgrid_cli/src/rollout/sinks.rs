// woodgrid_cli/src/rollout/sinks.rs
#![forbid(unsafe_code)]

/// One periodic snapshot of aggregate rollout statistics.
#[derive(Clone, Debug)]
pub struct ReportRow {
    pub turn: u64,
    pub turns_total: u64,
    pub tps: f64,

    pub episodes_finished: u64,
    pub avg_ep_len: f64,
    pub max_ep_len: u64,

    pub units_per_turn: f64,
    pub score_per_turn: f64,

    pub avg_filled: f64,
    pub worst_filled: u32,
}

pub trait RolloutSink {
    /// Receives a fully-prepared row on the runner's report cadence.
    fn on_report(&mut self, _row: &ReportRow) {}
}

/// Discards every row; the zero-overhead default.
#[derive(Default)]
pub struct NoopSink;

impl RolloutSink for NoopSink {}

/// Writes rows to stdout as an aligned table.
pub struct TableSink {
    header_every_rows: u64,
    rows_printed: u64,
}

impl TableSink {
    pub fn new(header_every_rows: u64) -> Self {
        Self {
            header_every_rows,
            rows_printed: 0,
        }
    }
}

impl RolloutSink for TableSink {
    fn on_report(&mut self, row: &ReportRow) {
        if self.header_every_rows > 0 && self.rows_printed % self.header_every_rows == 0 {
            println!(
                "{:>10} {:>10} {:>8} {:>6} {:>8} {:>7} {:>8} {:>11} {:>8} {:>9}",
                "turn",
                "total",
                "tps",
                "eps",
                "avg_ep",
                "max_ep",
                "u/turn",
                "score/turn",
                "avg_occ",
                "worst_occ"
            );
        }
        self.rows_printed += 1;
        println!(
            "{:>10} {:>10} {:>8.1} {:>6} {:>8.2} {:>7} {:>8.3} {:>11.2} {:>8.1} {:>9}",
            row.turn,
            row.turns_total,
            row.tps,
            row.episodes_finished,
            row.avg_ep_len,
            row.max_ep_len,
            row.units_per_turn,
            row.score_per_turn,
            row.avg_filled,
            row.worst_filled
        );
    }
}
