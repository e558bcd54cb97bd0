// woodgrid_cli/src/rollout/runner.rs
#![forbid(unsafe_code)]

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use woodgrid_engine::{GameSession, Policy};

use super::sinks::{ReportRow, RolloutSink};
use super::stats::{FinalReport, RolloutStats};

/// How often (in turns) the live progress-bar message refreshes.
/// Internal cadence, deliberately not a CLI flag.
const LIVE_EVERY: u64 = 200;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    // ---------------- core rollout ----------------
    /// Total accepted placements to run, summed over episodes.
    pub turns: u64,
    /// Base seed; episode i plays with base_seed + i.
    pub base_seed: u64,

    /// Echoed in the final report, nothing else.
    pub policy_name: String,

    // ---------------- rendering ----------------
    /// If Some(ms): render every turn; sleep ms between frames (0 = no sleep).
    pub render_ms: Option<u64>,

    // ---------------- output ----------------
    /// 0 = summary line only, 1 = progress bar, 2 = bar plus periodic
    /// table rows (through the sink).
    pub verbosity: u8,

    /// Emit a table row every N turns at verbosity 2; 0 disables the table.
    pub report_every: u64,
}

pub struct Runner {
    cfg: RunnerConfig,
    sink: Box<dyn RolloutSink>,
}

impl Runner {
    pub fn new(cfg: RunnerConfig, sink: Box<dyn RolloutSink>) -> Self {
        Self { cfg, sink }
    }

    pub fn run(&mut self, policy: &mut dyn Policy) -> FinalReport {
        let cfg = self.cfg.clone();

        // The bar is presentation only; the loop never branches on it.
        let pb = if cfg.verbosity >= 1 {
            let pb = ProgressBar::new(cfg.turns);
            pb.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos:>9}/{len:<9}  {percent:>3}%  {elapsed_precise}  {msg}",
                )
                .unwrap()
                .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut stats = RolloutStats::new();

        // Current episode.
        let mut episode_id: u64 = 0;
        let mut session = GameSession::new(cfg.base_seed.wrapping_add(episode_id));

        // Accumulated over finished episodes; live readouts add the episode
        // still in flight.
        let mut total_units_finished: u64 = 0;
        let mut total_score_finished: u64 = 0;
        let mut units_this_episode: u64 = 0;

        // Rendering follows --render alone, independent of verbosity.
        if cfg.render_ms.is_some() {
            print!("{}", session.render_ascii());
        }

        while stats.turns_done < cfg.turns {
            // ------------------------------------------------------------
            // Terminal state: close out the episode, start the next one.
            // ------------------------------------------------------------
            if session.is_game_over() {
                stats.on_episode_end();

                total_units_finished += units_this_episode;
                total_score_finished += session.score();
                units_this_episode = 0;

                episode_id += 1;
                session = GameSession::new(cfg.base_seed.wrapping_add(episode_id));

                if cfg.render_ms.is_some() {
                    println!(
                        "=== new episode: finished={} avg_len={:.2} max_len={} ===",
                        stats.episodes_finished,
                        stats.avg_ep_len(),
                        stats.episode_len_max
                    );
                    print!("{}", session.render_ascii());
                }
                continue;
            }

            // ------------------------------------------------------------
            // One placement: policy chooses a move.
            // ------------------------------------------------------------
            let m = match policy.choose_move(&session) {
                Some(m) => m,
                // An active session always has a legal move (game over latches
                // on the turn that exhausts them), so this is a policy defect.
                None => break,
            };

            let r = match session.attempt_placement(m.piece, m.row, m.col) {
                Ok(r) => r,
                // Policies are expected to emit legal moves; stop rather than spin.
                Err(_) => break,
            };
            units_this_episode += u64::from(r.units_cleared);

            stats.on_turn(session.board().filled_cells());

            if let Some(ref pb) = pb {
                pb.inc(1);
            }

            // Rendering (ASCII) every turn when enabled.
            if let Some(ms) = cfg.render_ms {
                println!(
                    "turn={} piece={} anchor=({},{}) points={} units={}",
                    stats.turns_done, m.piece, m.row, m.col, r.points_gained, r.units_cleared
                );
                print!("{}", session.render_ascii());
                if ms > 0 {
                    std::thread::sleep(Duration::from_millis(ms));
                }
            }

            // ------------------------------------------------------------
            // Periodic table row (verbosity 2). Aggregates only; per-turn
            // detail belongs to --render.
            // ------------------------------------------------------------
            if cfg.verbosity == 2
                && cfg.report_every > 0
                && (stats.turns_done % cfg.report_every == 0)
            {
                let live_total_units = total_units_finished + units_this_episode;
                let live_total_score = total_score_finished + session.score();

                let row = ReportRow {
                    turn: stats.turns_done,
                    turns_total: cfg.turns,
                    tps: stats.turns_per_sec(),

                    episodes_finished: stats.episodes_finished,
                    avg_ep_len: stats.avg_ep_len(),
                    max_ep_len: stats.episode_len_max,

                    units_per_turn: stats.units_per_turn(live_total_units),
                    score_per_turn: stats.score_per_turn(live_total_score),

                    avg_filled: stats.avg_filled(),
                    worst_filled: stats.worst_filled,
                };

                self.sink.on_report(&row);
            }

            // ------------------------------------------------------------
            // Refresh the live bar message.
            // ------------------------------------------------------------
            if cfg.verbosity >= 1 && (stats.turns_done % LIVE_EVERY == 0) {
                let live_total_units = total_units_finished + units_this_episode;
                let live_total_score = total_score_finished + session.score();

                let upt = stats.units_per_turn(live_total_units);
                let spt = stats.score_per_turn(live_total_score);

                let msg = stats.live_msg(upt, spt);

                if let Some(ref pb) = pb {
                    pb.set_message(msg);
                }
            }
        }

        // Fold the unfinished episode into the totals.
        let total_units = total_units_finished + units_this_episode;
        let total_score = total_score_finished + session.score();

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        // Stats owns the shape of the end-of-run report.
        stats.final_report(
            &cfg.policy_name,
            total_units,
            total_score,
            stats.ep_len,
            session.is_game_over(),
        )
    }
}
