// woodgrid_cli/src/rollout/stats.rs
#![forbid(unsafe_code)]

use std::time::Instant;

#[derive(Clone, Debug)]
pub struct RolloutStats {
    pub episodes_finished: u64,
    pub ep_len: u64,
    pub episode_len_sum: u64,
    pub episode_len_max: u64,

    pub turns_done: u64,

    // occupancy aggregates (filled cells after each accepted placement)
    pub sum_filled: f64,
    pub worst_filled: u32,

    t0: Instant,
}

impl RolloutStats {
    pub fn new() -> Self {
        Self {
            episodes_finished: 0,
            ep_len: 0,
            episode_len_sum: 0,
            episode_len_max: 0,
            turns_done: 0,
            sum_filled: 0.0,
            worst_filled: 0,
            t0: Instant::now(),
        }
    }

    /// Call once per accepted placement with the post-clear occupancy.
    pub fn on_turn(&mut self, filled_cells: u32) {
        self.turns_done += 1;
        self.ep_len += 1;

        self.sum_filled += f64::from(filled_cells);
        self.worst_filled = self.worst_filled.max(filled_cells);
    }

    /// Call when an episode terminates (game over), before resetting.
    pub fn on_episode_end(&mut self) {
        self.episodes_finished += 1;
        self.episode_len_sum += self.ep_len;
        self.episode_len_max = self.episode_len_max.max(self.ep_len);

        self.ep_len = 0;
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.t0.elapsed().as_secs_f64()
    }

    pub fn turns_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.turns_done as f64 / dt
        } else {
            0.0
        }
    }

    pub fn avg_ep_len(&self) -> f64 {
        if self.episodes_finished > 0 {
            self.episode_len_sum as f64 / self.episodes_finished as f64
        } else {
            0.0
        }
    }

    pub fn avg_filled(&self) -> f64 {
        if self.turns_done > 0 {
            self.sum_filled / self.turns_done as f64
        } else {
            0.0
        }
    }

    pub fn units_per_turn(&self, live_total_units: u64) -> f64 {
        if self.turns_done > 0 {
            live_total_units as f64 / self.turns_done as f64
        } else {
            0.0
        }
    }

    pub fn score_per_turn(&self, live_total_score: u64) -> f64 {
        if self.turns_done > 0 {
            live_total_score as f64 / self.turns_done as f64
        } else {
            0.0
        }
    }

    pub fn live_msg(&self, units_per_turn: f64, score_per_turn: f64) -> String {
        format!(
            "tps={:.1} eps={} avg_ep={:.1} max_ep={} u/turn={:.3} score/turn={:.2} avg_occ={:.1} worst_occ={}",
            self.turns_per_sec(),
            self.episodes_finished,
            self.avg_ep_len(),
            self.episode_len_max,
            units_per_turn,
            score_per_turn,
            self.avg_filled(),
            self.worst_filled,
        )
    }

    pub fn final_report(
        &self,
        policy_name: &str,
        total_units: u64,
        total_score: u64,
        last_ep_len: u64,
        last_game_over: bool,
    ) -> FinalReport {
        FinalReport {
            policy: policy_name.to_string(),

            turns_done: self.turns_done,
            elapsed_s: self.elapsed_secs(),
            turns_per_s: self.turns_per_sec(),
            episodes_finished: self.episodes_finished,
            avg_ep_len: self.avg_ep_len(),
            max_ep_len: self.episode_len_max,
            units_per_turn: self.units_per_turn(total_units),
            score_per_turn: self.score_per_turn(total_score),
            avg_filled: self.avg_filled(),
            worst_filled: self.worst_filled,
            total_score,
            total_units,
            last_ep_len,
            last_game_over,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FinalReport {
    pub policy: String,

    pub turns_done: u64,
    pub elapsed_s: f64,
    pub turns_per_s: f64,

    pub episodes_finished: u64,
    pub avg_ep_len: f64,
    pub max_ep_len: u64,

    pub units_per_turn: f64,
    pub score_per_turn: f64,

    pub avg_filled: f64,
    pub worst_filled: u32,

    pub total_score: u64,
    pub total_units: u64,

    pub last_ep_len: u64,
    pub last_game_over: bool,
}
