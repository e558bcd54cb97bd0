// woodgrid_cli/src/main.rs
#![forbid(unsafe_code)]

mod rollout;

use clap::Parser;

use crate::rollout::{NoopSink, RolloutSink, Runner, RunnerConfig, TableSink};
use woodgrid_engine::{GreedyPolicy, Policy, RandomPolicy};

#[derive(Parser, Debug)]
#[command(name = "woodgrid_cli")]
struct Args {
    // ---------------- rollout sizing ----------------
    /// Total accepted placements to run, summed over episodes.
    #[arg(long, default_value_t = 200)]
    turns: u64,

    /// Base RNG seed; episode i plays with seed + i. Defaults to a fixed value.
    #[arg(long)]
    seed: Option<u64>,

    /// Policy: random | greedy
    #[arg(long, default_value = "random")]
    policy: String,

    // ---------------- visualization ----------------
    /**
     * Print the board as ASCII after every placement, sleeping this many ms
     * between frames (0 = no sleep). Omit the flag to disable rendering.
     * Example: --render 30
     */
    #[arg(long, value_name = "ms")]
    render: Option<u64>,

    // ---------------- output / reporting ----------------
    /// 0 = summary line only, 1 = progress bar, 2 = bar plus periodic table.
    #[arg(long, default_value_t = 1)]
    verbosity: u8,

    /// Table row cadence in turns (verbosity 2 only).
    #[arg(long, default_value_t = 2000)]
    report_every: u64,
}

fn main() {
    let args = Args::parse();

    // Episodes draw their seeds from this base.
    let base_seed = args.seed.unwrap_or(12345);

    // Boxed so the policy choice stays a runtime flag.
    let mut policy: Box<dyn Policy> = match args.policy.as_str() {
        "greedy" => Box::new(GreedyPolicy::new()),
        _ => Box::new(RandomPolicy::new(base_seed.wrapping_add(999))),
    };

    // Plain data handed to the runner.
    let cfg = RunnerConfig {
        turns: args.turns,
        base_seed,

        render_ms: args.render,

        verbosity: args.verbosity,
        report_every: args.report_every,

        policy_name: args.policy.clone(),
    };

    // Table sink only when verbosity asks for it and a cadence is set.
    let sink: Box<dyn RolloutSink> = if cfg.verbosity >= 2 && cfg.report_every > 0 {
        Box::new(TableSink::new(20))
    } else {
        Box::new(NoopSink)
    };

    let mut runner = Runner::new(cfg, sink);
    let report = runner.run(&mut *policy);

    // One greppable line at the end of every run.
    println!(
        "DONE: policy={} turns_done={} elapsed={:.3}s turns/s={:.1} episodes_finished={} avg_ep_len={:.2} max_ep_len={} units/turn={:.3} score/turn={:.2} avg_occ={:.1} worst_occ={} total_score={} total_units={} (last_ep_len={} last_game_over={})",
        report.policy,
        report.turns_done,
        report.elapsed_s,
        report.turns_per_s,
        report.episodes_finished,
        report.avg_ep_len,
        report.max_ep_len,
        report.units_per_turn,
        report.score_per_turn,
        report.avg_filled,
        report.worst_filled,
        report.total_score,
        report.total_units,
        report.last_ep_len,
        report.last_game_over,
    );
}
