//! Progress reporting for simulation runs

use chamber_application::ports::progress::{SimulationObserver, VoteProgress};
use chamber_domain::{Bill, Member, Round, SimulationPhase, SimulationResult, Speech, Stance};
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Reports progress with one indicatif bar per round
pub struct ProgressReporter {
    multi: MultiProgress,
    round_bar: Mutex<Option<ProgressBar>>,
    member_count: AtomicUsize,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::with_multi(MultiProgress::new())
    }

    /// A reporter that draws nothing (for tests and redirected output).
    pub fn hidden() -> Self {
        Self::with_multi(MultiProgress::with_draw_target(ProgressDrawTarget::hidden()))
    }

    fn with_multi(multi: MultiProgress) -> Self {
        Self {
            multi,
            round_bar: Mutex::new(None),
            member_count: AtomicUsize::new(0),
        }
    }

    fn round_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.round_bar.lock() {
            if let Some(pb) = guard.as_ref() {
                f(pb);
            }
        }
    }

    fn stance_marker(stance: Stance) -> String {
        match stance {
            Stance::Support => "+".green().to_string(),
            Stance::Oppose => "-".red().to_string(),
            Stance::Amend => "~".yellow().to_string(),
        }
    }

    fn tally_message(yes: usize, no: usize, abstain: usize) -> String {
        format!(
            "{} {} {}",
            format!("yes {yes}").green(),
            format!("no {no}").red(),
            format!("abstain {abstain}").dimmed()
        )
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationObserver for ProgressReporter {
    fn on_simulation_start(&self, member_count: usize, max_rounds: usize, seed: u64) {
        self.member_count.store(member_count, Ordering::Relaxed);
        let _ = self.multi.println(format!(
            "{} {} members, up to {} round(s), seed {}",
            "->".cyan(),
            member_count,
            max_rounds,
            seed
        ));
    }

    fn on_phase(&self, phase: &SimulationPhase) {
        if phase.round().is_some() && !phase.is_terminal() {
            self.with_bar(|pb| pb.set_message(phase.as_str().to_string()));
        }
    }

    fn on_round_start(&self, round_index: usize, speaker_count: usize, _bill: &Bill) {
        let total = self.member_count.load(Ordering::Relaxed) as u64;
        let pb = self.multi.add(ProgressBar::new(total));
        pb.set_style(Self::round_style());
        pb.set_prefix(format!("Round {}", round_index + 1));
        pb.set_message(format!("{speaker_count} speakers"));

        if let Ok(mut guard) = self.round_bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_speech(&self, _round_index: usize, member: &Member, speech: &Speech) {
        self.with_bar(|pb| {
            pb.set_message(format!("{} {}", Self::stance_marker(speech.stance), member.id));
        });
    }

    fn on_vote_update(&self, _round_index: usize, progress: &VoteProgress) {
        self.with_bar(|pb| {
            pb.set_length(progress.total as u64);
            pb.set_position(progress.decided as u64);
            pb.set_message(Self::tally_message(progress.yes, progress.no, progress.abstain));
        });
    }

    fn on_round_complete(&self, round: &Round) {
        let taken = self.round_bar.lock().ok().and_then(|mut guard| guard.take());
        if let Some(pb) = taken {
            let verdict = if round.passed() {
                "passed".green().bold()
            } else if round.amendment.is_some() {
                "failed, amended".yellow().bold()
            } else {
                "failed".red().bold()
            };
            pb.finish_with_message(format!(
                "{} ({})",
                verdict,
                Self::tally_message(round.tally.yes, round.tally.no, round.tally.abstain)
            ));
        }
    }

    fn on_simulation_complete(&self, _result: &SimulationResult) {
        let _ = self.multi.clear();
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SimulationObserver for SimpleProgress {
    fn on_simulation_start(&self, member_count: usize, max_rounds: usize, seed: u64) {
        println!(
            "{} {} members, up to {} round(s), seed {}",
            "->".cyan(),
            member_count,
            max_rounds,
            seed
        );
    }

    fn on_round_start(&self, round_index: usize, speaker_count: usize, bill: &Bill) {
        println!(
            "{} {} ({} speakers, {} amendment(s) so far)",
            "->".cyan(),
            format!("Round {}", round_index + 1).bold(),
            speaker_count,
            bill.amendment_count()
        );
    }

    fn on_speech(&self, _round_index: usize, member: &Member, speech: &Speech) {
        println!(
            "  {} {} {}",
            ProgressReporter::stance_marker(speech.stance),
            member.id,
            speech.stance.as_str()
        );
    }

    fn on_round_complete(&self, round: &Round) {
        let status = if round.passed() {
            "v".green()
        } else {
            "x".red()
        };
        println!(
            "  {} yes {} / no {} / abstain {}",
            status, round.tally.yes, round.tally.no, round.tally.abstain
        );
        if round.amendment.is_some() {
            println!("  {} amendment appended", "~".yellow());
        }
        println!();
    }
}
