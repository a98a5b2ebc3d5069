//! Console output formatter for simulation results

use crate::output::formatter::OutputFormatter;
use chamber_domain::{Member, MemberId, Round, SimulationResult, Stance};
use colored::{ColoredString, Colorize};

/// Formats simulation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete simulation result
    pub fn format(result: &SimulationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Chamber Simulation Results"));
        output.push('\n');

        if let Some(first) = result.rounds.first() {
            output.push_str(&format!("{} {}\n", "Bill:".cyan().bold(), first.bill.title));
            output.push_str(&format!("{} {}\n", "Summary:".cyan().bold(), first.bill.summary));
        }
        output.push_str(&format!(
            "{} {}   {} {}\n",
            "Members:".cyan().bold(),
            result.member_count(),
            "Seed:".cyan().bold(),
            result.seed
        ));

        for round in &result.rounds {
            output.push_str(&Self::format_round(round, &result.members));
        }

        output.push_str(&Self::section_header("Outcome"));
        output.push_str(&format!("\n{}\n", Self::outcome_line(result)));

        let amendments: Vec<_> = result.amendments().collect();
        if !amendments.is_empty() {
            output.push_str(&format!("\n{}\n", "Amendments adopted:".yellow().bold()));
            for (round_index, text) in amendments {
                output.push_str(&format!("  * after round {}: {}\n", round_index + 1, text));
            }
        }

        if !result.notes.is_empty() {
            output.push_str(&format!("\n{}\n", "Notes:".dimmed()));
            for note in &result.notes {
                output.push_str(&format!("  * {}\n", note));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(result: &SimulationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format one line per round (concise output)
    pub fn format_summary(result: &SimulationResult) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Chamber Verdict ===".cyan().bold()));

        if let Some(first) = result.rounds.first() {
            output.push_str(&format!("{} {}\n\n", "Bill:".bold(), first.bill.title));
        }

        for round in &result.rounds {
            output.push_str(&format!(
                "Round {}: yes {} / no {} / abstain {} ({:.1}% approval) {}\n",
                round.number(),
                round.tally.yes,
                round.tally.no,
                round.tally.abstain,
                round.tally.approval_ratio() * 100.0,
                Self::verdict(round)
            ));
        }

        output.push('\n');
        output.push_str(&Self::outcome_line(result));
        output.push('\n');
        output
    }

    fn format_round(round: &Round, members: &[Member]) -> String {
        let mut output = Self::section_header(&format!("Round {}", round.number()));

        let amendments = round.bill.amendment_count();
        if amendments > 0 {
            output.push_str(&format!(
                "{}\n",
                format!("Debating the bill with {amendments} amendment(s)").dimmed()
            ));
        }

        for speech in &round.speeches {
            let heading = format!(
                "── {} ({}, {}) ──",
                speech.member_id,
                Self::district_name(members, speech.member_id),
                speech.stance.as_str()
            );
            output.push_str(&format!(
                "\n{}\n{}\n",
                Self::stance_color(speech.stance, &heading),
                Self::indent(&speech.text, "  ")
            ));
        }

        output.push_str(&format!(
            "\n{} yes {} / no {} / abstain {}  {}\n",
            "Tally:".bold(),
            round.tally.yes,
            round.tally.no,
            round.tally.abstain,
            Self::verdict(round)
        ));

        if let Some(amendment) = &round.amendment {
            output.push_str(&format!("{} {}\n", "Amendment:".yellow().bold(), amendment));
        }
        output
    }

    fn district_name(members: &[Member], id: MemberId) -> String {
        members
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.district.name.clone())
            .unwrap_or_else(|| "unknown district".to_string())
    }

    fn stance_color(stance: Stance, text: &str) -> ColoredString {
        match stance {
            Stance::Support => text.green().bold(),
            Stance::Oppose => text.red().bold(),
            Stance::Amend => text.yellow().bold(),
        }
    }

    fn verdict(round: &Round) -> ColoredString {
        if round.passed() {
            "PASSED".green().bold()
        } else {
            "FAILED".red().bold()
        }
    }

    fn outcome_line(result: &SimulationResult) -> String {
        let verdict = if result.final_passed {
            "Bill PASSED".green().bold()
        } else {
            "Bill FAILED".red().bold()
        };
        let mut line = format!("{} after {} round(s)", verdict, result.rounds.len());
        if let Some(last) = result.last_round() {
            line.push_str(&format!(
                " (final vote: yes {} / no {} / abstain {})",
                last.tally.yes, last.tally.no, last.tally.abstain
            ));
        }
        line
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &SimulationResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &SimulationResult) -> String {
        Self::format_json(result)
    }

    fn format_summary(&self, result: &SimulationResult) -> String {
        Self::format_summary(result)
    }
}
