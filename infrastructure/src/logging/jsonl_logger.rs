//! JSONL file writer for simulation events.
//!
//! Each observer callback becomes a single JSON line with a `type` field and
//! `timestamp`, appended to the file via a buffered writer.

use chamber_application::ports::progress::{SimulationObserver, VoteProgress};
use chamber_domain::{Bill, Member, Round, SimulationPhase, SimulationResult, Speech};
use serde_json::{Value, json};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Run transcript that writes one JSON object per observer event.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlRunLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlRunLogger {
    /// Create a transcript at the given path, truncating an existing file.
    ///
    /// Creates parent directories as needed. Returns `None` (after a
    /// warning) if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(
                    "Could not create transcript directory {}: {}",
                    parent.display(),
                    e
                );
                return None;
            }
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not create transcript file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_event(&self, event_type: &str, payload: Value) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = match payload {
            Value::Object(mut map) => {
                map.insert("type".to_string(), Value::String(event_type.to_string()));
                map.insert("timestamp".to_string(), Value::String(timestamp));
                Value::Object(map)
            }
            other => json!({
                "type": event_type,
                "timestamp": timestamp,
                "data": other,
            }),
        };

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl SimulationObserver for JsonlRunLogger {
    fn on_simulation_start(&self, member_count: usize, max_rounds: usize, seed: u64) {
        self.write_event(
            "simulation_start",
            json!({ "members": member_count, "max_rounds": max_rounds, "seed": seed }),
        );
    }

    fn on_phase(&self, phase: &SimulationPhase) {
        self.write_event("phase", serde_json::to_value(phase).unwrap_or(Value::Null));
    }

    fn on_round_start(&self, round_index: usize, speaker_count: usize, bill: &Bill) {
        self.write_event(
            "round_start",
            json!({
                "round": round_index + 1,
                "speakers": speaker_count,
                "title": bill.title,
                "amendments": bill.amendment_count(),
            }),
        );
    }

    fn on_speech(&self, round_index: usize, member: &Member, speech: &Speech) {
        self.write_event(
            "speech",
            json!({
                "round": round_index + 1,
                "member": member.id.to_string(),
                "district": member.district.district_id,
                "stance": speech.stance.as_str(),
                "text": speech.text,
            }),
        );
    }

    fn on_vote_update(&self, round_index: usize, progress: &VoteProgress) {
        self.write_event(
            "vote_update",
            json!({
                "round": round_index + 1,
                "yes": progress.yes,
                "no": progress.no,
                "abstain": progress.abstain,
                "decided": progress.decided,
                "total": progress.total,
            }),
        );
    }

    fn on_round_complete(&self, round: &Round) {
        self.write_event(
            "round_complete",
            json!({
                "round": round.number(),
                "yes": round.tally.yes,
                "no": round.tally.no,
                "abstain": round.tally.abstain,
                "passed": round.passed(),
                "speakers": round.speaker_ids(),
                "amendment": round.amendment,
            }),
        );
    }

    fn on_simulation_complete(&self, result: &SimulationResult) {
        let amendments = result
            .final_bill()
            .map(|bill| bill.amendments)
            .unwrap_or_default();
        self.write_event(
            "simulation_complete",
            json!({
                "seed": result.seed,
                "members": result.member_count(),
                "rounds": result.rounds.len(),
                "final_passed": result.final_passed,
                "amendments": amendments,
                "notes": result.notes,
            }),
        );
    }
}

impl Drop for JsonlRunLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
