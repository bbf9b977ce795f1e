use serde::{Deserialize, Serialize};

use crate::game::{Outcome, TurnEvent};

/// Complete record of one game: seats, every applied turn, and how it ended.
/// Serialized to JSONL, one game per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// RNG seed used for the shuffle (None for hand-stacked decks)
    pub seed: Option<u64>,
    /// Player names in seat order
    pub players: Vec<String>,
    /// Chronological list of applied turns
    pub turns: Vec<TurnEvent>,
    /// Final result; None when the game was abandoned
    #[serde(default)]
    pub outcome: Option<Outcome>,
    /// Fireworks score when the record was taken
    pub score: u8,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    /// Opens `path` for appending, creating parent directories as needed.
    ///
    /// Ids continue after the highest sequence already recorded in the file
    /// for today, so repeated runs against one history never reuse an id.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let date = Utc::now().format("%Y%m%d").to_string();
        let seq = if path.exists() {
            last_seq_for(BufReader::new(File::open(path)?), &date)?
        } else {
            0
        };
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date,
            seq,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

/// Highest sequence number among `date`'s game ids in an existing history.
/// Lines that are not game records are skipped.
fn last_seq_for<R: BufRead>(reader: R, date: &str) -> std::io::Result<u32> {
    let prefix = format!("{}-", date);
    let mut last = 0;
    for line in reader.lines() {
        let line = line?;
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&line) else {
            continue;
        };
        let seq = value["game_id"]
            .as_str()
            .and_then(|id| id.strip_prefix(&prefix))
            .and_then(|n| n.parse::<u32>().ok());
        if let Some(seq) = seq {
            last = last.max(seq);
        }
    }
    Ok(last)
}
