//! Append-only JSONL record of game events.
//!
//! One line per event:
//!
//! ```text
//! {"seq":1,"elapsed_ms":5230,"type":"solidified","piece":"t","color":"red","x":4,"y":27}
//! {"seq":2,"elapsed_ms":5730,"type":"rows_cleared","rows":1,"score":10}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventBody {
    Solidified {
        piece: &'static str,
        color: &'static str,
        x: i8,
        y: i8,
    },
    RowsCleared {
        rows: u8,
        score: u32,
    },
    GameOver {
        score: u32,
    },
    Restarted,
}

impl From<GameEvent> for EventBody {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Solidified { kind, color, x, y } => EventBody::Solidified {
                piece: kind.as_str(),
                color: color.as_str(),
                x,
                y,
            },
            GameEvent::RowsCleared { rows, score } => EventBody::RowsCleared { rows, score },
            GameEvent::GameOver { score } => EventBody::GameOver { score },
            GameEvent::Restarted => EventBody::Restarted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub seq: u64,
    pub elapsed_ms: u64,
    #[serde(flatten)]
    pub body: EventBody,
}

/// Serializes events as JSON lines into any writer.
pub struct EventLog<W: Write> {
    out: W,
    seq: u64,
    buf: Vec<u8>,
}

impl EventLog<BufWriter<File>> {
    /// Append to the file at `path`, creating it if needed.
    pub fn create(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    /// Number of records written so far.
    pub fn len(&self) -> u64 {
        self.seq
    }

    pub fn is_empty(&self) -> bool {
        self.seq == 0
    }

    pub fn record(&mut self, elapsed_ms: u64, event: GameEvent) -> Result<()> {
        self.seq += 1;
        let record = EventRecord {
            seq: self.seq,
            elapsed_ms,
            body: event.into(),
        };

        self.buf.clear();
        serde_json::to_writer(&mut self.buf, &record).context("encoding event record")?;
        self.buf.push(b'\n');
        self.out
            .write_all(&self.buf)
            .context("writing event record")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("flushing event log")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
