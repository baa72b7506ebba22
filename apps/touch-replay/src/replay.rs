//! Line-based touch log replay.
//!
//! Each non-empty line is `kind x y time_stamp`, with `kind` one of `down`,
//! `move`, `up` or `cancel`. Lines starting with `#` are comments.

use std::fmt;
use std::io::{self, BufRead, Write};

use tactile_foundation::{
    EventMeta, GestureState, PointerEventKind, RawSample, SampleError, TouchTracker, TouchUpdate,
};

#[derive(Debug)]
pub enum ReplayError {
    Io(io::Error),
    Parse { line: usize, reason: String },
    Sample { line: usize, source: SampleError },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Io(err) => write!(f, "i/o error: {err}"),
            ReplayError::Parse { line, reason } => write!(f, "line {line}: {reason}"),
            ReplayError::Sample { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Io(err) => Some(err),
            ReplayError::Sample { source, .. } => Some(source),
            ReplayError::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for ReplayError {
    fn from(err: io::Error) -> Self {
        ReplayError::Io(err)
    }
}

/// One parsed log line. `line` doubles as the original event handle.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplayEvent {
    pub kind: PointerEventKind,
    pub sample: RawSample,
    pub meta: EventMeta<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub gestures: usize,
    pub ignored: usize,
}

/// Parses a single line; `Ok(None)` for blanks and comments.
pub fn parse_line(line_no: usize, text: &str) -> Result<Option<ReplayEvent>, ReplayError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let parse_error = |reason: String| ReplayError::Parse {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = text.split_whitespace().collect();
    let [kind, x, y, time_stamp] = fields[..] else {
        return Err(parse_error(format!(
            "expected `kind x y time_stamp`, got {} fields",
            fields.len()
        )));
    };

    let kind = match kind.to_ascii_lowercase().as_str() {
        "down" => PointerEventKind::Down,
        "move" => PointerEventKind::Move,
        "up" => PointerEventKind::Up,
        "cancel" => PointerEventKind::Cancel,
        other => return Err(parse_error(format!("unknown event kind `{other}`"))),
    };

    let number = |field: &str, name: &str| {
        field
            .parse::<f64>()
            .map_err(|err| parse_error(format!("invalid {name} `{field}`: {err}")))
    };
    let sample_error = |source| ReplayError::Sample {
        line: line_no,
        source,
    };

    let sample = RawSample::try_new(number(x, "x")?, number(y, "y")?).map_err(sample_error)?;
    let meta =
        EventMeta::try_new(number(time_stamp, "time_stamp")?, line_no).map_err(sample_error)?;

    Ok(Some(ReplayEvent { kind, sample, meta }))
}

/// Replays every event from `input`, writing one report line per handled event.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<ReplaySummary, ReplayError> {
    let mut tracker = TouchTracker::new();
    let mut summary = ReplaySummary::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let Some(event) = parse_line(index + 1, &line)? else {
            continue;
        };
        summary.events += 1;

        match tracker.on_event(event.kind, event.sample, event.meta) {
            TouchUpdate::Started(state) => {
                writeln!(
                    out,
                    "down   t={:.1} at ({}, {})",
                    state.time_stamp, state.initial.x, state.initial.y
                )?;
            }
            TouchUpdate::Moved(state) => report(out, "move", state)?,
            TouchUpdate::Ended(state) => {
                report(out, "up", &state)?;
                summary.gestures += 1;
            }
            TouchUpdate::Cancelled(state) => {
                writeln!(out, "cancel t={:.1}", state.time_stamp)?;
            }
            TouchUpdate::Ignored => {
                log::warn!("line {}: {:?} outside of a gesture", index + 1, event.kind);
                summary.ignored += 1;
            }
        }
    }

    Ok(summary)
}

fn report<W: Write>(out: &mut W, label: &str, state: &GestureState<usize>) -> io::Result<()> {
    let Some(current) = state.current else {
        return Ok(());
    };
    writeln!(
        out,
        "{label:<6} t={:.1} d={:.3} angle={:.3} v=({:.4}, {:.4}) overall=({:.4}, {:.4}) dir={:?}",
        state.time_stamp,
        current.distance,
        current.angle,
        current.velocity_x,
        current.velocity_y,
        current.overall_velocity_x,
        current.overall_velocity_y,
        state.direction(),
    )
}
