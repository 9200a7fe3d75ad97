//! Parsing of one `start end speaker: words...` transcript line.

/// A parsed, not yet cleaned, transcript line.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<'a> {
    pub start_frame: i64,
    pub end_frame: i64,
    /// Speaker field with every `:` removed. Not validated.
    pub speaker_tag: String,
    pub words: Vec<&'a str>,
}

impl Segment<'_> {
    /// Words joined by single spaces and lowercased.
    pub fn raw_transcript(&self) -> String {
        self.words.join(" ").to_lowercase()
    }
}

/// Convert seconds to 10ms frames, rounding half up.
pub fn seconds_to_frame(seconds: f64) -> i64 {
    (seconds * 100.0 + 0.05).floor() as i64
}

/// Parse one line.
///
/// Returns `Ok(None)` for comment and blank lines, and `Err(reason)` when the
/// line has no speaker field or a non-numeric time.
pub fn parse_line(line: &str) -> Result<Option<Segment<'_>>, String> {
    let fields: Vec<&str> = line.trim().split(' ').collect();

    if matches!(fields[0], "#" | "") {
        return Ok(None);
    }

    if fields.len() < 3 {
        return Err(format!(
            "expected `start end speaker: words...`, found {} field(s)",
            fields.len()
        ));
    }

    let start = parse_seconds(fields[0])?;
    let end = parse_seconds(fields[1])?;

    Ok(Some(Segment {
        start_frame: seconds_to_frame(start),
        end_frame: seconds_to_frame(end),
        speaker_tag: fields[2].replace(':', ""),
        words: fields[3..].to_vec(),
    }))
}

fn parse_seconds(field: &str) -> Result<f64, String> {
    let seconds = field
        .parse::<f64>()
        .map_err(|e| format!("invalid time {:?}: {}", field, e))?;

    // Frames must fit in an i64 after flooring
    let frames = seconds * 100.0 + 0.05;
    if !frames.is_finite() || frames < i64::MIN as f64 || frames >= i64::MAX as f64 {
        return Err(format!("time {:?} is out of range", field));
    }

    Ok(seconds)
}
