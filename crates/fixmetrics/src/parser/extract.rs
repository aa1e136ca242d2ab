//! Field extraction — tag maps and the two record builders.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use super::model::{MsgKind, ParseError, RawRecord, TimedEvent};
use super::tokenize::{soh_tokens, space_tokens, tag_pairs};
use super::{SOH, TAG_CL_ORD_ID, TAG_MSG_TYPE, TIMESTAMP_FORMAT, TIMESTAMP_WIDTH};

/// Build a tag→value map from any token stream. Later occurrences of a
/// tag overwrite earlier ones.
pub fn tag_map<'a>(tokens: impl Iterator<Item = &'a str>) -> HashMap<String, String> {
    tag_pairs(tokens)
        .map(|(tag, value)| (tag.to_string(), value.to_string()))
        .collect()
}

/// Build a [`RawRecord`] from a qualifying line (capture path).
///
/// Message type is the third space token up to the first SOH, timestamp
/// the second space token verbatim. A line with fewer than three space
/// tokens still yields a record, with empty header fields and no tags.
pub fn raw_record(line: &str) -> RawRecord {
    let parts: Vec<&str> = space_tokens(line).collect();

    let mut record = RawRecord {
        message_type: String::new(),
        timestamp: String::new(),
        fields: HashMap::new(),
    };

    if parts.len() > 2 {
        record.message_type = parts[2].split(SOH).next().unwrap_or_default().to_string();
        record.timestamp = parts[1].to_string();
        record.fields = tag_map(parts.into_iter());
    }

    record
}

/// Build a [`TimedEvent`] from a line (correlation path).
///
/// The instant comes from the fixed 26-character prefix
/// (`YYYY/MM/DD HH:MM:SS.ffffff`); message type and correlation id from
/// tags 35 and 11 of the SOH-delimited tokens, defaulting to empty when
/// absent. The length check runs first so a short line is a typed
/// [`ParseError`], never an out-of-range slice.
pub fn timed_event(line: &str) -> Result<TimedEvent, ParseError> {
    let prefix = line
        .get(..TIMESTAMP_WIDTH)
        .ok_or(ParseError::TruncatedTimestamp(line.len(), TIMESTAMP_WIDTH))?;
    let timestamp = NaiveDateTime::parse_from_str(prefix, TIMESTAMP_FORMAT)
        .map_err(|e| ParseError::BadTimestamp(prefix.to_string(), e))?;

    let mut kind = MsgKind::Other;
    let mut correlation_id = String::new();
    for (tag, value) in tag_pairs(soh_tokens(line)) {
        match tag {
            TAG_MSG_TYPE => kind = MsgKind::from_tag_value(value),
            TAG_CL_ORD_ID => correlation_id = value.to_string(),
            _ => {}
        }
    }

    Ok(TimedEvent {
        timestamp,
        kind,
        correlation_id,
    })
}
