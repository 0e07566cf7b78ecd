//! Transport framing for message streams.
//!
//! Streaming delivery uses JSON Lines: one compact message object per line.
//! The pretty form is for humans only and cannot be read back line by line.

use a2ui_types::{ClientMessage, Message};
use std::io::{BufRead, Read, Write};

use crate::error::{Error, Result};

/// Write messages as JSON Lines.
pub fn write_jsonl<W: Write>(writer: &mut W, messages: &[Message]) -> Result<()> {
    for message in messages {
        write_message(writer, message)?;
    }
    Ok(())
}

/// Write one message as compact JSON followed by a newline.
pub fn write_message<W: Write>(writer: &mut W, message: &Message) -> Result<()> {
    let data = serde_json::to_vec(message)?;
    writer.write_all(&data)?;
    writer.write_all(b"\n")?;
    tracing::trace!(kind = %message.kind(), surface_id = message.surface_id(), bytes = data.len(), "wrote message");
    Ok(())
}

/// Write messages as indented JSON, separated by newlines.
pub fn write_pretty<W: Write>(writer: &mut W, messages: &[Message]) -> Result<()> {
    for (i, message) in messages.iter().enumerate() {
        let data = serde_json::to_vec_pretty(message)?;
        writer.write_all(&data)?;
        if i + 1 < messages.len() {
            writer.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Parse a JSON Lines stream into `(line_number, message)` pairs.
///
/// Line numbers are 1-based. Blank lines are skipped; the first malformed
/// line aborts the read with [`Error::Parse`].
pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Vec<(usize, Message)>> {
    let mut messages = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let message = serde_json::from_str(trimmed).map_err(|source| Error::Parse {
            line: index + 1,
            source,
        })?;
        messages.push((index + 1, message));
    }

    tracing::debug!(messages = messages.len(), "read message stream");
    Ok(messages)
}

/// Decode a single client event, e.g. an HTTP request body.
pub fn read_client_message<R: Read>(reader: R) -> Result<ClientMessage> {
    Ok(serde_json::from_reader(reader)?)
}
