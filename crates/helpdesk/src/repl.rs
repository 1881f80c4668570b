//! REPL - console conversation loop
//!
//! Reads one line at a time, hands it to the session and renders the reply.
//! Generic over the reader and writer so tests can script a conversation.

use crate::display::Ui;
use helpdesk_shared::error::Result;
use helpdesk_shared::{Catalog, Reply, Session};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Counters for one finished conversation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplSummary {
    pub turns: usize,
    pub matched: usize,
    pub escalations: usize,
    /// True when the loop ended because input ran out
    pub end_of_input: bool,
}

/// Run the conversation until an exit word or end of input
pub fn run_repl<R, W>(catalog: &Catalog, mut input: R, output: &mut W, ui: &Ui<'_>) -> Result<ReplSummary>
where
    R: BufRead,
    W: Write,
{
    let mut session = Session::from_catalog(catalog);
    let mut summary = ReplSummary::default();
    let mut buf = Vec::new();

    ui.banner(output)?;

    loop {
        session.await_input();
        ui.prompt(output)?;

        let line = match read_line_lossy(&mut input, &mut buf)? {
            Some(line) => line,
            None => {
                debug!("input closed, ending session");
                writeln!(output)?;
                ui.reply(output, &Reply::Goodbye)?;
                summary.end_of_input = true;
                break;
            }
        };

        let reply = session.handle(&line);
        summary.turns += 1;
        debug!(reply = reply.kind(), unclear = session.unclear_count(), "turn handled");
        match reply {
            Reply::Matched(_) => summary.matched += 1,
            Reply::Escalate => summary.escalations += 1,
            _ => {}
        }
        ui.reply(output, &reply)?;

        if session.is_terminated() {
            break;
        }
    }

    output.flush()?;
    info!(
        turns = summary.turns,
        matched = summary.matched,
        escalations = summary.escalations,
        "session finished"
    );
    Ok(summary)
}

/// Read one line, dropping the line ending; invalid UTF-8 is replaced, never fatal
fn read_line_lossy<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf.as_slice()).into_owned()))
}
