use crate::demos;
use crate::types::DemoName;
use a2ui_engine::{write_jsonl, write_pretty};
use anyhow::Result;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub fn handle(name: DemoName, pretty: bool, delay_ms: u64) -> Result<()> {
    let stages = demos::stages(name);
    tracing::info!(demo = %name, stages = stages.len(), "emitting demo");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (i, batch) in stages.iter().enumerate() {
        if i > 0 && delay_ms > 0 {
            thread::sleep(Duration::from_millis(delay_ms));
        }

        if pretty {
            write_pretty(&mut out, batch)?;
            writeln!(out)?;
        } else {
            write_jsonl(&mut out, batch)?;
        }
        out.flush()?;
    }

    Ok(())
}
