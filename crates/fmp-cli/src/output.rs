use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// Print a response as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
  let mut stdout = std::io::stdout().lock();
  serde_json::to_writer_pretty(&mut stdout, value)?;
  writeln!(stdout)?;
  Ok(())
}
