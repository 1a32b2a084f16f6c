use std::io::{self, Write};

use crate::constants::SUMMARY_HEADER;

/// Writes the summary block: a header surrounded by blank lines, then the text.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn write_summary<W: Write>(out: &mut W, summary: &str) -> io::Result<()> {
    writeln!(out, "\n{SUMMARY_HEADER}\n")?;
    writeln!(out, "{summary}")?;
    out.flush()
}
