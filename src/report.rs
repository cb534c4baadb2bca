use std::io::{self, Write};

use crate::compare::Comparison;

const SEPARATOR_WIDTH: usize = 80;

pub fn write_report<W: Write>(
    out: &mut W,
    comparison: &Comparison,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "Lines read: {}", comparison.lines_read)?;

    if comparison.equal() {
        writeln!(out, "The files are EQUAL!")?;
        return Ok(());
    }

    writeln!(out, "The files are DIFFERENT!")?;
    writeln!(
        out,
        "There are {} differing line(s)!",
        comparison.differences.len()
    )?;
    writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;

    if verbose {
        for d in &comparison.differences {
            writeln!(out, "Line {}:", d.position)?;
            writeln!(out, "  File 1: {}", d.left)?;
            writeln!(out, "  File 2: {}", d.right)?;
            writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        }
    }
    Ok(())
}
