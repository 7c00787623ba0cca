//! Validated console input
//!
//! Each reader is an explicit predicate plus a retry loop at the boundary:
//! invalid lines re-prompt, they never fail the operation. Everything is
//! generic over `BufRead`/`Write` so tests drive the loops with cursors.
//! `Ok(None)` means EOF on input; callers treat it as a request to quit.

use std::io::{self, BufRead, Write};

use rosterctl_core::validate::{is_non_empty, parse_positive_int};

/// Print a prompt and read one line, trimming the line terminator
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Re-prompt until a non-empty line is entered
pub fn read_non_empty_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    loop {
        let Some(line) = read_line(input, out, prompt)? else {
            return Ok(None);
        };
        if is_non_empty(&line) {
            return Ok(Some(line.trim().to_string()));
        }
        writeln!(out, "Value cannot be empty.")?;
    }
}

/// Re-prompt until the line is digits-only and parses to a positive integer.
///
/// Zero, negative-looking input, stray characters, and overflow are all the
/// same case: invalid, try again.
pub fn read_positive_integer<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<i32>> {
    loop {
        let Some(line) = read_line(input, out, prompt)? else {
            return Ok(None);
        };
        if let Some(n) = parse_positive_int(line.trim()) {
            return Ok(Some(n));
        }
        writeln!(out, "Invalid input. Please enter a positive whole number (e.g., 17).")?;
    }
}
