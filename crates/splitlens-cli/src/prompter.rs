//! Interactive stdin prompts for file selection and scope narrowing.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Ask for the splits file path (drag-and-drop friendly; surrounding
/// quotes from the shell are stripped).
pub fn prompt_file_path() -> io::Result<PathBuf> {
    println!("Drag your splits file here, then press Enter to start the analysis...");
    let line = read_line()?;
    Ok(PathBuf::from(strip_quotes(line.trim())))
}

/// Ask for a starting attempt id to narrow a large history. An empty or
/// unparseable reply leaves the scope unbounded.
pub fn prompt_scope_bound(attempt_len: usize) -> Option<i32> {
    println!(
        "This file contains {} attempts. Enter a starting attempt id to narrow the analysis \
         (or press Enter to analyze everything):",
        attempt_len
    );
    let bound = read_line().ok().and_then(|line| line.trim().parse().ok());
    if let Some(bound) = bound {
        println!("Only analyzing attempts with id {} or higher...", bound);
    }
    bound
}

fn read_line() -> io::Result<String> {
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn strip_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_quotes_requires_both_sides() {
        assert_eq!(strip_quotes("\"/tmp/my run.lss\""), "/tmp/my run.lss");
        assert_eq!(strip_quotes("\"unterminated"), "\"unterminated");
        assert_eq!(strip_quotes("plain.lss"), "plain.lss");
        assert_eq!(strip_quotes("\"\""), "");
    }
}
