/// Commands accepted over the line-oriented control channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Re-establish the zero reference from fresh sensor samples.
    Recenter,
}

/// Parse one control line. Matching is case-sensitive on the trimmed
/// line; anything unrecognized is ignored by the caller.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "reset" | "resetview" => Some(Command::Recenter),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_both_recenter_spellings() {
        assert_eq!(parse_command("reset"), Some(Command::Recenter));
        assert_eq!(parse_command("resetview"), Some(Command::Recenter));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_command("  reset \r\n"), Some(Command::Recenter));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(parse_command("Reset"), None);
        assert_eq!(parse_command("RESETVIEW"), None);
    }

    #[test]
    fn unknown_lines_are_ignored() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("reset view"), None);
        assert_eq!(parse_command("resetviews"), None);
    }
}
