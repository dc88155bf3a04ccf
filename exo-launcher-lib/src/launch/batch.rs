//! `dosbox.bat` scanning.
//!
//! eXo launch scripts are a handful of setup lines (`@echo off`, `REM`,
//! `mount`/`imgmount`) followed by the one line that starts the game.

/// Role of a single trimmed batch line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchLine {
    Blank,
    /// `REM ...`
    Remark,
    /// `@...`, usually `@echo off`
    Quiet,
    /// `mount` or `imgmount`, any case
    Mount,
    Command,
}

pub fn classify_batch_line(line: &str) -> BatchLine {
    let line = line.trim();
    if line.is_empty() {
        return BatchLine::Blank;
    }
    if line.starts_with("REM") {
        return BatchLine::Remark;
    }
    if line.starts_with('@') {
        return BatchLine::Quiet;
    }
    let lower = line.to_ascii_lowercase();
    if lower.starts_with("mount") || lower.starts_with("imgmount") {
        return BatchLine::Mount;
    }
    BatchLine::Command
}

/// First command line of a batch script, trimmed.
pub fn find_start_command(script: &str) -> Option<&str> {
    script
        .lines()
        .map(str::trim)
        .find(|line| classify_batch_line(line) == BatchLine::Command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_setup_lines() {
        let script = "@echo off\nREM comment\nMOUNT C .\nimgmount d test.iso -t iso\nGAME.EXE -opt\n";
        assert_eq!(find_start_command(script), Some("GAME.EXE -opt"));
    }

    #[test]
    fn test_first_command_wins() {
        let script = "cd GAME\nGAME.EXE\nexit\n";
        assert_eq!(find_start_command(script), Some("cd GAME"));
    }

    #[test]
    fn test_trims_and_handles_crlf() {
        let script = "@echo off\r\n\r\n   intro.exe /nosound  \r\n";
        assert_eq!(find_start_command(script), Some("intro.exe /nosound"));
    }

    #[test]
    fn test_no_command() {
        assert_eq!(find_start_command(""), None);
        assert_eq!(find_start_command("@echo off\nREM only\nmount c .\n"), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify_batch_line(""), BatchLine::Blank);
        assert_eq!(classify_batch_line("REM x"), BatchLine::Remark);
        assert_eq!(classify_batch_line("@cls"), BatchLine::Quiet);
        assert_eq!(classify_batch_line("Mount c ."), BatchLine::Mount);
        assert_eq!(classify_batch_line("IMGMOUNT d cd.cue -t cdrom"), BatchLine::Mount);
        assert_eq!(classify_batch_line("keen1.exe"), BatchLine::Command);
    }

    #[test]
    fn test_remark_match_is_case_sensitive() {
        // Only upper-case REM is treated as a remark.
        assert_eq!(classify_batch_line("rem lowercase"), BatchLine::Command);
    }
}
