//! Child process execution with inherited standard streams.

use std::process::{Command, Stdio};

use crate::error::Result;

/// Run a command line through `sh -c` with stdin, stdout and stderr
/// inherited from the wrapper, so interactive prompts and progress bars
/// work as if the package manager were run directly.
///
/// Returns the child's exit code, or -1 when it was terminated by a
/// signal. Fails with an IO error only when the shell cannot be spawned.
pub fn run_shell(command_line: &str) -> Result<i32> {
    let status = Command::new("sh")
        .args(["-c", command_line])
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    Ok(status.code().unwrap_or(-1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_zero_for_successful_command() {
        assert_eq!(run_shell("true").unwrap(), 0);
    }

    #[test]
    fn propagates_nonzero_exit_code() {
        assert_eq!(run_shell("exit 3").unwrap(), 3);
    }

    #[test]
    fn shell_parses_the_full_line() {
        assert_eq!(run_shell("echo one two > /dev/null").unwrap(), 0);
    }
}
