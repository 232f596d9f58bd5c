//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, `PowerShell`, and elvish.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::FocusFlowError;

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, FocusFlowError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "focusflow", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| FocusFlowError::InvalidArgument(format!("UTF-8 error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let script = completions(Shell::Bash).unwrap();
        assert!(script.contains("focusflow"));
        assert!(script.contains("simulate"));
        assert!(script.contains("config"));
    }
}
