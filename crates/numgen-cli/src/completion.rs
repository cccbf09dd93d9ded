//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Generate shell completion script.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, "numgen", out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_bash_completion() {
        let mut cmd = Command::new("numgen");
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Bash, &mut buf);
        assert!(!buf.is_empty());
    }

    #[test]
    fn completion_names_the_binary() {
        let mut cmd = Command::new("numgen");
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Zsh, &mut buf);
        assert!(String::from_utf8_lossy(&buf).contains("numgen"));
    }
}
