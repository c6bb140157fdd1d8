//! Command helper methods for Test.

use super::{Test, DEFINITION_FILE};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a hostbook command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME and the config dir set to the temporary home directory
    /// - Current directory set to the test directory
    /// - hostbook environment variables cleared
    /// - keyring and prompt disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("hostbook").expect("failed to find hostbook binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("HOSTBOOK_FILE");
        cmd.env_remove("HOSTBOOK_VAULT_PASSWORD");
        cmd.env_remove("HOSTBOOK_LOG");
        cmd.args(["--no-keyring", "--no-prompt"]);
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// A command reading the standard definition file.
    pub fn hostbook(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--file", DEFINITION_FILE]);
        cmd
    }

    /// Run hostbook against the standard definition file.
    pub fn run(&self, args: &[&str]) -> Output {
        self.hostbook()
            .args(args)
            .output()
            .expect("failed to run hostbook")
    }

    /// Run hostbook with the vault password in the environment.
    pub fn run_with_password(&self, password: &str, args: &[&str]) -> Output {
        self.hostbook()
            .env("HOSTBOOK_VAULT_PASSWORD", password)
            .args(args)
            .output()
            .expect("failed to run hostbook")
    }

    /// Shortcut for `hostbook list`.
    pub fn list(&self, nickname: Option<&str>) -> Output {
        match nickname {
            Some(n) => self.run(&["list", n]),
            None => self.run(&["list"]),
        }
    }

    /// Shortcut for `hostbook list --json`, parsed.
    pub fn list_json(&self, args: &[&str]) -> serde_json::Value {
        let mut full = vec!["list", "--json"];
        full.extend_from_slice(args);
        let output = self.run(&full);
        super::assert_success(&output);
        serde_json::from_slice(&output.stdout).expect("list --json printed invalid JSON")
    }
}
