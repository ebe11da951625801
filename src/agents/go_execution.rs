use crate::agents::update::Pin;
use crate::error::{MergeError, Result};
use crate::toolchain::GoToolchain;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// GoExecutionAgent runs the Go toolchain as a child process
pub struct GoExecutionAgent {
    go_binary: OsString,
}

impl GoExecutionAgent {
    pub fn new(go_binary: impl Into<OsString>) -> Self {
        Self {
            go_binary: go_binary.into(),
        }
    }

    fn command_line(&self, args: &[String]) -> String {
        format!("{} {}", self.go_binary.to_string_lossy(), args.join(" "))
    }

    fn command(&self, root: &Path, args: &[String]) -> Command {
        let mut command = Command::new(&self.go_binary);
        command.current_dir(root).args(args);
        command
    }

    fn list_args() -> Vec<String> {
        ["list", "-m", "-json", "all"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

impl GoToolchain for GoExecutionAgent {
    fn list_modules(&self, root: &Path) -> Result<Vec<u8>> {
        let args = Self::list_args();
        let command_line = self.command_line(&args);
        debug!(root = %root.display(), "executing: {command_line}");

        // Diagnostics go straight to the user; only stdout is captured.
        let output = self
            .command(root, &args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| MergeError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(MergeError::CommandFailed {
                command: command_line,
                code: output.status.code(),
            });
        }

        debug!(bytes = output.stdout.len(), "module listing received");
        Ok(output.stdout)
    }

    fn edit_requirements(&self, root: &Path, pins: &[Pin]) -> Result<()> {
        let mut args = vec!["mod".to_string(), "edit".to_string()];
        args.extend(pins.iter().map(|pin| format!("-require={pin}")));
        let command_line = self.command_line(&args);
        debug!(root = %root.display(), "executing: {command_line}");

        let status = self
            .command(root, &args)
            .stdin(Stdio::null())
            .status()
            .map_err(|source| MergeError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        if !status.success() {
            return Err(MergeError::CommandFailed {
                command: command_line,
                code: status.code(),
            });
        }

        Ok(())
    }

    fn list_command(&self) -> String {
        self.command_line(&Self::list_args())
    }
}
