use crate::domain::model::{CardCommand, CardOutcome};
use crate::domain::ports::CardRunner;
use crate::utils::error::{ProfileError, Result};
use async_trait::async_trait;
use std::io::Write;
use std::process::Stdio;
use std::sync::{Arc, Mutex};
use tokio::process::Command;

/// Where captured card stdout goes when `echo_output` is set.
pub type OutputRelay = Arc<Mutex<dyn Write + Send>>;

/// Runs the external card build (e.g. `node generate.js`) without a shell.
#[derive(Clone)]
pub struct CardGenerator {
    command: CardCommand,
    relay: OutputRelay,
}

impl CardGenerator {
    pub fn new(command: CardCommand) -> Self {
        Self {
            command,
            relay: Arc::new(Mutex::new(std::io::stdout())),
        }
    }

    pub fn with_relay(mut self, relay: OutputRelay) -> Self {
        self.relay = relay;
        self
    }

    fn relay_stdout(&self, stdout: &str) -> Result<()> {
        let mut out = self
            .relay
            .lock()
            .map_err(|_| ProfileError::IoError(std::io::Error::other("card output relay poisoned")))?;
        out.write_all(stdout.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

#[async_trait]
impl CardRunner for CardGenerator {
    async fn generate(&self) -> Result<CardOutcome> {
        let mut cmd = Command::new(&self.command.program);
        cmd.args(&self.command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.command.working_dir {
            cmd.current_dir(dir);
        }

        tracing::info!("🎨 Generating card: {}", self.command.display());

        // No timeout: waits until the child exits and both pipes are drained.
        let output = cmd
            .output()
            .await
            .map_err(|source| ProfileError::CardLaunchFailed {
                program: self.command.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !stdout.is_empty() {
            tracing::debug!("card stdout:\n{}", stdout.trim_end());
            if self.command.echo_output {
                self.relay_stdout(&stdout)?;
            }
        }

        if !output.status.success() {
            tracing::error!("Card command exited with {}", output.status);
            return Err(ProfileError::CardGenerationFailed {
                program: self.command.program.clone(),
                status: output.status,
                stderr: stderr.trim().to_string(),
            });
        }

        tracing::debug!("Card command finished with {}", output.status);

        Ok(CardOutcome {
            status: output.status,
            stdout,
            stderr,
        })
    }
}
