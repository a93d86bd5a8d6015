//! Fixture management - spawning and health checking the demo-bank server

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::error::{HarnessError, HarnessResult};

/// Handle to a running fixture process
pub struct FixtureHandle {
    child: Child,
    pub base_url: String,
    pub port: u16,
}

impl FixtureHandle {
    /// Spawn the demo-bank server and wait until it answers health checks.
    pub async fn spawn(config: FixtureConfig) -> HarnessResult<Self> {
        let port = config.port.unwrap_or_else(find_free_port);
        let base_url = format!("http://127.0.0.1:{}", port);

        info!("Spawning fixture on port {}", port);

        let mut cmd = Command::new(&config.command);
        cmd.args(&config.args)
            .env("PORT", port.to_string())
            .env("DEMOBANK_PORT", port.to_string())
            .env("DEMOBANK_HOST", "127.0.0.1");

        // Fresh seeded state per run when the fixture supports it.
        if config.reset_state {
            cmd.env("DEMOBANK_RESET_STATE", "1");
        }

        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

        let child = cmd.spawn().map_err(|e| {
            HarnessError::FixtureStartup(format!(
                "Failed to spawn {}: {}",
                config.command.display(),
                e
            ))
        })?;

        let handle = FixtureHandle {
            child,
            base_url: base_url.clone(),
            port,
        };

        handle
            .wait_for_healthy(&config.health_path, config.startup_timeout)
            .await?;

        info!("Fixture is healthy at {}", base_url);
        Ok(handle)
    }

    /// Wait for the fixture to respond to health checks
    async fn wait_for_healthy(
        &self,
        health_path: &str,
        timeout_duration: Duration,
    ) -> HarnessResult<()> {
        let health_url = format!("{}{}", self.base_url, health_path);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()?;

        let start = std::time::Instant::now();
        let mut attempts = 0;

        while start.elapsed() < timeout_duration {
            attempts += 1;

            match client.get(&health_url).send().await {
                Ok(resp) if resp.status().is_success() => {
                    return Ok(());
                }
                Ok(resp) => {
                    warn!("Health check returned {}", resp.status());
                }
                Err(e) => {
                    if attempts == 1 {
                        info!("Waiting for fixture to start...");
                    }
                    // Connection refused is expected while the server boots
                    if !e.is_connect() {
                        warn!("Health check error: {}", e);
                    }
                }
            }

            sleep(Duration::from_millis(100)).await;
        }

        Err(HarnessError::FixtureHealthCheck(attempts))
    }

    /// Get the base URL for this fixture
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Stop the fixture
    pub fn stop(&mut self) -> HarnessResult<()> {
        info!("Stopping fixture (pid: {})", self.child.id());

        // Try graceful shutdown first
        #[cfg(unix)]
        {
            use nix::sys::signal::{kill, Signal};
            use nix::unistd::Pid;

            let pid = Pid::from_raw(self.child.id() as i32);
            if kill(pid, Signal::SIGTERM).is_ok() {
                std::thread::sleep(Duration::from_millis(500));
            }
        }

        // Force kill if still running
        let _ = self.child.kill();
        let _ = self.child.wait();

        Ok(())
    }
}

impl Drop for FixtureHandle {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Configuration for spawning the fixture
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    /// Command that starts the demo-bank server
    pub command: PathBuf,

    /// Arguments for the command
    pub args: Vec<String>,

    /// Port to listen on (None = find free port)
    pub port: Option<u16>,

    /// Path polled for readiness
    pub health_path: String,

    /// Timeout for fixture startup
    pub startup_timeout: Duration,

    /// Ask the fixture to reset to seeded state on boot
    pub reset_state: bool,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        let command = std::env::var("DEMOBANK_FIXTURE_CMD")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("demobank-fixture"));
        Self {
            command,
            args: Vec::new(),
            port: None,
            health_path: "/".to_string(),
            startup_timeout: Duration::from_secs(30),
            reset_state: true,
        }
    }
}

/// Find a free port to use
fn find_free_port() -> u16 {
    use std::net::TcpListener;

    TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind to find free port")
        .local_addr()
        .expect("Failed to get local addr")
        .port()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_free_port() {
        let port1 = find_free_port();
        let port2 = find_free_port();

        // Ports should be in valid range
        assert!(port1 > 1024);
        assert!(port2 > 1024);
    }

    #[test]
    fn default_config_resets_state() {
        let config = FixtureConfig::default();
        assert!(config.reset_state);
        assert_eq!(config.health_path, "/");
    }
}
