//! # horserace - Race Workflow Launcher
//!
//! horserace starts a horse race workflow execution on
//! [Amazon Simple Workflow Service](https://aws.amazon.com/swf/). A race is a
//! roster of horse names and a number of laps; the workflow itself runs on
//! workers registered in the target domain.
//!
//! ## Core Modules
//!
//! - [`race`] - Race parameters, defaults and command-line argument resolution
//! - [`launcher`] - Validates a race and dispatches exactly one start request
//! - [`starter`] - The [`WorkflowStarter`] seam the launcher dispatches through
//! - [`providers`] - SWF and in-memory starters
//! - [`input`] - Workflow input encodings
//! - [`config`] - Layered configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use horserace::config::HorseRaceConfig;
//! use horserace::providers::starter::SwfStarter;
//! use horserace::race::resolve_args;
//! use horserace::RaceLauncher;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let params = resolve_args(&["Alpha", "Beta", "3"])?;
//!
//! let config = HorseRaceConfig::load(None)?;
//! let starter = Arc::new(SwfStarter::from_env(config.swf_settings()).await);
//!
//! let handle = RaceLauncher::new(starter).dispatch(&params).await?;
//! println!("Started {} / {}", handle.workflow_id, handle.run_id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Command-Line Interface
//!
//! ```bash
//! # Default roster, 10 laps
//! horserace
//!
//! # Default roster, 5 laps
//! horserace 5
//!
//! # Two horses, 3 laps
//! horserace Alpha Beta 3
//! ```
//!
//! ## Configuration
//!
//! horserace can be configured via:
//! - Configuration file (`horserace.yaml`)
//! - Environment variables (prefix: `HORSERACE__`)
//! - Command-line arguments
//!
//! See [`config::HorseRaceConfig`] for available options. AWS credentials and
//! region are resolved by the standard AWS configuration chain.

pub mod config;
pub mod input;
pub mod launcher;
pub mod output;
pub mod providers;
pub mod race;
pub mod starter;

// Re-export commonly used types for convenience
pub use launcher::RaceLauncher;
pub use race::LaunchParameters;
pub use starter::{WorkflowHandle, WorkflowStarter};
