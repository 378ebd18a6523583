//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "projtimer")]
#[command(about = "A two-window countdown timer: control and display over an event bus")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Countdown minutes (0-59)
    #[arg(short, long, default_value = "0", value_parser = clap::value_parser!(u32).range(0..=59))]
    pub minutes: u32,

    /// Countdown seconds (0-59)
    #[arg(short, long, default_value = "10", value_parser = clap::value_parser!(u32).range(0..=59))]
    pub seconds: u32,

    /// Activity label bound to the countdown
    #[arg(short, long, default_value = "Session")]
    pub activity: String,

    /// Start with the expired-state flash disabled
    #[arg(long)]
    pub no_flash: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Requested countdown duration in whole seconds
    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
