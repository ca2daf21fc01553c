//! Command line definition.

use clap::Parser;

/// Compute IPv4 subnet parameters from a network address and prefix length.
#[derive(Parser, Debug)]
#[command(name = "subnet-calc")]
#[command(about = "Compute IPv4 subnet parameters from a network address and CIDR prefix length.")]
pub struct CommandLine {
    /// Dotted-decimal network address, e.g. 192.168.0.0
    #[arg(long, value_name = "ADDRESS", default_value = "192.168.0.0")]
    pub network_address: String,

    /// CIDR prefix length, supported range 8-31
    #[arg(long, value_name = "PREFIX", default_value_t = 24)]
    pub cidr: u8,

    /// Skip legacy network class detection
    #[arg(long)]
    pub no_class: bool,

    /// Emit the result as JSON instead of the terminal report
    #[arg(long)]
    pub json: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
