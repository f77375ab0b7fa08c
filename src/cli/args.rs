use std::time::Duration;

use clap::Parser;

/// Look up resource attributes in a Terraform state file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path or URL of the state file to read
    #[arg(short = 's', long, env = "TSQ_STATE")]
    pub state: Option<String>,

    /// Give up fetching the state after this many seconds; 0 waits forever
    #[arg(long, env = "TSQ_TIMEOUT", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Address to resolve, e.g. aws_instance.web.id; lists every known
    /// address when omitted
    #[arg(value_name = "ADDRESS")]
    pub address: Option<String>,
}

impl Cli {
    /// Fetch deadline derived from `--timeout`; `0` means no deadline.
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.timeout
            .filter(|&seconds| seconds > 0)
            .map(Duration::from_secs)
    }
}
