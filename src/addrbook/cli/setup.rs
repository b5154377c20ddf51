use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook", bin_name = "addrbook", version)]
#[command(about = "Interactive address book with birthday reminders", long_about = None)]
pub struct Cli {
    /// Snapshot file to load and save (overrides ADDRBOOK_FILE and the config)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json and the default snapshot (overrides ADDRBOOK_HOME)
    #[arg(long, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
