// Mon Oct 19 2026 - Alex

use crate::output::OutputFormat;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "packet-analyzer")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Heuristic analyzer for raw telemetry packet payloads", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Overrides the log level from the config file.
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Repeat for more detail (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze one payload.
    Analyze(AnalyzeArgs),
    /// Print the plain-text string analysis report.
    Report(ReportArgs),
    /// Hex dump with ASCII gutter.
    Hexdump(InputArgs),
    /// Every finite float32 at 4-byte stride, unfiltered.
    Floats(InputArgs),
    /// Analyze one payload per line.
    Batch(BatchArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct InputArgs {
    /// Hex payload. Read from --file or stdin when omitted.
    #[arg(conflicts_with = "file")]
    pub hex: Option<String>,

    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long, value_enum, default_value = "summary")]
    pub format: OutputFormat,

    #[arg(long)]
    pub pretty: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct BatchArgs {
    /// File with one hex payload per line; `#` starts a comment line.
    #[arg(short, long)]
    pub input: PathBuf,

    /// JSON lines destination. Defaults to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub no_progress: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let args = Args::try_parse_from(["packet-analyzer", "analyze", "414243", "--format", "json"]).unwrap();
        match args.command {
            Command::Analyze(a) => {
                assert_eq!(a.input.hex.as_deref(), Some("414243"));
                assert_eq!(a.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_hex_conflicts_with_file() {
        assert!(Args::try_parse_from(["packet-analyzer", "hexdump", "00", "--file", "x.hex"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from(["packet-analyzer", "batch", "-i", "in.txt", "--no-color", "-l", "debug"]).unwrap();
        assert!(args.no_color);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.verbose, 0);

        let args = Args::try_parse_from(["packet-analyzer", "-vv", "floats", "00"]).unwrap();
        assert_eq!(args.verbose, 2);
    }
}
