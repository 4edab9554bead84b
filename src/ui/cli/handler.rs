// Mon Oct 19 2026 - Alex

use super::args::{AnalyzeArgs, Args, BatchArgs, Command, InputArgs, ReportArgs};
use crate::analysis::{AnalysisReport, PacketAnalyzer};
use crate::batch::{analyze_batch, BatchEntry};
use crate::cache::CachedAnalyzer;
use crate::config::AnalyzerConfig;
use crate::error::AnalysisError;
use crate::output::{hex_dump, render_summary, report_to_json, summary::float_line, to_json, OutputFormat, TextReport};
use crate::payload::PacketPayload;
use crate::utils::logging::{self, LoggingUtils};
use crate::utils::{format_duration, measure_time};
use anyhow::{anyhow, Context};
use colored::Colorize;
use std::fs;
use std::io::{self, Read, Write};
use std::sync::Arc;

pub struct CommandHandler {
    config: AnalyzerConfig,
}

impl CommandHandler {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn run(args: Args) -> anyhow::Result<()> {
        if args.no_color {
            colored::control::set_override(false);
        }

        let config = match &args.config {
            Some(path) => AnalyzerConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => AnalyzerConfig::default(),
        };

        if args.verbose > 0 {
            LoggingUtils::init_logger(LoggingUtils::level_from_verbosity(args.verbose), !args.no_color);
        } else if args.log_level.is_none() && std::env::var_os("RUST_LOG").is_some() {
            logging::init_from_env();
        } else {
            let level = args.log_level.clone().unwrap_or_else(|| config.log_level.clone());
            logging::init_logger(&level, !args.no_color);
        }

        Self::new(config).execute(args.command)
    }

    pub fn execute(&self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Analyze(a) => self.handle_analyze(a),
            Command::Report(a) => self.handle_report(a),
            Command::Hexdump(a) => self.handle_hexdump(a),
            Command::Floats(a) => self.handle_floats(a),
            Command::Batch(a) => self.handle_batch(a),
        }
    }

    fn analyze(&self, input: &InputArgs) -> anyhow::Result<Arc<AnalysisReport>> {
        let hex = read_input(input)?;
        let analyzer = CachedAnalyzer::new(&self.config);
        analyzer.get_or_analyze(&hex).map_err(no_data)
    }

    fn decode(&self, input: &InputArgs) -> anyhow::Result<PacketPayload> {
        let hex = read_input(input)?;
        PacketAnalyzer::new(&self.config).decode(&hex).map_err(no_data)
    }

    fn handle_analyze(&self, args: AnalyzeArgs) -> anyhow::Result<()> {
        let report = self.analyze(&args.input)?;

        match args.format {
            OutputFormat::Summary => print!("{}", render_summary(&report)),
            OutputFormat::Text => print!("{}", TextReport::new(&report).generate()),
            OutputFormat::Json => println!("{}", report_to_json(&report, args.pretty)?),
        }

        Ok(())
    }

    fn handle_report(&self, args: ReportArgs) -> anyhow::Result<()> {
        let report = self.analyze(&args.input)?;
        let text = TextReport::new(&report);

        match &args.output {
            Some(path) => {
                text.generate_to_file(path)
                    .with_context(|| format!("Failed to write report to {}", path.display()))?;
                eprintln!("{} Report saved to: {}", "[+]".green(), path.display());
            }
            None => text.write_to(&mut io::stdout().lock())?,
        }

        Ok(())
    }

    fn handle_hexdump(&self, args: InputArgs) -> anyhow::Result<()> {
        let payload = self.decode(&args)?;
        print!("{}", hex_dump(payload.as_bytes(), self.config.hexdump_width));
        Ok(())
    }

    fn handle_floats(&self, args: InputArgs) -> anyhow::Result<()> {
        let payload = self.decode(&args)?;
        let analyzer = CachedAnalyzer::new(&self.config);
        let view = analyzer.analyzer().float32_view(&payload);

        if view.is_empty() {
            println!("{}", "No finite float32 values".dimmed());
        }
        for candidate in &view {
            let marker = if candidate.is_reportable() { "*".green() } else { " ".normal() };
            println!("{} {}", marker, float_line(candidate));
        }

        Ok(())
    }

    fn handle_batch(&self, args: BatchArgs) -> anyhow::Result<()> {
        let input = fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to read {}", args.input.display()))?;

        let analyzer = CachedAnalyzer::new(&self.config);
        let (entries, elapsed) =
            measure_time(|| analyze_batch(&analyzer, &input, self.config.batch_threads, !args.no_progress));
        let entries = entries?;
        log::info!("Batch of {} payloads took {}", entries.len(), format_duration(elapsed));

        match &args.output {
            Some(path) => {
                let mut file = fs::File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                write_json_lines(&mut file, &entries)?;
                eprintln!("{} Results saved to: {}", "[+]".green(), path.display());
            }
            None => write_json_lines(&mut io::stdout().lock(), &entries)?,
        }

        Ok(())
    }
}

fn write_json_lines<W: Write>(writer: &mut W, entries: &[BatchEntry]) -> anyhow::Result<()> {
    for entry in entries {
        writeln!(writer, "{}", to_json(entry, false)?)?;
    }
    writer.flush()?;
    Ok(())
}

fn read_input(input: &InputArgs) -> anyhow::Result<String> {
    let raw = match (&input.hex, &input.file) {
        (Some(hex), _) => hex.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };
    Ok(raw.trim().to_string())
}

fn no_data(err: AnalysisError) -> anyhow::Error {
    if err.is_no_data() {
        anyhow!("no data available for analysis: {}", err)
    } else {
        anyhow::Error::new(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_trims() {
        let input = InputArgs { hex: Some("  414243\n".to_string()), file: None };
        assert_eq!(read_input(&input).unwrap(), "414243");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.hex");
        fs::write(&path, "00F15365\n").unwrap();
        let input = InputArgs { hex: None, file: Some(path) };
        assert_eq!(read_input(&input).unwrap(), "00F15365");
    }

    #[test]
    fn test_malformed_input_message() {
        let handler = CommandHandler::new(AnalyzerConfig::default());
        let input = InputArgs { hex: Some("0g".to_string()), file: None };
        let err = handler.analyze(&input).unwrap_err();
        assert!(err.to_string().starts_with("no data available for analysis: "));
    }

    #[test]
    fn test_hexdump_respects_payload_limit() {
        let handler = CommandHandler::new(AnalyzerConfig::new().with_max_payload_bytes(2));
        let input = InputArgs { hex: Some("00112233445566778899".to_string()), file: None };
        let err = handler.execute(Command::Hexdump(input.clone())).unwrap_err();
        assert!(err.to_string().starts_with("no data available for analysis: "));
        assert!(handler.execute(Command::Floats(input)).is_err());
        assert_eq!(
            handler.decode(&InputArgs { hex: Some("0011".to_string()), file: None }).unwrap().len(),
            2
        );
    }

    #[test]
    fn test_batch_writes_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.jsonl");
        fs::write(&input, "414243\n# skip\nzz\n").unwrap();

        let handler = CommandHandler::new(AnalyzerConfig::new().with_batch_threads(1));
        handler
            .execute(Command::Batch(BatchArgs {
                input,
                output: Some(output.clone()),
                no_progress: true,
            }))
            .unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let lines: Vec<serde_json::Value> = written
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["report"]["strings"][0]["content"], "ABC");
        assert_eq!(lines[1]["line"], 3);
        assert!(lines[1]["error"].is_string());
    }
}
