use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use log::{debug, info};
use stamped_log::{setup_logging, Level, LoggingConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Writes its arguments as timestamped log lines", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = false, help = "Log everything, including D! lines")]
    debug: bool,

    #[arg(short, long, default_value_t = false, help = "Only log E! lines. Overrides --debug")]
    quiet: bool,

    #[arg(short, long, help = "Append logs to this file instead of stderr")]
    logfile: Option<PathBuf>,

    #[arg(help = "Lines to log. Prefix with D!, I!, W! or E! to set the severity")]
    lines: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = LoggingConfig {
        debug: args.debug,
        quiet: args.quiet,
        logfile: args.logfile,
    };

    if let Err(err) = setup_logging(&config) {
        eprintln!("E! {err}");
        return ExitCode::FAILURE;
    }

    debug!("Logging {} and above to {:?}", config.threshold(Level::Info), config.logfile);

    for line in args.lines.iter() {
        info!("{line}");
    }

    log::logger().flush();

    ExitCode::SUCCESS
}
