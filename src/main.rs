use clap::Parser;
use union_transfer::config::Config;
use union_transfer::dispatch::{self, Task};
use union_transfer::secrets::Secrets;
use union_transfer::utils::logging;
use union_transfer::{log_error, log_info, log_warn};

const MODULE: &str = "main";

#[derive(Parser)]
#[command(name = "union-transfer")]
#[command(about = "Cross-chain asset transfer runner for the Union testnets")]
struct Args {
    /// Task to run, one of the known task names
    #[arg(long, default_value = dispatch::DEFAULT_TASK)]
    task: String,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if args.debug {
        logging::enable_debug();
    }

    log_info!(MODULE, "Union cross-chain transfer runner starting");

    // Without credentials nothing can proceed; this is the one fatal path
    let secrets = match Secrets::from_env() {
        Ok(secrets) => secrets,
        Err(error) => {
            log_error!(MODULE, "Cannot load secrets", error = error);
            std::process::exit(1);
        }
    };

    let config = Config::testnet();
    for problem in config.validate() {
        log_warn!(MODULE, "Configuration problem", detail = problem);
    }

    match Task::parse(&args.task) {
        Some(task) => {
            log_info!(MODULE, "Running task", task = task.name());
            let outcome = dispatch::run(task, &config, &secrets).await;
            log_info!(MODULE, "Task finished", outcome = outcome.summary());
        }
        None => dispatch::warn_unknown_task(&args.task),
    }

    log_info!(MODULE, "Run complete");
}
