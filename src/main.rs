use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use magento_matrix::cli::{Cli, init_logging};
use magento_matrix::output::error_command;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_format);

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            println!("{}", error_command(&format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}
