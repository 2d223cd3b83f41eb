use clap::Parser;
use oxygen_sim::cli::Args;
use oxygen_sim::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match oxygen_sim::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if let Error::Render(_) = e {
                eprintln!("--animate needs a graphical display and a GPU; use --print instead");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
