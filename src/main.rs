use std::process::ExitCode;

fn main() -> ExitCode {
    match reg_metrics::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("regmetrics error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
