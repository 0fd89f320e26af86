use std::process::ExitCode;

use objectid::ui::output;

fn main() -> ExitCode {
    match objectid::cli::run() {
        Ok(code) => code,
        Err(err) => {
            output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
