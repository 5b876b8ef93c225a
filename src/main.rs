//! strsafe - bounds-safe string operations from the shell

use std::process::ExitCode;

fn main() -> ExitCode {
    match strsafe::cli::run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(strsafe::errors::get_exit_code(&e))
        }
    }
}
