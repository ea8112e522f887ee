use std::process::ExitCode;

fn main() -> ExitCode {
    proposta_cli::run()
}
