use std::process::ExitCode;

fn main() -> ExitCode {
    ExitCode::from(fontsync::app::run())
}
