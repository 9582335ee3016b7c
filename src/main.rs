use std::process::ExitCode;

fn main() -> ExitCode {
    cassette_http::app::run()
}
