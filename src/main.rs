use std::process::ExitCode;

fn main() -> ExitCode {
    ExitCode::from(bouncepull::run() as u8)
}
