//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = bookscout_cli::run() {
        eprintln!("bookscout: {err}");
        std::process::exit(1);
    }
}
