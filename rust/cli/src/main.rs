use std::io::{self, Write};

fn main() {
    hanabi_cli::logging::init_logging();

    let args: Vec<String> = std::env::args().collect();
    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = hanabi_cli::run(args, &mut out, &mut err);
    let _ = out.flush();
    std::process::exit(code);
}
