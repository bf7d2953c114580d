use std::io;

fn main() {
    cardroom_cli::logging::init_logging();
    let code = cardroom_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
