// static-demo: log three messages through logbridge-core linked at build time.

use std::io;

fn main() {
    logbridge::logging::init();

    if let Err(e) = logbridge::engine::static_client::run(&mut io::stdout().lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
