// dynamic-demo: load logbridge-core from runtime-libs/ and log through it.
//
// Exits 0 when the archives are missing (guidance is printed), 1 when they
// are present but cannot be loaded or resolved.

use std::io;
use std::path::Path;

use logbridge::atoms::constants::RUNTIME_LIBS_DIR;
use logbridge::engine::dynamic_client;

fn main() {
    logbridge::logging::init();

    let libs = Path::new(RUNTIME_LIBS_DIR);
    match dynamic_client::run(libs, &mut io::stdout().lock()) {
        Ok(outcome) => log::debug!("[dynamic-demo] {:?}", outcome),
        Err(e) => {
            log::error!("[dynamic-demo] {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
