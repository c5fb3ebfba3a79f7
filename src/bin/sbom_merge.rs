// sbom-merge: merge dynamically captured libraries into a static CycloneDX SBOM.

use std::path::PathBuf;

use clap::Parser;

use logbridge::engine::sbom;

#[derive(Parser)]
#[command(name = "sbom-merge", version, about = "Merge dynamically captured libraries into a static SBOM")]
struct Cli {
    /// Static CycloneDX SBOM (JSON)
    static_sbom: PathBuf,
    /// JSON array of libraries captured at runtime
    dynamic_libs: PathBuf,
    /// Where to write the merged SBOM
    output: PathBuf,
}

fn main() {
    logbridge::logging::init();
    let cli = Cli::parse();

    match sbom::merge_files(&cli.static_sbom, &cli.dynamic_libs, &cli.output) {
        Ok(summary) => {
            println!(
                "Successfully merged {} static and {} dynamic components",
                summary.static_components, summary.dynamic_libraries
            );
            println!("Final SBOM has {} components", summary.final_components);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
