mod config;

use std::process;

use config::AppConfig;
use extractor::{extract_all, kml, ExtractOptions};
use logger::{Color, Logger};

fn main() {
    let config = AppConfig::from_args(std::env::args());

    let logger = match Logger::new(&config.log_dir, "viewer") {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("could not set up logging: {}", e);
            process::exit(1);
        }
    };

    // Extraction runs eagerly over every row at startup. A description that
    // violates the marker invariant aborts here, not at first hover.
    let placemarks = match kml::read_placemarks(&config.kml_path) {
        Ok(placemarks) => placemarks,
        Err(e) => {
            let _ = logger.error(
                &format!("failed to load {}: {}", config.kml_path.display(), e),
                true,
            );
            process::exit(1);
        }
    };

    let options = ExtractOptions {
        address_style: config.address_style,
    };
    let shops = match extract_all(&placemarks, &options) {
        Ok(shops) => shops,
        Err(e) => {
            let _ = logger.error(&format!("failed to extract shop fields: {}", e), true);
            process::exit(1);
        }
    };

    let _ = logger.info(
        &format!(
            "loaded {} shops from {}",
            shops.len(),
            config.kml_path.display()
        ),
        Color::Green,
        true,
    );

    if let Err(e) = graphical_interface::run(shops, config.show_current_location, logger) {
        eprintln!("viewer exited with an error: {}", e);
        process::exit(1);
    }
}
