use std::path::PathBuf;

use extractor::AddressStyle;

const DEFAULT_KML_PATH: &str = "data/machiaruki.kml";
const DEFAULT_LOG_DIR: &str = "log";

/// Runtime configuration for the viewer.
///
/// The two historical tooltip variants are unified here: the
/// current-location marker and the address layout are configuration instead
/// of parallel code paths.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub kml_path: PathBuf,
    pub show_current_location: bool,
    pub address_style: AddressStyle,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            kml_path: PathBuf::from(DEFAULT_KML_PATH),
            show_current_location: true,
            address_style: AddressStyle::SpaceJoined,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from command-line arguments: an optional KML
    /// path plus the `--no-current-location` and `--multiline-address`
    /// switches.
    pub fn from_args<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut config = AppConfig::default();
        let _program = args.next();

        for arg in args {
            match arg.as_str() {
                "--no-current-location" => config.show_current_location = false,
                "--multiline-address" => config.address_style = AddressStyle::MultiLine,
                path => config.kml_path = PathBuf::from(path),
            }
        }

        config
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(rest: &[&str]) -> impl Iterator<Item = String> {
        std::iter::once(String::from("machiaruki-map"))
            .chain(rest.iter().map(|s| s.to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn defaults_without_arguments() {
        let config = AppConfig::from_args(args(&[]));
        assert_eq!(config.kml_path, PathBuf::from("data/machiaruki.kml"));
        assert!(config.show_current_location);
        assert_eq!(config.address_style, AddressStyle::SpaceJoined);
    }

    #[test]
    fn flags_and_path_override_defaults() {
        let config = AppConfig::from_args(args(&[
            "--no-current-location",
            "--multiline-address",
            "other.kml",
        ]));
        assert_eq!(config.kml_path, PathBuf::from("other.kml"));
        assert!(!config.show_current_location);
        assert_eq!(config.address_style, AddressStyle::MultiLine);
    }
}
