//! Font loading for the questionnaire renderer.
//!
//! The generator renders with the Roboto family and expects the four TTF
//! files under an `assets/fonts` directory (see the README there). Three
//! packaging stories are supported, probed in this order:
//!
//! 1. an explicit `INTAKE_FONTS_DIR` environment override;
//! 2. a deployed binary with `assets/fonts` copied next to the executable;
//! 3. a development checkout with `assets/fonts` in the crate directory.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::Error;
use genpdf::fonts::{self, FontData, FontFamily};
use log::warn;

/// Name of the bundled font family.
pub const FONT_FAMILY_NAME: &str = "Roboto";

/// Environment variable overriding the font directory search.
pub const FONTS_DIR_ENV: &str = "INTAKE_FONTS_DIR";

const BUNDLED_SUBDIR: &str = "assets/fonts";

const FONT_FILES: &[&str] = &[
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

/// One place the font directory may live, labelled with the packaging story
/// that put it there.
struct SearchLocation {
    origin: &'static str,
    is_override: bool,
    directory: PathBuf,
}

fn search_locations() -> Vec<SearchLocation> {
    let override_location = env::var_os(FONTS_DIR_ENV)
        .map(PathBuf::from)
        .filter(|directory| !directory.as_os_str().is_empty())
        .map(|directory| SearchLocation {
            origin: "environment override",
            is_override: true,
            directory,
        });

    let deployed = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .map(|bin_dir| SearchLocation {
            origin: "next to the executable",
            is_override: false,
            directory: bin_dir.join(BUNDLED_SUBDIR),
        });

    let checkout = SearchLocation {
        origin: "crate checkout",
        is_override: false,
        directory: Path::new(env!("CARGO_MANIFEST_DIR")).join(BUNDLED_SUBDIR),
    };

    override_location
        .into_iter()
        .chain(deployed)
        .chain(Some(checkout))
        .collect()
}

/// What a probe of one search location found.
enum LocationStatus {
    /// All four font files are present.
    Ready,
    /// The directory itself is absent.
    NoDirectory,
    /// The directory exists but lacks some of the required files.
    Incomplete(Vec<&'static str>),
}

impl LocationStatus {
    fn describe(&self) -> String {
        match self {
            LocationStatus::Ready => "usable".to_string(),
            LocationStatus::NoDirectory => "not a directory".to_string(),
            LocationStatus::Incomplete(absent) => format!("lacks {}", absent.join(", ")),
        }
    }
}

fn inspect(directory: &Path) -> LocationStatus {
    if !directory.is_dir() {
        return LocationStatus::NoDirectory;
    }
    let absent: Vec<&'static str> = FONT_FILES
        .iter()
        .copied()
        .filter(|name| !directory.join(name).is_file())
        .collect();
    if absent.is_empty() {
        LocationStatus::Ready
    } else {
        LocationStatus::Incomplete(absent)
    }
}

fn resolve_font_directory() -> Result<PathBuf, Error> {
    let mut rejected = Vec::new();

    for location in search_locations() {
        let status = inspect(&location.directory);
        if matches!(status, LocationStatus::Ready) {
            return Ok(location.directory);
        }
        if location.is_override {
            warn!(
                "{} points at {}, which is {}; trying the bundled locations instead.",
                FONTS_DIR_ENV,
                location.directory.display(),
                status.describe()
            );
        }
        rejected.push(format!(
            "{} ({}) is {}",
            location.directory.display(),
            location.origin,
            status.describe()
        ));
    }

    Err(Error::new(
        format!(
            "No usable font directory: {}. Install the Roboto files as described in \
             assets/fonts/README.md, or point {} at a directory containing them.",
            rejected.join("; "),
            FONTS_DIR_ENV
        ),
        io::Error::new(io::ErrorKind::NotFound, "font directory not found"),
    ))
}

/// Returns the bundled Roboto font family as a `genpdf` font definition.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = resolve_font_directory()?;

    fonts::from_files(&directory, FONT_FAMILY_NAME, None).map_err(|err| {
        Error::new(
            format!(
                "The {} files in {} could not be loaded: {}",
                FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::InvalidData, err.to_string()),
        )
    })
}

/// Indicates whether any search location holds a complete font directory.
/// Rendering tests use this to skip gracefully on checkouts without font
/// assets.
pub fn fonts_available() -> bool {
    search_locations()
        .iter()
        .any(|location| matches!(inspect(&location.directory), LocationStatus::Ready))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_status_names_the_missing_files() {
        let status = LocationStatus::Incomplete(vec!["Roboto-Bold.ttf", "Roboto-Italic.ttf"]);
        assert_eq!(status.describe(), "lacks Roboto-Bold.ttf, Roboto-Italic.ttf");
    }

    #[test]
    fn search_order_ends_with_the_checkout_directory() {
        let locations = search_locations();
        let last = locations.last().expect("at least one location");
        assert!(!last.is_override);
        assert!(last.directory.ends_with(BUNDLED_SUBDIR));
    }
}
