//! Resolution of configured city files against the data directory.

use std::path::PathBuf;

use tracing::warn;

use carlot_model::SourceConfig;

use crate::error::{IngestError, Result};

/// A configured city whose source file exists on disk.
#[derive(Debug, Clone)]
pub struct CityFile {
    /// City label from the configuration.
    pub label: String,
    /// Path of the export file.
    pub path: PathBuf,
}

/// Outcome of matching the configuration against the data directory.
#[derive(Debug, Clone, Default)]
pub struct DiscoveredSources {
    /// Cities with a present source file, in configured order.
    pub present: Vec<CityFile>,
    /// Labels of configured cities whose file is absent.
    pub missing: Vec<String>,
}

/// Check each configured city file, warning about absent ones.
///
/// An absent file is not an error: that city simply contributes no data.
pub fn discover_city_files(config: &SourceConfig) -> Result<DiscoveredSources> {
    if !config.data_dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: config.data_dir.clone(),
        });
    }
    let mut discovered = DiscoveredSources::default();
    for city in &config.cities {
        let path = config.city_path(city);
        if path.is_file() {
            discovered.present.push(CityFile {
                label: city.label.clone(),
                path,
            });
        } else {
            warn!(city = %city.label, path = %path.display(), "source file not found");
            discovered.missing.push(city.label.clone());
        }
    }
    Ok(discovered)
}
