// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ForensicsError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub layout: LayoutConfig,
    pub hashing: HashingConfig,
    pub extraction: ExtractionConfig,
    pub baseline: BaselineConfig,
    pub report: ReportConfig,
}

/// Subdirectories of a run root, all relative to `--root`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub images_dir: PathBuf,
    pub boot_copy_dir: PathBuf,
    pub strings_dir: PathBuf,
    pub binwalk_dir: PathBuf,
    pub analysis_dir: PathBuf,
    pub reports_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HashingConfig {
    pub block_size: usize,
    pub expected_boot_files: Vec<String>,
    /// `prefix*.ext` patterns matched against boot partition file names.
    pub boot_globs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    pub min_domain_length: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BaselineConfig {
    /// Directories scanned for `*.json` baseline documents, merged in this order.
    pub dirs: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    pub top_n: usize,
}

impl LayoutConfig {
    pub fn images(&self, root: &Path) -> PathBuf {
        root.join(&self.images_dir)
    }

    pub fn boot_copy(&self, root: &Path) -> PathBuf {
        root.join(&self.boot_copy_dir)
    }

    pub fn strings(&self, root: &Path) -> PathBuf {
        root.join(&self.strings_dir)
    }

    pub fn binwalk(&self, root: &Path) -> PathBuf {
        root.join(&self.binwalk_dir)
    }

    pub fn analysis(&self, root: &Path) -> PathBuf {
        root.join(&self.analysis_dir)
    }

    pub fn summary_path(&self, root: &Path) -> PathBuf {
        self.analysis(root).join("summary.json")
    }

    pub fn reports(&self, root: &Path) -> PathBuf {
        root.join(&self.reports_dir)
    }
}

impl Config {
    /// Layers built-in defaults, the optional TOML file, then `PI_FORENSICS__*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| ForensicsError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PI_FORENSICS")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ForensicsError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ForensicsError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            layout: LayoutConfig {
                images_dir: PathBuf::from("images"),
                boot_copy_dir: PathBuf::from("boot_partition_copy"),
                strings_dir: PathBuf::from("analysis/strings"),
                binwalk_dir: PathBuf::from("analysis/binwalk"),
                analysis_dir: PathBuf::from("analysis"),
                reports_dir: PathBuf::from("reports"),
            },
            hashing: HashingConfig {
                block_size: 65536,
                expected_boot_files: vec![
                    "start.elf".to_string(),
                    "bootcode.bin".to_string(),
                    "fixup.dat".to_string(),
                    "fixup_cd.dat".to_string(),
                    "config.txt".to_string(),
                ],
                boot_globs: vec!["start*.elf".to_string(), "boot*.bin".to_string()],
            },
            extraction: ExtractionConfig {
                min_domain_length: 4,
            },
            baseline: BaselineConfig {
                dirs: vec![PathBuf::from("data/known_hashes")],
            },
            report: ReportConfig { top_n: 50 },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.hashing.block_size == 0 {
            return Err(ForensicsError::Config(
                "block_size must be greater than 0".to_string(),
            ));
        }

        if self.report.top_n == 0 {
            return Err(ForensicsError::Config(
                "top_n must be greater than 0".to_string(),
            ));
        }

        if self.extraction.min_domain_length == 0 {
            return Err(ForensicsError::Config(
                "min_domain_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
