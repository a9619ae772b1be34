pub mod cli;
pub mod toml_config;

pub use toml_config::ConvertConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "idf-convert")]
#[command(about = "Convert building descriptions into an EnergyPlus IDF file")]
pub struct CliConfig {
    #[arg(long, help = "Project input JSON file")]
    pub input: String,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Output directory (overrides idf.output_dir)")]
    pub output_dir: Option<String>,

    #[arg(long, help = "Output file name (overrides idf.output_file)")]
    pub output_file: Option<String>,

    #[arg(long, help = "EnergyPlus version written to the Version object")]
    pub idf_version: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 讀取設定檔（若有），再以命令列參數覆蓋
    pub fn resolve(&self) -> crate::Result<ConvertConfig> {
        let mut config = match &self.config {
            Some(path) => ConvertConfig::from_file(path)?,
            None => ConvertConfig::default(),
        };

        if let Some(dir) = &self.output_dir {
            config.idf.output_dir = dir.clone();
        }
        if let Some(file) = &self.output_file {
            config.idf.output_file = file.clone();
        }
        if let Some(version) = &self.idf_version {
            config.idf.version = version.clone();
        }
        config.logging.verbose |= self.verbose;
        config.logging.json |= self.json_logs;

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::parse_from([
            "idf-convert",
            "--input",
            "project.json",
            "--output-dir",
            "./out",
            "--idf-version",
            "23.2",
            "--verbose",
        ]);

        let config = cli.resolve().unwrap();
        assert_eq!(config.idf.output_dir, "./out");
        assert_eq!(config.idf.version, "23.2");
        assert_eq!(config.idf.output_file, "model.idf");
        assert!(config.logging.verbose);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_input_is_required() {
        assert!(CliConfig::try_parse_from(["idf-convert"]).is_err());
    }
}
