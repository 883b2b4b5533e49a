mod config;
mod writer;

use std::path::PathBuf;

use clap::Parser;
use iconforge_engine::icon::Design;
use iconforge_engine::logging::{init_logging, LoggingConfig};

use config::IconSetConfig;

#[derive(Parser, Debug)]
#[command(name = "iconforge", version, about = "Generate a set of square PNG icons")]
struct Cli {
    /// Directory the icons are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Icon design (document, red).
    #[arg(long, default_value_t = Design::Document)]
    design: Design,

    /// Icon size in pixels; repeat for several. Defaults to 16, 48 and 128.
    #[arg(long = "size", value_name = "PX")]
    sizes: Vec<u32>,

    /// File name prefix; files are named `<prefix><size>.png`.
    #[arg(long, default_value = "icon")]
    prefix: String,

    /// Log filter (env_logger syntax). Falls back to RUST_LOG, then "info".
    #[arg(long)]
    log: Option<String>,
}

impl Cli {
    fn into_config(self) -> IconSetConfig {
        let defaults = IconSetConfig::default();
        IconSetConfig {
            sizes: if self.sizes.is_empty() { defaults.sizes } else { self.sizes },
            design: self.design,
            out_dir: self.out_dir,
            file_prefix: self.prefix,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig { filter: cli.log.clone(), ..LoggingConfig::default() });

    let config = cli.into_config();
    log::debug!("config: {config:?}");

    let written = writer::write_icon_set(&config)?;
    log::info!("all {} icons created in {}", written.len(), config.out_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_flags() {
        let cfg = Cli::parse_from(["iconforge"]).into_config();
        assert_eq!(cfg, IconSetConfig::default());
    }

    #[test]
    fn flags_override_config() {
        let cfg = Cli::parse_from([
            "iconforge", "--design", "red", "--size", "32", "--size", "64", "--prefix", "app",
            "--out-dir", "build",
        ])
        .into_config();
        assert_eq!(cfg.design, Design::Red);
        assert_eq!(cfg.sizes, vec![32, 64]);
        assert_eq!(cfg.file_name(32), "app32.png");
        assert_eq!(cfg.out_dir, PathBuf::from("build"));
    }

    #[test]
    fn unknown_design_is_a_usage_error() {
        assert!(Cli::try_parse_from(["iconforge", "--design", "blue"]).is_err());
    }
}
