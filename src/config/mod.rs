pub mod price_table;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cinema-flow")]
#[command(about = "Interactive cinema ticket pricing and text demos")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose logging on stderr")]
    pub verbose: bool,
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let config = CliConfig::parse_from(["cinema-flow"]);
        assert!(!config.verbose);

        let config = CliConfig::parse_from(["cinema-flow", "-v"]);
        assert!(config.verbose);

        assert!(CliConfig::try_parse_from(["cinema-flow", "--prices", "x.toml"]).is_err());
    }
}
