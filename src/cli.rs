use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::swatch::SwatchName;

#[derive(Debug, Parser)]
#[command(
    name = "picpal",
    version,
    about = "Build a themed color template from an image's palette",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Image to extract when the interactive UI starts
    pub image: Option<PathBuf>,

    /// Config file (defaults to <config dir>/picpal/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage database, overriding the config file
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Keep preferences and template in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Debug level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract a palette and print the rendered template
    Extract {
        /// Image file, or "-" to read encoded bytes from stdin
        image: PathBuf,

        /// Emit records, assignments and result as JSON
        #[arg(long)]
        json: bool,

        /// Also copy the rendered result to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Inspect or change the saved template
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },
    /// Inspect or change which swatch feeds each theme role
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum TemplateAction {
    Show,
    Reset,
    /// Replace the template with the contents of FILE ("-" for stdin)
    Set { file: PathBuf },
}

#[derive(Debug, Subcommand)]
pub enum PrefsAction {
    Show,
    Reset,
    Set {
        #[arg(long)]
        light: Option<SwatchName>,
        #[arg(long)]
        dark: Option<SwatchName>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_image_starts_ui() {
        let cli = Cli::try_parse_from(["picpal", "cat.png"]).unwrap();
        assert_eq!(cli.image, Some(PathBuf::from("cat.png")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn extract_subcommand() {
        let cli = Cli::try_parse_from(["picpal", "extract", "cat.png", "--json", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Some(Command::Extract { json: true, copy: false, .. })
        ));
    }

    #[test]
    fn prefs_set_parses_names() {
        let cli =
            Cli::try_parse_from(["picpal", "prefs", "set", "--light", "vibrant"]).unwrap();
        match cli.command {
            Some(Command::Prefs {
                action: PrefsAction::Set { light, dark },
            }) => {
                assert_eq!(light, Some(SwatchName::Vibrant));
                assert_eq!(dark, None);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn prefs_set_rejects_unknown_name() {
        assert!(Cli::try_parse_from(["picpal", "prefs", "set", "--dark", "Neon"]).is_err());
    }
}
