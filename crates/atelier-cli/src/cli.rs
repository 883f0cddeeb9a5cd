use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "atelier",
    about = "Atelier: query a catalog of photographs and the artists who took them",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Photographs file (id, name, artist_id, year)
    #[arg(long, global = true)]
    pub photos: Option<PathBuf>,

    /// Artists file (id, name, born, died, country)
    #[arg(long, global = true)]
    pub artists: Option<PathBuf>,

    /// Configuration file (defaults to ./atelier.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show record counts and year bounds
    Summary,
    /// List every photograph
    Photos,
    /// List every artist
    Artists,
    /// Show one artist
    Artist(IdArgs),
    /// Show one photograph
    Photo(IdArgs),
    /// List the photographs of an artist
    ByArtist(IdArgs),
    /// List the artists from a country
    Country(CountryArgs),
    /// List photographs taken by artists from a country
    From(CountryArgs),
    /// List artists with more than one photograph
    Prolific,
    /// List photographs taken within a range of years (inclusive)
    Between(BetweenArgs),
    /// Show an artist's age at the time of each photograph
    Ages(AgesArgs),
    /// List photographs whose artist is not in the catalog
    Orphans,
}

#[derive(Args)]
pub struct IdArgs {
    pub id: String,
}

#[derive(Args)]
pub struct CountryArgs {
    pub country: String,
}

#[derive(Args)]
pub struct BetweenArgs {
    #[arg(allow_negative_numbers = true)]
    pub from: i64,
    #[arg(allow_negative_numbers = true)]
    pub to: i64,
}

#[derive(Args)]
pub struct AgesArgs {
    pub artist_id: String,
    /// Keep every photograph per age instead of only the last one
    #[arg(long)]
    pub grouped: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_summary() {
        let cli = Cli::try_parse_from(["atelier", "summary"]).unwrap();
        assert!(matches!(cli.command, Command::Summary));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn parse_global_paths_after_subcommand() {
        let cli = Cli::try_parse_from([
            "atelier",
            "photos",
            "--photos",
            "data/photographs.csv",
            "--artists",
            "data/artists.csv",
        ])
        .unwrap();
        assert_eq!(cli.photos, Some(PathBuf::from("data/photographs.csv")));
        assert_eq!(cli.artists, Some(PathBuf::from("data/artists.csv")));
    }

    #[test]
    fn parse_by_artist() {
        let cli = Cli::try_parse_from(["atelier", "by-artist", "3"]).unwrap();
        if let Command::ByArtist(args) = cli.command {
            assert_eq!(args.id, "3");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_country_with_spaces() {
        let cli = Cli::try_parse_from(["atelier", "from", "United States"]).unwrap();
        if let Command::From(args) = cli.command {
            assert_eq!(args.country, "United States");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_between() {
        let cli = Cli::try_parse_from(["atelier", "between", "1950", "1965"]).unwrap();
        if let Command::Between(args) = cli.command {
            assert_eq!((args.from, args.to), (1950, 1965));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_between_rejects_non_numeric() {
        assert!(Cli::try_parse_from(["atelier", "between", "1950", "later"]).is_err());
    }

    #[test]
    fn parse_ages_grouped() {
        let cli = Cli::try_parse_from(["atelier", "ages", "3", "--grouped"]).unwrap();
        if let Command::Ages(args) = cli.command {
            assert_eq!(args.artist_id, "3");
            assert!(args.grouped);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_json_format_and_verbose() {
        let cli = Cli::try_parse_from(["atelier", "-v", "--format", "json", "prolific"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn parse_unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["atelier", "delete", "1"]).is_err());
    }
}
