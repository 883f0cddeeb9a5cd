use std::collections::BTreeMap;
use std::io::{self, Write};

use anyhow::Context;
use atelier_catalog::{Catalog, CatalogSummary};
use atelier_ingest::CsvSource;
use atelier_types::{Artist, Photograph};
use colored::Colorize;
use serde::Serialize;
use tracing::warn;

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::discover(cli.config.as_deref())?.with_overrides(cli.photos, cli.artists);
    let catalog = build_catalog(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&catalog, &cli.command, cli.format, &mut out)
}

/// Load every configured input file into a new catalog.
pub fn build_catalog(config: &CliConfig) -> anyhow::Result<Catalog> {
    let source = CsvSource::with_options(config.csv.clone());
    let mut catalog = Catalog::new();

    if let Some(path) = &config.photos {
        catalog
            .load_photos_with(&source, path)
            .with_context(|| format!("loading photographs from {}", path.display()))?;
    }
    if let Some(path) = &config.artists {
        catalog
            .load_artists_with(&source, path)
            .with_context(|| format!("loading artists from {}", path.display()))?;
    }
    if config.photos.is_none() && config.artists.is_none() {
        warn!("no input files given; the catalog is empty");
    }

    Ok(catalog)
}

pub fn execute(
    catalog: &Catalog,
    command: &Command,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Summary => cmd_summary(out, format, &catalog.summary()),
        Command::Photos => write_photos(out, format, &catalog.photos().iter().collect::<Vec<_>>()),
        Command::Artists => write_artists(out, format, &catalog.artists().iter().collect::<Vec<_>>()),
        Command::Artist(args) => cmd_artist(out, format, require_artist(catalog, &args.id)?),
        Command::Photo(args) => cmd_photo(out, format, catalog.find_photo_by_id(&args.id), &args.id),
        Command::ByArtist(args) => {
            let artist = require_artist(catalog, &args.id)?;
            write_photos(out, format, &catalog.find_photos_by_artist(artist))
        }
        Command::Country(args) => {
            write_artists(out, format, &catalog.find_artists_by_country(&args.country))
        }
        Command::From(args) => {
            write_photos(out, format, &catalog.photos_taken_by_artists_from(&args.country))
        }
        Command::Prolific => write_artists(out, format, &catalog.artists_with_multiple_photos()),
        Command::Between(args) => {
            write_photos(out, format, &catalog.photos_taken_between(args.from..=args.to))
        }
        Command::Ages(args) => {
            let artist = require_artist(catalog, &args.artist_id)?;
            if args.grouped {
                cmd_ages_grouped(out, format, artist, &catalog.artists_photographs_grouped_by_age(artist))
            } else {
                cmd_ages(out, format, artist, &catalog.artists_photographs_by_age(artist))
            }
        }
        Command::Orphans => write_photos(out, format, &catalog.orphan_photos()),
    }
}

fn require_artist<'a>(catalog: &'a Catalog, id: &str) -> anyhow::Result<&'a Artist> {
    catalog
        .find_artist_by_id(id)
        .with_context(|| format!("no artist with id {id:?}"))
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn cmd_summary(out: &mut impl Write, format: OutputFormat, summary: &CatalogSummary) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, summary);
    }
    let years = match (summary.earliest_year, summary.latest_year) {
        (Some(first), Some(last)) => format!("{first}-{last}"),
        _ => "unknown".to_string(),
    };
    writeln!(out, "Photographs: {}", summary.photos.to_string().bold())?;
    writeln!(out, "Artists:     {}", summary.artists.to_string().bold())?;
    writeln!(out, "Countries:   {}", summary.countries)?;
    writeln!(out, "Years:       {}", years.cyan())?;
    if summary.orphans > 0 {
        writeln!(out, "{} {} photographs reference unknown artists", "!".yellow().bold(), summary.orphans)?;
    }
    Ok(())
}

fn cmd_artist(out: &mut impl Write, format: OutputFormat, artist: &Artist) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, artist),
        OutputFormat::Text => write_artist_line(out, artist),
    }
}

fn cmd_photo(out: &mut impl Write, format: OutputFormat, photo: Option<&Photograph>, id: &str) -> anyhow::Result<()> {
    match (format, photo) {
        (OutputFormat::Json, found) => write_json(out, &found),
        (OutputFormat::Text, Some(photo)) => write_photo_line(out, photo),
        (OutputFormat::Text, None) => {
            writeln!(out, "No photograph with id {}.", id.yellow())?;
            Ok(())
        }
    }
}

fn write_photos(out: &mut impl Write, format: OutputFormat, photos: &[&Photograph]) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, photos);
    }
    if photos.is_empty() {
        writeln!(out, "{}", "No photographs.".dimmed())?;
    }
    for photo in photos {
        write_photo_line(out, photo)?;
    }
    Ok(())
}

fn write_artists(out: &mut impl Write, format: OutputFormat, artists: &[&Artist]) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, artists);
    }
    if artists.is_empty() {
        writeln!(out, "{}", "No artists.".dimmed())?;
    }
    for artist in artists {
        write_artist_line(out, artist)?;
    }
    Ok(())
}

fn write_photo_line(out: &mut impl Write, photo: &Photograph) -> anyhow::Result<()> {
    writeln!(
        out,
        "{:>4}  {}  {}  {}",
        photo.id().yellow(),
        photo.name().bold(),
        photo.year().cyan(),
        format!("artist {}", photo.artist_id()).dimmed(),
    )?;
    Ok(())
}

fn write_artist_line(out: &mut impl Write, artist: &Artist) -> anyhow::Result<()> {
    let life = format!("({}-{})", artist.born(), artist.died().unwrap_or(""));
    writeln!(
        out,
        "{:>4}  {}  {}  {}",
        artist.id().yellow(),
        artist.name().bold(),
        life.dimmed(),
        artist.country(),
    )?;
    Ok(())
}

fn cmd_ages(
    out: &mut impl Write,
    format: OutputFormat,
    artist: &Artist,
    ages: &BTreeMap<i64, String>,
) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, ages);
    }
    writeln!(out, "{} (born {})", artist.name().bold(), artist.born())?;
    for (age, name) in ages {
        writeln!(out, "  {:>3}  {}", age.to_string().cyan(), name)?;
    }
    Ok(())
}

fn cmd_ages_grouped(
    out: &mut impl Write,
    format: OutputFormat,
    artist: &Artist,
    ages: &BTreeMap<i64, Vec<String>>,
) -> anyhow::Result<()> {
    if format == OutputFormat::Json {
        return write_json(out, ages);
    }
    writeln!(out, "{} (born {})", artist.name().bold(), artist.born())?;
    for (age, names) in ages {
        for name in names {
            writeln!(out, "  {:>3}  {}", age.to_string().cyan(), name)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::Value;

    const PHOTOS_CSV: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/photographs.csv");
    const ARTISTS_CSV: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/artists.csv");

    fn fixture_catalog() -> Catalog {
        let config = CliConfig::default()
            .with_overrides(Some(PHOTOS_CSV.into()), Some(ARTISTS_CSV.into()));
        build_catalog(&config).unwrap()
    }

    fn run(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("atelier").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        execute(&fixture_catalog(), &cli.command, cli.format, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn run_json(args: &[&str]) -> Value {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        serde_json::from_str(&run(&full).unwrap()).unwrap()
    }

    fn ids(value: &Value) -> Vec<&str> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["id"].as_str().unwrap())
            .collect()
    }

    #[test]
    fn build_catalog_loads_both_files() {
        let catalog = fixture_catalog();
        assert_eq!(catalog.photo_count(), 4);
        assert_eq!(catalog.artist_count(), 6);
    }

    #[test]
    fn build_catalog_without_files_is_empty() {
        let catalog = build_catalog(&CliConfig::default()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn build_catalog_reports_missing_file() {
        let config = CliConfig::default().with_overrides(Some("/nonexistent/photos.csv".into()), None);
        let err = build_catalog(&config).unwrap_err();
        assert!(format!("{err:#}").contains("loading photographs from /nonexistent/photos.csv"));
    }

    #[test]
    fn summary_json() {
        let summary = run_json(&["summary"]);
        assert_eq!(summary["photos"], 4);
        assert_eq!(summary["artists"], 6);
        assert_eq!(summary["countries"], 3);
        assert_eq!(summary["earliest_year"], 1941);
        assert_eq!(summary["latest_year"], 1967);
    }

    #[test]
    fn photos_from_country_json() {
        assert_eq!(ids(&run_json(&["from", "United States"])), vec!["2", "3", "4"]);
        assert!(ids(&run_json(&["from", "Argentina"])).is_empty());
    }

    #[test]
    fn prolific_json() {
        assert_eq!(ids(&run_json(&["prolific"])), vec!["3"]);
    }

    #[test]
    fn country_json() {
        assert_eq!(ids(&run_json(&["country", "United States"])), vec!["2", "3", "4", "5"]);
    }

    #[test]
    fn between_json() {
        assert_eq!(ids(&run_json(&["between", "1950", "1965"])), vec!["1", "4"]);
    }

    #[test]
    fn ages_json() {
        let ages = run_json(&["ages", "3"]);
        assert_eq!(ages["44"], "Identical Twins, Roselle, New Jersey");
        assert_eq!(ages["39"], "Child with Toy Hand Grenade in Central Park");
    }

    #[test]
    fn ages_grouped_json() {
        let ages = run_json(&["ages", "3", "--grouped"]);
        assert_eq!(ages["44"][0], "Identical Twins, Roselle, New Jersey");
    }

    #[test]
    fn ages_for_unknown_artist_fails() {
        let err = run(&["ages", "99"]).unwrap_err();
        assert!(err.to_string().contains("no artist with id \"99\""));
    }

    #[test]
    fn unknown_artist_fails_in_both_formats() {
        let err = run(&["artist", "99"]).unwrap_err();
        assert!(err.to_string().contains("no artist with id \"99\""));

        let err = run(&["--format", "json", "artist", "99"]).unwrap_err();
        assert!(err.to_string().contains("no artist with id \"99\""));
    }

    #[test]
    fn artist_json_is_a_single_record() {
        let artist = run_json(&["artist", "3"]);
        assert_eq!(artist["name"], "Diane Arbus");
        assert_eq!(artist["died"], "1971");
    }

    #[test]
    fn missing_photo_is_null_in_json() {
        assert_eq!(run_json(&["photo", "99"]), Value::Null);
    }

    #[test]
    fn text_output_names_records() {
        let text = run(&["by-artist", "3"]).unwrap();
        assert!(text.contains("Identical Twins, Roselle, New Jersey"));
        assert!(text.contains("Child with Toy Hand Grenade in Central Park"));

        let text = run(&["artist", "6"]).unwrap();
        assert!(text.contains("Yousuf Karsh"));
        assert!(text.contains("Canada"));
    }

    #[test]
    fn text_output_for_empty_result() {
        let text = run(&["orphans"]).unwrap();
        assert!(text.contains("No photographs."));
    }
}
