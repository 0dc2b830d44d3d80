//! Command-line arguments and the lookup runner.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use listpick::{select_from_list, select_object_from_list, Selectable};
use serde::Serialize;
use tracing::info;

use crate::student::{sample_maps, sample_names, sample_students};

#[derive(Parser, Debug)]
#[command(
    name = "listpick-demo",
    version,
    about = "Pick one element out of sample student collections"
)]
pub struct Cli {
    /// Collection to search
    #[arg(value_enum, default_value_t = Collection::All)]
    pub collection: Collection,

    /// Attribute or key to match on ("index" or "i" selects by position)
    #[arg(long, requires = "value")]
    pub by: Option<String>,

    /// Value to match
    #[arg(long, requires = "by", allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Split the value on this delimiter and match any piece exactly
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Print matches as compact JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Student records
    Records,
    /// Students converted to JSON objects
    Maps,
    /// Plain names
    Names,
    /// All of the above
    All,
}

impl Collection {
    fn sources(self) -> Vec<Source> {
        match self {
            Collection::Records => vec![Source::Records],
            Collection::Maps => vec![Source::Maps],
            Collection::Names => vec![Source::Names],
            Collection::All => vec![Source::Records, Source::Maps, Source::Names],
        }
    }
}

/// A single sample collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Records,
    Maps,
    Names,
}

impl Source {
    fn label(self) -> &'static str {
        match self {
            Source::Records => "records",
            Source::Maps => "maps",
            Source::Names => "names",
        }
    }
}

/// One lookup to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub by: String,
    pub value: String,
    pub delimiter: Option<String>,
}

impl Lookup {
    fn new(by: &str, value: &str) -> Self {
        Lookup {
            by: by.to_string(),
            value: value.to_string(),
            delimiter: None,
        }
    }

    fn select<'a, T: Selectable>(&self, items: &'a [T]) -> Option<&'a T> {
        match &self.delimiter {
            Some(delimiter) => select_object_from_list(items, delimiter, &self.by, &self.value),
            None => select_from_list(items, &self.by, &self.value),
        }
    }
}

impl Cli {
    /// The lookups to run against `source`: the one given on the command
    /// line, or the built-in demonstration set.
    pub fn lookups(&self, source: Source) -> Vec<Lookup> {
        if let (Some(by), Some(value)) = (&self.by, &self.value) {
            return vec![Lookup {
                by: by.clone(),
                value: value.clone(),
                delimiter: self.delimiter.clone(),
            }];
        }

        match source {
            Source::Names => vec![Lookup::new("", "John"), Lookup::new("index", "3")],
            _ => vec![
                Lookup::new("name", "John"),
                Lookup::new("age", "2"),
                Lookup::new("isGraduated", "true"),
                Lookup::new("index", "3"),
            ],
        }
    }
}

/// Runs every lookup and returns one output line per lookup.
pub fn run(cli: &Cli) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();

    for source in cli.collection.sources() {
        for lookup in cli.lookups(source) {
            let rendered = match source {
                Source::Records => {
                    render(lookup.select(&sample_students()), cli.json, |s| format!("{s:?}"))?
                }
                Source::Maps => render(lookup.select(&sample_maps()), cli.json, |m| m.to_string())?,
                Source::Names => render(lookup.select(&sample_names()), cli.json, |n| n.clone())?,
            };
            info!(source = source.label(), by = %lookup.by, value = %lookup.value, "lookup done");
            lines.push(format!(
                "{} {}={}: {}",
                source.label(),
                lookup.by,
                lookup.value,
                rendered
            ));
        }
    }

    Ok(lines)
}

fn render<T, F>(found: Option<&T>, json: bool, describe: F) -> anyhow::Result<String>
where
    T: Serialize,
    F: Fn(&T) -> String,
{
    match found {
        None => Ok("not found".to_string()),
        Some(item) if json => serde_json::to_string(item).context("failed to serialize match"),
        Some(item) => Ok(describe(item)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("listpick-demo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_all_collections() {
        let cli = parse(&[]);
        assert_eq!(cli.collection, Collection::All);
        assert_eq!(cli.collection.sources().len(), 3);
        assert_eq!(cli.lookups(Source::Records).len(), 4);
        assert_eq!(cli.lookups(Source::Names).len(), 2);
    }

    #[test]
    fn explicit_lookup_overrides_defaults() {
        let cli = parse(&["names", "--by", "i", "--value", "-1", "-d", ","]);
        assert_eq!(
            cli.lookups(Source::Names),
            vec![Lookup {
                by: "i".to_string(),
                value: "-1".to_string(),
                delimiter: Some(",".to_string()),
            }]
        );
    }

    #[test]
    fn by_requires_value() {
        let result = Cli::try_parse_from(["listpick-demo", "--by", "name"]);
        assert!(result.is_err());
    }
}
