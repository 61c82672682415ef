//! Parsing command-line arguments.

use clap::{command, error::ErrorKind, value_parser, Arg, ArgAction, Command, Error};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::{ffi::OsStr, fs, path::Path};
use toruslife_lib::{parse_grid, Config, Grid, Life, World};

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err(String::from("must be a positive integer")),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(String::from("density must be between 0 and 1"))
    }
}

fn parse_rule(s: &str) -> Result<Life, String> {
    s.parse::<Life>().map_err(|e| e.to_string())
}

/// Reads a configuration file, choosing the format by its extension.
fn read_config(path: &Path) -> Result<Config, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    match path.extension().and_then(OsStr::to_str) {
        Some("toml") => toml::from_str(&text).map_err(|e| e.to_string()),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
        Some("json") => serde_json::from_str(&text).map_err(|e| e.to_string()),
        _ => Err(format!(
            "{}: unknown config format, expected .toml, .yaml or .json",
            path.display()
        )),
    }
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) world: World,
    pub(crate) generations: u64,
    pub(crate) each: bool,
}

impl Args {
    fn command() -> Command {
        command!()
            .long_about(
                "Conway's Game of Life on a torus\n\
                 \n\
                 The edges of the grid wrap around. After the given number of \
                 generations, prints the grid, the number of living cells, \
                 the cumulative number of living cells over all generations, \
                 and the number of communities (groups of living cells \
                 connected through their eight neighbors).\n\
                 \n\
                 * Dead cells are represented by `.`;\n\
                 * Living cells are represented by `o`.\n\
                 \n\
                 Without FILE, --config or --random, starts from a small 5x5 \
                 pattern which dies out after four generations.\n",
            )
            .arg(
                Arg::new("FILE")
                    .help("Initial grid: rows, columns, then rows*columns true/false tokens")
                    .index(1)
                    .value_parser(value_parser!(std::path::PathBuf)),
            )
            .arg(
                Arg::new("GENERATIONS")
                    .help("Number of generations to advance")
                    .short('n')
                    .long("generations")
                    .default_value("0")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("EACH")
                    .help("Prints every generation, not only the last one")
                    .short('e')
                    .long("each")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Reads the world configuration from a TOML, YAML or JSON file")
                    .short('c')
                    .long("config")
                    .value_parser(value_parser!(std::path::PathBuf))
                    .conflicts_with_all(["FILE", "RANDOM", "RULE"]),
            )
            .arg(
                Arg::new("RANDOM")
                    .help("Starts from a random grid with this density of living cells")
                    .long("random")
                    .value_parser(parse_density)
                    .conflicts_with("FILE"),
            )
            .arg(
                Arg::new("ROWS")
                    .help("Number of rows of the random grid [default: 16]")
                    .long("rows")
                    .value_parser(parse_positive)
                    .requires("RANDOM"),
            )
            .arg(
                Arg::new("COLS")
                    .help("Number of columns of the random grid [default: 16]")
                    .long("cols")
                    .value_parser(parse_positive)
                    .requires("RANDOM"),
            )
            .arg(
                Arg::new("SEED")
                    .help("Seed of the random grid")
                    .long("seed")
                    .value_parser(value_parser!(u64))
                    .requires("RANDOM"),
            )
            .arg(
                Arg::new("RULE")
                    .help("Rule of the cellular automaton [default: B3/S23]")
                    .long_help(
                        "Rule of the cellular automaton [default: B3/S23]\n\
                         Supports totalistic Life-like rules, e.g. B36/S23.\n",
                    )
                    .short('r')
                    .long("rule")
                    .value_parser(parse_rule),
            )
    }

    /// Parses the command-line arguments and builds the initial world.
    pub(crate) fn parse() -> Result<Self, Error> {
        let mut command = Args::command();
        let matches = command.try_get_matches_from_mut(std::env::args_os())?;

        let generations = *matches.get_one::<u64>("GENERATIONS").unwrap();
        let each = matches.get_flag("EACH");
        let rule = matches.get_one::<Life>("RULE").copied().unwrap_or_default();

        let world = if let Some(path) = matches.get_one::<std::path::PathBuf>("CONFIG") {
            let config = read_config(path).map_err(|e| command.error(ErrorKind::Io, e))?;
            info!("read configuration from {}", path.display());
            config
                .world()
                .map_err(|e| command.error(ErrorKind::InvalidValue, e))?
        } else if let Some(path) = matches.get_one::<std::path::PathBuf>("FILE") {
            let text = fs::read_to_string(path)
                .map_err(|e| command.error(ErrorKind::Io, format!("{}: {}", path.display(), e)))?;
            let grid = parse_grid(&text).map_err(|e| {
                command.error(ErrorKind::InvalidValue, format!("{}: {}", path.display(), e))
            })?;
            info!("loaded grid from {}", path.display());
            World::from_loaded(grid, rule)
        } else if let Some(&density) = matches.get_one::<f64>("RANDOM") {
            let rows = matches.get_one::<usize>("ROWS").copied().unwrap_or(16);
            let cols = matches.get_one::<usize>("COLS").copied().unwrap_or(16);
            let mut rng = match matches.get_one::<u64>("SEED") {
                Some(&seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let grid = Grid::random(rows, cols, density, &mut rng)
                .map_err(|e| command.error(ErrorKind::InvalidValue, e))?;
            World::with_rule(grid, rule)
        } else {
            World::with_rule(World::default().grid().clone(), rule)
        };

        Ok(Args {
            world,
            generations,
            each,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn validators() {
        assert_eq!(parse_positive("3"), Ok(3));
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("-1").is_err());
        assert_eq!(parse_density("0.25"), Ok(0.25));
        assert!(parse_density("1.5").is_err());
        assert!(parse_rule("B3/S23").is_ok());
        assert!(parse_rule("nonsense").is_err());
    }

    /// A path in the temporary directory, unique to this process.
    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("toruslife-{}-{}", std::process::id(), name))
    }

    #[test]
    fn config_formats() {
        let toml_path = temp_path("config.toml");
        fs::write(
            &toml_path,
            "rows = 3\ncols = 3\nalive_cells = [[1, 1]]\n",
        )
        .unwrap();
        let config = read_config(&toml_path).unwrap();
        assert_eq!(config, Config::new(3, 3).set_alive_cells([(1, 1)]));

        let json_path = temp_path("config.json");
        fs::write(&json_path, r#"{"rows": 4, "cols": 2, "rule_string": "B36/S23"}"#).unwrap();
        let config = read_config(&json_path).unwrap();
        assert_eq!(config.rows, 4);
        assert_eq!(config.rule_string, "B36/S23");
        assert_eq!(config.alive_cells, Config::default().alive_cells);

        let yaml_path = temp_path("config.yaml");
        fs::write(&yaml_path, "rows: 2\ncols: 2\nalive_cells: []\n").unwrap();
        assert_eq!(read_config(&yaml_path).unwrap(), Config::new(2, 2));

        assert!(read_config(&temp_path("config.txt")).is_err());

        for path in [toml_path, json_path, yaml_path] {
            fs::remove_file(path).unwrap();
        }
    }
}
