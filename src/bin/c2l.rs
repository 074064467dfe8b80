//! csv2latex CLI - render CSV and Excel tables as LaTeX tabulars

#[cfg(feature = "cli")]
use anyhow::{bail, Context, Result};
#[cfg(feature = "cli")]
use clap::{ArgAction, Parser, ValueEnum};
#[cfg(feature = "cli")]
use csv2latex::{
    generate_with_options, load_with_options, ColumnType, LoadOptions, LoadSummary,
    PrecisionMap, Preset, RuleStyle, Selection, SheetSelector, Table, TableOptions,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use tracing::{debug, info, warn};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "c2l")]
#[command(version)]
#[command(about = "csv2latex - render CSV and Excel tables as LaTeX tabulars", long_about = None)]
struct Cli {
    /// Input file (.csv, .xlsx or .xls)
    input: PathBuf,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Columns to include, comma separated (default: all)
    #[arg(short, long, value_delimiter = ',')]
    columns: Vec<String>,

    /// Columns to leave out, comma separated
    #[arg(short = 'x', long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// Decimal places for a numeric column, as COL=N (repeatable)
    #[arg(short, long = "precision", value_name = "COL=N", value_parser = parse_precision)]
    precision: Vec<(String, u8)>,

    /// Decimal places for numeric columns without an explicit precision
    #[arg(long, value_name = "N")]
    default_precision: Option<u8>,

    /// Horizontal rule style
    #[arg(long, value_enum)]
    rules: Option<Rules>,

    /// Worksheet name for spreadsheet input (default: first sheet)
    #[arg(long)]
    sheet: Option<String>,

    /// Field delimiter for CSV input
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Read selection and precision settings from a TOML or JSON preset
    #[arg(long, value_name = "FILE")]
    preset: Option<PathBuf>,

    /// Print the load summary and the column list without converting
    #[arg(long)]
    list: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Rules {
    /// \toprule, \midrule and \bottomrule
    Booktabs,
    /// \hline around the header and the body
    Hline,
    /// No horizontal lines
    None,
}

#[cfg(feature = "cli")]
impl From<Rules> for RuleStyle {
    fn from(rules: Rules) -> Self {
        match rules {
            Rules::Booktabs => RuleStyle::Booktabs,
            Rules::Hline => RuleStyle::Hline,
            Rules::None => RuleStyle::None,
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

/// Route tracing events to stderr so stdout only carries LaTeX
#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> Result<()> {
    let load_options = load_options(&cli)?;
    debug!(
        delimiter = %cli.delimiter,
        sheet = ?load_options.sheet,
        "load options"
    );

    let table = load_with_options(&cli.input, &load_options)?;
    let summary = LoadSummary {
        rows: table.row_count(),
        columns: table.column_count(),
    };
    info!("{} from {}", summary, cli.input.display());

    if cli.list {
        print_columns(&table, &summary);
        return Ok(());
    }

    let (selection, precision, options) = resolve_choices(&cli, &table)?;
    debug!(
        columns = selection.len(),
        rules = %options.rules,
        default_precision = options.default_precision,
        "table options"
    );

    let latex = generate_with_options(&table, &selection, &precision, &options)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &latex)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("✓ Output written to: {}", path.display());
        }
        None => print!("{}", latex),
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn load_options(cli: &Cli) -> Result<LoadOptions> {
    if !cli.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", cli.delimiter);
    }

    let mut options = LoadOptions::with_delimiter(cli.delimiter as u8);
    if let Some(name) = &cli.sheet {
        options.sheet = SheetSelector::Name(name.clone());
    }
    Ok(options)
}

/// Start from the preset (or everything at default precision), then apply flags
#[cfg(feature = "cli")]
fn resolve_choices(cli: &Cli, table: &Table) -> Result<(Selection, PrecisionMap, TableOptions)> {
    let (mut selection, mut precision, mut options) = match &cli.preset {
        Some(path) => {
            let resolved = Preset::from_path(path)?.resolve(table)?;
            info!("applied preset {}", path.display());
            (resolved.selection, resolved.precision, resolved.options)
        }
        None => (
            Selection::all(table),
            PrecisionMap::defaults(table),
            TableOptions::default(),
        ),
    };

    if !cli.columns.is_empty() {
        selection = cli.columns.iter().map(String::as_str).collect();
    }
    for name in &cli.exclude {
        if !table.contains(name) {
            bail!("cannot exclude unknown column '{}'", name);
        }
        selection.remove(name);
    }

    for (name, places) in &cli.precision {
        precision.set(name.as_str(), *places);
    }
    for (name, _) in precision.iter() {
        if table.column_type(name) == Some(ColumnType::Text) {
            warn!("precision for text column '{}' is ignored", name);
        }
    }

    if let Some(places) = cli.default_precision {
        options.default_precision = places;
    }
    if let Some(rules) = cli.rules {
        options.rules = rules.into();
    }

    Ok((selection, precision, options))
}

#[cfg(feature = "cli")]
fn print_columns(table: &Table, summary: &LoadSummary) {
    println!("{}", summary);
    for column in table.columns() {
        println!("  {} ({})", column.name, column.column_type);
    }
}

/// Parse `COL=N`; the column name may itself contain `=`
#[cfg(feature = "cli")]
fn parse_precision(value: &str) -> std::result::Result<(String, u8), String> {
    let (name, places) = value
        .rsplit_once('=')
        .ok_or_else(|| format!("expected COL=N, got '{}'", value))?;
    if name.is_empty() {
        return Err(format!("missing column name in '{}'", value));
    }
    let places = places
        .trim()
        .parse::<u8>()
        .map_err(|_| format!("invalid precision '{}' for column '{}'", places, name))?;
    Ok((name.to_string(), places))
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install csv2latex --features cli");
    eprintln!("  c2l [OPTIONS] <INPUT>");
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use csv2latex::Column;
    use std::io::Write;

    fn table() -> Table {
        Table::from_columns(vec![
            Column::text("name", vec![Some("Alice")]),
            Column::numeric("score", vec![Some(9.5)]),
            Column::numeric("age", vec![Some(30.0)]),
        ])
        .unwrap()
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(["c2l", "data.csv"].iter().chain(args)).unwrap()
    }

    fn preset_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_parse_precision() {
        assert_eq!(parse_precision("score=1").unwrap(), ("score".to_string(), 1));
        assert_eq!(parse_precision("a=b=3").unwrap(), ("a=b".to_string(), 3));
        assert!(parse_precision("score").is_err());
        assert!(parse_precision("=2").is_err());
        assert!(parse_precision("score=x").is_err());
        assert!(parse_precision("score=300").is_err());
    }

    #[test]
    fn test_precision_flag_is_repeatable() {
        let cli = cli(&["-p", "score=1", "--precision", "age=0"]);
        assert_eq!(
            cli.precision,
            [("score".to_string(), 1), ("age".to_string(), 0)]
        );
        assert!(Cli::try_parse_from(["c2l", "data.csv", "-p", "score"]).is_err());
    }

    #[test]
    fn test_defaults_without_flags() {
        let table = table();
        let (selection, precision, options) = resolve_choices(&cli(&[]), &table).unwrap();
        assert_eq!(selection, Selection::all(&table));
        assert_eq!(precision, PrecisionMap::defaults(&table));
        assert_eq!(options, TableOptions::default());
    }

    #[test]
    fn test_flags_override_preset() {
        let preset = preset_file("columns = [\"name\"]\n\n[precision]\nscore = 1\nage = 4\n");
        let path = preset.path().to_str().unwrap();
        let cli = cli(&["--preset", path, "-c", "score,age", "-p", "score=3"]);

        let (selection, precision, _) = resolve_choices(&cli, &table()).unwrap();
        assert_eq!(selection.iter().collect::<Vec<_>>(), ["score", "age"]);
        assert_eq!(precision.get("score"), Some(3));
        assert_eq!(precision.get("age"), Some(4));
    }

    #[test]
    fn test_exclude_applies_after_preset_columns() {
        let preset = preset_file("columns = [\"name\", \"age\"]\n");
        let path = preset.path().to_str().unwrap();
        let cli = cli(&["--preset", path, "-x", "age"]);

        let (selection, _, _) = resolve_choices(&cli, &table()).unwrap();
        assert_eq!(selection.iter().collect::<Vec<_>>(), ["name"]);
    }

    #[test]
    fn test_exclude_unknown_column_fails() {
        let err = resolve_choices(&cli(&["-x", "ghost"]), &table()).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_table_option_flags() {
        let cli = cli(&["--rules", "none", "--default-precision", "0"]);
        let (_, _, options) = resolve_choices(&cli, &table()).unwrap();
        assert_eq!(options.rules, RuleStyle::None);
        assert_eq!(options.default_precision, 0);
    }

    #[test]
    fn test_text_column_precision_is_kept() {
        let (_, precision, _) = resolve_choices(&cli(&["-p", "name=2"]), &table()).unwrap();
        assert_eq!(precision.get("name"), Some(2));
    }

    #[test]
    fn test_non_ascii_delimiter_is_rejected() {
        assert!(load_options(&cli(&["--delimiter", "é"])).is_err());
        assert_eq!(load_options(&cli(&["--delimiter", ";"])).unwrap().delimiter, b';');
    }
}
