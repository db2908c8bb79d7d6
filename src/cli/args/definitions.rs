use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `stacksearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "stacksearch",
	version,
	long_version = long_version(),
	about = "Semantic search over Stack Overflow questions from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "URL",
		help = "Search service endpoint (default: http://127.0.0.1:5000/getsearchresults)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		short = 'n',
		long = "num-results",
		value_name = "COUNT",
		help = "Number of results to request (default: 5)"
	)]
	pub(crate) num_results: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long = "clear-delay-ms",
		value_name = "MILLIS",
		help = "Delay before an emptied query clears the results (default: 700)"
	)]
	pub(crate) clear_delay_ms: Option<u64>,
	#[arg(
		long = "timeout-ms",
		value_name = "MILLIS",
		help = "HTTP request timeout (default: 10000)"
	)]
	pub(crate) timeout_ms: Option<u64>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the landing page title (default: StackSearch)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long,
		requires = "query",
		help = "Run a single search without the interactive UI (default: disabled)"
	)]
	pub(crate) once: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}
