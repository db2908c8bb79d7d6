mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{
	CliArgs, OutputFormat, parse_cli, print_json, print_payload_json, print_payload_plain,
	print_plain,
};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in stacksearch::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_search(&cli, resolved)
}

/// Execute the search workflow and print output in the chosen format.
fn run_search(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;

	if cli.once {
		let (query, payload) = workflow.run_once()?;
		match cli.output {
			OutputFormat::Plain => print_payload_plain(&payload),
			OutputFormat::Json => print_payload_json(&query, &payload)?,
		}
		return Ok(());
	}

	let outcome = workflow.run()?;
	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
