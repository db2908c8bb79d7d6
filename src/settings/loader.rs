use std::env;

use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::{EnvMap, build_config};
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	load_with_env(cli, env::vars().collect())
}

/// Same as [`load`] with an explicit environment, so tests never depend on
/// the process environment.
pub(crate) fn load_with_env(cli: &CliArgs, env: EnvMap) -> Result<ResolvedConfig> {
	let builder = build_config(cli, env.clone())?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	let sources = raw.sources(cli, &env);
	Ok(raw.resolve(&sources)?)
}
