use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use theme_migrate::audit::{legacy_palette, scan_residuals};
use theme_migrate::config::{
	CONFIG_FILE_NAME, Config, LoadedConfig, generate_init_template, load_config,
};
use theme_migrate::discover::{DiscoveryOptions, discover_files};
use theme_migrate::migrate::{MigrateOptions, read_document, run_passes};
use theme_migrate::rules::{BUILTIN_RULE_SETS, RuleSet, builtin_rule_set, validate_pass_sequence};

#[derive(Parser)]
#[command(name = "theme-migrate")]
#[command(
	author,
	version,
	about = "Migrate color tokens from the warm earth theme to dark luxury"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Create a template .theme-migrate.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .theme-migrate.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Config file to use instead of ./.theme-migrate.toml
	#[arg(long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	/// More log output on stderr (-v info, -vv debug); RUST_LOG overrides
	#[arg(short, long, global = true, action = ArgAction::Count)]
	verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Rewrite files with each configured pass, in order
	Run(RunArgs),
	/// Report legacy palette colors still present in the files
	Audit(SourceArgs),
	/// Inspect the builtin rule sets
	Rules {
		#[command(subcommand)]
		action: RulesAction,
	},
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Args)]
struct SourceArgs {
	/// Directory searched recursively for candidate files
	#[arg(long, value_name = "DIR")]
	root: Option<PathBuf>,

	/// File extension to include (repeatable, replaces the configured list)
	#[arg(long = "ext", value_name = "EXT")]
	extensions: Vec<String>,

	/// Path suffix or glob to exclude (repeatable, added to the configured list)
	#[arg(long, value_name = "PATH")]
	skip: Vec<String>,
}

#[derive(Args)]
struct RunArgs {
	#[command(flatten)]
	source: SourceArgs,

	/// Rule set to run (repeatable, replaces the configured passes)
	#[arg(long = "pass", value_name = "NAME")]
	passes: Vec<String>,

	/// Report what would change without writing
	#[arg(long)]
	dry_run: bool,

	/// Like --dry-run, but exit with failure if any file would change
	#[arg(long)]
	check: bool,
}

#[derive(Subcommand)]
enum RulesAction {
	/// List builtin rule sets
	List,
	/// Print the rules of one set in application order
	Show { name: String },
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the effective configuration and where it came from
	Show,
	/// Check the config file for errors without running anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	let config_path = cli.config.as_deref();

	match cli.command {
		Some(Commands::Run(args)) => handle_run(&args, config_path),
		Some(Commands::Audit(args)) => handle_audit(&args, config_path),
		Some(Commands::Rules { action }) => match action {
			RulesAction::List => handle_rules_list(),
			RulesAction::Show { name } => handle_rules_show(&name),
		},
		Some(Commands::Config { action }) => match action {
			ConfigAction::Show => handle_config_show(config_path),
			ConfigAction::Validate => handle_config_validate(config_path),
		},
		// No command specified - this shouldn't happen due to arg_required_else_help
		None => Ok(ExitCode::SUCCESS),
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {CONFIG_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

/// Load the config file and layer command-line overrides on top.
fn effective_config(
	source: &SourceArgs,
	passes: &[String],
	config_path: Option<&Path>,
) -> Result<Config> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let mut config = load_config(&cwd, config_path)
		.context("Failed to load configuration")?
		.config;

	if let Some(ref root) = source.root {
		config.root = root.clone();
	}
	if !source.extensions.is_empty() {
		config.extensions = source.extensions.clone();
	}
	config.skip.extend(source.skip.iter().cloned());
	if !passes.is_empty() {
		config.passes = passes.to_vec();
	}

	config.validate().context("Invalid command-line options")?;
	Ok(config)
}

fn discover(config: &Config) -> Result<Vec<PathBuf>> {
	discover_files(&DiscoveryOptions {
		root: &config.root,
		extensions: &config.extensions,
		skip: &config.skip,
	})
	.with_context(|| format!("Failed to discover files under {}", config.root.display()))
}

fn handle_run(args: &RunArgs, config_path: Option<&Path>) -> Result<ExitCode> {
	let config = effective_config(&args.source, &args.passes, config_path)?;

	let rule_sets = config
		.passes
		.iter()
		.map(|name| builtin_rule_set(name.as_str()))
		.collect::<theme_migrate::Result<Vec<RuleSet>>>()
		.context("Failed to build rule sets")?;
	validate_pass_sequence(&rule_sets.iter().collect::<Vec<_>>())
		.context("Passes are not safe to run in sequence")?;

	let files = discover(&config)?;
	let options = MigrateOptions {
		dry_run: args.dry_run || args.check,
	};
	let verb = if options.dry_run {
		"would be updated"
	} else {
		"updated"
	};

	let report = run_passes(&files, &rule_sets, options);

	for pass in &report.passes {
		for path in &pass.changed {
			println!("  ✓ {}", path.display());
		}
		println!(
			"{}: {}/{} files {}.",
			pass.pass,
			pass.changed_count(),
			pass.total,
			verb
		);
	}

	if report.has_failures() {
		for (path, e) in &report.failed {
			eprintln!("  ✗ {}: {}", path.display(), error_chain(e));
		}
		eprintln!("{} file(s) could not be migrated", report.failed.len());
		return Ok(ExitCode::FAILURE);
	}
	if args.check && report.changed_count() > 0 {
		return Ok(ExitCode::FAILURE);
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_audit(args: &SourceArgs, config_path: Option<&Path>) -> Result<ExitCode> {
	let config = effective_config(args, &[], config_path)?;
	let rule_sets = BUILTIN_RULE_SETS
		.iter()
		.map(|builtin| builtin.build())
		.collect::<theme_migrate::Result<Vec<_>>>()
		.context("Failed to build rule sets")?;
	let palette = legacy_palette(&rule_sets);

	let files = discover(&config)?;
	let mut residual_count = 0;
	let mut affected_files = 0;
	let mut failed = false;

	for path in &files {
		let document = match read_document(path) {
			Ok(document) => document,
			Err(e) => {
				eprintln!("  ✗ {}: {}", path.display(), error_chain(&e));
				failed = true;
				continue;
			}
		};

		let residuals = scan_residuals(&document, &palette);
		if residuals.is_empty() {
			continue;
		}

		affected_files += 1;
		residual_count += residuals.len();
		for residual in residuals {
			println!(
				"{}:{}:{} {}",
				path.display(),
				residual.line,
				residual.column,
				residual.token
			);
		}
	}

	println!(
		"{} legacy color(s) in {}/{} files.",
		residual_count,
		affected_files,
		files.len()
	);

	if failed || residual_count > 0 {
		Ok(ExitCode::FAILURE)
	} else {
		Ok(ExitCode::SUCCESS)
	}
}

fn handle_rules_list() -> Result<ExitCode> {
	for builtin in BUILTIN_RULE_SETS {
		let rule_set = builtin
			.build()
			.with_context(|| format!("Builtin rule set {} is invalid", builtin.name))?;
		println!(
			"{:<12} v{}  {:>3} rules  {}",
			rule_set.name(),
			rule_set.version(),
			rule_set.len(),
			builtin.description
		);
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_rules_show(name: &str) -> Result<ExitCode> {
	let rule_set = builtin_rule_set(name).with_context(|| format!("Cannot show {name}"))?;

	println!(
		"# {} v{} ({} rules, longest pattern first)",
		rule_set.name(),
		rule_set.version(),
		rule_set.len()
	);
	for rule in rule_set.rules() {
		println!("{:?} -> {:?}", rule.pattern, rule.replacement);
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(config_path: Option<&Path>) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let LoadedConfig { config, path } =
		load_config(&cwd, config_path).context("Failed to load configuration")?;

	match path {
		Some(path) => println!("# Source: {}", path.display()),
		None => println!("# Source: defaults (no {CONFIG_FILE_NAME} found)"),
	}
	println!("root: {}", config.root.display());
	println!("extensions: {}", config.extensions.join(", "));
	println!("skip: {}", config.skip.join(", "));
	println!("passes: {}", config.passes.join(", "));

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(config_path: Option<&Path>) -> Result<ExitCode> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;

	match load_config(&cwd, config_path) {
		Ok(LoadedConfig { path: None, .. }) => {
			println!("No configuration file found, defaults apply.");
			Ok(ExitCode::SUCCESS)
		}
		Ok(LoadedConfig {
			config,
			path: Some(path),
		}) => {
			println!(
				"Configuration file is valid: {} ({} passes)",
				path.display(),
				config.passes.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", error_chain(&e));
			Ok(ExitCode::FAILURE)
		}
	}
}

/// Render an error and its sources on one line.
fn error_chain(e: &dyn std::error::Error) -> String {
	let mut message = e.to_string();
	let mut source = e.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}
