use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tsabi_core::{AbiError, Dialect, MemberDescriptor};
use tsabi_emit::{render_common_types, render_typings, EmitterConfig, COMMON_TYPES_FILE};
use tsabi_transform::{compile, CompileOptions, Program};

#[derive(Parser)]
#[command(name = "tsabi")]
#[command(about = "tsabi - TypeScript typings from Solidity contract ABIs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write `<name>.types.ts` and `common.types.ts` for an ABI document.
    Generate {
        input: PathBuf,

        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        #[arg(short, long, default_value = "web3", value_parser = parse_dialect)]
        dialect: Dialect,

        /// File stem of the typings file; defaults to the input's stem.
        #[arg(short, long)]
        name: Option<String>,

        /// Prepended to the top-level type names.
        #[arg(long)]
        prefix: Option<String>,

        /// Module specifier to import the client library from.
        #[arg(long)]
        import_alias: Option<String>,

        #[arg(long)]
        make_output_dir: bool,

        #[arg(long)]
        prevent_overwrite: bool,

        #[arg(long)]
        no_docs: bool,

        #[arg(long)]
        type_only_imports: bool,

        #[arg(short, long)]
        verbose: bool,
    },

    /// Decode and compile an ABI document without writing anything.
    Validate {
        input: PathBuf,

        #[arg(short, long, default_value = "web3", value_parser = parse_dialect)]
        dialect: Dialect,

        #[arg(short, long)]
        verbose: bool,
    },

    /// List every member with its call classification and signature.
    Inspect {
        input: PathBuf,

        #[arg(short, long, default_value = "web3", value_parser = parse_dialect)]
        dialect: Dialect,

        #[arg(short, long)]
        verbose: bool,
    },
}

fn parse_dialect(value: &str) -> Result<Dialect, AbiError> {
    value.parse()
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output_dir,
            dialect,
            name,
            prefix,
            import_alias,
            make_output_dir,
            prevent_overwrite,
            no_docs,
            type_only_imports,
            verbose,
        } => {
            init_logging(verbose);
            let mut options = CompileOptions::new(dialect);
            if let Some(prefix) = prefix {
                options = options.with_prefix(prefix);
            }
            if let Some(alias) = import_alias {
                options = options.with_import_alias(alias);
            }
            let config = EmitterConfig {
                include_docs: !no_docs,
                type_only_imports,
                ..EmitterConfig::default()
            };
            let target = OutputTarget {
                dir: output_dir,
                name,
                make_output_dir,
                prevent_overwrite,
            };
            cmd_generate(input, options, config, target, verbose)
        }
        Commands::Validate {
            input,
            dialect,
            verbose,
        } => {
            init_logging(verbose);
            cmd_validate(input, dialect, verbose)
        }
        Commands::Inspect {
            input,
            dialect,
            verbose,
        } => {
            init_logging(verbose);
            cmd_inspect(input, dialect, verbose)
        }
    }
}

struct OutputTarget {
    dir: Option<PathBuf>,
    name: Option<String>,
    make_output_dir: bool,
    prevent_overwrite: bool,
}

impl OutputTarget {
    fn resolve_dir(&self, input: &Path) -> Result<PathBuf> {
        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => input
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        let dir = if dir.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            dir
        };

        if !dir.is_dir() {
            if !self.make_output_dir {
                bail!(
                    "output directory {} does not exist (pass --make-output-dir to create it)",
                    dir.display()
                );
            }
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        Ok(dir)
    }

    fn file_stem(&self, input: &Path) -> Result<String> {
        match &self.name {
            Some(name) => Ok(name.clone()),
            None => input
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
                .with_context(|| format!("cannot derive a file name from {}", input.display())),
        }
    }
}

fn load(input: &Path) -> Result<Vec<MemberDescriptor>> {
    let content =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
    Ok(tsabi_parser::parse_document(&content)?)
}

fn cmd_generate(
    input: PathBuf,
    options: CompileOptions,
    config: EmitterConfig,
    target: OutputTarget,
    verbose: bool,
) -> Result<()> {
    use colored::*;
    use std::time::Instant;

    if verbose {
        println!("{}", " tsabi generator".bright_blue().bold());
        println!("{}", "=".repeat(50).bright_blue());
        println!(" Input: {}", input.display());
        println!(" Dialect: {}", options.dialect);
        println!();
    }

    let start = Instant::now();
    let members = load(&input)?;
    let program = compile(&members, &options)?;

    let dir = target.resolve_dir(&input)?;
    let typings_path = dir.join(format!("{}.types.ts", target.file_stem(&input)?));
    if target.prevent_overwrite && typings_path.exists() {
        println!(
            " {} {} already exists, skipping (--prevent-overwrite)",
            "WARNING:".bright_yellow().bold(),
            typings_path.display()
        );
        return Ok(());
    }

    debug!(path = %typings_path.display(), dialect = %program.dialect, "writing typings");
    let typings = render_typings(&program, &config)?;
    fs::write(&typings_path, typings)
        .with_context(|| format!("failed to write {}", typings_path.display()))?;

    let common = render_common_types(program.dialect, program.import_alias.as_deref(), &config)?;
    let common_path = dir.join(COMMON_TYPES_FILE);
    fs::write(&common_path, common)
        .with_context(|| format!("failed to write {}", common_path.display()))?;

    println!(
        " {} {}",
        "SUCCESS:".bright_green().bold(),
        typings_path.display()
    );
    if verbose {
        println!("   Companion: {}", common_path.display());
        println!("   Declarations: {}", program.declarations.len());
        println!("   Time: {:.3}s", start.elapsed().as_secs_f64());
    }
    Ok(())
}

fn cmd_validate(input: PathBuf, dialect: Dialect, verbose: bool) -> Result<()> {
    use colored::*;

    if verbose {
        println!("{}", " Validating ABI".bright_cyan().bold());
        println!("{}", "=".repeat(50).bright_cyan());
        println!(" Input: {}", input.display());
        println!();
    }

    let outcome = load(&input).and_then(|members| {
        let program = compile(&members, &CompileOptions::new(dialect))?;
        Ok((members.len(), program))
    });

    match outcome {
        Ok((entries, program)) => {
            println!("{}", " VALID".bright_green().bold());
            if verbose {
                println!("   Entries: {}", entries);
                println!("   Members: {}", program.members.len());
                println!("   Events: {}", program.events.len());
                println!("   Declarations: {}", program.declarations.len());
            }
            Ok(())
        }
        Err(e) => {
            println!("{}", " INVALID".bright_red().bold());
            println!("\n{}", "Error:".bright_red());
            println!("{}", e);
            Err(anyhow::anyhow!("Validation failed"))
        }
    }
}

fn cmd_inspect(input: PathBuf, dialect: Dialect, verbose: bool) -> Result<()> {
    use colored::*;

    let members = load(&input)?;
    let program: Program = compile(&members, &CompileOptions::new(dialect))?;

    println!(
        " {} member(s), {} event(s), {} declaration(s)\n",
        program.members.len(),
        program.events.len(),
        program.declarations.len()
    );

    for member in &program.members {
        println!(
            "{}",
            format!(" {} [{}]", member.name, member.class)
                .bright_green()
                .bold()
        );
        println!("     {}", member);
        if verbose {
            for line in member.docs.lines() {
                println!("     {}", line.as_str().dimmed());
            }
        }
    }

    for event in &program.events {
        println!("{}", format!(" {} [event]", event.name).bright_yellow().bold());
        println!("     {}", event);
    }

    if verbose && !program.declarations.is_empty() {
        println!("\n  Declarations:");
        for record in &program.declarations {
            println!("    {} ({} fields)", record.name, record.fields.len());
        }
    }

    Ok(())
}
