use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use relkit::config::{self, Config};
use relkit::domain::GitRef;
use relkit::git::{Git2RefSource, RefSource};
use relkit::output::OutputTarget;
use relkit::recipes;
use relkit::release;
use relkit::report::{self, ReportOutcome};
use relkit::semver_check;
use relkit::ui;

#[derive(Parser)]
#[command(
    name = "relkit",
    about = "Release pipeline maintenance toolkit",
    version
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path", global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive release version and channel from a source-control reference
    Version {
        #[arg(
            long = "ref",
            help = "Reference string (defaults to GITHUB_REF, then the local checkout)"
        )]
        git_ref: Option<String>,

        #[arg(
            long,
            help = "Append KEY=value output to this file instead of GITHUB_ENV/stdout"
        )]
        output_env: Option<String>,
    },

    /// Validate that a string is a semantic version
    Validate {
        #[arg(help = "Version string to check")]
        version: String,

        #[arg(long, help = "Accept the configured tag prefix before the version")]
        allow_prefix: bool,
    },

    /// Rewrite test-report file paths to be repository-relative
    RewriteReport {
        #[arg(required = true, help = "Report files to rewrite in place")]
        reports: Vec<PathBuf>,

        #[arg(long, help = "Path prefix to strip (defaults to [report].strip_prefix)")]
        prefix: Option<String>,

        #[arg(long, help = "Write the rewritten report here (single report only)")]
        output: Option<PathBuf>,
    },

    /// Bundle recipe directories and replace the cluster ConfigMap
    PublishRecipes {
        #[arg(help = "Directory whose subdirectories become bundles")]
        dir: PathBuf,

        #[arg(long, help = "Target namespace (defaults to [recipes].namespace)")]
        namespace: Option<String>,

        #[arg(long, help = "Target ConfigMap name (defaults to [recipes].configmap)")]
        configmap: Option<String>,

        #[arg(short, long, help = "Skip confirmation prompts")]
        force: bool,

        #[arg(long, help = "Archive and list bundles without touching the cluster")]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = match args.command {
        Command::Version {
            git_ref,
            output_env,
        } => run_version(&config, git_ref, output_env),
        Command::Validate {
            version,
            allow_prefix,
        } => run_validate(&config, &version, allow_prefix),
        Command::RewriteReport {
            reports,
            prefix,
            output,
        } => run_rewrite_report(&config, &reports, prefix, output),
        Command::PublishRecipes {
            dir,
            namespace,
            configmap,
            force,
            dry_run,
        } => run_publish_recipes(&config, &dir, namespace, configmap, force, dry_run),
    };

    if let Err(e) = outcome {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

/// Resolve the reference string: explicit flag, CI environment, local checkout
fn resolve_ref(explicit: Option<String>) -> String {
    if let Some(reference) = explicit {
        return reference;
    }

    if let Ok(reference) = std::env::var("GITHUB_REF") {
        if !reference.is_empty() {
            return reference;
        }
    }

    match Git2RefSource::open(".") {
        Ok(source) => match source.current_ref() {
            Ok(reference) => reference,
            Err(e) => {
                ui::display_status(&format!(
                    "Warning: Could not describe checkout: {}. Using edge defaults.",
                    e
                ));
                String::new()
            }
        },
        Err(e) => {
            ui::display_status(&format!(
                "Warning: No git checkout found: {}. Using edge defaults.",
                e
            ));
            String::new()
        }
    }
}

fn run_version(config: &Config, git_ref: Option<String>, output_env: Option<String>) -> Result<()> {
    let ref_string = resolve_ref(git_ref);
    let git_ref = GitRef::parse(&ref_string);

    let derivation = release::derive_release(&git_ref, &config.version);
    if let Some(warning) = &derivation.warning {
        ui::display_boundary_warning(warning);
    }

    let target = OutputTarget::resolve(output_env.as_deref());
    let pairs = derivation.info.to_pairs();

    match &target {
        OutputTarget::EnvFile(path) => {
            ui::display_status(&format!("Deriving release fields from '{}'", ref_string));
            ui::display_release_info(&derivation.info);
            target.write_pairs(&pairs)?;
            ui::display_success(&format!(
                "Appended {} fields to {}",
                pairs.len(),
                path.display()
            ));
        }
        // Bare KEY=value lines so pipeline steps can eval the output
        OutputTarget::Stdout => {
            target.write_pairs(&pairs)?;
        }
    }

    Ok(())
}

fn run_validate(config: &Config, version: &str, allow_prefix: bool) -> Result<()> {
    let prefix = if allow_prefix {
        Some(config.version.tag_prefix.as_str())
    } else {
        None
    };

    match semver_check::validate(version, prefix) {
        Ok(_) => {
            ui::display_success(&format!("'{}' is a valid semantic version", version));
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn run_rewrite_report(
    config: &Config,
    reports: &[PathBuf],
    prefix: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    if output.is_some() && reports.len() != 1 {
        ui::display_error("--output requires exactly one report");
        std::process::exit(1);
    }

    let prefix = match prefix.or_else(|| config.report.strip_prefix.clone()) {
        Some(p) => p,
        None => {
            ui::display_error("No path prefix given; pass --prefix or set [report].strip_prefix");
            std::process::exit(1);
        }
    };

    for report_path in reports {
        match report::rewrite_report_file(report_path, &prefix, output.as_deref())? {
            ReportOutcome::Rewritten { replaced } => {
                ui::display_success(&format!(
                    "{}: rewrote {} path attribute(s)",
                    report_path.display(),
                    replaced
                ));
            }
            // Skips are tolerated: the pipeline may run this step even
            // when a test suite produced no report
            ReportOutcome::Skipped(warning) => {
                ui::display_boundary_warning(&warning);
            }
        }
    }

    Ok(())
}

fn run_publish_recipes(
    config: &Config,
    dir: &Path,
    namespace: Option<String>,
    configmap: Option<String>,
    force: bool,
    dry_run: bool,
) -> Result<()> {
    let namespace = namespace.unwrap_or_else(|| config.recipes.namespace.clone());
    let configmap_name = configmap.unwrap_or_else(|| config.recipes.configmap.clone());

    ui::display_status(&format!(
        "Bundling recipe directories under '{}'",
        dir.display()
    ));
    let (bundles, warnings) = recipes::archive_recipes(dir)?;
    for warning in &warnings {
        ui::display_boundary_warning(warning);
    }

    if bundles.is_empty() {
        ui::display_error("No recipe bundles produced; nothing to publish");
        std::process::exit(1);
    }

    ui::display_bundle_summary(&bundles);

    if dry_run {
        ui::display_status("Dry run: cluster state not modified");
        return Ok(());
    }

    if !force {
        let prompt = format!(
            "Replace ConfigMap '{}/{}' with {} bundle(s)?",
            namespace,
            configmap_name,
            bundles.len()
        );
        if !ui::confirm_action(&prompt)? {
            println!("Operation cancelled by user.");
            return Ok(());
        }
    }

    ui::display_status(&format!(
        "Replacing ConfigMap '{}/{}'",
        namespace, configmap_name
    ));
    recipes::replace_configmap_blocking(&namespace, &configmap_name, &bundles)?;
    ui::display_success(&format!(
        "Published {} bundle(s) to ConfigMap '{}/{}'",
        bundles.len(),
        namespace,
        configmap_name
    ));

    Ok(())
}
