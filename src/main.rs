use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use report_version::cli::{run_bump_workflow, BumpWorkflowArgs};
use report_version::config::{self, Config};
use report_version::git::{Git2Repository, Repository};
use report_version::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "report-version",
    version,
    about = "Bump per-report versions and changelogs from conventional commit markers"
)]
struct Args {
    #[arg(
        short,
        long,
        help = "Custom configuration file path (falls back to $REPORT_VERSION_CONFIG)"
    )]
    config: Option<PathBuf>,

    #[arg(long, default_value = ".", help = "Path inside the repository to operate on")]
    repo: PathBuf,

    #[arg(long, help = "Start of the commit range (exclusive), e.g. origin/main~1")]
    from: Option<String>,

    #[arg(long, help = "End of the commit range (inclusive), e.g. HEAD")]
    to: Option<String>,

    #[arg(long, help = "Directory containing the report directories")]
    root_prefix: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(long, help = "Do not commit the version bumps")]
    no_commit: bool,

    #[arg(long, help = "Do not create per-report tags")]
    no_tag: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

impl Args {
    /// Apply command-line overrides on top of the loaded configuration
    fn apply_to(&self, config: &mut Config) {
        if let Some(from) = &self.from {
            config.range.from = from.clone();
        }
        if let Some(to) = &self.to {
            config.range.to = to.clone();
        }
        if let Some(prefix) = &self.root_prefix {
            config.reports.root_prefix = Some(prefix.clone());
        }
        if self.no_commit {
            config.behavior.commit = false;
        }
        if self.no_tag {
            config.behavior.tag = false;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_tracing(args.verbose);

    let git_repo = match Git2Repository::open(&args.repo) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let repo_root = git_repo.workdir().to_path_buf();

    // Load configuration
    let mut config = match config::load_config(args.config.as_deref(), &repo_root) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    args.apply_to(&mut config);
    config.validate().context("invalid configuration")?;

    let workflow_args = BumpWorkflowArgs {
        dry_run: args.dry_run,
        date: chrono::Utc::now().date_naive(),
    };

    let range = format!("{}..{}", config.range.from, config.range.to);
    let result = match run_bump_workflow(&git_repo, &config, &workflow_args) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("Version bump failed: {}", e));
            std::process::exit(1);
        }
    };

    ui::display_workflow_result(&result, &range, args.dry_run);

    if !result.is_success() {
        ui::display_error(&format!(
            "{} report(s) could not be updated",
            result.failed.len()
        ));
        std::process::exit(1);
    }

    Ok(())
}
