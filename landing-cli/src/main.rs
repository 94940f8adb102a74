// onboard-landing - render the Codebase Onboarding landing page
//
// Subcommands:
//   render   write the HTML document (or just <main>) to a file or stdout
//   outline  print the page outline as JSON
//   check    verify section order, feature grid and navigation targets

mod config;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use config::SiteConfig;
use onboard_landing::content::{self, FooterLinks};
use onboard_landing::{render_fragment, render_page_with, verify_rendered};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "onboard-landing")]
#[command(about = "Render the Codebase Onboarding landing page to static HTML")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Config file (default: ./landing.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page as HTML
    Render(RenderArgs),
    /// Print the page outline as JSON
    Outline {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        links: LinkArgs,
    },
    /// Verify the page structure and exit non-zero on drift
    Check,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Output file (default: stdout)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Render only the <main> element, without <html>/<head>
    #[arg(long)]
    fragment: bool,

    #[command(flatten)]
    links: LinkArgs,
}

/// Footer target overrides; take precedence over the config file.
#[derive(Args, Debug, Default)]
struct LinkArgs {
    /// Target of the footer "GitHub" link
    #[arg(long, value_parser = parse_url)]
    github_url: Option<String>,

    /// Target of the footer "Documentation" link
    #[arg(long, value_parser = parse_url)]
    docs_url: Option<String>,
}

/// Footer targets follow the same rule as `landing.toml`: blank is rejected.
fn parse_url(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("URL must not be empty".to_string());
    }
    Ok(value.to_string())
}

impl LinkArgs {
    fn resolve(self, config: &SiteConfig) -> FooterLinks {
        config.footer_links(self.github_url, self.docs_url)
    }
}

// ============================================================================
// Commands
// ============================================================================

fn render(args: RenderArgs, config: &SiteConfig) -> Result<()> {
    let links = args.links.resolve(config);
    debug!(?links, fragment = args.fragment, "rendering landing page");

    let html = if args.fragment {
        render_fragment(&links)
    } else {
        render_page_with(&links)
    };

    match args.out {
        Some(path) => write_file(&path, &html),
        None => write_stdout(&html),
    }
}

fn outline(pretty: bool, links: LinkArgs, config: &SiteConfig) -> Result<()> {
    let page = content::outline(&links.resolve(config));
    let json = if pretty {
        serde_json::to_string_pretty(&page)
    } else {
        serde_json::to_string(&page)
    }
    .context("Failed to serialize page outline")?;

    write_stdout(&format!("{json}\n"))
}

fn check(config: &SiteConfig) -> Result<()> {
    let links = config.footer_links(None, None);
    let page = content::outline(&links);
    content::verify_structure(&page).context("Landing page structure drifted")?;
    verify_rendered(&render_page_with(&links)).context("Rendered landing page drifted")?;

    let actions = page.hero.actions.len() + page.call_to_action.actions.len();
    info!("structure verified");
    write_stdout(&format!(
        "ok: {} sections, {} features, {} navigation actions, {} footer links\n",
        page.sections.len(),
        page.features.entries.len(),
        actions,
        page.footer.links.len()
    ))
}

fn write_file(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write to stdout")
}

// ============================================================================
// Entry point
// ============================================================================

fn run(cli: Cli) -> Result<()> {
    // Logs go to stderr, stdout is for HTML/JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("onboard-landing v{}", env!("CARGO_PKG_VERSION"));

    let config = SiteConfig::resolve(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Command::Render(args) => render(args, &config),
        Command::Outline { pretty, links } => outline(pretty, links, &config),
        Command::Check => check(&config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[onboard-landing] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
