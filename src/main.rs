use atelier_gal::contact::{ContactMessage, EmailJsMailer, Mailer};
use atelier_gal::{catalog, config, generate, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "atelier-gal")]
#[command(about = "Static gallery site generator for artist portfolios")]
#[command(long_about = "\
Static gallery site generator for artist portfolios

Your filesystem is the data source. Gallery directories hold one level of
series subdirectories; filenames become titles; sidecar text files carry
captions, series descriptions, and the display order.

Content structure:

  content/
  ├── atelier.toml                 # Site config (optional)
  ├── data/
  │   ├── series-order.txt         # Series display order (# = comment)
  │   ├── gallery-captions/        # Per-artwork captions, matched by stem
  │   └── series-descriptions/     # Per-series text, matched by key
  ├── paintings/                   # One directory per gallery
  │   ├── florals/
  │   │   ├── blue-vase.jpg        # Title: \"Blue Vase\"
  │   │   └── harbour-sold.jpg     # \"sold\" in the name marks it sold
  │   └── birds/
  │       └── kereru.jpg
  └── for-sale/                    # The cart-enabled storefront
      └── earrings/
          └── paua-drops.jpg

Series ordering: keys listed in series-order.txt come first, in list
order; everything else follows alphabetically.

Run 'atelier-gal gen-config' to print a documented atelier.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".atelier-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the content directory into a manifest
    Scan,
    /// Produce the static site from a scanned manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content and config without writing output
    Check,
    /// Print a stock atelier.toml with all options documented
    GenConfig,
    /// Send a test message through the configured email provider
    ContactTest {
        /// Sender name
        #[arg(long, default_value = "Atelier Gal")]
        name: String,
        /// Sender email address
        #[arg(long, default_value = "test@example.com")]
        email: String,
        /// Message body
        #[arg(long, default_value = "Contact form delivery test.")]
        message: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = catalog::scan(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = catalog::manifest_path(&cli.temp_dir);
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest);
        }
        Command::Generate => {
            let manifest_path = catalog::manifest_path(&cli.temp_dir);
            let summary = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_summary(&summary);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = catalog::scan(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = catalog::manifest_path(&cli.temp_dir);
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let summary = generate::generate_site(&manifest, &cli.source, &cli.output)?;
            output::print_generate_summary(&summary);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = catalog::scan(&cli.source)?;
            output::print_scan_output(&manifest);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::ContactTest {
            name,
            email,
            message,
        } => {
            let site_config = config::load_config(&cli.source)?;
            let mailer = EmailJsMailer::new(&site_config.email)?;
            let test_message = ContactMessage::new(&name, &email, &message);
            mailer.send(&test_message)?;
            println!("Message accepted by the email provider");
        }
    }

    Ok(())
}
