use clap::{Parser, Subcommand};
use contentfold::{collect, config, feed, output, resolve};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contentfold")]
#[command(about = "Content collection pipeline for MDX blogs and tutorials")]
#[command(long_about = "\
Content collection pipeline for MDX blogs and tutorials

Your filesystem is the data source. MDX files with YAML front-matter become
typed records; tutorials sequence chapters by an explicit order field and
author-declared prev/next links.

Content structure:

  content/
  ├── site.toml                    # Site config (optional)
  ├── pages/
  │   └── about.mdx                # Page → /about
  ├── posts/
  │   └── hello-world.mdx          # Post → /posts/hello-world
  └── tutorials/
      └── react-basics/
          ├── index.mdx            # Tutorial → /tutorials/react-basics
          ├── 01-setup.mdx         # Chapter → /tutorials/react-basics/01-setup
          └── 02-hooks.mdx         # Chapter → /tutorials/react-basics/02-hooks

Validation is eager: a missing required front-matter field or a slug
collision fails the run, naming the offending files. Declared prev/next
chapter references are NOT validated at build time; 'check' reports
unresolvable ones as warnings.

Run 'contentfold gen-config' to generate a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "public", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (collections manifest)
    #[arg(long, default_value = ".contentfold-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build all collections and write the collections manifest
    Scan,
    /// Run the full pipeline: collections manifest + RSS feed
    Build,
    /// Validate content without writing anything
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let collections = collect::build(&cli.source)?;
            write_manifest(&cli.temp_dir, &collections)?;
            output::print_build_output(&collections);
        }
        Command::Build => {
            println!("==> Stage 1: Collecting {}", cli.source.display());
            let collections = collect::build(&cli.source)?;
            write_manifest(&cli.temp_dir, &collections)?;
            output::print_build_output(&collections);

            println!("==> Stage 2: Writing feed → {}", cli.output.display());
            let xml = feed::rss_xml(&collections.config, &collections.posts);
            std::fs::create_dir_all(&cli.output)?;
            std::fs::write(cli.output.join("rss.xml"), xml)?;

            println!(
                "==> Build complete: {} documents",
                collections.document_count()
            );
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let collections = collect::build(&cli.source)?;
            output::print_build_output(&collections);

            let dangling = resolve::dangling_refs(&collections);
            output::print_dangling_refs(&dangling);
            if dangling.is_empty() {
                println!("==> Content is valid");
            } else {
                // Dead chapter links are author responsibility, not a build
                // failure.
                println!(
                    "==> Content is valid ({} unresolvable chapter reference(s))",
                    dangling.len()
                );
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Write the collections manifest for inspection and downstream tooling.
fn write_manifest(
    temp_dir: &std::path::Path,
    collections: &collect::Collections,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let json = serde_json::to_string_pretty(collections)?;
    std::fs::write(temp_dir.join("collections.json"), json)?;
    Ok(())
}
