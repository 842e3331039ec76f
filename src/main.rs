use anyhow::Result;
use clap::{Parser, Subcommand};

mod build;
mod config;

#[derive(Parser)]
#[command(name = "mdpress", version, about = "Markdown static site compiler")]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the content directory into a static site
    Build {
        /// Directory of markdown content
        #[arg(long)]
        content: Option<String>,

        /// HTML template with {{ Title }} and {{ Content }} placeholders
        #[arg(long)]
        template: Option<String>,

        /// Output directory
        #[arg(long)]
        out: Option<String>,

        /// Directory of static assets copied into the output root
        #[arg(long)]
        static_dir: Option<String>,

        /// Rebuild whenever the content or template changes
        #[arg(long)]
        watch: bool,
    },

    /// Render a single markdown file to an HTML fragment on stdout
    Render {
        /// Path to the .md file
        file: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            content,
            template,
            out,
            static_dir,
            watch,
        } => {
            let opts = build::BuildOpts::resolve(content, template, out, static_dir, cli.quiet)?;
            if watch {
                build::watch_and_rebuild(&opts)?;
            } else {
                build::handle_build(&opts)?;
            }
        }
        Commands::Render { file } => {
            handle_render(&file)?;
        }
    }

    Ok(())
}

fn handle_render(file: &str) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", file, e))?;

    let doc = mdpress_parse::parse_document(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse '{}': {}", file, e))?;

    println!("{}", doc.render()?);
    Ok(())
}
