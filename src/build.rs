//! `mdpress build` — compile a content directory into a static site.
//!
//! Walks the content tree, converts every `.md` file into an HTML page by
//! substituting the extracted title and rendered body into the template, and
//! mirrors the directory structure into the output directory with `.md`
//! extensions rewritten to `.html`. Static assets are copied into the output
//! root first. A `--watch` mode rebuilds on content or template changes.

use anyhow::Result;
use colored::Colorize;
use notify::{EventKind, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};
use walkdir::WalkDir;

use crate::config::load_config;

/// Literal placeholder for the extracted page title.
const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Literal placeholder for the rendered page body.
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Resolved build settings: mdpress.json defaults with CLI overrides applied.
pub struct BuildOpts {
    pub content_dir: PathBuf,
    pub template_path: PathBuf,
    pub static_dir: PathBuf,
    pub out_dir: PathBuf,
    pub quiet: bool,
}

impl BuildOpts {
    /// Merge CLI flags over the optional `mdpress.json` in the current
    /// directory. Flags win over file values, which win over defaults.
    pub fn resolve(
        content: Option<String>,
        template: Option<String>,
        out: Option<String>,
        static_dir: Option<String>,
        quiet: bool,
    ) -> Result<Self> {
        let config = load_config(Path::new("."))?;

        Ok(Self {
            content_dir: PathBuf::from(content.unwrap_or(config.content_dir)),
            template_path: PathBuf::from(template.unwrap_or(config.template)),
            static_dir: PathBuf::from(static_dir.unwrap_or(config.static_dir)),
            out_dir: PathBuf::from(out.unwrap_or(config.out_dir)),
            quiet,
        })
    }
}

/// Run one full site build.
///
/// Any page that fails to parse or render aborts the build with an error
/// naming the page; there is no best-effort output for broken pages.
pub fn handle_build(opts: &BuildOpts) -> Result<()> {
    let template = std::fs::read_to_string(&opts.template_path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read template '{}': {}",
            opts.template_path.display(),
            e
        )
    })?;

    if !template.contains(TITLE_PLACEHOLDER) || !template.contains(CONTENT_PLACEHOLDER) {
        anyhow::bail!(
            "Template '{}' must contain the '{}' and '{}' placeholders",
            opts.template_path.display(),
            TITLE_PLACEHOLDER,
            CONTENT_PLACEHOLDER,
        );
    }

    std::fs::create_dir_all(&opts.out_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create '{}': {}", opts.out_dir.display(), e))?;

    if opts.static_dir.is_dir() {
        copy_dir(&opts.static_dir, &opts.out_dir)?;
    }

    let mut built_count = 0;

    for entry in WalkDir::new(&opts.content_dir) {
        let entry = entry.map_err(|e| {
            anyhow::anyhow!("Failed to walk '{}': {}", opts.content_dir.display(), e)
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        let dest = generate_page(entry.path(), &opts.content_dir, &opts.out_dir, &template)?;
        built_count += 1;

        if !opts.quiet {
            println!(
                "  {} {} → {}",
                "page".dimmed(),
                entry.path().display(),
                dest.display()
            );
        }
    }

    if !opts.quiet {
        println!(
            "{} {} pages → {}",
            "Built".green().bold(),
            built_count,
            opts.out_dir.display(),
        );
    }

    Ok(())
}

/// Generate one HTML page from a markdown source file.
///
/// Returns the path of the written page.
fn generate_page(
    source: &Path,
    content_dir: &Path,
    out_dir: &Path,
    template: &str,
) -> Result<PathBuf> {
    let markdown = std::fs::read_to_string(source)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", source.display(), e))?;

    let title = mdpress_parse::extract_title(&markdown)
        .map_err(|e| anyhow::anyhow!("Failed to build '{}': {}", source.display(), e))?;
    let body = mdpress_parse::parse_document(&markdown)
        .map_err(|e| anyhow::anyhow!("Failed to parse '{}': {}", source.display(), e))?
        .render()
        .map_err(|e| anyhow::anyhow!("Failed to render '{}': {}", source.display(), e))?;

    let html = fill_template(template, &title, &body);

    let relative = source.strip_prefix(content_dir).unwrap_or(source);
    let dest = out_dir.join(relative).with_extension("html");

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("Failed to create '{}': {}", parent.display(), e))?;
    }
    std::fs::write(&dest, &html)
        .map_err(|e| anyhow::anyhow!("Failed to write '{}': {}", dest.display(), e))?;

    Ok(dest)
}

/// Substitute the title and rendered body into the page template.
fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Recursively copy `src` into `dest`, mirroring the directory structure.
fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry =
            entry.map_err(|e| anyhow::anyhow!("Failed to walk '{}': {}", src.display(), e))?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)
                .map_err(|e| anyhow::anyhow!("Failed to create '{}': {}", target.display(), e))?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    anyhow::anyhow!("Failed to create '{}': {}", parent.display(), e)
                })?;
            }
            std::fs::copy(entry.path(), &target).map_err(|e| {
                anyhow::anyhow!("Failed to copy to '{}': {}", target.display(), e)
            })?;
        }
    }
    Ok(())
}

/// Watch the content directory and template for changes and rebuild on each
/// save.
///
/// Debounces rapid events (e.g. editors that write in stages) with a 200ms
/// window. Ctrl+C exits.
pub fn watch_and_rebuild(opts: &BuildOpts) -> Result<()> {
    handle_build(opts)?;

    println!(
        "{} {} for changes (Ctrl+C to stop)",
        "Watching".cyan().bold(),
        opts.content_dir.display(),
    );

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    watcher.watch(&opts.content_dir, RecursiveMode::Recursive)?;
    if opts.template_path.exists() {
        watcher.watch(&opts.template_path, RecursiveMode::NonRecursive)?;
    }

    let mut last_rebuild = Instant::now();
    let debounce = Duration::from_millis(200);

    loop {
        match rx.recv_timeout(Duration::from_secs(1)) {
            Ok(event) => {
                let relevant = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if relevant && last_rebuild.elapsed() > debounce {
                    // Small delay to let the editor finish writing
                    std::thread::sleep(Duration::from_millis(50));

                    match handle_build(opts) {
                        Ok(()) => {
                            last_rebuild = Instant::now();
                        }
                        Err(e) => {
                            eprintln!("{} {}", "Build error:".red().bold(), e);
                        }
                    }
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                // Keep looping
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    Ok(())
}
