//! JAFL converter CLI
//!
//! Builds every book archive found in a directory into one HTML file, or
//! dumps the element tree of a single markup file for debugging.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use jafl_book::options::{DEFAULT_OUTPUT, DEFAULT_ROOT};
use jafl_book::{BuildOptions, FileOrder, run};
use jafl_common::set_verbose;
use jafl_dom::print_tree;
use jafl_markup::{Verbatim, parse_document};

/// jafl: turn JAFL gamebook markup into print-ready HTML
#[derive(Parser, Debug)]
#[command(name = "jafl")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Build every book archive in the current directory into output.html
    jafl

    # Build from another directory into a chosen file
    jafl ./fabled-lands fl.html

    # Build only the third book
    jafl -b 3 ./fabled-lands book3.html

    # Show the element tree of one file
    jafl --tree book1/New.xml
"#)]
struct Cli {
    /// Directory holding the book archives and shared pages
    #[arg(value_name = "ROOT")]
    root: Option<PathBuf>,

    /// HTML file to write
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Convert only this book (1-based)
    #[arg(short, long, value_name = "N")]
    book: Option<usize>,

    /// Print progress for every file and report tags without a rule
    #[arg(short, long)]
    verbose: bool,

    /// Sort images after the other non-numbered files of a book
    #[arg(long)]
    images_last: bool,

    /// Print the element tree of FILE instead of building books
    #[arg(long, value_name = "FILE")]
    tree: Option<PathBuf>,

    /// With --tree, print the tree as JSON
    #[arg(long, requires = "tree")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
    set_verbose(cli.verbose);

    if let Some(ref path) = cli.tree {
        return dump_tree(path, cli.json);
    }

    let options = resolve_options(cli);
    run(&options).with_context(|| {
        format!(
            "failed to build {} from {}",
            options.output.display(),
            options.root.display()
        )
    })?;
    println!("Finished! Output saved in {}", options.output.display());
    Ok(())
}

/// Turn the command line into build options, announcing the defaults used.
fn resolve_options(cli: Cli) -> BuildOptions {
    let root = cli.root.unwrap_or_else(|| {
        log::info!("Directory not defined. Operating in the current directory...");
        PathBuf::from(DEFAULT_ROOT)
    });
    let output = cli.output.unwrap_or_else(|| {
        log::info!("Output file not specified. Output will be saved in {DEFAULT_OUTPUT}");
        PathBuf::from(DEFAULT_OUTPUT)
    });
    let file_order = FileOrder {
        images_last: cli.images_last,
        ..FileOrder::default()
    };

    BuildOptions::new(root, output)
        .with_book(cli.book)
        .with_file_order(file_order)
}

/// Parse one file without rendering rules and print what was opened.
fn dump_tree(path: &Path, json: bool) -> anyhow::Result<()> {
    let input =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let doc = parse_document(&input, &Verbatim)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&doc.tree)?);
    } else {
        for root in doc.tree.roots() {
            print_tree(&doc.tree, root, 0);
        }
    }
    Ok(())
}
