use std::env;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use release_notes::{logging, tree, ui};

#[derive(clap::Parser)]
#[command(
    name = "directory-tree",
    version,
    about = "Write a box-drawing tree of a directory to a file"
)]
struct Args {
    #[arg(help = "Directory to walk; defaults to the current directory")]
    root: Option<PathBuf>,

    #[arg(short, long, default_value = tree::DEFAULT_OUTPUT_FILE, help = "File to write the tree to")]
    output: PathBuf,

    #[arg(short, long, help = "Log debug output to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let cwd = env::current_dir()?;
    let root = match args.root {
        Some(root) if root.is_absolute() => root,
        Some(root) => cwd.join(root),
        None => cwd,
    };

    if !root.exists() {
        ui::display_error(&format!(
            "The directory '{}' does not exist.",
            root.display()
        ));
        std::process::exit(1);
    }
    if !root.is_dir() {
        ui::display_error(&format!(
            "The path '{}' is not a directory.",
            root.display()
        ));
        std::process::exit(1);
    }

    let rendered = tree::render_tree(&root);

    match tree::write_tree(&args.output, &rendered) {
        Ok(()) => println!(
            "Directory tree has been written to '{}'.",
            args.output.display()
        ),
        Err(e) => ui::display_error(&format!("Error writing to file: {}", e)),
    }

    Ok(())
}
