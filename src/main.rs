#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use treepager::cli::Args;
use treepager::render::{render_to_string, tree_to_lines};
use treepager::tree::{TreeBuilder, WalkdirTreeBuilder};
use treepager::{pager, terminal};

fn main() {
    let args = Args::parse_normalized().validated();
    init_logging(&args);

    if let Err(e) = run_app(&args, &WalkdirTreeBuilder) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` overrides the level picked by `-v`/`-q`.
fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn run_app(args: &Args, builder: &impl TreeBuilder) -> Result<()> {
    let tree_config = args.tree_config();
    info!(
        path = %args.path.display(),
        max_depth = tree_config.max_depth,
        show_hidden = tree_config.show_hidden,
        "building tree"
    );

    let tree = builder
        .build_tree(&args.path, &tree_config)
        .context("failed to build tree")?;
    info!(nodes = tree.len(), "tree built");

    let mut render_config = args.render_config();

    if args.no_pager {
        render_config.use_color = false;
        let text = render_to_string(&tree, &render_config);
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
            .context("failed to write tree")?;
        return Ok(());
    }

    terminal::install_panic_hook();
    let title = tree.root.display().to_string();
    pager::run(title, tree_to_lines(&tree, &render_config)).context("failed to display tree")?;
    Ok(())
}
