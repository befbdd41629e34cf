use clap::CommandFactory;
use clap_complete::generate;

use spendy_core::KNOWN_CATEGORIES;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::ui::{header, print};

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "spendy", &mut std::io::stdout());
    Ok(())
}

pub fn handle_categories(ctx: &AppContext) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui(false, None);
    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "categories", None));
    }
    for category in KNOWN_CATEGORIES {
        println!("{}", category);
    }
    Ok(())
}
