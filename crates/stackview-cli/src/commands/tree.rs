//! `stackview tree`: print one or all trees.

use stackview_core::{application::ProviderSet, error::StackviewError};
use tracing::{info, instrument};

use crate::{
    cli::{GlobalArgs, TreeArgs},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    render::{self, RenderedTree},
};

#[instrument(skip_all, fields(target = ?args.target))]
pub fn execute(
    args: TreeArgs,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let format = super::resolve_format(args.view.format, global, &config);
    let (root, workspace) = super::open_workspace(&config, args.view.root.as_ref())?;
    let providers = ProviderSet::new(workspace, config.workspace.settings())?;
    info!(root = %root.display(), "Building trees");

    let trees = super::runtime()?.block_on(async {
        let mut trees: Vec<RenderedTree> = Vec::new();
        for kind in args.target.kinds() {
            let provider = providers.get(kind);
            trees.push(render::collect(&*provider, args.view.depth).await?);
        }
        Ok::<_, StackviewError>(trees)
    })?;
    providers.dispose_all();

    let text = render::render(&trees, format, output.colorize())
        .map_err(std::io::Error::from)
        .with_cli_context(|| "Failed to render tree")?;
    output.data(&text)?;
    Ok(())
}
