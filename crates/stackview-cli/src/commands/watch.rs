//! `stackview watch`: print a tree, then re-print it after each change.

use stackview_adapters::{PathFilter, WatcherConfig, WorkspaceWatcher};
use stackview_core::{
    application::{ProviderSet, TreeDataProvider},
    domain::TreeKind,
};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, instrument};

use crate::{
    cli::{GlobalArgs, TreeFormat, ViewArgs, WatchArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    render,
};

#[instrument(skip_all, fields(kind = ?args.kind))]
pub fn execute(
    args: WatchArgs,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let kind = TreeKind::from(args.kind);
    let format = super::resolve_format(args.view.format, global, &config);
    let (root, workspace) = super::open_workspace(&config, args.view.root.as_ref())?;
    let settings = config.workspace.settings();
    let filter = PathFilter::new(&settings.include, &settings.exclude)?;
    let providers = ProviderSet::new(workspace, settings)?;
    let provider = providers.get(kind);
    let watcher_config = WatcherConfig::default().with_debounce_ms(config.watcher.debounce_ms);

    super::runtime()?.block_on(async {
        let (_watcher, mut events) = WorkspaceWatcher::start(&root, filter, &watcher_config)?;
        let mut changes = provider.subscribe();

        draw(&*provider, &args.view, format, &output).await?;
        output.info(&format!(
            "Watching {} for changes (Ctrl+C to stop)",
            root.display()
        ))?;

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted");
                    break;
                }
                event = events.recv() => match event {
                    Some(event) => {
                        let dropped = providers.handle_event(&event);
                        debug!(?event, dropped, "Workspace event");
                    }
                    None => break,
                },
                changed = changes.recv() => match changed {
                    Ok(_) | Err(RecvError::Lagged(_)) => {
                        // Several invalidations in a row need one redraw.
                        while changes.try_recv().is_ok() {}
                        output.clear()?;
                        draw(&*provider, &args.view, format, &output).await?;
                    }
                    Err(RecvError::Closed) => break,
                },
            }
        }

        providers.dispose_all();
        Ok::<_, CliError>(())
    })
}

/// Print the tree; a failed population is reported and watching goes on.
async fn draw(
    provider: &dyn TreeDataProvider,
    view: &ViewArgs,
    format: TreeFormat,
    output: &OutputManager,
) -> CliResult<()> {
    match render::collect(provider, view.depth).await {
        Ok(tree) => {
            let text = render::render(std::slice::from_ref(&tree), format, output.colorize())
                .map_err(std::io::Error::from)?;
            output.data(&text)?;
        }
        Err(e) => {
            output.error(&e.to_string())?;
        }
    }
    Ok(())
}
