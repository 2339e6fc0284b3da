//! Integration tests for stackview-core, driven through the public API only.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use stackview_core::{
    application::ApplicationError,
    domain::{Collapsible, inflector},
    prelude::*,
};

/// Minimal in-memory workspace keyed by label.
struct FixedWorkspace {
    files: Vec<(String, String)>,
    lists: AtomicUsize,
}

impl FixedWorkspace {
    fn new(files: &[(&str, &str)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(l, t)| (l.to_string(), t.to_string()))
                .collect(),
            lists: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl WorkspaceFiles for FixedWorkspace {
    async fn list_files(&self) -> StackviewResult<Vec<FileRef>> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .files
            .iter()
            .map(|(label, _)| FileRef::new(PathBuf::from("/ws").join(label), label.clone()))
            .collect())
    }

    async fn read_lines(&self, path: &Path) -> StackviewResult<Vec<String>> {
        let by_path: HashMap<PathBuf, &String> = self
            .files
            .iter()
            .map(|(l, t)| (PathBuf::from("/ws").join(l), t))
            .collect();
        by_path
            .get(path)
            .map(|t| t.lines().map(str::to_string).collect())
            .ok_or_else(|| {
                ApplicationError::ReadFailed {
                    path: path.to_path_buf(),
                    reason: "missing".into(),
                }
                .into()
            })
    }
}

fn sample() -> Arc<FixedWorkspace> {
    Arc::new(FixedWorkspace::new(&[
        (
            "src/components/Counter.tsx",
            "export function Counter() {\n  const [n, setN] = useState(0);\n  return <Button onClick={() => setN(n + 1)} />;\n}",
        ),
        (
            "src/pages/index.tsx",
            "export default function Home() {\n  return <Layout><Counter /></Layout>;\n}",
        ),
        (
            "src/routers/user.ts",
            "export const userRouter = router({\n  byId: publicProcedure.query(() => null),\n});",
        ),
    ]))
}

#[tokio::test]
async fn all_four_trees_over_one_workspace() {
    let providers = ProviderSet::new(sample(), WorkspaceSettings::default()).unwrap();

    let files = providers.get(TreeKind::Files).children(None).await.unwrap();
    let labels: Vec<&str> = files.iter().map(|n| n.label()).collect();
    assert_eq!(labels, vec!["components: 1", "pages: 1", "routers: 1"]);

    let components = providers.get(TreeKind::Components);
    let roots = components.children(None).await.unwrap();
    assert_eq!(roots.len(), 2);
    let usages = components.children(Some(&roots[1])).await.unwrap();
    let names: Vec<&str> = usages.iter().map(|n| n.label()).collect();
    assert_eq!(names, vec!["Layout"]);

    let hooks = providers.get(TreeKind::Hooks).children(None).await.unwrap();
    assert_eq!(hooks.len(), 1);

    let routes = providers.get(TreeKind::Routes);
    let roots = routes.children(None).await.unwrap();
    let defs = routes.children(Some(&roots[0])).await.unwrap();
    assert_eq!(defs[0].label(), "byId: publicProcedure.query(() => null),");
    assert_eq!(
        defs[0].command(),
        Some(&NodeCommand::GoToLine {
            path: PathBuf::from("/ws/src/routers/user.ts"),
            line: 1,
        })
    );
}

#[tokio::test]
async fn tree_items_reflect_node_shape() {
    let providers = ProviderSet::new(sample(), WorkspaceSettings::default()).unwrap();
    let hooks = providers.get(TreeKind::Hooks);

    let roots = hooks.children(None).await.unwrap();
    let calls = hooks.children(Some(&roots[0])).await.unwrap();

    assert_eq!(hooks.tree_item(&roots[0]).collapsible, Collapsible::Collapsed);
    let item = hooks.tree_item(&calls[0]);
    assert_eq!(item.collapsible, Collapsible::None);
    assert_eq!(item.tooltip.as_deref(), Some("src/components/Counter.tsx:2"));
}

#[tokio::test]
async fn save_event_rebuilds_every_tree_once() {
    let ws = sample();
    let providers = ProviderSet::new(ws.clone(), WorkspaceSettings::default()).unwrap();
    for p in providers.iter() {
        p.children(None).await.unwrap();
    }
    assert_eq!(ws.lists.load(Ordering::SeqCst), 4);

    let mut rx = providers.get(TreeKind::Routes).subscribe();
    let dropped =
        providers.handle_event(&WorkspaceEvent::Saved("/ws/src/routers/user.ts".into()));
    assert_eq!(dropped, 4);
    assert!(rx.recv().await.is_ok());

    for p in providers.iter() {
        p.children(None).await.unwrap();
        p.children(None).await.unwrap();
    }
    assert_eq!(ws.lists.load(Ordering::SeqCst), 8);
}

#[test]
fn inflections_are_reachable_from_the_prelude() {
    let inflection: Inflection = "dasherize".parse().unwrap();
    assert_eq!(inflection.apply("fooBar"), "foo-bar");
    assert_eq!(inflector::ordinalize(22), "22nd");
}
