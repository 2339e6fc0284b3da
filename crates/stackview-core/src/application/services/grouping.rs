//! Builds root nodes from a file listing.
//!
//! Two shapes:
//! - **Category groups** (files tree): one group per watch category, holding
//!   every file whose label contains the singular form of the category.
//! - **Match groups** (pattern trees): one node per file with at least one
//!   matching line, children are the match leaves.

use tracing::debug;

use crate::domain::{FileRef, TreeNode, inflector};

use super::scanner::LineScanner;

/// Group files under their watch categories, in category order.
///
/// The label is `"<category>: <count>"`. Categories without files are
/// omitted, and a file can appear under several categories.
pub fn group_by_category(files: &[FileRef], categories: &[String]) -> Vec<TreeNode> {
    categories
        .iter()
        .filter_map(|category| {
            let token = inflector::singularize(category);
            if token.is_empty() {
                return None;
            }

            let members: Vec<TreeNode> = files
                .iter()
                .filter(|f| f.label.contains(&token))
                .map(TreeNode::file)
                .collect();

            if members.is_empty() {
                debug!(category, "No files in category");
                return None;
            }

            Some(TreeNode::group(
                format!("{}: {}", category, members.len()),
                members,
            ))
        })
        .collect()
}

/// One node per file that has at least one match, in listing order.
pub async fn group_by_matches(scanner: &LineScanner, files: Vec<FileRef>) -> Vec<TreeNode> {
    scanner
        .scan_all(files)
        .await
        .into_iter()
        .filter(|(_, matches)| !matches.is_empty())
        .map(|(file, matches)| TreeNode::file(&file).into_branch(matches))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::services::test_support::{ScriptedWorkspace, file};
    use crate::domain::ScanPattern;

    fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn files_land_under_matching_categories() {
        let files = vec![
            file("src/components/Button.tsx"),
            file("src/pages/index.tsx"),
        ];

        let groups = group_by_category(&files, &categories(&["components", "pages"]));

        let labels: Vec<&str> = groups.iter().map(|g| g.label()).collect();
        assert_eq!(labels, vec!["components: 1", "pages: 1"]);
        assert_eq!(groups[0].children().unwrap()[0].label(), "src/components/Button.tsx");
    }

    #[test]
    fn suffix_style_names_are_grouped() {
        let files = vec![
            file("Button.component.tsx"),
            file("Home.page.tsx"),
            file("utils.ts"),
        ];

        let groups = group_by_category(&files, &categories(&["components", "pages"]));

        let labels: Vec<&str> = groups.iter().map(|g| g.label()).collect();
        assert_eq!(labels, vec!["components: 1", "pages: 1"]);
        assert_eq!(groups[1].children().unwrap()[0].label(), "Home.page.tsx");
    }

    #[test]
    fn empty_categories_are_omitted() {
        let files = vec![file("src/hooks/useThing.ts")];
        let groups = group_by_category(&files, &categories(&["components", "hooks"]));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label(), "hooks: 1");
    }

    #[test]
    fn file_may_belong_to_several_categories() {
        let files = vec![file("src/pages/components/Header.tsx")];
        let groups = group_by_category(&files, &categories(&["components", "pages"]));
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let files = vec![file("src/Components/Button.tsx")];
        assert!(group_by_category(&files, &categories(&["components"])).is_empty());
    }

    #[test]
    fn no_files_means_no_groups() {
        assert!(group_by_category(&[], &categories(&["components"])).is_empty());
    }

    #[tokio::test]
    async fn files_without_matches_are_dropped() {
        let ws = ScriptedWorkspace::new()
            .with_file("App.tsx", "<Layout>\n  <Header />\n</Layout>")
            .with_file("util.ts", "export const x = 1;");
        let files = ws.files();
        let scanner = LineScanner::new(Arc::new(ws), ScanPattern::Components, 2);

        let roots = group_by_matches(&scanner, files).await;

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].label(), "App.tsx");
        let children: Vec<&str> = roots[0]
            .children()
            .unwrap()
            .iter()
            .map(|c| c.label())
            .collect();
        assert_eq!(children, vec!["Layout", "Header"]);
    }
}
