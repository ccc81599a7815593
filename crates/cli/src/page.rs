use docscope_core::bundle::FactBundle;
use docscope_core::page::{PageKind, PageNode, TreeViewPage};
use rayon::prelude::*;
use tracing::info;

pub fn run(bundle: FactBundle) -> Result<(), Box<dyn std::error::Error>> {
    let collector = bundle.collector();
    let root = &bundle.pages;

    let packages: Vec<PageNode> = children_of_kind(root, PageKind::Package);
    let main = if packages.is_empty() {
        TreeViewPage::new(
            root.name.clone(),
            None,
            Some(children_of_kind(root, PageKind::Class)),
            PageKind::Main,
            root,
            &collector,
            &bundle.config,
        )?
    } else {
        TreeViewPage::new(
            root.name.clone(),
            Some(packages.clone()),
            None,
            PageKind::Main,
            root,
            &collector,
            &bundle.config,
        )?
    };

    // Each package page runs its own graph pass
    let package_pages = packages
        .par_iter()
        .filter(|p| !p.documented_entities().is_empty())
        .map(|p| {
            TreeViewPage::new(
                p.name.clone(),
                None,
                Some(children_of_kind(p, PageKind::Class)),
                PageKind::Package,
                p,
                &collector,
                &bundle.config,
            )
        })
        .collect::<docscope_core::Result<Vec<_>>>()?;

    info!(packages = package_pages.len(), "assembled tree pages");

    let payload = serde_json::json!({
        "main": main.content_map(),
        "packages": package_pages
            .iter()
            .map(TreeViewPage::content_map)
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn children_of_kind(page: &PageNode, kind: PageKind) -> Vec<PageNode> {
    page.children
        .iter()
        .filter(|p| p.kind == kind)
        .cloned()
        .collect()
}
