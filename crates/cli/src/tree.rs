use crate::ViewArg;
use crate::render::render_tree;
use docscope_core::bundle::FactBundle;
use docscope_core::hierarchy::build_views;

pub fn run(bundle: FactBundle, view: ViewArg) -> Result<(), Box<dyn std::error::Error>> {
    let views = build_views(
        &bundle.collector(),
        bundle.pages.documented_entities(),
        &bundle.config,
    )?;

    if matches!(view, ViewArg::Class | ViewArg::Both) {
        println!("Class hierarchy:");
        print!("{}", render_tree(&views.class.root));
    }
    if view == ViewArg::Both {
        println!();
    }
    if matches!(view, ViewArg::Interface | ViewArg::Both) {
        println!("Interface hierarchy:");
        print!("{}", render_tree(&views.interface.root));
    }
    Ok(())
}
