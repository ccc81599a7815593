use docscope_core::bundle::FactBundle;
use docscope_core::hierarchy::merge_sources;
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct EntityRow {
    #[tabled(rename = "Entity")]
    entity: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Children")]
    children: String,
    #[tabled(rename = "Interfaces")]
    interfaces: String,
}

pub fn run(bundle: FactBundle) -> Result<(), Box<dyn std::error::Error>> {
    let collected = bundle
        .collector()
        .collect(bundle.pages.documented_entities());
    let graph = merge_sources(&collected);

    let rows: Vec<EntityRow> = graph
        .to_facts()
        .into_iter()
        .map(|fact| EntityRow {
            entity: fact.entity.to_string(),
            kind: fact.kind.to_string(),
            children: join(&fact.children),
            interfaces: join(&fact.interfaces),
        })
        .collect();

    if rows.is_empty() {
        println!("No entities collected.");
    } else {
        println!("{}", Table::new(&rows).with(Style::psql()));
        println!(
            "{} entities, {} subtype edges",
            graph.len(),
            graph.edge_count()
        );
    }
    Ok(())
}

fn join(refs: &[docscope_api::models::EntityRef]) -> String {
    if refs.is_empty() {
        return "-".to_string();
    }
    refs.iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
