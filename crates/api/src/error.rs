use crate::models::{EntityRef, ViewKind};

#[derive(Debug, thiserror::Error)]
pub enum HierarchyError {
    #[error("Root entity {root} is absent from the merged graph")]
    Resolution { root: EntityRef },
    #[error("Cyclic inheritance: {}", format_chain(.chain))]
    CyclicHierarchy { chain: Vec<EntityRef> },
    #[error("Malformed {view} hierarchy: {detail}")]
    MalformedHierarchy { view: ViewKind, detail: String },
}

fn format_chain(chain: &[EntityRef]) -> String {
    chain
        .iter()
        .map(EntityRef::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub type HierarchyResult<T> = std::result::Result<T, HierarchyError>;
