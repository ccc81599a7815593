use crate::models::{EntityRef, SupertypeFact};

/// A symbol-information source that can describe entities.
///
/// Two independent sources typically exist (compiler descriptors and a PSI model).
/// They may disagree or know only part of the hierarchy; their answers are merged,
/// never ranked.
pub trait FactSource: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Describe `entity`, or `None` if this source has never seen it.
    fn describe(&self, entity: &EntityRef) -> Option<SupertypeFact>;
}
