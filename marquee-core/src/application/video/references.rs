use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use tracing::debug;

use crate::domain::references::ReferenceRepository;
use crate::domain::validation::{ValidationError, ValidationHandler};
use crate::error::{CatalogError, Result};

/// Check that every id in `requested` exists, in one round trip.
///
/// Missing ids are reported as a single error listing them sorted and comma
/// separated. An empty request never reaches the repository.
pub async fn validate_references<Id>(
    label: &str,
    requested: &HashSet<Id>,
    repository: &dyn ReferenceRepository<Id>,
    handler: &mut dyn ValidationHandler,
) -> Result<()>
where
    Id: Clone + Ord + Hash + Display + Send + Sync + 'static,
{
    if requested.is_empty() {
        return Ok(());
    }

    let ids: Vec<Id> = requested.iter().cloned().collect();
    let confirmed: HashSet<Id> = repository
        .exists_by_ids(&ids)
        .await
        .map_err(|err| {
            CatalogError::internal(format!("Failed to look up {label}"), err)
        })?
        .into_iter()
        .collect();

    let mut missing: Vec<Id> = ids
        .into_iter()
        .filter(|id| !confirmed.contains(id))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    missing.sort();

    let joined = missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    debug!(label, missing = %joined, "referenced ids not found");

    handler.append(ValidationError::new(format!(
        "Some {label} could not be found: {joined}"
    )))
}
