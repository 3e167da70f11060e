use crate::community::{Community, CommunityKind, Directory};
use crate::error::CrierError;

/// Match `prefix` against each kind's collection key, in declared order;
/// the first kind whose key starts with the prefix wins.
///
/// Every string starts with the empty prefix, so `""` resolves to Channel.
/// Existing callers rely on that, so it is kept and regression-tested.
pub fn resolve_kind(prefix: &str) -> Option<CommunityKind> {
    CommunityKind::ALL
        .into_iter()
        .find(|kind| kind.collection_key().starts_with(prefix))
}

/// First community whose name equals `name` exactly, in list order.
pub fn find_by_name<'a>(communities: &'a [Community], name: &str) -> Option<&'a Community> {
    communities.iter().find(|community| community.name == name)
}

/// Resolves a type prefix and a target name to a concrete community
pub struct Resolver<'a> {
    directory: &'a dyn Directory,
}

impl<'a> Resolver<'a> {
    pub fn new(directory: &'a dyn Directory) -> Self {
        Self { directory }
    }

    /// All communities of the kind matching `kind_prefix`
    pub async fn list(&self, kind_prefix: &str) -> Result<Vec<Community>, CrierError> {
        let kind = resolve_kind(kind_prefix)
            .ok_or_else(|| CrierError::UnsupportedType(kind_prefix.to_string()))?;
        self.list_kind(kind).await
    }

    /// Exact-name lookup among the communities of the resolved kind
    pub async fn resolve(&self, kind_prefix: &str, name: &str) -> Result<Community, CrierError> {
        let kind = resolve_kind(kind_prefix)
            .ok_or_else(|| CrierError::UnsupportedType(kind_prefix.to_string()))?;

        let communities = self.list_kind(kind).await?;
        find_by_name(&communities, name)
            .cloned()
            .ok_or_else(|| CrierError::TargetNotFound {
                kind,
                name: name.to_string(),
            })
    }

    async fn list_kind(&self, kind: CommunityKind) -> Result<Vec<Community>, CrierError> {
        let records = self.directory.list_communities(kind).await?;
        Ok(records
            .into_iter()
            .map(|record| Community::from_record(record, kind))
            .collect())
    }
}
