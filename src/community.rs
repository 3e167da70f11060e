use crate::error::CrierError;
use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;

/// The two addressable destination kinds on the platform.
///
/// Resolution iterates the kinds in declared order, so Channel wins ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityKind {
    Channel,
    Group,
}

impl CommunityKind {
    /// Kinds in resolution order.
    pub const ALL: [CommunityKind; 2] = [CommunityKind::Channel, CommunityKind::Group];

    /// Pluralized API-facing name, used both as the listing endpoint suffix
    /// and as the results key of the response envelope.
    pub fn collection_key(self) -> &'static str {
        match self {
            CommunityKind::Channel => "channels",
            CommunityKind::Group => "groups",
        }
    }

    /// API method that lists communities of this kind.
    pub fn list_method(self) -> String {
        format!("{}.list", self.collection_key())
    }
}

impl fmt::Display for CommunityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CommunityKind::Channel => "channel",
            CommunityKind::Group => "group",
        })
    }
}

/// One entry of a list response. Absent fields decode to empty strings,
/// never to null.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CommunityRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A named destination that can receive a posted message.
#[derive(Debug, Clone, PartialEq)]
pub struct Community {
    /// Opaque remote identifier
    pub id: String,
    /// Display name
    pub name: String,
    pub kind: CommunityKind,
}

impl Community {
    pub fn from_record(record: CommunityRecord, kind: CommunityKind) -> Self {
        Self {
            id: record.id,
            name: record.name,
            kind,
        }
    }

    /// Human-facing label: `#general` for channels, `ops group` for groups.
    pub fn label(&self) -> String {
        match self.kind {
            CommunityKind::Channel => format!("#{}", self.name),
            CommunityKind::Group => format!("{} group", self.name),
        }
    }
}

/// Trait for anything that can enumerate the communities of a kind
#[async_trait]
pub trait Directory: Send + Sync {
    /// Fetch all communities of `kind` as raw records
    async fn list_communities(
        &self,
        kind: CommunityKind,
    ) -> Result<Vec<CommunityRecord>, CrierError>;
}
