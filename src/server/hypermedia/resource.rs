//! Resource types exposed through the API and their static link vocabulary.
//!
//! Relation names produced here are part of the public contract consumed by API
//! clients. Renaming any of them is a breaking change.

use std::fmt;

/// Category of domain entity exposed through the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceType {
    Coach,
    Hall,
    Team,
    TrainingSession,
    RoleCoach,
}

impl ResourceType {
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Coach,
        ResourceType::Hall,
        ResourceType::Team,
        ResourceType::TrainingSession,
        ResourceType::RoleCoach,
    ];

    /// Route prefix for the resource collection.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Coach => "/api/coaches",
            Self::Hall => "/api/halls",
            Self::Team => "/api/teams",
            Self::TrainingSession => "/api/training-sessions",
            Self::RoleCoach => "/api/role-coaches",
        }
    }

    /// Relation name of the collection link, also used as the `_embedded` key of
    /// collection wrappers.
    pub const fn collection_rel(self) -> &'static str {
        match self {
            Self::Coach => "coaches",
            Self::Hall => "halls",
            Self::Team => "teams",
            Self::TrainingSession => "trainingSessions",
            Self::RoleCoach => "roleCoaches",
        }
    }

    /// Relation name of the untemplated full-collection link.
    pub const fn all_rel(self) -> &'static str {
        match self {
            Self::Coach => "allCoaches",
            Self::Hall => "allHalls",
            Self::Team => "allTeams",
            Self::TrainingSession => "allTrainingSessions",
            Self::RoleCoach => "allRoleCoaches",
        }
    }

    /// Relation name used when a single instance is referenced or embedded.
    pub const fn item_rel(self) -> &'static str {
        match self {
            Self::Coach => "coach",
            Self::Hall => "hall",
            Self::Team => "team",
            Self::TrainingSession => "trainingSession",
            Self::RoleCoach => "roleCoach",
        }
    }

    /// Resource types embedded one level deep in this type's representation.
    ///
    /// This declaration is the only place embedding is allowed; it never contains an
    /// inverse edge back to a referencing type, so the representation graph is a DAG even
    /// though the persisted entity graph has cycles (Team ↔ TrainingSession ↔ Hall,
    /// Team ↔ RoleCoach ↔ Coach).
    pub const fn embeds(self) -> &'static [ResourceType] {
        match self {
            Self::Coach | Self::Hall => &[],
            Self::TrainingSession => &[ResourceType::Hall],
            Self::RoleCoach => &[ResourceType::Coach],
            Self::Team => &[ResourceType::TrainingSession, ResourceType::RoleCoach],
        }
    }

    pub fn declares_embedding_of(self, child: ResourceType) -> bool {
        self.embeds().contains(&child)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.item_rel())
    }
}
