//! Per-entity delete policy.
//!
//! Each entity is either hard-deleted (row removed) or soft-deleted
//! (`deleted_at` set). Deleting a row also deletes its dependents according
//! to the cascade list of its entity kind; a cascaded row is deleted with the
//! *target's* own delete kind and in turn triggers the target's cascades.
//!
//! | Entity      | Kind | Cascades                                   |
//! |-------------|------|--------------------------------------------|
//! | User        | hard | Star (user_id), ViewHistory (user_id)      |
//! | Toon        | hard | Episode (toon_id), Star (toon_id)          |
//! | Episode     | hard | ViewHistory (episode_id)                   |
//! | Star        | soft | -                                          |
//! | ViewHistory | soft | -                                          |

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Toon,
    Episode,
    Star,
    ViewHistory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteKind {
    /// Physically remove the row.
    Hard,
    /// Set `deleted_at`; the row stays but is invisible to reads and updates.
    Soft,
}

/// A dependent entity reached from a deleted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cascade {
    pub target: EntityKind,
    /// Column on the target that holds the deleted row's primary key.
    pub foreign_key: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePolicy {
    pub kind: DeleteKind,
    pub cascades: &'static [Cascade],
}

const USER_CASCADES: &[Cascade] = &[
    Cascade {
        target: EntityKind::Star,
        foreign_key: "user_id",
    },
    Cascade {
        target: EntityKind::ViewHistory,
        foreign_key: "user_id",
    },
];

const TOON_CASCADES: &[Cascade] = &[
    Cascade {
        target: EntityKind::Episode,
        foreign_key: "toon_id",
    },
    Cascade {
        target: EntityKind::Star,
        foreign_key: "toon_id",
    },
];

const EPISODE_CASCADES: &[Cascade] = &[Cascade {
    target: EntityKind::ViewHistory,
    foreign_key: "episode_id",
}];

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::User,
        EntityKind::Toon,
        EntityKind::Episode,
        EntityKind::Star,
        EntityKind::ViewHistory,
    ];

    /// Human-readable name used in error messages.
    pub const fn label(self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::Toon => "Toon",
            EntityKind::Episode => "Episode",
            EntityKind::Star => "Star",
            EntityKind::ViewHistory => "ViewHistory",
        }
    }

    pub const fn delete_policy(self) -> DeletePolicy {
        match self {
            EntityKind::User => DeletePolicy {
                kind: DeleteKind::Hard,
                cascades: USER_CASCADES,
            },
            EntityKind::Toon => DeletePolicy {
                kind: DeleteKind::Hard,
                cascades: TOON_CASCADES,
            },
            EntityKind::Episode => DeletePolicy {
                kind: DeleteKind::Hard,
                cascades: EPISODE_CASCADES,
            },
            EntityKind::Star | EntityKind::ViewHistory => DeletePolicy {
                kind: DeleteKind::Soft,
                cascades: &[],
            },
        }
    }

    pub const fn is_soft_deletable(self) -> bool {
        matches!(self.delete_policy().kind, DeleteKind::Soft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(kind: EntityKind) -> Vec<EntityKind> {
        kind.delete_policy()
            .cascades
            .iter()
            .map(|c| c.target)
            .collect()
    }

    #[test]
    fn only_star_and_history_are_soft_deleted() {
        let soft: Vec<_> = EntityKind::ALL
            .into_iter()
            .filter(|k| k.is_soft_deletable())
            .collect();
        assert_eq!(soft, vec![EntityKind::Star, EntityKind::ViewHistory]);
    }

    #[test]
    fn user_cascades_to_stars_and_history() {
        assert_eq!(
            targets(EntityKind::User),
            vec![EntityKind::Star, EntityKind::ViewHistory]
        );
        assert!(EntityKind::User
            .delete_policy()
            .cascades
            .iter()
            .all(|c| c.foreign_key == "user_id"));
    }

    #[test]
    fn toon_cascades_to_episodes_and_stars() {
        assert_eq!(
            targets(EntityKind::Toon),
            vec![EntityKind::Episode, EntityKind::Star]
        );
    }

    #[test]
    fn episode_cascades_to_history() {
        assert_eq!(targets(EntityKind::Episode), vec![EntityKind::ViewHistory]);
    }

    #[test]
    fn soft_deleted_kinds_have_no_cascades() {
        for kind in EntityKind::ALL {
            if kind.is_soft_deletable() {
                assert!(kind.delete_policy().cascades.is_empty(), "{kind:?}");
            }
        }
    }
}
