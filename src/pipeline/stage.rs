use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::candidate::Candidate;

/// The fixed hiring pipeline. Column order on the board follows the
/// declaration order; transitions between stages are unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Applied,
    Screening,
    Interview,
    Offer,
    Hired,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Applied,
        Stage::Screening,
        Stage::Interview,
        Stage::Offer,
        Stage::Hired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Applied => "Applied",
            Stage::Screening => "Screening",
            Stage::Interview => "Interview",
            Stage::Offer => "Offer",
            Stage::Hired => "Hired",
        }
    }

    pub fn parse(value: &str) -> Option<Stage> {
        Stage::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership predicate over the fixed stage set.
pub fn is_stage(value: &str) -> bool {
    Stage::parse(value).is_some()
}

/// Stable partition of candidates into pipeline columns. Relative order
/// within a column matches the input order; column order always follows
/// `Stage::ALL` regardless of data order.
pub fn group_by_stage(candidates: &[Candidate]) -> Vec<(Stage, Vec<&Candidate>)> {
    Stage::ALL
        .iter()
        .map(|&stage| {
            let group = candidates
                .iter()
                .filter(|c| c.stage == stage.as_str())
                .collect();
            (stage, group)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn candidate(name: &str, stage: &str) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            job_id: Uuid::new_v4(),
            name: name.to_string(),
            linkedin_url: None,
            stage: stage.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn recognizes_every_pipeline_stage() {
        for stage in Stage::ALL {
            assert!(is_stage(stage.as_str()));
            assert_eq!(Stage::parse(stage.as_str()), Some(stage));
        }
    }

    #[test]
    fn rejects_unknown_stage_values() {
        assert!(!is_stage("applied"));
        assert!(!is_stage("Rejected"));
        assert!(!is_stage(""));
    }

    #[test]
    fn groups_cover_every_candidate_exactly_once() {
        let candidates = vec![
            candidate("a", "Hired"),
            candidate("b", "Applied"),
            candidate("c", "Screening"),
            candidate("d", "Applied"),
            candidate("e", "Offer"),
        ];

        let groups = group_by_stage(&candidates);
        let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
        assert_eq!(total, candidates.len());

        for c in &candidates {
            let containing = groups
                .iter()
                .filter(|(_, g)| g.iter().any(|x| x.id == c.id))
                .count();
            assert_eq!(containing, 1, "{} should land in exactly one column", c.name);
        }
    }

    #[test]
    fn preserves_relative_order_within_a_column() {
        let candidates = vec![
            candidate("first", "Applied"),
            candidate("other", "Interview"),
            candidate("second", "Applied"),
            candidate("third", "Applied"),
        ];

        let groups = group_by_stage(&candidates);
        let applied: Vec<&str> = groups[0].1.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(applied, vec!["first", "second", "third"]);
    }

    #[test]
    fn column_order_follows_the_pipeline_not_the_data() {
        let candidates = vec![candidate("z", "Hired"), candidate("a", "Applied")];
        let groups = group_by_stage(&candidates);
        let order: Vec<Stage> = groups.iter().map(|(s, _)| *s).collect();
        assert_eq!(order.as_slice(), Stage::ALL.as_slice());
    }
}
