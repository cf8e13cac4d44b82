//! Quiz assembly over a target Bloom's distribution.

use std::collections::BTreeMap;

use pedagogy_core::{BloomsDistribution, BloomsLevel, Question, StudentProfile};
use tracing::{debug, info};

use crate::selector::ItemSelector;

/// Builds a quiz by running the [`ItemSelector`] level by level.
#[derive(Debug, Clone, Default)]
pub struct QuizAssembler {
    selector: ItemSelector,
}

impl QuizAssembler {
    pub fn new(selector: ItemSelector) -> Self {
        Self { selector }
    }

    pub fn selector(&self) -> &ItemSelector {
        &self.selector
    }

    /// Per-level question counts for a quiz of `target_count` items.
    ///
    /// Each level gets `floor(target_count × weight)`; any rounding shortfall
    /// goes to `Apply`. Non-finite or negative weights count as zero.
    pub fn level_quotas(
        target_count: usize,
        distribution: &BloomsDistribution,
    ) -> BTreeMap<BloomsLevel, usize> {
        let mut quotas: BTreeMap<BloomsLevel, usize> = distribution
            .iter()
            .map(|(level, weight)| {
                let share = if weight.is_finite() && weight > 0.0 {
                    (target_count as f64 * weight).floor() as usize
                } else {
                    0
                };
                (level, share)
            })
            .collect();

        let assigned = quotas.values().fold(0usize, |acc, n| acc.saturating_add(*n));
        if assigned < target_count {
            *quotas.entry(BloomsLevel::Apply).or_insert(0) += target_count - assigned;
        }
        quotas
    }

    /// Assemble up to `target_count` questions from `pool`.
    ///
    /// Levels are filled in taxonomy order, each by repeated selection
    /// targeted at that level; leftover slots are then filled with untargeted
    /// selection over whatever remains. A chosen id is removed from the pool,
    /// so the result never repeats an id. A short pool gives a short quiz.
    pub fn assemble(
        &self,
        profile: &StudentProfile,
        pool: &[Question],
        target_count: usize,
        distribution: Option<&BloomsDistribution>,
    ) -> Vec<Question> {
        let default_distribution = BloomsDistribution::default();
        let distribution = distribution.unwrap_or(&default_distribution);

        let quotas = Self::level_quotas(target_count, distribution);
        let mut remaining: Vec<&Question> = pool.iter().collect();
        let mut selected: Vec<Question> = Vec::with_capacity(target_count.min(pool.len()));

        for (level, quota) in quotas {
            let mut level_candidates: Vec<&Question> = remaining
                .iter()
                .copied()
                .filter(|q| q.blooms_level == level)
                .collect();
            let picks = quota.min(level_candidates.len());

            for _ in 0..picks {
                if selected.len() >= target_count {
                    break;
                }
                let Some(chosen) = self.selector.select_from(
                    profile,
                    level_candidates.iter().copied(),
                    Some(level),
                ) else {
                    break;
                };
                remaining.retain(|q| q.id != chosen.id);
                level_candidates.retain(|q| q.id != chosen.id);
                selected.push(chosen.clone());
            }

            debug!(level = %level, quota, filled = selected.len(), "level pass complete");
        }

        while selected.len() < target_count && !remaining.is_empty() {
            let Some(chosen) = self
                .selector
                .select_from(profile, remaining.iter().copied(), None)
            else {
                break;
            };
            remaining.retain(|q| q.id != chosen.id);
            selected.push(chosen.clone());
        }

        info!(
            user_id = %profile.user_id,
            requested = target_count,
            assembled = selected.len(),
            pool_size = pool.len(),
            "quiz assembled"
        );

        selected
    }
}
