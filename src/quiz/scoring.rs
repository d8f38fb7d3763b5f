use std::collections::BTreeSet;

use crate::quiz::error::{QuizError, Result};
use crate::quiz::{Answer, Question};

/// Per-flavor points, kept in seeding order so that a tie resolves to the
/// earliest entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreTally {
    entries: Vec<(String, u32)>,
}

impl ScoreTally {
    /// Zeroed tally for every flavor scored anywhere in `questions`.
    ///
    /// Flavors on the priority list come first, in list order; the rest
    /// follow in lexicographic order.
    pub fn seeded(questions: &[Question], priority: &[String]) -> Self {
        let scored: BTreeSet<&str> = questions
            .iter()
            .flat_map(|q| q.answers.iter())
            .flat_map(|a| a.scores.keys())
            .map(String::as_str)
            .collect();

        let mut entries: Vec<(String, u32)> = priority
            .iter()
            .filter(|id| scored.contains(id.as_str()))
            .map(|id| (id.clone(), 0))
            .collect();
        for id in scored {
            if !priority.iter().any(|p| p == id) {
                entries.push((id.to_string(), 0));
            }
        }

        Self { entries }
    }

    /// Adds an answer's contributions. Flavors outside the seed are ignored.
    /// Fails without touching the tally if any total would overflow.
    pub fn add(&mut self, answer: &Answer) -> Result<()> {
        let mut updated = Vec::with_capacity(self.entries.len());
        for (flavor, points) in &self.entries {
            let gain = answer.scores.get(flavor.as_str()).copied().unwrap_or(0);
            let total = points
                .checked_add(gain)
                .ok_or_else(|| QuizError::ScoreOverflow(flavor.clone()))?;
            updated.push(total);
        }
        for ((_, points), total) in self.entries.iter_mut().zip(updated) {
            *points = total;
        }
        Ok(())
    }

    pub fn points(&self, flavor_id: &str) -> u32 {
        self.entries
            .iter()
            .find(|(id, _)| id == flavor_id)
            .map_or(0, |(_, points)| *points)
    }

    /// Highest scoring flavor; ties go to the earliest seeded flavor.
    pub fn leader(&self) -> Option<&str> {
        let mut best: Option<&(String, u32)> = None;
        for entry in &self.entries {
            match best {
                Some((_, top)) if entry.1 <= *top => {}
                _ => best = Some(entry),
            }
        }
        best.map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(id, points)| (id.as_str(), *points))
    }
}
