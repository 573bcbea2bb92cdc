//! Per-team running totals used while the optimizer assigns and swaps players.
//!
//! Teams are kept in an arena (`Vec<TeamAccumulator>`) owned by one optimizer
//! call. Members are stored as indices into the pool's category profiles, so
//! nothing outside the optimizer ever sees a partially built team.

/// Running category sums and counts for one team.
#[derive(Debug, Clone)]
pub(crate) struct TeamAccumulator {
    members: Vec<usize>,
    sums: Vec<f64>,
    counts: Vec<usize>,
}

impl TeamAccumulator {
    pub(crate) fn new(num_categories: usize) -> Self {
        Self {
            members: vec![],
            sums: vec![0.0; num_categories],
            counts: vec![0; num_categories],
        }
    }

    pub(crate) fn members(&self) -> &[usize] {
        &self.members
    }

    pub(crate) fn sums(&self) -> &[f64] {
        &self.sums
    }

    pub(crate) fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    pub(crate) fn add(&mut self, player: usize, scores: &[f64]) {
        self.members.push(player);
        for (c, v) in scores.iter().enumerate() {
            self.sums[c] += v;
            self.counts[c] += 1;
        }
    }

    /// Replaces the member at `slot` with `incoming`.
    pub(crate) fn replace(
        &mut self,
        slot: usize,
        outgoing: &[f64],
        incoming: usize,
        incoming_scores: &[f64],
    ) {
        self.members[slot] = incoming;
        for (c, (out, inc)) in outgoing.iter().zip(incoming_scores).enumerate() {
            self.sums[c] += inc - out;
        }
    }

    /// Category averages; a category with no contributions averages to `None`.
    pub(crate) fn averages(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.sums.iter().zip(&self.counts).map(|(sum, count)| {
            #[expect(clippy::cast_precision_loss)]
            let count = *count as f64;
            (count > 0.0).then(|| sum / count)
        })
    }

    /// Squared distance of the team's category averages from the pool's means.
    pub(crate) fn balance_cost(&self, global_means: &[f64]) -> f64 {
        squared_error(self.sums.iter().copied(), &self.counts, global_means, 0)
    }

    /// Balance cost the team would have after accepting a player with `scores`.
    pub(crate) fn balance_cost_with(&self, scores: &[f64], global_means: &[f64]) -> f64 {
        let sums = self.sums.iter().zip(scores).map(|(s, v)| s + v);
        squared_error(sums, &self.counts, global_means, 1)
    }

    /// Balance cost the team would have after trading `outgoing` for `incoming`.
    pub(crate) fn balance_cost_swapped(
        &self,
        outgoing: &[f64],
        incoming: &[f64],
        global_means: &[f64],
    ) -> f64 {
        let sums = self
            .sums
            .iter()
            .zip(outgoing.iter().zip(incoming))
            .map(|(s, (out, inc))| s - out + inc);
        squared_error(sums, &self.counts, global_means, 0)
    }
}

fn squared_error<I>(sums: I, counts: &[usize], global_means: &[f64], extra: usize) -> f64
where
    I: Iterator<Item = f64>,
{
    sums.zip(counts)
        .zip(global_means)
        .filter(|((_, count), _)| **count + extra > 0)
        .map(|((sum, count), mean)| {
            #[expect(clippy::cast_precision_loss)]
            let n = (*count + extra) as f64;
            (sum / n - mean).powi(2)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tracks_sums_and_counts() {
        let mut team = TeamAccumulator::new(2);
        team.add(0, &[80.0, 20.0]);
        team.add(3, &[40.0, 60.0]);
        assert_eq!(team.members(), &[0, 3]);
        assert_eq!(team.sums(), &[120.0, 80.0]);
        assert_eq!(team.counts(), &[2, 2]);
        assert_eq!(team.averages().collect::<Vec<_>>(), vec![Some(60.0), Some(40.0)]);
    }

    #[test]
    fn test_empty_team_has_no_averages_and_no_cost() {
        let team = TeamAccumulator::new(2);
        assert_eq!(team.averages().collect::<Vec<_>>(), vec![None, None]);
        assert_eq!(team.balance_cost(&[50.0, 50.0]), 0.0);
    }

    #[test]
    fn test_cost_with_added_player() {
        let mut team = TeamAccumulator::new(1);
        team.add(0, &[80.0]);
        // (80 + 20) / 2 = 50 -> perfectly balanced
        assert_eq!(team.balance_cost_with(&[20.0], &[50.0]), 0.0);
        // (80 + 60) / 2 = 70 -> 20²
        assert_eq!(team.balance_cost_with(&[60.0], &[50.0]), 400.0);
        // hypothetical only
        assert_eq!(team.len(), 1);
    }

    #[test]
    fn test_swap_cost_matches_replace() {
        let means = [50.0, 50.0];
        let mut team = TeamAccumulator::new(2);
        team.add(0, &[90.0, 10.0]);
        team.add(1, &[70.0, 30.0]);

        let predicted = team.balance_cost_swapped(&[90.0, 10.0], &[30.0, 70.0], &means);
        team.replace(0, &[90.0, 10.0], 5, &[30.0, 70.0]);
        assert_eq!(team.members(), &[5, 1]);
        assert_eq!(team.balance_cost(&means), predicted);
        assert_eq!(predicted, 0.0);
    }
}
