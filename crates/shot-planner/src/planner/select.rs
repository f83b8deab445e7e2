use super::evaluate::Candidate;
use crate::difficulty::DifficultyProfile;
use crate::rng::RandomSource;

/// Chance of taking the best shot when the profile allows variety.
pub const BEST_SHOT_CHANCE: f32 = 0.7;
/// Variety picks come from this many top candidates.
pub const TOP_PICK: usize = 3;

/// Sort by descending score. Ties keep their generation order.
pub fn rank_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Pick one of the ranked candidates.
///
/// `prefer_easy_shots` always takes the best; otherwise the best with
/// probability [`BEST_SHOT_CHANCE`], else a uniform pick from the top
/// [`TOP_PICK`].
pub fn select_candidate<R: RandomSource + ?Sized>(
    ranked: &[Candidate],
    profile: &DifficultyProfile,
    rng: &mut R,
) -> Option<Candidate> {
    let best = *ranked.first()?;
    if profile.prefer_easy_shots || rng.chance(BEST_SHOT_CHANCE) {
        return Some(best);
    }
    let pool = ranked.len().min(TOP_PICK);
    Some(ranked[rng.index(pool)])
}
