use tracing::debug;

use super::CalculationResult;

/// Hard ceiling on the number of results handed back to callers.
pub const RESULT_LIMIT: usize = 100;

/// Sort by trigger count, most first, then keep at most `limit` entries.
/// The sort is stable: equal counts stay in expansion order.
pub fn rank_results(mut results: Vec<CalculationResult>, limit: usize) -> Vec<CalculationResult> {
    let evaluated = results.len();
    results.sort_by(|a, b| b.skill_count.cmp(&a.skill_count));
    results.truncate(limit);
    debug!(
        evaluated,
        kept = results.len(),
        best = results.first().map(|r| r.skill_count).unwrap_or(0),
        "ranked results"
    );
    results
}
