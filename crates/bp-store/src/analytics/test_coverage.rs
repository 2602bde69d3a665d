//! Workflow × persona test coverage.

use std::collections::BTreeMap;

use bp_core::entities::{Entity, TestResult};
use bp_core::enums::EntityKind;
use bp_core::responses::{CombinationCoverage, TestCoverageReport};

use crate::index::{EntityLookup, Index};

#[must_use]
pub fn test_coverage(index: &Index) -> TestCoverageReport {
    let mut by_pair: BTreeMap<(&str, &str), Vec<&TestResult>> = BTreeMap::new();
    let mut stale_results = Vec::new();

    for entity in index.iter_kind(EntityKind::TestResult) {
        let Entity::TestResult(result) = entity else {
            continue;
        };
        if index.exists(EntityKind::Workflow, &result.workflow_id)
            && index.exists(EntityKind::Persona, &result.persona_id)
        {
            by_pair
                .entry((result.workflow_id.as_str(), result.persona_id.as_str()))
                .or_default()
                .push(result);
        } else {
            stale_results.push(result.id.clone());
        }
    }

    let mut combinations = Vec::new();
    for workflow in index.iter_kind(EntityKind::Workflow) {
        for persona in index.iter_kind(EntityKind::Persona) {
            let results: &[&TestResult] = match by_pair.get(&(workflow.id(), persona.id())) {
                Some(results) => results,
                None => &[],
            };
            combinations.push(combination(workflow.id(), persona.id(), results));
        }
    }

    let possible_combinations = combinations.len();
    let tested_combinations = combinations.iter().filter(|c| c.tested).count();

    TestCoverageReport {
        possible_combinations,
        tested_combinations,
        coverage_percentage: percentage(tested_combinations, possible_combinations),
        combinations,
        stale_results,
    }
}

fn combination(workflow_id: &str, persona_id: &str, results: &[&TestResult]) -> CombinationCoverage {
    let simulated_tests = results.iter().filter(|r| r.simulated).count();
    // Latest by date, ties broken by the larger ID.
    let latest = results
        .iter()
        .max_by(|a, b| a.tested_at.cmp(&b.tested_at).then_with(|| a.id.cmp(&b.id)));

    CombinationCoverage {
        workflow_id: workflow_id.to_string(),
        persona_id: persona_id.to_string(),
        tested: !results.is_empty(),
        total_tests: results.len(),
        simulated_tests,
        real_tests: results.len() - simulated_tests,
        latest_result: latest.map(|r| r.id.clone()),
        latest_tested_at: latest.map(|r| r.tested_at),
        latest_outcome: latest.map(|r| r.outcome),
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
