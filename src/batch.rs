use rayon::prelude::*;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::ReconstructError;
use crate::interpolate::{Arithmetic, ConstantTerm};
use crate::test_case::TestCase;

/// Id given to a document that is itself a single test case.
pub const SINGLE_CASE_ID: &str = "1";

#[derive(Debug)]
pub struct CaseReport {
    /// 1-based position in the document.
    pub index: usize,
    pub id: String,
    pub outcome: Result<ConstantTerm, ReconstructError>,
}

/// Reconstructs every test case of a document, keeping document order.
///
/// Only a document that is not a JSON object fails as a whole; a bad test case
/// shows up as an error in its own report.
pub fn reconstruct_document(
    document: &str,
    arithmetic: Arithmetic,
) -> Result<Vec<CaseReport>, ReconstructError> {
    let root: Map<String, Value> = serde_json::from_str(document)?;
    let cases: Vec<(String, Value)> = if root.contains_key("keys") {
        vec![(SINGLE_CASE_ID.to_string(), Value::Object(root))]
    } else {
        root.into_iter().collect()
    };

    let reports: Vec<CaseReport> = cases
        .into_par_iter()
        .enumerate()
        .map(|(position, (id, value))| {
            let outcome =
                TestCase::from_json(value).and_then(|case| case.find_constant_term(arithmetic));
            if let Err(err) = &outcome {
                warn!(case = %id, error = %err, "test case failed");
            }
            CaseReport {
                index: position + 1,
                id,
                outcome,
            }
        })
        .collect();

    let failed = reports.iter().filter(|r| r.outcome.is_err()).count();
    info!(cases = reports.len(), failed, ?arithmetic, "document processed");

    Ok(reports)
}
