use std::collections::HashSet;

use crate::record::AssertionRecord;

/// Comment marking an assertion that has to be checked by hand.
pub const MANUAL_FLAG: &str = "not testable with Assertion Tester";

/// Status written for every carried-over or new assertion.
pub const UNSET_STATUS: &str = "null";

/// The four buckets a reconciliation sorts assertions into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconciliation {
    /// Previously implemented assertions that are still in the master table.
    pub implemented: Vec<AssertionRecord>,
    /// Assertions to be checked by hand, carried over or new.
    pub manual: Vec<AssertionRecord>,
    /// New assertions nobody has looked at yet. Also listed in `manual`.
    pub needs_review: Vec<AssertionRecord>,
    /// Previously implemented assertions no longer in the master table.
    pub old: Vec<AssertionRecord>,
}

/// Sort the pre-implemented table against the master assertion table.
///
/// Entries keep the order of the table they come from. Carried-over entries
/// keep their previous assertion text; new manual entries take the master text.
pub fn reconcile(
    assertions: &[AssertionRecord],
    pre_implemented: Vec<AssertionRecord>,
    manual_flag: &str,
) -> Reconciliation {
    let master_ids: HashSet<&str> = assertions.iter().map(|a| a.id.as_str()).collect();
    let mut result = Reconciliation::default();

    for record in pre_implemented {
        if !master_ids.contains(record.id.as_str()) {
            result.old.push(AssertionRecord {
                id: record.id,
                status: None,
                comment: Some(manual_flag.to_string()),
                assertion: record.assertion,
            });
        } else if record.comment.as_deref() == Some(manual_flag) {
            result.manual.push(manual_entry(record.id, record.assertion, manual_flag));
        } else {
            result.implemented.push(AssertionRecord {
                status: Some(UNSET_STATUS.to_string()),
                comment: None,
                ..record
            });
        }
    }

    let mut known: HashSet<String> = result
        .implemented
        .iter()
        .chain(&result.manual)
        .map(|r| r.id.clone())
        .collect();

    for assertion in assertions {
        if known.insert(assertion.id.clone()) {
            let entry =
                manual_entry(assertion.id.clone(), assertion.assertion.clone(), manual_flag);
            result.needs_review.push(entry.clone());
            result.manual.push(entry);
        }
    }

    result
}

fn manual_entry(id: String, assertion: String, manual_flag: &str) -> AssertionRecord {
    AssertionRecord {
        id,
        status: Some(UNSET_STATUS.to_string()),
        comment: Some(manual_flag.to_string()),
        assertion,
    }
}
