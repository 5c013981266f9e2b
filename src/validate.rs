// src/validate.rs
// =============================================================================
// The validation pipeline: scan -> extract -> classify -> check -> report.
//
// How it works:
// 1. Pre-flight: the documentation root must exist (fatal otherwise)
// 2. Build the shared HTTP client once, unless external checks are disabled
// 3. For each markdown file, in scan order:
//    a. Read it (unreadable files are recorded and skipped)
//    b. Extract links and add them ALL to the total, skipped ones included
//    c. Classify each link and run the matching check
//    d. Record invalid outcomes in the report
//
// Concurrency:
// - Checks for one file go through a `buffered` stream, which runs up to
//   `concurrency` checks at once but yields results in link order. The report
//   is therefore identical whatever the concurrency setting.
// - Each external check sleeps the politeness delay before freeing its slot,
//   so at most `concurrency` requests are ever in flight.
// =============================================================================

use std::path::Path;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::checker::{
    check_local, classify, extract_links, ClassifiedTarget, ExternalChecker, ExternalTarget,
    Link, LocalTarget, ValidationOutcome,
};
use crate::config::ValidateConfig;
use crate::error::ValidateError;
use crate::report::Report;
use crate::scan;

// A link that survived classification and still needs checking
enum PendingCheck<'a> {
    Local(LocalTarget),
    External(&'a ExternalChecker, ExternalTarget),
}

// Validates every markdown file under `docs_root`
//
// Parameters:
//   docs_root: the documentation root
//   config:    run configuration
//   on_file:   called with each file path before it is read (progress output)
//
// Returns: the report, or an error if the run could not start at all
pub async fn validate_tree<F>(
    docs_root: &Path,
    config: &ValidateConfig,
    mut on_file: F,
) -> Result<Report, ValidateError>
where
    F: FnMut(&Path),
{
    let files = scan::markdown_files(docs_root)?;

    let external = if config.check_external {
        Some(ExternalChecker::new(&config.http)?)
    } else {
        None
    };

    let concurrency = config.concurrency.max(1);
    let mut report = Report::new();

    for file in files {
        on_file(&file.path);

        let content = match tokio::fs::read_to_string(&file.path).await {
            Ok(content) => content,
            Err(e) => {
                warn!(file = %file.path.display(), error = %e, "skipping unreadable file");
                report.record_unreadable(&file.path, e);
                continue;
            }
        };

        let links = extract_links(&content);
        report.record_file(links.len());

        let checks: Vec<(Link, PendingCheck<'_>)> = links
            .into_iter()
            .filter_map(|link| {
                let pending = match classify(&link.target) {
                    ClassifiedTarget::Skip(reason) => {
                        debug!(link = %link.target, ?reason, "skipped");
                        return None;
                    }
                    ClassifiedTarget::Local(target) => PendingCheck::Local(target),
                    ClassifiedTarget::External(target) => match &external {
                        Some(checker) => PendingCheck::External(checker, target),
                        None => return None,
                    },
                };
                Some((link, pending))
            })
            .collect();

        let source = file.path.as_path();
        let delay = config.politeness_delay;
        let outcomes: Vec<(Link, ValidationOutcome)> = stream::iter(checks)
            .map(|(link, pending)| async move {
                let outcome = run_check(pending, source, docs_root, delay).await;
                (link, outcome)
            })
            .buffered(concurrency)
            .collect()
            .await;

        for (link, outcome) in outcomes {
            debug!(
                file = %file.path.display(),
                link = %link.target,
                category = %outcome.category,
                valid = outcome.valid,
                reason = %outcome.reason,
                "checked"
            );
            report.record_outcome(&file.path, &link, outcome);
        }
    }

    Ok(report)
}

async fn run_check(
    pending: PendingCheck<'_>,
    source_file: &Path,
    docs_root: &Path,
    politeness_delay: Duration,
) -> ValidationOutcome {
    match pending {
        PendingCheck::Local(target) => {
            if let Some(fragment) = &target.fragment {
                debug!(%fragment, "fragment is not verified");
            }
            check_local(&target, source_file, docs_root)
        }
        PendingCheck::External(checker, target) => {
            if let Some(fragment) = &target.fragment {
                debug!(%fragment, "fragment is not verified");
            }
            let outcome = checker.check(&target.url).await;
            // Be nice to external servers, whatever the result
            tokio::time::sleep(politeness_delay).await;
            outcome
        }
    }
}
