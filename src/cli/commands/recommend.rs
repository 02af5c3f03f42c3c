//! recommend command - rank available books for a member

use crate::core::types::MemberId;
use crate::service::{LendingError, LendingService};
use crate::ui::output;
use crate::ui::Verbosity;

use super::member_label;

/// Print the full ranked candidate list for a member.
pub fn recommend(
    service: &LendingService,
    member: MemberId,
    verbosity: Verbosity,
) -> Result<(), LendingError> {
    let ranked = service.recommend(member)?;
    if ranked.is_empty() {
        output::print("Nothing to recommend right now.", verbosity);
        return Ok(());
    }

    output::print(
        format!("Recommendations for {}:", member_label(service, member)),
        verbosity,
    );
    for rec in &ranked {
        output::print(
            format!("  {}", output::format_recommendation(rec)),
            verbosity,
        );
    }
    Ok(())
}
