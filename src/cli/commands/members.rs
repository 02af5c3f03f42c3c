//! Roster commands - add, remove, list, history, overdue

use crate::core::types::{BorrowLimit, MemberId, MembershipTier};
use crate::service::{LendingError, LendingService};
use crate::ui::output;
use crate::ui::Verbosity;

/// Register a member.
pub fn add_member(
    service: &LendingService,
    name: String,
    tier: MembershipTier,
    limit: Option<u32>,
    verbosity: Verbosity,
) -> Result<(), LendingError> {
    let limit = match limit {
        Some(raw) => match BorrowLimit::new(raw) {
            Ok(limit) => Some(limit),
            Err(err) => {
                output::error(err);
                return Ok(());
            }
        },
        None => None,
    };

    let member = service.register_member(name, tier, limit)?;
    output::print(
        format!("Registered: {}", output::format_member(&member)),
        verbosity,
    );
    Ok(())
}

/// Remove a member from the roster.
pub fn remove_member(
    service: &LendingService,
    member: MemberId,
    verbosity: Verbosity,
) -> Result<(), LendingError> {
    service.remove_member(member)?;
    output::print(format!("Removed member #{}.", member), verbosity);
    Ok(())
}

/// List the roster.
pub fn list(service: &LendingService, verbosity: Verbosity) -> Result<(), LendingError> {
    let members = service.list_members()?;
    if members.is_empty() {
        output::print("No members registered.", verbosity);
        return Ok(());
    }
    for member in &members {
        output::print(output::format_member(member), verbosity);
    }
    Ok(())
}

/// Show a member's borrowing history.
pub fn history(
    service: &LendingService,
    member: MemberId,
    json: bool,
    verbosity: Verbosity,
) -> Result<(), LendingError> {
    if json {
        let events = service.member_history(member)?;
        match serde_json::to_string_pretty(&events) {
            // Machine output bypasses the quiet flag.
            Ok(rendered) => println!("{}", rendered),
            Err(err) => output::error(err),
        }
        return Ok(());
    }

    let export = service.export_member_history(member)?;
    output::print(export.trim_end(), verbosity);
    Ok(())
}

/// List members with overdue loans.
pub fn overdue(service: &LendingService, verbosity: Verbosity) -> Result<(), LendingError> {
    let report = service.overdue_report()?;
    if report.is_empty() {
        output::print("No overdue loans.", verbosity);
        return Ok(());
    }

    for entry in &report {
        output::print(output::format_member(&entry.member), verbosity);
        for record in &entry.records {
            let title = super::book_label(service, record.book_id());
            output::print(
                format!("  {}", output::format_loan(record, &title)),
                verbosity,
            );
        }
    }
    Ok(())
}
