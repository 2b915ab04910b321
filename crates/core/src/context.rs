//! Per-email differentiation context.
//!
//! Each email of a flow is generated independently, so every prompt needs
//! to know what the sibling emails cover. The context is instructional
//! text only; nothing enforces that the model honours it.

use serde::{Deserialize, Serialize};

use crate::flow_type::FlowType;
use crate::strategy::{EmailStrategy, FlowStrategy};

/// Differentiation context for one email of a flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowContext {
    pub flow_type: FlowType,
    pub total_emails: u32,
    pub current_email_number: u32,
    /// `"Email N: <theme> (Focus: <focus>)"` for every other email, one per line.
    pub other_emails: String,
    /// Comma-joined summary of the emails sent before this one.
    pub previous_emails: String,
    /// Comma-joined summary of the emails sent after this one.
    pub upcoming_emails: String,
    pub unique_focus: String,
}

fn other_line(entry: &EmailStrategy) -> String {
    format!(
        "Email {}: {} (Focus: {})",
        entry.email_number, entry.theme, entry.focus
    )
}

fn short_summary(entries: &[EmailStrategy]) -> String {
    entries
        .iter()
        .map(|e| format!("{} - {}", e.theme, e.focus))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the context for the email at `index` (0-based).
///
/// # Panics
///
/// Panics if `index` is out of bounds for the strategy's emails.
pub fn assemble_context(strategy: &FlowStrategy, index: usize) -> FlowContext {
    let emails = &strategy.email_strategies;
    let current = &emails[index];

    let other_emails = emails
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, e)| other_line(e))
        .collect::<Vec<_>>()
        .join("\n");

    FlowContext {
        flow_type: strategy.flow_type,
        total_emails: emails.len() as u32,
        current_email_number: index as u32 + 1,
        other_emails,
        previous_emails: short_summary(&emails[..index]),
        upcoming_emails: short_summary(&emails[index + 1..]),
        unique_focus: current.focus.clone(),
    }
}

/// Build every context of a strategy up front, in email order.
pub fn assemble_contexts(strategy: &FlowStrategy) -> Vec<FlowContext> {
    (0..strategy.email_strategies.len())
        .map(|i| assemble_context(strategy, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::BrandProfile;
    use crate::strategy::build_strategy;

    fn welcome(count: u32) -> FlowStrategy {
        let brand = BrandProfile {
            name: "Acme".into(),
            ..Default::default()
        };
        build_strategy(FlowType::Welcome, count, "10% off", &brand, vec![]).unwrap()
    }

    #[test]
    fn never_includes_itself() {
        let strategy = welcome(5);
        for (i, ctx) in assemble_contexts(&strategy).iter().enumerate() {
            let own = other_line(&strategy.email_strategies[i]);
            assert!(!ctx.other_emails.lines().any(|l| l == own));
            assert_eq!(ctx.other_emails.lines().count(), 4);
            assert_eq!(ctx.current_email_number as usize, i + 1);
            assert_eq!(ctx.unique_focus, strategy.email_strategies[i].focus);
        }
    }

    #[test]
    fn first_has_no_previous_and_last_has_no_upcoming() {
        let strategy = welcome(3);
        let contexts = assemble_contexts(&strategy);
        assert!(contexts[0].previous_emails.is_empty());
        assert!(!contexts[0].upcoming_emails.is_empty());
        assert!(contexts[2].upcoming_emails.is_empty());
        assert!(contexts[2]
            .previous_emails
            .starts_with("Welcome to the Acme Family - "));
    }

    #[test]
    fn single_email_flow_has_empty_summaries() {
        let ctx = assemble_context(&welcome(1), 0);
        assert!(ctx.other_emails.is_empty());
        assert!(ctx.previous_emails.is_empty());
        assert!(ctx.upcoming_emails.is_empty());
        assert_eq!(ctx.total_emails, 1);
    }

    #[test]
    fn other_emails_format() {
        let ctx = assemble_context(&welcome(2), 1);
        assert_eq!(
            ctx.other_emails,
            "Email 1: Welcome to the Acme Family (Focus: Warm welcome and brand introduction)"
        );
    }
}
