//! Table formatting for the plans, check and editables commands

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use plancard_core::render::PricingView;
use plancard_core::{ConfigReport, EditableSlot, ErrorSeverity};
use std::path::Path;

fn header(table: &mut Table, columns: &[&str], no_color: bool) {
    if no_color {
        table.set_header(columns.to_vec());
    } else {
        table.set_header(
            columns
                .iter()
                .map(|c| Cell::new(c).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format the projected plan cards as a table
pub fn format_plans_table(view: &PricingView, no_color: bool) -> String {
    let mut table = new_table();
    header(
        &mut table,
        &["#", "Plan", "Price", "Savings", "Badge", "CTA"],
        no_color,
    );

    for card in &view.cards {
        let mut price = card.price.text.clone();
        if let Some(period) = &card.period {
            price.push_str(&period.text);
        }

        let mut name = card.name.text.clone();
        if card.popular {
            name.push_str(" *");
        }

        let badge = card
            .popular_badge
            .as_ref()
            .or(card.badge.as_ref())
            .map(|b| b.text.as_str())
            .unwrap_or("-");

        table.add_row(Row::from(vec![
            card.position.to_string(),
            name,
            price,
            card.savings.clone().unwrap_or_else(|| "-".to_string()),
            badge.to_string(),
            format!("{} -> {}", card.cta.label.text, card.cta.href),
        ]));
    }

    format!(
        "Billing: {}\n{}\n* most popular",
        view.toggle.active,
        table
    )
}

/// Format the findings of an override file check
pub fn format_report(path: &Path, report: &ConfigReport, no_color: bool) -> String {
    let (warnings, errors) = report.counts();
    let summary = format!(
        "{}: {} key(s) overridden, {} warning(s), {} error(s)",
        path.display(),
        report.overridden,
        warnings,
        errors
    );

    if report.findings.is_empty() {
        return format!("{}\nOK", summary);
    }

    let mut table = new_table();
    header(&mut table, &["Severity", "Key", "Message"], no_color);

    for finding in &report.findings {
        let severity = match finding.severity {
            ErrorSeverity::Warning => "warning",
            ErrorSeverity::Error => "error",
        };
        let severity_cell = if no_color {
            Cell::new(severity)
        } else {
            match finding.severity {
                ErrorSeverity::Warning => Cell::new(severity).fg(Color::Yellow),
                ErrorSeverity::Error => Cell::new(severity).fg(Color::Red),
            }
        };

        let message = match &finding.suggestion {
            Some(suggestion) => format!("{} ({})", finding.message, suggestion),
            None => finding.message.clone(),
        };

        table.add_row(Row::from(vec![
            severity_cell,
            Cell::new(&finding.key),
            Cell::new(message),
        ]));
    }

    format!("{}\n{}", summary, table)
}

/// Format the editable identifier table
pub fn format_editables_table(slots: &[EditableSlot], no_color: bool) -> String {
    let mut table = new_table();
    header(&mut table, &["Key", "Location", "Attribute"], no_color);

    for slot in slots {
        table.add_row(Row::from(vec![
            slot.key.to_string(),
            slot.path.clone(),
            slot.kind.attribute().to_string(),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use plancard_core::models::BillingCycle;
    use plancard_core::{PricingOverrides, ResolvedPricing};

    fn view(cycle: BillingCycle) -> PricingView {
        ResolvedPricing::resolve(&PricingOverrides::default())
            .unwrap()
            .render(cycle)
    }

    #[test]
    fn test_plans_table_monthly() {
        let output = format_plans_table(&view(BillingCycle::Monthly), true);

        assert!(output.starts_with("Billing: monthly"));
        assert!(output.contains("$29/month"));
        assert!(output.contains("Professional *"));
        assert!(output.contains("Custom"));
        assert!(!output.contains("Save $"));
    }

    #[test]
    fn test_plans_table_annual() {
        let output = format_plans_table(&view(BillingCycle::Annual), true);

        assert!(output.contains("$261/year"));
        assert!(output.contains("Save $87/year"));
        assert!(output.contains("$711/year"));
        assert!(output.contains("Save $237/year"));
    }

    #[test]
    fn test_report_clean() {
        let output = format_report(Path::new("pricing.json"), &ConfigReport::new(), true);
        assert!(output.contains("0 warning(s), 0 error(s)"));
        assert!(output.ends_with("OK"));
    }

    #[test]
    fn test_report_lists_findings() {
        let mut report = ConfigReport::new();
        report.add_warning("plan1Nmae", "Unknown content key");

        let output = format_report(Path::new("pricing.json"), &report, true);
        assert!(output.contains("1 warning(s)"));
        assert!(output.contains("plan1Nmae"));
        assert!(output.contains("warning"));
    }

    #[test]
    fn test_report_for_unreadable_file() {
        let path = Path::new("/nonexistent/plancard/pricing.json");
        let report = plancard_core::OverridesLoader::new().check(path);

        let output = format_report(path, &report, true);
        assert!(output.contains("0 key(s) overridden, 0 warning(s), 1 error(s)"));
        assert!(output.contains("Override file not found"));
        assert!(output.contains("--config"));
    }

    #[test]
    fn test_editables_table() {
        let output = format_editables_table(plancard_core::editable_slots(), true);

        assert!(output.contains("plan2CTAHref"));
        assert!(output.contains("data-editable-href"));
        assert!(output.contains("plans[2].name"));
    }
}
