use super::domain::Infraction;

/// Sentinel text used whenever a category has no recorded infractions.
pub const NO_INFRACTIONS: &str = "No infractions found.";

/// Render the infraction list as one line per record, in input order.
/// An empty list yields the [`NO_INFRACTIONS`] sentinel.
pub fn format_infractions(infractions: &[Infraction]) -> String {
    if infractions.is_empty() {
        return NO_INFRACTIONS.to_string();
    }

    infractions
        .iter()
        .map(infraction_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn infraction_line(infraction: &Infraction) -> String {
    // Absent fields render as empty text, never a literal placeholder.
    let rule = infraction.rule_text.as_deref().unwrap_or("");
    let output = infraction.rule_output.as_deref().unwrap_or("");
    match infraction.points {
        Some(points) => format!("- {rule}: {output} ({points} points)"),
        None => format!("- {rule}: {output}"),
    }
}
