//! Pretty output formatting for race launches

use crate::race::LaunchParameters;
use crate::starter::WorkflowHandle;
use console::style;

/// Format the race about to be started
pub fn format_race(params: &LaunchParameters, domain: &str, workflow_type: &str) {
    println!("\n{}", "═".repeat(80));
    println!(
        "{} {} {}",
        style("▶").cyan().bold(),
        style("Race:").bold(),
        style(workflow_type).cyan().bold()
    );
    println!("  {} {}", style("Domain:").dim(), style(domain).dim());
    println!("  {} {}", style("Laps:").dim(), params.laps());
    println!("  {}", style("Horses:").dim());
    for (lane, horse) in params.participants().iter().enumerate() {
        println!("    {} {}", style(format!("{:>2}.", lane + 1)).dim(), horse);
    }
    println!("{}", "─".repeat(80));
}

/// Format a successfully started workflow execution
pub fn format_started(handle: &WorkflowHandle) {
    println!(
        "{} {}",
        style("✓").green().bold(),
        style("Race started").green().bold()
    );
    println!(
        "  {} {}",
        style("Workflow ID:").dim(),
        style(&handle.workflow_id).cyan()
    );
    println!(
        "  {} {}",
        style("Run ID:").dim(),
        style(&handle.run_id).cyan()
    );
    println!("{}", "═".repeat(80));
}

/// Format a launch failure on stderr
pub fn format_error(error: &dyn std::error::Error) {
    eprintln!(
        "{} {}",
        style("✗").red().bold(),
        style(error.to_string()).red()
    );
}
