use crate::domain::VersionRecord;
use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Print the full version report for an installation.
///
/// Absent optional fields are reported explicitly rather than omitted, so the
/// output shape is stable across installations.
pub fn display_version_report(record: &VersionRecord, source: &str) {
    println!("\n{}", style(format!("ISIS version from {}", source)).bold());
    println!("  Version:       {}", style(record.to_string()).green());
    match record.release_level {
        Some(level) => println!("  Release level: {}", level),
        None => println!("  Release level: (not recorded)"),
    }
    match record.release_date {
        Some(date) => println!("  Release date:  {}", date),
        None => println!("  Release date:  (not recorded)"),
    }
}
