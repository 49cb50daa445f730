//! Summary banner printed after each export

/// Render the total banner for an exported resource type
pub fn render_report(count: usize, resource: &str) -> String {
    format!(
        "#########################\n  Total: {} {}\n##############################\n",
        count, resource
    )
}
