use crate::shortcuts::ShortcutStore;
use crate::week::current_week_id;
use std::path::{Path, PathBuf};

pub const REPORTS_DIR: &str = "reports";

/// Every shortcut paired with its click count for `week`, sorted by count
/// descending. Shortcuts with no activity that week are included at 0. The
/// sort is stable, so ties keep the store's name order.
pub fn weekly_ranking(store: &ShortcutStore, week: &str) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = store
        .shortcuts
        .iter()
        .map(|(name, entry)| {
            let count = entry.weekly_clicks.get(week).copied().unwrap_or(0);
            (name.clone(), count)
        })
        .collect();
    ranked.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
    ranked
}

/// Render the report text for `week` from an already ranked sequence.
///
/// "Most Used" lists the top five, "Least Used" the last five of the same
/// descending sequence in its existing order. With five or fewer shortcuts
/// the sections overlap; that mirrors the ranking honestly and is kept as-is.
pub fn render_report(week: &str, ranked: &[(String, u64)]) -> String {
    let mut text = format!("Weekly Usage Report {week}\n\n");

    text.push_str("Most Used:\n");
    for (name, count) in ranked.iter().take(5) {
        text.push_str(&format!("{name}: {count}\n"));
    }

    text.push_str("\nLeast Used:\n");
    let tail_start = ranked.len().saturating_sub(5);
    for (name, count) in &ranked[tail_start..] {
        text.push_str(&format!("{name}: {count}\n"));
    }

    text
}

/// Path of the report artifact for `week` inside `reports_dir`.
pub fn report_path(reports_dir: &Path, week: &str) -> PathBuf {
    reports_dir.join(format!("report_{week}.txt"))
}

/// Generate the current week's report, persist it under `reports_dir` and
/// return the text for display.
///
/// Regenerating within the same week overwrites the prior artifact. A write
/// failure aborts the operation with no partial report left behind.
pub fn generate_report(store: &ShortcutStore, reports_dir: &Path) -> anyhow::Result<String> {
    let week = current_week_id();
    let ranked = weekly_ranking(store, &week);
    let text = render_report(&week, &ranked);

    std::fs::create_dir_all(reports_dir)?;
    std::fs::write(report_path(reports_dir, &week), &text)?;
    tracing::info!("wrote weekly report for {week} ({} shortcuts)", ranked.len());
    Ok(text)
}
