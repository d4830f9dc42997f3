use crate::pipeline::stage4_report::FinalSummary;
use crate::report::ReportError;

pub fn write_summary(out_dir: &std::path::Path, summary: &FinalSummary) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(summary)?;
    let path = out_dir.join("summary.json");
    std::fs::write(path, json)?;
    Ok(())
}
