use crate::pipeline::stage4_report::FinalSummary;
use crate::report::findings::RegionScore;

pub fn render_report(summary: &FinalSummary) -> String {
    let mut out = String::new();
    out.push_str("Reentry Employment Accessibility Index Report\n");
    out.push_str("=============================================\n\n");
    out.push_str("Scores describe structural employment accessibility relative to the other ");
    out.push_str("regions in the input. They are min-max scaled within this dataset and are not ");
    out.push_str("comparable across runs on different region sets.\n\n");

    out.push_str("Dataset overview:\n");
    out.push_str(&format!("- Regions: {}\n", summary.input.n_regions));
    if !summary.input.degenerate_columns.is_empty() {
        out.push_str(&format!(
            "- Constant columns (scored 50): {}\n",
            summary.input.degenerate_columns.join(", ")
        ));
    }
    out.push('\n');

    out.push_str("Component weights:\n");
    let w = &summary.weights;
    out.push_str(&format!("- Transportation: {:.1}%\n", w.transportation * 100.0));
    out.push_str(&format!("- Labor Market: {:.1}%\n", w.labor_market * 100.0));
    out.push_str(&format!("- Licensing: {:.1}%\n", w.licensing * 100.0));
    out.push_str(&format!("- Policy: {:.1}%\n\n", w.policy * 100.0));

    out.push_str("Summary statistics:\n");
    out.push_str("column\tweight\tmean\tstd\tmin\t25%\t50%\t75%\tmax\n");
    for row in &summary.statistics.rows {
        let s = &row.stats;
        out.push_str(&format!(
            "{}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\t{:.2}\n",
            row.column, row.weight, s.mean, s.std, s.min, s.p25, s.p50, s.p75, s.max
        ));
    }
    out.push('\n');

    out.push_str(&format!("Top {} regions:\n", summary.top.len()));
    push_regions(&mut out, &summary.top);
    out.push('\n');
    out.push_str(&format!("Bottom {} regions:\n", summary.bottom.len()));
    push_regions(&mut out, &summary.bottom);
    out.push('\n');

    if !summary.scenarios.is_empty() {
        out.push_str("Leaders under alternative weightings:\n");
        for leaders in &summary.scenarios {
            out.push_str(&format!("{}:\n", leaders.scenario));
            for r in &leaders.top {
                out.push_str(&format!("  {}. {}\n", r.rank, r.region_name));
            }
        }
        out.push('\n');
    }

    let f = &summary.findings;
    out.push_str("Key findings:\n");
    out.push_str(&format!("- Mean REAI: {:.2}\n", f.mean_reai));
    out.push_str(&format!("- Standard deviation: {:.2}\n", f.std_reai));
    out.push_str(&format!("- Range: {:.2} - {:.2}\n", f.min_reai, f.max_reai));
    if let Some(h) = &f.highest {
        out.push_str(&format!("- Highest accessibility: {} ({:.2})\n", h.region_name, h.reai));
    }
    if let Some(l) = &f.lowest {
        out.push_str(&format!("- Lowest accessibility: {} ({:.2})\n", l.region_name, l.reai));
    }
    for m in &f.component_means {
        out.push_str(&format!("- Mean {} score: {:.2}\n", m.component, m.mean));
    }
    for c in &f.correlations {
        out.push_str(&format!("- REAI vs {}: r = {:.3}\n", c.indicator, c.pearson_r));
    }

    out
}

fn push_regions(out: &mut String, regions: &[RegionScore]) {
    for r in regions {
        out.push_str(&format!(
            "- #{} {} ({}): {:.2}\n",
            r.rank, r.region_name, r.region_id, r.reai
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
