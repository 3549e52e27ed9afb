use crate::report::{DetailContext, format_f64_3};

const NOT_AVAILABLE: &str = "N/A";

pub fn render_detail_text(ctx: Option<&DetailContext>) -> String {
    let mut out = String::new();
    out.push_str("Talent Match Report\n");
    out.push_str("===================\n\n");

    let Some(ctx) = ctx else {
        out.push_str("No candidates ranked against the benchmark.\n");
        return out;
    };
    let insight = &ctx.insight;

    out.push_str(&format!("Detailed analysis: {}\n", ctx.fullname));
    out.push_str(&format!("Overall match rate: {:.1}%\n", insight.match_rate));
    out.push_str(&format!(
        "Position: {}\n",
        ctx.position.as_deref().unwrap_or(NOT_AVAILABLE)
    ));
    out.push_str(&format!(
        "Department: {}\n\n",
        ctx.department.as_deref().unwrap_or(NOT_AVAILABLE)
    ));

    let strengths: Vec<_> = insight.strengths().collect();
    if !strengths.is_empty() {
        out.push_str("Top strengths vs benchmark:\n");
        for c in strengths {
            out.push_str(&format!(
                "  - {}: +{} above benchmark\n",
                c.dimension.label(),
                format_f64_3(c.delta)
            ));
        }
        out.push('\n');
    }

    let gaps: Vec<_> = insight.gaps().collect();
    if !gaps.is_empty() {
        out.push_str("Development areas:\n");
        for c in gaps {
            out.push_str(&format!(
                "  - {}: {} below benchmark\n",
                c.dimension.label(),
                format_f64_3(c.delta)
            ));
        }
        out.push('\n');
    }

    if !insight.top_themes.is_empty() {
        out.push_str("Behavioral strengths profile:\n");
        out.push_str(&format!("Top themes: {}\n\n", insight.top_themes.join(", ")));
    }

    if let Some(rating) = ctx.latest_performance {
        out.push_str("Performance context:\n");
        out.push_str(&format!("Latest performance rating: {rating}\n\n"));
    }

    out.push_str(&format!(
        "Recommendation: {}\n",
        insight.recommendation.label()
    ));
    out.push_str(&format!("{}\n", insight.recommendation.statement()));
    out
}
