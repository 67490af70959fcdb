use crate::script::{Line, Scenario};

pub(super) fn build(prompt: &str) -> Scenario {
    super::titled("lp-report")
        .command(prompt, r#"context --scope "Q3 2025 LP Report""#)
        .line(Line::system(
            "▸ Loaded: NAV statements, capital accounts, portfolio data",
        ))
        .line(Line::gap())
        .command(
            prompt,
            r#""Generate quarterly performance summary for all LPs""#,
        )
        .line(Line::response("Aggregating across 12 portfolio companies..."))
        .line(Line::response("Cross-referencing capital account statements..."))
        .line(Line::highlight("■ Report compiled — 47 data points validated"))
        .line(Line::response(
            "Net IRR: **18.3%** | TVPI: **1.42x** | DPI: **0.31x**",
        ))
        .line(Line::source("↳ `NAV_Q3_2025_Final.xlsx` — all tabs"))
        .line(Line::source(
            r#"↳ `CapitalAccounts_Master.xlsx` — Sheet "Fund III""#,
        ))
        .line(Line::gap())
        .command(
            prompt,
            r#""Format as LP letter using our standard template""#,
        )
        .line(Line::highlight("✓ Generated → /output/reports/Q3_LP_Letter.pdf").with_caret())
}
