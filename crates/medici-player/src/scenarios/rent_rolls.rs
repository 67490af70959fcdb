use crate::script::{Line, Scenario};

pub(super) fn build(prompt: &str) -> Scenario {
    super::titled("rent-rolls")
        .command(prompt, "ingest ./uploads/portfolio_rentrolls/*.pdf")
        .line(Line::system(
            "▸ Processing 23 rent roll PDFs across 8 properties...",
        ))
        .line(Line::system("▸ OCR complete · Extracting unit-level data..."))
        .line(Line::gap())
        .line(Line::highlight("■ Extracted 1,847 unit records"))
        .line(Line::response(
            "Standardized: unit #, tenant, lease dates, base rent, recoveries",
        ))
        .line(Line::response(
            "Flagged **12 discrepancies** vs. prior quarter data",
        ))
        .line(Line::source("↳ 3 expired leases with active tenants"))
        .line(Line::source("↳ 9 rent amounts inconsistent with amendments"))
        .line(Line::gap())
        .command(prompt, r#""Export to our underwriting model format""#)
        .line(Line::highlight(
            "✓ Exported → /output/rentrolls/portfolio_master.xlsx",
        ))
        .line(
            Line::highlight("✓ Discrepancy report → /output/rentrolls/flags.pdf").with_caret(),
        )
}
