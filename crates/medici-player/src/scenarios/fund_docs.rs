use crate::script::{Line, Scenario};

pub(super) fn build(prompt: &str) -> Scenario {
    super::titled("fund-docs")
        .command(prompt, r#"load --fund "Alpine Capital III""#)
        .line(Line::system("▸ 847 documents indexed · 2.4GB · ready"))
        .line(Line::gap())
        .command(prompt, r#""What are our co-invest obligations to LPs?""#)
        .line(Line::response(
            "Searching LP agreements, side letters, partnership docs...",
        ))
        .line(Line::highlight("■ Found 3 relevant provisions"))
        .line(Line::response(
            "Co-investment rights offered pro-rata to LPs committing **≥$25M**,",
        ))
        .line(Line::response(
            "with 10 business day notice period per Section 4.2(b) of the LPA.",
        ))
        .line(Line::source("↳ `LPA_AlpineIII_Final.pdf` — p.34, §4.2(b)"))
        .line(Line::source("↳ `SideLetter_Meridian_2024.pdf` — p.7"))
        .line(Line::source("↳ `IC_Memo_CoInvest_Policy.docx` — p.2"))
        .line(Line::gap())
        .command(prompt, r#""Draft the co-invest notice for Meridian""#)
        .line(
            Line::highlight("✓ Generated → /output/notices/meridian_coinvest.pdf").with_caret(),
        )
}
