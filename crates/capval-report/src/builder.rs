//! Report assembly and `.docx` rendering.

use std::io::Cursor;

use capval_types::{CapvalError, ReportMetadata, Result, ValuationResult};
use docx_rs::{Docx, Paragraph, Run, Style, StyleType};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::document::{ReportBlock, ReportDocument};
use crate::format::{format_currency, format_percent};

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

/// Configuration for report rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Symbol placed before every monetary amount (default: "$")
    pub currency_symbol: String,
    /// Title text preceding the project name (default: "Financial Report")
    pub title_prefix: String,
    /// Title font size in half-points (default: 56)
    pub title_size: usize,
    /// Section heading font size in half-points (default: 32)
    pub heading_size: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            title_prefix: "Financial Report".to_string(),
            title_size: 56,
            heading_size: 32,
        }
    }
}

/// A finished report ready to hand to a download or file writer.
#[derive(Debug, Clone)]
pub struct ReportFile {
    /// Suggested file name, see [`report_filename`]
    pub filename: String,
    /// `.docx` contents
    pub bytes: Vec<u8>,
}

/// Suggested file name for a project's report.
///
/// Spaces in the project name become underscores:
/// `"Project A"` -> `"Financial_Report_Project_A.docx"`.
pub fn report_filename(project_name: &str) -> String {
    format!("Financial_Report_{}.docx", project_name.replace(' ', "_"))
}

/// Builds valuation reports.
///
/// Section order is fixed: title, assumptions, initial comments, cost of
/// equity, cost of debt, WACC, FCFF, NPV, price per share, closing comments.
/// Both comment sections appear only when comments were supplied, and then
/// both carry the same text. The assumptions section is always present, even
/// with an empty body.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    config: ReportConfig,
}

impl ReportBuilder {
    /// Create a new builder with the given configuration.
    pub const fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// The builder configuration.
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Lay out the report blocks for a valuation.
    ///
    /// # Errors
    ///
    /// Returns [`CapvalError::EmptyProjectName`] if the project name is blank.
    pub fn document(
        &self,
        metadata: &ReportMetadata,
        result: &ValuationResult,
    ) -> Result<ReportDocument> {
        metadata.validate()?;
        let money = |amount: f64| format_currency(amount, &self.config.currency_symbol);

        let mut doc = ReportDocument::new();
        doc.title(format!(
            "{}: {}",
            self.config.title_prefix, metadata.project_name
        ));
        doc.section("Assumptions", metadata.assumptions.as_str());
        if metadata.has_comments() {
            doc.section("Initial Comments", metadata.comments.as_str());
        }

        doc.section(
            "Cost of Equity",
            format!("The Cost of Equity is: {}", format_percent(result.cost_of_equity)),
        );
        doc.section(
            "Cost of Debt",
            format!(
                "The After-Tax Cost of Debt is: {}",
                format_percent(result.cost_of_debt)
            ),
        );
        doc.section(
            "WACC",
            format!("The WACC is: {}", format_percent(result.wacc)),
        );

        doc.heading("FCFF");
        for (idx, fcff) in result.fcff_per_year.iter().enumerate() {
            doc.paragraph(format!("Year {}: {}", idx + 1, money(*fcff)));
        }

        doc.section("NPV", format!("The NPV is: {}", money(result.npv)));
        doc.section(
            "Price Per Share",
            format!("The Price Per Share is: {}", money(result.price_per_share)),
        );
        if metadata.has_comments() {
            doc.section("Closing Comments", metadata.comments.as_str());
        }

        Ok(doc)
    }

    /// Build the `.docx` byte stream for a valuation.
    ///
    /// # Errors
    ///
    /// - [`CapvalError::EmptyProjectName`] if the project name is blank
    /// - [`CapvalError::ReportSerialization`] if packaging the document fails
    pub fn build(&self, metadata: &ReportMetadata, result: &ValuationResult) -> Result<Vec<u8>> {
        let doc = self.document(metadata, result)?;
        let bytes = self.render_docx(&doc)?;
        info!(
            project = %metadata.project_name,
            blocks = doc.blocks.len(),
            bytes = bytes.len(),
            "built valuation report"
        );
        Ok(bytes)
    }

    /// Build the report together with its suggested file name.
    ///
    /// # Errors
    ///
    /// See [`ReportBuilder::build`].
    pub fn export(&self, metadata: &ReportMetadata, result: &ValuationResult) -> Result<ReportFile> {
        let bytes = self.build(metadata, result)?;
        Ok(ReportFile {
            filename: report_filename(&metadata.project_name),
            bytes,
        })
    }

    /// Render a laid-out document as `.docx`.
    ///
    /// # Errors
    ///
    /// Returns [`CapvalError::ReportSerialization`] if the zip packager fails.
    pub fn render_docx(&self, doc: &ReportDocument) -> Result<Vec<u8>> {
        let mut docx = Docx::new()
            .add_style(
                Style::new(TITLE_STYLE, StyleType::Paragraph)
                    .name("Title")
                    .size(self.config.title_size)
                    .bold(),
            )
            .add_style(
                Style::new(HEADING_STYLE, StyleType::Paragraph)
                    .name("Heading 1")
                    .size(self.config.heading_size)
                    .bold(),
            );

        for block in &doc.blocks {
            docx = docx.add_paragraph(docx_paragraph(block));
        }

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| CapvalError::ReportSerialization(e.to_string()))?;
        Ok(buf.into_inner())
    }
}

fn docx_paragraph(block: &ReportBlock) -> Paragraph {
    let text = block.text();
    let paragraph = if text.is_empty() {
        Paragraph::new()
    } else {
        Paragraph::new().add_run(Run::new().add_text(text))
    };

    match block {
        ReportBlock::Title(_) => paragraph.style(TITLE_STYLE),
        ReportBlock::Heading(_) => paragraph.style(HEADING_STYLE),
        ReportBlock::Paragraph(_) => paragraph,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use capval_types::{ValuationInputs, YearInputs};
    use docx_rs::{DocumentChild, ParagraphChild, RunChild};

    fn result() -> ValuationResult {
        ValuationResult {
            cost_of_equity: 0.07,
            cost_of_debt: 0.035,
            wacc: 0.0525,
            fcff_per_year: vec![70_000.0, -1_234.5, 1_000_000.0],
            npv: 95_123.457,
            equity_value: -404_876.543,
            price_per_share: -4.048_765_44,
        }
    }

    /// Read a rendered report back as (style, text) pairs.
    fn read_back(bytes: &[u8]) -> Vec<(Option<String>, String)> {
        let docx = docx_rs::read_docx(bytes).unwrap();
        docx.document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => {
                    let style = p.property.style.as_ref().map(|s| s.val.clone());
                    let text = p
                        .children
                        .iter()
                        .filter_map(|c| match c {
                            ParagraphChild::Run(run) => Some(run),
                            _ => None,
                        })
                        .flat_map(|run| run.children.iter())
                        .filter_map(|c| match c {
                            RunChild::Text(t) => Some(t.text.clone()),
                            _ => None,
                        })
                        .collect::<String>();
                    Some((style, text))
                }
                _ => None,
            })
            .collect()
    }

    fn headings(pairs: &[(Option<String>, String)]) -> Vec<String> {
        pairs
            .iter()
            .filter(|(style, _)| style.as_deref() == Some(HEADING_STYLE))
            .map(|(_, text)| text.clone())
            .collect()
    }

    #[test]
    fn test_section_order_with_comments() {
        let meta = ReportMetadata::new("Acme")
            .with_comments("Reviewed by finance")
            .with_assumptions("5% growth");
        let doc = ReportBuilder::default().document(&meta, &result()).unwrap();

        assert_eq!(doc.blocks[0], ReportBlock::Title("Financial Report: Acme".into()));
        assert_eq!(
            doc.headings(),
            vec![
                "Assumptions",
                "Initial Comments",
                "Cost of Equity",
                "Cost of Debt",
                "WACC",
                "FCFF",
                "NPV",
                "Price Per Share",
                "Closing Comments",
            ]
        );
        assert_eq!(doc.section_paragraphs("Initial Comments"), vec!["Reviewed by finance"]);
        assert_eq!(doc.section_paragraphs("Closing Comments"), vec!["Reviewed by finance"]);
    }

    #[test]
    fn test_no_comment_sections_without_comments() {
        let meta = ReportMetadata::new("Acme");
        let doc = ReportBuilder::default().document(&meta, &result()).unwrap();
        let headings = doc.headings();

        assert!(!headings.contains(&"Initial Comments"));
        assert!(!headings.contains(&"Closing Comments"));
        assert_eq!(headings.iter().filter(|h| **h == "Assumptions").count(), 1);
        assert_eq!(doc.section_paragraphs("Assumptions"), vec![""]);
    }

    #[test]
    fn test_paragraph_texts() {
        let doc = ReportBuilder::default()
            .document(&ReportMetadata::new("Acme"), &result())
            .unwrap();

        assert_eq!(doc.section_paragraphs("Cost of Equity"), vec!["The Cost of Equity is: 7.00%"]);
        assert_eq!(
            doc.section_paragraphs("Cost of Debt"),
            vec!["The After-Tax Cost of Debt is: 3.50%"]
        );
        assert_eq!(doc.section_paragraphs("WACC"), vec!["The WACC is: 5.25%"]);
        assert_eq!(
            doc.section_paragraphs("FCFF"),
            vec!["Year 1: $70,000.00", "Year 2: -$1,234.50", "Year 3: $1,000,000.00"]
        );
        assert_eq!(doc.section_paragraphs("NPV"), vec!["The NPV is: $95,123.46"]);
        assert_eq!(
            doc.section_paragraphs("Price Per Share"),
            vec!["The Price Per Share is: -$4.05"]
        );
    }

    #[test]
    fn test_custom_config() {
        let builder = ReportBuilder::new(ReportConfig {
            currency_symbol: "€".to_string(),
            title_prefix: "Valuation".to_string(),
            ..Default::default()
        });
        let doc = builder.document(&ReportMetadata::new("Acme"), &result()).unwrap();

        assert_eq!(doc.blocks[0].text(), "Valuation: Acme");
        assert_eq!(doc.section_paragraphs("NPV"), vec!["The NPV is: €95,123.46"]);
        assert_eq!(builder.config().title_size, 56);
    }

    #[test]
    fn test_blank_project_name_rejected() {
        let err = ReportBuilder::default()
            .build(&ReportMetadata::new(""), &result())
            .unwrap_err();
        assert!(matches!(err, CapvalError::EmptyProjectName));
    }

    #[test]
    fn test_report_filename() {
        assert_eq!(report_filename("Project A"), "Financial_Report_Project_A.docx");
        assert_eq!(report_filename("Acme"), "Financial_Report_Acme.docx");
        assert_eq!(report_filename("a b  c"), "Financial_Report_a_b__c.docx");
    }

    #[test]
    fn test_docx_round_trip_with_comments() {
        let meta = ReportMetadata::new("Acme Corp")
            .with_comments("Board draft")
            .with_assumptions("Stable tax rate");
        let bytes = ReportBuilder::default().build(&meta, &result()).unwrap();
        assert!(bytes.starts_with(b"PK"));

        let pairs = read_back(&bytes);
        assert_eq!(
            pairs[0],
            (Some(TITLE_STYLE.to_string()), "Financial Report: Acme Corp".to_string())
        );

        let headings = headings(&pairs);
        assert_eq!(headings.iter().filter(|h| *h == "Assumptions").count(), 1);
        assert_eq!(headings.first().map(String::as_str), Some("Assumptions"));
        assert_eq!(headings.last().map(String::as_str), Some("Closing Comments"));

        let comment_paragraphs = pairs
            .iter()
            .filter(|(style, text)| style.is_none() && text == "Board draft")
            .count();
        assert_eq!(comment_paragraphs, 2);
    }

    #[test]
    fn test_docx_round_trip_fcff_years() {
        let year = YearInputs {
            operating_income: 100_000.0,
            taxes: 30_000.0,
            depreciation_amortization: 20_000.0,
            capital_expenditures: 15_000.0,
            change_in_working_capital: 5_000.0,
        };
        let inputs = ValuationInputs {
            risk_free_rate: 0.01,
            beta: 1.0,
            equity_risk_premium: 0.06,
            pre_tax_cost_of_debt: 0.05,
            tax_rate: 0.30,
            equity_market_value: 500_000.0,
            debt_market_value: 500_000.0,
            initial_investment: 100_000.0,
            number_of_outstanding_shares: 100_000,
            years: vec![year; 4],
        };
        let valuation = capval_engine::compute(&inputs).unwrap();

        let bytes = ReportBuilder::default()
            .build(&ReportMetadata::new("Project A"), &valuation)
            .unwrap();
        let pairs = read_back(&bytes);

        let headings = headings(&pairs);
        assert!(!headings.iter().any(|h| h.contains("Comments")));

        let years: Vec<&str> = pairs
            .iter()
            .filter(|(style, text)| style.is_none() && text.starts_with("Year "))
            .map(|(_, text)| text.as_str())
            .collect();
        assert_eq!(years.len(), 4);
        for (idx, text) in years.iter().enumerate() {
            assert_eq!(*text, format!("Year {}: $70,000.00", idx + 1));
        }
    }

    #[test]
    fn test_docx_empty_assumptions_paragraph() {
        let bytes = ReportBuilder::default()
            .build(&ReportMetadata::new("Acme"), &result())
            .unwrap();
        let pairs = read_back(&bytes);

        let idx = pairs
            .iter()
            .position(|(style, text)| {
                style.as_deref() == Some(HEADING_STYLE) && text == "Assumptions"
            })
            .unwrap();
        assert_eq!(pairs[idx + 1], (None, String::new()));
        assert_eq!(
            pairs[idx + 2],
            (Some(HEADING_STYLE.to_string()), "Cost of Equity".to_string())
        );
    }

    #[test]
    fn test_export_names_file() {
        let file = ReportBuilder::default()
            .export(&ReportMetadata::new("Project A"), &result())
            .unwrap();
        assert_eq!(file.filename, "Financial_Report_Project_A.docx");
        assert!(!file.bytes.is_empty());
    }
}
