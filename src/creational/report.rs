//! Classic builder: a director drives interchangeable report builders.

use tracing::debug;

/// Report assembled in three parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub header: Option<String>,
    pub body: Option<String>,
    pub footer: Option<String>,
}

impl Report {
    pub fn lines(&self) -> Vec<String> {
        [&self.header, &self.body, &self.footer]
            .into_iter()
            .map(|part| part.clone().unwrap_or_else(|| "null".to_string()))
            .collect()
    }
}

/// Steps a director can invoke, in any order, before taking the report.
pub trait ReportBuilder {
    fn build_header(&mut self);
    fn build_body(&mut self);
    fn build_footer(&mut self);
    fn report(&self) -> Report;
}

#[derive(Debug, Default)]
pub struct SimpleReportBuilder {
    report: Report,
}

impl ReportBuilder for SimpleReportBuilder {
    fn build_header(&mut self) {
        self.report.header = Some("Simple Header".to_string());
    }

    fn build_body(&mut self) {
        self.report.body = Some("Simple Body".to_string());
    }

    fn build_footer(&mut self) {
        self.report.footer = Some("Simple Footer".to_string());
    }

    fn report(&self) -> Report {
        self.report.clone()
    }
}

#[derive(Debug, Default)]
pub struct ComplexReportBuilder {
    report: Report,
}

impl ReportBuilder for ComplexReportBuilder {
    fn build_header(&mut self) {
        self.report.header = Some("Complex Header".to_string());
    }

    fn build_body(&mut self) {
        self.report.body = Some("Complex Body".to_string());
    }

    fn build_footer(&mut self) {
        self.report.footer = Some("Complex Footer".to_string());
    }

    fn report(&self) -> Report {
        self.report.clone()
    }
}

/// Runs a builder through header, body and footer, in that order.
pub struct ReportDirector {
    builder: Box<dyn ReportBuilder>,
}

impl ReportDirector {
    pub fn new(builder: Box<dyn ReportBuilder>) -> Self {
        Self { builder }
    }

    pub fn build_report(&mut self) {
        debug!("directing report construction");
        self.builder.build_header();
        self.builder.build_body();
        self.builder.build_footer();
    }

    pub fn report(&self) -> Report {
        self.builder.report()
    }
}
