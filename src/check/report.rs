//! Pre-flight report types for structured issue reporting.

use std::fmt;

/// The result of pre-flight checking a dataset export.
#[derive(Clone, Debug, Default)]
pub struct CheckReport {
    /// All issues found during checking.
    pub issues: Vec<CheckIssue>,
}

impl CheckReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Adds an issue to the report.
    pub fn add(&mut self, issue: CheckIssue) {
        self.issues.push(issue);
    }

    /// Returns the number of errors in the report.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Returns the number of warnings in the report.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Returns true if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return writeln!(f, "Pre-flight passed: no issues found");
        }

        writeln!(
            f,
            "Pre-flight completed with {} error(s) and {} warning(s):",
            self.error_count(),
            self.warning_count()
        )?;
        writeln!(f)?;

        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }

        Ok(())
    }
}

/// A single pre-flight issue (error or warning).
#[derive(Clone, Debug)]
pub struct CheckIssue {
    /// The severity of the issue.
    pub severity: Severity,

    /// A stable code for the issue type.
    pub code: IssueCode,

    /// A human-readable description of the issue.
    pub message: String,

    /// Context about where the issue occurred.
    pub context: IssueContext,
}

impl CheckIssue {
    /// Creates a new issue.
    pub fn new(
        severity: Severity,
        code: IssueCode,
        message: impl Into<String>,
        context: IssueContext,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            context,
        }
    }

    /// Creates a new error.
    pub fn error(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self::new(Severity::Error, code, message, context)
    }

    /// Creates a new warning.
    pub fn warning(code: IssueCode, message: impl Into<String>, context: IssueContext) -> Self {
        Self::new(Severity::Warning, code, message, context)
    }
}

impl fmt::Display for CheckIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        write!(
            f,
            "[{}] {:?} in {}: {}",
            severity, self.code, self.context, self.message
        )
    }
}

/// The severity of a pre-flight issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// A warning that doesn't block the split but may indicate problems.
    Warning,
    /// An error that makes the export unsplittable as-is.
    Error,
}

/// A stable code identifying the type of pre-flight issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueCode {
    /// An image file has no label file with the same stem.
    MissingLabel,
    /// A label file has no image file with the same stem.
    OrphanLabel,
    /// A class list entry does not appear in the catalog.
    ClassMissingFromCatalog,
    /// A catalog category does not appear in the class list.
    UnusedCatalogCategory,
    /// The image directory contains no recognized image files.
    EmptyImageDir,
}

/// Context about where a pre-flight issue occurred.
#[derive(Clone, Debug)]
pub enum IssueContext {
    /// Issue with the export as a whole.
    Dataset,
    /// Issue with a specific sample.
    Sample { name: String },
    /// Issue with a specific class name.
    Class { name: String },
}

impl fmt::Display for IssueContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueContext::Dataset => write!(f, "dataset"),
            IssueContext::Sample { name } => write!(f, "sample '{}'", name),
            IssueContext::Class { name } => write!(f, "class '{}'", name),
        }
    }
}
