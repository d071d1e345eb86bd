//! Generated application documents
//!
//! A [`GeneratedDocument`] is the frozen, submission-time snapshot of a draft.
//! It is built once per submission and rendered read-only, both on screen and
//! as plain text for the print spool.

use super::catalog::{CategoryId, LicenseCategory};
use super::forms::ApplicationDraft;
use chrono::{DateTime, Local, NaiveDate};
use rand::Rng;
use std::fmt;

/// Upper bound (exclusive) of the random component of an application id
pub const APPLICATION_ID_NONCE_RANGE: u32 = 10_000;

/// Width of the plain-text rendering
const PRINT_WIDTH: usize = 72;

const TERMS_STATEMENT: &str = "The applicant confirms that all information provided in this application is true and accurate to the best of their knowledge. Any falsification of information may result in denial of the application or revocation of the license.";

const RETENTION_NOTICE: &str =
    "This is an official application document. Please retain a copy for your records.";

/// Format a date the long en-US way, e.g. "June 5, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Human-readable application identifier: `{CATEGORY}-{epoch ms}-{nonce}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApplicationId(String);

impl ApplicationId {
    pub fn new(category: CategoryId, timestamp_ms: i64, nonce: u32) -> Self {
        Self(format!(
            "{}-{}-{}",
            category.as_str().to_uppercase(),
            timestamp_ms,
            nonce
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labelled block of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSection {
    pub title: &'static str,
    /// Statement printed before the entries
    pub statement: Option<&'static str>,
    pub entries: Vec<(&'static str, String)>,
}

/// Frozen, submission-time application document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub application_id: ApplicationId,
    pub category: &'static LicenseCategory,
    /// Copy of the draft at generation time
    pub draft: ApplicationDraft,
    pub generated_at: DateTime<Local>,
}

impl GeneratedDocument {
    /// Generate a document stamped with the current clock and a random nonce
    pub fn generate(draft: &ApplicationDraft, category: CategoryId) -> Self {
        let nonce = rand::thread_rng().gen_range(0..APPLICATION_ID_NONCE_RANGE);
        Self::generate_at(draft, category, Local::now(), nonce)
    }

    /// Generate a document for a given instant and nonce
    pub fn generate_at(
        draft: &ApplicationDraft,
        category: CategoryId,
        now: DateTime<Local>,
        nonce: u32,
    ) -> Self {
        let application_id = ApplicationId::new(category, now.timestamp_millis(), nonce);
        tracing::debug!(%application_id, "generated renewal document");
        Self {
            application_id,
            category: category.category(),
            draft: draft.clone(),
            generated_at: now,
        }
    }

    /// Generation date in long form
    pub fn generation_date(&self) -> String {
        format_long_date(self.generated_at.date_naive())
    }

    /// Current expiration date reformatted in long form
    pub fn expiration_date(&self) -> String {
        match self.draft.expiration() {
            Some(date) => format_long_date(date),
            None => self.draft.expiration_date.trim().to_string(),
        }
    }

    /// "Yes"/"No" echo of the terms checkbox
    pub fn terms_echo(&self) -> &'static str {
        if self.draft.accept_terms {
            "Yes"
        } else {
            "No"
        }
    }

    /// Header lines below the document title
    pub fn header_lines(&self) -> Vec<String> {
        vec![
            self.category.title.to_string(),
            format!("Application Date: {}", self.generation_date()),
            format!("Application ID: {}", self.application_id),
        ]
    }

    /// Body blocks in document order
    pub fn sections(&self) -> Vec<DocumentSection> {
        let d = &self.draft;
        vec![
            DocumentSection {
                title: "Applicant Information",
                statement: None,
                entries: vec![
                    ("Full Name", d.full_name.clone()),
                    ("Email Address", d.email.clone()),
                    ("Phone Number", d.phone.clone()),
                    ("License Number", d.license_number.clone()),
                ],
            },
            DocumentSection {
                title: "License Information",
                statement: None,
                entries: vec![
                    ("License Type", self.category.title.to_string()),
                    ("Current Expiration Date", self.expiration_date()),
                ],
            },
            DocumentSection {
                title: "Address Information",
                statement: None,
                entries: vec![
                    ("Street Address", d.address.clone()),
                    ("City", d.city.clone()),
                    ("State", d.state.clone()),
                    ("Zip Code", d.zip_code.clone()),
                ],
            },
            DocumentSection {
                title: "Terms and Conditions",
                statement: Some(TERMS_STATEMENT),
                entries: vec![("Accepted Terms", self.terms_echo().to_string())],
            },
        ]
    }

    /// Signature placeholder: (signer, date)
    pub fn signature(&self) -> (String, String) {
        (self.draft.full_name.clone(), self.generation_date())
    }

    /// Closing notice lines
    pub fn footer_lines(&self) -> Vec<String> {
        vec![
            RETENTION_NOTICE.to_string(),
            format!("For official use only - Application ID: {}", self.application_id),
        ]
    }

    /// Printable plain-text rendering
    pub fn to_plain_text(&self) -> String {
        let rule = "=".repeat(PRINT_WIDTH);
        let mut out = Vec::new();

        out.push(rule.clone());
        out.push(center("LICENSE RENEWAL APPLICATION"));
        for line in self.header_lines() {
            out.push(center(&line));
        }
        out.push(rule);

        for section in self.sections() {
            out.push(String::new());
            out.push(section.title.to_string());
            out.push("-".repeat(section.title.chars().count()));
            if let Some(statement) = section.statement {
                out.extend(wrap(statement, PRINT_WIDTH));
                out.push(String::new());
            }
            for (label, value) in &section.entries {
                out.push(format!("{:<26}{}", format!("{label}:"), value));
            }
        }

        let (signer, date) = self.signature();
        let line = "_".repeat(28);
        out.push(String::new());
        out.push("-".repeat(PRINT_WIDTH));
        out.push(format!("{:<36}{}", "Applicant Signature:", "Date:"));
        out.push(String::new());
        out.push(format!("{line:<36}{line}"));
        out.push(format!("{signer:<36}{date}"));
        out.push(String::new());
        for line in self.footer_lines() {
            out.push(center(&line));
        }

        let mut text = out.join("\n");
        text.push('\n');
        text
    }
}

fn center(text: &str) -> String {
    format!("{:^width$}", text, width = PRINT_WIDTH).trim_end().to_string()
}

/// Greedy word wrap
fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + word.len() + 1 > max_width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
