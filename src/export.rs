//! Flatten problems into rows and write them as `;`-delimited CSV

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::api::models::Question;

pub const DELIMITER: u8 = b';';

pub const HEADER: [&str; 8] = [
    "Question id",
    "title",
    "slug",
    "category",
    "frequency",
    "is_paid",
    "topics",
    "companies",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("problem {id} has malformed companyTagStats: {source}")]
    CompanyStats {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// One output line, already flattened to text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemRow {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub frequency: String,
    pub is_paid: String,
    /// Topic slugs joined by `,`, in the order the service sent them
    pub topics: String,
    /// Distinct company-tag slugs joined by `,`
    pub companies: String,
}

impl TryFrom<&Question> for ProblemRow {
    type Error = ExportError;

    fn try_from(question: &Question) -> Result<Self, Self::Error> {
        let companies = question
            .company_slugs()
            .map_err(|source| ExportError::CompanyStats {
                id: question.question_frontend_id.clone(),
                source,
            })?
            .into_iter()
            .collect::<Vec<_>>()
            .join(",");

        Ok(Self {
            id: question.question_frontend_id.clone(),
            title: question.title.clone(),
            slug: question.title_slug.clone(),
            category: question.category_title.clone().unwrap_or_default(),
            frequency: question
                .frequency
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            is_paid: question.is_paid_only.to_string(),
            topics: question.topic_slugs().collect::<Vec<_>>().join(","),
            companies,
        })
    }
}

impl ProblemRow {
    fn fields(&self) -> [&str; 8] {
        [
            self.id.as_str(),
            self.title.as_str(),
            self.slug.as_str(),
            self.category.as_str(),
            self.frequency.as_str(),
            self.is_paid.as_str(),
            self.topics.as_str(),
            self.companies.as_str(),
        ]
    }
}

/// Flatten every problem, failing on the first malformed record
pub fn problem_rows(problems: &[Question]) -> Result<Vec<ProblemRow>, ExportError> {
    problems.iter().map(ProblemRow::try_from).collect()
}

/// Write the header and one line per row, in the given order
///
/// Returns the number of rows written, header excluded.
pub fn write_rows<W: Write>(writer: W, rows: &[ProblemRow]) -> Result<usize, ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for row in rows {
        csv_writer.write_record(row.fields())?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;

    debug!("Wrote {} rows", rows.len());
    Ok(rows.len())
}

/// Flatten all problems, then write them; nothing is written if any record is malformed
pub fn write_problems<W: Write>(writer: W, problems: &[Question]) -> Result<usize, ExportError> {
    let rows = problem_rows(problems)?;
    write_rows(writer, &rows)
}

/// Create or truncate `path` and write the problems to it
///
/// Every row is flattened before the file is touched, so a malformed record
/// leaves an existing file as it was.
pub fn write_problems_to_path(path: &Path, problems: &[Question]) -> Result<usize, ExportError> {
    let rows = problem_rows(problems)?;
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let written = write_rows(io::BufWriter::new(file), &rows)?;
    info!("Wrote {} problems to {}", written, path.display());
    Ok(written)
}
