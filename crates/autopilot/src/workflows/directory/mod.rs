//! Contact-directory import from an exported connections CSV
//! (`First Name,Last Name,URL,Email Address,Company,Position,Connected On`).
//! Personas and tracks are inferred from position titles so the outreach
//! planner can rank what the export knows.

mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

use crate::workflows::outreach::{ContactDirectory, DirectoryCandidate, DirectoryError};
use crate::workflows::outreach::Channel;

#[derive(Debug)]
pub enum ConnectionsImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ConnectionsImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionsImportError::Io(err) => {
                write!(f, "failed to read connections export: {}", err)
            }
            ConnectionsImportError::Csv(err) => write!(f, "invalid connections CSV data: {}", err),
        }
    }
}

impl std::error::Error for ConnectionsImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConnectionsImportError::Io(err) => Some(err),
            ConnectionsImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConnectionsImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ConnectionsImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct ConnectionsImporter;

impl ConnectionsImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<DirectoryCandidate>, ConnectionsImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<DirectoryCandidate>, ConnectionsImportError> {
        let mut candidates = Vec::new();

        for record in parser::parse_records(reader)? {
            let persona = normalizer::infer_persona(&record.position);
            let track = normalizer::infer_track(&record.position);
            let preferred_channel = record.email.as_ref().map(|_| Channel::Email);

            candidates.push(DirectoryCandidate {
                name: record.name,
                role: record.position,
                company: record.company,
                persona,
                preferred_channel,
                profile_url: record.profile_url,
                email: record.email,
                track,
                last_interaction: record.connected_on,
            });
        }

        Ok(candidates)
    }
}

/// In-memory [`ContactDirectory`] over imported connection rows. Company
/// matching ignores case and stray whitespace.
#[derive(Debug, Default)]
pub struct CsvContactDirectory {
    candidates: Vec<DirectoryCandidate>,
}

impl CsvContactDirectory {
    pub fn new(candidates: Vec<DirectoryCandidate>) -> Self {
        Self { candidates }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConnectionsImportError> {
        Ok(Self::new(ConnectionsImporter::from_path(path)?))
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl ContactDirectory for CsvContactDirectory {
    fn candidates_for(&self, company: &str) -> Result<Vec<DirectoryCandidate>, DirectoryError> {
        let needle = normalizer::normalize(company);
        Ok(self
            .candidates
            .iter()
            .filter(|candidate| normalizer::normalize(&candidate.company) == needle)
            .cloned()
            .collect())
    }
}
