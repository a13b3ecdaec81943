//! Apply-pack generation: skill extraction against a controlled vocabulary,
//! match scoring, bullet rewriting, cover-letter drafting, and risk flags.

mod config;
pub mod domain;
mod engine;
pub mod extraction;
pub mod router;
pub mod service;
pub mod store;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use config::MatchConfig;
pub use domain::{ApplyPack, BulletRewrite, CandidateProfile};
pub use engine::ApplyPackEngine;
pub use extraction::extract_skills;
pub use router::apply_pack_router;
pub use service::{ApplyPackService, ApplyPackServiceError};
pub use store::{ApplyPackStore, ApplyPackStoreError, ProfileError, ProfileSource};
pub use vocabulary::{SkillDefinition, SkillVocabulary};
