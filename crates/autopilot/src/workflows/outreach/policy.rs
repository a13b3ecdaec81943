use super::domain::{Channel, Persona};

/// Persona quota table for a standard plan: 2 peers, 2 insiders, 1 recruiter.
pub const PERSONA_QUOTAS: [(Persona, usize); 3] = [
    (Persona::Peer, 2),
    (Persona::Insider, 2),
    (Persona::Recruiter, 1),
];

/// Follow-up offsets in business days per persona.
pub const FOLLOWUP_OFFSETS: [(Persona, u32); 4] = [
    (Persona::Peer, 5),
    (Persona::Insider, 5),
    (Persona::Recruiter, 3),
    (Persona::Referral, 5),
];

/// Named policy knobs for plan composition, kept out of the selection
/// algorithm so cadence changes never touch it.
#[derive(Debug, Clone)]
pub struct OutreachPolicy {
    pub quotas: Vec<(Persona, usize)>,
    pub followup_offsets: Vec<(Persona, u32)>,
    pub default_channel: Channel,
}

impl OutreachPolicy {
    pub fn standard() -> Self {
        Self {
            quotas: PERSONA_QUOTAS.to_vec(),
            followup_offsets: FOLLOWUP_OFFSETS.to_vec(),
            default_channel: Channel::Linkedin,
        }
    }

    pub fn quota_for(&self, persona: Persona) -> usize {
        self.quotas
            .iter()
            .find(|(candidate, _)| *candidate == persona)
            .map(|(_, quota)| *quota)
            .unwrap_or(0)
    }

    pub fn followup_offset_for(&self, persona: Persona) -> u32 {
        self.followup_offsets
            .iter()
            .find(|(candidate, _)| *candidate == persona)
            .map(|(_, offset)| *offset)
            .unwrap_or(5)
    }
}

impl Default for OutreachPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
