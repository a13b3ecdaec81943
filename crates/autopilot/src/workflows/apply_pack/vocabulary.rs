/// One controlled-vocabulary skill: a canonical display name plus the
/// lowercase surface forms it is recognized by in job-description text.
#[derive(Debug, Clone)]
pub struct SkillDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

/// The controlled skills vocabulary used for JD extraction. Extraction only
/// ever reports canonical names, in vocabulary order, so downstream scoring
/// and deduplication stay deterministic.
#[derive(Debug)]
pub struct SkillVocabulary {
    skills: Vec<SkillDefinition>,
}

impl SkillVocabulary {
    pub fn standard() -> Self {
        Self {
            skills: standard_skills(),
        }
    }

    pub fn skills(&self) -> &[SkillDefinition] {
        &self.skills
    }
}

fn standard_skills() -> Vec<SkillDefinition> {
    vec![
        SkillDefinition {
            name: "A/B testing",
            aliases: &["a/b testing", "a/b tests", "ab testing", "experimentation"],
        },
        SkillDefinition {
            name: "SQL",
            aliases: &["sql", "sql window functions"],
        },
        SkillDefinition {
            name: "Amplitude",
            aliases: &["amplitude"],
        },
        SkillDefinition {
            name: "GA4",
            aliases: &["ga4", "google analytics"],
        },
        SkillDefinition {
            name: "product analytics",
            aliases: &["product analytics", "event tracking", "instrumentation"],
        },
        SkillDefinition {
            name: "roadmap planning",
            aliases: &["roadmap", "roadmapping", "roadmaps"],
        },
        SkillDefinition {
            name: "stakeholder management",
            aliases: &["stakeholder management", "stakeholders", "stakeholder alignment"],
        },
        SkillDefinition {
            name: "agile delivery",
            aliases: &["agile", "scrum", "kanban", "sprint planning"],
        },
        SkillDefinition {
            name: "OKRs",
            aliases: &["okr", "okrs", "objectives and key results"],
        },
        SkillDefinition {
            name: "customer discovery",
            aliases: &["customer discovery", "customer interviews", "user interviews"],
        },
        SkillDefinition {
            name: "user research",
            aliases: &["user research", "usability testing"],
        },
        SkillDefinition {
            name: "go-to-market",
            aliases: &["go-to-market", "go to market", "gtm", "product launch"],
        },
        SkillDefinition {
            name: "pricing strategy",
            aliases: &["pricing", "pricing strategy", "monetization"],
        },
        SkillDefinition {
            name: "backlog prioritization",
            aliases: &["backlog", "prioritization", "prioritisation"],
        },
        SkillDefinition {
            name: "success metrics",
            aliases: &["kpis", "success metrics", "north star metric"],
        },
        SkillDefinition {
            name: "API design",
            aliases: &["api design", "apis", "api"],
        },
        SkillDefinition {
            name: "data pipelines",
            aliases: &["data pipeline", "data pipelines", "etl"],
        },
        SkillDefinition {
            name: "machine learning",
            aliases: &["machine learning", "ml models", "llm"],
        },
        SkillDefinition {
            name: "cloud platforms",
            aliases: &["aws", "azure", "gcp", "cloud infrastructure"],
        },
        SkillDefinition {
            name: "IoT",
            aliases: &["iot", "connected devices"],
        },
        SkillDefinition {
            name: "cross-functional leadership",
            aliases: &["cross-functional", "cross functional"],
        },
        SkillDefinition {
            name: "program management",
            aliases: &["program management", "program manager"],
        },
        SkillDefinition {
            name: "risk management",
            aliases: &["risk management", "risk register", "dependency management"],
        },
        SkillDefinition {
            name: "vendor management",
            aliases: &["vendor management", "vendor selection"],
        },
        SkillDefinition {
            name: "wireframing",
            aliases: &["wireframe", "wireframes", "figma"],
        },
    ]
}
