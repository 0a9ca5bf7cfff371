//! Domain entities for the Skills domain

use serde::{Deserialize, Serialize};

/// Proficiency level for a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Visual weight of the proficiency bar, in percent
    pub fn visual_weight(&self) -> u8 {
        match self {
            SkillLevel::Beginner => 50,
            SkillLevel::Intermediate => 70,
            SkillLevel::Advanced => 90,
        }
    }

    /// Fixed color token for the proficiency badge
    pub fn color(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "yellow",
            SkillLevel::Intermediate => "blue",
            SkillLevel::Advanced => "green",
        }
    }
}

/// Skill catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub icon: String,
    pub category: String,
}

/// Skills of one category, in catalog order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<Skill>,
}

/// Group skills by category, preserving first-seen category order and
/// catalog order within each category.
pub fn group_by_category(skills: &[Skill]) -> Vec<SkillCategory> {
    let mut groups: Vec<SkillCategory> = Vec::new();

    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill.clone()),
            None => groups.push(SkillCategory {
                category: skill.category.clone(),
                skills: vec![skill.clone()],
            }),
        }
    }

    groups
}
