//! Skill listing API handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::entities::{group_by_category, Skill, SkillLevel};

use super::middleware::SkillsState;

/// Skill as presented to the page, with its derived display attributes
#[derive(Debug, Serialize)]
pub struct SkillView {
    pub name: String,
    pub level: SkillLevel,
    pub icon: String,
    /// Proficiency bar width in percent
    pub weight: u8,
    /// Badge color token
    pub color: &'static str,
}

impl From<&Skill> for SkillView {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            level: skill.level,
            icon: skill.icon.clone(),
            weight: skill.level.visual_weight(),
            color: skill.level.color(),
        }
    }
}

/// One category group in the listing response
#[derive(Debug, Serialize)]
pub struct SkillGroupResponse {
    pub category: String,
    pub skills: Vec<SkillView>,
}

/// List skills grouped by category
///
/// **GET /v1/skills**
pub async fn list_skills(State(state): State<SkillsState>) -> Json<Vec<SkillGroupResponse>> {
    let groups = group_by_category(state.catalog.skills())
        .into_iter()
        .map(|group| SkillGroupResponse {
            category: group.category,
            skills: group.skills.iter().map(SkillView::from).collect(),
        })
        .collect();

    Json(groups)
}
