use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};
use uuid::Uuid;

use super::StepForm;
use crate::models::{Resume, Skill, SkillCategory, SkillLevel};

/// The "add skill" input row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PendingSkill {
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SkillsEvent {
    SetName { name: String },
    SetLevel { level: SkillLevel },
    SetCategory { category: SkillCategory },
    /// Adds the pending skill. Ignored when the pending name is blank.
    Add,
    Remove { id: Uuid },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillsForm {
    pub skills: Vec<Skill>,
    pub pending: PendingSkill,
}

#[derive(Debug, Serialize)]
struct SkillGroupListing<'a> {
    category: SkillCategory,
    skills: Vec<&'a Skill>,
}

// Serialized with the `groups` listing alongside the raw state.
impl Serialize for SkillsForm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let groups: Vec<SkillGroupListing<'_>> = self
            .grouped()
            .into_iter()
            .map(|(category, skills)| SkillGroupListing { category, skills })
            .collect();

        let mut state = serializer.serialize_struct("SkillsForm", 3)?;
        state.serialize_field("skills", &self.skills)?;
        state.serialize_field("pending", &self.pending)?;
        state.serialize_field("groups", &groups)?;
        state.end()
    }
}

impl SkillsForm {
    /// Appends suggested names as intermediate technical skills.
    pub fn add_suggested(&mut self, names: Vec<String>) -> Vec<Skill> {
        self.skills.extend(
            names
                .into_iter()
                .filter(|n| !n.trim().is_empty())
                .map(|n| Skill::new(n, SkillLevel::Intermediate, SkillCategory::Technical)),
        );
        self.slice()
    }

    /// Skills grouped by category in first-seen order, as listed on the form.
    pub fn grouped(&self) -> Vec<(SkillCategory, Vec<&Skill>)> {
        let mut groups: Vec<(SkillCategory, Vec<&Skill>)> = Vec::new();
        for skill in &self.skills {
            match groups.iter_mut().find(|(c, _)| *c == skill.category) {
                Some((_, members)) => members.push(skill),
                None => groups.push((skill.category, vec![skill])),
            }
        }
        groups
    }

    fn add_pending(&mut self) -> Option<Vec<Skill>> {
        let name = self.pending.name.trim();
        if name.is_empty() {
            return None;
        }
        self.skills
            .push(Skill::new(name, self.pending.level, self.pending.category));
        self.pending.name.clear();
        Some(self.slice())
    }
}

impl StepForm for SkillsForm {
    type Slice = Vec<Skill>;
    type Event = SkillsEvent;

    fn seed(draft: &Resume) -> Self {
        Self {
            skills: draft.skills.clone(),
            pending: PendingSkill::default(),
        }
    }

    fn slice(&self) -> Vec<Skill> {
        self.skills.clone()
    }

    fn handle(&mut self, event: SkillsEvent) -> Option<Vec<Skill>> {
        match event {
            SkillsEvent::SetName { name } => {
                self.pending.name = name;
                None
            }
            SkillsEvent::SetLevel { level } => {
                self.pending.level = level;
                None
            }
            SkillsEvent::SetCategory { category } => {
                self.pending.category = category;
                None
            }
            SkillsEvent::Add => self.add_pending(),
            SkillsEvent::Remove { id } => {
                self.skills.retain(|s| s.id != id);
                Some(self.slice())
            }
        }
    }
}
