pub mod resume;
pub mod samples;
pub mod user;

pub use resume::{
    Education, PersonalInfo, Resume, Skill, SkillCategory, SkillLevel, Template, WorkExperience,
};
pub use user::User;
