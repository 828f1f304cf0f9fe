//! Seed data loaded at startup: one demo account and two example resumes.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::resume::{
    Education, PersonalInfo, Resume, Skill, SkillCategory, SkillLevel, Template, WorkExperience,
};
use super::user::User;

pub const DEMO_EMAIL: &str = "demo@resumecraft.com";
pub const DEMO_NAME: &str = "Demo User";

pub fn demo_user() -> User {
    User {
        id: Uuid::new_v4(),
        email: DEMO_EMAIL.to_string(),
        name: DEMO_NAME.to_string(),
    }
}

pub fn sample_resumes() -> Vec<Resume> {
    vec![software_engineer(), marketing_manager()]
}

fn timestamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn bullets(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

fn experience(
    company: &str,
    position: &str,
    start: &str,
    end: &str,
    lines: &[&str],
) -> WorkExperience {
    WorkExperience {
        id: Uuid::new_v4(),
        company: company.to_string(),
        position: position.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        current: end.is_empty(),
        description: bullets(lines),
    }
}

fn software_engineer() -> Resume {
    Resume {
        id: Uuid::new_v4(),
        title: "Software Engineer Resume".to_string(),
        template: Template::Modern,
        personal_info: PersonalInfo {
            full_name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            linkedin: Some("linkedin.com/in/johndoe".to_string()),
            website: Some("johndoe.dev".to_string()),
            summary: "Experienced software engineer with 5+ years developing scalable web \
                      applications using modern technologies."
                .to_string(),
        },
        work_experience: vec![
            experience(
                "Tech Corp",
                "Senior Software Engineer",
                "2022-01",
                "",
                &[
                    "• Developed and maintained responsive web applications using React, Node.js, and PostgreSQL",
                    "• Collaborated with cross-functional teams to deliver high-quality software solutions",
                    "• Improved application performance by 40% through code optimization and caching strategies",
                ],
            ),
            experience(
                "StartupCo",
                "Software Engineer",
                "2020-03",
                "2021-12",
                &[
                    "• Built RESTful APIs and microservices using Python and Django",
                    "• Implemented automated testing and CI/CD pipelines",
                    "• Mentored junior developers and conducted code reviews",
                ],
            ),
        ],
        education: vec![Education {
            id: Uuid::new_v4(),
            institution: "University of California, Berkeley".to_string(),
            degree: "Bachelor of Science".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2016-09".to_string(),
            end_date: "2020-05".to_string(),
            gpa: Some("3.8".to_string()),
        }],
        skills: vec![
            Skill::new("JavaScript", SkillLevel::Expert, SkillCategory::Technical),
            Skill::new("React", SkillLevel::Expert, SkillCategory::Technical),
            Skill::new("Node.js", SkillLevel::Advanced, SkillCategory::Technical),
            Skill::new("Python", SkillLevel::Advanced, SkillCategory::Technical),
            Skill::new("Leadership", SkillLevel::Advanced, SkillCategory::Soft),
            Skill::new("Communication", SkillLevel::Expert, SkillCategory::Soft),
        ],
        created_at: timestamp(2024, 1, 15, 10, 0),
        updated_at: timestamp(2024, 1, 20, 15, 30),
    }
}

fn marketing_manager() -> Resume {
    Resume {
        id: Uuid::new_v4(),
        title: "Marketing Manager Resume".to_string(),
        template: Template::Classic,
        personal_info: PersonalInfo {
            full_name: "Jane Smith".to_string(),
            email: "jane.smith@email.com".to_string(),
            phone: "(555) 987-6543".to_string(),
            location: "New York, NY".to_string(),
            linkedin: Some("linkedin.com/in/janesmith".to_string()),
            website: None,
            summary: "Results-driven marketing manager with 7+ years of experience in digital \
                      marketing and brand management."
                .to_string(),
        },
        work_experience: vec![experience(
            "Marketing Agency",
            "Senior Marketing Manager",
            "2021-06",
            "",
            &[
                "• Managed digital marketing campaigns across multiple channels, increasing brand awareness by 35%",
                "• Analyzed campaign performance data to optimize ROI and reduce customer acquisition costs",
                "• Led a team of 5 marketing specialists to execute integrated marketing strategies",
            ],
        )],
        education: vec![Education {
            id: Uuid::new_v4(),
            institution: "New York University".to_string(),
            degree: "Master of Business Administration".to_string(),
            field: "Marketing".to_string(),
            start_date: "2015-09".to_string(),
            end_date: "2017-05".to_string(),
            gpa: Some("3.9".to_string()),
        }],
        skills: vec![
            Skill::new("Google Analytics", SkillLevel::Expert, SkillCategory::Technical),
            Skill::new("SEO", SkillLevel::Advanced, SkillCategory::Technical),
            Skill::new("Content Marketing", SkillLevel::Expert, SkillCategory::Technical),
            Skill::new("Team Leadership", SkillLevel::Advanced, SkillCategory::Soft),
        ],
        created_at: timestamp(2024, 1, 10, 9, 0),
        updated_at: timestamp(2024, 1, 18, 14, 20),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_two_samples_with_distinct_ids() {
        let resumes = sample_resumes();
        assert_eq!(resumes.len(), 2);
        assert_ne!(resumes[0].id, resumes[1].id);
    }

    #[test]
    fn test_entry_ids_unique_within_each_sequence() {
        for resume in sample_resumes() {
            let exp: HashSet<_> = resume.work_experience.iter().map(|e| e.id).collect();
            assert_eq!(exp.len(), resume.work_experience.len());
            let skills: HashSet<_> = resume.skills.iter().map(|s| s.id).collect();
            assert_eq!(skills.len(), resume.skills.len());
        }
    }

    #[test]
    fn test_timestamps_parsed() {
        let resume = software_engineer();
        assert_eq!(resume.created_at.to_rfc3339(), "2024-01-15T10:00:00+00:00");
        assert!(resume.updated_at > resume.created_at);
    }

    #[test]
    fn test_current_role_flagged() {
        let resume = software_engineer();
        assert!(resume.work_experience[0].current);
        assert!(!resume.work_experience[1].current);
    }
}
