use super::document::{PreviewDocument, PreviewSection};

impl PreviewDocument {
    /// Plain markdown rendering of the preview, section by section.
    pub fn to_markdown(&self) -> String {
        let mut md = format!("# {}\n\n", self.header.name);

        if !self.header.contacts.is_empty() {
            let line = self
                .header
                .contacts
                .iter()
                .map(|c| c.label.as_str())
                .collect::<Vec<_>>()
                .join(" | ");
            md.push_str(&format!("{line}\n\n"));
        }

        for section in &self.sections {
            md.push_str(&format!("## {}\n\n", section.heading()));
            match section {
                PreviewSection::Summary(text) => md.push_str(&format!("{text}\n\n")),
                PreviewSection::Experience(items) => {
                    for item in items {
                        md.push_str(&format!(
                            "### {} — {}\n_{}_\n\n",
                            item.position, item.company, item.dates
                        ));
                        for bullet in item.bullets.iter().filter(|b| !b.trim().is_empty()) {
                            let text = bullet.trim_start_matches('•').trim();
                            md.push_str(&format!("- {text}\n"));
                        }
                        md.push('\n');
                    }
                }
                PreviewSection::Education(items) => {
                    for item in items {
                        md.push_str(&format!(
                            "### {}\n{} _{}_\n",
                            item.title, item.institution, item.dates
                        ));
                        if let Some(gpa) = &item.gpa {
                            md.push_str(&format!("GPA: {gpa}\n"));
                        }
                        md.push('\n');
                    }
                }
                PreviewSection::Skills(groups) => {
                    for group in groups {
                        md.push_str(&format!(
                            "**{}:** {}\n",
                            group.category.as_str(),
                            group.skills.join(", ")
                        ));
                    }
                    md.push('\n');
                }
            }
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use crate::models::samples::sample_resumes;
    use crate::models::Resume;
    use crate::preview::render;
    use chrono::Utc;

    #[test]
    fn test_markdown_lists_sections_and_present() {
        let md = render(&sample_resumes()[0]).to_markdown();
        assert!(md.starts_with("# John Doe\n"));
        assert!(md.contains("## Professional Summary"));
        assert!(md.contains("_2022-01 - Present_"));
        assert!(md.contains("- Built RESTful APIs and microservices using Python and Django"));
        assert!(md.contains("**Technical:** JavaScript, React, Node.js, Python"));
        assert!(md.contains("GPA: 3.8"));
    }

    #[test]
    fn test_markdown_for_empty_draft_is_header_only() {
        let md = render(&Resume::new_draft(Utc::now())).to_markdown();
        assert_eq!(md, "# Your Name\n\n");
    }
}
