// Canned suggestion catalogues used by `CannedSuggester`.

pub const SUMMARY_SUGGESTIONS: &[&str] = &[
    "Experienced software engineer with 5+ years developing scalable web applications",
    "Detail-oriented marketing professional with expertise in digital campaigns",
    "Results-driven sales manager with proven track record of exceeding targets",
    "Creative graphic designer passionate about brand storytelling",
    "Customer-focused project manager with strong leadership skills",
];

/// Multi-line bullet blocks. Each line becomes one description bullet.
pub const EXPERIENCE_DESCRIPTIONS: &[&str] = &[
    "• Developed and maintained responsive web applications using React, Node.js, and PostgreSQL\n\
     • Collaborated with cross-functional teams to deliver high-quality software solutions\n\
     • Improved application performance by 40% through code optimization and caching strategies",
    "• Managed digital marketing campaigns across multiple channels, increasing brand awareness by 35%\n\
     • Analyzed campaign performance data to optimize ROI and reduce customer acquisition costs\n\
     • Led a team of 3 marketing specialists to execute integrated marketing strategies",
    "• Exceeded monthly sales targets by 25% through strategic client relationship management\n\
     • Developed and maintained relationships with key accounts worth $2M+ in annual revenue\n\
     • Mentored junior sales representatives and improved team performance by 30%",
];

/// Role family used when no key matches the job title.
pub const DEFAULT_ROLE_FAMILY: &str = "Software Engineer";

/// Number of skills taken from a role family list.
pub const SKILLS_PER_SUGGESTION: usize = 5;

pub const SKILL_SUGGESTIONS: &[(&str, &[&str])] = &[
    (
        "Software Engineer",
        &["JavaScript", "React", "Node.js", "Python", "Git", "AWS", "Docker", "TypeScript"],
    ),
    (
        "Marketing",
        &[
            "Google Analytics",
            "SEO",
            "Content Marketing",
            "Social Media",
            "Email Marketing",
            "PPC",
            "Adobe Creative Suite",
        ],
    ),
    (
        "Sales",
        &[
            "CRM Software",
            "Lead Generation",
            "Negotiation",
            "Customer Relationship Management",
            "Salesforce",
            "Cold Calling",
        ],
    ),
    (
        "Design",
        &[
            "Adobe Photoshop",
            "Figma",
            "Sketch",
            "InDesign",
            "UI/UX Design",
            "Prototyping",
            "Brand Design",
        ],
    ),
];
