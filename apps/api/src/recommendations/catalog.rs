//! Static recommendation bundles keyed by interest area.
//!
//! Only three areas carry a bundle. Every other key, including empty or
//! unknown ones, resolves to web development.

use serde::Serialize;

use crate::models::profile::InterestArea;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapPhase {
    pub phase: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub title: &'static str,
    pub provider: &'static str,
    pub rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationBundle {
    pub careers: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub roadmap: &'static [RoadmapPhase],
    pub courses: &'static [Course],
}

pub const DEFAULT_INTEREST: InterestArea = InterestArea::WebDevelopment;

static DATA_AI: RecommendationBundle = RecommendationBundle {
    careers: &[
        "Data Scientist",
        "Machine Learning Engineer",
        "AI Research Scientist",
        "Data Analyst",
    ],
    skills: &[
        "Python",
        "TensorFlow",
        "Statistics",
        "Big Data",
        "Deep Learning",
    ],
    roadmap: &[
        RoadmapPhase {
            phase: "Foundation (Months 1-3)",
            items: &[
                "Python Programming",
                "Statistics & Probability",
                "Data Manipulation (Pandas)",
            ],
        },
        RoadmapPhase {
            phase: "Intermediate (Months 4-6)",
            items: &[
                "Machine Learning Algorithms",
                "Data Visualization",
                "SQL Databases",
            ],
        },
        RoadmapPhase {
            phase: "Advanced (Months 7-12)",
            items: &[
                "Deep Learning",
                "MLOps",
                "Portfolio Projects",
                "Industry Certifications",
            ],
        },
    ],
    courses: &[
        Course {
            title: "Machine Learning by Stanford",
            provider: "Coursera",
            rating: 4.9,
        },
        Course {
            title: "Deep Learning Specialization",
            provider: "Coursera",
            rating: 4.8,
        },
        Course {
            title: "Python for Data Science",
            provider: "edX",
            rating: 4.7,
        },
    ],
};

static CLOUD_DEVOPS: RecommendationBundle = RecommendationBundle {
    careers: &[
        "Cloud Engineer",
        "DevOps Engineer",
        "Site Reliability Engineer",
        "Cloud Architect",
    ],
    skills: &[
        "AWS/Azure/GCP",
        "Docker",
        "Kubernetes",
        "CI/CD",
        "Infrastructure as Code",
    ],
    roadmap: &[
        RoadmapPhase {
            phase: "Foundation (Months 1-3)",
            items: &[
                "Cloud Fundamentals",
                "Linux Administration",
                "Networking Basics",
            ],
        },
        RoadmapPhase {
            phase: "Intermediate (Months 4-6)",
            items: &[
                "Containerization",
                "CI/CD Pipelines",
                "Monitoring & Logging",
            ],
        },
        RoadmapPhase {
            phase: "Advanced (Months 7-12)",
            items: &[
                "Kubernetes Orchestration",
                "Infrastructure as Code",
                "Cloud Certifications",
            ],
        },
    ],
    courses: &[
        Course {
            title: "AWS Solutions Architect",
            provider: "AWS",
            rating: 4.9,
        },
        Course {
            title: "Docker & Kubernetes",
            provider: "Udemy",
            rating: 4.8,
        },
        Course {
            title: "DevOps Engineering",
            provider: "Coursera",
            rating: 4.7,
        },
    ],
};

static WEB_DEVELOPMENT: RecommendationBundle = RecommendationBundle {
    careers: &[
        "Frontend Developer",
        "Full Stack Developer",
        "React Developer",
        "UI Engineer",
    ],
    skills: &[
        "JavaScript",
        "React",
        "Node.js",
        "TypeScript",
        "CSS Frameworks",
    ],
    roadmap: &[
        RoadmapPhase {
            phase: "Foundation (Months 1-3)",
            items: &[
                "HTML/CSS Mastery",
                "JavaScript ES6+",
                "Version Control (Git)",
            ],
        },
        RoadmapPhase {
            phase: "Intermediate (Months 4-6)",
            items: &["React/Vue/Angular", "REST APIs", "Database Integration"],
        },
        RoadmapPhase {
            phase: "Advanced (Months 7-12)",
            items: &[
                "Full Stack Projects",
                "Performance Optimization",
                "Deployment & Hosting",
            ],
        },
    ],
    courses: &[
        Course {
            title: "Complete React Developer",
            provider: "Udemy",
            rating: 4.8,
        },
        Course {
            title: "Full Stack Web Development",
            provider: "freeCodeCamp",
            rating: 4.9,
        },
        Course {
            title: "Advanced JavaScript",
            provider: "Pluralsight",
            rating: 4.7,
        },
    ],
};

/// Interest area whose bundle is actually served for `interests`.
pub fn resolve(interests: &str) -> InterestArea {
    match InterestArea::from_key(interests) {
        Some(area @ (InterestArea::DataAi | InterestArea::CloudDevops)) => area,
        _ => DEFAULT_INTEREST,
    }
}

/// Total lookup: unknown keys get the web development bundle.
pub fn lookup(interests: &str) -> &'static RecommendationBundle {
    match resolve(interests) {
        InterestArea::DataAi => &DATA_AI,
        InterestArea::CloudDevops => &CLOUD_DEVOPS,
        _ => &WEB_DEVELOPMENT,
    }
}
