use serde::{Deserialize, Serialize};

/// Career profile collected by the wizard.
///
/// Every field is kept as the raw submitted string. Enumerated fields are
/// parsed on demand so that out-of-range values fall back to defaults
/// instead of rejecting the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub education: String,
    pub skills: String,
    pub experience: String,
    pub interests: String,
    pub goals: String,
}

impl Profile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Education => &self.education,
            ProfileField::Skills => &self.skills,
            ProfileField::Experience => &self.experience,
            ProfileField::Interests => &self.interests,
            ProfileField::Goals => &self.goals,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Education => &mut self.education,
            ProfileField::Skills => &mut self.skills,
            ProfileField::Experience => &mut self.experience,
            ProfileField::Interests => &mut self.interests,
            ProfileField::Goals => &mut self.goals,
        };
        *slot = value;
    }

    /// Fields that are still empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        ProfileField::ALL
            .iter()
            .copied()
            .filter(|&f| self.field(f).is_empty())
            .collect()
    }

    pub fn interest_area(&self) -> Option<InterestArea> {
        InterestArea::from_key(&self.interests)
    }

    pub fn experience_band(&self) -> Option<ExperienceBand> {
        ExperienceBand::from_key(&self.experience)
    }

    pub fn education_level(&self) -> Option<EducationLevel> {
        EducationLevel::from_key(&self.education)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Education,
    Skills,
    Experience,
    Interests,
    Goals,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::Name,
        ProfileField::Education,
        ProfileField::Skills,
        ProfileField::Experience,
        ProfileField::Interests,
        ProfileField::Goals,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Education => "education",
            ProfileField::Skills => "skills",
            ProfileField::Experience => "experience",
            ProfileField::Interests => "interests",
            ProfileField::Goals => "goals",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "highschool")]
    HighSchool,
    #[serde(rename = "associate")]
    Associate,
    #[serde(rename = "bachelor")]
    Bachelor,
    #[serde(rename = "master")]
    Master,
    #[serde(rename = "phd")]
    Phd,
    #[serde(rename = "bootcamp")]
    Bootcamp,
    #[serde(rename = "self-taught")]
    SelfTaught,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 7] = [
        EducationLevel::HighSchool,
        EducationLevel::Associate,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::Phd,
        EducationLevel::Bootcamp,
        EducationLevel::SelfTaught,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "highschool",
            EducationLevel::Associate => "associate",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::Master => "master",
            EducationLevel::Phd => "phd",
            EducationLevel::Bootcamp => "bootcamp",
            EducationLevel::SelfTaught => "self-taught",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Associate => "Associate Degree",
            EducationLevel::Bachelor => "Bachelor's Degree",
            EducationLevel::Master => "Master's Degree",
            EducationLevel::Phd => "PhD",
            EducationLevel::Bootcamp => "Bootcamp Graduate",
            EducationLevel::SelfTaught => "Self-Taught",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceBand {
    #[serde(rename = "0")]
    UnderOneYear,
    #[serde(rename = "1-2")]
    OneToTwo,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "5-10")]
    FiveToTen,
    #[serde(rename = "10+")]
    TenPlus,
}

impl ExperienceBand {
    pub const ALL: [ExperienceBand; 5] = [
        ExperienceBand::UnderOneYear,
        ExperienceBand::OneToTwo,
        ExperienceBand::ThreeToFive,
        ExperienceBand::FiveToTen,
        ExperienceBand::TenPlus,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ExperienceBand::UnderOneYear => "0",
            ExperienceBand::OneToTwo => "1-2",
            ExperienceBand::ThreeToFive => "3-5",
            ExperienceBand::FiveToTen => "5-10",
            ExperienceBand::TenPlus => "10+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceBand::UnderOneYear => "Less than 1 year",
            ExperienceBand::OneToTwo => "1-2 years",
            ExperienceBand::ThreeToFive => "3-5 years",
            ExperienceBand::FiveToTen => "5-10 years",
            ExperienceBand::TenPlus => "10+ years",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterestArea {
    DataAi,
    CloudDevops,
    WebDevelopment,
    MobileDevelopment,
    Cybersecurity,
    BusinessAnalytics,
    CreativeTech,
    ProductManagement,
}

impl InterestArea {
    pub const ALL: [InterestArea; 8] = [
        InterestArea::DataAi,
        InterestArea::CloudDevops,
        InterestArea::WebDevelopment,
        InterestArea::MobileDevelopment,
        InterestArea::Cybersecurity,
        InterestArea::BusinessAnalytics,
        InterestArea::CreativeTech,
        InterestArea::ProductManagement,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            InterestArea::DataAi => "data-ai",
            InterestArea::CloudDevops => "cloud-devops",
            InterestArea::WebDevelopment => "web-development",
            InterestArea::MobileDevelopment => "mobile-development",
            InterestArea::Cybersecurity => "cybersecurity",
            InterestArea::BusinessAnalytics => "business-analytics",
            InterestArea::CreativeTech => "creative-tech",
            InterestArea::ProductManagement => "product-management",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InterestArea::DataAi => "Data Science & AI",
            InterestArea::CloudDevops => "Cloud & DevOps",
            InterestArea::WebDevelopment => "Web Development",
            InterestArea::MobileDevelopment => "Mobile Development",
            InterestArea::Cybersecurity => "Cybersecurity",
            InterestArea::BusinessAnalytics => "Business & Analytics",
            InterestArea::CreativeTech => "Creative Technology",
            InterestArea::ProductManagement => "Product Management",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|i| i.key() == key)
    }
}
