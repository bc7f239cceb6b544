//! Canned advice bodies, one builder per topic.
//!
//! Builders interpolate raw profile values. An empty value is replaced by
//! a generic noun phrase so the sentence still reads.

use crate::models::profile::Profile;

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

pub fn skills(profile: &Profile) -> String {
    format!(
        "Based on your profile in {}, I recommend focusing on these key skills:\n\n\
         • **Technical Skills**: Stay current with the latest frameworks and tools in your field\n\
         • **Soft Skills**: Communication, leadership, and problem-solving are increasingly valuable\n\
         • **Industry-Specific Knowledge**: Understanding business context makes you more effective\n\n\
         Consider taking online courses, attending workshops, or working on personal projects. \
         Would you like specific recommendations for any of these areas?",
        or_placeholder(&profile.interests, "technology")
    )
}

pub fn resume(profile: &Profile) -> String {
    format!(
        "Here are key tips to improve your resume:\n\n\
         • **Quantify achievements**: Use numbers and percentages to show impact\n\
         • **Tailor content**: Customize for each job application using relevant keywords\n\
         • **Skills section**: List both technical and soft skills prominently\n\
         • **Projects**: Include 2-3 relevant projects with technologies used\n\
         • **Format**: Keep it clean, ATS-friendly, and 1-2 pages max\n\n\
         Given your {} experience level, focus on highlighting your growth and potential. \
         Need help with any specific section?",
        profile.experience
    )
}

pub fn interview(_profile: &Profile) -> String {
    "Interview preparation is crucial for career success:\n\n\
     **Technical Preparation**:\n\
     • Practice coding problems on LeetCode or HackerRank\n\
     • Review fundamental concepts in your field\n\
     • Prepare for system design questions (for senior roles)\n\n\
     **Behavioral Preparation**:\n\
     • Use the STAR method (Situation, Task, Action, Result)\n\
     • Prepare stories that showcase leadership and problem-solving\n\
     • Research the company culture and values\n\n\
     **Mock Interviews**: Practice with peers or use platforms like Pramp. \
     Would you like specific question examples for your field?"
        .to_string()
}

const GENERIC_CERTIFICATIONS: &str = "Popular certifications in tech include cloud platforms \
     (AWS, Azure, GCP), project management (PMP, Scrum Master), and specialized technical \
     certifications.";

/// Interest-specific certification advice. Only four interest keys carry one.
fn certifications_for(interests: &str) -> Option<&'static str> {
    match interests {
        "data-ai" => Some(
            "For Data Science/AI: AWS Certified Machine Learning, Google Professional Data \
             Engineer, or Microsoft Azure AI Engineer certifications are highly valued.",
        ),
        "cloud-devops" => Some(
            "For Cloud/DevOps: AWS Solutions Architect, Azure DevOps Engineer, or Google Cloud \
             Professional Cloud Architect are excellent choices.",
        ),
        "web-development" => Some(
            "For Web Development: Consider AWS Developer Associate, Google Mobile Web \
             Specialist, or framework-specific certifications like React or Angular.",
        ),
        "cybersecurity" => Some(
            "For Cybersecurity: CompTIA Security+, CISSP, or Certified Ethical Hacker (CEH) \
             are industry standards.",
        ),
        _ => None,
    }
}

pub fn certification(profile: &Profile) -> String {
    format!(
        "{}\n\nCertifications validate your expertise and can increase salary potential by \
         15-25%. Choose ones aligned with your career goals and ensure you have practical \
         experience to back them up.",
        certifications_for(&profile.interests).unwrap_or(GENERIC_CERTIFICATIONS)
    )
}

pub fn salary(profile: &Profile) -> String {
    format!(
        "Salary expectations vary by location, experience, and specialization:\n\n\
         **Research Tools**:\n\
         • Glassdoor, PayScale, and levels.fyi for market data\n\
         • LinkedIn Salary Insights for role-specific information\n\
         • AngelList for startup compensation ranges\n\n\
         **Negotiation Tips**:\n\
         • Know your market value before discussions\n\
         • Consider total compensation (benefits, equity, flexibility)\n\
         • Highlight unique value you bring to the role\n\
         • Be prepared to discuss your achievements quantitatively\n\n\
         With your background in {}, focus on building specialized skills that command \
         premium salaries.",
        or_placeholder(&profile.interests, "technology")
    )
}

pub fn job_market(profile: &Profile) -> String {
    format!(
        "The current job market shows strong demand in several areas:\n\n\
         **High-Growth Fields**:\n\
         • AI/Machine Learning: 35% growth expected\n\
         • Cloud Computing: Continued expansion as companies digitize\n\
         • Cybersecurity: Critical need with rising threats\n\
         • Data Engineering: Supporting AI/ML infrastructure needs\n\n\
         **Market Trends**:\n\
         • Remote work options are now standard\n\
         • Companies value diverse, adaptable skill sets\n\
         • Emphasis on continuous learning and growth mindset\n\n\
         Your profile in {} positions you well in this market. Consider focusing on emerging \
         technologies within your field.",
        or_placeholder(&profile.interests, "technology")
    )
}

pub fn career_change(profile: &Profile) -> String {
    format!(
        "Career transitions require strategic planning:\n\n\
         **Assessment Phase**:\n\
         • Identify transferable skills from your current role\n\
         • Research target field requirements and culture\n\
         • Network with professionals in your target industry\n\n\
         **Skill Development**:\n\
         • Bridge gaps through online courses or bootcamps\n\
         • Gain experience through projects, volunteering, or freelancing\n\
         • Consider gradual transition vs. complete career pivot\n\n\
         **Job Search Strategy**:\n\
         • Leverage your network for informational interviews\n\
         • Tailor your story to show why the change makes sense\n\
         • Be prepared to discuss your motivation clearly\n\n\
         Based on your {}, what specific field are you considering?",
        or_placeholder(&profile.skills, "current skills")
    )
}

pub fn networking(profile: &Profile) -> String {
    format!(
        "Networking is essential for career growth:\n\n\
         **Online Networking**:\n\
         • Optimize your LinkedIn profile with keywords\n\
         • Engage with industry content and thought leaders\n\
         • Join relevant professional groups and communities\n\n\
         **Offline Networking**:\n\
         • Attend industry meetups, conferences, and workshops\n\
         • Join professional associations in your field\n\
         • Participate in hackathons or collaborative projects\n\n\
         **Relationship Building**:\n\
         • Focus on giving value before asking for help\n\
         • Follow up consistently with new connections\n\
         • Maintain relationships with former colleagues\n\n\
         In {}, consider joining specialized communities and attending field-specific events.",
        or_placeholder(&profile.interests, "your field")
    )
}

pub fn remote_work(profile: &Profile) -> String {
    format!(
        "Remote work has become a permanent fixture:\n\n\
         **Remote Work Skills**:\n\
         • Strong communication and collaboration abilities\n\
         • Self-discipline and time management\n\
         • Proficiency with digital collaboration tools\n\
         • Results-oriented mindset\n\n\
         **Finding Remote Opportunities**:\n\
         • Use remote-specific job boards (RemoteOK, We Work Remotely)\n\
         • Filter for remote options on traditional job sites\n\
         • Network with remote workers in your field\n\n\
         **Success Tips**:\n\
         • Create a dedicated workspace\n\
         • Establish clear work-life boundaries\n\
         • Over-communicate with your team\n\
         • Stay visible through regular check-ins\n\n\
         Many companies in {} offer flexible remote arrangements.",
        or_placeholder(&profile.interests, "technology")
    )
}

pub fn freelance(profile: &Profile) -> String {
    format!(
        "Freelancing can provide flexibility and higher earning potential:\n\n\
         **Getting Started**:\n\
         • Build a strong portfolio showcasing your best work\n\
         • Start with platforms like Upwork, Fiverr, or Toptal\n\
         • Set competitive but fair pricing based on market research\n\n\
         **Building Your Business**:\n\
         • Focus on a specific niche or specialization\n\
         • Collect testimonials and case studies\n\
         • Develop long-term client relationships\n\
         • Consider transitioning regular clients to retainer agreements\n\n\
         **Essential Skills**:\n\
         • Project management and time tracking\n\
         • Client communication and boundary setting\n\
         • Basic business and tax knowledge\n\n\
         With your skills in {}, you could offer specialized services to businesses in need \
         of expertise.",
        or_placeholder(&profile.skills, "technology")
    )
}

pub fn leadership(_profile: &Profile) -> String {
    "Developing leadership skills opens up advancement opportunities:\n\n\
     **Core Leadership Competencies**:\n\
     • Emotional intelligence and empathy\n\
     • Clear communication and active listening\n\
     • Decision-making under uncertainty\n\
     • Coaching and mentoring abilities\n\n\
     **Building Leadership Experience**:\n\
     • Volunteer to lead projects or initiatives\n\
     • Mentor junior team members\n\
     • Join professional leadership development programs\n\
     • Seek feedback and work on areas for improvement\n\n\
     **Technical Leadership** (relevant for your background):\n\
     • Balance technical depth with business understanding\n\
     • Learn to translate technical concepts for non-technical stakeholders\n\
     • Stay current with industry trends while focusing on team development\n\n\
     Consider pursuing leadership certifications or an MBA if you're serious about \
     management roles."
        .to_string()
}

pub fn startup(profile: &Profile) -> String {
    format!(
        "The startup ecosystem offers unique opportunities:\n\n\
         **Startup Advantages**:\n\
         • Rapid skill development and diverse responsibilities\n\
         • Equity potential and career acceleration\n\
         • Innovation-focused, fast-paced environment\n\
         • Direct impact on company success\n\n\
         **Considerations**:\n\
         • Higher risk but potentially higher reward\n\
         • Less job security and structured benefits\n\
         • Longer hours and higher stress levels\n\
         • Need for adaptability and wearing multiple hats\n\n\
         **Preparation Tips**:\n\
         • Build a diverse skill set beyond your specialization\n\
         • Develop comfort with ambiguity and change\n\
         • Network within the startup community\n\
         • Consider the company's funding stage and runway\n\n\
         Your background in {} is valuable in the startup world. Research companies solving \
         problems you're passionate about.",
        or_placeholder(&profile.interests, "technology")
    )
}

/// Fallback prompts used when no topic matches. Indexed by the random source.
pub fn default_responses(profile: &Profile) -> [String; 4] {
    [
        "That's a great question! Based on your profile and goals, I'd recommend focusing on \
         continuous learning and skill development. What specific area would you like to \
         explore further?"
            .to_string(),
        "I'm here to help you navigate your career journey. Could you provide more details \
         about what you'd like to know? I can assist with skills development, job search \
         strategies, interview preparation, and more."
            .to_string(),
        "Every career path is unique, and yours is no exception. Let's dive deeper into your \
         specific situation. What challenges or opportunities are you currently facing?"
            .to_string(),
        format!(
            "Career development is an ongoing process. Given your background in {}, there are \
             many exciting directions we could explore. What interests you most right now?",
            or_placeholder(&profile.interests, "your field")
        ),
    ]
}

/// Opening assistant message for a new conversation.
pub fn greeting(profile: &Profile) -> String {
    format!(
        "Hi {}! I'm CareerGenie, your AI career advisor. I've analyzed your profile and I'm \
         ready to help you with career guidance, skill development, job search strategies, \
         and more. What would you like to discuss?",
        or_placeholder(&profile.name, "there")
    )
}

/// Quick questions offered next to the chat.
pub const SUGGESTED_QUESTIONS: [&str; 6] = [
    "What skills should I focus on next?",
    "How can I improve my resume?",
    "What's the job market like in my field?",
    "How do I prepare for technical interviews?",
    "What certifications would help my career?",
    "How can I transition to a new role?",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interests_fall_back_to_placeholders() {
        let profile = Profile::default();
        assert!(skills(&profile).contains("profile in technology"));
        assert!(networking(&profile).contains("In your field,"));
        assert!(career_change(&profile).contains("Based on your current skills,"));
        assert!(freelance(&profile).contains("skills in technology"));
    }

    #[test]
    fn test_certification_uses_interest_paragraph() {
        let profile = Profile {
            interests: "cybersecurity".to_string(),
            ..Profile::default()
        };
        let text = certification(&profile);
        assert!(text.starts_with("For Cybersecurity:"));
        assert!(text.contains("15-25%"));
    }

    #[test]
    fn test_certification_generic_for_uncovered_interest() {
        let profile = Profile {
            interests: "creative-tech".to_string(),
            ..Profile::default()
        };
        assert!(certification(&profile).starts_with("Popular certifications in tech"));
    }

    #[test]
    fn test_greeting_uses_name_or_there() {
        let named = Profile {
            name: "Grace".to_string(),
            ..Profile::default()
        };
        assert!(greeting(&named).starts_with("Hi Grace!"));
        assert!(greeting(&Profile::default()).starts_with("Hi there!"));
    }

    #[test]
    fn test_last_default_response_interpolates_interests() {
        let profile = Profile {
            interests: "cloud-devops".to_string(),
            ..Profile::default()
        };
        let defaults = default_responses(&profile);
        assert!(defaults[3].contains("background in cloud-devops"));
        assert!(default_responses(&Profile::default())[3].contains("background in your field"));
    }
}
