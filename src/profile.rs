//! Fixed page content.

pub const OWNER: &str = "Sadgyan Singh";
pub const HEADLINE: &str = "Full Stack Developer";
pub const HEADLINE_ACCENT: &str = "| AI/ML";
pub const PITCH: &str = "I develop modern web apps powered by machine learning.";

pub const ABOUT: &str = "I am a passionate Full Stack Developer and AI/ML enthusiast who enjoys building scalable web applications and solving real-world problems through code. I work primarily with the MERN stack, Python, and data tools like Pandas, NumPy, Streamlit, and Plotly.";

pub const TAGLINES: &[&str] = &[
    "Building with the MERN stack",
    "Turning data into decisions",
    "Shipping ML-powered products",
    "Learning something new every day",
];

pub const AVATAR_PATH: &str = "/avatar.png";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const RESUME_FILE_NAME: &str = "SadgyanSinghResume.pdf";

pub const GITHUB_URL: &str = "https://github.com/ssadgyan";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/sadgyan-singh-789b8b253";

pub const LOCATION: &str = "Gurugram, Haryana";
pub const PHONE: &str = "9044351175";
pub const EMAILS: &[&str] = &["dsvvsadgyansinghindo@gmail.com", "2501940046@krmu.edu.in"];

const WHATSAPP_NUMBER: &str = "919044351175";
const WHATSAPP_GREETING: &str = "Hi Sadgyan, I found your portfolio and would like to connect.";

/// In-page section anchors, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
    Projects,
    Hackathons,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Hackathons,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Hackathons => "hackathons",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Hackathons => "Hackathons",
            Section::Contact => "Contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Hackathons => "Hackathons & Achievements",
            other => other.nav_label(),
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

pub const SKILLS: &[&str] = &[
    "Java, Python, C, C++",
    "MERN (MongoDB, Express, React, Node)",
    "AWS, MongoDB Atlas",
    "Pandas, NumPy, Plotly, Streamlit",
    "Machine Learning Basics",
    "Git, GitHub, Vercel",
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub url: Option<&'static str>,
    pub summary: &'static str,
    pub tech: &'static str,
}

impl Project {
    /// Link text for the deployed site, without the scheme.
    pub fn display_url(&self) -> Option<&'static str> {
        self.url.map(|u| {
            u.trim_start_matches("https://")
                .trim_start_matches("http://")
                .trim_end_matches('/')
        })
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Handyman (Home Service Platform)",
        url: None,
        summary: "MERN-based platform for booking home repair & maintenance services.",
        tech: "MERN, MongoDB, AWS",
    },
    Project {
        title: "FraudGuardian (Credit Card Fraud Detection)",
        url: Some("https://fraudgradian.vercel.app/"),
        summary: "ML-based system to detect fraudulent transactions. Led a team of 3.",
        tech: "Python, Jupyter, MERN, MongoDB, Render, Vercel",
    },
];

pub const HACKATHONS: &[&str] = &[
    "Hackathon 6.0 Jaipur",
    "Build and Beyond",
    "Code Canvas",
    "Kaggle 5-Day Challenge",
    "4th rank in BCA Department",
];

/// `wa.me` deep link with the greeting prefilled.
pub fn whatsapp_url() -> String {
    format!(
        "https://wa.me/{WHATSAPP_NUMBER}?text={}",
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

/// Copyright footer, using the year the site was built.
pub fn footer_line() -> String {
    format!("© {} {OWNER}. All rights reserved.", env!("BUILD_YEAR"))
}
