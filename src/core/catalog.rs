use crate::domain::model::{ContactLink, EducationEntry, ProjectEntry, SkillEntry};

pub const PAGE_TITLE: &str = "Madhu Sekhar | AI/ML Portfolio";
pub const NAME: &str = "Hi, I'm Madhu Sekhar";
pub const HEADLINE: &str = "AI/ML Intern | Python | Data Science Enthusiast";

const ABOUT: &str = "\
I'm a passionate Software Engineer with a strong focus on Artificial Intelligence, Machine Learning, Web Development, and Scalable System Design.

I Thrive on transforming complex problems into elegant, data-driven solutions — whether it's crafting intelligent ML models, designing responsive dashboards, or developing robust end-to-end applications. With a blend of creativity and precision, I turn ideas into impactful, production-ready systems that solve real-world challenges.

Driven by curiosity and continuous learning, I specialize in building smart, user-centric solutions that bridge the gap between cutting-edge technology and practical implementation.";

const EXPERIENCE: &str = "\
Software Engineer | Lyros Technologies Pvt. Ltd. (Feb 2025 - Present)

- Undergoing a comprehensive, industry-aligned training program specializing in Artificial Intelligence and Machine Learning (AI/ML).
- Gaining hands-on experience with Python, scikit-learn, deep learning frameworks, and real-world data pipelines.
- Building and deploying end-to-end ML solutions, translating theoretical concepts into production-grade applications.
- Collaborating closely with senior engineers and mentors, contributing to live projects and enhancing both technical depth and professional agility.
- Focusing on scalable, intelligent system design while following agile development practices and modern software engineering principles.";

const SUMMARY: &str = "\
I'm a results-driven Software Engineer with a strong foundation in Artificial Intelligence, Machine Learning, and Full-Stack Development. Currently working at Lyros Technologies Pvt. Ltd., where I'm actively involved in real-time AI/ML projects and collaborative, agile-based development.

My expertise spans across:

- Python programming, data analysis, and ML model development using tools like scikit-learn, Pandas, and Seaborn.
- Building interactive web applications, enhanced with Lottie animations and custom UI/UX styling.
- Deploying scalable, modular systems that bridge the gap between data science and real-world applications.

With a passion for innovation and a commitment to continuous learning, I thrive on turning complex problems into intelligent, actionable solutions — whether it's through predictive modeling, system design, or intuitive data-driven apps.";

const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        label: "Email",
        url: "https://mail.google.com/mail/u/0/#inbox",
    },
    ContactLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/madhusekharshavala/",
    },
    ContactLink {
        label: "GitHub",
        url: "https://github.com/madhusekhar",
    },
];

/// Immutable display data behind every tab of the page. Built once at
/// startup from literal values; there is no mutation API and no I/O.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    skills: Vec<SkillEntry>,
    projects: Vec<ProjectEntry>,
    education: Vec<EducationEntry>,
}

impl ContentCatalog {
    pub fn new() -> Self {
        Self {
            skills: vec![
                SkillEntry {
                    name: "Python, Machine Learning",
                    proficiency: 90,
                },
                SkillEntry {
                    name: "GitHub, Streamlit, Flask, Docker, Kubernetes",
                    proficiency: 85,
                },
                SkillEntry {
                    name: "HTML, CSS, UI/UX Basics",
                    proficiency: 80,
                },
                SkillEntry {
                    name: "Pandas, NumPy, Scikit-learn, Matplotlib, Seaborn",
                    proficiency: 85,
                },
                SkillEntry {
                    name: "Linear Regression, Decision Tree, Random Forest, Logistic Regression",
                    proficiency: 80,
                },
            ],
            projects: vec![
                ProjectEntry {
                    title: "Zomato Restaurant Rating Prediction",
                    summary: "Built predictive models with real restaurant data, EDA, model evaluation, and visualization.",
                    details: "\
Developed an end-to-end machine learning pipeline using **Pandas, Seaborn, and Scikit-learn** to predict restaurant ratings from a real-world Zomato dataset.
- Conducted detailed **Exploratory Data Analysis (EDA)** to understand customer behavior and cuisine preferences.
- Applied **feature engineering** on categorical and geospatial data (like city, cuisines, location).
- Trained and evaluated multiple models including **Random Forest** and **Linear Regression**, achieving over **85% accuracy**.
- Visualized key features affecting restaurant ratings using **Seaborn heatmaps** and **Plotly charts**.",
                },
                ProjectEntry {
                    title: "Student Grading System",
                    summary: "GUI-based grading system with secure login, course management, and modular design.",
                    details: "\
Created a GUI-based internal tool using **Python and Tkinter**, enabling efficient student grade management for teachers and admins.
- Integrated **modular OOP design** for better maintainability and scalability.
- Enabled secure login system for **admin and faculty roles**.
- Managed subjects, grades, student records with data validation using **NumPy and Pandas**.
- Future-ready architecture designed to support **ML integration** for automated grading and analytics.",
                },
                ProjectEntry {
                    title: "Student Performance Prediction",
                    summary: "ML app predicting student scores with real-time visualization and CSV export.",
                    details: "\
Developed a **real-time web application** that predicts student final scores based on attendance and test data.
- Trained multiple regression models including **Linear, Polynomial, Decision Tree, and Random Forest Regression**.
- Created interactive **matplotlib and seaborn visualizations** for score trend comparison.
- Implemented **CSV export** of results and **batch prediction** feature for classroom evaluation.
- Deployed the model publicly, made mobile responsive with enhanced UI/UX and Lottie animations.",
                },
                ProjectEntry {
                    title: "Tax Calculator",
                    summary: "Interactive tax calculator app for Indian tax regimes with real-time validation and analytics.",
                    details: "\
Built a dynamic **Indian income tax calculator** that supports both **Old and New tax regimes**.
- Designed an intuitive form with validation using sliders and dropdowns.
- Implemented tax logic using **dictionaries, conditionals, and modular functions**.
- Integrated real-time **summary cards** and **Plotly bar charts** for visual tax breakdown.
- Added export functionality to **PDF and CSV**, and styled the UI with custom CSS for a professional look.",
                },
            ],
            education: vec![
                EducationEntry {
                    degree: "B.Tech",
                    field: "Electronics & Communication Engineering",
                    institution: "GPCET",
                    year: "2024",
                },
                EducationEntry {
                    degree: "Intermediate",
                    field: "MPC",
                    institution: "Sri Chaitanya Jr College",
                    year: "2017",
                },
            ],
        }
    }

    pub fn skills(&self) -> &[SkillEntry] {
        &self.skills
    }

    pub fn projects(&self) -> &[ProjectEntry] {
        &self.projects
    }

    pub fn education(&self) -> &[EducationEntry] {
        &self.education
    }

    pub fn about(&self) -> &'static str {
        ABOUT
    }

    pub fn experience(&self) -> &'static str {
        EXPERIENCE
    }

    pub fn summary(&self) -> &'static str {
        SUMMARY
    }

    pub fn contact_links(&self) -> &'static [ContactLink] {
        &CONTACT_LINKS
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::new()
    }
}
