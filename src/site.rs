//! Static content shown on the home page.

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Sudip Niroula",
    role: "Python Developer",
    tagline: "A passionate Python Developer crafting elegant solutions to complex problems.",
    email: "sudipniroula5@gmail.com",
    github: "https://github.com/imsudip45",
    linkedin: "https://www.linkedin.com/in/sudip-niroula",
};

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "I'm a Python Developer with a passion for building efficient, scalable, and maintainable software solutions. With expertise in data processing, API development, and automation, I strive to create code that not only works well but is also elegant and readable.",
    "My journey in software development has led me to work on diverse projects, from data analysis pipelines to web APIs and cloud infrastructure. I believe in the power of clean code and thoughtful architecture to solve complex problems.",
    "When I'm not coding, you'll find me exploring new technologies, contributing to open-source projects, or thinking about how to optimize the systems I work with.",
];

/// (title, blurb)
pub const FOCUS_AREAS: [(&str, &str); 3] = [
    (
        "Clean Code",
        "Writing maintainable, documented, and efficient code is my primary focus.",
    ),
    (
        "Backend Development",
        "Designing robust APIs and services that power modern applications.",
    ),
    (
        "Data Processing",
        "Transforming raw data into valuable insights through analysis and visualization.",
    ),
];

pub struct Skill {
    pub name: &'static str,
    pub icon: String,
    pub category: &'static str,
}

const DEVICON: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

/// Generic "{" tile used when a skill icon fails to load.
pub const FALLBACK_SKILL_ICON: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNjQiIGhlaWdodD0iNjQiIHZpZXdCb3g9IjAgMCA2NCA2NCIgZmlsbD0ibm9uZSIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj4KPHJlY3Qgd2lkdGg9IjY0IiBoZWlnaHQ9IjY0IiByeD0iOCIgZmlsbD0iIzY0NzQ4QiIvPgo8dGV4dCB4PSIzMiIgeT0iMzYiIGZvbnQtZmFtaWx5PSJBcmlhbCIgZm9udC1zaXplPSIyNCIgZm9udC13ZWlnaHQ9ImJvbGQiIGZpbGw9IndoaXRlIiB0ZXh0LWFuY2hvcj0ibWlkZGxlIj57PC90ZXh0Pgo8L3N2Zz4=";

pub fn skills() -> Vec<Skill> {
    [
        ("Python", "python/python-original.svg", "Languages"),
        ("Django", "django/django-plain.svg", "Frameworks"),
        ("FastAPI", "fastapi/fastapi-original.svg", "Frameworks"),
        ("SQL", "mysql/mysql-original.svg", "Database"),
        ("Pandas", "pandas/pandas-original.svg", "Data Science"),
        ("Docker", "docker/docker-original.svg", "DevOps"),
        (
            "AWS",
            "amazonwebservices/amazonwebservices-plain-wordmark.svg",
            "Cloud",
        ),
        ("Git", "git/git-original.svg", "Tools"),
        ("JavaScript", "javascript/javascript-original.svg", "Languages"),
        ("React", "react/react-original.svg", "Frameworks"),
        ("Next.js", "nextjs/nextjs-original.svg", "Frameworks"),
        ("Tailwind CSS", "tailwindcss/tailwindcss-original.svg", "Styling"),
    ]
    .into_iter()
    .map(|(name, icon, category)| Skill {
        name,
        icon: format!("{DEVICON}/{icon}"),
        category,
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: Vec<&'static str>,
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub image_url: Option<&'static str>,
    /// Prefer a live screenshot over `image_url`.
    pub auto_preview: bool,
}

/// What fills the background of a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    LivePreview(&'static str),
    Image(&'static str),
    Gradient,
}

const MAX_BADGES: usize = 3;

impl Project {
    pub fn backdrop(&self) -> Backdrop {
        match (self.auto_preview, self.live_url, self.image_url) {
            (true, Some(url), _) => Backdrop::LivePreview(url),
            (_, _, Some(img)) => Backdrop::Image(img),
            (_, Some(url), None) => Backdrop::LivePreview(url),
            _ => Backdrop::Gradient,
        }
    }

    /// Badges to show and how many were left out.
    pub fn visible_technologies(&self) -> (&[&'static str], usize) {
        let shown = self.technologies.len().min(MAX_BADGES);
        (
            &self.technologies[..shown],
            self.technologies.len() - shown,
        )
    }
}

pub fn projects() -> Vec<Project> {
    vec![Project {
        id: "thrillbinge",
        title: "Thrill Binge",
        description: "A premier destination for the most thrilling cinema experience, bringing heart-pounding action and suspense to your screen. Features movies from Hollywood, Bollywood, and South Indian cinema industries.",
        technologies: vec!["Next.js", "Django"],
        live_url: Some("http://ec2-65-0-183-137.ap-south-1.compute.amazonaws.com/"),
        github_url: None,
        image_url: None,
        auto_preview: true,
    }]
}

/// Unique technologies in first-seen order.
pub fn all_technologies(projects: &[Project]) -> Vec<&'static str> {
    let mut techs = Vec::new();
    for tech in projects.iter().flat_map(|p| p.technologies.iter()) {
        if !techs.contains(tech) {
            techs.push(*tech);
        }
    }
    techs
}

pub fn filter_projects<'a>(projects: &'a [Project], tech: Option<&str>) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| tech.is_none_or(|t| p.technologies.iter().any(|pt| *pt == t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(
        technologies: Vec<&'static str>,
        live_url: Option<&'static str>,
        image_url: Option<&'static str>,
        auto_preview: bool,
    ) -> Project {
        Project {
            id: "p",
            title: "P",
            description: "",
            technologies,
            live_url,
            github_url: None,
            image_url,
            auto_preview,
        }
    }

    #[test]
    fn test_backdrop_selection() {
        let live = Some("https://live.example.com");
        let img = Some("https://img.example.com/p.png");

        assert_eq!(
            project(vec![], live, img, true).backdrop(),
            Backdrop::LivePreview("https://live.example.com")
        );
        assert_eq!(
            project(vec![], live, img, false).backdrop(),
            Backdrop::Image("https://img.example.com/p.png")
        );
        assert_eq!(
            project(vec![], None, img, true).backdrop(),
            Backdrop::Image("https://img.example.com/p.png")
        );
        assert_eq!(
            project(vec![], live, None, false).backdrop(),
            Backdrop::LivePreview("https://live.example.com")
        );
        assert_eq!(project(vec![], None, None, true).backdrop(), Backdrop::Gradient);
    }

    #[test]
    fn test_visible_technologies() {
        let p = project(vec!["a", "b", "c", "d", "e"], None, None, false);
        assert_eq!(p.visible_technologies(), (&["a", "b", "c"][..], 2));

        let p = project(vec!["a"], None, None, false);
        assert_eq!(p.visible_technologies(), (&["a"][..], 0));
    }

    #[test]
    fn test_technology_filter() {
        let projects = vec![
            project(vec!["Rust", "Leptos"], None, None, false),
            project(vec!["Python", "Rust"], None, None, false),
        ];
        assert_eq!(all_technologies(&projects), vec!["Rust", "Leptos", "Python"]);
        assert_eq!(filter_projects(&projects, Some("Rust")).len(), 2);
        assert_eq!(filter_projects(&projects, Some("Python")).len(), 1);
        assert_eq!(filter_projects(&projects, Some("Go")).len(), 0);
        assert_eq!(filter_projects(&projects, None).len(), 2);
    }

    #[test]
    fn test_site_data() {
        let skills = skills();
        assert_eq!(skills.len(), 12);
        assert!(skills
            .iter()
            .all(|s| s.icon.starts_with("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/")));

        for p in projects() {
            if let Some(url) = p.live_url {
                assert!(url::Url::parse(url).is_ok());
            }
        }
    }
}
