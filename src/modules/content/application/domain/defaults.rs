//! Bundled content used when nothing has been persisted yet.

use super::entities::{
    Project, ProjectStatus, Review, Service, ServiceIcon, SiteContent, Task, WorkExperience,
};

pub const DEFAULT_RESUME_URL: &str = "#";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn tasks(items: &[(&str, bool)]) -> Vec<Task> {
    items
        .iter()
        .map(|(name, done)| Task {
            task_name: name.to_string(),
            is_completed: *done,
        })
        .collect()
}

fn service(id: &str, title: &str, description: &str) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: ServiceIcon::for_service_id(id),
        enabled: true,
    }
}

/// The fixed service catalog. Services are never persisted remotely.
pub fn default_services() -> Vec<Service> {
    vec![
        service(
            "web",
            "Web Dev",
            "Modern, responsive websites built with cutting-edge technologies for optimal performance and user experience.",
        ),
        service(
            "android",
            "Android",
            "Native Android applications with intuitive UI/UX and seamless device integration.",
        ),
        service(
            "ios",
            "iOS Apps",
            "Polished iOS applications following Apple's design guidelines with smooth animations.",
        ),
        service(
            "digital",
            "Digital Marketing",
            "Data-driven digital marketing strategies to grow your brand and reach target audiences.",
        ),
        service(
            "seo",
            "SEO",
            "Search engine optimization to improve rankings, drive organic traffic and boost visibility.",
        ),
    ]
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "FinTech Dashboard".to_string(),
            description: "A comprehensive financial analytics platform enabling real-time data visualization and reporting.".to_string(),
            tech_stack: strings(&["React", "TypeScript", "Node.js", "PostgreSQL"]),
            status: ProjectStatus::Completed,
            tasks: tasks(&[
                ("Design dashboard UI", true),
                ("Implement charts", true),
                ("API integration", true),
            ]),
            deadline: Some("2024-03-15".to_string()),
            image: String::new(),
            live_link: Some("https://example.com".to_string()),
            github_link: Some("https://github.com".to_string()),
            is_published: true,
        },
        Project {
            id: "2".to_string(),
            title: "ShopSwift App".to_string(),
            description: "Mobile-first e-commerce with AR product preview, secure payments, and real-time inventory.".to_string(),
            tech_stack: strings(&["React Native", "Firebase", "Stripe"]),
            status: ProjectStatus::Completed,
            tasks: tasks(&[("Build product catalog", true), ("Payment integration", true)]),
            deadline: Some("2024-06-01".to_string()),
            image: String::new(),
            live_link: Some("https://example.com".to_string()),
            github_link: Some("https://github.com".to_string()),
            is_published: true,
        },
        Project {
            id: "3".to_string(),
            title: "Urban Insights".to_string(),
            description: "An award-winning analytics solution for smart city data visualization and monitoring.".to_string(),
            tech_stack: strings(&["Vue.js", "D3.js", "Python", "AWS"]),
            status: ProjectStatus::Completed,
            tasks: tasks(&[("Data pipeline setup", true), ("Visualization layer", true)]),
            deadline: Some("2024-01-20".to_string()),
            image: String::new(),
            live_link: Some("https://example.com".to_string()),
            github_link: Some("https://github.com".to_string()),
            is_published: true,
        },
        Project {
            id: "4".to_string(),
            title: "AI Content Platform".to_string(),
            description: "AI-powered content management platform (draft).".to_string(),
            tech_stack: strings(&["Next.js", "OpenAI", "Prisma"]),
            status: ProjectStatus::Planning,
            tasks: tasks(&[("Define architecture", false)]),
            deadline: Some("2025-01-01".to_string()),
            image: String::new(),
            live_link: None,
            github_link: None,
            is_published: false,
        },
    ]
}

fn default_work_experience() -> Vec<WorkExperience> {
    vec![
        WorkExperience {
            id: "1".to_string(),
            company: "TechCorp Global".to_string(),
            role: "Senior Full-Stack Developer".to_string(),
            duration: "2021 – Present".to_string(),
            contributions: strings(&[
                "Led a team of 8 engineers to deliver a microservices architecture serving 2M+ users",
                "Reduced page load times by 60% through SSR implementation and code splitting",
                "Established CI/CD pipelines reducing deployment time from hours to minutes",
            ]),
            sort_order: 0,
        },
        WorkExperience {
            id: "2".to_string(),
            company: "StartupLab Inc.".to_string(),
            role: "Full-Stack Developer".to_string(),
            duration: "2018 – 2021".to_string(),
            contributions: strings(&[
                "Built the core product from MVP to a platform serving 500K users",
                "Implemented real-time collaboration features using WebSockets",
                "Designed and maintained RESTful APIs handling 10K+ requests per minute",
            ]),
            sort_order: 1,
        },
        WorkExperience {
            id: "3".to_string(),
            company: "Digital Solutions Co.".to_string(),
            role: "Frontend Developer".to_string(),
            duration: "2015 – 2018".to_string(),
            contributions: strings(&[
                "Developed responsive web applications for enterprise clients",
                "Introduced component-based architecture using React",
                "Mentored junior developers and conducted code reviews",
            ]),
            sort_order: 2,
        },
    ]
}

fn default_reviews() -> Vec<Review> {
    let review = |id: &str, client: &str, company: &str, text: &str| Review {
        id: id.to_string(),
        client_name: client.to_string(),
        company: company.to_string(),
        image: None,
        review_text: text.to_string(),
        rating: 5,
    };

    vec![
        review(
            "1",
            "Sarah Davidson",
            "Vertex Labs",
            "Alex transformed our outdated platform into a modern, scalable application. The attention to detail and code quality was exceptional.",
        ),
        review(
            "2",
            "Michael Chen",
            "NovaTech",
            "Working with Alex was a game-changer for our startup. Delivered ahead of schedule with incredible performance optimization.",
        ),
        review(
            "3",
            "Emily Rodriguez",
            "DataFlow Inc.",
            "Outstanding technical skills combined with excellent communication. Alex understood our requirements perfectly and delivered beyond expectations.",
        ),
    ]
}

pub fn default_content() -> SiteContent {
    SiteContent {
        projects: default_projects(),
        work_experience: default_work_experience(),
        reviews: default_reviews(),
        services: default_services(),
        resume_url: DEFAULT_RESUME_URL.to_string(),
        media: Vec::new(),
    }
}
