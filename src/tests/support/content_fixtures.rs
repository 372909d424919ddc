use crate::content::application::domain::entities::{
    MediaDraft, ProjectDraft, ProjectStatus, ReviewDraft, Task, WorkExperienceDraft,
};

pub fn sample_project_draft(title: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: "A test project".to_string(),
        tech_stack: vec!["Rust".to_string(), "actix-web".to_string()],
        status: ProjectStatus::Idea,
        tasks: vec![
            Task {
                task_name: "Sketch".to_string(),
                is_completed: true,
            },
            Task {
                task_name: "Build".to_string(),
                is_completed: false,
            },
        ],
        deadline: None,
        image: "https://cdn.example.com/a.png,https://cdn.example.com/b.png".to_string(),
        live_link: None,
        github_link: Some("https://github.com/example/x".to_string()),
        is_published: false,
    }
}

pub fn sample_experience_draft(company: &str) -> WorkExperienceDraft {
    WorkExperienceDraft {
        company: company.to_string(),
        role: "Engineer".to_string(),
        duration: "2020 – 2022".to_string(),
        contributions: vec!["Shipped things".to_string()],
        sort_order: None,
    }
}

pub fn sample_review_draft(rating: i32) -> ReviewDraft {
    ReviewDraft {
        client_name: "Jamie Rivera".to_string(),
        company: "Acme".to_string(),
        image: None,
        review_text: "Solid work.".to_string(),
        rating,
    }
}

pub fn sample_media_draft() -> MediaDraft {
    MediaDraft {
        name: "hero.png".to_string(),
        url: "https://cdn.example.com/hero.png".to_string(),
        mime_type: "image/png".to_string(),
        size: 2048,
        uploaded_at: None,
    }
}
