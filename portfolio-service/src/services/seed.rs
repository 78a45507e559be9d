//! Content served by the portfolio API.

use crate::models::{Profile, Project, ProjectStatus, SeoSettings, SocialLinks, TechStackEntry};
use chrono::{DateTime, Utc};

pub fn profile(now: DateTime<Utc>) -> Profile {
    Profile {
        id: "1".to_string(),
        name: "Naufal Ananta".to_string(),
        title: "Full Stack Developer".to_string(),
        bio: "Passionate developer dengan pengalaman dalam membangun aplikasi web modern \
              menggunakan React, Node.js, dan berbagai teknologi terkini."
            .to_string(),
        email: "anantanaufal250@gmail.com".to_string(),
        location: "Indonesia".to_string(),
        avatar: "/avatar.jpg".to_string(),
        social_media: SocialLinks {
            github: "https://github.com/NaufalAnantaSE".to_string(),
            linkedin: "https://linkedin.com/in/naufalananta".to_string(),
            twitter: String::new(),
            instagram: String::new(),
        },
        updated_at: now,
    }
}

pub fn tech_stacks() -> Vec<TechStackEntry> {
    [
        ("React", "react", "#61DAFB"),
        ("Node.js", "nodejs", "#339933"),
        ("TypeScript", "typescript", "#3178C6"),
        ("Next.js", "nextjs", "#000000"),
        ("Tailwind CSS", "tailwindcss", "#06B6D4"),
        ("PostgreSQL", "postgresql", "#4169E1"),
        ("MongoDB", "mongodb", "#47A248"),
        ("Docker", "docker", "#2496ED"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, icon, color), order)| TechStackEntry {
        id: order.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        order,
        is_active: true,
    })
    .collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Portfolio Website".to_string(),
            description: "Website portfolio personal dengan Astro.js dan AI chatbot".to_string(),
            year: 2025,
            image: "/projects/portfolio.jpg".to_string(),
            github_url: "https://github.com/NaufalAnantaSE/astro-portfolio".to_string(),
            website_url: String::new(),
            alt: "Portfolio Website".to_string(),
            status: ProjectStatus::Published,
            order: 1,
        },
        Project {
            id: "2".to_string(),
            title: "Comparativo".to_string(),
            description: "Aplikasi perbandingan performa gRPC vs REST API".to_string(),
            year: 2026,
            image: "/projects/comparativo.jpg".to_string(),
            github_url: "https://github.com/NaufalAnantaSE/comparativo".to_string(),
            website_url: String::new(),
            alt: "Comparativo".to_string(),
            status: ProjectStatus::Published,
            order: 2,
        },
    ]
}

pub fn seo_settings(now: DateTime<Utc>) -> SeoSettings {
    SeoSettings {
        id: "1".to_string(),
        site_title: "Naufal Ananta - Full Stack Developer".to_string(),
        site_description: "Portfolio Naufal Ananta, Full Stack Developer dari Indonesia"
            .to_string(),
        keywords: ["developer", "fullstack", "react", "nodejs", "portfolio"]
            .into_iter()
            .map(String::from)
            .collect(),
        og_image: "/og-image.jpg".to_string(),
        twitter_card: "summary_large_image".to_string(),
        favicon: "/favicon.ico".to_string(),
        updated_at: now,
    }
}
