use postbox_core::BlogPost;

/// The canned posts a producer cycles through, in publish order
pub fn default_catalog() -> Vec<BlogPost> {
    vec![
        BlogPost::new(1, "First blog: Introduction to Upstash Redis."),
        BlogPost::new(2, "Second blog: Rust with axum and Redis."),
        BlogPost::new(3, "Third blog: Understanding Serverless Redis."),
        BlogPost::new(4, "Fourth blog: Advanced queue patterns with Upstash."),
        BlogPost::new(5, "Fifth blog: Deploying Rust services."),
    ]
}
