use chrono::NaiveDate;
use pulldown_cmark::{Event, Options, Parser};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key the admin panel writes posts under.
pub const STORAGE_KEY: &str = "blogPosts";

const WORDS_PER_MINUTE: usize = 200;
const EXCERPT_CHARS: usize = 150;
const RECENT_POSTS: usize = 3;

/// Largest cover image the editor accepts, in bytes.
pub const MAX_COVER_BYTES: u64 = 5 * 1024 * 1024;
pub const COVER_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl BlogPost {
    /// Minutes parsed back out of `read_time`, 0 when it holds no digits.
    pub fn read_minutes(&self) -> usize {
        self.read_time
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>()
            .parse()
            .unwrap_or(0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("Please fill in both title and content")]
    MissingField,
    #[error("Blog post not found")]
    NotFound,
    #[error("Image size should be less than 5MB")]
    CoverTooLarge,
    #[error("Please upload a valid image file (JPEG, PNG, GIF, or WebP)")]
    UnsupportedCoverType,
}

/// Editor form state, all fields as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub tags: String,
    pub image_url: String,
}

impl PostDraft {
    pub fn from_post(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            tags: post.tags.join(", "),
            image_url: post.image_url.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), BlogError> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(BlogError::MissingField);
        }
        Ok(())
    }

    fn into_post(self, id: String, date: NaiveDate) -> BlogPost {
        let excerpt = if self.excerpt.trim().is_empty() {
            default_excerpt(&self.content)
        } else {
            self.excerpt.trim().to_string()
        };
        let image_url = Some(self.image_url.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        BlogPost {
            id,
            title: self.title.trim().to_string(),
            excerpt,
            read_time: read_time(&self.content),
            tags: parse_tags(&self.tags),
            content: self.content.trim().to_string(),
            date,
            image_url,
        }
    }
}

pub fn read_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

pub fn default_excerpt(content: &str) -> String {
    let head = content.chars().take(EXCERPT_CHARS).collect::<String>();
    format!("{head}...")
}

pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn new_post_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Creates a post, or overwrites the one with id `editing` keeping its date.
/// Returns the id of the saved post.
pub fn save_draft(
    posts: &mut Vec<BlogPost>,
    draft: PostDraft,
    editing: Option<&str>,
    today: NaiveDate,
) -> Result<String, BlogError> {
    draft.validate()?;
    match editing {
        Some(id) => {
            let existing = posts
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(BlogError::NotFound)?;
            *existing = draft.into_post(id.to_string(), existing.date);
            log::debug!("updated blog post {id}");
            Ok(id.to_string())
        }
        None => {
            let id = new_post_id();
            posts.push(draft.into_post(id.clone(), today));
            log::debug!("created blog post {id}");
            Ok(id)
        }
    }
}

pub fn delete_post(posts: &mut Vec<BlogPost>, id: &str) -> bool {
    let before = posts.len();
    posts.retain(|p| p.id != id);
    posts.len() != before
}

pub fn find_post<'a>(posts: &'a [BlogPost], id: &str) -> Option<&'a BlogPost> {
    posts.iter().find(|p| p.id == id)
}

/// Unique tags in first-seen order.
pub fn all_tags(posts: &[BlogPost]) -> Vec<String> {
    let mut tags = Vec::<String>::new();
    for tag in posts.iter().flat_map(|p| p.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Unique tags, alphabetical.
pub fn sorted_tags(posts: &[BlogPost]) -> Vec<String> {
    let mut tags = all_tags(posts);
    tags.sort();
    tags
}

/// Checks an uploaded cover image before it is read into a data URL.
pub fn validate_cover_upload(size: u64, mime: &str) -> Result<(), BlogError> {
    if size > MAX_COVER_BYTES {
        return Err(BlogError::CoverTooLarge);
    }
    if !COVER_TYPES.contains(&mime) {
        return Err(BlogError::UnsupportedCoverType);
    }
    Ok(())
}

pub fn posts_with_tag<'a>(posts: &'a [BlogPost], tag: Option<&str>) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .filter(|p| tag.is_none_or(|t| p.tags.iter().any(|pt| pt == t)))
        .collect()
}

/// Case-insensitive match on title, excerpt or any tag, narrowed to `tag`.
pub fn search_posts<'a>(posts: &'a [BlogPost], term: &str, tag: Option<&str>) -> Vec<&'a BlogPost> {
    let term = term.to_lowercase();
    posts_with_tag(posts, tag)
        .into_iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&term)
                || p.excerpt.to_lowercase().contains(&term)
                || p.tags.iter().any(|t| t.to_lowercase().contains(&term))
        })
        .collect()
}

/// Newest first.
pub fn sorted_by_date(posts: &[BlogPost]) -> Vec<BlogPost> {
    let mut posts = posts.to_vec();
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogStats {
    pub total_posts: usize,
    pub published_posts: usize,
    pub draft_posts: usize,
    pub total_tags: usize,
    pub average_read_time: usize,
    pub recent_posts: Vec<BlogPost>,
}

impl BlogStats {
    pub fn from_posts(posts: &[BlogPost]) -> Self {
        let total_minutes = posts.iter().map(BlogPost::read_minutes).sum::<usize>();
        let average_read_time = if posts.is_empty() {
            0
        } else {
            (total_minutes as f64 / posts.len() as f64).round() as usize
        };
        let mut recent_posts = sorted_by_date(posts);
        recent_posts.truncate(RECENT_POSTS);
        Self {
            total_posts: posts.len(),
            // every saved post is live, there is no draft state yet
            published_posts: posts.len(),
            draft_posts: 0,
            total_tags: all_tags(posts).len(),
            average_read_time,
            recent_posts,
        }
    }
}

/// Markdown to HTML. Raw HTML in the source is shown as text.
pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new_ext(content, Options::all()).map(|event| match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        e => e,
    });
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn draft(title: &str, content: &str, tags: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.to_string(),
            ..Default::default()
        }
    }

    fn seeded() -> Vec<BlogPost> {
        let mut posts = Vec::new();
        save_draft(&mut posts, draft("Rust", "ownership", "rust, wasm"), None, day("2024-01-01")).unwrap();
        save_draft(&mut posts, draft("Leptos", "signals", "rust, web"), None, day("2024-03-01")).unwrap();
        save_draft(&mut posts, draft("Python", "django", "python"), None, day("2024-02-01")).unwrap();
        save_draft(&mut posts, draft("Old", "first", ""), None, day("2023-06-01")).unwrap();
        posts
    }

    #[test]
    fn test_read_time() {
        assert_eq!(read_time("one two three"), "1 min read");
        assert_eq!(read_time(&"word ".repeat(200)), "1 min read");
        assert_eq!(read_time(&"word ".repeat(201)), "2 min read");
        assert_eq!(read_time(""), "1 min read");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(" rust,  wasm ,,web, "), vec!["rust", "wasm", "web"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_create_post_defaults() {
        let mut posts = Vec::new();
        let content = "x".repeat(200);
        let id = save_draft(&mut posts, draft("  Title ", &content, "a, b"), None, day("2024-05-05")).unwrap();

        let post = find_post(&posts, &id).unwrap();
        assert_eq!(post.title, "Title");
        assert_eq!(post.excerpt, format!("{}...", "x".repeat(150)));
        assert_eq!(post.date, day("2024-05-05"));
        assert_eq!(post.tags, vec!["a", "b"]);
        assert_eq!(post.image_url, None);
        assert_eq!(post.read_minutes(), 1);
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut posts = Vec::new();
        assert_eq!(
            save_draft(&mut posts, draft("  ", "body", ""), None, day("2024-01-01")),
            Err(BlogError::MissingField)
        );
        assert_eq!(
            save_draft(&mut posts, draft("title", "\n", ""), None, day("2024-01-01")),
            Err(BlogError::MissingField)
        );
        assert!(posts.is_empty());
    }

    #[test]
    fn test_edit_overwrites_by_id_and_keeps_date() {
        let mut posts = seeded();
        let id = posts[0].id.clone();
        let mut edit = PostDraft::from_post(&posts[0]);
        edit.title = "Rust 2024".to_string();
        edit.image_url = " https://img.example.com/a.png ".to_string();

        let saved = save_draft(&mut posts, edit, Some(&id), day("2025-01-01")).unwrap();
        assert_eq!(saved, id);
        assert_eq!(posts.len(), 4);
        let post = find_post(&posts, &id).unwrap();
        assert_eq!(post.title, "Rust 2024");
        assert_eq!(post.date, day("2024-01-01"));
        assert_eq!(post.image_url.as_deref(), Some("https://img.example.com/a.png"));
        assert_eq!(post.tags, vec!["rust", "wasm"]);
    }

    #[test]
    fn test_edit_unknown_id() {
        let mut posts = seeded();
        let res = save_draft(&mut posts, draft("t", "c", ""), Some("missing"), day("2024-01-01"));
        assert_eq!(res, Err(BlogError::NotFound));
        assert_eq!(posts.len(), 4);
    }

    #[test]
    fn test_delete_post() {
        let mut posts = seeded();
        let id = posts[1].id.clone();
        assert!(delete_post(&mut posts, &id));
        assert!(!delete_post(&mut posts, &id));
        assert_eq!(posts.len(), 3);
    }

    #[test]
    fn test_tags_and_filters() {
        let posts = seeded();
        assert_eq!(all_tags(&posts), vec!["rust", "wasm", "web", "python"]);
        assert_eq!(posts_with_tag(&posts, Some("rust")).len(), 2);
        assert_eq!(posts_with_tag(&posts, None).len(), 4);

        let found = search_posts(&posts, "LEP", None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Leptos");
        assert_eq!(search_posts(&posts, "rust", Some("web")).len(), 1);
        assert_eq!(search_posts(&posts, "", None).len(), 4);
    }

    #[test]
    fn test_sorted_tags() {
        let posts = seeded();
        assert_eq!(sorted_tags(&posts), vec!["python", "rust", "wasm", "web"]);
        assert!(sorted_tags(&[]).is_empty());
    }

    #[test]
    fn test_cover_upload_limits() {
        assert_eq!(validate_cover_upload(1024, "image/png"), Ok(()));
        assert_eq!(validate_cover_upload(MAX_COVER_BYTES, "image/webp"), Ok(()));
        assert_eq!(
            validate_cover_upload(MAX_COVER_BYTES + 1, "image/jpeg"),
            Err(BlogError::CoverTooLarge)
        );
        assert_eq!(
            validate_cover_upload(1024, "image/svg+xml"),
            Err(BlogError::UnsupportedCoverType)
        );
        assert_eq!(validate_cover_upload(0, ""), Err(BlogError::UnsupportedCoverType));
        // size is checked first
        assert_eq!(
            validate_cover_upload(MAX_COVER_BYTES * 2, "text/plain"),
            Err(BlogError::CoverTooLarge)
        );
    }

    #[test]
    fn test_stats() {
        let posts = seeded();
        let stats = BlogStats::from_posts(&posts);
        assert_eq!(stats.total_posts, 4);
        assert_eq!(stats.published_posts, 4);
        assert_eq!(stats.draft_posts, 0);
        assert_eq!(stats.total_tags, 4);
        assert_eq!(stats.average_read_time, 1);
        let recent = stats
            .recent_posts
            .iter()
            .map(|p| p.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(recent, vec!["Leptos", "Python", "Rust"]);

        assert_eq!(BlogStats::from_posts(&[]), BlogStats::default());
    }

    #[test]
    fn test_storage_format() {
        let json = r#"[{"id":"1","title":"T","excerpt":"E","content":"C","date":"2024-02-03","readTime":"3 min read","tags":["a"]}]"#;
        let posts: Vec<BlogPost> = serde_json::from_str(json).unwrap();
        assert_eq!(posts[0].date, day("2024-02-03"));
        assert_eq!(posts[0].read_minutes(), 3);
        assert_eq!(posts[0].image_url, None);

        let back = serde_json::to_string(&posts).unwrap();
        assert!(back.contains(r#""readTime":"3 min read""#));
        assert!(!back.contains("imageUrl"));
    }

    #[test]
    fn test_render_markdown_escapes_html() {
        let html = render_markdown("# Hi\n\n<script>alert(1)</script>\n\n*there*");
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains("<em>there</em>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
