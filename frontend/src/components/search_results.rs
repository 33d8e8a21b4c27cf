//! Result cards and the inline failure alert.

use ammonia::clean_text;
use blog_search_shared::{parse_post_date, DateLocale, Post, SearchResponse};

/// Message shown inline when [`crate::config::FailureMode::Inline`] is set.
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// One result card: linked title, excerpt and attribution line.
pub fn render_post_card(post: &Post, locale: DateLocale) -> String {
    let href = format!("/post/{}", urlencoding::encode(&post.slug));
    let mut attribution = format!("By {}", clean_text(post.author_name()));
    if let Some(created_at) = post.created_at.as_deref() {
        attribution.push_str(" • ");
        let date = match parse_post_date(created_at) {
            Some(date) => locale.format(date),
            None => clean_text(created_at),
        };
        attribution.push_str(&date);
    }

    format!(
        r#"
<div class="card mb-3">
    <div class="card-body">
        <h5 class="card-title">
            <a href="{href}" class="text-decoration-none">{title}</a>
        </h5>
        <p class="card-text">{excerpt}</p>
        <div class="text-muted small">
            {attribution}
        </div>
    </div>
</div>
"#,
        title = clean_text(&post.title),
        excerpt = clean_text(&post.display_excerpt()),
    )
}

/// Cards for every post, in response order.
pub fn render_results(response: &SearchResponse, locale: DateLocale) -> String {
    response
        .posts
        .iter()
        .map(|post| render_post_card(post, locale))
        .collect()
}

/// Alert shown in the results container under [`crate::config::FailureMode::Inline`].
pub fn render_search_error() -> String {
    format!(r#"<div class="alert alert-warning" role="alert">{SEARCH_FAILED_MESSAGE}</div>"#)
}

#[cfg(test)]
mod tests {
    use blog_search_shared::Author;

    use super::*;

    fn sample_post() -> Post {
        Post {
            id: Some(7),
            slug: "hello world".to_string(),
            title: "<Hello>".to_string(),
            excerpt: Some("Short".to_string()),
            content: String::new(),
            author: Some(Author {
                username: "ada".to_string(),
            }),
            created_at: Some("2024-03-05T10:15:30".to_string()),
            featured_image: None,
            category: None,
            view_count: None,
            updated_at: None,
            published_at: None,
        }
    }

    #[test]
    fn card_links_by_slug_and_escapes_title() {
        let card = render_post_card(&sample_post(), DateLocale::EnUs);
        assert!(card.contains(r#"href="/post/hello%20world""#));
        assert!(!card.contains("<Hello>"));
        assert!(card.contains("&lt;Hello&gt;"));
        assert!(card.contains(r#"<p class="card-text">Short</p>"#));
        assert!(card.contains("3/5/2024"));
        assert!(card.contains("By ada • 3/5/2024"));
    }

    #[test]
    fn unparseable_date_is_escaped_verbatim() {
        let mut post = sample_post();
        post.created_at = Some("<soon>".to_string());
        let card = render_post_card(&post, DateLocale::EnUs);
        assert!(card.contains("By ada • &lt;soon&gt;"));
    }

    #[test]
    fn missing_date_drops_the_separator() {
        let mut post = sample_post();
        post.created_at = None;
        let card = render_post_card(&post, DateLocale::EnUs);
        assert!(!card.contains('•'));
    }

    #[test]
    fn results_keep_response_order() {
        let mut second = sample_post();
        second.slug = "second".to_string();
        let response = SearchResponse {
            posts: vec![sample_post(), second],
            ..SearchResponse::default()
        };
        let html = render_results(&response, DateLocale::De);
        let first_at = html.find("/post/hello%20world").unwrap_or(usize::MAX);
        let second_at = html.find("/post/second").unwrap_or(0);
        assert!(first_at < second_at);
        assert!(html.contains("5.3.2024"));
    }

    #[test]
    fn empty_response_renders_nothing() {
        assert!(render_results(&SearchResponse::default(), DateLocale::EnUs).is_empty());
    }
}
