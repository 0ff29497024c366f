// Blogger API endpoint functions.
// Provides typed methods for fetching data from the Blogger v3 REST API.

use crate::error::Result;

use super::client::BloggerClient;
use super::types::{Blog, PostsPage, PostsQuery};

impl BloggerClient {
    /// Look up a blog by its human-facing URL.
    pub async fn blog_by_url(&self, url: &str) -> Result<Blog> {
        self.get_json("/blogs/byurl", &[("url", url)]).await
    }

    /// Fetch one page of a blog's posts listing.
    pub async fn posts_page(&self, blog_id: &str, query: &PostsQuery) -> Result<PostsPage> {
        self.get_json(&format!("/blogs/{}/posts", blog_id), query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::blogger::{BloggerClient, ClientConfig, PostsQuery};
    use crate::error::BlogspinError;

    fn client_for(server: &MockServer) -> BloggerClient {
        BloggerClient::new(ClientConfig::new("test-key", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn blog_by_url_resolves_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blogs/byurl"))
            .and(query_param("key", "test-key"))
            .and(query_param("url", "https://example.blogspot.com/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "4242",
                "name": "Example Blog",
                "url": "https://example.blogspot.com/",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let blog = client
            .blog_by_url("https://example.blogspot.com/")
            .await
            .unwrap();
        assert_eq!(blog.id, "4242");
    }

    #[tokio::test]
    async fn unknown_blog_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blogs/byurl"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .blog_by_url("https://nowhere.blogspot.com/")
            .await
            .unwrap_err();
        assert!(matches!(err, BlogspinError::NotFound(_)));
    }

    #[tokio::test]
    async fn invalid_json_is_malformed_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blogs/77/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .posts_page("77", &PostsQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, BlogspinError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn posts_query_carries_watermark_and_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blogs/77/posts"))
            .and(query_param("maxResults", "20"))
            .and(query_param("fetchBodies", "false"))
            .and(query_param("startDate", "2026-08-01T00:00:00Z"))
            .and(query_param("pageToken", "tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [{"id": "p1", "title": "One", "url": "https://b/1"}],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let query =
            PostsQuery::since(Some("2026-08-01T00:00:00Z".to_string())).with_token("tok-1");
        let page = client.posts_page("77", &query).await.unwrap();
        assert_eq!(page.items.unwrap().len(), 1);
        assert!(page.next_page_token.is_none());
    }
}
