// Site model and sync controller.
// Owns a blog's post index and decides between full builds and incremental updates.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::blogger::{BloggerClient, Post, PostsPage, PostsQuery};
use crate::cache::{paths, store};
use crate::error::Result;

/// Watermark timestamp layout: ISO-8601 UTC, second precision, Z-suffixed.
pub const WATERMARK_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A blog's post index, keyed by post id.
pub type PostIndex = HashMap<String, PostEntry>;

/// What the index remembers about one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEntry {
    pub title: String,
    pub url: String,
}

/// How a sync pass should behave, from the CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct SyncOptions {
    /// Check for new posts when a snapshot already exists.
    pub check_updates: bool,
    /// Discard any existing snapshot and rebuild from the first page.
    pub refresh: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            check_updates: true,
            refresh: false,
        }
    }
}

/// One remote blog: identified externally by URL, internally by a resolved
/// blog id, and stored on disk under its host name.
pub struct Site {
    url: String,
    host: String,
    data_dir: PathBuf,
    query: PostsQuery,
    /// Resolved at most once per process; the id is stable.
    blog_id: Option<String>,
    posts: PostIndex,
}

impl Site {
    pub fn new(url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Result<Self> {
        let url = url.into();
        let host = paths::host_for_url(&url)?;
        Ok(Self {
            url,
            host,
            data_dir: data_dir.into(),
            query: PostsQuery::default(),
            blog_id: None,
            posts: PostIndex::new(),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn posts(&self) -> &PostIndex {
        &self.posts
    }

    fn snapshot_path(&self) -> PathBuf {
        paths::snapshot_path(&self.data_dir, &self.host)
    }

    fn watermark_path(&self) -> PathBuf {
        paths::watermark_path(&self.data_dir, &self.host)
    }

    /// Bring the index up to date according to the options.
    ///
    /// With an existing snapshot this loads it and, unless update checking
    /// is disabled, fetches everything past the last watermark. Without one
    /// (or on refresh) it walks the blog's full history. Any fetch error
    /// aborts the pass before anything is persisted, so the on-disk state
    /// stays at the last known-good sync.
    pub async fn sync(&mut self, client: &BloggerClient, options: SyncOptions) -> Result<()> {
        if !options.refresh && self.snapshot_path().exists() {
            if self.posts.is_empty() {
                self.load_snapshot()?;
            }
            if !options.check_updates {
                return Ok(());
            }
            info!("Checking {} for updates", self.host);
            return self.check_for_updates(client).await;
        }

        info!("Building post index for {}", self.host);
        self.full_build(client).await
    }

    /// Walk the blog's entire post history into a fresh index.
    async fn full_build(&mut self, client: &BloggerClient) -> Result<()> {
        let blog_id = self.resolve_blog_id(client).await?;
        let first = client.posts_page(&blog_id, &self.query).await?;

        let mut index = PostIndex::new();
        drain_pages(client, &blog_id, &self.query, first, &mut index).await?;
        info!("Indexed {} posts from {}", index.len(), self.host);

        self.posts = index;
        self.persist()
    }

    /// Fetch posts published or updated since the last watermark and merge
    /// them into the existing index.
    async fn check_for_updates(&mut self, client: &BloggerClient) -> Result<()> {
        let since = store::read_watermark(&self.watermark_path())?;
        let blog_id = self.resolve_blog_id(client).await?;

        let query = PostsQuery::since(since);
        let first = client.posts_page(&blog_id, &query).await?;

        let before = self.posts.len();
        drain_pages(client, &blog_id, &query, first, &mut self.posts).await?;
        info!(
            "{}: {} new or updated posts",
            self.host,
            self.posts.len() - before
        );

        self.persist()
    }

    /// Look up the blog id for this site's URL, reusing a previous answer.
    async fn resolve_blog_id(&mut self, client: &BloggerClient) -> Result<String> {
        if let Some(id) = &self.blog_id {
            return Ok(id.clone());
        }
        let blog = client.blog_by_url(&self.url).await?;
        debug!("{} resolved to blog id {}", self.host, blog.id);
        self.blog_id = Some(blog.id.clone());
        Ok(blog.id)
    }

    fn load_snapshot(&mut self) -> Result<()> {
        if let Some(index) = store::read_snapshot(&self.snapshot_path())? {
            self.posts = index;
        }
        Ok(())
    }

    /// Write the snapshot, then advance the watermark to now. Runs only
    /// after a fully successful page walk.
    fn persist(&self) -> Result<()> {
        store::write_snapshot(&self.snapshot_path(), &self.posts)?;
        store::write_watermark(&self.watermark_path(), &utc_now_string())
    }
}

/// Follow continuation tokens from an already-fetched first page, merging
/// each page's items into the index. A page without `items` means there is
/// nothing more to do; a page without a token is the last one. No retries:
/// any fetch error propagates and aborts the walk.
async fn drain_pages(
    client: &BloggerClient,
    blog_id: &str,
    query: &PostsQuery,
    first: PostsPage,
    index: &mut PostIndex,
) -> Result<()> {
    let mut page = first;
    loop {
        let Some(items) = page.items.as_deref() else {
            break;
        };
        merge_page(index, items);
        debug!("Merged page of {} posts", items.len());

        let Some(token) = page.next_page_token.as_deref() else {
            break;
        };
        page = client.posts_page(blog_id, &query.with_token(token)).await?;
    }
    Ok(())
}

/// Add a page's items to the index, keyed by post id. Re-fetched posts
/// overwrite their previous entry.
fn merge_page(index: &mut PostIndex, items: &[Post]) {
    for item in items {
        index.insert(
            item.id.clone(),
            PostEntry {
                title: item.title.clone(),
                url: item.url.clone(),
            },
        );
    }
}

/// Current UTC time in the watermark layout.
fn utc_now_string() -> String {
    Utc::now().format(WATERMARK_FORMAT).to_string()
}
