// Random post selection and display.
// Draws posts from a site's index and shows them on stdout or in the browser.

use rand::Rng;

use crate::error::Result;
use crate::site::{PostEntry, PostIndex};

/// Draw `n` posts uniformly at random, with replacement, so the same post
/// may repeat. An empty index or a zero count yields an empty vec.
pub fn sample_posts<'a, R: Rng + ?Sized>(
    index: &'a PostIndex,
    n: usize,
    rng: &mut R,
) -> Vec<&'a PostEntry> {
    if index.is_empty() || n == 0 {
        return Vec::new();
    }

    let entries: Vec<&PostEntry> = index.values().collect();
    (0..n)
        .map(|_| entries[rng.random_range(0..entries.len())])
        .collect()
}

/// Print each post's title and URL.
pub fn print_posts(posts: &[&PostEntry]) {
    for post in posts {
        println!("{}", post.title);
        println!("{}", post.url);
    }
}

/// Open each post in the default browser, one tab per post.
pub fn open_in_browser(posts: &[&PostEntry]) -> Result<()> {
    for post in posts {
        webbrowser::open(&post.url)?;
    }
    Ok(())
}
