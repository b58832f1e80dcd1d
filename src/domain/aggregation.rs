//! Summary statistics over a snapshot of blog posts.
//!
//! Every function here is pure: it borrows an ordered slice, never mutates it,
//! and builds a fresh result. The same input always yields the same output.
//!
//! # Tie-breaking
//!
//! All "maximum" queries are first-wins:
//!
//! - [`favorite_blog`] keeps the earliest post among those with the most likes.
//! - [`most_blogs`] and [`most_likes`] keep the author that first appears
//!   earliest in the input among those sharing the maximum.
//!
//! # Posts without an author
//!
//! A post whose author is absent is grouped under the `None` key. That group
//! competes like any other and is reported with `author: None`.

use std::collections::HashMap;

/// Read-only view of a blog post needed for aggregation.
pub trait BlogRecord {
    fn title(&self) -> &str;
    fn author(&self) -> Option<&str>;
    fn likes(&self) -> i64;
}

/// The single most liked post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: Option<String>,
    pub likes: i64,
}

/// The author with the most posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorBlogs {
    pub author: Option<String>,
    pub blogs: usize,
}

/// The author whose posts collected the most likes in total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorLikes {
    pub author: Option<String>,
    pub likes: i64,
}

/// All aggregates for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogStats {
    pub total_likes: i64,
    pub favorite_blog: Option<FavoriteBlog>,
    pub most_blogs: Option<AuthorBlogs>,
    pub most_likes: Option<AuthorLikes>,
}

impl BlogStats {
    /// Computes every aggregate over the same snapshot.
    pub fn compute<B: BlogRecord>(blogs: &[B]) -> Self {
        Self {
            total_likes: total_likes(blogs),
            favorite_blog: favorite_blog(blogs),
            most_blogs: most_blogs(blogs),
            most_likes: most_likes(blogs),
        }
    }
}

/// Sum of likes across all posts. `0` for an empty slice.
///
/// Saturates at `i64::MAX` instead of overflowing.
pub fn total_likes<B: BlogRecord>(blogs: &[B]) -> i64 {
    blogs
        .iter()
        .fold(0i64, |sum, blog| sum.saturating_add(blog.likes()))
}

/// The post with the most likes, or `None` for an empty slice.
///
/// Scans left to right and only replaces the current best on a strictly
/// greater like count.
pub fn favorite_blog<B: BlogRecord>(blogs: &[B]) -> Option<FavoriteBlog> {
    let (first, rest) = blogs.split_first()?;

    let best = rest.iter().fold(first, |best, blog| {
        if blog.likes() > best.likes() {
            blog
        } else {
            best
        }
    });

    Some(FavoriteBlog {
        title: best.title().to_string(),
        author: best.author().map(str::to_string),
        likes: best.likes(),
    })
}

/// The author with the largest number of posts, or `None` for an empty slice.
pub fn most_blogs<B: BlogRecord>(blogs: &[B]) -> Option<AuthorBlogs> {
    let tallies = tally_by_author(blogs, |count: &mut usize, _| *count += 1);

    leader(tallies).map(|(author, blogs)| AuthorBlogs {
        author: author.map(str::to_string),
        blogs,
    })
}

/// The author with the largest like total, or `None` for an empty slice.
///
/// Per-author totals saturate at `i64::MAX`.
pub fn most_likes<B: BlogRecord>(blogs: &[B]) -> Option<AuthorLikes> {
    let tallies = tally_by_author(blogs, |sum: &mut i64, blog| {
        *sum = sum.saturating_add(blog.likes())
    });

    leader(tallies).map(|(author, likes)| AuthorLikes {
        author: author.map(str::to_string),
        likes,
    })
}

/// Folds posts into one running value per author.
///
/// The returned vector is in first-appearance order of the authors.
fn tally_by_author<'a, B, T, F>(blogs: &'a [B], mut fold: F) -> Vec<(Option<&'a str>, T)>
where
    B: BlogRecord,
    T: Default,
    F: FnMut(&mut T, &'a B),
{
    let mut index: HashMap<Option<&'a str>, usize> = HashMap::new();
    let mut tallies: Vec<(Option<&'a str>, T)> = Vec::new();

    for blog in blogs {
        let author = blog.author();
        let slot = *index.entry(author).or_insert_with(|| {
            tallies.push((author, T::default()));
            tallies.len() - 1
        });
        fold(&mut tallies[slot].1, blog);
    }

    tallies
}

/// Picks the entry with the greatest value; earlier entries win ties.
fn leader<K, T: PartialOrd>(tallies: Vec<(K, T)>) -> Option<(K, T)> {
    tallies
        .into_iter()
        .reduce(|best, current| if current.1 > best.1 { current } else { best })
}
