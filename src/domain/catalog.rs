//! The fixed set of posts displayed on the home screen.
//!
//! Posts are partitioned by position: the first post is the hero, the next
//! [`ARTICLE_GROUP_LEN`] posts are secondary articles and everything after
//! them is an audio story.

use std::collections::HashMap;
use std::ops::Range;

use serde::Serialize;
use thiserror::Error;

use super::post::{Author, ImageId, Metadata, Post};

pub const ARTICLE_GROUP_LEN: usize = 3;
/// Hero plus a full article group.
pub const MIN_CATALOG_LEN: usize = 1 + ARTICLE_GROUP_LEN;

pub const HERO_INDEX: usize = 0;
const ARTICLE_RANGE: Range<usize> = 1..MIN_CATALOG_LEN;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog too small: {len} posts, at least {min} are required")]
    TooSmall { len: usize, min: usize },
    #[error("duplicate post id {id:?} at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    posts: Vec<Post>,
}

impl Catalog {
    /// Validates `posts` and freezes them into a catalog.
    pub fn new(posts: Vec<Post>) -> Result<Self, CatalogError> {
        if posts.len() < MIN_CATALOG_LEN {
            return Err(CatalogError::TooSmall {
                len: posts.len(),
                min: MIN_CATALOG_LEN,
            });
        }

        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(posts.len());
        for (index, post) in posts.iter().enumerate() {
            if let Some(&first) = seen.get(post.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: post.id.clone(),
                    first,
                    second: index,
                });
            }
            seen.insert(post.id.as_str(), index);
        }

        Ok(Self { posts })
    }

    /// The built-in sample catalog.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::new(sample_posts())
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    pub fn hero(&self) -> &Post {
        &self.posts[HERO_INDEX]
    }

    pub fn articles(&self) -> &[Post] {
        &self.posts[ARTICLE_RANGE]
    }

    pub fn audio(&self) -> &[Post] {
        &self.posts[MIN_CATALOG_LEN..]
    }
}

fn post(
    id: &str,
    title: &str,
    author: &Author,
    date: &str,
    read_time_minutes: u32,
    image: &str,
) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: String::new(),
        url: String::new(),
        metadata: Metadata {
            author: author.clone(),
            date: date.to_string(),
            read_time_minutes,
        },
        image_id: ImageId::new(image),
    }
}

/// The seven sample posts: one hero, three articles, three audio stories.
pub fn sample_posts() -> Vec<Post> {
    // Authors are news outlets rather than individuals.
    let seasonal = Author::new("Seasonal Sagas", "");
    let morning = Author::new("Morning Break", "");
    let culture = Author::new("Science Culture", "");
    let animal = Author::new("The Bees", "");
    let egg = Author::new("Cracking the Egg", "");
    let cinematic = Author::new("Light Labs", "");

    vec![
        post(
            "84eb677660d9",
            "The Wonderful Architectures of This Winter Season",
            &seasonal,
            "20 days ago",
            5,
            "thumbnail_1",
        ),
        post(
            "7446d8dfd7dc",
            "Creating Butterflies With New Transparent Ink",
            &culture,
            "1 month ago",
            10,
            "thumbnail_2",
        ),
        post(
            "ac552dcc1741",
            "Timeless Architecture, Through Decades and Seasons",
            &seasonal,
            "10 days ago",
            15,
            "thumbnail_3",
        ),
        post(
            "dc523f0ed25c",
            "The New Method to Making Breakfast Crepes",
            &morning,
            "1 day ago",
            15,
            "thumbnail_4",
        ),
        post(
            "55db18283aca",
            "Wondering Hour: A Childhood Story, Grizzly Bears, and A Sunset in the Distance",
            &animal,
            "July 24, 2021",
            20,
            "thumbnail_5",
        ),
        post(
            "3f1e9b06c2d7",
            "The Stories and Adventures That We Carry Into 2022",
            &egg,
            "18 hours ago",
            23,
            "thumbnail_6",
        ),
        post(
            "b80a4c5d19e3",
            "Episode 11 - Science Based Tools For Sleep, Alertness, and Learning",
            &cinematic,
            "1 day ago",
            45,
            "thumbnail_7",
        ),
    ]
}
