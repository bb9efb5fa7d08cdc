//! Community feed: spot reviews, discussion threads and photo posts
//!
//! The feed is a static catalog seeded with the launch content. Lookups
//! mirror the filters of the community pages.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::date;
use crate::{Result, TuniCampError};

/// Member who wrote a post, reply or comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

impl Author {
    fn new(id: &str, name: &str, seed: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            avatar: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}"),
        }
    }
}

/// A rated review of a camping spot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub spot_id: String,
    pub author: Author,
    /// 1 to 5 stars
    pub rating: u8,
    pub title: String,
    pub content: String,
    pub photos: Vec<String>,
    pub visit_date: NaiveDate,
    pub created_at: NaiveDate,
    pub likes: u32,
    pub helpful: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscussionCategory {
    General,
    Tips,
    Meetup,
    Gear,
    Safety,
}

impl FromStr for DiscussionCategory {
    type Err = TuniCampError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(DiscussionCategory::General),
            "tips" => Ok(DiscussionCategory::Tips),
            "meetup" => Ok(DiscussionCategory::Meetup),
            "gear" => Ok(DiscussionCategory::Gear),
            "safety" => Ok(DiscussionCategory::Safety),
            other => Err(TuniCampError::validation(format!(
                "Unknown discussion category '{other}'. Must be one of: general, tips, meetup, gear, safety"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    pub content: String,
    pub author: Author,
    pub created_at: NaiveDate,
    pub likes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionThread {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub region: String,
    pub category: DiscussionCategory,
    pub created_at: NaiveDate,
    pub replies: Vec<Reply>,
    pub views: u32,
    pub likes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: Author,
    pub created_at: NaiveDate,
}

/// Photos shared to the feed, optionally tagged with a spot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoPost {
    pub id: String,
    pub author: Author,
    pub spot_id: Option<String>,
    pub spot_name: Option<String>,
    pub photos: Vec<String>,
    pub caption: String,
    pub location: String,
    pub created_at: NaiveDate,
    pub likes: u32,
    pub comments: Vec<Comment>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

static REVIEWS: LazyLock<Vec<Review>> = LazyLock::new(|| {
    vec![
        Review {
            id: "review-1".to_string(),
            spot_id: "sahara-douz".to_string(),
            author: Author::new("user-1", "Ahmed Ben Ali", "ahmed"),
            rating: 5,
            title: "Unforgettable Sahara Experience".to_string(),
            content: "This was absolutely magical! The sunset over the dunes was breathtaking. Our guide was knowledgeable and the traditional Berber tent was comfortable. The camel trek at sunrise was the highlight of our trip. Highly recommend staying for at least 2 nights to fully experience the desert.".to_string(),
            photos: strings(&["/review-sahara-1.jpg", "/review-sahara-2.jpg"]),
            visit_date: const { date(2024, 1, 15) },
            created_at: const { date(2024, 1, 20) },
            likes: 23,
            helpful: 18,
        },
        Review {
            id: "review-2".to_string(),
            spot_id: "kroumirie-mountains".to_string(),
            author: Author::new("user-2", "Sarah Dubois", "sarah"),
            rating: 4,
            title: "Perfect for Nature Lovers".to_string(),
            content: "Beautiful forest setting with great hiking trails. The wildlife watching opportunities were excellent - we saw wild boar and various bird species. The only downside was that it got quite cold at night, so bring warm clothing even in summer.".to_string(),
            photos: strings(&["/review-forest-1.jpg"]),
            visit_date: const { date(2024, 2, 10) },
            created_at: const { date(2024, 2, 12) },
            likes: 15,
            helpful: 12,
        },
        Review {
            id: "review-3".to_string(),
            spot_id: "sidi-bou-said-beach".to_string(),
            author: Author::new("user-3", "Marco Rossi", "marco"),
            rating: 4,
            title: "Great Beach Camping".to_string(),
            content: "Lovely coastal location with easy access to the famous blue and white village. The beach is clean and perfect for swimming. Can get crowded during peak season, but the location makes up for it. Great restaurants nearby.".to_string(),
            photos: strings(&["/review-beach-1.jpg", "/review-beach-2.jpg", "/review-beach-3.jpg"]),
            visit_date: const { date(2024, 1, 28) },
            created_at: const { date(2024, 1, 30) },
            likes: 19,
            helpful: 14,
        },
    ]
});

static DISCUSSIONS: LazyLock<Vec<DiscussionThread>> = LazyLock::new(|| {
    vec![
        DiscussionThread {
            id: "thread-1".to_string(),
            title: "Best time to visit Sahara Desert?".to_string(),
            content: "Planning my first desert camping trip. What months would you recommend for the best weather and experience?".to_string(),
            author: Author::new("user-4", "Lisa Chen", "lisa"),
            region: "Sahara".to_string(),
            category: DiscussionCategory::Tips,
            created_at: const { date(2024, 2, 1) },
            views: 156,
            likes: 8,
            replies: vec![
                Reply {
                    id: "reply-1".to_string(),
                    content: "I'd recommend October to March. The temperatures are much more comfortable during these months, especially for sleeping outdoors.".to_string(),
                    author: Author::new("user-5", "Karim Mansouri", "karim"),
                    created_at: const { date(2024, 2, 1) },
                    likes: 5,
                },
                Reply {
                    id: "reply-2".to_string(),
                    content: "Agree with Karim! I went in December and it was perfect. Days were warm but not too hot, and nights were cool but not freezing.".to_string(),
                    author: Author::new("user-6", "Emma Thompson", "emma"),
                    created_at: const { date(2024, 2, 2) },
                    likes: 3,
                },
            ],
        },
        DiscussionThread {
            id: "thread-2".to_string(),
            title: "Camping meetup in Kroumirie Mountains - March 15-17".to_string(),
            content: "Organizing a group camping trip to the Kroumirie Mountains. Looking for 4-6 people to join. We'll be hiking, wildlife watching, and enjoying the forest. All skill levels welcome!".to_string(),
            author: Author::new("user-7", "Youssef Trabelsi", "youssef"),
            region: "North".to_string(),
            category: DiscussionCategory::Meetup,
            created_at: const { date(2024, 2, 5) },
            views: 89,
            likes: 12,
            replies: vec![Reply {
                id: "reply-3".to_string(),
                content: "I'm interested! What gear should I bring?".to_string(),
                author: Author::new("user-8", "Fatima Zahra", "fatima"),
                created_at: const { date(2024, 2, 5) },
                likes: 2,
            }],
        },
    ]
});

static PHOTO_POSTS: LazyLock<Vec<PhotoPost>> = LazyLock::new(|| {
    vec![
        PhotoPost {
            id: "photo-1".to_string(),
            author: Author::new("user-9", "David Wilson", "david"),
            spot_id: Some("chaambi-peak".to_string()),
            spot_name: Some("Mount Chaambi Peak Camp".to_string()),
            photos: strings(&["/photo-post-1.jpg", "/photo-post-2.jpg"]),
            caption: "Incredible sunrise from Tunisia's highest peak! The hike was challenging but so worth it. The view of the entire country from up here is breathtaking. 🏔️ #CampingTunisia #MountChaambi".to_string(),
            location: "Mount Chaambi, Kasserine".to_string(),
            created_at: const { date(2024, 2, 8) },
            likes: 34,
            comments: vec![Comment {
                id: "comment-1".to_string(),
                content: "Wow! This looks amazing. How difficult was the hike?".to_string(),
                author: Author::new("user-10", "Amina Khelifi", "amina"),
                created_at: const { date(2024, 2, 8) },
            }],
        },
        PhotoPost {
            id: "photo-2".to_string(),
            author: Author::new("user-11", "Nadia Bouaziz", "nadia"),
            spot_id: Some("tozeur-oasis".to_string()),
            spot_name: Some("Tozeur Oasis Desert Camp".to_string()),
            photos: strings(&["/photo-post-3.jpg"]),
            caption: "Peaceful morning in the oasis. The palm trees and natural springs create such a serene atmosphere. Perfect place to disconnect and recharge.".to_string(),
            location: "Tozeur Oasis".to_string(),
            created_at: const { date(2024, 2, 10) },
            likes: 28,
            comments: Vec::new(),
        },
    ]
});

#[must_use]
pub fn all_reviews() -> &'static [Review] {
    &REVIEWS
}

#[must_use]
pub fn reviews_for_spot(spot_id: &str) -> Vec<&'static Review> {
    REVIEWS.iter().filter(|review| review.spot_id == spot_id).collect()
}

/// Mean star rating of a spot's reviews, `None` when it has none
#[must_use]
pub fn average_rating(spot_id: &str) -> Option<f32> {
    let reviews = reviews_for_spot(spot_id);
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
    Some(sum as f32 / reviews.len() as f32)
}

#[must_use]
pub fn all_discussions() -> &'static [DiscussionThread] {
    &DISCUSSIONS
}

/// Threads of a region; region names match exactly
#[must_use]
pub fn discussions_by_region(region: &str) -> Vec<&'static DiscussionThread> {
    DISCUSSIONS.iter().filter(|thread| thread.region == region).collect()
}

#[must_use]
pub fn discussions_by_category(category: DiscussionCategory) -> Vec<&'static DiscussionThread> {
    DISCUSSIONS
        .iter()
        .filter(|thread| thread.category == category)
        .collect()
}

/// Photo posts, newest first
#[must_use]
pub fn photo_feed() -> Vec<&'static PhotoPost> {
    let mut posts: Vec<&PhotoPost> = PHOTO_POSTS.iter().collect();
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    posts
}
