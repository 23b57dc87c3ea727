// SPDX-License-Identifier: MPL-2.0
//! In-memory video catalog.
//!
//! The catalog is the read-only data source for the whole application. It is
//! deliberately hidden behind the [`Catalog`] trait so the controllers and
//! screens never know they are talking to hard-coded sample data; a real
//! backend client could be substituted without touching them.

pub mod filter;

use chrono::NaiveDate;

/// Revenue attributed to a single view when deriving the earnings split.
pub const PER_VIEW_RATE: f64 = 0.05;

/// The fixed set of tags offered in the feed's tag strip.
pub const POPULAR_TAGS: [&str; 10] = [
    "nature", "city", "art", "music", "dance", "food", "travel", "fashion", "sport", "tech",
];

/// A single published video with its display metadata and the viewer's
/// relationship to it (liked/saved/subscribed flags).
///
/// Records are immutable; interaction toggles live in per-screen state and
/// are seeded from these flags on mount.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    pub author_avatar: String,
    pub thumbnail: String,
    pub media_url: String,
    pub duration_secs: f64,
    pub views: u64,
    pub likes: u64,
    pub subscribers: u64,
    pub tags: Vec<String>,
    pub description: String,
    pub upload_date: NaiveDate,
    pub liked: bool,
    pub saved: bool,
    pub subscribed: bool,
    pub earnings: f64,
}

impl VideoRecord {
    /// Upload date rendered for display, e.g. "December 15, 2025".
    pub fn upload_date_display(&self) -> String {
        self.upload_date.format("%B %-d, %Y").to_string()
    }

    /// Portion of the earnings attributed to views.
    pub fn view_revenue(&self) -> f64 {
        self.views as f64 * PER_VIEW_RATE
    }

    /// Portion of the earnings attributed to donations.
    pub fn donation_revenue(&self) -> f64 {
        self.earnings - self.view_revenue()
    }

    /// Like-to-view ratio as a percentage, using the live like count.
    pub fn rating_percent(&self, likes: u64) -> f64 {
        if self.views == 0 {
            return 0.0;
        }
        likes as f64 / self.views as f64 * 100.0
    }
}

/// The channel profile shown on the profile view.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub username: String,
    pub avatar: String,
    pub bio: String,
    pub about: String,
    pub followers: u64,
    pub following: u64,
    pub videos: u64,
    pub is_following: bool,
}

/// Read-only repository over the video dataset.
pub trait Catalog {
    /// Looks up a video by its opaque identifier.
    fn get(&self, id: &str) -> Option<&VideoRecord>;

    /// All videos, in publication order.
    fn list(&self) -> &[VideoRecord];

    /// The signed-in user's profile.
    fn profile(&self) -> &Profile;
}

/// Hard-coded sample dataset standing in for a live data service.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    videos: Vec<VideoRecord>,
    profile: Profile,
}

impl Catalog for MockCatalog {
    fn get(&self, id: &str) -> Option<&VideoRecord> {
        self.videos.iter().find(|v| v.id == id)
    }

    fn list(&self) -> &[VideoRecord] {
        &self.videos
    }

    fn profile(&self) -> &Profile {
        &self.profile
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for building a record; the sample set below is long enough
/// that spelling out every field at each call site would drown the data.
#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    title: &str,
    author: &str,
    avatar_seed: &str,
    sample: &str,
    duration_secs: f64,
    views: u64,
    likes: u64,
    subscribers: u64,
    tags: &[&str],
    description: &str,
    upload_date: NaiveDate,
    liked: bool,
    saved: bool,
    subscribed: bool,
    earnings: f64,
) -> VideoRecord {
    VideoRecord {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        author_avatar: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={avatar_seed}"),
        thumbnail: format!("https://images.rainbow.video/thumbs/{id}.jpg"),
        media_url: format!(
            "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/{sample}.mp4"
        ),
        duration_secs,
        views,
        likes,
        subscribers,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        description: description.to_string(),
        upload_date,
        liked,
        saved,
        subscribed,
        earnings,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

impl MockCatalog {
    pub fn new() -> Self {
        let videos = vec![
            record(
                "1",
                "Sunset over the ocean with rainbow glints",
                "SkyWatcher",
                "sky",
                "BigBuckBunny",
                245.0,
                45_200,
                3_800,
                125_000,
                &["nature", "sunset", "ocean"],
                "A breathtaking sunset over the ocean with beautiful rainbow glints \
                 on the water. I filmed this on a trip down the west coast. I hope it \
                 brings you a few minutes of calm. Subscribe to the channel so you \
                 don't miss new nature videos!",
                date(2025, 12, 15),
                false,
                false,
                false,
                2_260.5,
            ),
            record(
                "2",
                "City life in vivid colors",
                "UrbanArt",
                "urban",
                "ElephantsDream",
                187.0,
                78_900,
                6_200,
                234_000,
                &["city", "art", "neon"],
                "The bright neon lights of the big city create an amazing atmosphere. \
                 In this video I show the night life of the metropolis with all its \
                 colors and energy.",
                date(2025, 12, 10),
                true,
                false,
                true,
                3_945.0,
            ),
            record(
                "3",
                "The magic of the northern lights",
                "NorthernLights",
                "north",
                "ForBiggerBlazes",
                321.0,
                123_400,
                12_100,
                456_000,
                &["nature", "aurora", "night"],
                "The aurora is one of the most beautiful natural phenomena on Earth. \
                 Filmed in Norway during an expedition.",
                date(2025, 12, 5),
                false,
                true,
                false,
                6_170.0,
            ),
            record(
                "4",
                "Mountain peaks at dawn",
                "MountainHiker",
                "mountain",
                "ForBiggerEscapes",
                154.0,
                34_200,
                2_900,
                89_000,
                &["mountains", "dawn", "travel"],
                "Climbing mountain peaks at dawn is an unforgettable adventure!",
                date(2025, 12, 1),
                false,
                false,
                false,
                1_710.0,
            ),
            record(
                "5",
                "Rainbow after a summer storm",
                "WeatherChaser",
                "weather",
                "ForBiggerFun",
                208.0,
                89_700,
                8_400,
                178_000,
                &["rainbow", "weather", "summer"],
                "A gorgeous rainbow after a summer storm. Nature paints real \
                 masterpieces!",
                date(2025, 11, 28),
                true,
                true,
                true,
                4_485.0,
            ),
            record(
                "6",
                "Portrait in neon light",
                "PortraitPro",
                "portrait",
                "ForBiggerJoyrides",
                176.0,
                56_800,
                4_700,
                345_000,
                &["portrait", "neon", "style"],
                "Experiments with neon lighting in portrait photography.",
                date(2025, 11, 25),
                false,
                false,
                false,
                2_840.0,
            ),
        ];

        let profile = Profile {
            name: "Rainbow User".to_string(),
            username: "rainbow_creator".to_string(),
            avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=rainbow".to_string(),
            bio: "Creating vivid content for you! 🌈 Subscribe and share the joy!".to_string(),
            about: "Hi! I make videos about nature, travel and everything that fills \
                    life with bright colors. Join me on the journey! 🌈"
                .to_string(),
            followers: 128_500,
            following: 342,
            videos: 156,
            is_following: false,
        };

        Self { videos, profile }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_known_id_returns_record() {
        let catalog = MockCatalog::new();
        let video = catalog.get("3").expect("video 3 exists");
        assert_eq!(video.author, "NorthernLights");
        assert!(video.saved);
    }

    #[test]
    fn lookup_by_unknown_id_returns_none() {
        let catalog = MockCatalog::new();
        assert!(catalog.get("does-not-exist").is_none());
    }

    #[test]
    fn list_preserves_publication_order() {
        let catalog = MockCatalog::new();
        let ids: Vec<&str> = catalog.list().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn upload_date_renders_for_display() {
        let catalog = MockCatalog::new();
        let video = catalog.get("1").expect("video 1 exists");
        assert_eq!(video.upload_date_display(), "December 15, 2025");
    }

    #[test]
    fn earnings_split_matches_per_view_rate() {
        let catalog = MockCatalog::new();
        let video = catalog.get("1").expect("video 1 exists");
        assert!((video.view_revenue() - 2_260.0).abs() < 1e-9);
        assert!((video.donation_revenue() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn rating_uses_live_like_count() {
        let catalog = MockCatalog::new();
        let video = catalog.get("2").expect("video 2 exists");
        let rating = video.rating_percent(video.likes);
        assert!((rating - 7.857_92).abs() < 1e-3);
    }

    #[test]
    fn rating_with_zero_views_is_zero() {
        let mut video = MockCatalog::new().get("1").expect("video 1").clone();
        video.views = 0;
        assert_eq!(video.rating_percent(10), 0.0);
    }
}
