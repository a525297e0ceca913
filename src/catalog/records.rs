//! Catalog Records
//!
//! Typed records for each content collection. The CMS leaves every field
//! other than the id optional, so these records do too; display defaulting
//! happens where a value is actually shown, not here.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::prices::Price;

/// A ticketed festival event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Collection record id.
    pub id: String,

    /// Event name.
    #[serde(default)]
    pub name: Option<String>,

    /// Short description.
    #[serde(default)]
    pub description: Option<String>,

    /// Calendar date the event takes place on.
    #[serde(default)]
    pub date: Option<Date>,

    /// Start time, as displayed.
    #[serde(default)]
    pub time: Option<String>,

    /// Venue within the campus.
    #[serde(default)]
    pub location: Option<String>,

    /// Poster image URL.
    #[serde(default)]
    pub image: Option<String>,

    /// Ticket price.
    #[serde(default)]
    pub price: Option<Price>,
}

impl Event {
    /// Formats the event date for display, "Mar 15, 2026" style, or "TBA"
    /// when no date is set.
    #[must_use]
    pub fn display_date(&self) -> String {
        self.date.map_or_else(
            || "TBA".to_owned(),
            |date| date.strftime("%b %d, %Y").to_string(),
        )
    }
}

/// One entry in the festival programme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Collection record id.
    pub id: String,

    /// Entry name.
    #[serde(default)]
    pub name: Option<String>,

    /// Short description.
    #[serde(default)]
    pub description: Option<String>,

    /// Day the entry falls on.
    #[serde(default)]
    pub date: Option<Date>,

    /// Time range, as displayed.
    #[serde(default)]
    pub time: Option<String>,

    /// Venue.
    #[serde(default)]
    pub location: Option<String>,

    /// Programme category.
    #[serde(default)]
    pub category: Option<String>,
}

/// A photo from a previous edition of the festival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryPhoto {
    /// Collection record id.
    pub id: String,

    /// Photo file URL.
    #[serde(default)]
    pub photo: Option<String>,

    /// Photo title.
    #[serde(default)]
    pub title: Option<String>,

    /// Caption.
    #[serde(default)]
    pub description: Option<String>,

    /// Date the photo was uploaded.
    #[serde(default)]
    pub upload_date: Option<Date>,

    /// Photographer credit.
    #[serde(default)]
    pub photographer: Option<String>,

    /// Event tag used for gallery filtering.
    #[serde(default)]
    pub tag: Option<String>,
}

/// A festival sponsor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sponsor {
    /// Collection record id.
    pub id: String,

    /// Sponsor name.
    #[serde(default)]
    pub name: Option<String>,

    /// Logo image URL.
    #[serde(default)]
    pub logo: Option<String>,

    /// Sponsor website URL.
    #[serde(default)]
    pub website: Option<String>,

    /// Short description.
    #[serde(default)]
    pub description: Option<String>,

    /// Sponsorship tier.
    #[serde(default)]
    pub tier: Option<String>,
}

/// A frequently asked question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    /// Collection record id.
    pub id: String,

    /// The question.
    #[serde(default)]
    pub question: Option<String>,

    /// The answer.
    #[serde(default)]
    pub answer: Option<String>,

    /// Topic category used for filtering.
    #[serde(default)]
    pub category: Option<String>,

    /// Whether the question is featured at the top of the page.
    #[serde(default)]
    pub featured: bool,

    /// Explicit ordering within the page.
    #[serde(default)]
    pub display_order: Option<i64>,
}

impl Faq {
    /// Sort key for the FAQ page: featured questions first, then by display
    /// order, missing orders treated as zero.
    #[must_use]
    pub fn display_rank(&self) -> (bool, i64) {
        (!self.featured, self.display_order.unwrap_or(0))
    }
}

/// An attendee achievement badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    /// Collection record id.
    pub id: String,

    /// Badge name.
    #[serde(default)]
    pub name: Option<String>,

    /// What the badge is awarded for.
    #[serde(default)]
    pub description: Option<String>,

    /// Badge image URL.
    #[serde(default)]
    pub image: Option<String>,

    /// Rarity tier.
    #[serde(default)]
    pub rarity: Option<String>,

    /// Badge category.
    #[serde(default)]
    pub category: Option<String>,
}

/// A record from any catalog collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Record {
    /// An event record.
    Event(Event),

    /// A schedule record.
    Schedule(ScheduleEntry),

    /// A gallery photo record.
    GalleryPhoto(GalleryPhoto),

    /// A sponsor record.
    Sponsor(Sponsor),

    /// A FAQ record.
    Faq(Faq),

    /// A badge record.
    Badge(Badge),
}

impl Record {
    /// Projects into an event record.
    #[must_use]
    pub fn into_event(self) -> Option<Event> {
        match self {
            Self::Event(event) => Some(event),
            _ => None,
        }
    }

    /// Projects into a schedule record.
    #[must_use]
    pub fn into_schedule(self) -> Option<ScheduleEntry> {
        match self {
            Self::Schedule(entry) => Some(entry),
            _ => None,
        }
    }

    /// Projects into a gallery photo record.
    #[must_use]
    pub fn into_gallery_photo(self) -> Option<GalleryPhoto> {
        match self {
            Self::GalleryPhoto(photo) => Some(photo),
            _ => None,
        }
    }

    /// Projects into a sponsor record.
    #[must_use]
    pub fn into_sponsor(self) -> Option<Sponsor> {
        match self {
            Self::Sponsor(sponsor) => Some(sponsor),
            _ => None,
        }
    }

    /// Projects into a FAQ record.
    #[must_use]
    pub fn into_faq(self) -> Option<Faq> {
        match self {
            Self::Faq(faq) => Some(faq),
            _ => None,
        }
    }

    /// Projects into a badge record.
    #[must_use]
    pub fn into_badge(self) -> Option<Badge> {
        match self {
            Self::Badge(badge) => Some(badge),
            _ => None,
        }
    }
}
