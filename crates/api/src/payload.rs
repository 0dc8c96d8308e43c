//! Request payloads and their validation.
//!
//! Every field is optional at the serde level so a missing field is reported
//! by name (`Missing required field: title`) rather than as a decode error.
//! Conversion into the db input DTOs runs the field checks, the weekday-code
//! grammar and the password digest; handlers never see unvalidated input.

use serde::Deserialize;
use webtoon_core::error::CoreError;
use webtoon_core::fields::{required, required_text};
use webtoon_core::hashing::sha512_hex;
use webtoon_core::types::{DbId, Timestamp};
use webtoon_core::weekday::{validate_weekday_code, Weekday};
use webtoon_db::models::episode::{CreateEpisode, UpdateEpisode};
use webtoon_db::models::star::StarInput;
use webtoon_db::models::toon::ToonInput;
use webtoon_db::models::user::{CreateUser, UpdateUser};
use webtoon_db::models::view_history::ViewHistoryInput;

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateUserPayload {
    pub user_id: Option<String>,
    /// Plaintext password; only its digest is stored.
    pub pw: Option<String>,
    pub name: Option<String>,
}

impl TryFrom<CreateUserPayload> for CreateUser {
    type Error = CoreError;

    fn try_from(p: CreateUserPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: required_text(p.user_id, "user_id")?,
            pw: sha512_hex(&required_text(p.pw, "pw")?),
            name: required_text(p.name, "name")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserPayload {
    pub pw: Option<String>,
    pub name: Option<String>,
}

impl TryFrom<UpdateUserPayload> for UpdateUser {
    type Error = CoreError;

    fn try_from(p: UpdateUserPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            pw: sha512_hex(&required_text(p.pw, "pw")?),
            name: required_text(p.name, "name")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Toon
// ---------------------------------------------------------------------------

/// Create and update share one payload; `synopsis` is the only optional field.
#[derive(Debug, Deserialize)]
pub struct ToonPayload {
    pub title: Option<String>,
    pub synopsis: Option<String>,
    pub platform: Option<String>,
    pub weekday: Option<String>,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl TryFrom<ToonPayload> for ToonInput {
    type Error = CoreError;

    fn try_from(p: ToonPayload) -> Result<Self, Self::Error> {
        let weekday = required(p.weekday, "weekday")?;
        validate_weekday_code(&weekday)?;
        Ok(Self {
            title: required_text(p.title, "title")?,
            synopsis: p.synopsis,
            platform: required_text(p.platform, "platform")?,
            weekday,
            url: required_text(p.url, "url")?,
            thumbnail_url: required_text(p.thumbnail_url, "thumbnail_url")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Episode
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct EpisodePayload {
    pub toon_id: Option<DbId>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub sequence: Option<i32>,
    pub updated_at: Option<Timestamp>,
}

impl TryFrom<EpisodePayload> for CreateEpisode {
    type Error = CoreError;

    fn try_from(p: EpisodePayload) -> Result<Self, Self::Error> {
        Ok(Self {
            toon_id: required(p.toon_id, "toon_id")?,
            title: required_text(p.title, "title")?,
            url: required_text(p.url, "url")?,
            thumbnail_url: required_text(p.thumbnail_url, "thumbnail_url")?,
            sequence: p.sequence,
            updated_at: p.updated_at,
        })
    }
}

/// An update is a full replacement, so `sequence` is mandatory here.
impl TryFrom<EpisodePayload> for UpdateEpisode {
    type Error = CoreError;

    fn try_from(p: EpisodePayload) -> Result<Self, Self::Error> {
        Ok(Self {
            toon_id: required(p.toon_id, "toon_id")?,
            title: required_text(p.title, "title")?,
            url: required_text(p.url, "url")?,
            thumbnail_url: required_text(p.thumbnail_url, "thumbnail_url")?,
            sequence: required(p.sequence, "sequence")?,
            updated_at: p.updated_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Star / ViewHistory
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct StarPayload {
    pub user_id: Option<String>,
    pub toon_id: Option<DbId>,
}

impl TryFrom<StarPayload> for StarInput {
    type Error = CoreError;

    fn try_from(p: StarPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: required_text(p.user_id, "user_id")?,
            toon_id: required(p.toon_id, "toon_id")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ViewHistoryPayload {
    pub user_id: Option<String>,
    pub episode_id: Option<DbId>,
}

impl TryFrom<ViewHistoryPayload> for ViewHistoryInput {
    type Error = CoreError;

    fn try_from(p: ViewHistoryPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: required_text(p.user_id, "user_id")?,
            episode_id: required(p.episode_id, "episode_id")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// `?weekday=Wed` on feed endpoints. Exactly one token, not a code.
#[derive(Debug, Default, Deserialize)]
pub struct WeekdayQuery {
    pub weekday: Option<String>,
}

impl WeekdayQuery {
    pub fn parse(&self) -> Result<Option<Weekday>, CoreError> {
        self.weekday.as_deref().map(Weekday::parse_token).transpose()
    }
}

/// `?platform=naver` on the toon listing.
#[derive(Debug, Default, Deserialize)]
pub struct PlatformQuery {
    pub platform: Option<String>,
}
