//! The once-per-invocation posting run.
//!
//! An external scheduler triggers the binary; each invocation performs one
//! pass: fetch the calendar, resolve the current slot, publish today's post
//! for that slot if it has not been published yet, and record the publish in
//! the remote log.

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use tracing::{error, info, warn};

use dripfeed_gcs::{GcsClient, GcsError};
use dripfeed_schedule::{ContentCalendar, PublicationLog, ScheduleError, Slot};
use dripfeed_telegram::{TelegramClient, TelegramError};

/// Fixed name of the publication log object in the bucket.
pub const POSTED_LOG_OBJECT: &str = "posted_log.json";

/// How a run ended.
///
/// Only `Published` had any external effect; every other outcome is an
/// ordinary no-op termination, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A post was published and the log updated.
    Published { date: NaiveDate, slot: Slot },
    /// This date and slot were already published by an earlier run.
    AlreadyPosted { date: NaiveDate, slot: Slot },
    /// The current hour falls outside every slot.
    NoSlot { hour: u32 },
    /// The calendar has no entry for today.
    NoEntryForDate { date: NaiveDate },
    /// Today's entry has no post at the resolved slot's index.
    NoPostForSlot { date: NaiveDate, slot: Slot },
}

/// Errors that terminate a run.
///
/// A publish failure deliberately leaves the log untouched, so the next
/// invocation inside the same slot window retries the post.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The content calendar could not be fetched.
    #[error("storage error: {0}")]
    Storage(#[from] GcsError),

    /// The content calendar could not be parsed.
    #[error("calendar error: {0}")]
    Calendar(#[from] ScheduleError),

    /// The publish call was rejected.
    #[error("publish error: {0}")]
    Publish(#[from] TelegramError),
}

/// One-shot poster: fetch, resolve, publish at most once, record.
pub struct Poster {
    gcs: GcsClient,
    telegram: TelegramClient,
    content_object: String,
    log_object: String,
}

impl Poster {
    pub fn new(
        gcs: GcsClient,
        telegram: TelegramClient,
        content_object: impl Into<String>,
    ) -> Self {
        Self {
            gcs,
            telegram,
            content_object: content_object.into(),
            log_object: POSTED_LOG_OBJECT.to_string(),
        }
    }

    /// Run against the current local wall clock.
    pub async fn run(&self) -> Result<RunOutcome, RunError> {
        self.run_at(Local::now().naive_local()).await
    }

    /// Run as if invoked at `now`. Split out so tests control the clock.
    pub async fn run_at(&self, now: NaiveDateTime) -> Result<RunOutcome, RunError> {
        let bytes = self.gcs.download(&self.content_object).await?;
        let calendar = ContentCalendar::from_slice(&bytes)?;

        let hour = now.hour();
        let Some(slot) = Slot::for_hour(hour) else {
            info!(hour, "current hour falls outside every slot");
            return Ok(RunOutcome::NoSlot { hour });
        };

        let today = now.date();
        let Some(posts) = calendar.posts_for(today) else {
            warn!(%today, "no calendar entry for today");
            return Ok(RunOutcome::NoEntryForDate { date: today });
        };

        let Some(post) = posts.get(slot.index()) else {
            info!(%today, %slot, "no post configured for this slot");
            return Ok(RunOutcome::NoPostForSlot { date: today, slot });
        };

        let mut log = self.load_log().await;
        if log.is_posted(today, slot) {
            info!(%today, %slot, "already published, skipping");
            return Ok(RunOutcome::AlreadyPosted { date: today, slot });
        }

        info!(%today, %slot, title = %post.title, "publishing post");
        self.telegram.send_post(&post.title, &post.text).await?;

        log.mark_posted(today, slot);
        self.save_log(&log).await;

        Ok(RunOutcome::Published { date: today, slot })
    }

    /// Load the publication log, failing open: a missing or unreadable log
    /// becomes an empty one, so publishing is never blocked by the log.
    async fn load_log(&self) -> PublicationLog {
        match self.gcs.download_if_exists(&self.log_object).await {
            Ok(Some(bytes)) => match PublicationLog::from_slice(&bytes) {
                Ok(log) => log,
                Err(e) => {
                    warn!(error = %e, "publication log is malformed, treating as empty");
                    PublicationLog::default()
                }
            },
            Ok(None) => PublicationLog::default(),
            Err(e) => {
                warn!(error = %e, "failed to load publication log, treating as empty");
                PublicationLog::default()
            }
        }
    }

    /// Persist the log. A failed save is logged but never fails the run;
    /// the accepted cost is a possible duplicate post from a later retry.
    async fn save_log(&self, log: &PublicationLog) {
        let bytes = match log.to_bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(error = %e, "failed to serialize publication log");
                return;
            }
        };

        match self
            .gcs
            .upload(&self.log_object, bytes, "application/json")
            .await
        {
            Ok(()) => info!("publication log saved"),
            Err(e) => error!(error = %e, "failed to save publication log"),
        }
    }
}
