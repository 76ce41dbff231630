//! The scheduling engine: content to immutable post records.

use crate::phase::Phase;
use crate::studio::Studio;
use chrono::{DateTime, Duration, Utc};
use tracing::{info, instrument};
use vetrina_core::{Analytics, MediaKind, MediaSource, Platform, Post, PostId};
use vetrina_error::{StudioError, StudioErrorKind, VetrinaResult};
use vetrina_interface::GenerationDriver;

impl<D: GenerationDriver> Studio<D> {
    /// Schedule the generated content of one platform at the given time.
    ///
    /// The post id is deterministic from platform and time, so scheduling the
    /// same pair twice replaces the earlier post. The platform's content is
    /// stamped with the time. The very first post of the session also
    /// navigates to the calendar.
    ///
    /// # Errors
    ///
    /// Fails when content is not ready or the platform has none.
    #[instrument(skip(self))]
    pub async fn schedule(&self, platform: Platform, when: DateTime<Utc>) -> VetrinaResult<PostId> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let media_kind = state
            .media
            .as_ref()
            .map(MediaSource::kind)
            .unwrap_or(MediaKind::Video);
        let content = state
            .content
            .ready_mut()
            .ok_or_else(|| StudioError::new(StudioErrorKind::ContentNotReady))?;
        let platform_content = content.get_mut(platform).ok_or_else(|| {
            StudioError::new(StudioErrorKind::UnknownPlatformContent(platform.to_string()))
        })?;

        let post = Post::scheduled(
            platform,
            platform_content.title().clone(),
            platform_content.description().clone(),
            platform_content.hashtags().clone(),
            when,
            media_kind,
        );
        let id = post.id().clone();
        let title = post.title().clone();
        platform_content.set_scheduled_at(when);

        let was_empty = state.posts.is_empty();
        state.posts.retain(|existing| existing.id() != &id);
        state.posts.push(post);
        state
            .activity
            .record(format!("Scheduled post for {}: \"{}\"", platform, title));
        if was_empty {
            state.phase = Phase::Calendar;
        }
        info!(%platform, post = %id, "Scheduled post");
        Ok(id)
    }

    /// Schedule from a raw datetime input, validating it first.
    ///
    /// # Errors
    ///
    /// Empty input or an unparseable timestamp is rejected before any state
    /// change.
    pub async fn schedule_from_input(
        &self,
        platform: Platform,
        input: &str,
    ) -> VetrinaResult<PostId> {
        let input = input.trim();
        if input.is_empty() {
            return Err(StudioError::new(StudioErrorKind::EmptySchedule).into());
        }
        let when = DateTime::parse_from_rfc3339(input)
            .map_err(|_| StudioError::new(StudioErrorKind::InvalidSchedule(input.to_string())))?
            .with_timezone(&Utc);
        self.schedule(platform, when).await
    }

    /// Schedule every connected platform whose content lacks a time, using
    /// the AI-suggested time when present and one hour from `now` otherwise.
    ///
    /// Navigates to the calendar once when anything was scheduled; a second
    /// invocation after everything is scheduled creates zero posts.
    #[instrument(skip(self))]
    pub async fn schedule_all(&self, now: DateTime<Utc>) -> VetrinaResult<Vec<PostId>> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let media_kind = state
            .media
            .as_ref()
            .map(MediaSource::kind)
            .unwrap_or(MediaKind::Video);
        let content = state
            .content
            .ready_mut()
            .ok_or_else(|| StudioError::new(StudioErrorKind::ContentNotReady))?;

        let pending: Vec<Platform> = content
            .iter()
            .filter(|(platform, entry)| {
                state.connections.is_connected(*platform) && entry.scheduled_at().is_none()
            })
            .map(|(platform, _)| platform)
            .collect();
        if pending.is_empty() {
            return Ok(Vec::new());
        }

        let fallback = now + Duration::hours(1);
        let mut ids = Vec::with_capacity(pending.len());
        for platform in pending {
            let when = state
                .suggested_times
                .get(&platform)
                .copied()
                .unwrap_or(fallback);
            let entry = match state.content.ready_mut().and_then(|c| c.get_mut(platform)) {
                Some(entry) => entry,
                None => continue,
            };
            let post = Post::scheduled(
                platform,
                entry.title().clone(),
                entry.description().clone(),
                entry.hashtags().clone(),
                when,
                media_kind,
            );
            let id = post.id().clone();
            let title = post.title().clone();
            entry.set_scheduled_at(when);
            state.posts.retain(|existing| existing.id() != &id);
            state.posts.push(post);
            state
                .activity
                .record(format!("Scheduled post for {}: \"{}\"", platform, title));
            ids.push(id);
        }

        state.phase = Phase::Calendar;
        info!(count = ids.len(), "Scheduled all pending platforms");
        Ok(ids)
    }

    /// Cancel a scheduled post, making its platform reschedulable.
    ///
    /// Removes exactly the post with the given id and clears the matching
    /// content's schedule stamp.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: &PostId) -> VetrinaResult<()> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let index = state
            .posts
            .iter()
            .position(|post| post.id() == id)
            .ok_or_else(|| StudioError::new(StudioErrorKind::UnknownPost(id.to_string())))?;
        let post = state.posts.remove(index);

        if let Some(content) = state.content.ready_mut()
            && let Some(entry) = content.get_mut(*post.platform())
        {
            entry.clear_schedule();
        }
        state.activity.record(format!(
            "Cancelled post for {}: \"{}\"",
            post.platform(),
            post.title()
        ));
        info!(post = %id, "Cancelled post");
        Ok(())
    }

    /// Fetch simulated analytics for a post and apply them.
    ///
    /// # Errors
    ///
    /// Propagates the service failure; nothing is mutated in that case.
    #[instrument(skip(self))]
    pub async fn refresh_analytics(&self, id: &PostId) -> VetrinaResult<()> {
        let post = {
            let state = self.state.read().await;
            state
                .post(id)
                .cloned()
                .ok_or_else(|| StudioError::new(StudioErrorKind::UnknownPost(id.to_string())))?
        };
        let analytics = self.driver.simulate_analytics(&post).await?;
        self.apply_analytics(id, analytics).await
    }

    /// Replace a post's analytics counters wholesale.
    ///
    /// A keyed update: only the addressed post is touched, so interleaved
    /// completions for different posts cannot lose each other's writes.
    pub async fn apply_analytics(&self, id: &PostId, analytics: Analytics) -> VetrinaResult<()> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        let post = state
            .post_mut(id)
            .ok_or_else(|| StudioError::new(StudioErrorKind::UnknownPost(id.to_string())))?;
        post.set_analytics(analytics);
        let title = post.title().clone();
        state
            .activity
            .record(format!("Refreshed analytics for post: \"{}\"", title));
        Ok(())
    }
}
