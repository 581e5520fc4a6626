use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::error::{MarketError, Result};
use crate::identity::Identity;
use crate::listing::{Condition, Listing, ListingId, ListingStatus};

/// Contents of the "upload component" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub condition: Option<Condition>,
    pub location: String,
    /// Local preview references of the selected photos. Never uploaded.
    pub images: Vec<String>,
}

impl ListingDraft {
    /// The first required field that is still empty.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("title", self.title.trim().is_empty()),
            ("description", self.description.trim().is_empty()),
            ("category", self.category.trim().is_empty()),
            ("condition", self.condition.is_none()),
            ("location", self.location.trim().is_empty()),
        ]
        .into_iter()
        .find_map(|(field, empty)| empty.then_some(field))
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Turn the draft into an active listing owned by `owner`.
    pub fn build(
        &self,
        id: ListingId,
        owner: &Identity,
        today: NaiveDate,
        config: &AppConfig,
    ) -> Result<Listing> {
        if let Some(field) = self.missing_field() {
            return Err(MarketError::IncompleteDraft(field));
        }
        let condition = self
            .condition
            .ok_or(MarketError::IncompleteDraft("condition"))?;
        let images = if self.images.is_empty() {
            vec![config.placeholder_image.clone()]
        } else {
            self.images.clone()
        };
        Ok(Listing {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            condition,
            location: self.location.trim().to_string(),
            images,
            category: self.category.trim().to_string(),
            classification: config.pending_label.clone(),
            upload_date: today,
            views: 0,
            status: ListingStatus::Active,
            owner_id: owner.id.clone(),
            owner_name: owner.name.clone(),
        })
    }
}

/// Lifecycle of the upload form's submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    /// Some required field is empty; the button is disabled.
    Editing,
    Submittable,
    /// Waiting out the simulated latency.
    Submitting,
    /// Listing stored; the view redirects.
    Done,
}

impl SubmitState {
    pub fn for_draft(draft: &ListingDraft) -> Self {
        if draft.is_complete() {
            SubmitState::Submittable
        } else {
            SubmitState::Editing
        }
    }

    /// Re-derive the state after a field edit. Edits do not affect a
    /// submission already in flight.
    pub fn on_edit(self, draft: &ListingDraft) -> Self {
        match self {
            SubmitState::Editing | SubmitState::Submittable => Self::for_draft(draft),
            SubmitState::Submitting | SubmitState::Done => self,
        }
    }

    pub fn begin_submit(self) -> Result<Self> {
        match self {
            SubmitState::Submittable => Ok(SubmitState::Submitting),
            _ => Err(MarketError::NotSubmittable),
        }
    }

    pub fn finish(self) -> Result<Self> {
        match self {
            SubmitState::Submitting => Ok(SubmitState::Done),
            _ => Err(MarketError::NotSubmittable),
        }
    }

    pub fn button_enabled(self) -> bool {
        self == SubmitState::Submittable
    }

    pub fn button_label(self) -> &'static str {
        match self {
            SubmitState::Submitting => "Uploading...",
            _ => "Upload Component",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::identity::{Role, UserId};

    use super::*;

    fn owner() -> Identity {
        Identity {
            id: UserId::new("c124"),
            name: "Priya Sharma".into(),
            email: "priya.sharma@outlook.com".into(),
            role: Role::Consumer,
            location: None,
            verified: None,
        }
    }

    fn complete() -> ListingDraft {
        ListingDraft {
            title: "GTX 1060".into(),
            description: "Fans rattle, card works".into(),
            category: "Graphics Card".into(),
            condition: Some(Condition::Fair),
            location: "Pune, MH".into(),
            images: Vec::new(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
    }

    #[test]
    fn no_images_yields_one_placeholder() {
        let config = AppConfig::default();
        let listing = complete()
            .build(ListingId("l1".into()), &owner(), today(), &config)
            .unwrap();
        assert_eq!(listing.images, vec!["/placeholder.svg".to_string()]);
        assert_eq!(listing.classification, "Pending AI Analysis");
        assert_eq!(listing.views, 0);
        assert_eq!(listing.status, ListingStatus::Active);
        assert_eq!(listing.owner_id, UserId::new("c124"));
        assert_eq!(listing.upload_date, today());
    }

    #[test]
    fn selected_images_are_kept() {
        let mut draft = complete();
        draft.images = vec!["blob:a".into(), "blob:b".into()];
        let listing = draft
            .build(ListingId("l1".into()), &owner(), today(), &AppConfig::default())
            .unwrap();
        assert_eq!(listing.images.len(), 2);
    }

    #[test]
    fn blank_field_blocks_build() {
        let mut draft = complete();
        draft.location = "   ".into();
        assert_eq!(draft.missing_field(), Some("location"));
        assert_eq!(
            draft.build(ListingId("l1".into()), &owner(), today(), &AppConfig::default()),
            Err(MarketError::IncompleteDraft("location"))
        );
        draft.location = "Pune".into();
        draft.condition = None;
        assert_eq!(draft.missing_field(), Some("condition"));
    }

    #[test]
    fn submit_state_machine() {
        let mut draft = ListingDraft::default();
        let state = SubmitState::for_draft(&draft);
        assert_eq!(state, SubmitState::Editing);
        assert!(!state.button_enabled());
        assert_eq!(state.begin_submit(), Err(MarketError::NotSubmittable));

        draft = complete();
        let state = state.on_edit(&draft);
        assert_eq!(state, SubmitState::Submittable);

        let state = state.begin_submit().unwrap();
        assert_eq!(state.button_label(), "Uploading...");
        assert_eq!(state.on_edit(&ListingDraft::default()), SubmitState::Submitting);
        assert_eq!(state.begin_submit(), Err(MarketError::NotSubmittable));
        assert_eq!(state.finish(), Ok(SubmitState::Done));
    }
}
