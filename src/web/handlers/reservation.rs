use chrono::NaiveDate;

use crate::common::{ApiError, ReservationError};
use crate::models::{Car, ReservationDraft, Session};
use crate::types::{CreateReservationRequest, ReservationReceipt};
use crate::web::templates::ModalView;

/// A validated request ready to be sent.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub token: String,
    pub request: CreateReservationRequest,
    /// The draft this submission was prepared from.
    pub draft: u64,
}

/// State of the reservation modal. Holds at most one draft.
#[derive(Debug, Default)]
pub struct ReservationController {
    draft: Option<ReservationDraft>,
    draft_generation: u64,
    auth_hint_visible: bool,
    submitting: bool,
}

impl ReservationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the modal for `car`, replacing any previous draft.
    pub fn open(&mut self, car: Car, authenticated: bool) {
        log::debug!("Opening reservation for {}", car.id);
        self.draft = Some(ReservationDraft::new(car));
        self.draft_generation += 1;
        self.auth_hint_visible = !authenticated;
    }

    /// Discards the draft. A submission still in flight keeps its guard
    /// until it finishes.
    pub fn close(&mut self) {
        self.draft = None;
        self.auth_hint_visible = false;
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// Validates the modal and marks a submission as in flight.
    ///
    /// The session is checked before the dates. A missing session reveals
    /// the sign-in hint. Nothing here closes the modal.
    pub fn prepare(
        &mut self,
        session: Option<&Session>,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Submission, ReservationError> {
        if self.submitting {
            return Err(ReservationError::Busy);
        }

        let draft = self.draft.as_mut().ok_or(ReservationError::NoActiveDraft)?;

        let Some(session) = session else {
            self.auth_hint_visible = true;
            return Err(ReservationError::NotAuthenticated);
        };

        let (Some(start_date), Some(end_date)) = (start, end) else {
            return Err(ReservationError::MissingDates);
        };

        draft.start_date = Some(start_date);
        draft.end_date = Some(end_date);
        self.submitting = true;

        Ok(Submission {
            token: session.token.clone(),
            request: CreateReservationRequest {
                car_id: draft.car.id.clone(),
                start_date,
                end_date,
            },
            draft: self.draft_generation,
        })
    }

    /// Records the backend's answer. Success closes the modal if it still
    /// shows the submitted draft; a draft opened in the meantime stays.
    /// Failure keeps the modal open for another try.
    pub fn finish(
        &mut self,
        submission: &Submission,
        result: Result<ReservationReceipt, ApiError>,
    ) -> Result<ReservationReceipt, ReservationError> {
        self.submitting = false;
        match result {
            Ok(receipt) => {
                if self.is_open() && self.draft_generation == submission.draft {
                    self.close();
                }
                Ok(receipt)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn view(&self) -> Option<ModalView> {
        self.draft.as_ref().map(|draft| ModalView {
            title: draft.title(),
            auth_hint_visible: self.auth_hint_visible,
            submitting: self.submitting,
        })
    }
}
