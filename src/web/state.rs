use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::common::ReservationError;
use crate::config::AppConfig;
use crate::models::{Car, CarFilter};
use crate::services::{CarApi, KeyValueStore, Navigator, SessionStore};
use crate::types::ReservationReceipt;
use crate::web::handlers::{
    nav, ListingController, LoadOutcome, ReservationController, ToastId, ToastKind, ToastQueue,
};
use crate::web::helpers::{LISTING_LOAD_FAILED, RESERVATION_CONFIRMED};
use crate::web::templates::{NavView, PageView};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageEvent {
    /// Something visible changed; take a fresh [`PageView`].
    Changed,
    /// A toast was added. Schedule its dismissal.
    ToastShown(ToastId),
}

type Observer = Rc<dyn Fn(PageEvent)>;

/// The booking page: listing, reservation modal, navigation and toasts.
///
/// Methods take `&self` and keep `RefCell` borrows short, never across an
/// `.await`, so a new request can start while another is in flight.
pub struct BookingPage<S, A, N> {
    config: AppConfig,
    session: SessionStore<S>,
    api: A,
    navigator: N,
    listing: RefCell<ListingController>,
    reservation: RefCell<ReservationController>,
    toasts: RefCell<ToastQueue>,
    observer: RefCell<Option<Observer>>,
}

impl<S, A, N> BookingPage<S, A, N>
where
    S: KeyValueStore,
    A: CarApi,
    N: Navigator,
{
    pub fn new(config: AppConfig, store: S, api: A, navigator: N) -> Self {
        let session = SessionStore::new(store, config.login_path.clone());
        Self {
            config,
            session,
            api,
            navigator,
            listing: RefCell::new(ListingController::new()),
            reservation: RefCell::new(ReservationController::new()),
            toasts: RefCell::new(ToastQueue::new()),
            observer: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn set_observer(&self, observer: impl Fn(PageEvent) + 'static) {
        *self.observer.borrow_mut() = Some(Rc::new(observer));
    }

    fn emit(&self, event: PageEvent) {
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer(event);
        }
    }

    pub fn snapshot(&self) -> PageView {
        PageView {
            nav: self.nav(),
            listing: self.listing.borrow().view(&self.config),
            modal: self.reservation.borrow().view(),
            toasts: self.toasts.borrow().toasts().to_vec(),
        }
    }

    pub fn nav(&self) -> NavView {
        nav::refresh(&self.session)
    }

    pub fn cars(&self) -> Vec<Car> {
        self.listing.borrow().cars().to_vec()
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let id = self.toasts.borrow_mut().push(kind, message);
        self.emit(PageEvent::ToastShown(id));
        id
    }

    pub fn dismiss_toast(&self, id: ToastId) {
        if self.toasts.borrow_mut().dismiss(id) {
            self.emit(PageEvent::Changed);
        }
    }

    /// Fetches the listing for `filter` and renders the result.
    ///
    /// On success a pending reservation left before a login redirect is
    /// resumed.
    pub async fn load(&self, filter: CarFilter) -> LoadOutcome {
        let ticket = self.listing.borrow_mut().begin(filter);
        self.emit(PageEvent::Changed);

        let result = self.api.list_cars(&ticket.filter).await;
        let outcome = self.listing.borrow_mut().finish(&ticket, result);
        if matches!(outcome, LoadOutcome::Stale) {
            return outcome;
        }

        match &outcome {
            LoadOutcome::Stale => {}
            LoadOutcome::Failed(err) => {
                crate::log_err!("Listing request failed", &err.to_string());
                self.notify(ToastKind::Error, LISTING_LOAD_FAILED);
            }
            LoadOutcome::Empty => log::info!("No cars match the current filter"),
            LoadOutcome::Loaded { count } => {
                log::info!("Loaded {count} cars");
                self.resume_pending();
            }
        }

        self.emit(PageEvent::Changed);
        outcome
    }

    /// Loads again with the filter of the latest request.
    pub async fn reload(&self) -> LoadOutcome {
        let filter = self.listing.borrow().filter().clone();
        self.load(filter).await
    }

    /// Opens the car saved before a login redirect, if the user is now
    /// signed in. The marker is cleared even when the car is not listed.
    fn resume_pending(&self) -> Option<Car> {
        let pending = self.session.pending_car_id()?;
        if !self.session.is_authenticated() {
            return None;
        }

        self.session.take_pending_car_id();

        let car = self.listing.borrow().find(&pending).cloned();
        match car {
            Some(car) => {
                log::info!("Resuming reservation for {pending}");
                self.open(car.clone());
                Some(car)
            }
            None => {
                log::info!("Pending car {pending} is not in the current listing");
                None
            }
        }
    }

    /// Handles a "Reserve" click. Anonymous users are sent to the login page
    /// with the car remembered.
    pub fn reserve(&self, car_id: &str) -> bool {
        if !self
            .session
            .require_session_or_redirect(Some(car_id), &self.navigator)
        {
            return false;
        }

        let car = self.listing.borrow().find(car_id).cloned();
        match car {
            Some(car) => {
                self.open(car);
                true
            }
            None => {
                log::warn!("Reserve clicked for unknown car {car_id}");
                false
            }
        }
    }

    pub fn open(&self, car: Car) {
        let authenticated = self.session.is_authenticated();
        self.reservation.borrow_mut().open(car, authenticated);
        self.emit(PageEvent::Changed);
    }

    pub fn cancel(&self) {
        self.reservation.borrow_mut().close();
        self.emit(PageEvent::Changed);
    }

    pub fn is_modal_open(&self) -> bool {
        self.reservation.borrow().is_open()
    }

    /// Submits the open reservation.
    ///
    /// Validation failures and backend errors leave the modal open; success
    /// closes it and reloads the listing.
    pub async fn confirm(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<ReservationReceipt, ReservationError> {
        let session = self.session.get_session();
        let prepared = self
            .reservation
            .borrow_mut()
            .prepare(session.as_ref(), start, end);

        let submission = match prepared {
            Ok(submission) => submission,
            Err(err) => {
                match err {
                    ReservationError::MissingDates => {
                        self.notify(ToastKind::Error, err.to_string());
                    }
                    ReservationError::NotAuthenticated => self.emit(PageEvent::Changed),
                    _ => log::debug!("Confirm ignored: {err}"),
                }
                return Err(err);
            }
        };
        self.emit(PageEvent::Changed);

        let result = self
            .api
            .create_reservation(&submission.token, &submission.request)
            .await;
        let finished = self.reservation.borrow_mut().finish(&submission, result);

        match &finished {
            Ok(receipt) => {
                if let Some(total) = receipt.total_amount {
                    log::info!(
                        "Reservation created for {} (total {total})",
                        submission.request.car_id
                    );
                }
                self.notify(ToastKind::Success, RESERVATION_CONFIRMED);
                self.reload().await;
            }
            Err(err) => {
                crate::log_err!("Reservation request failed", &submission.request);
                self.notify(ToastKind::Error, err.to_string());
            }
        }

        finished
    }

    pub fn sign_out(&self) {
        nav::sign_out(&self.session, &self.navigator);
    }
}
