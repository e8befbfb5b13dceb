//! Per-form verification state machine.
//!
//! Every mutation takes the session lock, applies the synchronous part of
//! the transition and releases the lock before any network call. Remote
//! answers are applied by the verification future itself, under the lock,
//! against whatever the selection looks like by then.

use super::dto::{FormKind, VerificationOutcome, VerifiedLocation};
use super::use_case::LocationEngine;
use crate::domain::catalog::{
    LOCAL_OVERRIDE_STATE, canonical_state, districts_for, is_local_override_state,
    local_district_for_pincode,
};
use crate::domain::location::{
    alias::normalize,
    entity::{LocationSelection, VerificationStatus},
    errors::{LocationError, ReverseGeocodeError},
    events::{LocationNote, ReasonCode, VerificationChanged},
    value_objects::{Pincode, PostalCandidate},
};
use crate::infrastructure::geocoding::PositionSource;
use chrono::Utc;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::{runtime::Handle, sync::broadcast};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

const EVENT_CAPACITY: usize = 16;

type SharedOutcome = Shared<BoxFuture<'static, VerificationOutcome>>;

/// Handle on an in-flight verification. Every caller asking for the same
/// pincode while the call runs gets a ticket for the same future.
///
/// Outside a Tokio runtime the call is not spawned and only runs while a
/// ticket is awaited.
#[derive(Clone)]
pub struct VerificationTicket {
    pincode: String,
    outcome: SharedOutcome,
}

impl VerificationTicket {
    pub fn pincode(&self) -> &str {
        &self.pincode
    }

    /// Resolves once the answer has been applied to the session.
    pub async fn wait(self) -> VerificationOutcome {
        self.outcome.await
    }
}

impl fmt::Debug for VerificationTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationTicket")
            .field("pincode", &self.pincode)
            .finish_non_exhaustive()
    }
}

/// Result of a pincode edit.
#[derive(Debug)]
pub enum PincodeEdit {
    /// The text equals the last verified pincode; verification is kept.
    Unchanged,
    /// Fewer than six digits so far.
    Incomplete,
    /// Verified without a network call.
    Verified(VerifiedLocation),
    /// Rejected without a network call.
    Rejected(ReasonCode),
    Verifying(VerificationTicket),
}

struct InFlight {
    pincode: String,
    call_id: u64,
    outcome: SharedOutcome,
}

impl InFlight {
    fn ticket(&self) -> VerificationTicket {
        VerificationTicket {
            pincode: self.pincode.clone(),
            outcome: self.outcome.clone(),
        }
    }
}

struct SessionState {
    selection: LocationSelection,
    district_options: Vec<String>,
    candidates: Vec<PostalCandidate>,
    note: LocationNote,
    /// Outstanding calls keyed by pincode.
    in_flight: HashMap<String, InFlight>,
    /// The call whose answer the current pincode is waiting for.
    current_call: Option<u64>,
    next_call_id: u64,
}

impl SessionState {
    fn new() -> Self {
        Self {
            selection: LocationSelection::new(),
            district_options: Vec::new(),
            candidates: Vec::new(),
            note: LocationNote::Prompt,
            in_flight: HashMap::new(),
            current_call: None,
            next_call_id: 0,
        }
    }

    /// Pre-fills state and district from a lookup. A new state reloads the
    /// district options; a reported district is added to them once.
    fn prefill(&mut self, state: Option<String>, district: Option<String>) {
        let state_changed = state
            .as_deref()
            .is_some_and(|s| self.selection.state() != Some(s));
        self.selection.fill_location(state, district.clone());
        if state_changed {
            self.district_options = district_options(self.selection.state());
            self.candidates.clear();
        }
        if let Some(district) = district {
            insert_option(&mut self.district_options, &district);
        }
    }

    fn verified_location(&self) -> VerifiedLocation {
        VerifiedLocation {
            pincode: self.selection.pincode().to_string(),
            state: self.selection.state().unwrap_or_default().to_string(),
            district: self.selection.district().unwrap_or_default().to_string(),
        }
    }
}

fn district_options(state: Option<&str>) -> Vec<String> {
    state
        .map(districts_for)
        .unwrap_or_default()
        .iter()
        .map(|d| d.to_string())
        .collect()
}

fn insert_option(options: &mut Vec<String>, district: &str) {
    if !options.iter().any(|o| o.eq_ignore_ascii_case(district)) {
        options.push(district.to_string());
    }
}

struct SessionCore {
    id: Uuid,
    kind: FormKind,
    state: Mutex<SessionState>,
    events: broadcast::Sender<VerificationChanged>,
}

impl SessionCore {
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, state: &SessionState, reason: Option<ReasonCode>) {
        let event = VerificationChanged {
            session_id: self.id,
            verified: state.selection.is_verified(),
            status: state.selection.status(),
            pincode: state.selection.pincode().to_string(),
            reason,
            note: state.note,
            at: Utc::now(),
        };
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    /// Applies a remote answer for `pincode` obtained by call `call_id`.
    fn apply_remote(
        &self,
        call_id: u64,
        pincode: &str,
        result: Result<VerifiedLocation, LocationError>,
    ) -> VerificationOutcome {
        let mut state = self.lock();
        if state.in_flight.get(pincode).is_some_and(|f| f.call_id == call_id) {
            state.in_flight.remove(pincode);
        }
        let current = state.current_call == Some(call_id);
        if current {
            state.current_call = None;
        }

        if state.selection.pincode() != pincode {
            debug!(session = %self.id, pincode, "superseded verification discarded");
            return VerificationOutcome::Discarded;
        }

        match result {
            Ok(location) => {
                if state.selection.is_verified() {
                    return VerificationOutcome::Verified(state.verified_location());
                }
                state.prefill(Some(location.state.clone()), Some(location.district.clone()));
                state.selection.mark_verified(pincode);
                state.note = LocationNote::Verified;
                self.emit(&state, None);
                info!(session = %self.id, form = ?self.kind, pincode, "Location verified");
                VerificationOutcome::Verified(location)
            }
            Err(e) => {
                if state.selection.is_verified() || !current {
                    debug!(session = %self.id, pincode, call_id, error = %e, "late failure ignored");
                    return VerificationOutcome::Discarded;
                }
                let reason = e.reason_code().unwrap_or(ReasonCode::NotFound);
                warn!(session = %self.id, pincode, error = %e, "Pincode verification failed");
                state.selection.mark_rejected();
                state.note = LocationNote::PickFromList;
                self.emit(&state, Some(reason));
                VerificationOutcome::Rejected(reason)
            }
        }
    }
}

/// The location part of one open form.
///
/// Cloning yields another handle on the same session.
#[derive(Clone)]
pub struct LocationSession {
    engine: LocationEngine,
    core: Arc<SessionCore>,
}

impl LocationSession {
    pub(super) fn new(engine: LocationEngine, kind: FormKind) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            engine,
            core: Arc::new(SessionCore {
                id: Uuid::now_v7(),
                kind,
                state: Mutex::new(SessionState::new()),
                events,
            }),
        }
    }

    pub fn id(&self) -> Uuid {
        self.core.id
    }

    pub fn kind(&self) -> FormKind {
        self.core.kind
    }

    pub fn selection(&self) -> LocationSelection {
        self.core.lock().selection.clone()
    }

    pub fn note(&self) -> LocationNote {
        self.core.lock().note
    }

    pub fn district_options(&self) -> Vec<String> {
        self.core.lock().district_options.clone()
    }

    pub fn candidates(&self) -> Vec<PostalCandidate> {
        self.core.lock().candidates.clone()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<VerificationChanged> {
        self.core.events.subscribe()
    }

    /// Synchronous submit gate.
    pub fn can_submit(&self) -> bool {
        self.core.lock().selection.is_verified()
    }

    /// Selects a state by any accepted spelling. Clears district, pincode
    /// and verification, and reloads the district options.
    pub fn set_state(&self, name: &str) {
        let name = name.trim();
        let next = canonical_state(name)
            .map(str::to_string)
            .or_else(|| (!name.is_empty()).then(|| name.to_string()));

        let mut state = self.core.lock();
        if state.selection.state() == next.as_deref() {
            return;
        }
        let was_flagged = state.selection.status() != VerificationStatus::Unverified;
        state.selection.set_state(next);
        state.district_options = district_options(state.selection.state());
        state.candidates.clear();
        state.note = LocationNote::Prompt;
        if was_flagged {
            self.core.emit(&state, None);
        }
    }

    /// Clears pincode and verification, keeps the state.
    pub fn set_district(&self, name: &str) {
        let name = name.trim();
        let next = (!name.is_empty()).then(|| name.to_string());

        let mut state = self.core.lock();
        if state.selection.district() == next.as_deref() {
            return;
        }
        let was_flagged = state.selection.status() != VerificationStatus::Unverified;
        state.selection.set_district(next);
        state.candidates.clear();
        state.note = LocationNote::Prompt;
        if was_flagged {
            self.core.emit(&state, None);
        }
    }

    /// Runs the resolver for the current (state, district) and stores the
    /// result unless the selection moved on meanwhile.
    #[instrument(skip(self), fields(session = %self.core.id, form = ?self.core.kind))]
    pub async fn load_candidates(&self) -> Vec<PostalCandidate> {
        let (state_name, district) = {
            let state = self.core.lock();
            (
                state.selection.state().map(String::from),
                state.selection.district().map(String::from),
            )
        };
        let Some(district) = district else {
            return Vec::new();
        };

        let candidates = self
            .engine
            .resolve_pincodes(state_name.as_deref().unwrap_or_default(), &district)
            .await;

        let mut state = self.core.lock();
        if state.selection.state() == state_name.as_deref()
            && state.selection.district() == Some(district.as_str())
        {
            state.candidates = candidates.clone();
        } else {
            debug!("selection changed while resolving, candidates dropped");
        }
        candidates
    }

    /// Records typed pincode text.
    ///
    /// Any edit away from the last verified pincode drops verification
    /// before this returns. Six digits start (or join) a verification; the
    /// returned ticket resolves after its answer has been applied. A pincode
    /// that already has an outstanding call joins it.
    ///
    /// # Errors
    ///
    /// `LocationError::Validation` for text with non-digits or more than six
    /// characters. The text is still recorded and verification still dropped.
    pub fn set_pincode(&self, text: &str) -> Result<PincodeEdit, LocationError> {
        let text = text.trim();
        let mut state = self.core.lock();

        let dropped = state.selection.edit_pincode(text.to_string());
        if state.selection.is_verified() {
            return Ok(PincodeEdit::Unchanged);
        }
        if dropped {
            state.note = LocationNote::Prompt;
            self.core.emit(&state, None);
        }

        if text.len() > 6 || text.chars().any(|c| !c.is_ascii_digit()) {
            return Err(LocationError::Validation(format!(
                "pincode must be 6 digits, got {:?}",
                text
            )));
        }
        if text.len() < 6 {
            return Ok(PincodeEdit::Incomplete);
        }
        let pincode = Pincode::parse(text)?;

        if let Some(district) = local_district_for_pincode(pincode.as_str()) {
            state.prefill(Some(LOCAL_OVERRIDE_STATE.to_string()), Some(district.to_string()));
            state.selection.mark_verified(pincode.as_str());
            state.note = LocationNote::Verified;
            self.core.emit(&state, None);
            return Ok(PincodeEdit::Verified(state.verified_location()));
        }

        let override_selected = state
            .selection
            .state()
            .is_some_and(|s| is_local_override_state(&normalize(s)));
        if override_selected {
            debug!(session = %self.core.id, pincode = %pincode, "no external verification for override state");
            state.selection.mark_rejected();
            state.note = LocationNote::PickFromList;
            self.core.emit(&state, Some(ReasonCode::NotFound));
            return Ok(PincodeEdit::Rejected(ReasonCode::NotFound));
        }

        let joined = state
            .in_flight
            .get(pincode.as_str())
            .map(|f| (f.call_id, f.ticket()));
        if let Some((call_id, ticket)) = joined {
            debug!(session = %self.core.id, pincode = %pincode, call_id, "joining in-flight verification");
            state.current_call = Some(call_id);
            state.selection.mark_pending();
            self.core.emit(&state, None);
            return Ok(PincodeEdit::Verifying(ticket));
        }

        state.next_call_id += 1;
        let call_id = state.next_call_id;
        let outcome = self.verification_future(call_id, pincode.clone());
        state.in_flight.insert(
            pincode.to_string(),
            InFlight {
                pincode: pincode.to_string(),
                call_id,
                outcome: outcome.clone(),
            },
        );
        state.current_call = Some(call_id);
        state.selection.mark_pending();
        self.core.emit(&state, None);
        drop(state);

        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(outcome.clone());
            }
            Err(_) => debug!(session = %self.core.id, pincode = %pincode, "no runtime, verification runs when awaited"),
        }
        Ok(PincodeEdit::Verifying(VerificationTicket {
            pincode: pincode.to_string(),
            outcome,
        }))
    }

    fn verification_future(&self, call_id: u64, pincode: Pincode) -> SharedOutcome {
        let engine = self.engine.clone();
        let core: Weak<SessionCore> = Arc::downgrade(&self.core);
        async move {
            let result = engine.verify_pincode(&pincode).await;
            match core.upgrade() {
                Some(core) => core.apply_remote(call_id, pincode.as_str(), result),
                None => VerificationOutcome::Discarded,
            }
        }
        .boxed()
        .shared()
    }

    /// Marks a resolver candidate as the verified pincode. Selecting the
    /// already verified candidate again changes nothing.
    ///
    /// # Errors
    ///
    /// `LocationError::Validation` when the candidate code is not 6 digits.
    pub fn select_candidate(&self, candidate: &PostalCandidate) -> Result<(), LocationError> {
        let pincode = Pincode::parse(&candidate.code)?;
        let mut state = self.core.lock();
        if state.selection.is_verified() && state.selection.pincode() == pincode.as_str() {
            return Ok(());
        }
        state.selection.mark_verified(pincode.as_str());
        state.note = LocationNote::Verified;
        self.core.emit(&state, None);
        Ok(())
    }

    /// Search-form gate. Waits for a running verification of the current
    /// pincode, or starts one, and reports whether the form may proceed.
    #[instrument(skip(self), fields(session = %self.core.id, form = ?self.core.kind))]
    pub async fn ensure_verified(&self) -> bool {
        let (pincode, running) = {
            let state = self.core.lock();
            if state.selection.is_verified() {
                return true;
            }
            let running = state
                .in_flight
                .get(state.selection.pincode())
                .map(InFlight::ticket);
            (state.selection.pincode().to_string(), running)
        };
        if let Some(ticket) = running {
            ticket.wait().await;
            return self.can_submit();
        }
        match self.set_pincode(&pincode) {
            Ok(PincodeEdit::Verifying(ticket)) => {
                ticket.wait().await;
                self.can_submit()
            }
            Ok(PincodeEdit::Verified(_)) | Ok(PincodeEdit::Unchanged) => self.can_submit(),
            Ok(PincodeEdit::Incomplete) | Ok(PincodeEdit::Rejected(_)) | Err(_) => false,
        }
    }

    /// Pre-fills the form from coordinates and verifies the reported
    /// pincode as if it had been picked from the list.
    ///
    /// # Errors
    ///
    /// Any [`ReverseGeocodeError`]; the selection is left untouched.
    #[instrument(skip(self), fields(session = %self.core.id, form = ?self.core.kind))]
    pub async fn resolve_from_coordinates(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<VerifiedLocation, ReverseGeocodeError> {
        let detected = self.engine.detect_location(lat, lon).await?;

        let mut state = self.core.lock();
        state.prefill(detected.state, detected.district);
        state.selection.mark_verified(&detected.pincode);
        state.note = LocationNote::DetectedAndVerified;
        self.core.emit(&state, None);
        info!(pincode = %detected.pincode, "Location detected");
        Ok(state.verified_location())
    }

    /// Asks `source` for the device position, then behaves like
    /// [`Self::resolve_from_coordinates`].
    pub async fn locate(&self, source: &dyn PositionSource) -> Result<VerifiedLocation, ReverseGeocodeError> {
        let position = source.current_position().await?;
        self.resolve_from_coordinates(position.lat, position.lon).await
    }
}
