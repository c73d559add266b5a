//! View-state machine behind the "New Transaction" action.
//!
//! The recorder opens an entry form, turns a submitted draft into a
//! `createTransaction` request, and flips to a receipt once the server
//! confirms. Failures leave the form open with the draft intact so the user
//! can retry; there is no automatic retry.

use std::fmt;

use tracing::{debug, info, warn};
use uuid::Uuid;

use frontdesk_domain::{CreateTransactionInput, RecordedTransaction, TransactionDraft};

use crate::amount::coerce_amount;
use crate::gateway::{GatewayError, TransactionGateway};
use crate::notifier::{Notifier, TracingNotifier, FAILURE_NOTICE, SUCCESS_NOTICE};
use crate::{CoreError, CoreResult};

/// Identifiers a submission is recorded against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitContext {
    pub booking_id: Option<String>,
    pub contact_id: Option<String>,
    pub acting_hotel_id: String,
}

impl SubmitContext {
    pub fn new(
        booking_id: Option<String>,
        contact_id: Option<String>,
        acting_hotel_id: impl Into<String>,
    ) -> Self {
        Self {
            booking_id,
            contact_id,
            acting_hotel_id: acting_hotel_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecorderViewState {
    Idle,
    /// The entry form is open. `prior` is the receipt that was showing when
    /// the form opened and is restored on cancel.
    EntryOpen {
        draft: Option<TransactionDraft>,
        prior: Option<RecordedTransaction>,
    },
    ReceiptShown {
        receipt: RecordedTransaction,
    },
}

impl RecorderViewState {
    pub fn phase(&self) -> RecorderPhase {
        match self {
            RecorderViewState::Idle => RecorderPhase::Idle,
            RecorderViewState::EntryOpen { .. } => RecorderPhase::EntryOpen,
            RecorderViewState::ReceiptShown { .. } => RecorderPhase::ReceiptShown,
        }
    }
}

/// Payload-free discriminant of [`RecorderViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderPhase {
    Idle,
    EntryOpen,
    ReceiptShown,
}

impl RecorderPhase {
    fn describe(self) -> &'static str {
        match self {
            RecorderPhase::Idle => "idle",
            RecorderPhase::EntryOpen => "the entry form is open",
            RecorderPhase::ReceiptShown => "a receipt is shown",
        }
    }
}

impl fmt::Display for RecorderPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecorderPhase::Idle => "Idle",
            RecorderPhase::EntryOpen => "EntryOpen",
            RecorderPhase::ReceiptShown => "ReceiptShown",
        };
        f.write_str(label)
    }
}

/// A request that left the recorder and awaits its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub id: Uuid,
    pub input: CreateTransactionInput,
}

pub struct TransactionRecorder<G, N = TracingNotifier> {
    gateway: G,
    notifier: N,
    state: RecorderViewState,
}

impl<G: TransactionGateway> TransactionRecorder<G, TracingNotifier> {
    pub fn new(gateway: G) -> Self {
        Self::with_notifier(gateway, TracingNotifier)
    }
}

impl<G, N> TransactionRecorder<G, N>
where
    G: TransactionGateway,
    N: Notifier,
{
    pub fn with_notifier(gateway: G, notifier: N) -> Self {
        Self {
            gateway,
            notifier,
            state: RecorderViewState::Idle,
        }
    }

    pub fn state(&self) -> &RecorderViewState {
        &self.state
    }

    pub fn phase(&self) -> RecorderPhase {
        self.state.phase()
    }

    /// Draft held by the open entry form, if any was submitted.
    pub fn draft(&self) -> Option<&TransactionDraft> {
        match &self.state {
            RecorderViewState::EntryOpen { draft, .. } => draft.as_ref(),
            _ => None,
        }
    }

    /// The last transaction the server confirmed, also while the form is open.
    pub fn last_recorded(&self) -> Option<&RecordedTransaction> {
        match &self.state {
            RecorderViewState::Idle => None,
            RecorderViewState::EntryOpen { prior, .. } => prior.as_ref(),
            RecorderViewState::ReceiptShown { receipt } => Some(receipt),
        }
    }

    /// Opens the entry form. Opening an already open form is a no-op.
    pub fn open_entry(&mut self) {
        let prior = match std::mem::replace(&mut self.state, RecorderViewState::Idle) {
            RecorderViewState::Idle => None,
            RecorderViewState::ReceiptShown { receipt } => Some(receipt),
            open @ RecorderViewState::EntryOpen { .. } => {
                self.state = open;
                debug!("entry form already open");
                return;
            }
        };
        self.state = RecorderViewState::EntryOpen { draft: None, prior };
        debug!(phase = %self.phase(), "entry form opened");
    }

    /// Closes the entry form, discarding the draft and restoring the prior view.
    pub fn cancel_entry(&mut self) -> CoreResult<()> {
        let prior = match &mut self.state {
            RecorderViewState::EntryOpen { prior, .. } => prior.take(),
            other => return Err(invalid("cancel entry", other.phase())),
        };
        self.state = match prior {
            Some(receipt) => RecorderViewState::ReceiptShown { receipt },
            None => RecorderViewState::Idle,
        };
        debug!(phase = %self.phase(), "entry form cancelled");
        Ok(())
    }

    /// First half of a submission: keeps the draft and builds the request.
    ///
    /// An amount that is not a number is reported through the notifier and
    /// never reaches the gateway.
    pub fn begin_submit(
        &mut self,
        draft: TransactionDraft,
        context: &SubmitContext,
    ) -> CoreResult<PendingSubmission> {
        match &mut self.state {
            RecorderViewState::EntryOpen { draft: slot, .. } => {
                *slot = Some(draft.clone());
            }
            other => return Err(invalid("submit", other.phase())),
        }

        let amount = match coerce_amount(&draft.amount) {
            Ok(amount) => amount,
            Err(err) => {
                warn!(amount = %draft.amount, "rejected non-numeric amount");
                self.notifier.failure(&err.to_string());
                return Err(err);
            }
        };

        let input = CreateTransactionInput {
            contact: context.contact_id.clone().unwrap_or_default(),
            booking: context.booking_id.clone().filter(|id| !id.is_empty()),
            hotel: context.acting_hotel_id.clone(),
            date: draft.date,
            category: draft.category,
            sub_category: draft.sub_category,
            method: draft.method,
            description: draft.description,
            amount,
        };
        let pending = PendingSubmission {
            id: Uuid::new_v4(),
            input,
        };
        debug!(submission = %pending.id, "transaction request prepared");
        Ok(pending)
    }

    /// Second half of a submission: applies the gateway's answer.
    ///
    /// A success replaces the retained receipt even if the form was closed
    /// while the request was in flight. A failure leaves the state untouched.
    pub fn complete_submit(
        &mut self,
        pending: PendingSubmission,
        outcome: Result<Option<RecordedTransaction>, GatewayError>,
    ) -> CoreResult<RecordedTransaction> {
        match outcome.and_then(|payload| payload.ok_or(GatewayError::EmptyPayload)) {
            Ok(recorded) => {
                info!(
                    submission = %pending.id,
                    transaction = %recorded.id,
                    amount = recorded.amount,
                    "transaction recorded"
                );
                self.notifier.success(SUCCESS_NOTICE);
                self.state = RecorderViewState::ReceiptShown {
                    receipt: recorded.clone(),
                };
                Ok(recorded)
            }
            Err(err) => {
                warn!(submission = %pending.id, error = %err, "transaction submission failed");
                self.notifier.failure(FAILURE_NOTICE);
                Err(CoreError::Submission(err))
            }
        }
    }

    /// Submits the draft and waits for the server in one step.
    pub async fn submit(
        &mut self,
        draft: TransactionDraft,
        context: &SubmitContext,
    ) -> CoreResult<RecordedTransaction> {
        let pending = self.begin_submit(draft, context)?;
        let outcome = self
            .gateway
            .create_transaction(pending.input.clone())
            .await;
        self.complete_submit(pending, outcome)
    }
}

fn invalid(action: &'static str, phase: RecorderPhase) -> CoreError {
    CoreError::InvalidTransition {
        action,
        state: phase.describe(),
    }
}
