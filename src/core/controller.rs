use crate::domain::model::{
    CalculationError, CalculationResult, Key, Operand, Outcome, RequestState, Snapshot,
};
use crate::domain::ports::MultiplyApi;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::validate_operands;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct FormState {
    first: String,
    second: String,
    request_state: RequestState,
    outcome: Outcome,
    // Bumped by every calculate() and reset(); responses from older generations are dropped.
    generation: u64,
}

/// Owns the calculator form and drives one `MultiplyApi`.
///
/// All methods take `&self`, so overlapping calculations are possible. The
/// most recently issued attempt wins; a response that resolves after a newer
/// attempt (or a reset) has started is discarded.
pub struct RequestController<A: MultiplyApi> {
    api: A,
    state: Mutex<FormState>,
}

impl<A: MultiplyApi> RequestController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(FormState::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Edits one field. Inputs are disabled while a request is in flight, so
    /// the edit is ignored (and `false` returned) in `RequestState::Loading`.
    pub fn set_operand(&self, operand: Operand, value: impl Into<String>) -> bool {
        let mut state = self.lock();
        if state.request_state == RequestState::Loading {
            tracing::debug!("Ignoring edit of {:?} while loading", operand);
            return false;
        }
        match operand {
            Operand::First => state.first = value.into(),
            Operand::Second => state.second = value.into(),
        }
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        let state = self.lock();
        Snapshot {
            first: state.first.clone(),
            second: state.second.clone(),
            request_state: state.request_state,
            outcome: state.outcome.clone(),
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.lock().outcome.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().request_state == RequestState::Loading
    }

    /// Runs one attempt. The returned value is this attempt's own outcome,
    /// even when a newer attempt has since taken over the form.
    pub async fn calculate(&self) -> Result<CalculationResult> {
        let (generation, num1, num2) = {
            let mut state = self.lock();
            state.generation += 1;
            state.outcome = Outcome::Idle;

            match validate_operands(&state.first, &state.second) {
                Ok((num1, num2)) => {
                    state.request_state = RequestState::Loading;
                    (state.generation, num1, num2)
                }
                Err(e) => {
                    let err = ClientError::from(e);
                    tracing::warn!("Input rejected: {}", err);
                    state.request_state = RequestState::Idle;
                    state.outcome =
                        Outcome::Failure(CalculationError(err.user_friendly_message()));
                    return Err(err);
                }
            }
        };

        tracing::debug!("Calculating {} × {} (attempt {})", num1, num2, generation);
        let response = self.api.multiply(num1, num2).await;

        let mut state = self.lock();
        if state.generation != generation {
            tracing::debug!(
                "Discarding response for attempt {}; attempt {} is current",
                generation,
                state.generation
            );
            return response;
        }

        state.request_state = RequestState::Idle;
        state.outcome = match &response {
            Ok(result) => Outcome::Success(result.clone()),
            Err(e) => {
                tracing::error!("Calculation error: {} (category: {:?})", e, e.category());
                Outcome::Failure(CalculationError(e.user_friendly_message()))
            }
        };
        response
    }

    pub fn reset(&self) {
        let mut state = self.lock();
        state.generation += 1;
        state.first.clear();
        state.second.clear();
        state.request_state = RequestState::Idle;
        state.outcome = Outcome::Idle;
    }

    /// Enter triggers a calculation; every other key is ignored.
    pub async fn handle_key_press(&self, key: Key) -> Option<Result<CalculationResult>> {
        if key.is_confirm() {
            Some(self.calculate().await)
        } else {
            None
        }
    }
}
