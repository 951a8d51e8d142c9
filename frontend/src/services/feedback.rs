use shared::{Feedback, Outcome};
use yew::{Callback, UseStateHandle};

/// Show `feedback`: alerts block, everything else lands in `region`
pub fn present(feedback: Feedback, region: &UseStateHandle<Option<String>>) {
    match feedback {
        Feedback::Alert(message) => gloo::dialogs::alert(&message),
        Feedback::Error(text) | Feedback::Status(text) | Feedback::Notice { text, .. } => {
            region.set(Some(text))
        }
    }
}

/// Apply a finished call: show its feedback, then reload the owning list
/// when the call succeeded.
pub fn apply(outcome: Outcome, region: &UseStateHandle<Option<String>>, refresh: &Callback<()>) {
    if let Some(feedback) = outcome.feedback {
        present(feedback, region);
    }
    if outcome.refresh {
        refresh.emit(());
    }
}

/// For views without a status region: any message becomes an alert
pub fn alert(outcome: Outcome) {
    if let Some(feedback) = outcome.feedback {
        let message = match feedback {
            Feedback::Alert(message)
            | Feedback::Error(message)
            | Feedback::Status(message)
            | Feedback::Notice { text: message, .. } => message,
        };
        gloo::dialogs::alert(&message);
    }
}
