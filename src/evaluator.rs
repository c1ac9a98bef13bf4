//! Password strength evaluator - entropy estimate over detected character classes.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::SECTIONS;
use crate::types::PasswordStrengthResult;

/// Delay before a keystroke-driven evaluation runs.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: Duration = Duration::from_millis(300);

/// Estimates the entropy of `password` and rates it.
///
/// The password is treated as a uniformly random string over the union of
/// the character classes it contains, so the estimate is
/// `length * log2(pool_size)` where `length` counts Unicode scalar values.
///
/// Total over all inputs: the empty string yields
/// [`PasswordStrengthResult::EMPTY`].
pub fn evaluate(password: &str) -> PasswordStrengthResult {
    let length = password.chars().count();
    if length == 0 {
        return PasswordStrengthResult::EMPTY;
    }

    let pool_size: u32 = SECTIONS
        .iter()
        .filter_map(|(_, section)| section(password))
        .sum();

    PasswordStrengthResult::from_entropy(entropy_bits(length, pool_size))
}

/// Evaluates a password held as a secret.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordStrengthResult {
    evaluate(password.expose_secret())
}

// Multiplying avoids pool^length, which overflows to infinity for long inputs.
fn entropy_bits(length: usize, pool_size: u32) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * f64::from(pool_size).log2()
}

/// Debounced evaluation that sends the result via channel.
///
/// Waits [`EVALUATION_DEBOUNCE`] first. If `token` is cancelled during the
/// wait (a newer keystroke superseded this one) nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordStrengthResult>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let result = evaluate_password_strength(password);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::types::PasswordStrength;

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("Tr0ub4dor&3xtra!".to_string().into());

        evaluate_password_strength_tx(&pwd, token, tx).await;

        let result = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(result.strength, PasswordStrength::Strong);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_with_cancellation() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("SomePassword123!".to_string().into());
        evaluate_password_strength_tx(&pwd, token, tx).await;

        // Sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_keystroke_cancels_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let child = token.clone();

        let pwd = SecretString::new("SomePassword123!".to_string().into());
        let handle = tokio::spawn(async move {
            evaluate_password_strength_tx(&pwd, child, tx).await;
        });

        // Let the task start waiting, then cancel before the debounce elapses
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(100)).await;
        token.cancel();
        handle.await.expect("evaluation task panicked");

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_closed_receiver_does_not_panic() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let pwd = SecretString::new("abc".to_string().into());
        evaluate_password_strength_tx(&pwd, CancellationToken::new(), tx).await;
    }
}
