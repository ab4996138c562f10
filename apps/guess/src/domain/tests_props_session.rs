//! Property tests for the session controller (pure domain, no I/O).

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::rules::{MAX, MAX_ATTEMPTS, MIN};
use crate::domain::secret::{RngSecrets, ScriptedSecrets, SeededSecrets};
use crate::domain::session::GameSession;
use crate::domain::test_prelude;
use crate::domain::{FeedbackEvent, Phase};

/// Raw input paired with whether it is a valid guess.
fn tagged_input() -> impl Strategy<Value = (String, bool)> {
    prop_oneof![
        (MIN..=MAX).prop_map(|n| (n.to_string(), true)),
        (MAX + 1..=10_000i64).prop_map(|n| (n.to_string(), false)),
        (-10_000i64..MIN).prop_map(|n| (n.to_string(), false)),
        "[a-z]{1,6}".prop_map(|s| (s, false)),
        "[ \t]{0,4}".prop_map(|s| (s, false)),
    ]
}

/// `MAX_ATTEMPTS` in-range guesses that all miss `secret`.
fn missing_guesses(secret: i64) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(MIN..MAX, MAX_ATTEMPTS as usize).prop_map(move |gs| {
        gs.into_iter()
            .map(|g| if g >= secret { g + 1 } else { g })
            .collect::<Vec<i64>>()
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: every secret drawn at creation or reset lies in [MIN, MAX].
    #[test]
    fn prop_secrets_always_in_range(seed in any::<u64>(), resets in 1usize..50) {
        let mut session = GameSession::new(RngSecrets::new(StdRng::seed_from_u64(seed)));
        prop_assert!((MIN..=MAX).contains(&session.secret()));
        for _ in 0..resets {
            session.reset();
            prop_assert!((MIN..=MAX).contains(&session.secret()));
        }

        let mut seeded = GameSession::new(SeededSecrets::new(seed));
        for _ in 0..resets {
            seeded.reset();
            prop_assert!((MIN..=MAX).contains(&seeded.secret()));
        }
    }

    /// Property: blank input is idempotent no matter how often it is sent.
    #[test]
    fn prop_blank_input_never_changes_state(
        secret in MIN..=MAX,
        blank in "[ \t\n]{0,8}",
        repeats in 1usize..20,
    ) {
        let mut session = GameSession::new(ScriptedSecrets::constant(secret));
        for _ in 0..repeats {
            let event = session.submit_guess(&blank);
            prop_assert_eq!(event, Some(FeedbackEvent::empty_input()));
            prop_assert_eq!(session.attempts(), 0);
            prop_assert!(!session.is_over());
        }
    }

    /// Property: attempts never decrease and grow by one exactly on valid
    /// guesses made while the round is in progress.
    #[test]
    fn prop_attempts_monotonic(
        secret in MIN..=MAX,
        inputs in prop::collection::vec(tagged_input(), 0..40),
    ) {
        let mut session = GameSession::new(ScriptedSecrets::constant(secret));
        for (raw, valid) in inputs {
            let before = session.attempts();
            let was_over = session.is_over();
            let event = session.submit_guess(&raw);

            if was_over {
                prop_assert!(event.is_none());
                prop_assert_eq!(session.attempts(), before);
            } else if valid {
                prop_assert_eq!(session.attempts(), before + 1);
            } else {
                prop_assert_eq!(session.attempts(), before);
            }
            prop_assert!(session.attempts() <= MAX_ATTEMPTS);
            prop_assert_eq!(
                session.is_over(),
                session.attempts() == MAX_ATTEMPTS || session.status().message.starts_with("You got it")
            );
        }
    }

    /// Property: MAX_ATTEMPTS misses end the round and reveal the stored secret.
    #[test]
    fn prop_misses_terminate_with_secret_revealed(
        (secret, guesses) in (MIN..=MAX).prop_flat_map(|s| (Just(s), missing_guesses(s))),
    ) {
        let mut session = GameSession::new(ScriptedSecrets::constant(secret));
        let mut last = None;
        for g in guesses {
            prop_assert!(!session.is_over());
            last = session.submit_guess(&g.to_string());
        }
        prop_assert_eq!(session.phase(), Phase::Over);
        prop_assert_eq!(last, Some(FeedbackEvent::out_of_tries(session.secret())));
        prop_assert_eq!(session.secret(), secret);
    }

    /// Property: reset after a finished round yields a clean, in-range round.
    #[test]
    fn prop_reset_clears_finished_round(seed in any::<u64>(), win in any::<bool>()) {
        let mut session = GameSession::new(SeededSecrets::new(seed));
        if win {
            let secret = session.secret();
            session.submit_guess(&secret.to_string());
        } else {
            let miss = if session.secret() == MIN { MAX } else { MIN };
            for _ in 0..MAX_ATTEMPTS {
                session.submit_guess(&miss.to_string());
            }
        }
        prop_assert!(session.is_over());

        session.reset();
        prop_assert_eq!(session.attempts(), 0);
        prop_assert!(!session.is_over());
        prop_assert!((MIN..=MAX).contains(&session.secret()));
    }
}
