//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use proptest::prelude::*;

fn arb_valid_spec() -> impl Strategy<Value = RunSpec> {
    (
        1e-6f64..1.0,                       // learning_rate
        1i64..500,                          // epochs
        1usize..256,                        // batch_size
        proptest::option::of(0.1f64..10.0), // global_clipnorm
        0.0f64..0.5,                        // label_smoothing
    )
        .prop_flat_map(|(lr, epochs, batch_size, clip, smoothing)| {
            (Just(lr), Just(epochs), 0..epochs, Just(batch_size), Just(clip), Just(smoothing))
        })
        .prop_map(|(learning_rate, epochs, warmup_steps, batch_size, global_clipnorm, label_smoothing)| {
            RunSpec {
                learning_rate,
                epochs,
                warmup_steps,
                batch_size,
                global_clipnorm,
                label_smoothing,
                ..Default::default()
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_config(&spec).is_ok());
    }

    #[test]
    fn prop_warmup_at_or_past_epochs_fails(spec in arb_valid_spec(), extra in 0i64..100) {
        let spec = RunSpec { warmup_steps: spec.epochs + extra, ..spec };
        prop_assert!(matches!(validate_config(&spec), Err(ValidationError::Schedule(_))));
    }

    #[test]
    fn prop_non_positive_epochs_fail(spec in arb_valid_spec(), epochs in -100i64..=0) {
        let spec = RunSpec { epochs, warmup_steps: 0, ..spec };
        prop_assert_eq!(validate_config(&spec), Err(ValidationError::InvalidEpochs(epochs)));
    }
}
