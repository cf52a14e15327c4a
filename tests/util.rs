use proptest::{
    prop_compose,
    strategy::{BoxedStrategy, Strategy},
};
use saltdigest::Salt;

/// Lengths accepted by the password generator.
pub fn arb_valid_length(max_multiple: usize) -> BoxedStrategy<usize> {
    (0..=max_multiple).prop_map(|multiple| multiple * 3).boxed()
}

/// Lengths rejected by the password generator.
pub fn arb_invalid_length(max_multiple: usize) -> BoxedStrategy<usize> {
    (0..=max_multiple, 1..=2_usize)
        .prop_map(|(multiple, remainder)| multiple * 3 + remainder)
        .boxed()
}

prop_compose! {
    /// Salts that never contain the `:` delimiter.
    pub fn arb_salt()(salt in "[^:]{0,32}") -> Salt {
        Salt::from(salt)
    }
}

/// Algorithm names outside the supported set.
pub fn arb_unsupported_algorithm_name() -> BoxedStrategy<String> {
    "\\PC{0,12}"
        .prop_filter("must not be a supported name", |name| {
            !["SHA-1", "SHA-256", "SHA-384", "SHA-512"].contains(&name.as_str())
        })
        .boxed()
}
