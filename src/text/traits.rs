// Normalizer trait: swap-ready abstraction over base-form reduction.
//
// The set and vector logic never depends on a particular linguistic resource.
// The default backend looks words up in a lemma dictionary; a Snowball stemmer
// or the identity function can be plugged in without touching the scorers.

/// Reduces a single lowercase token to its base form.
pub trait Normalizer {
    /// Return the base form of `token`.
    fn base_form(&self, token: &str) -> String;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;
}
