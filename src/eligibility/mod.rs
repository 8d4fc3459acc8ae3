//! Rule-based eligibility scoring.
//!
//! Each dimension the profile fills in adds up to its fixed weight (see
//! [`crate::constants`]). The total is a relative signal out of
//! [`MAX_ELIGIBILITY_SCORE`](crate::constants::MAX_ELIGIBILITY_SCORE), not a percentage:
//! a sparse profile can never reach the maximum.
//!
//! Reasons are only produced for restricted dimensions that matched. An "open to all"
//! dimension still adds its weight but never explains itself.

pub mod scorer;
pub mod types;
pub mod warnings;


pub use scorer::score_eligibility;
pub use types::EligibilityScore;
pub use warnings::eligibility_warnings;
