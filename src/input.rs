// Input boundary — raw form values in, validated engine input out.
//
// Only followers and average likes are required. Everything else gets an
// estimate so the engine always sees five concrete numbers.

use thiserror::Error;

use crate::scoring::AnalysisInput;

/// Minimum estimated post count when none is supplied.
const MIN_ESTIMATED_POSTS: f64 = 50.0;
/// Estimated posts per follower when none is supplied.
const POSTS_PER_FOLLOWER_ESTIMATE: f64 = 0.005;
/// Estimated comments as a share of likes when none is supplied.
const COMMENT_SHARE_ESTIMATE: f64 = 0.05;

/// Validation failures, each phrased for the person filling in the form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Please enter total followers")]
    MissingFollowers,
    #[error("Please enter average likes per post")]
    MissingAverageLikes,
    #[error("Likes cannot be negative")]
    NegativeLikes,
    #[error("{field} cannot be negative")]
    NegativeValue { field: &'static str },
}

/// Values as collected, before validation or defaulting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInput {
    pub followers: Option<f64>,
    pub avg_likes: Option<f64>,
    pub following: Option<f64>,
    pub posts: Option<f64>,
    pub avg_comments: Option<f64>,
}

impl RawInput {
    /// Validate the required fields and fill in estimates for the rest.
    ///
    /// An optional field that is missing, zero, or not a number is treated
    /// as "not filled in" and replaced by its estimate.
    pub fn validate(&self) -> Result<AnalysisInput, InputError> {
        let followers = match finite(self.followers) {
            Some(f) if f > 0.0 => f,
            _ => return Err(InputError::MissingFollowers),
        };

        let avg_likes = finite(self.avg_likes).ok_or(InputError::MissingAverageLikes)?;
        if avg_likes < 0.0 {
            return Err(InputError::NegativeLikes);
        }

        for (field, value) in [
            ("Following", self.following),
            ("Posts", self.posts),
            ("Average comments", self.avg_comments),
        ] {
            if finite(value).is_some_and(|v| v < 0.0) {
                return Err(InputError::NegativeValue { field });
            }
        }

        Ok(AnalysisInput {
            followers,
            following: filled(self.following).unwrap_or(0.0),
            posts: filled(self.posts).unwrap_or_else(|| estimate_posts(followers)),
            avg_likes,
            avg_comments: filled(self.avg_comments)
                .unwrap_or_else(|| estimate_comments(avg_likes)),
        })
    }
}

/// Post count estimate: 0.5% of followers, at least 50.
pub fn estimate_posts(followers: f64) -> f64 {
    MIN_ESTIMATED_POSTS.max(round_half_up(followers * POSTS_PER_FOLLOWER_ESTIMATE))
}

/// Comment estimate: 5% of likes.
pub fn estimate_comments(avg_likes: f64) -> f64 {
    round_half_up(avg_likes * COMMENT_SHARE_ESTIMATE)
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn filled(value: Option<f64>) -> Option<f64> {
    finite(value).filter(|v| *v != 0.0)
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
