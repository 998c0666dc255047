pub mod events;
pub mod messages;
pub mod password;
pub mod rate_limit;
pub mod session;
pub mod token;
pub mod validate;

use rate_limit::{DEFAULT_WINDOW_MS, RateLimiter};

/// One independent limiter per auth flow. Instances share nothing: exhausting
/// sign-in attempts for an email has no effect on its reset attempts.
#[derive(Clone)]
pub struct AuthLimiters {
    pub sign_in: RateLimiter,
    pub sign_up: RateLimiter,
    pub reset: RateLimiter,
}

impl Default for AuthLimiters {
    fn default() -> Self {
        Self {
            sign_in: RateLimiter::default(),
            sign_up: RateLimiter::default(),
            // Tighter limit for reset requests.
            reset: RateLimiter::new(3, DEFAULT_WINDOW_MS),
        }
    }
}
