use std::num::NonZeroU32;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

pub type Limiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Blocking wait for a free slot, polled at 25 ms. The providers call this
/// before every outbound request.
pub trait Wait {
    fn wait(&self);
}

impl Wait for Limiter {
    fn wait(&self) {
        while self.check().is_err() {
            thread::sleep(Duration::from_millis(25));
        }
    }
}

/// Stays under HERE's 5 req/s free-tier geocoding cap.
pub fn geocode_limiter() -> Limiter {
    let quota = Quota::per_second(NonZeroU32::new(4).unwrap());
    Arc::new(RateLimiter::direct(quota))
}

/// Stays under TomTom's 5 req/s free-tier routing cap.
pub fn routing_limiter() -> Limiter {
    let quota = Quota::per_second(NonZeroU32::new(4).unwrap());
    Arc::new(RateLimiter::direct(quota))
}
