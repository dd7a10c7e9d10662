use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::config::RESOURCE_SERVER_CONFIG;

/// paces unbounded write sequences (repair passes, notification fan-out) with
/// a fixed window: once `max_requests` acquires land inside the window, the
/// next acquire sleeps until the window rolls over.
///
/// This lives in rocket's managed state rather than as a global so tests can
/// build their own with a tiny window.
pub struct RequestLimiter {
    max_requests: u32,
    window: Duration,
    state: Mutex<LimiterWindow>,
}

struct LimiterWindow {
    started: Instant,
    count: u32,
}

impl RequestLimiter {
    pub fn new(max_requests: u32, window_millis: u64) -> Self {
        RequestLimiter {
            max_requests,
            window: Duration::from_millis(window_millis),
            state: Mutex::new(LimiterWindow {
                started: Instant::now(),
                count: 0,
            }),
        }
    }

    pub fn from_config() -> Self {
        let config = RESOURCE_SERVER_CONFIG.clone();
        Self::new(
            config.rate_limit.requests_per_window,
            config.rate_limit.window_millis as u64,
        )
    }

    /// counts one request against the window, sleeping first if the window is
    /// already full. Holding the lock across the sleep is intentional: every
    /// other writer queues up behind it instead of piling onto the database
    pub fn acquire(&self) {
        let mut window = match self.state.lock() {
            Ok(lock) => lock,
            Err(e) => {
                log::warn!("The request limiter mutex was poisoned! Resetting...");
                self.state.clear_poison();
                e.into_inner()
            }
        };
        let elapsed = window.started.elapsed();
        if elapsed >= self.window {
            window.started = Instant::now();
            window.count = 0;
        } else if window.count >= self.max_requests {
            std::thread::sleep(self.window - elapsed);
            window.started = Instant::now();
            window.count = 0;
        }
        window.count += 1;
    }
}

/// wires log output to stdout and the server log file
pub fn set_up_logging() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(std::time::SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(fern::log_file("resource_server.log")?)
        .apply()?;
    Ok(())
}

#[cfg(test)]
mod request_limiter_tests {
    use std::time::Instant;

    use super::RequestLimiter;

    #[test]
    fn acquire_within_limit_does_not_block() {
        let limiter = RequestLimiter::new(5, 10_000);
        let start = Instant::now();
        for _ in 0..5 {
            limiter.acquire();
        }
        assert!(start.elapsed().as_millis() < 1_000);
    }

    #[test]
    fn acquire_past_limit_waits_for_the_window() {
        let limiter = RequestLimiter::new(2, 50);
        let start = Instant::now();
        limiter.acquire();
        limiter.acquire();
        // the window is full; this one has to wait for it to roll over
        limiter.acquire();
        assert!(start.elapsed().as_millis() >= 50);
    }
}
