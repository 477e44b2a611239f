//! Blocking access to the parts of the Riot API needed for reports.

pub mod account;
pub mod client;
pub mod match_detail;
pub mod match_query;
pub mod query_error;
pub mod region;

use std::thread;
use std::time::Duration;

pub use account::*;
pub use client::*;
pub use match_detail::*;
pub use match_query::*;
pub use query_error::*;
pub use region::*;
use tracing::warn;

/// Try an action that queries the API. If it fails with an error that may go
/// away on its own, it is tried again, up to `num_retries` more times, with
/// `backoff` in between tries.
pub(crate) fn keep_trying<A, R>(mut action: A, num_retries: u8, backoff: Duration) -> QueryResult<R>
where
    A: FnMut() -> QueryResult<R>,
{
    let mut num_tries = 0;
    loop {
        let res = action();
        num_tries += 1;

        match res {
            Err(e) if e.is_retryable() && num_tries <= num_retries => {
                warn!(error = %e, try_number = num_tries, "request failed, retrying");
                thread::sleep(backoff);
            },
            res => return res,
        }
    }
}
