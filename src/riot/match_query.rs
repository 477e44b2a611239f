use std::cmp;

use reqwest::blocking::RequestBuilder;

/// The match history endpoint returns at most this many ids per request.
pub const MAX_COUNT: u8 = 100;

/// Filters for the match history of a player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchQuery
{
    pub start: Option<u32>,
    pub count: Option<u8>,
    pub queue: Option<u16>,
}

impl MatchQuery
{
    pub fn count(count: u8) -> Self
    {
        Self {
            count: Some(cmp::min(count, MAX_COUNT)),
            ..Default::default()
        }
    }

    pub fn queue(queue: u16) -> Self
    {
        Self {
            queue: Some(queue),
            ..Default::default()
        }
    }

    pub fn add_start(mut self, start: u32) -> Self
    {
        self.start.replace(start);
        self
    }

    pub fn add_count(mut self, count: u8) -> Self
    {
        self.count.replace(cmp::min(count, MAX_COUNT));
        self
    }

    pub fn add_queue(mut self, queue: u16) -> Self
    {
        self.queue.replace(queue);
        self
    }

    /// The query string parameters for the set filters.
    pub fn params(&self) -> Vec<(&'static str, String)>
    {
        let mut params = Vec::new();
        if let Some(start) = self.start {
            params.push(("start", start.to_string()));
        }
        if let Some(count) = self.count {
            params.push(("count", count.to_string()));
        }
        if let Some(queue) = self.queue {
            params.push(("queue", queue.to_string()));
        }

        params
    }

    pub fn add_params_to_request(&self, request_builder: RequestBuilder) -> RequestBuilder
    {
        request_builder.query(&self.params())
    }
}
