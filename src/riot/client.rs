use std::thread;
use std::time::Duration;

use json::JsonValue;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use reqwest::Url;
use tracing::info;

use super::{
    keep_trying,
    parse_match,
    parse_match_ids,
    Account,
    MatchQuery,
    QueryError,
    QueryResult,
    Region,
    Summoner,
};
use crate::match_record::MatchRecord;
use crate::riot_id::RiotId;

const API_HOST_SUFFIX: &str = "api.riotgames.com";
const API_KEY_HEADER: &str = "X-Riot-Token";
const TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_RETRIES: u8 = 2;
/// The API is rate limited per key. Spacing requests out a little keeps short
/// bursts, like downloading a handful of matches, below the limit.
const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);
const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

/// Build the url for `path_segments` on the given host. The segments are
/// percent encoded, Riot ids may contain spaces and any unicode.
pub fn endpoint(host: &str, path_segments: &[&str]) -> QueryResult<Url>
{
    let mut url = Url::parse(&format!("https://{}.{}", host, API_HOST_SUFFIX))
        .map_err(|e| QueryError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| QueryError::InvalidUrl(format!("{} cannot have a path", host)))?
        .extend(path_segments);

    Ok(url)
}

/// Client for one region of the Riot API, authenticated with an API key.
pub struct RiotClient
{
    http:          Client,
    api_key:       String,
    region:        Region,
    retries:       u8,
    request_delay: Duration,
    backoff:       Duration,
}

impl RiotClient
{
    pub fn new(api_key: String, region: Region) -> QueryResult<Self>
    {
        let http = Client::builder().timeout(TIMEOUT).build()?;

        Ok(Self {
            http,
            api_key,
            region,
            retries: DEFAULT_RETRIES,
            request_delay: DEFAULT_REQUEST_DELAY,
            backoff: DEFAULT_BACKOFF,
        })
    }

    /// How often a failed request is repeated before the error is returned.
    pub fn with_retries(mut self, retries: u8) -> Self
    {
        self.retries = retries;
        self
    }

    pub fn with_request_delay(mut self, request_delay: Duration) -> Self
    {
        self.request_delay = request_delay;
        self
    }

    pub fn region(&self) -> Region { self.region }

    fn platform_endpoint(&self, path_segments: &[&str]) -> QueryResult<Url>
    {
        endpoint(self.region.platform(), path_segments)
    }

    fn regional_endpoint(&self, path_segments: &[&str]) -> QueryResult<Url>
    {
        endpoint(self.region.routing().host(), path_segments)
    }

    fn request(&self, url: Url) -> RequestBuilder
    {
        self.http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json")
    }

    fn get_json_once<F>(&self, url: &Url, prepare: &F) -> QueryResult<JsonValue>
    where
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        thread::sleep(self.request_delay);
        info!(url = %url, "querying riot api");

        let response = prepare(self.request(url.clone())).send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(QueryError::Unsuccessful { status, body });
        }

        Ok(json::parse(&body)?)
    }

    fn get_json_with<F>(&self, url: Url, prepare: F) -> QueryResult<JsonValue>
    where
        F: Fn(RequestBuilder) -> RequestBuilder,
    {
        keep_trying(|| self.get_json_once(&url, &prepare), self.retries, self.backoff)
    }

    fn get_json(&self, url: Url) -> QueryResult<JsonValue>
    {
        self.get_json_with(url, |request| request)
    }

    /// Look up the account, and with it the PUUID, behind a Riot id.
    pub fn account_by_riot_id(&self, riot_id: &RiotId) -> QueryResult<Account>
    {
        let url = self.regional_endpoint(&[
            "riot",
            "account",
            "v1",
            "accounts",
            "by-riot-id",
            riot_id.game_name(),
            riot_id.tag_line(),
        ])?;

        Account::from_json(&self.get_json(url)?)
    }

    pub fn summoner_by_puuid(&self, puuid: &str) -> QueryResult<Summoner>
    {
        let url =
            self.platform_endpoint(&["lol", "summoner", "v4", "summoners", "by-puuid", puuid])?;

        Summoner::from_json(&self.get_json(url)?)
    }

    /// Ids of the most recent matches of the player, newest first.
    pub fn match_ids(&self, puuid: &str, query: &MatchQuery) -> QueryResult<Vec<String>>
    {
        let url =
            self.regional_endpoint(&["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"])?;
        let json = self.get_json_with(url, |request| query.add_params_to_request(request))?;

        parse_match_ids(&json)
    }

    pub fn match_detail(&self, match_id: &str) -> QueryResult<MatchRecord>
    {
        let url = self.regional_endpoint(&["lol", "match", "v5", "matches", match_id])?;

        parse_match(&self.get_json(url)?)
    }
}
