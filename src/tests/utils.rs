use crate::config::DAFT_ORIGIN;
use crate::domain::{ListingRecord, PageOffset};
use crate::scraper::models::RawListingItem;
use crate::scraper::{Page, PageFetcher, ScraperError};
use astra::{Body, ConnectionInfo, Request, ResponseBuilder, Server};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::io::Read;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::ops::Range;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One upstream listing element, shaped like the gateway returns it.
pub fn sample_listing(id: u64) -> Value {
    json!({
        "listing": {
            "id": id,
            "title": format!("{id} Harbour Road, Howth, Co. Dublin"),
            "price": "€457,000",
            "floorArea": { "value": "107", "unit": "METRES_SQUARED" },
            "numBathrooms": "2 Bath",
            "numBedrooms": "3 Bed",
            "seoFriendlyPath": format!("/for-sale/house-{id}-harbour-road/{id}"),
            "saleType": ["For Sale by Private Treaty", "AMV"],
            "propertyType": "House",
            "propertySize": "107 m²",
            "category": "Buy",
            "seller": {
                "sellerId": 1000 + id,
                "name": format!("Agent {id}"),
                "phone": format!("01 555 {id:04}"),
                "alternativePhone": format!("087 555 {id:04}"),
                "branch": "Howth Branch",
                "sellerType": "BRANDED_AGENT"
            }
        }
    })
}

/// Response body holding one listing per id.
pub fn listings_body(ids: Range<u64>) -> String {
    let listings: Vec<Value> = ids.map(sample_listing).collect();
    json!({ "listings": listings, "paging": { "totalResults": 9000 } }).to_string()
}

pub fn sample_records(ids: Range<u64>) -> Vec<ListingRecord> {
    ids.map(|id| {
        let raw: RawListingItem = serde_json::from_value(sample_listing(id)).unwrap();
        ListingRecord::from_raw(raw, DAFT_ORIGIN).unwrap()
    })
    .collect()
}

// ---------------------------------------------------------------------------
// Scripted fetcher
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Scripted {
    /// `n` records whose ids start at the requested offset.
    Listings(usize),
    /// Records with exactly these ids.
    Ids(Range<u64>),
    Empty,
    Fail,
}

/// Answers by page index (`offset / 20`); anything past the script is empty.
/// The same offset always gets the same answer.
pub struct ScriptedFetcher {
    script: Vec<Scripted>,
    calls: Mutex<Vec<u32>>,
}

impl ScriptedFetcher {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Offsets requested so far, in order.
    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    async fn fetch(&self, offset: PageOffset) -> Result<Page, ScraperError> {
        self.calls.lock().unwrap().push(offset.get());

        let start = offset.get() as u64;
        match self.script.get((offset.get() / 20) as usize) {
            Some(Scripted::Listings(n)) => {
                Ok(Page::Listings(sample_records(start..start + *n as u64)))
            }
            Some(Scripted::Ids(ids)) => Ok(Page::Listings(sample_records(ids.clone()))),
            Some(Scripted::Fail) => Err(ScraperError::Status {
                status: 503,
                url: "scripted".into(),
            }),
            Some(Scripted::Empty) | None => Ok(Page::Empty),
        }
    }
}

// ---------------------------------------------------------------------------
// Mock upstream
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub body: Value,
    pub headers: Vec<(String, String)>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn offset(&self) -> Option<u32> {
        self.body["paging"]["from"].as_str()?.parse().ok()
    }
}

/// Local HTTP server standing in for the listings gateway. Runs on its own
/// thread for the rest of the test process.
pub struct MockUpstream {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockUpstream {
    /// `respond` maps the parsed request body to `(status, body)`.
    pub fn start<F>(respond: F) -> Self
    where
        F: Fn(&Value) -> (u16, String) + Send + Sync + 'static,
    {
        let addr: SocketAddr = ([127, 0, 0, 1], free_port()).into();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        std::thread::spawn(move || {
            let server = Server::bind(&addr);
            let _ = server.serve(move |mut req: Request, _info: ConnectionInfo| {
                let mut raw = Vec::new();
                let _ = req.body_mut().reader().read_to_end(&mut raw);
                let body: Value = serde_json::from_slice(&raw).unwrap_or(Value::Null);

                let headers = req
                    .headers()
                    .iter()
                    .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or("").to_string()))
                    .collect();

                let (status, payload) = respond(&body);
                seen.lock().unwrap().push(CapturedRequest { body, headers });

                ResponseBuilder::new()
                    .status(status)
                    .header("Content-Type", "application/json")
                    .body(Body::from(payload.into_bytes()))
                    .unwrap()
            });
        });

        wait_until_listening(addr);

        Self {
            endpoint: format!("http://{addr}/old/v1/listings"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn offsets(&self) -> Vec<u32> {
        self.requests().iter().filter_map(|r| r.offset()).collect()
    }
}

/// A port nothing is listening on (at the moment of the call).
pub fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .map(|a| a.port())
        .unwrap()
}

fn wait_until_listening(addr: SocketAddr) {
    for _ in 0..250 {
        if TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    panic!("mock upstream never started on {addr}");
}
