use colored::*;
use governor::{Quota, RateLimiter};
use hdrhistogram::Histogram;
use reqwest::{Client, StatusCode};
use serde_json::json;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const DURATION_SECS: u64 = 20;
const BASE_URL: &str = "http://localhost:3000";

struct Target {
    name: &'static str,
    method: &'static str,
    url: String,
    body: Option<serde_json::Value>,
    /// Send a fresh X-Forwarded-For per request so the per-client limiter
    /// does not turn the run into a 429 benchmark.
    spoof_client: bool,
}

#[tokio::main]
async fn main() {
    println!("{}", "🚀 Starting Benchmark Suite".bold().green());
    println!("Target URL: {}", BASE_URL);

    let client = match Client::builder()
        .pool_max_idle_per_host(1000)
        .timeout(Duration::from_secs(10))
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {}", "❌ Failed to build HTTP client:".red().bold(), e);
            return;
        }
    };

    if client.get(format!("{}/health", BASE_URL)).send().await.is_err() {
        eprintln!("{}", "❌ Server is NOT reachable at localhost:3000. Please start it first.".red().bold());
        return;
    }

    let targets = vec![
        Target {
            name: "Health Check",
            method: "GET",
            url: format!("{}/health", BASE_URL),
            body: None,
            spoof_client: false,
        },
        Target {
            name: "Schedule (Public Read)",
            method: "GET",
            url: format!("{}/api/v1/schedule", BASE_URL),
            body: None,
            spoof_client: false,
        },
        Target {
            name: "Approved Guestbook (Public Read)",
            method: "GET",
            url: format!("{}/api/v1/guestbook", BASE_URL),
            body: None,
            spoof_client: false,
        },
        Target {
            name: "RSVP Submission (Write + Limiter)",
            method: "POST",
            url: format!("{}/api/v1/rsvp", BASE_URL),
            body: Some(json!({
                "name": "Bench Guest",
                "email": "bench@example.com",
                "attending": "yes",
                "mealChoice": "vegetarian",
                "dietaryRestrictions": "<b>none</b>"
            })),
            spoof_client: true,
        },
    ];

    let rps_stages = [10, 50, 200, 1000];

    for target in &targets {
        println!("\n{} {}", target.method.bold(), target.url.cyan());
        println!("  {}", target.name.dimmed());
        println!(
            "  {:>6}  {:>9}  {:>9}  {:>9}  {:>7}  {:>7}  {:>7}",
            "rps", "p50 ms", "p95 ms", "p99 ms", "ok", "429", "failed"
        );

        for &rps in &rps_stages {
            if let Some(stage) = run_stage(&client, target, rps).await {
                stage.print(rps);
            }
        }
    }
}

fn spoofed_ip(n: u32) -> String {
    format!("10.{}.{}.{}", (n >> 16) & 0xff, (n >> 8) & 0xff, n & 0xff)
}

enum Outcome {
    Accepted,
    Throttled,
    Failed,
}

impl Outcome {
    fn from_status(status: StatusCode) -> Self {
        if status.is_success() {
            Outcome::Accepted
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            Outcome::Throttled
        } else {
            Outcome::Failed
        }
    }
}

/// Latency and outcome counts for one paced stage against one target.
struct StageReport {
    latencies: Histogram<u64>,
    accepted: u64,
    throttled: u64,
    failed: u64,
}

impl StageReport {
    fn record(&mut self, latency: Duration, outcome: Outcome) {
        let _ = self.latencies.record(latency.as_micros() as u64);
        match outcome {
            Outcome::Accepted => self.accepted += 1,
            Outcome::Throttled => self.throttled += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    fn print(&self, rps: u32) {
        let ms = |q: f64| self.latencies.value_at_quantile(q) as f64 / 1000.0;
        // Throttling on a spoofed run means the limiter is keyed on something
        // other than the forwarded address.
        let throttled = if self.throttled > 0 {
            self.throttled.to_string().yellow()
        } else {
            self.throttled.to_string().normal()
        };
        let failed = if self.failed > 0 {
            self.failed.to_string().red().bold()
        } else {
            self.failed.to_string().green()
        };
        println!(
            "  {:>6}  {:>9.2}  {:>9.2}  {:>9.2}  {:>7}  {:>7}  {:>7}",
            rps, ms(0.50), ms(0.95), ms(0.99), self.accepted, throttled, failed
        );
    }
}

async fn run_stage(client: &Client, target: &Target, rps: u32) -> Option<StageReport> {
    let pacer = RateLimiter::direct(Quota::per_second(NonZeroU32::new(rps)?));
    let next_client = Arc::new(AtomicU32::new(0));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let deadline = Instant::now() + Duration::from_secs(DURATION_SECS);

    while Instant::now() < deadline {
        if pacer.check().is_err() {
            tokio::task::yield_now().await;
            continue;
        }

        let mut req = match target.body.as_ref() {
            Some(body) if target.method == "POST" => client.post(&target.url).json(body),
            _ => client.get(&target.url),
        };
        if target.spoof_client {
            req = req.header("X-Forwarded-For", spoofed_ip(next_client.fetch_add(1, Ordering::Relaxed)));
        }

        let tx = tx.clone();
        tokio::spawn(async move {
            let started = Instant::now();
            let outcome = match req.send().await {
                Ok(res) => Outcome::from_status(res.status()),
                Err(_) => Outcome::Failed,
            };
            let _ = tx.send((started.elapsed(), outcome));
        });
    }
    drop(tx);

    let mut report = StageReport {
        latencies: Histogram::<u64>::new(3).ok()?,
        accepted: 0,
        throttled: 0,
        failed: 0,
    };
    while let Some((latency, outcome)) = rx.recv().await {
        report.record(latency, outcome);
    }

    tokio::time::sleep(Duration::from_millis(500)).await;
    Some(report)
}
