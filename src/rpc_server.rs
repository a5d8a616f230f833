//! Passforge RPC Server: JSON requests over stdin/stdout for UI front ends.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"password.generate", "params":{"length":20}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr so stdout carries only protocol lines.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use passforge::app::App;
use passforge::rpc_handler::handle_line;

use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Fixed-window rate limiter across all methods.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn emit(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "passforge=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(io::stderr))
        .init();

    let app = match App::new(None) {
        Ok(app) => Mutex::new(app),
        Err(e) => {
            tracing::error!("failed to start: {}", e);
            std::process::exit(1);
        }
    };

    let mut stdout = io::stdout();
    if emit(&mut stdout, &json!({"event":"ready","version":env!("CARGO_PKG_VERSION")})).is_err() {
        return;
    }

    let mut rate_limiter = RateLimiter::new(200);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        if line.trim().is_empty() { continue; }

        let response = if rate_limiter.check() {
            handle_line(&app, &line)
        } else {
            let id = serde_json::from_str::<Value>(&line)
                .ok()
                .and_then(|req| req.get("id").cloned())
                .unwrap_or(Value::Null);
            json!({"id": id, "error": "rate limit exceeded"})
        };

        if emit(&mut stdout, &response).is_err() {
            break;
        }
    }
}
