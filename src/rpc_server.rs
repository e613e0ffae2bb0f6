//! TabDesk RPC Server — newline-delimited JSON over stdin/stdout for the dashboard front-end.
//!
//! Request:  {"id":1, "method":"folder.create", "params":{"name":"Work"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Instant;

use serde_json::{json, Value};

use tabdesk::app::App;
use tabdesk::rpc_handler::handle_method;
use tabdesk::services::logging;
use tabdesk::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

/// Maximum requests served per second.
const MAX_REQUESTS_PER_SECOND: u32 = 200;

/// Fixed one-second window request limiter.
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

fn respond(out: &mut impl Write, response: &Value) -> io::Result<()> {
    writeln!(out, "{}", response)?;
    out.flush()
}

fn main() -> ExitCode {
    let mut settings_engine = SettingsEngine::new(None);
    let loaded = settings_engine.load();
    let settings = settings_engine.get_settings().clone();
    logging::init(&settings.log_filter);
    if let Err(e) = loaded {
        tracing::warn!(error = %e, "failed to load settings, using defaults");
    }

    let db_path = App::resolve_database_path(None, &settings);
    let mut app = match App::with_settings(&db_path, settings_engine) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(path = %db_path.display(), error = %e, "failed to open database");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = app.startup() {
        tracing::warn!(error = %e, "startup seeding failed");
    }
    tracing::info!(path = %db_path.display(), "rpc server ready");

    let app = Mutex::new(app);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    if respond(&mut out, &ready).is_err() {
        return ExitCode::FAILURE;
    }

    let mut rate_limiter = RateLimiter::new(MAX_REQUESTS_PER_SECOND);

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                if !rate_limiter.check() {
                    json!({"id": id, "error": "rate limit exceeded"})
                } else {
                    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                    let params = req.get("params").cloned().unwrap_or(json!({}));
                    match handle_method(&app, method, &params) {
                        Ok(val) => json!({"id": id, "result": val}),
                        Err(err) => json!({"id": id, "error": err}),
                    }
                }
            }
        };

        if respond(&mut out, &response).is_err() {
            break;
        }
    }

    let app = match app.into_inner() {
        Ok(app) => app,
        Err(poisoned) => poisoned.into_inner(),
    };
    match app.shutdown() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "shutdown failed");
            ExitCode::FAILURE
        }
    }
}
