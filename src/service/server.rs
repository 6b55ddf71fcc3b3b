use std::net::SocketAddr;
use std::time::Instant;

use crate::effects::pipeline::Renderer;
use crate::foundation::error::{TextFxError, TextFxResult};
use crate::service::{
    config::ServiceConfig,
    router::{ServiceResponse, route},
};

/// Bound HTTP listener serving every effect endpoint.
pub struct Service {
    server: tiny_http::Server,
    renderer: Renderer,
    workers: usize,
}

impl std::fmt::Debug for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Service")
            .field("addr", &self.local_addr())
            .field("workers", &self.workers)
            .finish()
    }
}

impl Service {
    /// Bind the listener described by `config`.
    pub fn bind(config: &ServiceConfig, renderer: Renderer) -> TextFxResult<Self> {
        let addr = config.addr();
        let server = tiny_http::Server::http(&addr)
            .map_err(|e| TextFxError::resource(format!("failed to bind {addr}: {e}")))?;
        Ok(Self {
            server,
            renderer,
            workers: config.workers.max(1),
        })
    }

    /// Address actually bound, useful when the configured port was `0`.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests on the worker threads until [`Service::shutdown`] is called.
    pub fn run(&self) {
        tracing::info!(addr = ?self.local_addr(), workers = self.workers, "textfx listening");
        std::thread::scope(|scope| {
            for _ in 0..self.workers {
                scope.spawn(|| {
                    for request in self.server.incoming_requests() {
                        self.handle(request);
                    }
                });
            }
        });
        tracing::info!("textfx stopped");
    }

    /// Make every worker in [`Service::run`] return after its current request.
    pub fn shutdown(&self) {
        for _ in 0..self.workers {
            self.server.unblock();
        }
    }

    fn handle(&self, request: tiny_http::Request) {
        let started = Instant::now();
        let method = request.method().to_string();
        let url = request.url().to_owned();

        let response = route(&self.renderer, &method, &url);
        let status = response.status;
        let bytes = response.body.len();

        match request.respond(into_tiny_http(response)) {
            Ok(()) => tracing::info!(
                %method,
                %url,
                status,
                bytes,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "request"
            ),
            Err(err) => tracing::warn!(%method, %url, %err, "failed to send response"),
        }
    }
}

fn into_tiny_http(response: ServiceResponse) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let headers = response.headers();
    let mut out = tiny_http::Response::from_data(response.body).with_status_code(response.status);
    for (name, value) in headers {
        match tiny_http::Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            Ok(header) => out.add_header(header),
            Err(()) => tracing::warn!(name, "dropping invalid header"),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/service/server.rs"]
mod tests;
