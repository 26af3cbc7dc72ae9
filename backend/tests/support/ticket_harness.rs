//! Server harness and shared world for ticket behaviour tests.
//!
//! The harness starts the production server on an ephemeral port with the
//! in-memory repository. It owns a single-threaded Tokio runtime plus a
//! `LocalSet` because Actix uses `spawn_local` internally. The
//! `WorldFixture` stops the server even if a test panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;

use actix_web::dev::ServerHandle;
use actix_web::http::{Method, header};
use actix_web::web;
use awc::Client;
use rstest::fixture;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use ticket_service::domain::TRACE_ID_HEADER;
use ticket_service::inbound::http::health::HealthState;
use ticket_service::server::{ServerConfig, create_server};

pub(crate) struct TicketWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_trace_id: Option<String>,
    pub(crate) last_cache_control: Option<String>,
    pub(crate) ticket_id: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<TicketWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(self.world.clone());
    }
}

fn shutdown(world: SharedWorld) {
    // The LocalSet must be driven on its owning thread; the future must not
    // borrow the world.
    let ctx = world.borrow();
    let server = ctx.server.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

fn spawn_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let config = ServerConfig::new(addr).with_listener(listener);

    let server = create_server(web::Data::new(HealthState::new()), config)
        .map_err(|err| err.to_string())?;
    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    let (base_url, server) = local
        .block_on(&runtime, async { spawn_server() })
        .expect("server should start");

    let world = Rc::new(RefCell::new(TicketWorld {
        runtime,
        local,
        base_url,
        server,
        last_status: None,
        last_body: None,
        last_trace_id: None,
        last_cache_control: None,
        ticket_id: None,
    }));

    WorldFixture { world }
}

struct CapturedResponse {
    status: u16,
    trace_id: Option<String>,
    cache_control: Option<String>,
    body: Option<Value>,
}

/// Send a request and record status, headers and JSON body in the world.
pub(crate) fn perform_request(
    world: &SharedWorld,
    method: Method,
    path: &str,
    payload: Option<Value>,
) {
    let path = path.to_owned();
    let captured = with_world_async(world, |base_url| async move {
        let request = Client::default().request(method, format!("{base_url}{path}"));
        let mut response = match payload {
            Some(payload) => request.send_json(&payload).await.expect("json request"),
            None => request.send().await.expect("request"),
        };
        let header_value = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };
        let status = response.status().as_u16();
        let trace_id = header_value(TRACE_ID_HEADER);
        let cache_control = header_value(header::CACHE_CONTROL.as_str());
        let bytes = response.body().await.expect("body");
        let body = serde_json::from_slice(&bytes).ok();
        CapturedResponse {
            status,
            trace_id,
            cache_control,
            body,
        }
    });

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(captured.status);
    ctx.last_trace_id = captured.trace_id;
    ctx.last_cache_control = captured.cache_control;
    ctx.last_body = captured.body;
}
