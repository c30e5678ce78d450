// RADOS Gateway Admin Rust Library
// Copyright 2025 rgw-admin contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use rgw_admin::admin::auth::NoAuth;
use rgw_admin::admin::client::{AdminClient, AdminClientBuilder};
use rgw_admin::admin::http::BaseUrl;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A request as received by the mock gateway
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    /// Raw query string, without the leading `?`
    pub query: String,
    pub headers: HeaderMap,
    params: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Records a request, decoding its query string as `application/x-www-form-urlencoded`.
    pub fn new(method: Method, uri: &Uri, headers: HeaderMap) -> Self {
        let params = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map(|Query(params)| params)
            .unwrap_or_default();
        Self {
            method,
            path: uri.path().to_string(),
            query: uri.query().unwrap_or_default().to_string(),
            headers,
            params,
        }
    }

    /// Decoded query parameters in order; a flag has an empty value.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<String> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    pub fn param_keys(&self) -> Vec<String> {
        self.params.iter().map(|(k, _)| k.clone()).collect()
    }
}

struct CannedResponse {
    status: StatusCode,
    body: String,
}

#[derive(Default)]
struct GatewayState {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<CannedResponse>>,
}

/// In-process HTTP server standing in for a gateway.
///
/// Answers queued responses in order, then `200` with an empty body.
/// Shuts down when dropped.
pub struct MockGateway {
    addr: SocketAddr,
    state: Arc<GatewayState>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockGateway {
    pub async fn start() -> Self {
        crate::init_logger();

        let state = Arc::new(GatewayState::default());
        let app = Router::new()
            .fallback(record_and_respond)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await
                .unwrap();
        });
        log::debug!("mock gateway listening on {addr}");

        Self {
            addr,
            state,
            shutdown: Some(tx),
        }
    }

    /// Queues the next response.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.state.responses.lock().unwrap().push_back(CannedResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.into(),
        });
        self
    }

    pub fn base_url(&self) -> BaseUrl {
        format!("http://{}", self.addr).parse().unwrap()
    }

    /// Client builder pointed at this gateway.
    pub fn client_builder(&self) -> AdminClientBuilder {
        AdminClient::builder(self.base_url())
    }

    /// Unauthenticated client pointed at this gateway.
    pub fn client(&self) -> AdminClient {
        self.client_builder().auth(NoAuth).build().unwrap()
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    /// The only request received; panics if there is not exactly one.
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

impl Drop for MockGateway {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn record_and_respond(
    State(state): State<Arc<GatewayState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest::new(method, &uri, headers));

    let canned = state.responses.lock().unwrap().pop_front();
    match canned {
        Some(CannedResponse { status, body }) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => StatusCode::OK.into_response(),
    }
}
