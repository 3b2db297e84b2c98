//! # Client module
//!
//! This module contains the [`Client`] which drives a call from a [`Target`]
//! to a typed result, and the [`ClientBuilder`] used to configure it.
//!
//! A call walks through these states:
//! building, preparing, sending, classifying, decoding and notifying. It
//! ends either with a value or with exactly one error mapped through the
//! client's [`DomainErrorMapper`].

use std::sync::Arc;

use futures::{select_biased, FutureExt};
use log::{debug, warn};

use crate::{
    core::{
        CallOutcome, CancellationTask, Deserializer, DomainErrorMapper, PipelineError,
        PipelineErrorMapper, Plugin, Target, Transport, TransportResponse,
    },
    dx::{
        build_request,
        classifier::{classify_decode_failure, classify_failure, classify_status},
        PluginManager,
    },
    providers::deserialization_serde::DeserializerSerde,
};

#[cfg(feature = "reqwest")]
use crate::transport::TransportReqwest;

/// Request pipeline client.
///
/// The client owns a [`Transport`] which performs the exchange, a
/// [`Deserializer`] for model responses, a [`DomainErrorMapper`] which turns
/// failures into the caller's error type, and an ordered plugin list.
///
/// Cloning is cheap: clones share the same configuration.
///
/// # Examples
/// ```no_run
/// use netpipe::dx::{ClientBuilder, EndpointBuilder};
///
/// #[derive(serde::Deserialize)]
/// struct Item {
///     name: String,
/// }
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ClientBuilder::with_reqwest_transport().build();
/// let endpoint = EndpointBuilder::default()
///     .base_url("https://api.example.com")
///     .path("/items/1")
///     .build()?;
///
/// let item: Item = client.request_model(&endpoint).await?;
/// println!("{}", item.name);
/// # Ok(())
/// # }
/// ```
pub struct Client<T, D, M> {
    inner: Arc<ClientRef<T, D, M>>,
}

struct ClientRef<T, D, M> {
    transport: T,
    deserializer: D,
    error_mapper: M,
    plugins: PluginManager,
}

impl<T, D, M> Clone for Client<T, D, M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, D, M> std::fmt::Debug for Client<T, D, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("plugins", &self.inner.plugins)
            .finish()
    }
}

impl<T, D, M> Client<T, D, M>
where
    T: Transport,
    D: Deserializer,
    M: DomainErrorMapper,
{
    /// Perform the call described by `target` and discard the response body.
    pub async fn request(&self, target: &dyn Target) -> Result<(), M::Error> {
        self.run(target, None, |_| Ok(())).await
    }

    /// Same as [`request`](Self::request), abandoned once `cancel_task`
    /// fires.
    pub async fn request_with_cancel(
        &self,
        target: &dyn Target,
        cancel_task: CancellationTask,
    ) -> Result<(), M::Error> {
        self.run(target, Some(cancel_task), |_| Ok(())).await
    }

    /// Perform the call described by `target` and return the raw response
    /// body.
    ///
    /// An absent body is returned as an empty vector.
    pub async fn request_data(&self, target: &dyn Target) -> Result<Vec<u8>, M::Error> {
        self.run(target, None, |response| Ok(response.data().to_vec()))
            .await
    }

    /// Same as [`request_data`](Self::request_data), abandoned once
    /// `cancel_task` fires.
    pub async fn request_data_with_cancel(
        &self,
        target: &dyn Target,
        cancel_task: CancellationTask,
    ) -> Result<Vec<u8>, M::Error> {
        self.run(target, Some(cancel_task), |response| {
            Ok(response.data().to_vec())
        })
        .await
    }

    /// Perform the call described by `target` and decode the response body
    /// into `Model`.
    pub async fn request_model<Model>(&self, target: &dyn Target) -> Result<Model, M::Error>
    where
        Model: for<'de> serde::Deserialize<'de>,
    {
        self.run(target, None, |response| self.decode(response))
            .await
    }

    /// Same as [`request_model`](Self::request_model), abandoned once
    /// `cancel_task` fires.
    pub async fn request_model_with_cancel<Model>(
        &self,
        target: &dyn Target,
        cancel_task: CancellationTask,
    ) -> Result<Model, M::Error>
    where
        Model: for<'de> serde::Deserialize<'de>,
    {
        self.run(target, Some(cancel_task), |response| self.decode(response))
            .await
    }

    /// Perform the call described by `target`, decode the response body into
    /// `Entity` and convert it with `mapper`.
    ///
    /// `mapper` runs only after a successful decode and after plugins have
    /// been notified.
    pub async fn request_mapped_model<Entity, Model, F>(
        &self,
        target: &dyn Target,
        mapper: F,
    ) -> Result<Model, M::Error>
    where
        Entity: for<'de> serde::Deserialize<'de>,
        F: FnOnce(Entity) -> Model,
    {
        self.request_model::<Entity>(target).await.map(mapper)
    }

    /// Same as [`request_mapped_model`](Self::request_mapped_model),
    /// abandoned once `cancel_task` fires.
    pub async fn request_mapped_model_with_cancel<Entity, Model, F>(
        &self,
        target: &dyn Target,
        cancel_task: CancellationTask,
        mapper: F,
    ) -> Result<Model, M::Error>
    where
        Entity: for<'de> serde::Deserialize<'de>,
        F: FnOnce(Entity) -> Model,
    {
        self.request_model_with_cancel::<Entity>(target, cancel_task)
            .await
            .map(mapper)
    }

    fn decode<Model>(&self, response: &TransportResponse) -> Result<Model, PipelineError>
    where
        Model: for<'de> serde::Deserialize<'de>,
    {
        self.inner
            .deserializer
            .deserialize(response.data())
            .map_err(|err| classify_decode_failure(err, response))
    }

    async fn run<R, F>(
        &self,
        target: &dyn Target,
        cancel_task: Option<CancellationTask>,
        decode: F,
    ) -> Result<R, M::Error>
    where
        F: FnOnce(&TransportResponse) -> Result<R, PipelineError>,
    {
        self.execute(target, cancel_task, decode)
            .await
            .map_err(|err| {
                warn!("Call to {target:?} failed: {err}");
                self.inner.error_mapper.map_error(err)
            })
    }

    async fn execute<R, F>(
        &self,
        target: &dyn Target,
        cancel_task: Option<CancellationTask>,
        decode: F,
    ) -> Result<R, PipelineError>
    where
        F: FnOnce(&TransportResponse) -> Result<R, PipelineError>,
    {
        debug!("Building request for {target:?}");
        let request = build_request(target)?;

        // From here on plugins hear about the outcome, even if the call is
        // abandoned.
        let notifier = OutcomeNotifier::new(&self.inner.plugins, target);
        let call = self.dispatch(request, target, decode);

        let result = match cancel_task {
            Some(cancel_task) => select_biased! {
                _ = cancel_task.wait_for_cancel().fuse() => {
                    debug!("Call to {target:?} cancelled");
                    Err(PipelineError::ServiceCancelled)
                },
                result = call.fuse() => result,
            },
            None => call.await,
        };

        match result {
            Ok((response, value)) => {
                notifier.resolve(&Ok(response));
                Ok(value)
            }
            Err(err) => {
                notifier.resolve(&Err(err.clone()));
                Err(err)
            }
        }
    }

    async fn dispatch<R, F>(
        &self,
        request: crate::core::TransportRequest,
        target: &dyn Target,
        decode: F,
    ) -> Result<(TransportResponse, R), PipelineError>
    where
        F: FnOnce(&TransportResponse) -> Result<R, PipelineError>,
    {
        let plugins = &self.inner.plugins;

        debug!("Preparing {} {}", request.method, request.url);
        let request = plugins.prepare(request, target).await;
        plugins.will_send(&request, target);

        debug!("Sending {} {}", request.method, request.url);
        let response = self
            .inner
            .transport
            .send(request)
            .await
            .map_err(classify_failure)?;

        debug!("Classifying response with status {}", response.status);
        if let Some(err) = classify_status(&response) {
            return Err(err);
        }

        let value = decode(&response)?;
        Ok((response, value))
    }
}

/// Delivers the call outcome to plugins exactly once.
///
/// Dropped without being resolved (the call future was dropped mid-flight),
/// it reports the call as cancelled.
struct OutcomeNotifier<'call> {
    plugins: &'call PluginManager,
    target: &'call dyn Target,
    resolved: bool,
}

impl<'call> OutcomeNotifier<'call> {
    fn new(plugins: &'call PluginManager, target: &'call dyn Target) -> Self {
        Self {
            plugins,
            target,
            resolved: false,
        }
    }

    fn resolve(mut self, outcome: &CallOutcome) {
        self.resolved = true;
        self.plugins.did_receive(outcome, self.target);
    }
}

impl Drop for OutcomeNotifier<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            debug!("Call to {:?} dropped before completion", self.target);
            self.plugins
                .did_receive(&Err(PipelineError::ServiceCancelled), self.target);
        }
    }
}

/// Configures and creates a [`Client`].
///
/// Starts from a transport (see [`with_transport`](Self::with_transport))
/// with [`DeserializerSerde`] and [`PipelineErrorMapper`] in place; both can
/// be swapped out before calling [`build`](Self::build).
///
/// # Examples
/// ```
/// use netpipe::{
///     core::{PipelineError, Transport, TransportFailure, TransportRequest, TransportResponse},
///     dx::ClientBuilder,
/// };
///
/// # struct MyTransport;
/// # #[async_trait::async_trait]
/// # impl Transport for MyTransport {
/// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, TransportFailure> {
/// #         unimplemented!()
/// #     }
/// # }
/// #[derive(Debug)]
/// enum AppError {
///     Offline,
///     Other(String),
/// }
///
/// let client = ClientBuilder::with_transport(MyTransport)
///     .with_error_mapper(|error: PipelineError| match error {
///         PipelineError::NotConnectedToInternet => AppError::Offline,
///         other => AppError::Other(other.to_string()),
///     })
///     .build();
/// ```
pub struct ClientBuilder<T, D = DeserializerSerde, M = PipelineErrorMapper> {
    transport: T,
    deserializer: D,
    error_mapper: M,
    plugins: Vec<Arc<dyn Plugin>>,
}

impl<T> ClientBuilder<T>
where
    T: Transport,
{
    /// Start configuring a client which sends calls through `transport`.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            deserializer: DeserializerSerde,
            error_mapper: PipelineErrorMapper,
            plugins: Vec::new(),
        }
    }
}

impl<T, D, M> std::fmt::Debug for ClientBuilder<T, D, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("plugins", &self.plugins.len())
            .finish()
    }
}

#[cfg(feature = "reqwest")]
impl ClientBuilder<TransportReqwest> {
    /// Start configuring a client backed by [`TransportReqwest`].
    pub fn with_reqwest_transport() -> Self {
        Self::with_transport(TransportReqwest::new())
    }
}

impl<T, D, M> ClientBuilder<T, D, M> {
    /// Replace the response body deserializer.
    pub fn with_deserializer<D2>(self, deserializer: D2) -> ClientBuilder<T, D2, M>
    where
        D2: Deserializer,
    {
        ClientBuilder {
            transport: self.transport,
            deserializer,
            error_mapper: self.error_mapper,
            plugins: self.plugins,
        }
    }

    /// Replace the mapper which turns [`PipelineError`] into the caller's
    /// error type.
    pub fn with_error_mapper<M2>(self, error_mapper: M2) -> ClientBuilder<T, D, M2>
    where
        M2: DomainErrorMapper,
    {
        ClientBuilder {
            transport: self.transport,
            deserializer: self.deserializer,
            error_mapper,
            plugins: self.plugins,
        }
    }

    /// Append `plugin` to the plugin list.
    ///
    /// Plugins run in the order they were added.
    pub fn with_plugin<P>(self, plugin: P) -> Self
    where
        P: Plugin + 'static,
    {
        self.with_shared_plugin(Arc::new(plugin))
    }

    /// Append a plugin which is shared with other owners.
    pub fn with_shared_plugin(mut self, plugin: Arc<dyn Plugin>) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Create the [`Client`].
    pub fn build(self) -> Client<T, D, M> {
        debug!("Creating client with {} plugin(s)", self.plugins.len());

        Client {
            inner: Arc::new(ClientRef {
                transport: self.transport,
                deserializer: self.deserializer,
                error_mapper: self.error_mapper,
                plugins: PluginManager::new(self.plugins),
            }),
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::{
        core::{
            cancellation, PluginScope, TransportFailure, TransportMethod, TransportRequest,
        },
        dx::{Endpoint, EndpointBuilder},
    };
    use std::{
        collections::HashMap,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Mutex,
        },
    };
    use test_case::test_case;

    #[derive(Default)]
    struct MockTransport {
        status: u16,
        body: Option<Vec<u8>>,
        failure: Option<TransportFailure>,
        sent: Mutex<Vec<TransportRequest>>,
    }

    impl MockTransport {
        fn responding(status: u16, body: &str) -> Self {
            Self {
                status,
                body: Some(body.as_bytes().to_vec()),
                ..Default::default()
            }
        }

        fn failing(failure: TransportFailure) -> Self {
            Self {
                failure: Some(failure),
                ..Default::default()
            }
        }
    }

    #[async_trait::async_trait]
    impl Transport for MockTransport {
        async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportFailure> {
            self.sent.lock().unwrap().push(request);

            if let Some(failure) = &self.failure {
                return Err(failure.clone());
            }

            Ok(TransportResponse {
                status: self.status,
                headers: HashMap::new(),
                body: self.body.clone(),
            })
        }
    }

    /// Transport which never answers.
    struct HangingTransport;

    #[async_trait::async_trait]
    impl Transport for HangingTransport {
        async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, TransportFailure> {
            futures::future::pending().await
        }
    }

    #[derive(Default)]
    struct Journal {
        prepared: AtomicUsize,
        sent: AtomicUsize,
        outcomes: Mutex<Vec<CallOutcome>>,
    }

    impl Journal {
        fn outcomes(&self) -> Vec<CallOutcome> {
            self.outcomes.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Plugin for Journal {
        async fn prepare(&self, mut request: TransportRequest, _target: &dyn Target) -> TransportRequest {
            self.prepared.fetch_add(1, Ordering::SeqCst);
            request.headers.insert("X-Prepared".into(), "yes".into());
            request
        }

        fn will_send(&self, _request: &TransportRequest, _target: &dyn Target) {
            self.sent.fetch_add(1, Ordering::SeqCst);
        }

        fn did_receive(&self, outcome: &CallOutcome, _target: &dyn Target) {
            self.outcomes.lock().unwrap().push(outcome.clone());
        }
    }

    #[derive(Debug, serde::Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    fn endpoint() -> Endpoint {
        EndpointBuilder::default()
            .base_url("https://host")
            .path("/items")
            .build()
            .unwrap()
    }

    fn client<T: Transport>(
        transport: T,
        journal: &Arc<Journal>,
    ) -> Client<T, DeserializerSerde, PipelineErrorMapper> {
        ClientBuilder::with_transport(transport)
            .with_shared_plugin(journal.clone())
            .build()
    }

    #[tokio::test]
    async fn decode_model_and_notify_plugins() {
        let journal = Arc::new(Journal::default());
        let client = client(MockTransport::responding(200, r#"{"name":"abc"}"#), &journal);

        let item: Item = client.request_model(&endpoint()).await.unwrap();

        assert_eq!(item.name, "abc");
        assert_eq!(journal.prepared.load(Ordering::SeqCst), 1);
        assert_eq!(journal.sent.load(Ordering::SeqCst), 1);
        assert!(matches!(
            journal.outcomes().as_slice(),
            [Ok(TransportResponse { status: 200, .. })]
        ));
    }

    #[tokio::test]
    async fn send_prepared_request() {
        let journal = Arc::new(Journal::default());
        let transport = MockTransport::responding(204, "");
        let client = ClientBuilder::with_transport(transport)
            .with_shared_plugin(journal.clone())
            .build();

        client.request(&endpoint()).await.unwrap();

        let sent = client.inner.transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "https://host/items");
        assert_eq!(sent[0].method, TransportMethod::Get);
        assert_eq!(sent[0].header("x-prepared"), Some("yes"));
    }

    #[tokio::test]
    async fn return_raw_body() {
        let journal = Arc::new(Journal::default());
        let client = client(MockTransport::responding(200, "plain"), &journal);

        assert_eq!(client.request_data(&endpoint()).await.unwrap(), b"plain");
    }

    #[tokio::test]
    async fn return_empty_data_for_absent_body() {
        let journal = Arc::new(Journal::default());
        let transport = MockTransport {
            status: 204,
            ..Default::default()
        };

        assert!(client(transport, &journal)
            .request_data(&endpoint())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn map_model_after_decoding() {
        let journal = Arc::new(Journal::default());
        let client = client(MockTransport::responding(200, r#"{"name":"abc"}"#), &journal);

        let name = client
            .request_mapped_model(&endpoint(), |item: Item| item.name.to_uppercase())
            .await
            .unwrap();

        assert_eq!(name, "ABC");
    }

    #[test_case(401, "Unauthorized"; "unauthorized")]
    #[test_case(403, "Forbidden"; "forbidden")]
    #[test_case(404, "Not found"; "not found")]
    #[test_case(422, "Client error: status 422"; "client error")]
    #[test_case(503, "Server error: status 503"; "server error")]
    #[tokio::test]
    async fn fail_on_error_status(status: u16, message: &str) {
        let journal = Arc::new(Journal::default());
        let client = client(MockTransport::responding(status, "{}"), &journal);

        let err = client.request(&endpoint()).await.unwrap_err();

        assert_eq!(err.to_string(), message);
        assert_eq!(err.status(), Some(status));
        assert_eq!(journal.outcomes(), vec![Err(err)]);
    }

    #[tokio::test]
    async fn accept_any_status_below_400() {
        let journal = Arc::new(Journal::default());
        let client = client(MockTransport::responding(304, ""), &journal);

        assert!(client.request(&endpoint()).await.is_ok());
    }

    #[test_case(TransportFailure::Cancelled, PipelineError::ServiceCancelled; "cancelled")]
    #[test_case(
        TransportFailure::NotConnected { details: "offline".into() },
        PipelineError::NotConnectedToInternet;
        "offline"
    )]
    #[tokio::test]
    async fn classify_transport_failures(failure: TransportFailure, expected: PipelineError) {
        let journal = Arc::new(Journal::default());
        let client = client(MockTransport::failing(failure), &journal);

        let err = client.request(&endpoint()).await.unwrap_err();

        assert_eq!(err, expected);
        assert_eq!(journal.outcomes(), vec![Err(expected)]);
    }

    #[tokio::test]
    async fn report_timeouts_as_unexpected() {
        let journal = Arc::new(Journal::default());
        let client = client(
            MockTransport::failing(TransportFailure::TimedOut {
                details: "60s".into(),
            }),
            &journal,
        );

        assert!(matches!(
            client.request(&endpoint()).await,
            Err(PipelineError::Unexpected { .. })
        ));
    }

    #[tokio::test]
    async fn attach_response_to_decoding_failures() {
        let journal = Arc::new(Journal::default());
        let client = client(MockTransport::responding(200, "not json"), &journal);

        let err = client.request_model::<Item>(&endpoint()).await.unwrap_err();

        assert!(matches!(err, PipelineError::Decoding { .. }));
        assert_eq!(err.transport_response().map(|r| r.data()), Some(&b"not json"[..]));
        assert_eq!(journal.outcomes(), vec![Err(err)]);
    }

    #[tokio::test]
    async fn skip_plugins_when_request_cannot_be_built() {
        let journal = Arc::new(Journal::default());
        let transport = MockTransport::responding(200, "");
        let client = client(transport, &journal);

        #[derive(Debug)]
        struct NoBaseUrl;

        impl Target for NoBaseUrl {
            fn base_url(&self) -> &str {
                ""
            }

            fn method(&self) -> TransportMethod {
                TransportMethod::Get
            }

            fn body(&self) -> crate::core::BodyStrategy {
                crate::core::BodyStrategy::Empty
            }
        }

        assert!(matches!(
            client.request(&NoBaseUrl).await,
            Err(PipelineError::Unexpected { .. })
        ));
        assert_eq!(journal.prepared.load(Ordering::SeqCst), 0);
        assert!(journal.outcomes().is_empty());
        assert!(client.inner.transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn map_errors_once_into_domain_type() {
        let journal = Arc::new(Journal::default());
        let mapped = Arc::new(AtomicUsize::new(0));
        let counter = mapped.clone();
        let client = ClientBuilder::with_transport(MockTransport::responding(404, ""))
            .with_shared_plugin(journal.clone())
            .with_error_mapper(move |error: PipelineError| {
                counter.fetch_add(1, Ordering::SeqCst);
                error.status()
            })
            .build();

        assert_eq!(client.request(&endpoint()).await, Err(Some(404)));
        assert_eq!(mapped.load(Ordering::SeqCst), 1);
        assert_eq!(journal.outcomes().len(), 1);
    }

    #[tokio::test]
    async fn notify_cancellation_once() {
        let journal = Arc::new(Journal::default());
        let client = client(HangingTransport, &journal);
        let (canceller, cancel_task) = cancellation();

        let call = tokio::spawn({
            let client = client.clone();
            async move {
                client
                    .request_with_cancel(&endpoint(), cancel_task)
                    .await
            }
        });
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        canceller.cancel();
        canceller.cancel();

        assert_eq!(call.await.unwrap(), Err(PipelineError::ServiceCancelled));
        assert_eq!(journal.outcomes(), vec![Err(PipelineError::ServiceCancelled)]);
    }

    #[tokio::test]
    async fn not_send_when_cancelled_up_front() {
        let journal = Arc::new(Journal::default());
        let client = client(MockTransport::responding(200, ""), &journal);
        let (canceller, cancel_task) = cancellation();
        canceller.cancel();

        let result = client.request_data_with_cancel(&endpoint(), cancel_task).await;

        assert_eq!(result, Err(PipelineError::ServiceCancelled));
        assert_eq!(journal.prepared.load(Ordering::SeqCst), 0);
        assert!(client.inner.transport.sent.lock().unwrap().is_empty());
        assert_eq!(journal.outcomes(), vec![Err(PipelineError::ServiceCancelled)]);
    }

    #[tokio::test]
    async fn complete_when_canceller_is_dropped() {
        let journal = Arc::new(Journal::default());
        let client = client(MockTransport::responding(200, r#"{"name":"x"}"#), &journal);
        let (canceller, cancel_task) = cancellation();
        drop(canceller);

        let item = client
            .request_model_with_cancel::<Item>(&endpoint(), cancel_task)
            .await
            .unwrap();

        assert_eq!(item.name, "x");
    }

    #[tokio::test]
    async fn notify_cancellation_when_call_is_dropped() {
        let journal = Arc::new(Journal::default());
        let client = client(HangingTransport, &journal);

        let endpoint = endpoint();
        let call = client.request(&endpoint);
        let outcome = tokio::time::timeout(std::time::Duration::from_millis(20), call).await;

        assert!(outcome.is_err());
        assert_eq!(journal.outcomes(), vec![Err(PipelineError::ServiceCancelled)]);
    }

    #[tokio::test]
    async fn respect_plugin_scopes() {
        let journal = Arc::new(Journal::default());
        let scoped = Arc::new(Journal::default());

        struct Scoped(Arc<Journal>);

        #[async_trait::async_trait]
        impl Plugin for Scoped {
            fn scopes(&self) -> Vec<PluginScope> {
                vec![PluginScope::new("auth")]
            }

            fn did_receive(&self, outcome: &CallOutcome, target: &dyn Target) {
                self.0.did_receive(outcome, target);
            }
        }

        let client = ClientBuilder::with_transport(MockTransport::responding(200, ""))
            .with_shared_plugin(journal.clone())
            .with_plugin(Scoped(scoped.clone()))
            .build();

        client.request(&endpoint()).await.unwrap();

        assert_eq!(journal.outcomes().len(), 1);
        assert!(scoped.outcomes().is_empty());
    }
}
