use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::sync::atomic::{AtomicU64, Ordering};

/// Request counters shared by every worker of one server.
#[derive(Debug, Default)]
pub struct RequestMetrics {
    requests_total: AtomicU64,
    errors_total: AtomicU64,
    in_flight: AtomicU64,
}

impl RequestMetrics {
    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    pub fn errors_total(&self) -> u64 {
        self.errors_total.load(Ordering::Relaxed)
    }

    pub fn in_flight(&self) -> u64 {
        self.in_flight.load(Ordering::Acquire)
    }

    fn begin(&self) -> InFlightGuard<'_> {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.in_flight.fetch_add(1, Ordering::AcqRel);
        InFlightGuard { metrics: self }
    }

    fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::Relaxed);
    }
}

// Decrements on drop so cancelled requests are not counted forever.
struct InFlightGuard<'a> {
    metrics: &'a RequestMetrics,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.metrics.in_flight.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Counts requests, 4xx/5xx responses and requests currently in flight.
pub struct RequestTracker {
    metrics: web::Data<RequestMetrics>,
}

impl RequestTracker {
    pub fn new(metrics: web::Data<RequestMetrics>) -> Self {
        Self { metrics }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestTracker
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTrackerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTrackerMiddleware {
            service,
            metrics: self.metrics.clone(),
        }))
    }
}

pub struct RequestTrackerMiddleware<S> {
    service: S,
    metrics: web::Data<RequestMetrics>,
}

impl<S, B> Service<ServiceRequest> for RequestTrackerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let metrics = self.metrics.clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let _guard = metrics.begin();
            let result = fut.await;

            let failed = match &result {
                Ok(res) => res.status().is_client_error() || res.status().is_server_error(),
                Err(_) => true,
            };
            if failed {
                metrics.record_error();
            }

            result
        })
    }
}
