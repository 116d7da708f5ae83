//! Route handlers and the shared router state they receive.
//!
//! A [`Router<S>`](crate::Router) owns one state value of type `S` (for the
//! todo service, `Arc<impl TodoStore>`). Two handler shapes register on it:
//!
//! ```text
//! async fn list(store: Arc<S>, req: Request) -> impl IntoResponse   // gets a clone of the state
//! async fn ping(req: Request) -> impl IntoResponse                  // ignores it
//! ```
//!
//! Both are stored behind the same [`BoxedHandler<S>`], so a table can mix
//! them. The second type parameter of [`Handler`] only tells the two blanket
//! impls apart; callers never name it.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

#[doc(hidden)]
pub trait ErasedHandler<S> {
    fn call(&self, state: S, req: Request) -> BoxFuture;
}

/// A type-erased handler, cloned out of the route table once per request.
#[doc(hidden)]
pub type BoxedHandler<S> = Arc<dyn ErasedHandler<S> + Send + Sync + 'static>;

/// Anything that can serve a route on a `Router<S>`.
pub trait Handler<S, Shape>: Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler<S>;
}

/// Handler shapes. Unnameable outside the crate.
mod shape {
    pub struct RequestOnly;
    pub struct WithState;
}

impl<F, Fut, R, S> Handler<S, shape::RequestOnly> for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
    S: 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler<S> {
        Arc::new(RequestOnly(self))
    }
}

impl<F, Fut, R, S> Handler<S, shape::WithState> for F
where
    F: Fn(S, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
    S: 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler<S> {
        Arc::new(WithState(self))
    }
}

struct RequestOnly<F>(F);

impl<F, Fut, R, S> ErasedHandler<S> for RequestOnly<F>
where
    F: Fn(Request) -> Fut,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    fn call(&self, _state: S, req: Request) -> BoxFuture {
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}

struct WithState<F>(F);

impl<F, Fut, R, S> ErasedHandler<S> for WithState<F>
where
    F: Fn(S, Request) -> Fut,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    fn call(&self, state: S, req: Request) -> BoxFuture {
        let fut = (self.0)(state, req);
        Box::pin(async move { fut.await.into_response() })
    }
}
