//! Tracing middleware for monitoring transport traffic
//!
//! Wraps any [`WmiTransport`] and logs every method call and its outcome.
//! Useful for `--monitor` style debugging without touching the backend.

use tracing::debug;

use crate::error::WmiError;
use crate::{WmiMethod, WmiTransport};

/// Transport middleware that logs all method calls passing through it.
pub struct TraceWmi<T> {
    inner: T,
}

impl<T: WmiTransport> TraceWmi<T> {
    /// Wrap a transport with tracing middleware
    pub fn wrap(inner: T) -> Self {
        Self { inner }
    }

    /// Unwrap, returning the inner transport
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: WmiTransport> WmiTransport for TraceWmi<T> {
    fn evaluate(&self, method: WmiMethod, arg: u32) -> Result<u32, WmiError> {
        debug!("evaluate {}  IN: {:#010x}", method, arg);
        let result = self.inner.evaluate(method, arg);
        match &result {
            Ok(ret) => debug!("evaluate {}  OUT: {:#010x} (IN: {:#010x})", method, ret, arg),
            Err(e) => debug!("evaluate {} failed: {}", method, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingWmi {
        calls: Cell<u32>,
    }

    impl WmiTransport for CountingWmi {
        fn evaluate(&self, _method: WmiMethod, arg: u32) -> Result<u32, WmiError> {
            self.calls.set(self.calls.get() + 1);
            Ok(arg)
        }
    }

    #[test]
    fn trace_wrapper_is_transparent() {
        let wrapped = TraceWmi::wrap(CountingWmi {
            calls: Cell::new(0),
        });
        let ret = wrapped.evaluate(WmiMethod::SetKbLed, 0xF400_00FF).unwrap();
        assert_eq!(ret, 0xF400_00FF);
        assert_eq!(wrapped.into_inner().calls.get(), 1);
    }
}
