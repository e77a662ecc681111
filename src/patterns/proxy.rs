//! Proxy: a stand-in that controls access to the real service. This one is
//! a virtual proxy: the real service is only built on the first request.
//!
//! Typical uses: loading heavy resources on demand, access control,
//! transparent logging or monitoring of calls.

use crate::Result;
use std::io::Write;

pub trait Service {
    fn request(&mut self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug)]
pub struct RealService {
    served: usize,
}

impl RealService {
    pub fn new() -> Self {
        tracing::debug!("constructing real service");
        Self { served: 0 }
    }

    /// Requests handled by this instance so far.
    pub fn served(&self) -> usize {
        self.served
    }
}

impl Default for RealService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service for RealService {
    fn request(&mut self, out: &mut dyn Write) -> Result<()> {
        self.served += 1;
        writeln!(out, "Request handled by Real Service.")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ProxyService {
    real: Option<RealService>,
}

impl ProxyService {
    pub fn new() -> Self {
        Self { real: None }
    }

    /// `None` until the first request.
    pub fn real_service(&self) -> Option<&RealService> {
        self.real.as_ref()
    }
}

impl Service for ProxyService {
    fn request(&mut self, out: &mut dyn Write) -> Result<()> {
        let real = self.real.get_or_insert_with(RealService::new);
        writeln!(out, "Proxy: Forwarding request to Real Service.")?;
        real.request(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut proxy = ProxyService::new();
    proxy.request(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::capture;

    const FORWARDED: [&str; 2] = [
        "Proxy: Forwarding request to Real Service.",
        "Request handled by Real Service.",
    ];

    #[test]
    fn test_real_service_is_built_lazily() {
        let mut proxy = ProxyService::new();
        assert!(proxy.real_service().is_none());

        capture(|out| proxy.request(out));
        assert_eq!(proxy.real_service().map(RealService::served), Some(1));
    }

    #[test]
    fn test_later_requests_reuse_the_instance() {
        let mut proxy = ProxyService::new();
        let first = capture(|out| proxy.request(out));
        let second = capture(|out| proxy.request(out));

        assert_eq!(first, FORWARDED);
        assert_eq!(second, FORWARDED);
        assert_eq!(proxy.real_service().map(RealService::served), Some(2));
    }

    #[test]
    fn test_proxy_through_trait_object() {
        let mut service: Box<dyn Service> = Box::new(ProxyService::new());
        assert_eq!(capture(|out| service.request(out)), FORWARDED);
    }

    #[test]
    fn test_run_output() {
        assert_eq!(capture(run), FORWARDED);
    }
}
